// CLI module for honyaku
// Author: kelexine (https://github.com/kelexine)

use clap::Parser;
use std::path::PathBuf;

/// honyaku - structured LLM translation service
#[derive(Parser, Debug)]
#[command(name = "honyaku", version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML config file (default: ~/.honyaku/config.toml)
    #[arg(long, env = "HONYAKU_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the bind address from the config file
    #[arg(long)]
    pub host: Option<String>,

    /// Override the listening port from the config file
    #[arg(long)]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides() {
        let args = Args::parse_from(["honyaku", "--config", "/tmp/h.toml", "--port", "9090"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/h.toml")));
        assert_eq!(args.port, Some(9090));
        assert!(args.host.is_none());
    }
}
