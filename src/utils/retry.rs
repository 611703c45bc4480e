// Bounded retry combinator
// Author: kelexine (https://github.com/kelexine)

use backoff::backoff::Backoff;
use std::time::Duration;
use tracing::debug;

/// Pause used when the backoff schedule runs dry.
const FALLBACK_DELAY: Duration = Duration::from_millis(500);

/// Execute `operation` up to `max_attempts` times.
/// - Only failures accepted by `is_retryable` are retried
/// - The pause between attempts comes from `backoff`
/// - The last failure is returned unchanged once attempts run out
pub async fn with_retry<F, Fut, T, E, P, B>(
    operation_name: &str,
    max_attempts: u32,
    is_retryable: P,
    mut backoff: B,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    P: Fn(&E) -> bool,
    B: Backoff,
    E: std::fmt::Display,
{
    let mut attempt = 0;

    loop {
        attempt += 1;

        match operation().await {
            Ok(result) => {
                if attempt > 1 {
                    debug!("{} succeeded on attempt {}", operation_name, attempt);
                }
                return Ok(result);
            }
            Err(error) => {
                if !is_retryable(&error) || attempt >= max_attempts {
                    return Err(error);
                }

                let delay = backoff.next_backoff().unwrap_or(FALLBACK_DELAY);
                debug!(
                    "{} failed (attempt {}): {}, retrying after {}ms",
                    operation_name,
                    attempt,
                    error,
                    delay.as_millis()
                );

                tokio::time::sleep(delay).await;
            }
        }
    }
}
