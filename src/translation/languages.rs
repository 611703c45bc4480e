// Language name and style lookup tables
// Author: kelexine (https://github.com/kelexine)
//
// Tables are compile-time phf maps; lookups that miss go through the named
// fallback functions below rather than ad-hoc defaults at the call site.

use phf::phf_map;

/// Human-readable names for known language identifiers.
static LANGUAGE_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "auto" => "Auto-detect",
    "japanese" => "Japanese",
    "english" => "English",
    "french" => "French",
    "korean" => "Korean",
    "chinese" => "Chinese",
};

static JAPANESE_STYLES: phf::Map<&'static str, &'static str> = phf_map! {
    "casual" => "Use casual Japanese (タメ口) as spoken between close friends.",
    "polite" => "Use polite Japanese in です/ます form.",
    "academic" => "Use formal academic Japanese in である form, as in a research paper.",
    "kansai" => "Use the Kansai dialect (関西弁) naturally throughout.",
};

const JAPANESE_DEFAULT_STYLE: &str = "Use standard Japanese.";

static ENGLISH_STYLES: phf::Map<&'static str, &'static str> = phf_map! {
    "american" => "Use American English spelling, vocabulary and expressions.",
    "british" => "Use British English spelling, vocabulary and expressions.",
    "middle_school" => "Use simple English that a middle school student can easily understand.",
};

const CHINESE_TRADITIONAL_STYLE: &str =
    "Write the translation in Traditional Chinese characters (繁體字), not Simplified Chinese.";
const CHINESE_SIMPLIFIED_STYLE: &str =
    "Write the translation in Simplified Chinese characters (简体字), not Traditional Chinese.";

/// Resolve a language identifier to its display name.
pub fn language_name(identifier: &str) -> String {
    LANGUAGE_NAMES
        .get(identifier)
        .map(|name| name.to_string())
        .unwrap_or_else(|| capitalize_first(identifier))
}

/// Fallback for unknown language identifiers: upper-case the first character.
pub fn capitalize_first(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Style table lookup for a target language. Returns an empty string when the
/// target has no guidance for `style`.
pub fn style_description(target_language: &str, style: &str) -> &'static str {
    match target_language {
        "japanese" => JAPANESE_STYLES
            .get(style)
            .copied()
            .unwrap_or(JAPANESE_DEFAULT_STYLE),
        "english" => ENGLISH_STYLES.get(style).copied().unwrap_or_else(unmatched_style),
        "chinese" if style == "traditional" => CHINESE_TRADITIONAL_STYLE,
        "chinese" => CHINESE_SIMPLIFIED_STYLE,
        _ => unmatched_style(),
    }
}

/// Fallback for styles with no table entry: no instruction is emitted.
pub fn unmatched_style() -> &'static str {
    ""
}
