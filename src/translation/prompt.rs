// Prompt composition (request options → chat turns)
// Author: kelexine (https://github.com/kelexine)

use super::languages::{language_name, style_description};
use super::validate::ValidatedRequest;
use crate::models::ConversationTurn;
use tracing::debug;

/// Output schema family the model is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Japanese target with source detection: `detected_source` + `translation`.
    JapaneseDetected,
    /// Japanese target with a known source: `translation` only.
    JapaneseDirect,
    /// Any other target: `translation` + `katakana` + `ruby_text`.
    Annotated,
}

/// How the style line is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleSource<'a> {
    Custom(&'a str),
    Table { target: &'a str, style: &'a str },
}

/// Classification of a request that drives every instruction line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptProfile<'a> {
    pub source_name: String,
    pub target_name: String,
    pub detect_source: bool,
    pub format: OutputFormat,
    pub literal: bool,
    pub style: StyleSource<'a>,
}

impl<'a> PromptProfile<'a> {
    pub fn classify(request: &ValidatedRequest<'a>) -> Self {
        let detect_source = request.source_language == "auto";
        let format = match (request.target_language == "japanese", detect_source) {
            (true, true) => OutputFormat::JapaneseDetected,
            (true, false) => OutputFormat::JapaneseDirect,
            (false, _) => OutputFormat::Annotated,
        };
        let style = if request.style == "custom" && !request.custom_prompt.trim().is_empty() {
            StyleSource::Custom(request.custom_prompt)
        } else {
            StyleSource::Table {
                target: request.target_language,
                style: request.style,
            }
        };

        Self {
            source_name: language_name(request.source_language),
            target_name: language_name(request.target_language),
            detect_source,
            format,
            literal: request.is_literal,
            style,
        }
    }
}

/// Sample phrase and expected reply used as a one-shot example for
/// [`OutputFormat::Annotated`] targets.
pub const EXAMPLE_INPUT: &str = "ありがとうございます";
pub const EXAMPLE_OUTPUT: &str =
    r#"{"translation": "Thank you very much", "katakana": "サンキュー ベリー マッチ", "ruby_text": "Thank{サンク} you{ユー} very{ベリー} much{マッチ}"}"#;

pub fn role_statement(profile: &PromptProfile<'_>) -> String {
    if profile.detect_source {
        format!(
            "You are a professional translator. First detect the language of the input text, then translate it into {}.",
            profile.target_name
        )
    } else {
        format!(
            "You are a professional {}-to-{} translator. Translate the input text into {}.",
            profile.source_name, profile.target_name, profile.target_name
        )
    }
}

pub fn format_instruction(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::JapaneseDetected => {
            r#"Respond only with a JSON object with exactly two keys: "detected_source" (the name of the detected input language in English) and "translation" (the translated text)."#
        }
        OutputFormat::JapaneseDirect => {
            r#"Respond only with a JSON object with exactly one key: "translation" (the translated text)."#
        }
        OutputFormat::Annotated => {
            r#"Respond only with a single-line JSON object with the keys "translation" (the translated text), "katakana" (the pronunciation of the whole translation written in Japanese katakana) and "ruby_text" (the translation with each word followed by its katakana pronunciation in braces, in the form word{pronunciation}, e.g. Hello{ハロー} world{ワールド}). Do not output any reasoning, explanation or text outside the JSON object."#
        }
    }
}

pub fn mode_instruction(literal: bool) -> &'static str {
    if literal {
        "Translate strictly literally: preserve the structure and nuance of the source text as closely as possible, even if the result sounds unnatural."
    } else {
        "Translate naturally: prioritize natural flow, idiomatic expressions and vocabulary appropriate to the context."
    }
}

pub fn style_instruction(style: &StyleSource<'_>) -> String {
    match style {
        StyleSource::Custom(prompt) => format!("Special Instruction: {}", prompt),
        StyleSource::Table { target, style } => style_description(target, style).to_string(),
    }
}

/// Join the instruction lines in fixed order: role, format, mode, style.
pub fn compose_system_prompt(profile: &PromptProfile<'_>) -> String {
    let role = role_statement(profile);
    let style = style_instruction(&profile.style);
    let lines = [
        role.as_str(),
        format_instruction(profile.format),
        mode_instruction(profile.literal),
        style.as_str(),
    ];

    lines
        .iter()
        .filter(|line| !line.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the outbound conversation for a validated request.
pub fn compose_turns(request: &ValidatedRequest<'_>) -> Vec<ConversationTurn> {
    let profile = PromptProfile::classify(request);
    let mut turns = vec![ConversationTurn::system(compose_system_prompt(&profile))];

    // The example reply uses the annotated schema, which would mislead a Japanese target.
    if request.target_language != "japanese" {
        turns.push(ConversationTurn::user(EXAMPLE_INPUT));
        turns.push(ConversationTurn::assistant(EXAMPLE_OUTPUT));
    }

    turns.push(ConversationTurn::user(request.text));

    debug!(
        "Composed {} turns (format={:?}, literal={}, detect_source={})",
        turns.len(),
        profile.format,
        profile.literal,
        profile.detect_source
    );

    turns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, TranslationRequest};
    use crate::translation::validate::validate;

    fn system_prompt(req: &TranslationRequest) -> String {
        let v = validate(req).unwrap();
        compose_system_prompt(&PromptProfile::classify(&v))
    }

    #[test]
    fn test_auto_source_asks_for_detection() {
        let prompt = system_prompt(&TranslationRequest::new("hola").target("english"));
        assert!(prompt.starts_with("You are a professional translator. First detect"));
        assert!(prompt.contains("into English."));
    }

    #[test]
    fn test_direct_role_uses_resolved_names() {
        let prompt =
            system_prompt(&TranslationRequest::new("x").source("german").target("korean"));
        assert!(prompt.starts_with("You are a professional German-to-Korean translator."));
    }

    #[test]
    fn test_format_selection() {
        let v_req = TranslationRequest::new("x").target("japanese");
        let v = validate(&v_req).unwrap();
        assert_eq!(PromptProfile::classify(&v).format, OutputFormat::JapaneseDetected);

        let d_req = TranslationRequest::new("x").target("japanese").source("english");
        let d = validate(&d_req).unwrap();
        assert_eq!(PromptProfile::classify(&d).format, OutputFormat::JapaneseDirect);

        let a_req = TranslationRequest::new("x").target("french").source("japanese");
        let a = validate(&a_req).unwrap();
        assert_eq!(PromptProfile::classify(&a).format, OutputFormat::Annotated);
    }

    #[test]
    fn test_annotated_format_forbids_reasoning_and_defines_ruby() {
        let text = format_instruction(OutputFormat::Annotated);
        assert!(text.contains("single-line JSON"));
        assert!(text.contains("word{pronunciation}"));
        assert!(text.contains("Do not output any reasoning"));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_line_order_and_skipped_empty_style() {
        let prompt =
            system_prompt(&TranslationRequest::new("x").target("english").style("standard"));
        let lines: Vec<&str> = prompt.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("You are"));
        assert!(lines[1].starts_with("Respond only"));
        assert!(lines[2].starts_with("Translate naturally"));
    }

    #[test]
    fn test_literal_mode() {
        let prompt = system_prompt(&TranslationRequest::new("x").literal(true));
        assert!(prompt.contains("strictly literally"));
        assert!(!prompt.contains("Translate naturally"));
    }

    #[test]
    fn test_style_lines() {
        let jp = system_prompt(&TranslationRequest::new("x").target("japanese").style("polite"));
        assert!(jp.lines().last().unwrap().contains("です/ます"));

        let zh = system_prompt(&TranslationRequest::new("x").target("chinese"));
        assert!(zh.lines().last().unwrap().contains("Simplified Chinese characters"));
    }

    #[test]
    fn test_custom_style_replaces_table() {
        let prompt = system_prompt(
            &TranslationRequest::new("x")
                .target("japanese")
                .style("custom")
                .custom_prompt("Sound like a samurai"),
        );
        assert_eq!(
            prompt.lines().last().unwrap(),
            "Special Instruction: Sound like a samurai"
        );
        assert!(!prompt.contains("standard Japanese"));
    }

    #[test]
    fn test_custom_prompt_kept_verbatim() {
        let prompt = system_prompt(
            &TranslationRequest::new("x")
                .target("english")
                .style("custom")
                .custom_prompt("  Be brief  "),
        );
        assert!(prompt.ends_with("\nSpecial Instruction:   Be brief  "));
    }

    #[test]
    fn test_custom_style_without_prompt_falls_back() {
        let prompt = system_prompt(
            &TranslationRequest::new("x")
                .target("japanese")
                .style("custom")
                .custom_prompt("  "),
        );
        assert!(prompt.ends_with("Use standard Japanese."));
    }

    #[test]
    fn test_custom_prompt_ignored_for_other_styles() {
        let prompt =
            system_prompt(&TranslationRequest::new("x").style("british").custom_prompt("ignored"));
        assert!(!prompt.contains("ignored"));
        assert!(prompt.contains("British English"));
    }

    #[test]
    fn test_determinism_excludes_user_text() {
        let a = system_prompt(
            &TranslationRequest::new("first")
                .target("chinese")
                .style("traditional"),
        );
        let b = system_prompt(
            &TranslationRequest::new("second text")
                .target("chinese")
                .style("traditional"),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_prompt_changes_only_style_line() {
        let base = TranslationRequest::new("x").target("english").style("custom");
        let a = system_prompt(&base.clone().custom_prompt("Be brief"));
        let b = system_prompt(&base.custom_prompt("Be verbose"));

        let (a_lines, b_lines): (Vec<_>, Vec<_>) = (a.lines().collect(), b.lines().collect());
        assert_eq!(a_lines.len(), b_lines.len());
        let differing: Vec<usize> = (0..a_lines.len())
            .filter(|&i| a_lines[i] != b_lines[i])
            .collect();
        assert_eq!(differing, vec![a_lines.len() - 1]);
    }

    #[test]
    fn test_turns_for_non_japanese_include_example_pair() {
        let req = TranslationRequest::new("  こんにちは  ")
            .target("english")
            .source("japanese");
        let turns = compose_turns(&validate(&req).unwrap());

        let roles: Vec<Role> = turns.iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![Role::System, Role::User, Role::Assistant, Role::User]);
        assert_eq!(turns[1].content, EXAMPLE_INPUT);
        assert_eq!(turns[2].content, EXAMPLE_OUTPUT);
        assert_eq!(turns[3].content, "こんにちは");
    }

    #[test]
    fn test_turns_for_japanese_skip_example() {
        let req = TranslationRequest::new("Hello").target("japanese");
        let turns = compose_turns(&validate(&req).unwrap());

        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, Role::System);
        assert_eq!(turns[1].role, Role::User);
        assert_eq!(turns[1].content, "Hello");
    }

    #[test]
    fn test_example_output_is_valid_annotated_json() {
        let value: serde_json::Value = serde_json::from_str(EXAMPLE_OUTPUT).unwrap();
        for key in ["translation", "katakana", "ruby_text"] {
            assert!(value[key].is_string(), "missing {key}");
        }
    }
}
