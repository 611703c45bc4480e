// Translation module - request options → chat prompt → structured result
// Author: kelexine (https://github.com/kelexine)

pub mod extract;
pub mod languages;
pub mod processor;
pub mod prompt;
pub mod validate;

pub use extract::extract;
pub use processor::TranslationRequestProcessor;
pub use prompt::compose_turns;
pub use validate::{validate, ValidatedRequest, MAX_TEXT_CHARS};
