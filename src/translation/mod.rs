pub mod client;

pub use client::{parse_translation_response, TranslationClient};

pub const TRANSLATION_FAILED: &str = "[Translation failed]";

/// Never fails: errors are logged and replaced by [`TRANSLATION_FAILED`].
pub trait Translator {
    fn translate(&self, text: &str) -> String;
}
