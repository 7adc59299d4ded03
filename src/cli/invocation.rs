use crate::translation::TranslationRequest;

/// Operand that selects the language listing.
pub const LIST_LANGUAGES_FLAG: &str = "-c";

/// What the operands ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    ListLanguages,
    Translate(TranslationRequest),
    /// Wrong operand count. Nothing is translated.
    Usage,
}

impl Invocation {
    pub fn from_operands(operands: &[String]) -> Self {
        match operands {
            [flag] if flag == LIST_LANGUAGES_FLAG => Self::ListLanguages,
            [text, source, target] => Self::Translate(TranslationRequest {
                text: text.clone(),
                source_language: source.clone(),
                target_language: target.clone(),
            }),
            _ => Self::Usage,
        }
    }
}
