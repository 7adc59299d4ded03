use std::future::Future;

use super::error::ServiceError;

/// A translation request built from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
}

/// The translation capability the command line delegates to.
pub trait Translator {
    /// Translates `text` from `source` into `target`.
    ///
    /// Makes exactly one attempt; failures are returned, never retried.
    fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> impl Future<Output = Result<String, ServiceError>> + Send;

    /// Language codes this translator accepts.
    fn supported_languages(&self) -> impl Iterator<Item = &str>;
}
