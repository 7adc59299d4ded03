mod client;
mod error;
mod language;
pub mod newline;
mod translator;

pub use client::{DEFAULT_ENDPOINT, GoogleTranslateClient};
pub use error::ServiceError;
pub use language::{SUPPORTED_LANGUAGES, language_codes, language_name};
pub use translator::{TranslationRequest, Translator};
