//! Failures reported by the translation service.

use thiserror::Error;

/// Everything that can go wrong between sending a translation request and
/// holding the translated string.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("invalid translation endpoint '{0}'")]
    InvalidEndpoint(String),

    #[error("failed to reach translation service at {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid language pair '{source_language}' -> '{target_language}': {message}")]
    InvalidLanguage {
        source_language: String,
        target_language: String,
        message: String,
    },

    #[error("translation service rejected the credentials: {0}")]
    Authentication(String),

    #[error("translation quota exceeded: {0}")]
    Quota(String),

    #[error("translation service returned {status}: {message}")]
    Service { status: u16, message: String },

    #[error("unexpected response from translation service: {0}")]
    MalformedResponse(String),
}

impl ServiceError {
    /// Process exit status for this failure.
    pub const fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::InvalidEndpoint(_) => exitcode::CONFIG,
            Self::Network { .. } => exitcode::UNAVAILABLE,
            Self::InvalidLanguage { .. } => exitcode::DATAERR,
            Self::Authentication(_) => exitcode::NOPERM,
            Self::Quota(_) => exitcode::TEMPFAIL,
            Self::Service { .. } | Self::MalformedResponse(_) => exitcode::PROTOCOL,
        }
    }
}
