use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::error::ServiceError;
use super::language::language_codes;
use super::translator::Translator;

pub const DEFAULT_ENDPOINT: &str = "https://translation.googleapis.com";
const TRANSLATE_PATH: &str = "/language/translate/v2";

#[derive(Debug, Serialize)]
struct TranslateRequestBody<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    reason: String,
}

/// Client for the Google Cloud Translation v2 REST API.
pub struct GoogleTranslateClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GoogleTranslateClient {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    fn translate_url(&self) -> Result<Url, ServiceError> {
        let base = format!("{}{TRANSLATE_PATH}", self.endpoint.trim_end_matches('/'));
        let parsed = match &self.api_key {
            Some(api_key) => Url::parse_with_params(&base, &[("key", api_key)]),
            None => Url::parse(&base),
        };
        parsed.map_err(|_| ServiceError::InvalidEndpoint(self.endpoint.clone()))
    }
}

impl Translator for GoogleTranslateClient {
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ServiceError> {
        let url = self.translate_url()?;
        let body = TranslateRequestBody {
            q: text,
            source,
            target,
            format: "text",
        };

        debug!(endpoint = %self.endpoint, "sending translation request");
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|err| ServiceError::Network {
                url: self.endpoint.clone(),
                source: err,
            })?;

        let status = response.status();
        let payload = response
            .text()
            .await
            .map_err(|err| ServiceError::Network {
                url: self.endpoint.clone(),
                source: err,
            })?;
        debug!(%status, bytes = payload.len(), "received translation response");

        if !status.is_success() {
            return Err(classify_failure(status, &payload, source, target));
        }

        parse_translation(&payload)
    }

    #[allow(clippy::map_identity)]
    fn supported_languages(&self) -> impl Iterator<Item = &str> {
        language_codes().map(|code| code)
    }
}

fn parse_translation(payload: &str) -> Result<String, ServiceError> {
    let response: TranslateResponse = serde_json::from_str(payload)
        .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;

    response
        .data
        .translations
        .into_iter()
        .next()
        .map(|t| t.translated_text)
        .ok_or_else(|| ServiceError::MalformedResponse("no translations returned".to_string()))
}

/// Maps an unsuccessful response onto the error taxonomy.
fn classify_failure(status: StatusCode, payload: &str, source: &str, target: &str) -> ServiceError {
    let (message, reasons) = match serde_json::from_str::<ErrorResponse>(payload) {
        Ok(parsed) => (
            parsed.error.message,
            parsed
                .error
                .errors
                .into_iter()
                .map(|detail| detail.reason)
                .collect::<Vec<_>>(),
        ),
        Err(_) => (payload.trim().to_string(), Vec::new()),
    };
    let message = if message.is_empty() {
        status.canonical_reason().unwrap_or("no details").to_string()
    } else {
        message
    };

    let has_reason = |needle: &str| reasons.iter().any(|reason| reason.contains(needle));

    if status == StatusCode::TOO_MANY_REQUESTS
        || has_reason("RateLimitExceeded")
        || has_reason("rateLimitExceeded")
        || has_reason("dailyLimitExceeded")
        || has_reason("quotaExceeded")
    {
        return ServiceError::Quota(message);
    }

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ServiceError::Authentication(message),
        StatusCode::BAD_REQUEST if has_reason("keyInvalid") => ServiceError::Authentication(message),
        StatusCode::BAD_REQUEST => ServiceError::InvalidLanguage {
            source_language: source.to_string(),
            target_language: target.to_string(),
            message,
        },
        _ => ServiceError::Service {
            status: status.as_u16(),
            message,
        },
    }
}
