use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

use crate::translation::{TranslationRequest, Translator, language_name, newline};
use crate::ui::Spinner;

/// Sends the request through `translator` and writes the decoded
/// translation followed by a newline.
pub async fn run_translate<T: Translator, W: Write>(
    translator: &T,
    request: &TranslationRequest,
    out: &mut W,
) -> Result<()> {
    let text = newline::encode(&request.text);

    info!(
        source = %request.source_language,
        source_name = language_name(&request.source_language).unwrap_or("unlisted"),
        target = %request.target_language,
        target_name = language_name(&request.target_language).unwrap_or("unlisted"),
        "translating"
    );

    let spinner = Spinner::new("Translating...");
    let translation = translator
        .translate(&text, &request.source_language, &request.target_language)
        .await;
    spinner.stop();

    let translation = newline::decode(&translation?);
    writeln!(out, "{translation}").context("Failed to write translation")?;
    Ok(())
}
