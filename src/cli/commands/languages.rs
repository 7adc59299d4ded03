//! Language listing used for editor command completion.

use anyhow::{Context, Result};
use std::io::Write;

use crate::translation::Translator;

/// Prints every supported language code followed by a space, on one line.
pub fn print_languages<T: Translator, W: Write>(translator: &T, out: &mut W) -> Result<()> {
    for code in translator.supported_languages() {
        write!(out, "{code} ").context("Failed to write language list")?;
    }
    writeln!(out).context("Failed to write language list")?;
    Ok(())
}
