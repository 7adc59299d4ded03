//! Newline smuggling for the single-line translation request.
//!
//! The service only accepts one line of text, so line breaks are replaced by
//! a marker before sending and a marker is turned back into line breaks on the
//! way out. The two markers differ: the service usually re-spaces `&&` into
//! `& &`, and only that re-spaced form is decoded. A response that echoes the
//! sent marker verbatim keeps ` && ` in the output.
//!
//! Trimming strips every leading and trailing character at or below U+0020,
//! which covers ASCII control characters but leaves Unicode spaces such as
//! U+00A0 in place.
//!
//! The encoding is lossy: a literal ` && ` in the source text cannot be told
//! apart from an encoded line break.

/// Marker substituted for each line break before the text is sent.
pub const OUTBOUND_MARKER: &str = " && ";

/// Marker recognised as a line break in the translated text.
pub const INBOUND_MARKER: &str = " & & ";

/// Trims the text and replaces every line break with [`OUTBOUND_MARKER`].
pub fn encode(text: &str) -> String {
    text.trim_matches(|c: char| c <= ' ').replace('\n', OUTBOUND_MARKER)
}

/// Replaces every [`INBOUND_MARKER`] with a line break.
pub fn decode(translation: &str) -> String {
    translation.replace(INBOUND_MARKER, "\n")
}
