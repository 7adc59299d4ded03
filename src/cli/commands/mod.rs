//! Command implementations.

/// `-c`: language code listing.
pub mod languages;

/// Wrong operand count.
pub mod usage;

/// `"<text>" <source> <target>`: one translation.
pub mod translate;
