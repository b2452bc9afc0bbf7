//! Command implementations. Each mode prints its results to stdout and
//! status lines to stderr, so the key material can be piped on its own.

pub mod derive;
pub mod generate;
