//! Error types for environment variable resolution.

use thiserror::Error;

/// Errors produced while resolving an environment variable.
///
/// Both variants are terminal to the call that produced them. There are no
/// partial results: a list conversion fails the whole call on its first bad
/// element.
#[derive(Debug, Error)]
pub enum EnvVarError {
    /// A required environment variable is not set, or is set to the empty
    /// string.
    #[error("Missing environment variable: {0}")]
    Missing(String),

    /// A value (or one element of a comma-separated list) could not be
    /// parsed as a base-10 integer.
    #[error("Could not convert {value:?} into an integer for {name}")]
    InvalidInt {
        /// The variable whose value failed to parse.
        name: String,
        /// The exact raw text that failed to parse.
        value: String,
    },
}
