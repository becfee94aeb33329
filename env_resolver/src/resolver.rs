//! Environment lookup and typed conversion.
//!
//! An absent variable and one set to the empty string are indistinguishable
//! here: both normalise to `""`. With `required = true` that is a
//! [`EnvVarError::Missing`]; with `required = false` the empty string is fed
//! to the selected conversion, which may itself fail (an empty string is not
//! a valid integer).

use std::env;

use tracing::trace;

use crate::error::EnvVarError;

/// Selector choosing how a raw environment string is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvType {
    /// The raw string, unchanged.
    Str,
    /// A base-10 `i64`.
    Int,
    /// Comma-separated strings; no trimming, empty elements preserved.
    ListStr,
    /// Comma-separated base-10 `i64`s.
    ListInt,
}

/// The typed result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvValue {
    /// Produced by [`EnvType::Str`].
    Str(String),
    /// Produced by [`EnvType::Int`].
    Int(i64),
    /// Produced by [`EnvType::ListStr`].
    ListStr(Vec<String>),
    /// Produced by [`EnvType::ListInt`].
    ListInt(Vec<i64>),
}

impl EnvValue {
    /// Borrow the string value, if this is a [`EnvValue::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Take the string value, if this is a [`EnvValue::Str`].
    pub fn into_string(self) -> Option<String> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Take the integer value, if this is a [`EnvValue::Int`].
    pub fn into_int(self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(n),
            _ => None,
        }
    }

    /// Take the string list, if this is a [`EnvValue::ListStr`].
    pub fn into_list_str(self) -> Option<Vec<String>> {
        match self {
            Self::ListStr(v) => Some(v),
            _ => None,
        }
    }

    /// Take the integer list, if this is a [`EnvValue::ListInt`].
    pub fn into_list_int(self) -> Option<Vec<i64>> {
        match self {
            Self::ListInt(v) => Some(v),
            _ => None,
        }
    }
}

/// Read `name` from the process environment and convert it according to `ty`.
///
/// An absent or empty value with `required = true` is
/// [`EnvVarError::Missing`]. With `required = false` the conversion is still
/// attempted on the empty string, so `EnvType::Str` yields `Str("")` while
/// `EnvType::Int` fails with [`EnvVarError::InvalidInt`].
///
/// Each call is atomic and idempotent for a fixed environment; nothing is
/// cached between calls.
pub fn resolve(name: &str, required: bool, ty: EnvType) -> Result<EnvValue, EnvVarError> {
    let raw = lookup(name);
    if raw.is_empty() && required {
        return Err(EnvVarError::Missing(name.to_string()));
    }
    convert(name, &raw, ty)
}

/// Read a required plain-string variable.
///
/// Equivalent to `resolve(name, true, EnvType::Str)` unwrapped to `String`.
pub fn require(name: &str) -> Result<String, EnvVarError> {
    let raw = lookup(name);
    if raw.is_empty() {
        return Err(EnvVarError::Missing(name.to_string()));
    }
    Ok(raw)
}

/// Read an optional plain-string variable; absent maps to the empty string.
pub fn optional(name: &str) -> String {
    lookup(name)
}

// Absent and non-unicode values both normalise to "".
fn lookup(name: &str) -> String {
    let raw = env::var(name).unwrap_or_default();
    trace!(name, present = !raw.is_empty(), "environment lookup");
    raw
}

fn convert(name: &str, raw: &str, ty: EnvType) -> Result<EnvValue, EnvVarError> {
    match ty {
        EnvType::Str => Ok(EnvValue::Str(raw.to_string())),
        EnvType::Int => parse_int(name, raw).map(EnvValue::Int),
        EnvType::ListStr => Ok(EnvValue::ListStr(
            raw.split(',').map(str::to_string).collect(),
        )),
        EnvType::ListInt => raw
            .split(',')
            .map(|elem| parse_int(name, elem))
            .collect::<Result<Vec<_>, _>>()
            .map(EnvValue::ListInt),
    }
}

fn parse_int(name: &str, raw: &str) -> Result<i64, EnvVarError> {
    raw.parse().map_err(|_| EnvVarError::InvalidInt {
        name: name.to_string(),
        value: raw.to_string(),
    })
}
