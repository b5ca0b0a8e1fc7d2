//! Environment variable helpers shared by the configuration layers

use std::str::FromStr;
use thiserror::Error;

/// An environment variable was set but could not be parsed
#[derive(Debug, Error)]
#[error("Invalid value for {key}: {value:?} ({reason})")]
pub struct EnvError {
    pub key: String,
    pub value: String,
    pub reason: String,
}

/// Read and parse a variable through `lookup`.
///
/// Pass `|k| std::env::var(k).ok()` to read the process environment. Returns
/// `Ok(None)` when the variable is unset or blank.
pub fn parse_var<T>(key: &str, lookup: impl Fn(&str) -> Option<String>) -> Result<Option<T>, EnvError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| EnvError {
                key: key.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            }),
        _ => Ok(None),
    }
}
