// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Source(SourceError),
}

/// Specific error types for item-list fetching issues.
///
/// These never reach the carousel itself; sources translate them into a
/// fallback item list. They exist so callers that want to inspect why a
/// fallback was used still can.
#[derive(Debug, Clone)]
pub enum SourceError {
    /// The endpoint could not be reached (connect/DNS/TLS failure).
    Unreachable(String),

    /// The endpoint answered with a non-success HTTP status.
    BadStatus(u16),

    /// The response body was not a valid item list.
    Decode(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Unreachable(msg) => write!(f, "Endpoint unreachable: {msg}"),
            SourceError::BadStatus(code) => write!(f, "Endpoint returned status {code}"),
            SourceError::Decode(msg) => write!(f, "Invalid item list: {msg}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Source(e) => write!(f, "Source Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<SourceError> for Error {
    fn from(err: SourceError) -> Self {
        Error::Source(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Error::Source(SourceError::Unreachable(err.to_string()))
        } else if let Some(status) = err.status() {
            Error::Source(SourceError::BadStatus(status.as_u16()))
        } else if err.is_decode() {
            Error::Source(SourceError::Decode(err.to_string()))
        } else {
            Error::Source(SourceError::Unreachable(err.to_string()))
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
