use alloc::sync::Arc;
use core::error::Error;
use core::fmt;
use core::fmt::Display;
use core::fmt::Formatter;

/// A client configuration error.
#[derive(Debug)]
pub enum ConfigError {
    /// A client that cannot be built.
    Client(Arc<str>),
    /// An invalid header name.
    HttpInvalidHeaderName(http::header::InvalidHeaderName),
    /// An invalid header value.
    HttpInvalidHeaderValue(http::header::InvalidHeaderValue),
}

impl Display for ConfigError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client(error) => {
                write!(formatter, "failed to build client: {error}")
            }
            Self::HttpInvalidHeaderName(error) => {
                write!(formatter, "{error}")
            }
            Self::HttpInvalidHeaderValue(error) => {
                write!(formatter, "{error}")
            }
        }
    }
}

impl Error for ConfigError {}

impl From<http::header::InvalidHeaderName> for ConfigError {
    fn from(error: http::header::InvalidHeaderName) -> Self {
        Self::HttpInvalidHeaderName(error)
    }
}

impl From<http::header::InvalidHeaderValue> for ConfigError {
    fn from(error: http::header::InvalidHeaderValue) -> Self {
        Self::HttpInvalidHeaderValue(error)
    }
}

impl From<reqwest::Error> for ConfigError {
    fn from(error: reqwest::Error) -> Self {
        Self::Client(error.to_string().into())
    }
}
