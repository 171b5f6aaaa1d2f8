use crate::{fields::ParseError, http_client::HttpClientError, status::HttpStatusError};
use core::error;
use core::fmt::{self, Display, Formatter};

/// An API call error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ApiError {
    /// A call cancelled before its resolution.
    Cancelled,
    /// An unsuccessful HTTP status.
    HttpStatus(HttpStatusError),
    /// A response body that is not a flat string-valued JSON object.
    Parse(ParseError),
    /// A failure before a response is received.
    Transport(HttpClientError),
}

impl ApiError {
    /// Returns a short name of an error kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Cancelled => "cancelled",
            Self::HttpStatus(_) => "http_status",
            Self::Parse(_) => "parse",
            Self::Transport(_) => "transport",
        }
    }
}

impl error::Error for ApiError {}

impl Display for ApiError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => write!(formatter, "request cancelled"),
            Self::HttpStatus(error) => write!(formatter, "{error}"),
            Self::Parse(error) => write!(formatter, "unable to parse content: {error}"),
            Self::Transport(error) => write!(formatter, "request failed: {error}"),
        }
    }
}

impl From<HttpClientError> for ApiError {
    fn from(error: HttpClientError) -> Self {
        Self::Transport(error)
    }
}

impl From<HttpStatusError> for ApiError {
    fn from(error: HttpStatusError) -> Self {
        Self::HttpStatus(error)
    }
}

impl From<ParseError> for ApiError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}
