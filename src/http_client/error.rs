use alloc::sync::Arc;
use core::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// An HTTP transport error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HttpClientError {
    /// A connection or protocol failure.
    Http(Arc<str>),
    /// A request timeout.
    Timeout(Arc<str>),
    /// An invalid URL.
    UrlParse(Arc<str>),
}

impl Error for HttpClientError {}

impl Display for HttpClientError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(error) => write!(formatter, "{error}"),
            Self::Timeout(error) => write!(formatter, "timed out: {error}"),
            Self::UrlParse(error) => write!(formatter, "invalid URL: {error}"),
        }
    }
}

impl From<url::ParseError> for HttpClientError {
    fn from(error: url::ParseError) -> Self {
        Self::UrlParse(error.to_string().into())
    }
}
