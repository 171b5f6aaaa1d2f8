use alloc::sync::Arc;
use core::{
    error::Error,
    fmt::{self, Display, Formatter},
};
use http::StatusCode;

const UNKNOWN_REASON: &str = "Unknown";

/// A category of an unsuccessful HTTP status.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusCategory {
    /// 400
    BadRequest,
    /// 401
    Unauthorized,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 500
    InternalServerError,
    /// Any other status.
    Unclassified,
}

impl StatusCategory {
    /// Returns a human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::InternalServerError => "Internal Server Error",
            Self::Unclassified => "HTTP Error",
        }
    }
}

impl Display for StatusCategory {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.label())
    }
}

/// Classifies a status code.
pub const fn classify_status(status: StatusCode) -> StatusCategory {
    match status.as_u16() {
        400 => StatusCategory::BadRequest,
        401 => StatusCategory::Unauthorized,
        403 => StatusCategory::Forbidden,
        404 => StatusCategory::NotFound,
        500 => StatusCategory::InternalServerError,
        _ => StatusCategory::Unclassified,
    }
}

/// An error of an unsuccessful HTTP status.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HttpStatusError {
    category: StatusCategory,
    status: StatusCode,
    reason: Arc<str>,
}

impl HttpStatusError {
    /// Creates an error from a status code with its canonical reason phrase.
    pub fn new(status: StatusCode) -> Self {
        Self::with_reason(status, None)
    }

    /// Creates an error from a status code and a reason phrase sent by a
    /// server.
    ///
    /// Without a reason phrase, a canonical one is used.
    pub fn with_reason(status: StatusCode, reason: Option<&str>) -> Self {
        Self {
            category: classify_status(status),
            status,
            reason: reason
                .or_else(|| status.canonical_reason())
                .unwrap_or(UNKNOWN_REASON)
                .into(),
        }
    }

    /// Returns a category.
    pub const fn category(&self) -> StatusCategory {
        self.category
    }

    /// Returns a status code.
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns a numeric status code.
    pub const fn code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Returns a reason phrase.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl Error for HttpStatusError {}

impl Display for HttpStatusError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}: HTTP {}: {}",
            self.category,
            self.code(),
            self.reason
        )
    }
}
