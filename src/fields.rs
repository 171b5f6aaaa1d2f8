use alloc::{collections::BTreeMap, sync::Arc};
use core::{
    error::Error,
    fmt::{self, Display, Formatter},
    str::{self, Utf8Error},
};

/// Top-level fields of a flat JSON object whose values are all strings.
pub type Fields = BTreeMap<String, String>;

/// An error of a response body that is not a flat string-valued JSON object.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Invalid or non-flat JSON.
    Json(Arc<str>),
    /// A body that is not UTF-8.
    Utf8(Arc<str>),
}

impl Error for ParseError {}

impl Display for ParseError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(error) => write!(formatter, "{error}"),
            Self::Utf8(error) => write!(formatter, "{error}"),
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string().into())
    }
}

impl From<Utf8Error> for ParseError {
    fn from(error: Utf8Error) -> Self {
        Self::Utf8(error.to_string().into())
    }
}

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parses a response body into fields.
///
/// A leading byte order mark is ignored.
pub fn parse_fields(body: &[u8]) -> Result<Fields, ParseError> {
    let text = str::from_utf8(body)?;

    Ok(serde_json::from_str(
        text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text),
    )?)
}
