mod options;

pub use self::options::{RenderFormat, RenderOptions};
use crate::{error::ApiError, fields::Fields};
use serde::Serialize;
use std::io;
use tokio::io::{AsyncWrite, AsyncWriteExt};

#[derive(Debug, Serialize)]
struct RenderedError {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
}

impl From<&ApiError> for RenderedError {
    fn from(error: &ApiError) -> Self {
        Self {
            error: error.kind(),
            message: error.to_string(),
            status: match error {
                ApiError::HttpStatus(error) => Some(error.code()),
                _ => None,
            },
        }
    }
}

/// Renders an outcome of an API call.
pub async fn render_result(
    result: &Result<Fields, ApiError>,
    options: &RenderOptions,
    writer: &mut (impl AsyncWrite + Unpin),
) -> Result<(), io::Error> {
    match options.format() {
        RenderFormat::Json => {
            let string = match result {
                Ok(fields) => serde_json::to_string(fields),
                Err(error) => serde_json::to_string(&RenderedError::from(error)),
            }
            .map_err(io::Error::other)?;

            render_line(writer, &string).await
        }
        RenderFormat::Text => match result {
            Ok(fields) => {
                if options.count() {
                    render_line(writer, &format!("fields: {}", fields.len())).await?;
                }

                for (key, value) in fields {
                    render_line(writer, &format!("{key}\t{value}")).await?;
                }

                Ok(())
            }
            Err(error) => render_line(writer, &format!("error: {error}")).await,
        },
    }
}

async fn render_line(
    writer: &mut (impl AsyncWrite + Unpin),
    string: &str,
) -> Result<(), io::Error> {
    writer.write_all(string.as_bytes()).await?;
    writer.write_all(b"\n").await?;

    Ok(())
}
