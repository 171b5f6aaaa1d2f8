use super::HttpClientError;
use alloc::sync::Arc;
use async_trait::async_trait;
use http::StatusCode;
use url::Url;

/// A bare HTTP client which only sends GET requests.
#[async_trait]
pub trait BareHttpClient: Send + Sync {
    /// Sends a GET request to a URL.
    async fn get(&self, url: &Url) -> Result<BareResponse, HttpClientError>;
}

/// A bare HTTP response.
#[derive(Debug)]
#[cfg_attr(test, derive(Clone))]
pub struct BareResponse {
    /// A final URL after redirects.
    pub url: Url,
    /// A status code.
    pub status: StatusCode,
    /// A reason phrase sent by a server if it differs from a canonical one.
    pub reason: Option<Arc<str>>,
    /// A raw body.
    pub body: Vec<u8>,
}
