use crate::http_client::{BareHttpClient, BareResponse, HttpClientError};
use async_trait::async_trait;
use core::future::pending;
use http::StatusCode;
use std::collections::HashMap;
use url::Url;

#[derive(Debug, Default)]
pub struct StubHttpClient {
    results: HashMap<String, Result<BareResponse, HttpClientError>>,
}

impl StubHttpClient {
    pub fn new(
        results: impl IntoIterator<Item = (String, Result<BareResponse, HttpClientError>)>,
    ) -> Self {
        Self {
            results: results.into_iter().collect(),
        }
    }
}

#[async_trait]
impl BareHttpClient for StubHttpClient {
    async fn get(&self, url: &Url) -> Result<BareResponse, HttpClientError> {
        self.results
            .get(url.as_str())
            .expect("stub response")
            .clone()
    }
}

/// Never responds.
#[derive(Debug, Default)]
pub struct HangingHttpClient {}

#[async_trait]
impl BareHttpClient for HangingHttpClient {
    async fn get(&self, _url: &Url) -> Result<BareResponse, HttpClientError> {
        pending().await
    }
}

pub fn build_stub_response(
    url: &str,
    status: StatusCode,
    body: impl Into<Vec<u8>>,
) -> (String, Result<BareResponse, HttpClientError>) {
    let url = Url::parse(url).unwrap();

    (
        url.as_str().into(),
        Ok(BareResponse {
            url,
            status,
            reason: None,
            body: body.into(),
        }),
    )
}
