use super::{BareHttpClient, BareResponse, HttpClientError};
use crate::config::{ClientConfig, ConfigError};
use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use log::trace;
use reqwest::{Client, ClientBuilder};
use url::Url;

/// An HTTP client based on [`reqwest`].
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates an HTTP client with no default headers or timeout.
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: ClientBuilder::new().build()?,
        })
    }

    /// Creates an HTTP client from a configuration.
    pub fn with_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        let mut builder = ClientBuilder::new().default_headers(config.headers()?);

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wraps a pre-configured [`reqwest`] client.
    pub const fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BareHttpClient for ReqwestHttpClient {
    async fn get(&self, url: &Url) -> Result<BareResponse, HttpClientError> {
        trace!("sending a request to {url}");

        let response = self.client.get(url.clone()).send().await?;

        trace!("got {} response from {url}", response.status());

        Ok(BareResponse {
            url: response.url().clone(),
            status: response.status(),
            reason: response
                .extensions()
                .get::<ReasonPhrase>()
                .map(|reason| String::from_utf8_lossy(reason.as_bytes()).into()),
            body: response.bytes().await?.to_vec(),
        })
    }
}

impl From<reqwest::Error> for HttpClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error.to_string().into())
        } else {
            Self::Http(error.to_string().into())
        }
    }
}
