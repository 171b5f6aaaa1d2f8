mod error;

pub use self::error::ConfigError;
use core::time::Duration;
use http::{
    HeaderMap, HeaderName, HeaderValue,
    header::{ACCEPT, AUTHORIZATION, USER_AGENT},
};

const JSON_MEDIA_TYPE: &str = "application/json";

/// A client configuration.
///
/// Headers set here are sent with every request made through a client built
/// from the configuration.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClientConfig {
    accept_json: bool,
    bearer_token: Option<String>,
    headers: Vec<(String, String)>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientConfig {
    /// Creates a client configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `Accept: application/json` is sent.
    pub const fn accept_json(&self) -> bool {
        self.accept_json
    }

    /// Returns a bearer token.
    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    /// Returns a timeout of a whole request.
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns a user agent.
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// Sets whether `Accept: application/json` is sent.
    pub const fn set_accept_json(mut self, accept_json: bool) -> Self {
        self.accept_json = accept_json;
        self
    }

    /// Sets a bearer token.
    pub fn set_bearer_token(mut self, token: Option<String>) -> Self {
        self.bearer_token = token;
        self
    }

    /// Adds a custom header.
    pub fn set_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets a timeout of a whole request.
    pub const fn set_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets a user agent.
    pub fn set_user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Compiles default request headers.
    pub fn headers(&self) -> Result<HeaderMap, ConfigError> {
        let mut headers = HeaderMap::new();

        if self.accept_json {
            headers.insert(ACCEPT, HeaderValue::from_static(JSON_MEDIA_TYPE));
        }

        if let Some(token) = &self.bearer_token {
            let mut value = HeaderValue::try_from(format!("Bearer {token}"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        if let Some(user_agent) = &self.user_agent {
            headers.insert(USER_AGENT, HeaderValue::try_from(user_agent.as_str())?);
        }

        // Custom headers override the ones above.
        for (name, value) in &self.headers {
            headers.insert(
                HeaderName::try_from(name.as_str())?,
                HeaderValue::try_from(value.as_str())?,
            );
        }

        Ok(headers)
    }
}
