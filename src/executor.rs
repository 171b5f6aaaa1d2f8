use crate::{
    error::ApiError,
    fields::{Fields, parse_fields},
    http_client::{BareHttpClient, HttpClientError, ReqwestHttpClient},
    status::HttpStatusError,
};
use log::trace;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Calls an API endpoint and parses its response into fields.
///
/// If no client is given, a default one is created for this call only. A
/// given client is borrowed and left usable afterwards.
///
/// Unsuccessful statuses are reported as errors without parsing their bodies.
pub async fn call(
    endpoint: &str,
    client: Option<&dyn BareHttpClient>,
) -> Result<Fields, ApiError> {
    let url = Url::parse(endpoint).map_err(HttpClientError::from)?;
    let default;
    let client: &dyn BareHttpClient = if let Some(client) = client {
        client
    } else {
        trace!("creating a default client for {url}");
        default = ReqwestHttpClient::new().map_err(HttpClientError::from)?;
        &default
    };

    let response = client.get(&url).await?;

    if !response.status.is_success() {
        return Err(
            HttpStatusError::with_reason(response.status, response.reason.as_deref()).into(),
        );
    }

    trace!("parsing a response from {}", response.url);

    Ok(parse_fields(&response.body)?)
}

/// Calls an API endpoint until a cancellation token is cancelled.
///
/// An in-flight request is dropped on cancellation.
pub async fn call_with_cancellation(
    endpoint: &str,
    client: Option<&dyn BareHttpClient>,
    token: &CancellationToken,
) -> Result<Fields, ApiError> {
    tokio::select! {
        biased;
        () = token.cancelled() => {
            trace!("call to {endpoint} cancelled");
            Err(ApiError::Cancelled)
        }
        result = call(endpoint, client) => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fields::ParseError,
        http_client::{BareResponse, HangingHttpClient, StubHttpClient, build_stub_response},
        status::StatusCategory,
    };
    use core::time::Duration;
    use http::StatusCode;
    use pretty_assertions::assert_eq;
    use tokio::{net::TcpListener, time::sleep};

    const ENDPOINT: &str = "https://foo.com/api";

    fn stub_client(status: StatusCode, body: &str) -> StubHttpClient {
        StubHttpClient::new([build_stub_response(ENDPOINT, status, body)])
    }

    #[tokio::test]
    async fn call_successfully() {
        assert_eq!(
            call(
                ENDPOINT,
                Some(&stub_client(StatusCode::OK, r#"{"k1":"v1","k2":"v2"}"#))
            )
            .await
            .unwrap(),
            Fields::from([("k1".into(), "v1".into()), ("k2".into(), "v2".into())])
        );
    }

    #[tokio::test]
    async fn accept_any_success_status() {
        assert_eq!(
            call(ENDPOINT, Some(&stub_client(StatusCode::CREATED, "{}")))
                .await
                .unwrap(),
            Fields::new()
        );
    }

    #[tokio::test]
    async fn fail_on_not_found() {
        let Err(ApiError::HttpStatus(error)) =
            call(ENDPOINT, Some(&stub_client(StatusCode::NOT_FOUND, ""))).await
        else {
            panic!("status error expected");
        };

        assert_eq!(error.category(), StatusCategory::NotFound);
        assert_eq!(error.code(), 404);
    }

    #[tokio::test]
    async fn fail_on_internal_server_error() {
        let Err(ApiError::HttpStatus(error)) = call(
            ENDPOINT,
            Some(&stub_client(StatusCode::INTERNAL_SERVER_ERROR, "")),
        )
        .await
        else {
            panic!("status error expected");
        };

        assert_eq!(error.category(), StatusCategory::InternalServerError);
        assert_eq!(error.code(), 500);
    }

    #[tokio::test]
    async fn fail_on_other_error_statuses() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::UNAUTHORIZED,
            StatusCode::FORBIDDEN,
            StatusCode::IM_A_TEAPOT,
            StatusCode::MOVED_PERMANENTLY,
        ] {
            assert_eq!(
                call(ENDPOINT, Some(&stub_client(status, ""))).await,
                Err(ApiError::HttpStatus(HttpStatusError::new(status)))
            );
        }
    }

    #[tokio::test]
    async fn ignore_body_of_error_status() {
        assert_eq!(
            call(
                ENDPOINT,
                Some(&stub_client(StatusCode::NOT_FOUND, r#"{"k":"v"}"#))
            )
            .await,
            Err(ApiError::HttpStatus(HttpStatusError::new(
                StatusCode::NOT_FOUND
            )))
        );
    }

    #[tokio::test]
    async fn keep_reason_of_error_status() {
        let client = StubHttpClient::new([(
            Url::parse(ENDPOINT).unwrap().to_string(),
            Ok(BareResponse {
                url: Url::parse(ENDPOINT).unwrap(),
                status: StatusCode::FORBIDDEN,
                reason: Some("Quota Exceeded".into()),
                body: vec![],
            }),
        )]);

        assert_eq!(
            call(ENDPOINT, Some(&client)).await.unwrap_err().to_string(),
            "Forbidden: HTTP 403: Quota Exceeded"
        );
    }

    #[tokio::test]
    async fn parse_body_with_byte_order_mark() {
        assert_eq!(
            call(
                ENDPOINT,
                Some(&stub_client(StatusCode::OK, "\u{feff}{\"k\":\"v\"}"))
            )
            .await
            .unwrap(),
            Fields::from([("k".into(), "v".into())])
        );
    }

    #[tokio::test]
    async fn fail_on_non_object_body() {
        assert!(matches!(
            call(ENDPOINT, Some(&stub_client(StatusCode::OK, "[1,2,3]"))).await,
            Err(ApiError::Parse(ParseError::Json(_)))
        ));
    }

    #[tokio::test]
    async fn fail_on_non_string_value() {
        assert!(matches!(
            call(
                ENDPOINT,
                Some(&stub_client(StatusCode::OK, r#"{"k":true}"#))
            )
            .await,
            Err(ApiError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn fail_on_transport_error() {
        let client = StubHttpClient::new([(
            Url::parse(ENDPOINT).unwrap().to_string(),
            Err(HttpClientError::Http("dns error".into())),
        )]);

        assert_eq!(
            call(ENDPOINT, Some(&client)).await,
            Err(ApiError::Transport(HttpClientError::Http(
                "dns error".into()
            )))
        );
    }

    #[tokio::test]
    async fn fail_on_invalid_endpoint() {
        assert!(matches!(
            call("not a url", Some(&StubHttpClient::default())).await,
            Err(ApiError::Transport(HttpClientError::UrlParse(_)))
        ));
    }

    #[tokio::test]
    async fn fail_on_unreachable_host_with_default_client() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}/", listener.local_addr().unwrap());
        drop(listener);

        assert!(matches!(
            call(&endpoint, None).await,
            Err(ApiError::Transport(_))
        ));
    }

    #[tokio::test]
    async fn call_twice_with_same_client() {
        let client = stub_client(StatusCode::OK, r#"{"message":"foo"}"#);

        assert_eq!(
            call(ENDPOINT, Some(&client)).await,
            call(ENDPOINT, Some(&client)).await
        );
    }

    #[tokio::test]
    async fn call_without_cancellation() {
        assert_eq!(
            call_with_cancellation(
                ENDPOINT,
                Some(&stub_client(StatusCode::OK, r#"{"k":"v"}"#)),
                &CancellationToken::new(),
            )
            .await
            .unwrap(),
            Fields::from([("k".into(), "v".into())])
        );
    }

    #[tokio::test]
    async fn cancel_before_call() {
        let token = CancellationToken::new();
        token.cancel();

        assert_eq!(
            call_with_cancellation(
                ENDPOINT,
                Some(&stub_client(StatusCode::OK, "{}")),
                &token
            )
            .await,
            Err(ApiError::Cancelled)
        );
    }

    #[tokio::test]
    async fn cancel_in_flight_call() {
        let token = CancellationToken::new();

        tokio::spawn({
            let token = token.clone();

            async move {
                sleep(Duration::from_millis(10)).await;
                token.cancel();
            }
        });

        assert_eq!(
            call_with_cancellation(ENDPOINT, Some(&HangingHttpClient::default()), &token)
                .await,
            Err(ApiError::Cancelled)
        );
    }
}
