use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use super::common::ApiErrorResponse;
use super::error::ApiError;

pub const DEFAULT_HOSTNAME: &str = "https://api.quantcdn.io";
pub const DEFAULT_BASEPATH: &str = "/v1";

/// Quant API client. Cloning is cheap and clones share one connection pool;
/// the client is immutable after construction.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    base_url: String,
    client_id: String,
    project: String,
    token: String,
}

/// Resolved connection settings for [`Client::new`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub client_id: String,
    pub project: String,
    pub token: String,
    pub hostname: String,
    pub basepath: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            project: String::new(),
            token: String::new(),
            hostname: DEFAULT_HOSTNAME.to_string(),
            basepath: DEFAULT_BASEPATH.to_string(),
        }
    }
}

impl Client {
    /// Credentials are not checked here; the API rejects them lazily on the
    /// first call.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        Url::parse(&config.hostname)
            .map_err(|_| ApiError::InvalidEndpoint(config.hostname.clone()))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        let base_url = format!(
            "{}{}",
            config.hostname.trim_end_matches('/'),
            config.basepath
        );

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                client_id: config.client_id,
                project: config.project,
                token: config.token,
            }),
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.request(Method::GET, path)).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.request(Method::POST, path).json(body))
            .await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.request(Method::PUT, path).json(body))
            .await
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.inner.base_url, path);
        tracing::debug!("{} {}", method, url);

        self.inner
            .http
            .request(method, url)
            .header("Quant-Customer", self.inner.client_id.as_str())
            .header("Quant-Project", self.inner.project.as_str())
            .header("Quant-Token", self.inner.token.as_str())
    }

    /// No retries: every failure is surfaced to the caller as-is.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::AuthenticationFailed);
        }

        let text = response.text().await?;
        tracing::debug!("API response ({}): {}", status, text);

        if !status.is_success() {
            return Err(error_from_body(status.as_u16(), text));
        }

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!("failed to deserialize response: {}, body: {}", e, text);
            ApiError::Parse(e.to_string())
        })
    }
}

fn error_from_body(status: u16, body: String) -> ApiError {
    let message = serde_json::from_str::<ApiErrorResponse>(&body)
        .ok()
        .and_then(|r| r.error_msg)
        .unwrap_or(body);

    ApiError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::test_client;
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn client_sends_quant_auth_headers() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/ping")
            .match_header("quant-customer", "test-client")
            .match_header("quant-project", "test-project")
            .match_header("quant-token", "test-token")
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let _: serde_json::Value = client.get("/ping").await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn client_maps_401_to_authentication_failed() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/ping")
            .with_status(401)
            .with_body(r#"{"error": true, "errorMsg": "invalid token"}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let result: Result<serde_json::Value, ApiError> = client.get("/ping").await;
        assert!(matches!(result, Err(ApiError::AuthenticationFailed)));
    }

    #[tokio::test]
    async fn client_extracts_error_msg_from_error_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/ping")
            .with_status(400)
            .with_body(r#"{"error": true, "errorMsg": "Invalid project"}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let result: Result<serde_json::Value, ApiError> = client.get("/ping").await;
        match result {
            Err(ApiError::Api { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid project");
            }
            other => panic!("expected Api error, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn client_falls_back_to_raw_body_on_unparseable_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/ping")
            .with_status(500)
            .with_body("internal server error")
            .create_async()
            .await;

        let client = test_client(&server.url());
        let result: Result<serde_json::Value, ApiError> = client.get("/ping").await;
        match result {
            Err(ApiError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "internal server error");
            }
            other => panic!("expected Api error, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn client_strips_trailing_slash_from_hostname() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/ping")
            .with_body("{}")
            .create_async()
            .await;

        let client = Client::new(ClientConfig {
            hostname: format!("{}/", server.url()),
            basepath: String::new(),
            ..ClientConfig::default()
        })
        .unwrap();

        let _: serde_json::Value = client.get("/ping").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn client_prefixes_requests_with_basepath() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/ping")
            .with_body("{}")
            .create_async()
            .await;

        let client = Client::new(ClientConfig {
            hostname: server.url(),
            basepath: "/v1".to_string(),
            ..ClientConfig::default()
        })
        .unwrap();

        let _: serde_json::Value = client.get("/ping").await.unwrap();
        mock.assert_async().await;
    }

    #[test]
    fn client_rejects_invalid_hostname() {
        let result = Client::new(ClientConfig {
            hostname: "not a url".to_string(),
            ..ClientConfig::default()
        });
        assert!(matches!(result, Err(ApiError::InvalidEndpoint(_))));
    }
}
