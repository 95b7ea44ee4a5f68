//! Transport to the platform API and the bootstrap that locates it.
//!
//! The API token and the site URL live in the cluster: the token in the
//! `app-secret` secret and the URL in the `ingext-community-config` config map.
//! [`connect`] reads both through a [`SecretProvider`] and returns an
//! [`HttpTransport`] ready for the services.

use crate::{
    context::EffectiveContext,
    secrets::{SecretError, SecretProvider},
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, trace};
use url::Url;

pub const APP_SECRET_NAME: &str = "app-secret";
pub const APP_SECRET_TOKEN_KEY: &str = "token";
pub const SITE_CONFIG_MAP_NAME: &str = "ingext-community-config";
pub const SITE_CONFIG_KEY: &str = "site_config.json";

const REQUEST_TIMEOUT_SECONDS: u64 = 60;
const USER_AGENT: &str = concat!("ingext-cli/", env!("CARGO_PKG_VERSION"));

/// Error emitted by a platform API call
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("invalid endpoint '{endpoint}': {cause}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        cause: url::ParseError,
    },
    #[error("unexpected response from server: {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
}

/// A failed remote operation, named after what was attempted.
#[derive(Debug, thiserror::Error)]
#[error("failed to {operation}: {cause}")]
pub struct RemoteError {
    pub operation: &'static str,
    #[source]
    pub cause: ApiError,
}

#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error(transparent)]
    Secret(#[from] SecretError),
    #[error("failed to parse site config: {0}")]
    SiteConfig(#[source] serde_json::Error),
    #[error("invalid site URL '{url}': {cause}")]
    SiteUrl {
        url: String,
        #[source]
        cause: url::ParseError,
    },
    #[error("failed to create HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// One remote function invocation: JSON arguments in, JSON result out.
#[async_trait]
pub trait RemoteCall: Send + Sync {
    async fn call(&self, endpoint: &str, args: Value) -> Result<Value, ApiError>;
}

pub struct HttpTransport {
    client: Client,
    base_url: Url,
    token: String,
}

impl HttpTransport {
    pub fn new(site_url: Url, token: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: site_url,
            token,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, ApiError> {
        let path = format!("{}/api/{}", self.base_url.path().trim_end_matches('/'), endpoint);
        self.base_url
            .join(&path)
            .map_err(|cause| ApiError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                cause,
            })
    }
}

#[async_trait]
impl RemoteCall for HttpTransport {
    async fn call(&self, endpoint: &str, args: Value) -> Result<Value, ApiError> {
        let url = self.endpoint_url(endpoint)?;
        trace!("POST {}", url);

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .json(&args)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::UnexpectedStatus { status, body });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[derive(Debug, Deserialize)]
struct SiteConfig {
    #[serde(rename = "siteURL")]
    site_url: String,
}

/// Reads the API token and site URL from the cluster and builds the transport.
pub async fn connect(
    context: &EffectiveContext,
    secrets: &dyn SecretProvider,
) -> Result<HttpTransport, ConnectError> {
    debug!(
        "Connecting to cluster {} (namespace {})...",
        context.cluster, context.namespace
    );

    let token = secrets
        .get_secret(&context.namespace, APP_SECRET_NAME, APP_SECRET_TOKEN_KEY)
        .await?;

    let config_text = secrets
        .get_config_map(&context.namespace, SITE_CONFIG_MAP_NAME, SITE_CONFIG_KEY)
        .await?;
    let site_config: SiteConfig = serde_json::from_str(&config_text).map_err(|e| {
        error!(error = %e, "failed to parse site config");
        ConnectError::SiteConfig(e)
    })?;

    let site_url = Url::parse(&site_config.site_url).map_err(|cause| ConnectError::SiteUrl {
        url: site_config.site_url.clone(),
        cause,
    })?;

    let transport = HttpTransport::new(site_url, token).map_err(ConnectError::HttpClient)?;
    info!(site_url = %transport.base_url(), "initialized ingext client");
    Ok(transport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct StaticSecrets {
        secrets: HashMap<(String, String), String>,
        config_maps: HashMap<(String, String), String>,
    }

    #[async_trait]
    impl SecretProvider for StaticSecrets {
        async fn get_secret(
            &self,
            namespace: &str,
            name: &str,
            key: &str,
        ) -> Result<String, SecretError> {
            self.secrets
                .get(&(namespace.to_string(), name.to_string()))
                .cloned()
                .ok_or_else(|| SecretError::KeyNotFound {
                    kind: "secret",
                    name: name.to_string(),
                    key: key.to_string(),
                })
        }

        async fn get_config_map(
            &self,
            namespace: &str,
            name: &str,
            key: &str,
        ) -> Result<String, SecretError> {
            self.config_maps
                .get(&(namespace.to_string(), name.to_string()))
                .cloned()
                .ok_or_else(|| SecretError::KeyNotFound {
                    kind: "configmap",
                    name: name.to_string(),
                    key: key.to_string(),
                })
        }
    }

    fn context(namespace: &str) -> EffectiveContext {
        EffectiveContext {
            cluster: "prod".to_string(),
            namespace: namespace.to_string(),
            provider: "eks".to_string(),
            kube_context: String::new(),
        }
    }

    fn secrets(site_config: &str) -> StaticSecrets {
        let key = |name: &str| ("ingext".to_string(), name.to_string());
        StaticSecrets {
            secrets: HashMap::from([(key(APP_SECRET_NAME), "tok".to_string())]),
            config_maps: HashMap::from([(key(SITE_CONFIG_MAP_NAME), site_config.to_string())]),
        }
    }

    #[tokio::test]
    async fn test_call_posts_json_with_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/platform/addIntegration"))
            .and(header("authorization", "Bearer tok"))
            .and(body_json(json!({"entry": {"name": "s3"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "i-1"})))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(Url::parse(&server.uri()).unwrap(), "tok".into()).unwrap();
        let result = transport
            .call("platform/addIntegration", json!({"entry": {"name": "s3"}}))
            .await
            .unwrap();

        assert_eq!(result, json!({"id": "i-1"}));
    }

    #[tokio::test]
    async fn test_call_reports_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(Url::parse(&server.uri()).unwrap(), "tok".into()).unwrap();
        let error = transport.call("auth/listUser", json!({})).await.unwrap_err();

        match error {
            ApiError::UnexpectedStatus { status, body } => {
                assert_eq!(status, StatusCode::FORBIDDEN);
                assert_eq!(body, "forbidden");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_body_is_null() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(Url::parse(&server.uri()).unwrap(), "tok".into()).unwrap();
        let result = transport.call("auth/deleteUser", json!({})).await.unwrap();
        assert_eq!(result, Value::Null);
    }

    #[test]
    fn test_endpoint_keeps_site_path() {
        let transport = HttpTransport::new(
            Url::parse("https://ingext.example.com/tenant/").unwrap(),
            "tok".into(),
        )
        .unwrap();
        let url = transport.endpoint_url("auth/listUser").unwrap();
        assert_eq!(url.as_str(), "https://ingext.example.com/tenant/api/auth/listUser");
    }

    #[tokio::test]
    async fn test_connect_reads_token_and_site_url() {
        let secrets = secrets(r#"{"siteURL": "https://ingext.example.com"}"#);
        let transport = connect(&context("ingext"), &secrets).await.unwrap();
        assert_eq!(transport.base_url().as_str(), "https://ingext.example.com/");
    }

    #[tokio::test]
    async fn test_connect_missing_secret() {
        let secrets = secrets(r#"{"siteURL": "https://ingext.example.com"}"#);
        let error = connect(&context("other"), &secrets).await.err().unwrap();
        assert!(matches!(error, ConnectError::Secret(ref e) if e.is_not_found()));
    }

    #[tokio::test]
    async fn test_connect_bad_site_config() {
        let secrets = secrets("not json");
        let error = connect(&context("ingext"), &secrets).await.err().unwrap();
        assert!(matches!(error, ConnectError::SiteConfig(_)));
    }
}
