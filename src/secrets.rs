//! Access to the platform's bootstrap secrets stored in Kubernetes.

use async_trait::async_trait;
use k8s_openapi::api::core::v1::{ConfigMap, Secret};
use kube::config::{KubeConfigOptions, KubeconfigError};
use kube::{Api, Client, Config};
use tracing::{debug, trace};

/// Key some deployments use for the whole secret payload.
const FALLBACK_SECRET_KEY: &str = "data";

#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    #[error("failed to load kubeconfig (context: '{context}'): {cause}")]
    Kubeconfig {
        context: String,
        #[source]
        cause: KubeconfigError,
    },
    #[error("failed to create k8s client: {0}")]
    Client(#[source] kube::Error),
    #[error("{kind} '{name}' not found in namespace '{namespace}'")]
    ObjectNotFound {
        kind: &'static str,
        namespace: String,
        name: String,
    },
    #[error("{kind} '{name}' found, but contains no key {key}")]
    KeyNotFound {
        kind: &'static str,
        name: String,
        key: String,
    },
    #[error("failed to get {kind} '{name}' in namespace '{namespace}': {cause}")]
    Fetch {
        kind: &'static str,
        namespace: String,
        name: String,
        #[source]
        cause: kube::Error,
    },
}

impl SecretError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SecretError::ObjectNotFound { .. } | SecretError::KeyNotFound { .. }
        )
    }
}

/// Reads single keys out of secrets and config maps.
#[async_trait]
pub trait SecretProvider: Send + Sync {
    async fn get_secret(&self, namespace: &str, name: &str, key: &str)
        -> Result<String, SecretError>;

    async fn get_config_map(
        &self,
        namespace: &str,
        name: &str,
        key: &str,
    ) -> Result<String, SecretError>;
}

pub struct KubeSecretProvider {
    client: Client,
}

impl KubeSecretProvider {
    /// Builds a client from the kubeconfig (honouring `KUBECONFIG`). An empty
    /// `kube_context` keeps the kubeconfig's current-context.
    pub async fn connect(kube_context: &str) -> Result<Self, SecretError> {
        debug!("initializing k8s client (context: '{}')", kube_context);

        let options = KubeConfigOptions {
            context: Some(kube_context.to_string()).filter(|c| !c.is_empty()),
            ..Default::default()
        };
        let config = Config::from_kubeconfig(&options)
            .await
            .map_err(|cause| SecretError::Kubeconfig {
                context: kube_context.to_string(),
                cause,
            })?;
        let client = Client::try_from(config).map_err(SecretError::Client)?;

        Ok(Self { client })
    }
}

fn fetch_error(kind: &'static str, namespace: &str, name: &str, cause: kube::Error) -> SecretError {
    match cause {
        kube::Error::Api(ref response) if response.code == 404 => SecretError::ObjectNotFound {
            kind,
            namespace: namespace.to_string(),
            name: name.to_string(),
        },
        cause => SecretError::Fetch {
            kind,
            namespace: namespace.to_string(),
            name: name.to_string(),
            cause,
        },
    }
}

#[async_trait]
impl SecretProvider for KubeSecretProvider {
    async fn get_secret(
        &self,
        namespace: &str,
        name: &str,
        key: &str,
    ) -> Result<String, SecretError> {
        trace!("Fetching secret {}/{}", namespace, name);
        let api: Api<Secret> = Api::namespaced(self.client.clone(), namespace);
        let secret = api
            .get(name)
            .await
            .map_err(|e| fetch_error("secret", namespace, name, e))?;

        let data = secret.data.unwrap_or_default();
        data.get(key)
            .or_else(|| data.get(FALLBACK_SECRET_KEY))
            .map(|bytes| String::from_utf8_lossy(&bytes.0).into_owned())
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
        trace!("Fetching configmap {}/{}", namespace, name);
        let api: Api<ConfigMap> = Api::namespaced(self.client.clone(), namespace);
        let config_map = api
            .get(name)
            .await
            .map_err(|e| fetch_error("configmap", namespace, name, e))?;

        config_map
            .data
            .and_then(|mut data| data.remove(key))
            .ok_or_else(|| SecretError::KeyNotFound {
                kind: "configmap",
                name: name.to_string(),
                key: key.to_string(),
            })
    }
}
