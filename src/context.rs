//! Effective run context for a single command invocation.
//!
//! [`ContextResolver`] merges explicit flags, the active profile and hard
//! defaults. [`ExecutionContext`] takes a resolved context, connects to the
//! platform and hands out the per-domain services.

use crate::{
    configuration::ProfileStore,
    format::{Formattable, FormattingError, OutputFormat},
    platform::{self, ConnectError, RemoteCall},
    secrets::KubeSecretProvider,
    services::{IntegrationService, RoleService, StreamService, UserService},
};
use serde::Serialize;
use std::sync::Arc;
use tabled::Tabled;
use tracing::{debug, info, warn};

pub const DEFAULT_PROVIDER: &str = "eks";
pub const DEFAULT_NAMESPACE: &str = "ingext";
pub const DEFAULT_KUBE_CONTEXT: &str = "";

#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("cluster name is required. Run 'ingext config --cluster <name>' or use --cluster")]
    MissingCluster,
}

/// Fully resolved operating parameters. An empty `kube_context` means the
/// kubeconfig's own current-context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectiveContext {
    pub cluster: String,
    pub namespace: String,
    pub provider: String,
    #[serde(rename = "context")]
    pub kube_context: String,
}

pub struct ContextResolver<'a> {
    store: &'a ProfileStore,
}

fn explicit(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn stored(value: &str) -> Option<&str> {
    Some(value).filter(|v| !v.is_empty())
}

impl<'a> ContextResolver<'a> {
    pub fn new(store: &'a ProfileStore) -> Self {
        Self { store }
    }

    /// Resolves the context with precedence: explicit flag, active profile, default.
    ///
    /// The cluster has no default; without `--cluster` or an active profile this
    /// fails with [`ContextError::MissingCluster`].
    pub fn resolve(
        &self,
        explicit_cluster: Option<&str>,
        explicit_namespace: Option<&str>,
        explicit_context: Option<&str>,
    ) -> Result<EffectiveContext, ContextError> {
        let active = self.store.active_profile();

        let cluster = explicit(explicit_cluster)
            .or(active.map(|(name, _)| name))
            .ok_or(ContextError::MissingCluster)?;

        let profile = active.map(|(_, profile)| profile);

        let namespace = explicit(explicit_namespace)
            .or_else(|| profile.and_then(|p| stored(&p.namespace)))
            .unwrap_or(DEFAULT_NAMESPACE);
        let provider = profile
            .and_then(|p| stored(&p.provider))
            .unwrap_or(DEFAULT_PROVIDER);
        let kube_context = explicit(explicit_context)
            .or_else(|| profile.and_then(|p| stored(&p.context)))
            .unwrap_or(DEFAULT_KUBE_CONTEXT);

        let context = EffectiveContext {
            cluster: cluster.to_string(),
            namespace: namespace.to_string(),
            provider: provider.to_string(),
            kube_context: kube_context.to_string(),
        };
        debug!(
            "Resolved context: cluster={}, namespace={}, provider={}, context={}",
            context.cluster, context.namespace, context.provider, context.kube_context
        );
        Ok(context)
    }
}

/// What `config view` prints.
#[derive(Debug, Clone, Serialize)]
pub struct ContextView {
    #[serde(flatten)]
    pub context: EffectiveContext,
    pub config_file: String,
}

#[derive(Serialize, Tabled)]
struct Setting {
    #[tabled(rename = "SETTING")]
    name: &'static str,
    #[tabled(rename = "VALUE")]
    value: String,
}

impl ContextView {
    fn settings(&self) -> Vec<Setting> {
        vec![
            Setting {
                name: "Current Cluster",
                value: self.context.cluster.clone(),
            },
            Setting {
                name: "Provider",
                value: self.context.provider.clone(),
            },
            Setting {
                name: "Namespace",
                value: self.context.namespace.clone(),
            },
            Setting {
                name: "Context",
                value: self.context.kube_context.clone(),
            },
            Setting {
                name: "Config File",
                value: self.config_file.clone(),
            },
        ]
    }
}

impl Formattable for ContextView {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError> {
        match f {
            OutputFormat::Json(options) => {
                if options.pretty {
                    Ok(serde_json::to_string_pretty(self)?)
                } else {
                    Ok(serde_json::to_string(self)?)
                }
            }
            _ => crate::format::format_rows(&self.settings(), f),
        }
    }
}

/// Resources a resource command needs once its context is resolved.
pub struct ExecutionContext {
    context: EffectiveContext,
    remote: Arc<dyn RemoteCall>,
}

impl ExecutionContext {
    /// Connects to the cluster of `context` and bootstraps the platform transport.
    pub async fn connect(context: EffectiveContext) -> Result<Self, ConnectError> {
        if context.kube_context.is_empty() {
            warn!("no kube-context specified in config, using current system default");
        }

        let secrets = KubeSecretProvider::connect(&context.kube_context).await?;
        info!(context = %context.kube_context, "connected to kubernetes cluster");

        let transport = platform::connect(&context, &secrets).await?;
        Ok(Self::with_remote(context, Arc::new(transport)))
    }

    pub fn with_remote(context: EffectiveContext, remote: Arc<dyn RemoteCall>) -> Self {
        Self { context, remote }
    }

    pub fn context(&self) -> &EffectiveContext {
        &self.context
    }

    pub fn users(&self) -> UserService {
        UserService::new(self.remote.clone())
    }

    pub fn roles(&self) -> RoleService {
        RoleService::new(self.remote.clone())
    }

    pub fn integrations(&self) -> IntegrationService {
        IntegrationService::new(self.remote.clone())
    }

    pub fn streams(&self) -> StreamService {
        StreamService::new(self.remote.clone())
    }
}
