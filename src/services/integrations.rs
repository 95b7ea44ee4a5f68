use super::{invoke, invoke_list};
use crate::{
    model::{CreatedResource, Integration},
    platform::{RemoteCall, RemoteError},
};
use serde::de::IgnoredAny;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error};

pub struct IntegrationService {
    remote: Arc<dyn RemoteCall>,
}

impl IntegrationService {
    pub fn new(remote: Arc<dyn RemoteCall>) -> Self {
        Self { remote }
    }

    /// Creates the integration and returns its id. The secret document is
    /// sent but never logged.
    pub async fn add(&self, entry: &Integration) -> Result<String, RemoteError> {
        debug!(
            "Adding integration {} of type {} ({} secret key(s))",
            entry.name,
            entry.integration,
            entry.secret.len()
        );
        let created: CreatedResource = invoke(
            self.remote.as_ref(),
            "add integration",
            "platform/addIntegration",
            json!({ "entry": entry }),
        )
        .await
        .inspect_err(|e| {
            error!(error = %e, name = %entry.name, integration = %entry.integration, "failed to add integration")
        })?;
        Ok(created.id)
    }

    pub async fn delete(&self, id: &str) -> Result<(), RemoteError> {
        let _: IgnoredAny = invoke(
            self.remote.as_ref(),
            "delete integration",
            "platform/deleteIntegration",
            json!({ "id": id }),
        )
        .await
        .inspect_err(|e| error!(error = %e, id = %id, "failed to delete integration"))?;
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Integration>, RemoteError> {
        invoke_list(
            self.remote.as_ref(),
            "list integration",
            "platform/listIntegrations",
            json!({}),
        )
        .await
        .inspect_err(|e| error!(error = %e, "failed to list integration"))
    }
}
