use super::{invoke, invoke_list};
use crate::{
    model::{CreatedResource, InstanceRole},
    platform::{RemoteCall, RemoteError},
};
use serde::de::IgnoredAny;
use serde_json::json;
use std::sync::Arc;
use tracing::error;

/// Assumed AWS roles for the EKS pod identity agent.
pub struct RoleService {
    remote: Arc<dyn RemoteCall>,
}

impl RoleService {
    pub fn new(remote: Arc<dyn RemoteCall>) -> Self {
        Self { remote }
    }

    pub async fn add_assumed_role(
        &self,
        name: &str,
        role_arn: &str,
        external_id: &str,
    ) -> Result<String, RemoteError> {
        let created: CreatedResource = invoke(
            self.remote.as_ref(),
            "add assumed role",
            "platform/addAssumedRole",
            json!({ "name": name, "roleARN": role_arn, "externalID": external_id }),
        )
        .await
        .inspect_err(|e| {
            error!(error = %e, name = %name, role = %role_arn, "failed to add assumed role")
        })?;
        Ok(created.id)
    }

    pub async fn delete_assumed_role(&self, id: &str) -> Result<(), RemoteError> {
        let _: IgnoredAny = invoke(
            self.remote.as_ref(),
            "delete assumed role",
            "platform/deleteAssumedRole",
            json!({ "id": id }),
        )
        .await
        .inspect_err(|e| error!(error = %e, id = %id, "failed to delete assumed role"))?;
        Ok(())
    }

    pub async fn list_assumed_roles(&self) -> Result<Vec<InstanceRole>, RemoteError> {
        invoke_list(
            self.remote.as_ref(),
            "list assumed role",
            "platform/listAssumedRole",
            json!({}),
        )
        .await
        .inspect_err(|e| error!(error = %e, "failed to list assumed role"))
    }
}
