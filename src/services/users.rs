use super::{invoke, invoke_list};
use crate::{
    model::UserEntry,
    platform::{RemoteCall, RemoteError},
};
use serde::de::IgnoredAny;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error};

pub struct UserService {
    remote: Arc<dyn RemoteCall>,
}

impl UserService {
    pub fn new(remote: Arc<dyn RemoteCall>) -> Self {
        Self { remote }
    }

    pub async fn add(&self, user: &UserEntry) -> Result<(), RemoteError> {
        debug!("Adding user {}", user.username);
        let _: IgnoredAny = invoke(
            self.remote.as_ref(),
            "add user",
            "auth/addUser",
            json!({ "user": user }),
        )
        .await
        .inspect_err(|e| {
            error!(error = %e, name = %user.username, roles = ?user.roles, "failed to add user")
        })?;
        Ok(())
    }

    pub async fn delete(&self, username: &str) -> Result<(), RemoteError> {
        let _: IgnoredAny = invoke(
            self.remote.as_ref(),
            "delete user",
            "auth/deleteUser",
            json!({ "username": username }),
        )
        .await
        .inspect_err(|e| error!(error = %e, name = %username, "failed to delete user"))?;
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<UserEntry>, RemoteError> {
        invoke_list(self.remote.as_ref(), "list user", "auth/listUser", json!({}))
            .await
            .inspect_err(|e| error!(error = %e, "failed to list user"))
    }
}
