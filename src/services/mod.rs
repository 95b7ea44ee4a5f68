//! One narrow service per resource domain of the platform API.
//!
//! Each service wraps an injected [`RemoteCall`], so tests can substitute the
//! transport without touching the network.

use crate::platform::{ApiError, RemoteCall, RemoteError};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub mod integrations;
pub mod roles;
pub mod streams;
pub mod users;

pub use integrations::IntegrationService;
pub use roles::RoleService;
pub use streams::StreamService;
pub use users::UserService;

/// Calls `endpoint` and decodes the response, tagging failures with `operation`.
pub(crate) async fn invoke<T: DeserializeOwned>(
    remote: &dyn RemoteCall,
    operation: &'static str,
    endpoint: &str,
    args: Value,
) -> Result<T, RemoteError> {
    let value = remote
        .call(endpoint, args)
        .await
        .map_err(|cause| RemoteError { operation, cause })?;

    serde_json::from_value(value).map_err(|e| RemoteError {
        operation,
        cause: ApiError::JsonError(e),
    })
}

/// Like [`invoke`] for list endpoints. A `null` result is an empty listing.
pub(crate) async fn invoke_list<T: DeserializeOwned>(
    remote: &dyn RemoteCall,
    operation: &'static str,
    endpoint: &str,
    args: Value,
) -> Result<Vec<T>, RemoteError> {
    let entries: Option<Vec<T>> = invoke(remote, operation, endpoint, args).await?;
    Ok(entries.unwrap_or_default())
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::platform::{ApiError, RemoteCall};
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use serde_json::Value;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Records every call and answers with queued responses (`null` when empty).
    #[derive(Default)]
    pub struct RecordingRemote {
        pub calls: Mutex<Vec<(String, Value)>>,
        responses: Mutex<VecDeque<Result<Value, u16>>>,
    }

    impl RecordingRemote {
        pub fn respond(self, value: Value) -> Self {
            self.responses.lock().unwrap().push_back(Ok(value));
            self
        }

        pub fn fail(self, status: u16) -> Self {
            self.responses.lock().unwrap().push_back(Err(status));
            self
        }

        pub fn recorded(&self) -> Vec<(String, Value)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RemoteCall for RecordingRemote {
        async fn call(&self, endpoint: &str, args: Value) -> Result<Value, ApiError> {
            self.calls
                .lock()
                .unwrap()
                .push((endpoint.to_string(), args));

            match self.responses.lock().unwrap().pop_front() {
                Some(Ok(value)) => Ok(value),
                Some(Err(status)) => Err(ApiError::UnexpectedStatus {
                    status: StatusCode::from_u16(status).unwrap(),
                    body: "remote failure".to_string(),
                }),
                None => Ok(Value::Null),
            }
        }
    }
}
