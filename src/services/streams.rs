use super::invoke;
use crate::{
    model::{CreatedResource, DataSinkConfig, DataSourceConfig, RouterConfig},
    platform::{RemoteCall, RemoteError},
};
use serde_json::json;
use std::sync::Arc;
use tracing::error;

/// Sources, sinks and routers of the streaming pipeline.
pub struct StreamService {
    remote: Arc<dyn RemoteCall>,
}

impl StreamService {
    pub fn new(remote: Arc<dyn RemoteCall>) -> Self {
        Self { remote }
    }

    pub async fn add_source(&self, source: &DataSourceConfig) -> Result<String, RemoteError> {
        let created: CreatedResource = invoke(
            self.remote.as_ref(),
            "add data source",
            "platform/addDataSource",
            json!({ "source": source }),
        )
        .await
        .inspect_err(|e| {
            error!(error = %e, name = %source.name, source_type = %source.source_type, "failed to add data source")
        })?;
        Ok(created.id)
    }

    pub async fn add_sink(&self, sink: &DataSinkConfig) -> Result<String, RemoteError> {
        let created: CreatedResource = invoke(
            self.remote.as_ref(),
            "add data sink",
            "platform/addDataSink",
            json!({ "sink": sink }),
        )
        .await
        .inspect_err(|e| {
            error!(error = %e, name = %sink.name, sink_type = %sink.sink_type, "failed to add data sink")
        })?;
        Ok(created.id)
    }

    pub async fn add_router(&self, router: &RouterConfig) -> Result<String, RemoteError> {
        let created: CreatedResource = invoke(
            self.remote.as_ref(),
            "add router",
            "platform/addRouter",
            json!({ "router": router }),
        )
        .await
        .inspect_err(|e| error!(error = %e, name = %router.name, "failed to add router"))?;
        Ok(created.id)
    }
}
