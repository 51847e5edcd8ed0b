// Transport seam between the request builders and the analytics engine.
use std::time::Duration;

use dqproto::api::analytics_api_client::AnalyticsApiClient;
use dqproto::api::TaskRequest;
use tonic::transport::{Channel, Endpoint};

use crate::error::Result;
use crate::settings::EngineSettings;

/// The engine boundary: every operation is a named request carrying an
/// encoded payload, answered by an encoded payload. Implementations other
/// than gRPC exist only in tests.
#[tonic::async_trait]
pub trait Engine: Send + Sync {
    async fn process(&self, name: &str, payload: Vec<u8>) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone)]
pub struct GrpcEngine {
    inner: AnalyticsApiClient<Channel>,
}

impl GrpcEngine {
    pub async fn connect(settings: &EngineSettings) -> Result<Self> {
        let endpoint = Endpoint::from_shared(settings.endpoint.clone())?
            .connect_timeout(Duration::from_millis(settings.connect_timeout_ms))
            .timeout(Duration::from_millis(settings.request_timeout_ms));
        tracing::info!(endpoint = %settings.endpoint, "connecting to analytics engine");
        let channel = endpoint.connect().await?;
        Ok(GrpcEngine {
            inner: AnalyticsApiClient::new(channel),
        })
    }
}

#[tonic::async_trait]
impl Engine for GrpcEngine {
    async fn process(&self, name: &str, payload: Vec<u8>) -> Result<Vec<u8>> {
        // The generated stub needs &mut self; cloning a channel-backed client
        // is cheap and keeps this trait usable behind a shared reference.
        let mut client = self.inner.clone();
        let request = TaskRequest {
            name: name.to_string(),
            payload,
        };
        let response = client.process(request).await?;
        Ok(response.into_inner().payload)
    }
}
