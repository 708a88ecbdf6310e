use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::{ServiceConfig, WireFormat, SERVICE_VERSION};
use crate::domain::Operation;
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::request::{
    AdvancedRequest, ByCategoryRequest, ByKeywordsRequest, ByProductRequest, HistogramsRequest,
    InStoresRequest, KeywordsRecommendationRequest, VersionRequest,
};
use crate::{response, FindingError, ValidationError};

/// Shared handle that sends encoded bodies to the configured endpoint.
#[derive(Clone)]
pub struct Transport {
    config: Arc<ServiceConfig>,
    http_client: Arc<dyn HttpClient>,
}

impl Debug for Transport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Transport {
    pub fn new(config: ServiceConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config: Arc::new(config),
            http_client,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn wire_format(&self) -> WireFormat {
        self.config.wire_format()
    }

    /// Builds the outgoing HTTP call for `operation` carrying `body`.
    pub fn build_request(&self, operation: Operation, body: String) -> HttpRequest {
        let format = self.config.wire_format();
        let timeout_ms = u64::try_from(self.config.timeout().as_millis()).unwrap_or(u64::MAX);

        HttpRequest::post(self.config.endpoint(), body)
            .with_header("X-EBAY-SOA-SERVICE-VERSION", SERVICE_VERSION)
            .with_header("X-EBAY-SOA-OPERATION-NAME", operation.as_str())
            .with_header("X-EBAY-SOA-SECURITY-APPNAME", self.config.app_id())
            .with_header("X-EBAY-SOA-REQUEST-DATA-FORMAT", format.as_str())
            .with_header("X-EBAY-SOA-RESPONSE-DATA-FORMAT", format.as_str())
            .with_header("X-EBAY-SOA-GLOBAL-ID", self.config.global_id().as_str())
            .with_header("Content-Type", format.content_type())
            .with_timeout_ms(timeout_ms)
    }

    /// Performs one round trip. Anything but status 200 is an error.
    #[tracing::instrument(
        skip_all,
        fields(operation = %operation, endpoint = %self.config.endpoint())
    )]
    pub async fn send<R>(&self, operation: Operation, body: String) -> Result<R, FindingError>
    where
        R: DeserializeOwned,
    {
        let request = self.build_request(operation, body);
        debug!(bytes = request.body.len(), "sending finding request");

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|error| FindingError::Transport {
                message: error.message().to_owned(),
                retryable: error.retryable(),
            })?;
        debug!(
            status = response.status,
            bytes = response.body.len(),
            "received finding response"
        );

        if !response.is_ok() {
            return Err(FindingError::Status {
                status: response.status,
                body: response.body,
            });
        }

        response::decode(&response.body, self.config.wire_format())
    }
}

/// Entry point: holds the configuration and transport and hands out one
/// request builder per operation.
#[derive(Debug, Clone)]
pub struct FindingService {
    transport: Transport,
}

impl FindingService {
    /// Production service for `app_id` using the reqwest transport.
    pub fn new(app_id: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::with_config(ServiceConfig::new(app_id)?))
    }

    pub fn with_config(config: ServiceConfig) -> Self {
        Self {
            transport: Transport::new(config, Arc::new(ReqwestHttpClient::new())),
        }
    }

    /// Replaces the HTTP transport, keeping the configuration.
    pub fn with_http_client(self, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            transport: Transport {
                config: self.transport.config,
                http_client,
            },
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        self.transport.config()
    }

    pub fn advanced_request(&self) -> AdvancedRequest {
        AdvancedRequest::new(self.transport.clone())
    }

    pub fn by_category_request(&self) -> ByCategoryRequest {
        ByCategoryRequest::new(self.transport.clone())
    }

    pub fn by_keywords_request(&self) -> ByKeywordsRequest {
        ByKeywordsRequest::new(self.transport.clone())
    }

    pub fn by_product_request(&self) -> ByProductRequest {
        ByProductRequest::new(self.transport.clone())
    }

    pub fn in_stores_request(&self) -> InStoresRequest {
        InStoresRequest::new(self.transport.clone())
    }

    pub fn histograms_request(&self) -> HistogramsRequest {
        HistogramsRequest::new(self.transport.clone())
    }

    pub fn keywords_recommendation_request(&self) -> KeywordsRecommendationRequest {
        KeywordsRecommendationRequest::new(self.transport.clone())
    }

    pub fn version_request(&self) -> VersionRequest {
        VersionRequest::new(self.transport.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::GlobalId;
    use crate::http_client::{HttpError, HttpResponse, StubHttpClient};
    use crate::response::VersionResponse;

    fn transport_with(client: StubHttpClient) -> (Transport, Arc<StubHttpClient>) {
        let client = Arc::new(client);
        let config = ServiceConfig::new("app-123")
            .expect("valid app id")
            .with_global_id(GlobalId::De)
            .with_timeout(Duration::from_millis(1500))
            .with_wire_format(WireFormat::Json);
        (Transport::new(config, client.clone()), client)
    }

    #[test]
    fn build_request_sets_every_service_header() {
        let (transport, _) = transport_with(StubHttpClient::responding(HttpResponse::ok("{}")));
        let request = transport.build_request(Operation::FindItemsByKeywords, String::from("{}"));

        assert_eq!(request.header("X-EBAY-SOA-SERVICE-VERSION"), Some("1.13.0"));
        assert_eq!(
            request.header("X-EBAY-SOA-OPERATION-NAME"),
            Some("findItemsByKeywords")
        );
        assert_eq!(request.header("X-EBAY-SOA-SECURITY-APPNAME"), Some("app-123"));
        assert_eq!(request.header("X-EBAY-SOA-REQUEST-DATA-FORMAT"), Some("JSON"));
        assert_eq!(request.header("X-EBAY-SOA-RESPONSE-DATA-FORMAT"), Some("JSON"));
        assert_eq!(request.header("X-EBAY-SOA-GLOBAL-ID"), Some("EBAY-DE"));
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.timeout_ms, 1500);
    }

    #[tokio::test]
    async fn non_200_status_is_reported_with_body() {
        let (transport, _) =
            transport_with(StubHttpClient::responding(HttpResponse::new(503, "busy")));

        let error = transport
            .send::<VersionResponse>(Operation::GetVersion, String::from("{}"))
            .await
            .expect_err("status error");

        assert_eq!(
            error,
            FindingError::Status {
                status: 503,
                body: String::from("busy"),
            }
        );
    }

    #[tokio::test]
    async fn transport_failure_keeps_retry_hint() {
        let (transport, client) =
            transport_with(StubHttpClient::failing(HttpError::new("connection reset")));

        let error = transport
            .send::<VersionResponse>(Operation::GetVersion, String::from("{}"))
            .await
            .expect_err("transport error");

        assert_eq!(error.to_string(), "sending request: connection reset");
        assert!(error.is_retryable());
        assert_eq!(client.requests().len(), 1);
    }

    #[test]
    fn with_http_client_keeps_configuration() {
        let service = FindingService::new("app-123")
            .expect("valid app id")
            .with_http_client(Arc::new(StubHttpClient::responding(HttpResponse::ok(""))));

        assert_eq!(service.config().app_id(), "app-123");
    }
}
