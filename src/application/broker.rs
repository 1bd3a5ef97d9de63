use crate::adapters::protocol::constants::{
    API_VERSIONS_KEY, DESCRIBE_TOPIC_PARTITIONS_KEY, DESCRIBE_TOPIC_PARTITIONS_MIN_VERSION,
};
use crate::adapters::protocol::dto::{
    ApiVersionsResponse, DescribeTopicPartitionsResponse, ErrorCode, KafkaRequest, KafkaResponse,
    RequestHeader, ResponsePayload,
};
use crate::adapters::protocol::KafkaProtocolParser;
use crate::domain::api_catalog::ApiCatalog;
use crate::domain::error::DomainError;
use crate::ports::incoming::message_handler::MessageHandler;
use crate::Result;
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;
use tracing::{debug, warn};

/// The operations this broker knows how to answer, resolved from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiRequest {
    ApiVersions { api_version: i16 },
    DescribeTopicPartitions,
    /// Unknown key, or a key without a builder for this version.
    Unsupported { api_key: i16, api_version: i16 },
}

impl ApiRequest {
    pub fn from_header(header: &RequestHeader) -> Self {
        match (header.api_key, header.api_version) {
            (API_VERSIONS_KEY, api_version) => ApiRequest::ApiVersions { api_version },
            (DESCRIBE_TOPIC_PARTITIONS_KEY, DESCRIBE_TOPIC_PARTITIONS_MIN_VERSION) => {
                ApiRequest::DescribeTopicPartitions
            }
            (api_key, api_version) => ApiRequest::Unsupported {
                api_key,
                api_version,
            },
        }
    }
}

/// Routes decoded requests to their response builders.
///
/// Holds nothing mutable: the catalog is shared read-only between every
/// connection.
#[derive(Debug, Clone)]
pub struct KafkaBroker {
    catalog: Arc<ApiCatalog>,
    protocol_parser: KafkaProtocolParser,
}

impl KafkaBroker {
    pub fn new(catalog: Arc<ApiCatalog>) -> Self {
        Self {
            catalog,
            protocol_parser: KafkaProtocolParser::new(),
        }
    }

    pub fn catalog(&self) -> &ApiCatalog {
        &self.catalog
    }

    pub fn route(&self, header: &RequestHeader, body: &Bytes) -> Result<KafkaResponse> {
        match ApiRequest::from_header(header) {
            ApiRequest::ApiVersions { api_version } => {
                Ok(self.handle_api_versions(header.correlation_id, api_version))
            }
            ApiRequest::DescribeTopicPartitions => {
                self.handle_describe_topic_partitions(header.correlation_id, body)
            }
            ApiRequest::Unsupported {
                api_key,
                api_version,
            } => {
                warn!(
                    "{}, answering with the ApiVersions catalog",
                    DomainError::UnsupportedVersion {
                        api_key,
                        api_version
                    }
                );
                Ok(self.api_versions_response(header.correlation_id, ErrorCode::UnsupportedVersion))
            }
        }
    }

    fn handle_api_versions(&self, correlation_id: i32, api_version: i16) -> KafkaResponse {
        let error_code = if self.catalog.is_supported(API_VERSIONS_KEY, api_version) {
            ErrorCode::None
        } else {
            debug!(api_version, "ApiVersions version out of range");
            ErrorCode::UnsupportedVersion
        };

        self.api_versions_response(correlation_id, error_code)
    }

    fn api_versions_response(&self, correlation_id: i32, error_code: ErrorCode) -> KafkaResponse {
        KafkaResponse::new(
            correlation_id,
            ResponsePayload::ApiVersions(ApiVersionsResponse::new(error_code, &self.catalog)),
        )
    }

    // TODO: look the topic up once there is a metadata store; every topic is
    // reported as UNKNOWN_TOPIC_OR_PARTITION for now.
    fn handle_describe_topic_partitions(
        &self,
        correlation_id: i32,
        body: &Bytes,
    ) -> Result<KafkaResponse> {
        let request = self.protocol_parser.parse_describe_topic_partitions(body)?;

        Ok(KafkaResponse::new(
            correlation_id,
            ResponsePayload::DescribeTopicPartitions(
                DescribeTopicPartitionsResponse::new_unknown_topic(request.topic_name),
            ),
        ))
    }
}

#[async_trait]
impl MessageHandler for KafkaBroker {
    async fn handle_request(&self, request: KafkaRequest) -> Result<KafkaResponse> {
        self.route(&request.header, &request.body)
    }
}
