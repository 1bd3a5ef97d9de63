use crate::adapters::protocol::dto::ErrorCode;
use crate::domain::api_catalog::{ApiCatalog, SupportedApi};

#[derive(Debug, Clone, PartialEq)]
pub struct ApiVersionsResponse {
    pub error_code: i16,
    pub api_versions: Vec<SupportedApi>,
    pub throttle_time_ms: i32,
}

impl ApiVersionsResponse {
    pub fn new(error_code: ErrorCode, catalog: &ApiCatalog) -> Self {
        Self {
            error_code: error_code.into(),
            api_versions: catalog.apis().to_vec(),
            throttle_time_ms: 0,
        }
    }
}

/// Fixed-shape answer for a single topic. No partition lookup happens; the
/// encoder fills the topic id and flags with zeroes and reports
/// UNKNOWN_TOPIC_OR_PARTITION for the partition.
#[derive(Debug, Clone, PartialEq)]
pub struct DescribeTopicPartitionsResponse {
    pub topic_name: String,
    pub partition_error_code: i16,
}

impl DescribeTopicPartitionsResponse {
    pub fn new_unknown_topic(topic_name: String) -> Self {
        Self {
            topic_name,
            partition_error_code: ErrorCode::UnknownTopicOrPartition.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponsePayload {
    ApiVersions(ApiVersionsResponse),
    DescribeTopicPartitions(DescribeTopicPartitionsResponse),
}

#[derive(Debug, Clone, PartialEq)]
pub struct KafkaResponse {
    pub correlation_id: i32,
    pub payload: ResponsePayload,
}

impl KafkaResponse {
    pub fn new(correlation_id: i32, payload: ResponsePayload) -> Self {
        Self {
            correlation_id,
            payload,
        }
    }
}
