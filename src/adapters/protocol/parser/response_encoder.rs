use bytes::{BufMut, BytesMut};
use tracing::debug;

use crate::adapters::protocol::constants::{NONE, RESPONSE_HEADER_SIZE};
use crate::adapters::protocol::dto::{
    ApiVersionsResponse, DescribeTopicPartitionsResponse, KafkaResponse, ResponsePayload,
};
use super::varint::PutVarint;

/// Placeholder for the topic id and flags of a DescribeTopicPartitions entry.
const TOPIC_PLACEHOLDER_LEN: usize = 16;

#[derive(Debug, Default, Clone)]
pub struct ResponseEncoder;

impl ResponseEncoder {
    pub fn new() -> Self {
        Self
    }

    pub fn encode(&self, response: &KafkaResponse) -> Vec<u8> {
        let mut body = BytesMut::new();

        match &response.payload {
            ResponsePayload::ApiVersions(api_versions) => {
                self.encode_api_versions(api_versions, &mut body)
            }
            ResponsePayload::DescribeTopicPartitions(describe_response) => {
                self.encode_describe_topic_partitions(describe_response, &mut body)
            }
        }

        let result = encode_frame(response.correlation_id, &body);
        debug!(raw = %hex::encode(&result), "[RESPONSE] encoded frame");
        result
    }

    fn encode_api_versions(&self, response: &ApiVersionsResponse, buf: &mut BytesMut) {
        buf.put_i16(response.error_code);

        // api_keys (COMPACT_ARRAY)
        buf.put_compact_array_len(response.api_versions.len());
        for version in &response.api_versions {
            buf.put_i16(version.api_key);
            buf.put_i16(version.min_version);
            buf.put_i16(version.max_version);
            buf.put_tagged_fields();
        }

        buf.put_i32(response.throttle_time_ms);
        buf.put_tagged_fields();
    }

    fn encode_describe_topic_partitions(
        &self,
        response: &DescribeTopicPartitionsResponse,
        buf: &mut BytesMut,
    ) {
        let topic_name = response.topic_name.as_bytes();

        buf.put_i32(NONE as i32);
        // topic count
        buf.put_i32(1);
        buf.put_i16(topic_name.len() as i16);
        buf.put_slice(topic_name);
        buf.put_bytes(0, TOPIC_PLACEHOLDER_LEN);
        buf.put_i16(response.partition_error_code);
        buf.put_i32(0);
    }
}

/// `message_size | correlation_id | body`, where message_size counts the
/// correlation id and the body.
pub fn encode_frame(correlation_id: i32, body: &[u8]) -> Vec<u8> {
    let mut buf = BytesMut::with_capacity(4 + RESPONSE_HEADER_SIZE as usize + body.len());
    buf.put_i32(RESPONSE_HEADER_SIZE + body.len() as i32);
    buf.put_i32(correlation_id);
    buf.put_slice(body);
    buf.to_vec()
}
