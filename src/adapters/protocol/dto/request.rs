use bytes::Bytes;

use crate::adapters::protocol::constants::REQUEST_HEADER_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestHeader {
    pub api_key: i16,
    pub api_version: i16,
    pub correlation_id: i32,
}

impl RequestHeader {
    pub fn new(api_key: i16, api_version: i16, correlation_id: i32) -> Self {
        Self {
            api_key,
            api_version,
            correlation_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DescribeTopicPartitionsRequest {
    pub topic_name: String,
}

/// A decoded request frame. The body is kept raw; the router decides how to
/// read it based on the header.
#[derive(Debug, Clone, PartialEq)]
pub struct KafkaRequest {
    pub size: i32,
    pub header: RequestHeader,
    pub body: Bytes,
}

impl KafkaRequest {
    pub fn new(header: RequestHeader, body: Bytes) -> Self {
        Self {
            size: REQUEST_HEADER_SIZE + body.len() as i32,
            header,
            body,
        }
    }
}
