use crate::adapters::protocol::constants::{DEFAULT_MAX_FRAME_SIZE, REQUEST_HEADER_SIZE};
use crate::adapters::protocol::dto::{DescribeTopicPartitionsRequest, KafkaRequest, RequestHeader};
use crate::application::error::ApplicationError;
use crate::domain::error::DomainError;
use bytes::{BufMut, Bytes, BytesMut};
use tracing::debug;

use super::base_parser::BaseParser;
use super::traits::PrimitiveParser;

#[derive(Debug, Clone)]
pub struct RequestParser {
    base: BaseParser,
    max_frame_size: usize,
}

impl Default for RequestParser {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FRAME_SIZE)
    }
}

impl RequestParser {
    pub fn new(max_frame_size: usize) -> Self {
        Self {
            base: BaseParser,
            max_frame_size,
        }
    }

    /// Validates the declared message size and returns the body length it
    /// implies.
    pub fn body_len(&self, declared_size: i32) -> Result<usize, ApplicationError> {
        if declared_size < REQUEST_HEADER_SIZE || declared_size as usize > self.max_frame_size {
            return Err(DomainError::MalformedHeader(declared_size).into());
        }
        Ok((declared_size - REQUEST_HEADER_SIZE) as usize)
    }

    /// Decodes one complete frame, size prefix included, from memory.
    /// Bytes past the declared frame are ignored.
    pub fn decode(&self, data: &[u8]) -> Result<KafkaRequest, ApplicationError> {
        debug!(raw = %hex::encode(data), "[REQUEST] decoding frame");
        let mut buf = Bytes::copy_from_slice(data);

        let size = self.base.parse_i32(&mut buf)?;
        let body_len = self.body_len(size)?;
        let header = self.parse_header(&mut buf)?;
        let body = self.base.parse_bytes(&mut buf, body_len)?;

        Ok(KafkaRequest { size, header, body })
    }

    pub fn parse_header(&self, buf: &mut Bytes) -> Result<RequestHeader, ApplicationError> {
        let api_key = self.base.parse_i16(buf)?;
        let api_version = self.base.parse_i16(buf)?;
        let correlation_id = self.base.parse_i32(buf)?;

        debug!(api_key, api_version, correlation_id, "[REQUEST] parsed header");

        Ok(RequestHeader {
            api_key,
            api_version,
            correlation_id,
        })
    }

    /// v0 body: `topic_count: i32 (= 1) | name_len: i16 | name: [u8; name_len]`.
    pub fn parse_describe_topic_partitions(
        &self,
        body: &Bytes,
    ) -> Result<DescribeTopicPartitionsRequest, ApplicationError> {
        let mut buf = body.clone();

        let topic_count = self.base.parse_i32(&mut buf)?;
        if topic_count != 1 {
            return Err(DomainError::UnsupportedTopicCount(topic_count).into());
        }

        let name_len = self.base.parse_i16(&mut buf)?;
        if name_len < 0 {
            return Err(ApplicationError::Protocol(format!(
                "negative topic name length {}",
                name_len
            )));
        }

        let name_bytes = self.base.parse_bytes(&mut buf, name_len as usize)?;
        let topic_name = String::from_utf8(name_bytes.to_vec()).map_err(|_| {
            ApplicationError::Protocol("Invalid topic name encoding".to_string())
        })?;
        debug!(topic_name = %topic_name, "[REQUEST] DescribeTopicPartitions topic");

        Ok(DescribeTopicPartitionsRequest { topic_name })
    }
}

/// Frames a request the way a client would put it on the wire.
pub fn encode_request(header: &RequestHeader, body: &[u8]) -> Vec<u8> {
    let mut buf = BytesMut::with_capacity(4 + REQUEST_HEADER_SIZE as usize + body.len());
    buf.put_i32(REQUEST_HEADER_SIZE + body.len() as i32);
    buf.put_i16(header.api_key);
    buf.put_i16(header.api_version);
    buf.put_i32(header.correlation_id);
    buf.put_slice(body);
    buf.to_vec()
}
