use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::debug;

use crate::adapters::protocol::constants::REQUEST_HEADER_SIZE;
use crate::adapters::protocol::dto::{
    DescribeTopicPartitionsRequest, KafkaRequest, KafkaResponse,
};
use crate::application::error::ApplicationError;
use crate::domain::error::DomainError;

use super::request_parser::RequestParser;
use super::response_encoder::ResponseEncoder;

/// Frame codec used by the connection loop: reads requests off a stream and
/// encodes responses for it.
#[derive(Debug, Clone, Default)]
pub struct KafkaProtocolParser {
    request_parser: RequestParser,
    response_encoder: ResponseEncoder,
}

impl KafkaProtocolParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_frame_size(max_frame_size: usize) -> Self {
        Self {
            request_parser: RequestParser::new(max_frame_size),
            response_encoder: ResponseEncoder::new(),
        }
    }

    pub fn parse_request(&self, data: &[u8]) -> Result<KafkaRequest, ApplicationError> {
        self.request_parser.decode(data)
    }

    pub fn parse_describe_topic_partitions(
        &self,
        body: &Bytes,
    ) -> Result<DescribeTopicPartitionsRequest, ApplicationError> {
        self.request_parser.parse_describe_topic_partitions(body)
    }

    pub fn encode_response(&self, response: &KafkaResponse) -> Vec<u8> {
        self.response_encoder.encode(response)
    }

    /// Reads the next request frame.
    ///
    /// `Ok(None)` means the peer closed the stream between frames. A stream
    /// that ends anywhere inside a frame is a `TruncatedFrame`.
    pub async fn read_request<R>(&self, reader: &mut R) -> Result<Option<KafkaRequest>, ApplicationError>
    where
        R: AsyncRead + Unpin,
    {
        // 1. 요청 크기 읽기
        let mut size_bytes = [0u8; 4];
        let read = read_full(reader, &mut size_bytes).await?;
        if read == 0 {
            return Ok(None);
        }
        if read < size_bytes.len() {
            return Err(DomainError::TruncatedFrame {
                needed: size_bytes.len(),
                available: read,
            }
            .into());
        }
        let size = i32::from_be_bytes(size_bytes);
        let body_len = self.request_parser.body_len(size)?;

        // 2. 헤더와 본문 읽기
        let mut frame = vec![0u8; REQUEST_HEADER_SIZE as usize + body_len];
        let read = read_full(reader, &mut frame).await?;
        if read < frame.len() {
            return Err(DomainError::TruncatedFrame {
                needed: frame.len(),
                available: read,
            }
            .into());
        }
        debug!(size, raw = %hex::encode(&frame), "[REQUEST] frame received");

        // 3. 헤더 파싱
        let mut buf = Bytes::from(frame);
        let header = self.request_parser.parse_header(&mut buf)?;

        Ok(Some(KafkaRequest {
            size,
            header,
            body: buf,
        }))
    }
}

/// Fills `buf` until it is full or the stream ends, returning the number of
/// bytes read.
async fn read_full<R>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize>
where
    R: AsyncRead + Unpin,
{
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..]).await?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::protocol::constants::{API_VERSIONS_KEY, DESCRIBE_TOPIC_PARTITIONS_KEY};
    use crate::adapters::protocol::dto::RequestHeader;
    use crate::adapters::protocol::parser::request_parser::encode_request;
    use tokio::io::AsyncWriteExt;

    #[tokio::test]
    async fn test_read_request_from_stream() {
        let parser = KafkaProtocolParser::new();
        let header = RequestHeader::new(DESCRIBE_TOPIC_PARTITIONS_KEY, 0, 55);
        let body = [0, 0, 0, 1, 0, 3, b'a', b'b', b'c'];
        let data = encode_request(&header, &body);

        let mut reader = &data[..];
        let request = parser.read_request(&mut reader).await.unwrap().unwrap();

        assert_eq!(request.header, header);
        assert_eq!(request.size, 17);
        assert_eq!(&request.body[..], &body[..]);
        assert!(parser.read_request(&mut reader).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_read_request_sequential_frames() {
        let parser = KafkaProtocolParser::new();
        let mut data = encode_request(&RequestHeader::new(API_VERSIONS_KEY, 4, 1), &[]);
        data.extend(encode_request(&RequestHeader::new(API_VERSIONS_KEY, 3, 2), &[1, 2]));

        let mut reader = &data[..];
        let first = parser.read_request(&mut reader).await.unwrap().unwrap();
        let second = parser.read_request(&mut reader).await.unwrap().unwrap();

        assert_eq!(first.header.correlation_id, 1);
        assert_eq!(second.header.correlation_id, 2);
        assert_eq!(&second.body[..], &[1, 2]);
    }

    #[tokio::test]
    async fn test_read_request_waits_for_split_writes() {
        let parser = KafkaProtocolParser::new();
        let data = encode_request(&RequestHeader::new(API_VERSIONS_KEY, 4, 9), b"body");
        let (mut client, mut server) = tokio::io::duplex(64);

        let writer = tokio::spawn(async move {
            for chunk in data.chunks(3) {
                client.write_all(chunk).await.unwrap();
                tokio::task::yield_now().await;
            }
        });

        let request = parser.read_request(&mut server).await.unwrap().unwrap();
        writer.await.unwrap();

        assert_eq!(request.header.correlation_id, 9);
        assert_eq!(&request.body[..], b"body");
    }

    #[tokio::test]
    async fn test_read_request_truncated_stream() {
        let parser = KafkaProtocolParser::new();
        let data = encode_request(&RequestHeader::new(API_VERSIONS_KEY, 4, 9), b"body");

        for len in 1..data.len() {
            let mut reader = &data[..len];
            let err = parser.read_request(&mut reader).await.unwrap_err();
            assert!(
                matches!(err.as_domain(), Some(DomainError::TruncatedFrame { .. })),
                "len {} gave {:?}",
                len,
                err
            );
        }
    }

    #[tokio::test]
    async fn test_read_request_malformed_size() {
        let parser = KafkaProtocolParser::with_max_frame_size(1024);

        for size in [3i32, -8, 4096] {
            let data = size.to_be_bytes();
            let mut reader = &data[..];
            let err = parser.read_request(&mut reader).await.unwrap_err();
            assert_eq!(err.as_domain(), Some(&DomainError::MalformedHeader(size)));
        }
    }
}
