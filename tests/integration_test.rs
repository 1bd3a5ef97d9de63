use kafka_wire_stub::{
    adapters::incoming::TcpAdapter,
    adapters::protocol::constants::{
        API_VERSIONS_KEY, DESCRIBE_TOPIC_PARTITIONS_KEY, UNKNOWN_TOPIC_OR_PARTITION,
        UNSUPPORTED_VERSION,
    },
    adapters::protocol::dto::RequestHeader,
    adapters::protocol::parser::encode_request,
    config::create_test_config,
    Result,
};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

async fn start_server() -> Result<SocketAddr> {
    let config = create_test_config();
    let adapter = TcpAdapter::new(
        &config.server.listen_addr,
        config.broker,
        config.protocol_parser,
    )
    .await?;
    let addr = adapter.local_addr()?;

    tokio::spawn(async move {
        let _ = adapter.run().await;
    });

    Ok(addr)
}

async fn read_response(stream: &mut TcpStream) -> Result<(i32, Vec<u8>)> {
    let size = stream.read_i32().await?;
    let correlation_id = stream.read_i32().await?;
    let mut body = vec![0u8; size as usize - 4];
    stream.read_exact(&mut body).await?;
    Ok((correlation_id, body))
}

#[tokio::test]
async fn test_api_versions_over_tcp() -> Result<()> {
    let addr = start_server().await?;
    let mut stream = TcpStream::connect(addr).await?;

    // size 0x13 with a client id and an empty tag buffer in the body
    #[rustfmt::skip]
    let request: Vec<u8> = vec![
        0x00, 0x00, 0x00, 0x13,
        0x00, 0x12, 0x00, 0x04, 0x00, 0x00, 0x00, 0x01,
        0x00, 0x09, b'k', b'a', b'f', b'k', b'a', b'-', b'c', b'l', b'i',
    ];
    stream.write_all(&request).await?;

    let (correlation_id, body) = read_response(&mut stream).await?;
    assert_eq!(correlation_id, 1);

    #[rustfmt::skip]
    let expected: Vec<u8> = vec![
        0x00, 0x00,                                     // error code
        0x03,                                           // 2 entries
        0x00, 0x12, 0x00, 0x00, 0x00, 0x04, 0x00,       // {18, 0, 4}
        0x00, 0x4b, 0x00, 0x00, 0x00, 0x00, 0x00,       // {75, 0, 0}
        0x00, 0x00, 0x00, 0x00,                         // throttle_time_ms
        0x00,                                           // TAG_BUFFER
    ];
    assert_eq!(body, expected);

    Ok(())
}

#[tokio::test]
async fn test_unsupported_version_keeps_connection_open() -> Result<()> {
    let addr = start_server().await?;
    let mut stream = TcpStream::connect(addr).await?;

    let header = RequestHeader::new(API_VERSIONS_KEY, 99, 42);
    stream.write_all(&encode_request(&header, &[])).await?;

    let (correlation_id, body) = read_response(&mut stream).await?;
    assert_eq!(correlation_id, 42);
    assert_eq!(i16::from_be_bytes([body[0], body[1]]), UNSUPPORTED_VERSION);
    assert_eq!(body[2], 3);

    // unknown key on the same connection
    let header = RequestHeader::new(1, 16, 43);
    stream.write_all(&encode_request(&header, &[])).await?;

    let (correlation_id, body) = read_response(&mut stream).await?;
    assert_eq!(correlation_id, 43);
    assert_eq!(i16::from_be_bytes([body[0], body[1]]), UNSUPPORTED_VERSION);

    Ok(())
}

#[tokio::test]
async fn test_describe_topic_partitions_over_tcp() -> Result<()> {
    let addr = start_server().await?;
    let mut stream = TcpStream::connect(addr).await?;

    let header = RequestHeader::new(DESCRIBE_TOPIC_PARTITIONS_KEY, 0, 7);
    let body = [0x00, 0x00, 0x00, 0x01, 0x00, 0x03, b'a', b'b', b'c'];
    stream.write_all(&encode_request(&header, &body)).await?;

    let (correlation_id, body) = read_response(&mut stream).await?;
    assert_eq!(correlation_id, 7);
    assert_eq!(&body[10..13], b"abc");
    assert_eq!(&body[13..29], &[0u8; 16]);
    assert_eq!(i16::from_be_bytes([body[29], body[30]]), UNKNOWN_TOPIC_OR_PARTITION);

    Ok(())
}

#[tokio::test]
async fn test_two_topics_closes_connection_without_response() -> Result<()> {
    let addr = start_server().await?;
    let mut stream = TcpStream::connect(addr).await?;

    let header = RequestHeader::new(DESCRIBE_TOPIC_PARTITIONS_KEY, 0, 9);
    let body = [0x00, 0x00, 0x00, 0x02, 0x00, 0x03, b'a', b'b', b'c'];
    stream.write_all(&encode_request(&header, &body)).await?;

    let mut rest = Vec::new();
    let read = tokio::time::timeout(Duration::from_secs(5), stream.read_to_end(&mut rest))
        .await
        .expect("server should close the connection");
    // a reset instead of a clean close is also acceptable
    if read.is_ok() {
        assert!(rest.is_empty());
    }

    Ok(())
}

#[tokio::test]
async fn test_connections_are_independent() -> Result<()> {
    let addr = start_server().await?;
    let mut first = TcpStream::connect(addr).await?;
    let mut second = TcpStream::connect(addr).await?;

    first
        .write_all(&encode_request(&RequestHeader::new(API_VERSIONS_KEY, 3, 100), &[]))
        .await?;
    second
        .write_all(&encode_request(&RequestHeader::new(API_VERSIONS_KEY, 2, 200), &[]))
        .await?;

    let (second_id, _) = read_response(&mut second).await?;
    let (first_id, _) = read_response(&mut first).await?;
    assert_eq!(first_id, 100);
    assert_eq!(second_id, 200);

    Ok(())
}
