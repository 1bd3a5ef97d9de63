use crate::adapters::protocol::KafkaProtocolParser;
use crate::application::ApplicationError;
use crate::ports::incoming::message_handler::MessageHandler;
use crate::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

pub struct TcpAdapter {
    listener: TcpListener,
    message_handler: Arc<dyn MessageHandler>,
    protocol_parser: KafkaProtocolParser,
}

impl TcpAdapter {
    pub async fn new(
        addr: &str,
        message_handler: Arc<dyn MessageHandler>,
        protocol_parser: KafkaProtocolParser,
    ) -> Result<Self> {
        let listener = TcpListener::bind(addr).await.map_err(ApplicationError::Io)?;
        Ok(Self {
            listener,
            message_handler,
            protocol_parser,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener.local_addr().map_err(ApplicationError::Io)
    }

    /// Accepts connections forever, one task per connection.
    pub async fn run(&self) -> Result<()> {
        info!("Server listening on {}", self.local_addr()?);

        loop {
            match self.listener.accept().await {
                Ok((stream, peer)) => {
                    let message_handler = Arc::clone(&self.message_handler);
                    let protocol_parser = self.protocol_parser.clone();

                    tokio::spawn(async move {
                        info!(%peer, "Accepted connection");
                        match handle_connection(stream, message_handler, protocol_parser).await {
                            Ok(()) => info!(%peer, "Client disconnected"),
                            Err(e) => warn!(%peer, "Closing connection: {}", e),
                        }
                    });
                }
                Err(e) => error!("Accept error: {}", e),
            }
        }
    }
}

/// Serves one connection until the peer closes it or something fails.
///
/// Requests are handled strictly one at a time. Any decode, routing or I/O
/// error ends the loop without writing a response for the failed request.
pub async fn handle_connection<S>(
    mut stream: S,
    message_handler: Arc<dyn MessageHandler>,
    protocol_parser: KafkaProtocolParser,
) -> Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    loop {
        // 1. 요청 읽기
        let request = match protocol_parser.read_request(&mut stream).await? {
            Some(request) => request,
            None => return Ok(()),
        };
        info!(
            api_key = request.header.api_key,
            api_version = request.header.api_version,
            correlation_id = request.header.correlation_id,
            size = request.size,
            "Parsed request"
        );

        // 2. 라우팅
        let response = message_handler.handle_request(request).await?;

        // 3. 응답 인코딩 및 전송
        let encoded = protocol_parser.encode_response(&response);
        stream.write_all(&encoded).await.map_err(ApplicationError::Io)?;
        stream.flush().await.map_err(ApplicationError::Io)?;
        debug!(
            correlation_id = response.correlation_id,
            bytes = encoded.len(),
            "Sent response"
        );
    }
}
