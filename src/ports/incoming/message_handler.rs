use async_trait::async_trait;
use crate::Result;
use crate::adapters::protocol::dto::{KafkaRequest, KafkaResponse};

/// Turns one decoded request into the response to write back.
///
/// An `Err` means the request could not be answered and the connection
/// should be closed without writing anything.
#[async_trait]
pub trait MessageHandler: Send + Sync {
    async fn handle_request(&self, request: KafkaRequest) -> Result<KafkaResponse>;
}
