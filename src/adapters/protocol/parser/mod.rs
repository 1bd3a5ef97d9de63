pub mod base_parser;
pub mod request_parser;
pub mod response_encoder;
pub mod tcp_parser;
pub mod traits;
pub mod varint;

pub use base_parser::BaseParser;
pub use request_parser::{encode_request, RequestParser};
pub use response_encoder::{encode_frame, ResponseEncoder};
pub use tcp_parser::KafkaProtocolParser;
pub use traits::*;
