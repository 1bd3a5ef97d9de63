use crate::adapters::protocol::constants::{NONE, UNKNOWN_TOPIC_OR_PARTITION, UNSUPPORTED_VERSION};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i16)]
pub enum ErrorCode {
    None = NONE,
    UnknownTopicOrPartition = UNKNOWN_TOPIC_OR_PARTITION,
    UnsupportedVersion = UNSUPPORTED_VERSION,
}

impl From<ErrorCode> for i16 {
    fn from(error_code: ErrorCode) -> Self {
        error_code as i16
    }
}
