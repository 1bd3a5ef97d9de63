#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Stream or buffer ended before the frame was complete.
    TruncatedFrame { needed: usize, available: usize },
    /// Declared message size is negative, smaller than the header or too large.
    MalformedHeader(i32),
    /// DescribeTopicPartitions v0 only handles exactly one topic per request.
    UnsupportedTopicCount(i32),
    UnsupportedVersion { api_key: i16, api_version: i16 },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::TruncatedFrame { needed, available } => write!(
                f,
                "Truncated frame: need {} bytes but has {}",
                needed, available
            ),
            DomainError::MalformedHeader(size) => {
                write!(f, "Malformed header: declared size {}", size)
            }
            DomainError::UnsupportedTopicCount(count) => {
                write!(f, "Unsupported topic count: expected 1, got {}", count)
            }
            DomainError::UnsupportedVersion {
                api_key,
                api_version,
            } => write!(
                f,
                "Unsupported version {} for api key {}",
                api_version, api_key
            ),
        }
    }
}

impl std::error::Error for DomainError {}
