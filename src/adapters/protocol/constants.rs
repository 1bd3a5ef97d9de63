/// Size of api_key + api_version + correlation_id, counted by the request's
/// message size together with the body.
pub const REQUEST_HEADER_SIZE: i32 = 8;

/// The response message size counts the correlation id that follows it.
pub const RESPONSE_HEADER_SIZE: i32 = 4;

/// Upper bound on a declared request size unless configured otherwise.
pub const DEFAULT_MAX_FRAME_SIZE: usize = 100 * 1024 * 1024;

/// ApiVersions API의 키 값
/// 클라이언트가 브로커가 지원하는 API 버전을 조회할 때 사용함
pub const API_VERSIONS_KEY: i16 = 18;
pub const API_VERSIONS_MIN_VERSION: i16 = 0;
pub const API_VERSIONS_MAX_VERSION: i16 = 4;

/// DescribeTopicPartitions API는 버전 0만 지원
pub const DESCRIBE_TOPIC_PARTITIONS_KEY: i16 = 75;
pub const DESCRIBE_TOPIC_PARTITIONS_MIN_VERSION: i16 = 0;
pub const DESCRIBE_TOPIC_PARTITIONS_MAX_VERSION: i16 = 0;

/// Error codes
pub const NONE: i16 = 0;
pub const UNKNOWN_TOPIC_OR_PARTITION: i16 = 3;
pub const UNSUPPORTED_VERSION: i16 = 35;

/// Empty tagged-field section
pub const TAG_BUFFER: u8 = 0;
