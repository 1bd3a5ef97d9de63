use crate::adapters::protocol::constants::{
    API_VERSIONS_KEY, API_VERSIONS_MAX_VERSION, API_VERSIONS_MIN_VERSION,
    DESCRIBE_TOPIC_PARTITIONS_KEY, DESCRIBE_TOPIC_PARTITIONS_MAX_VERSION,
    DESCRIBE_TOPIC_PARTITIONS_MIN_VERSION,
};

/// One API key the broker advertises, with its inclusive version range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedApi {
    pub api_key: i16,
    pub min_version: i16,
    pub max_version: i16,
}

impl SupportedApi {
    pub const fn new(api_key: i16, min_version: i16, max_version: i16) -> Self {
        Self {
            api_key,
            min_version,
            max_version,
        }
    }

    pub fn supports(&self, api_version: i16) -> bool {
        (self.min_version..=self.max_version).contains(&api_version)
    }
}

/// Ordered, read-only list of supported APIs.
///
/// Built once at startup and shared behind an `Arc`; the ApiVersions
/// response serializes it in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCatalog {
    apis: Vec<SupportedApi>,
}

impl ApiCatalog {
    pub fn new(apis: Vec<SupportedApi>) -> Self {
        Self { apis }
    }

    pub fn apis(&self) -> &[SupportedApi] {
        &self.apis
    }

    pub fn len(&self) -> usize {
        self.apis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apis.is_empty()
    }

    pub fn find(&self, api_key: i16) -> Option<&SupportedApi> {
        self.apis.iter().find(|api| api.api_key == api_key)
    }

    /// Unknown keys are never supported.
    pub fn is_supported(&self, api_key: i16, api_version: i16) -> bool {
        self.find(api_key)
            .map(|api| api.supports(api_version))
            .unwrap_or(false)
    }
}

impl Default for ApiCatalog {
    fn default() -> Self {
        Self::new(vec![
            SupportedApi::new(
                API_VERSIONS_KEY,
                API_VERSIONS_MIN_VERSION,
                API_VERSIONS_MAX_VERSION,
            ),
            SupportedApi::new(
                DESCRIBE_TOPIC_PARTITIONS_KEY,
                DESCRIBE_TOPIC_PARTITIONS_MIN_VERSION,
                DESCRIBE_TOPIC_PARTITIONS_MAX_VERSION,
            ),
        ])
    }
}
