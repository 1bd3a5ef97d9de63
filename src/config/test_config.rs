use super::app_config::{AppConfig, ServerConfig};

/// Default catalog on an ephemeral local port.
pub fn create_test_config() -> AppConfig {
    AppConfig::new(ServerConfig {
        listen_addr: "127.0.0.1:0".to_string(),
        ..ServerConfig::default()
    })
}
