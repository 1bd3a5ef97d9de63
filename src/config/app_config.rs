use crate::adapters::protocol::constants::DEFAULT_MAX_FRAME_SIZE;
use crate::adapters::protocol::KafkaProtocolParser;
use crate::application::broker::KafkaBroker;
use crate::application::ApplicationError;
use crate::domain::api_catalog::ApiCatalog;
use crate::ports::incoming::message_handler::MessageHandler;
use crate::Result;
use std::path::Path;
use std::sync::Arc;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:9092";

pub const LISTEN_ADDR_ENV: &str = "KAFKA_LISTEN_ADDR";
pub const MAX_FRAME_SIZE_ENV: &str = "KAFKA_MAX_FRAME_SIZE";

const LISTENERS_KEY: &str = "listeners";
const MAX_REQUEST_BYTES_KEY: &str = "socket.request.max.bytes";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub max_frame_size: usize, // 요청 한 건의 최대 크기
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            max_frame_size: DEFAULT_MAX_FRAME_SIZE,
        }
    }
}

impl ServerConfig {
    /// Applies the keys this server understands from a `server.properties`
    /// file. Other keys are ignored.
    pub fn apply_properties(&mut self, contents: &str) -> Result<()> {
        for (line_no, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| {
                ApplicationError::Config(format!("line {}: expected key=value", line_no + 1))
            })?;

            match key.trim() {
                LISTENERS_KEY => self.listen_addr = parse_listener(value.trim())?,
                MAX_REQUEST_BYTES_KEY => self.max_frame_size = parse_size(value.trim())?,
                _ => {}
            }
        }
        Ok(())
    }

    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup(LISTEN_ADDR_ENV) {
            self.listen_addr = addr;
        }
        if let Some(size) = lookup(MAX_FRAME_SIZE_ENV) {
            self.max_frame_size = parse_size(&size)?;
        }
        Ok(())
    }
}

/// `PLAINTEXT://host:port` (first listener only). An empty host binds all
/// interfaces.
fn parse_listener(value: &str) -> Result<String> {
    let first = value.split(',').next().unwrap_or_default().trim();
    let addr = match first.split_once("://") {
        Some((_, addr)) => addr,
        None => first,
    };

    let (host, port) = addr
        .rsplit_once(':')
        .ok_or_else(|| ApplicationError::Config(format!("invalid listener '{}'", value)))?;
    port.parse::<u16>()
        .map_err(|_| ApplicationError::Config(format!("invalid listener port '{}'", port)))?;

    let host = if host.is_empty() { "0.0.0.0" } else { host };
    Ok(format!("{}:{}", host, port))
}

fn parse_size(value: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(size) if size >= 8 => Ok(size),
        _ => Err(ApplicationError::Config(format!(
            "invalid max frame size '{}'",
            value
        ))),
    }
}

pub struct AppConfig {
    pub server: ServerConfig,
    pub catalog: Arc<ApiCatalog>,
    pub broker: Arc<dyn MessageHandler>,
    pub protocol_parser: KafkaProtocolParser,
}

impl AppConfig {
    pub fn new(server: ServerConfig) -> Self {
        let catalog = Arc::new(ApiCatalog::default());
        let broker = Arc::new(KafkaBroker::new(Arc::clone(&catalog)));
        let protocol_parser = KafkaProtocolParser::with_max_frame_size(server.max_frame_size);

        Self {
            server,
            catalog,
            broker,
            protocol_parser,
        }
    }

    /// Defaults, then the properties file if given, then environment
    /// overrides.
    pub fn load(server_properties_path: Option<&Path>) -> Result<Self> {
        let mut server = ServerConfig::default();

        if let Some(path) = server_properties_path {
            let contents = std::fs::read_to_string(path).map_err(|e| {
                ApplicationError::Config(format!("cannot read {}: {}", path.display(), e))
            })?;
            server.apply_properties(&contents)?;
        }
        server.apply_env(|key| std::env::var(key).ok())?;

        Ok(Self::new(server))
    }
}
