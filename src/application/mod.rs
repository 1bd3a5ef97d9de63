pub mod broker;
pub mod error;

pub use broker::{ApiRequest, KafkaBroker};
pub use error::{ApplicationError, Result};
