pub mod api_catalog;
pub mod error;

pub use api_catalog::{ApiCatalog, SupportedApi};
pub use error::DomainError;
