//! Infrastructure layer - pool data sources

pub mod http_client;
pub mod mock_api;

pub use http_client::HttpPoolClient;
pub use mock_api::{ApiResponse, MockPoolApi};
