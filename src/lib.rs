// Core modules
pub mod api;
pub mod config;
pub mod error;
pub mod exchange;
pub mod execution;
pub mod models;
pub mod pricing;

// Re-export commonly used types
pub use config::{AppConfig, Network};
pub use error::{Result, TradeError};
pub use execution::execute_trade;
pub use models::*;
