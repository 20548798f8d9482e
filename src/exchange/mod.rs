pub mod hyperliquid;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{AssetMetadata, ResolvedCredentials};

pub use hyperliquid::HyperliquidConnector;

/// Read side of the exchange: mid prices and per-asset metadata.
#[async_trait]
pub trait Markets: Send + Sync {
    async fn mid_price(&self, coin: &str) -> Result<f64>;
    async fn asset_metadata(&self, coin: &str) -> Result<AssetMetadata>;
}

/// One immediate-or-cancel limit order, fully priced and sized.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTicket {
    pub coin: String,
    /// Index of the coin in the exchange universe, kept for logging and
    /// protocols that address assets by position.
    pub asset: u32,
    pub is_buy: bool,
    pub limit_px: f64,
    pub sz: f64,
    pub reduce_only: bool,
}

/// Per-order status reported by the exchange.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderStatus {
    Filled {
        oid: u64,
        avg_px: Option<String>,
        total_sz: String,
    },
    Resting {
        oid: u64,
    },
    Error(String),
    /// A status this crate does not recognize, kept as its debug rendering.
    Other(String),
}

/// Exchange reply to one submission. `raw` preserves the full response so an
/// unrecognized shape can be handed back to the caller intact.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeAck {
    pub statuses: Vec<OrderStatus>,
    pub raw: String,
}

/// Write side of the exchange: leverage updates and order submission.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Requests cross-margin leverage for `coin`. The orchestrator treats
    /// any failure here as non-fatal.
    async fn set_leverage(&self, coin: &str, leverage: u32) -> Result<()>;

    async fn place_ioc(&self, ticket: &OrderTicket) -> Result<ExchangeAck>;
}

/// Builds per-request exchange handles from freshly resolved credentials.
/// Implementations own network selection and request signing.
#[async_trait]
pub trait ExchangeConnector: Send + Sync {
    async fn connect(
        &self,
        creds: &ResolvedCredentials,
    ) -> Result<(Box<dyn Markets>, Box<dyn OrderGateway>)>;
}
