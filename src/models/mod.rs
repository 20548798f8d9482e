use serde::{Deserialize, Serialize};

use crate::config::Network;
use crate::error::{Result, TradeError};

/// Order direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn is_buy(self) -> bool {
        matches!(self, Side::Buy)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

/// Wire shape of the trade operation's argument object.
///
/// `size` and `leverage` arrive as strings; they are validated and parsed
/// explicitly rather than trusted at deserialization time.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeRequest {
    pub coin: String,
    pub side: Side,
    pub size: String,
    #[serde(default)]
    pub leverage: Option<String>,
    #[serde(default, rename = "reduceOnly")]
    pub reduce_only: bool,
    /// Secret name under which the wallet private key is stored.
    pub pk_name: String,
    /// Secret name under which a vault address is stored, if trading on
    /// behalf of a vault.
    #[serde(default)]
    pub vault_name: Option<String>,
}

impl TradeRequest {
    /// `size` must be a positive numeric string.
    pub fn parsed_size(&self) -> Result<f64> {
        let size: f64 = self.size.trim().parse().map_err(|_| {
            TradeError::InvalidRequest(format!("size {:?} is not numeric", self.size))
        })?;
        if size.is_finite() && size > 0.0 {
            Ok(size)
        } else {
            Err(TradeError::InvalidRequest(format!(
                "size {:?} must be positive",
                self.size
            )))
        }
    }

    /// `leverage`, when present, must be a whole-number string.
    pub fn parsed_leverage(&self) -> Result<Option<u32>> {
        match &self.leverage {
            None => Ok(None),
            Some(raw) => raw.trim().parse::<u32>().map(Some).map_err(|_| {
                TradeError::InvalidRequest(format!("leverage {raw:?} is not a whole number"))
            }),
        }
    }
}

/// Identity for one request, resolved from the secret store. Built fresh per
/// invocation and dropped with it; never cached or persisted.
#[derive(Debug, Clone)]
pub struct ResolvedCredentials {
    pub private_key: String,
    pub vault_address: Option<String>,
    pub network: Network,
}

/// Per-coin facts needed to build a valid order. Re-derived on every request
/// so a changed exchange universe is picked up immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetMetadata {
    /// Position of the coin in the exchange's universe listing.
    pub index: u32,
    /// Size precision; also drives the price tick table.
    pub sz_decimals: u32,
}

/// Caller-facing result of one submission, recovered from the exchange's
/// loosely-typed reply.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    Filled {
        avg_price: String,
        total_size: String,
        oid: u64,
    },
    Resting {
        oid: u64,
    },
    Rejected {
        reason: String,
    },
    /// Reply shape this crate does not recognize; the raw response is kept
    /// intact for diagnostics.
    Malformed {
        raw: String,
    },
}
