use crate::exchange::{ExchangeAck, OrderStatus};
use crate::models::OrderOutcome;

/// Maps an exchange ack onto a caller-facing outcome.
///
/// Total over every reply shape: a recognized first status is tagged
/// directly, anything else (no statuses at all, or a status this crate does
/// not know) lands in `Malformed` with the raw response intact. A fill that
/// omits the average price falls back to the limit price we computed.
pub fn classify(ack: &ExchangeAck, limit_px: &str) -> OrderOutcome {
    match ack.statuses.first() {
        Some(OrderStatus::Filled {
            oid,
            avg_px,
            total_sz,
        }) => OrderOutcome::Filled {
            avg_price: avg_px.clone().unwrap_or_else(|| limit_px.to_string()),
            total_size: total_sz.clone(),
            oid: *oid,
        },
        Some(OrderStatus::Error(reason)) => OrderOutcome::Rejected {
            reason: reason.clone(),
        },
        Some(OrderStatus::Resting { oid }) => OrderOutcome::Resting { oid: *oid },
        Some(OrderStatus::Other(_)) | None => OrderOutcome::Malformed {
            raw: ack.raw.clone(),
        },
    }
}
