use crate::models::Side;

/// Slippage bias applied to the mid price so an IoC limit order behaves like
/// a bounded market order: buys sit above market, sells below.
const BUY_SLIPPAGE: f64 = 1.002;
const SELL_SLIPPAGE: f64 = 0.998;

/// Price snapped to the exchange's tick grid for one asset.
#[derive(Debug, Clone, PartialEq)]
pub struct TickPlan {
    pub tick_size: f64,
    pub limit_px: f64,
    pub price_decimals: usize,
}

impl TickPlan {
    /// Renders the limit price with exactly `price_decimals` fractional
    /// digits, the form the exchange expects on the wire.
    pub fn formatted(&self) -> String {
        format!("{:.*}", self.price_decimals, self.limit_px)
    }
}

/// Tick size and price precision, keyed on the asset's size precision.
///
/// This is a compliance rule imposed by the exchange, encoded as an explicit
/// table rather than derived arithmetically: quoted prices must land on
/// these grids exactly.
pub fn tick_rule(sz_decimals: u32) -> (f64, usize) {
    match sz_decimals {
        d if d >= 5 => (1.0, 0),
        4 => (0.1, 1),
        3 => (0.01, 2),
        _ => (0.001, 3),
    }
}

/// Rounds a price to the nearest multiple of `tick`. Idempotent.
pub fn round_to_tick(px: f64, tick: f64) -> f64 {
    (px / tick).round() * tick
}

/// Computes the limit price for a market-style order: bias the raw price by
/// the slippage tolerance for the side, then snap to the asset's tick grid.
pub fn quantize(raw_price: f64, side: Side, sz_decimals: u32) -> TickPlan {
    let biased = match side {
        Side::Buy => raw_price * BUY_SLIPPAGE,
        Side::Sell => raw_price * SELL_SLIPPAGE,
    };
    let (tick_size, price_decimals) = tick_rule(sz_decimals);
    TickPlan {
        tick_size,
        limit_px: round_to_tick(biased, tick_size),
        price_decimals,
    }
}
