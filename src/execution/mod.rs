pub mod outcome;

use serde_json::{json, Value};
use tracing::{info, warn};

use crate::api::secrets::{SecretResolver, SecretsClient};
use crate::config::AppConfig;
use crate::error::{Result, TradeError};
use crate::exchange::{ExchangeConnector, OrderTicket};
use crate::models::{OrderOutcome, ResolvedCredentials, TradeRequest};
use crate::pricing::quantize;

pub use outcome::classify;

/// Runs one trade end to end and always returns a structured JSON result.
///
/// This is the operation boundary: no error escapes it. Every failure mode,
/// from a malformed argument object to an exchange transport error, comes
/// back as `{success:false, error:…}` with whatever remediation context the
/// failure carries.
pub async fn execute_trade(
    config: &AppConfig,
    connector: &dyn ExchangeConnector,
    args: Value,
) -> Value {
    match run(config, connector, args).await {
        Ok(result) => result,
        Err(err) => failure(&err),
    }
}

/// The pipeline proper, strictly sequential: resolve credentials, connect,
/// read the mid, attempt the leverage update, read asset metadata, quantize,
/// submit, classify. The first fatal error halts it; there is no retry and
/// no rollback (a changed leverage with no order submitted is accepted).
async fn run(
    config: &AppConfig,
    connector: &dyn ExchangeConnector,
    args: Value,
) -> Result<Value> {
    let request: TradeRequest =
        serde_json::from_value(args).map_err(|err| TradeError::InvalidRequest(err.to_string()))?;
    let size = request.parsed_size()?;
    let leverage = request.parsed_leverage()?;

    // Credentials are resolved fresh for this request and dropped with it.
    let workspace_id = config.workspace_id()?;
    let secrets = SecretsClient::new(config.secrets_api_base()?, config.secrets_api_key()?);
    let mut resolver = SecretResolver::new(&secrets, workspace_id);
    let private_key = resolver.resolve(&request.pk_name).await?;
    let vault_address = match &request.vault_name {
        Some(name) => Some(resolver.resolve(name).await?),
        None => None,
    };
    let creds = ResolvedCredentials {
        private_key,
        vault_address,
        network: config.network,
    };

    let (markets, gateway) = connector.connect(&creds).await?;

    let mid = markets.mid_price(&request.coin).await?;

    if let Some(leverage) = leverage {
        // Best effort: a failed update must never block the order itself.
        if let Err(err) = gateway.set_leverage(&request.coin, leverage).await {
            warn!(
                coin = %request.coin,
                leverage,
                %err,
                "leverage update failed; continuing with the account's current leverage"
            );
        }
    }

    let meta = markets.asset_metadata(&request.coin).await?;
    let plan = quantize(mid, request.side, meta.sz_decimals);
    info!(
        coin = %request.coin,
        mid,
        limit_px = %plan.formatted(),
        sz_decimals = meta.sz_decimals,
        "quantized limit price"
    );

    let ticket = OrderTicket {
        coin: request.coin.clone(),
        asset: meta.index,
        is_buy: request.side.is_buy(),
        limit_px: plan.limit_px,
        sz: size,
        reduce_only: request.reduce_only,
    };
    let ack = gateway.place_ioc(&ticket).await?;
    let outcome = classify(&ack, &plan.formatted());

    Ok(render(&request, leverage, outcome))
}

fn render(request: &TradeRequest, leverage: Option<u32>, outcome: OrderOutcome) -> Value {
    match outcome {
        OrderOutcome::Filled {
            avg_price,
            total_size,
            oid,
        } => json!({
            "success": true,
            "coin": request.coin,
            "side": request.side.as_str(),
            "size": request.size,
            "leverage": leverage,
            "avgFillPrice": avg_price,
            "totalFilled": total_size,
            "oid": oid,
            "message": format!(
                "{} {} {} filled at avg price {}",
                request.side.as_str(), request.size, request.coin, avg_price
            ),
        }),
        OrderOutcome::Resting { oid } => json!({
            "success": true,
            "status": "resting",
            "oid": oid,
            "coin": request.coin,
            "side": request.side.as_str(),
            "message": format!("Order resting on the book (oid {oid}); poll the exchange for fills"),
        }),
        OrderOutcome::Rejected { reason } => json!({
            "success": false,
            "error": reason,
            "coin": request.coin,
            "side": request.side.as_str(),
        }),
        OrderOutcome::Malformed { raw } => json!({
            "success": false,
            "error": "Unexpected response shape from the exchange",
            "response": raw,
        }),
    }
}

/// Converts a pipeline error into the `{success:false}` wire shape,
/// attaching the remediation context the error carries.
fn failure(err: &TradeError) -> Value {
    let mut result = json!({
        "success": false,
        "error": err.to_string(),
    });
    match err {
        TradeError::SecretNotFound { available, .. } => {
            result["availableSecrets"] = json!(available);
        }
        TradeError::UnknownCoin(coin) => {
            result["coin"] = json!(coin);
        }
        _ => {}
    }
    result
}
