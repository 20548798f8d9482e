use async_trait::async_trait;
use ethers::signers::LocalWallet;
use ethers::types::H160;
use hyperliquid_rust_sdk::{
    BaseUrl, ClientLimit, ClientOrder, ClientOrderRequest, ExchangeClient, ExchangeDataStatus,
    ExchangeResponseStatus, InfoClient,
};
use tracing::debug;

use crate::config::Network;
use crate::error::{Result, TradeError};
use crate::models::{AssetMetadata, ResolvedCredentials};

use super::{ExchangeAck, ExchangeConnector, Markets, OrderGateway, OrderStatus, OrderTicket};

fn base_url(network: Network) -> BaseUrl {
    match network {
        Network::Mainnet => BaseUrl::Mainnet,
        Network::Testnet => BaseUrl::Testnet,
    }
}

fn sdk_err(err: hyperliquid_rust_sdk::Error) -> TradeError {
    TradeError::Exchange(err.to_string())
}

/// Market reads over the Hyperliquid info endpoint.
pub struct HyperliquidMarkets {
    info: InfoClient,
}

#[async_trait]
impl Markets for HyperliquidMarkets {
    async fn mid_price(&self, coin: &str) -> Result<f64> {
        let mids = self.info.all_mids().await.map_err(sdk_err)?;
        let raw = mids
            .get(coin)
            .ok_or_else(|| TradeError::UnknownCoin(coin.to_string()))?;
        raw.parse::<f64>().map_err(|_| {
            TradeError::Exchange(format!("unparseable mid price {raw:?} for {coin}"))
        })
    }

    async fn asset_metadata(&self, coin: &str) -> Result<AssetMetadata> {
        let meta = self.info.meta().await.map_err(sdk_err)?;
        meta.universe
            .iter()
            .position(|asset| asset.name == coin)
            .map(|index| AssetMetadata {
                index: index as u32,
                sz_decimals: meta.universe[index].sz_decimals,
            })
            .ok_or_else(|| TradeError::UnknownCoin(coin.to_string()))
    }
}

/// Order writes over the signed Hyperliquid exchange endpoint.
pub struct HyperliquidGateway {
    exchange: ExchangeClient,
}

#[async_trait]
impl OrderGateway for HyperliquidGateway {
    async fn set_leverage(&self, coin: &str, leverage: u32) -> Result<()> {
        let status = self
            .exchange
            .update_leverage(leverage, coin, true, None)
            .await
            .map_err(sdk_err)?;
        match status {
            ExchangeResponseStatus::Ok(_) => Ok(()),
            ExchangeResponseStatus::Err(msg) => Err(TradeError::Exchange(msg)),
        }
    }

    async fn place_ioc(&self, ticket: &OrderTicket) -> Result<ExchangeAck> {
        let order = ClientOrderRequest {
            asset: ticket.coin.clone(),
            is_buy: ticket.is_buy,
            reduce_only: ticket.reduce_only,
            limit_px: ticket.limit_px,
            sz: ticket.sz,
            cloid: None,
            order_type: ClientOrder::Limit(ClientLimit {
                tif: "Ioc".to_string(),
            }),
        };

        debug!(
            coin = %ticket.coin,
            asset = ticket.asset,
            is_buy = ticket.is_buy,
            limit_px = ticket.limit_px,
            sz = ticket.sz,
            reduce_only = ticket.reduce_only,
            "submitting IoC order"
        );

        let response = self.exchange.order(order, None).await.map_err(sdk_err)?;
        Ok(into_ack(response))
    }
}

/// Flattens the SDK's response tree into the crate's boundary shape, keeping
/// a rendering of the original for the malformed-response path. A top-level
/// rejection surfaces the same way as a per-order error status.
fn into_ack(response: ExchangeResponseStatus) -> ExchangeAck {
    let raw = format!("{response:?}");
    let statuses = match response {
        ExchangeResponseStatus::Err(msg) => vec![OrderStatus::Error(msg)],
        ExchangeResponseStatus::Ok(inner) => inner
            .data
            .map(|data| {
                data.statuses
                    .into_iter()
                    .map(|status| match status {
                        ExchangeDataStatus::Filled(filled) => OrderStatus::Filled {
                            oid: filled.oid,
                            avg_px: Some(filled.avg_px),
                            total_sz: filled.total_sz,
                        },
                        ExchangeDataStatus::Resting(resting) => OrderStatus::Resting {
                            oid: resting.oid,
                        },
                        ExchangeDataStatus::Error(msg) => OrderStatus::Error(msg),
                        other => OrderStatus::Other(format!("{other:?}")),
                    })
                    .collect()
            })
            .unwrap_or_default(),
    };
    ExchangeAck { statuses, raw }
}

/// Live connector: builds the info and exchange clients for one request from
/// the resolved wallet key and optional vault address.
pub struct HyperliquidConnector;

#[async_trait]
impl ExchangeConnector for HyperliquidConnector {
    async fn connect(
        &self,
        creds: &ResolvedCredentials,
    ) -> Result<(Box<dyn Markets>, Box<dyn OrderGateway>)> {
        let wallet: LocalWallet = creds
            .private_key
            .trim()
            .parse()
            .map_err(|_| TradeError::InvalidPrivateKey)?;

        let vault = match &creds.vault_address {
            Some(addr) => Some(addr.trim().parse::<H160>().map_err(|_| {
                TradeError::InvalidRequest(format!("vault address {addr:?} is not a valid address"))
            })?),
            None => None,
        };

        let url = base_url(creds.network);
        let info = InfoClient::new(None, Some(url)).await.map_err(sdk_err)?;
        let exchange = ExchangeClient::new(None, wallet, Some(url), None, vault)
            .await
            .map_err(sdk_err)?;

        Ok((
            Box::new(HyperliquidMarkets { info }),
            Box::new(HyperliquidGateway { exchange }),
        ))
    }
}
