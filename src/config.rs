use crate::error::{Result, TradeError};

/// Which exchange deployment to trade against. Consumed where the exchange
/// client is constructed; everything else in the pipeline is network-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    pub fn parse(raw: &str) -> Network {
        match raw.trim().to_ascii_lowercase().as_str() {
            "testnet" => Network::Testnet,
            _ => Network::Mainnet,
        }
    }
}

/// Process-level configuration, read once from the environment. Everything a
/// single request needs beyond this (keys, vault address) comes from the
/// secret store at call time.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub secrets_api_base: Option<String>,
    pub secrets_api_key: Option<String>,
    pub workspace_id: Option<u64>,
    pub network: Network,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let workspace_id = std::env::var("WORKSPACE_ID")
            .ok()
            .and_then(|raw| raw.trim().parse().ok());
        let network = std::env::var("HL_NETWORK")
            .map(|raw| Network::parse(&raw))
            .unwrap_or(Network::Mainnet);

        Self {
            secrets_api_base: std::env::var("SECRETS_API_BASE").ok(),
            secrets_api_key: std::env::var("SECRETS_API_KEY").ok(),
            workspace_id,
            network,
        }
    }

    pub fn secrets_api_base(&self) -> Result<&str> {
        self.secrets_api_base
            .as_deref()
            .ok_or(TradeError::ConfigurationMissing("SECRETS_API_BASE"))
    }

    pub fn secrets_api_key(&self) -> Result<&str> {
        self.secrets_api_key
            .as_deref()
            .ok_or(TradeError::ConfigurationMissing("SECRETS_API_KEY"))
    }

    pub fn workspace_id(&self) -> Result<u64> {
        self.workspace_id
            .ok_or(TradeError::ConfigurationMissing("WORKSPACE_ID"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_parse() {
        assert_eq!(Network::parse("testnet"), Network::Testnet);
        assert_eq!(Network::parse(" Testnet "), Network::Testnet);
        assert_eq!(Network::parse("mainnet"), Network::Mainnet);
        // Anything unrecognized falls back to mainnet
        assert_eq!(Network::parse("staging"), Network::Mainnet);
    }

    #[test]
    fn test_missing_workspace_is_configuration_error() {
        let config = AppConfig {
            secrets_api_base: Some("http://localhost".to_string()),
            secrets_api_key: Some("key".to_string()),
            workspace_id: None,
            network: Network::Testnet,
        };

        let err = config.workspace_id().unwrap_err();
        assert!(matches!(
            err,
            TradeError::ConfigurationMissing("WORKSPACE_ID")
        ));
    }
}
