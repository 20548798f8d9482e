use thiserror::Error;

/// Fatal failures of the trade pipeline.
///
/// Two things deliberately do not appear here: leverage-update failures,
/// which the orchestrator logs and swallows, and exchange rejections, which
/// are valid terminal outcomes (`OrderOutcome::Rejected`), not errors.
#[derive(Debug, Error)]
pub enum TradeError {
    #[error("{0} is not configured")]
    ConfigurationMissing(&'static str),

    #[error("secret store unavailable: {0}")]
    SecretStoreUnavailable(String),

    /// Carries every name the workspace does have so the caller can
    /// self-correct without a second round trip.
    #[error("Secret \"{name}\" not found in workspace")]
    SecretNotFound { name: String, available: Vec<String> },

    #[error("Coin \"{0}\" not found on the exchange")]
    UnknownCoin(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    // Never echoes the resolved material back to the caller.
    #[error("resolved private key is not valid wallet material")]
    InvalidPrivateKey,

    #[error("exchange call failed: {0}")]
    Exchange(String),
}

impl From<reqwest::Error> for TradeError {
    fn from(err: reqwest::Error) -> Self {
        TradeError::SecretStoreUnavailable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TradeError>;
