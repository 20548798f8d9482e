pub mod secrets;

pub use secrets::{find_secret, strip_quotes, SecretEntry, SecretResolver, SecretsClient};
