use std::fmt;

use anyhow::{anyhow, bail, Result};

const GOERLI_HTTP_ADDRESS: &str = "https://eth-goerli.alchemyapi.io/v2/";

pub enum Network {
    /// In-process sandbox ledger with a controllable clock.
    Local,
    Goerli { url: String, private_key: String },
}

impl fmt::Debug for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Local => f.write_str("Local"),
            Network::Goerli { url, private_key } => f
                .debug_struct("Goerli")
                .field(
                    "url",
                    &format_args!(
                        "{}<redacted>",
                        url.get(..GOERLI_HTTP_ADDRESS.len()).unwrap_or_default()
                    ),
                )
                .field("private_key", &format_args!("<{} chars>", private_key.len()))
                .finish(),
        }
    }
}

#[derive(Debug)]
pub struct Config {
    pub network: Network,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| anyhow!("{key} must be set to use the goerli network"))
        };

        let network = match lookup("FARM_NETWORK").as_deref().unwrap_or("local") {
            "local" => Network::Local,
            "goerli" => Network::Goerli {
                url: format!("{GOERLI_HTTP_ADDRESS}{}", required("ALCHEMY_KEY")?),
                private_key: required("WALLET_PRIVATE_KEY")?,
            },
            other => bail!("unknown network `{other}`, expected `local` or `goerli`"),
        };

        Ok(Config { network })
    }
}
