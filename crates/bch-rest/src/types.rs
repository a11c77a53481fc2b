//! REST configuration and response models.

use serde::{Deserialize, Serialize};

/// Configuration for a [`RestClient`](crate::RestClient).
#[derive(Debug, Clone)]
pub struct RestConfig {
    /// Base URL of the REST API, ending in the API version (e.g. `.../v5/`).
    pub rest_url: String,
    /// Optional API token, sent as `Authorization: Token <api_token>`.
    pub api_token: Option<String>,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            rest_url: "https://bchn.fullstack.cash/v5/".to_string(),
            api_token: None,
        }
    }
}

/// A transaction output reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outpoint {
    /// Id of the transaction holding the output.
    pub txid: String,
    /// Output index.
    pub vout: u32,
}

/// A double-spend proof for a transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DsProof {
    /// Id of the proof itself.
    #[serde(default)]
    pub dspid: String,
    /// The transaction the proof is about.
    #[serde(default)]
    pub txid: String,
    /// The output spent twice.
    #[serde(default)]
    pub outpoint: Option<Outpoint>,
    /// Mempool descendants of `txid` invalidated along with it.
    #[serde(default)]
    pub descendants: Vec<String>,
}
