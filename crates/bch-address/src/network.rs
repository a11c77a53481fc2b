//! Network, address type and address format enums.
//!
//! Each enum has a lowercase token form (`mainnet`, `p2sh`, `cashaddr`, ...)
//! used by `Display`, `FromStr`, serde and the `detect_*` operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AddressError;

/// The network an address belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Production network.
    Mainnet,
    /// Public test network.
    Testnet,
    /// Local regression-test network. Shares testnet's legacy version bytes.
    Regtest,
}

impl Network {
    /// Lowercase token for this network.
    pub fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
        }
    }
}

/// Whether the hash is of a public key or of a redeem script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    /// Pay-to-public-key-hash.
    P2pkh,
    /// Pay-to-script-hash.
    P2sh,
}

impl AddressType {
    /// Lowercase token for this address type.
    pub fn as_str(self) -> &'static str {
        match self {
            AddressType::P2pkh => "p2pkh",
            AddressType::P2sh => "p2sh",
        }
    }
}

/// The encoding an address string was recognized as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFormat {
    /// Base58Check with a version byte.
    Legacy,
    /// CashAddr with a `bitcoincash`/`bchtest`/`bchreg` prefix.
    CashAddr,
    /// CashAddr-equivalent with an SLP token prefix.
    SlpAddr,
    /// A bare 20-byte hash in hex.
    Hash160,
}

impl AddressFormat {
    /// Lowercase token for this format.
    pub fn as_str(self) -> &'static str {
        match self {
            AddressFormat::Legacy => "legacy",
            AddressFormat::CashAddr => "cashaddr",
            AddressFormat::SlpAddr => "slpaddr",
            AddressFormat::Hash160 => "hash160",
        }
    }
}

macro_rules! token_impls {
    ($ty:ty, [$($variant:expr),+ $(,)?]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = AddressError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                [$($variant),+]
                    .into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| AddressError::UnknownToken(s.to_string()))
            }
        }
    };
}

token_impls!(Network, [Network::Mainnet, Network::Testnet, Network::Regtest]);
token_impls!(AddressType, [AddressType::P2pkh, AddressType::P2sh]);
token_impls!(
    AddressFormat,
    [
        AddressFormat::Legacy,
        AddressFormat::CashAddr,
        AddressFormat::SlpAddr,
        AddressFormat::Hash160,
    ]
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_roundtrip_through_from_str() {
        for network in [Network::Mainnet, Network::Testnet, Network::Regtest] {
            assert_eq!(network.to_string().parse::<Network>().unwrap(), network);
        }
        for ty in [AddressType::P2pkh, AddressType::P2sh] {
            assert_eq!(ty.to_string().parse::<AddressType>().unwrap(), ty);
        }
        assert_eq!("slpaddr".parse::<AddressFormat>().unwrap(), AddressFormat::SlpAddr);
    }

    #[test]
    fn test_unknown_token() {
        assert!(matches!(
            "Mainnet".parse::<Network>(),
            Err(AddressError::UnknownToken(_))
        ));
        assert!("p2wpkh".parse::<AddressType>().is_err());
    }

    #[test]
    fn test_serde_uses_tokens() {
        assert_eq!(serde_json::to_string(&AddressFormat::CashAddr).unwrap(), "\"cashaddr\"");
        assert_eq!(serde_json::to_string(&AddressType::P2pkh).unwrap(), "\"p2pkh\"");
        let network: Network = serde_json::from_str("\"regtest\"").unwrap();
        assert_eq!(network, Network::Regtest);
    }
}
