//! The normalized form every address string decodes to.

use bch_primitives::cashaddr::{self, HashKind};
use bch_primitives::base58;
use serde::{Deserialize, Serialize};

use crate::network::{AddressFormat, AddressType, Network};
use crate::table::VersionTable;
use crate::AddressError;

/// An address reduced to `(network, type, hash)`, plus the format it was
/// recognized in.
///
/// Every display format can be re-derived from the first three fields; the
/// format only records where the value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecodedAddress {
    network: Network,
    address_type: AddressType,
    #[serde(with = "hash_hex")]
    hash: [u8; 20],
    format: AddressFormat,
}

impl DecodedAddress {
    /// Build a decoded address from its parts.
    pub fn new(network: Network, address_type: AddressType, hash: [u8; 20], format: AddressFormat) -> Self {
        Self {
            network,
            address_type,
            hash,
            format,
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn address_type(&self) -> AddressType {
        self.address_type
    }

    /// The 20-byte Hash160 payload.
    pub fn hash(&self) -> &[u8; 20] {
        &self.hash
    }

    /// The format the input string was recognized as.
    pub fn format(&self) -> AddressFormat {
        self.format
    }

    /// Same address, tagged with a different source format.
    pub fn with_format(self, format: AddressFormat) -> Self {
        Self { format, ..self }
    }

    /// Lowercase hex of the hash.
    pub fn hash_hex(&self) -> String {
        hex::encode(self.hash)
    }

    pub(crate) fn hash_kind(&self) -> HashKind {
        match self.address_type {
            AddressType::P2pkh => HashKind::PubKeyHash,
            AddressType::P2sh => HashKind::ScriptHash,
        }
    }

    /// Render as a Base58Check legacy address.
    pub fn to_legacy(&self, table: &VersionTable) -> Result<String, AddressError> {
        let version = table
            .version_byte(self.network, self.address_type)
            .ok_or(AddressError::MissingNetwork(self.network))?;
        Ok(base58::encode_versioned(version, &self.hash))
    }

    /// Render as a CashAddr.
    ///
    /// `regtest` swaps in the regtest prefix regardless of the decoded
    /// network; `with_prefix = false` drops the `prefix:` part.
    pub fn to_cash_address(
        &self,
        table: &VersionTable,
        with_prefix: bool,
        regtest: bool,
    ) -> Result<String, AddressError> {
        let network = if regtest { Network::Regtest } else { self.network };
        let params = table.params(network).ok_or(AddressError::MissingNetwork(network))?;
        self.encode_with_prefix(params.cash_prefix, with_prefix)
    }

    pub(crate) fn encode_with_prefix(&self, prefix: &str, with_prefix: bool) -> Result<String, AddressError> {
        let encoded = cashaddr::encode(prefix, self.hash_kind(), &self.hash)?;
        Ok(if with_prefix {
            encoded
        } else {
            strip_prefix(&encoded).to_string()
        })
    }
}

/// The part of a CashAddr-style string after the colon.
pub(crate) fn strip_prefix(address: &str) -> &str {
    address.split_once(':').map_or(address, |(_, payload)| payload)
}

mod hash_hex {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(hash: &[u8; 20], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(hash))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; 20], D::Error> {
        let s = String::deserialize(deserializer)?;
        let mut hash = [0u8; 20];
        hex::decode_to_slice(&s, &mut hash).map_err(serde::de::Error::custom)?;
        Ok(hash)
    }
}
