//! Version byte and prefix table.
//!
//! Maps `(network, address type)` to the legacy version byte, and each
//! network to its CashAddr and SLP prefixes. The default table is a
//! `static`, built at compile time and never mutated.

use crate::network::{AddressType, Network};

/// Legacy version byte used when a Hash160 carries no network of its own
/// (mainnet P2PKH).
pub const DEFAULT_VERSION: u8 = 0x00;

/// Encoding parameters for one network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NetworkParams {
    pub network: Network,
    /// Legacy version byte for P2PKH addresses.
    pub p2pkh_version: u8,
    /// Legacy version byte for P2SH addresses.
    pub p2sh_version: u8,
    pub cash_prefix: &'static str,
    pub slp_prefix: &'static str,
}

impl NetworkParams {
    /// Legacy version byte for `address_type` on this network.
    pub fn version(&self, address_type: AddressType) -> u8 {
        match address_type {
            AddressType::P2pkh => self.p2pkh_version,
            AddressType::P2sh => self.p2sh_version,
        }
    }
}

/// A read-only table of [`NetworkParams`].
///
/// Row order matters: reverse lookups return the first matching row, and
/// bare CashAddr/SLP payloads are tried against each row's prefix in order.
#[derive(Clone, Copy, Debug)]
pub struct VersionTable {
    rows: &'static [NetworkParams],
}

/// The standard Bitcoin Cash table: mainnet, testnet, regtest.
pub static VERSION_TABLE: VersionTable = VersionTable::new(&[
    NetworkParams {
        network: Network::Mainnet,
        p2pkh_version: 0x00,
        p2sh_version: 0x05,
        cash_prefix: "bitcoincash",
        slp_prefix: "simpleledger",
    },
    NetworkParams {
        network: Network::Testnet,
        p2pkh_version: 0x6f,
        p2sh_version: 0xc4,
        cash_prefix: "bchtest",
        slp_prefix: "slptest",
    },
    NetworkParams {
        network: Network::Regtest,
        p2pkh_version: 0x6f,
        p2sh_version: 0xc4,
        cash_prefix: "bchreg",
        slp_prefix: "slpreg",
    },
]);

impl VersionTable {
    /// Build a table over the given rows.
    pub const fn new(rows: &'static [NetworkParams]) -> Self {
        Self { rows }
    }

    /// All rows, in lookup order.
    pub fn rows(&self) -> &'static [NetworkParams] {
        self.rows
    }

    /// Parameters for `network`, if the table has a row for it.
    pub fn params(&self, network: Network) -> Option<&'static NetworkParams> {
        self.rows.iter().find(|p| p.network == network)
    }

    /// Legacy version byte for `(network, address_type)`.
    pub fn version_byte(&self, network: Network, address_type: AddressType) -> Option<u8> {
        self.params(network).map(|p| p.version(address_type))
    }

    /// Resolve a legacy version byte to `(network, address_type)`.
    ///
    /// Regtest shares testnet's version bytes, so with the standard table
    /// 0x6f and 0xc4 always resolve to testnet.
    pub fn lookup_version(&self, version: u8) -> Option<(Network, AddressType)> {
        self.rows.iter().find_map(|p| {
            if p.p2pkh_version == version {
                Some((p.network, AddressType::P2pkh))
            } else if p.p2sh_version == version {
                Some((p.network, AddressType::P2sh))
            } else {
                None
            }
        })
    }

    /// Network whose CashAddr prefix is `prefix`.
    pub fn network_for_cash_prefix(&self, prefix: &str) -> Option<Network> {
        self.rows.iter().find(|p| p.cash_prefix == prefix).map(|p| p.network)
    }

    /// Network whose SLP prefix is `prefix`.
    pub fn network_for_slp_prefix(&self, prefix: &str) -> Option<Network> {
        self.rows.iter().find(|p| p.slp_prefix == prefix).map(|p| p.network)
    }
}

impl Default for VersionTable {
    fn default() -> Self {
        VERSION_TABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_bytes() {
        let t = &VERSION_TABLE;
        assert_eq!(t.version_byte(Network::Mainnet, AddressType::P2pkh), Some(0x00));
        assert_eq!(t.version_byte(Network::Mainnet, AddressType::P2sh), Some(0x05));
        assert_eq!(t.version_byte(Network::Testnet, AddressType::P2pkh), Some(0x6f));
        assert_eq!(t.version_byte(Network::Testnet, AddressType::P2sh), Some(0xc4));
        assert_eq!(t.version_byte(Network::Regtest, AddressType::P2pkh), Some(0x6f));
        assert_eq!(t.version_byte(Network::Regtest, AddressType::P2sh), Some(0xc4));
    }

    #[test]
    fn test_lookup_version_prefers_testnet_over_regtest() {
        let t = &VERSION_TABLE;
        assert_eq!(t.lookup_version(0x00), Some((Network::Mainnet, AddressType::P2pkh)));
        assert_eq!(t.lookup_version(0x05), Some((Network::Mainnet, AddressType::P2sh)));
        assert_eq!(t.lookup_version(0x6f), Some((Network::Testnet, AddressType::P2pkh)));
        assert_eq!(t.lookup_version(0xc4), Some((Network::Testnet, AddressType::P2sh)));
        assert_eq!(t.lookup_version(0x80), None);
    }

    #[test]
    fn test_prefix_lookups() {
        let t = &VERSION_TABLE;
        assert_eq!(t.network_for_cash_prefix("bitcoincash"), Some(Network::Mainnet));
        assert_eq!(t.network_for_cash_prefix("bchtest"), Some(Network::Testnet));
        assert_eq!(t.network_for_cash_prefix("bchreg"), Some(Network::Regtest));
        assert_eq!(t.network_for_cash_prefix("simpleledger"), None);
        assert_eq!(t.network_for_slp_prefix("simpleledger"), Some(Network::Mainnet));
        assert_eq!(t.network_for_slp_prefix("slptest"), Some(Network::Testnet));
        assert_eq!(t.network_for_slp_prefix("slpreg"), Some(Network::Regtest));
        assert_eq!(t.network_for_slp_prefix("bitcoincash"), None);
    }

    #[test]
    fn test_custom_table_missing_network() {
        static MAINNET_ONLY: VersionTable = VersionTable::new(&[NetworkParams {
            network: Network::Mainnet,
            p2pkh_version: 0x00,
            p2sh_version: 0x05,
            cash_prefix: "bitcoincash",
            slp_prefix: "simpleledger",
        }]);
        assert!(MAINNET_ONLY.params(Network::Testnet).is_none());
        assert_eq!(MAINNET_ONLY.version_byte(Network::Regtest, AddressType::P2pkh), None);
        assert_eq!(MAINNET_ONLY.rows().len(), 1);
    }
}
