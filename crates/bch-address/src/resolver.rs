//! Address resolution: detect the format of an address string, normalize it
//! to a [`DecodedAddress`], and convert between formats.
//!
//! Decoding tries, in order:
//! 1. legacy Base58Check,
//! 2. CashAddr (explicit prefix, else each known prefix in table order),
//! 3. a bare 40-character hex Hash160.
//!
//! The first decoder that matches wins. Every predicate and `detect_*`
//! operation is a comparison on the decoded record, never a separate parse.

use bch_primitives::base58;
use bch_primitives::cashaddr::{self, CashAddrPayload, HashKind};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::decoded::DecodedAddress;
use crate::network::{AddressFormat, AddressType, Network};
use crate::table::{VersionTable, DEFAULT_VERSION, VERSION_TABLE};
use crate::AddressError;

/// Anything that can turn an address string into a [`DecodedAddress`].
///
/// Consumers that need address resolution (script builders, transaction
/// helpers) take a `Resolve` by parameter.
pub trait Resolve {
    /// Decode `address` in any format this resolver understands.
    fn resolve(&self, address: &str) -> Result<DecodedAddress, AddressError>;

    /// The version table backing this resolver.
    fn table(&self) -> &VersionTable;
}

/// Both legacy and CashAddr renderings of a bare Hash160.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hash160View {
    pub legacy_address: String,
    pub cash_address: String,
}

/// Result of running one decoder over an input.
enum Attempt {
    /// The input is a valid address in this decoder's format.
    Matched(DecodedAddress),
    /// Structurally valid, but the version byte or prefix is not in the table.
    Unmapped(AddressError),
    NoMatch,
}

type Decoder = fn(&AddressResolver, &str) -> Attempt;

/// Decoders in priority order.
const DECODERS: [(&str, Decoder); 3] = [
    ("legacy", AddressResolver::decode_legacy),
    ("cashaddr", AddressResolver::decode_cash),
    ("hash160", AddressResolver::decode_hash160),
];

/// Stateless resolver over a static [`VersionTable`].
#[derive(Clone, Copy, Debug)]
pub struct AddressResolver {
    table: &'static VersionTable,
}

impl Default for AddressResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressResolver {
    /// Resolver over the standard mainnet/testnet/regtest table.
    pub fn new() -> Self {
        Self::with_table(&VERSION_TABLE)
    }

    /// Resolver over a caller-supplied table.
    pub fn with_table(table: &'static VersionTable) -> Self {
        Self { table }
    }

    /// The version table this resolver decodes against.
    pub fn table(&self) -> &'static VersionTable {
        self.table
    }

    /// Decode an address string of unknown format.
    ///
    /// If no decoder matches, returns the first `InvalidVersionByte` /
    /// `InvalidPrefix` seen along the way, or `UnsupportedAddressFormat`.
    pub fn decode(&self, address: &str) -> Result<DecodedAddress, AddressError> {
        let mut unmapped = None;
        for (name, decoder) in DECODERS {
            match decoder(self, address) {
                Attempt::Matched(decoded) => {
                    trace!("{} decoded as {}", address, name);
                    return Ok(decoded);
                }
                Attempt::Unmapped(err) => {
                    debug!("{} is well-formed {} but unmapped: {}", address, name, err);
                    if unmapped.is_none() {
                        unmapped = Some(err);
                    }
                }
                Attempt::NoMatch => trace!("{} is not {}", address, name),
            }
        }
        Err(unmapped.unwrap_or_else(|| AddressError::UnsupportedAddressFormat(address.to_string())))
    }

    fn decode_legacy(&self, address: &str) -> Attempt {
        let Ok((version, payload)) = base58::decode_versioned(address) else {
            return Attempt::NoMatch;
        };
        let Ok(hash) = <[u8; 20]>::try_from(payload) else {
            return Attempt::NoMatch;
        };
        match self.table.lookup_version(version) {
            Some((network, address_type)) => Attempt::Matched(DecodedAddress::new(
                network,
                address_type,
                hash,
                AddressFormat::Legacy,
            )),
            None => Attempt::Unmapped(AddressError::InvalidVersionByte(version)),
        }
    }

    fn decode_cash(&self, address: &str) -> Attempt {
        if address.contains(':') {
            let Ok(payload) = cashaddr::decode(address) else {
                return Attempt::NoMatch;
            };
            return match self.table.network_for_cash_prefix(&payload.prefix) {
                Some(network) => matched_payload(network, payload, AddressFormat::CashAddr),
                None => Attempt::Unmapped(AddressError::InvalidPrefix(payload.prefix)),
            };
        }
        self.table
            .rows()
            .iter()
            .find_map(|params| {
                cashaddr::decode_with_prefix(address, params.cash_prefix)
                    .ok()
                    .map(|payload| matched_payload(params.network, payload, AddressFormat::CashAddr))
            })
            .unwrap_or(Attempt::NoMatch)
    }

    fn decode_hash160(&self, address: &str) -> Attempt {
        let Some(hash) = parse_hash160(address) else {
            return Attempt::NoMatch;
        };
        match self.table.lookup_version(DEFAULT_VERSION) {
            Some((network, address_type)) => Attempt::Matched(DecodedAddress::new(
                network,
                address_type,
                hash,
                AddressFormat::Hash160,
            )),
            None => Attempt::Unmapped(AddressError::InvalidVersionByte(DEFAULT_VERSION)),
        }
    }

    // ---------------------------------------------------------------------
    // Conversions
    // ---------------------------------------------------------------------

    /// Convert any supported address to legacy Base58Check.
    pub fn to_legacy_address(&self, address: &str) -> Result<String, AddressError> {
        self.decode(address)?.to_legacy(self.table)
    }

    /// Convert any supported address to CashAddr.
    ///
    /// `regtest` forces the regtest prefix; the hash is unchanged.
    pub fn to_cash_address(&self, address: &str, with_prefix: bool, regtest: bool) -> Result<String, AddressError> {
        self.decode(address)?.to_cash_address(self.table, with_prefix, regtest)
    }

    /// Lowercase hex of the address's Hash160.
    pub fn to_hash160(&self, address: &str) -> Result<String, AddressError> {
        Ok(self.decode(address)?.hash_hex())
    }

    /// Build a decoded address straight from a hex hash and a legacy
    /// version byte, without decoding an address string.
    pub fn from_hash160(&self, hash_hex: &str, version: u8) -> Result<DecodedAddress, AddressError> {
        let hash = parse_hash160(hash_hex).ok_or_else(|| AddressError::InvalidHash160(hash_hex.to_string()))?;
        let (network, address_type) = self
            .table
            .lookup_version(version)
            .ok_or(AddressError::InvalidVersionByte(version))?;
        Ok(DecodedAddress::new(network, address_type, hash, AddressFormat::Hash160))
    }

    /// Render a hex Hash160 as a legacy address under `version`
    /// (use [`DEFAULT_VERSION`] for mainnet P2PKH).
    pub fn hash160_to_legacy(&self, hash_hex: &str, version: u8) -> Result<String, AddressError> {
        self.from_hash160(hash_hex, version)?.to_legacy(self.table)
    }

    /// Render a hex Hash160 as a prefixed CashAddr under `version`.
    pub fn hash160_to_cash(&self, hash_hex: &str, version: u8, regtest: bool) -> Result<String, AddressError> {
        self.from_hash160(hash_hex, version)?
            .to_cash_address(self.table, true, regtest)
    }

    /// Legacy and CashAddr renderings of a bare Hash160 under the default
    /// version byte.
    pub fn hash160_view(&self, hash_hex: &str) -> Result<Hash160View, AddressError> {
        let decoded = self.from_hash160(hash_hex, DEFAULT_VERSION)?;
        Ok(Hash160View {
            legacy_address: decoded.to_legacy(self.table)?,
            cash_address: decoded.to_cash_address(self.table, true, false)?,
        })
    }

    // ---------------------------------------------------------------------
    // Predicates
    // ---------------------------------------------------------------------

    /// True if `address` decodes as legacy Base58Check.
    ///
    /// # Returns
    /// `Ok(false)` for other valid formats; the decode error if `address`
    /// is not an address at all.
    ///
    /// ```
    /// use bch_address::AddressResolver;
    ///
    /// let r = AddressResolver::new();
    /// assert!(r.is_legacy_address("1HiaTupadqQN66Tvgt7QSE5Wg13BUy25eN").unwrap());
    /// assert!(!r.is_legacy_address("bitcoincash:qzm47qz5ue99y9yl4aca7jnz7dwgdenl85jkfx3znl").unwrap());
    /// assert!(r.is_legacy_address("not-a-real-address").is_err());
    /// ```
    pub fn is_legacy_address(&self, address: &str) -> Result<bool, AddressError> {
        Ok(self.decode(address)?.format() == AddressFormat::Legacy)
    }

    /// True if `address` decodes as CashAddr, prefixed or bare.
    pub fn is_cash_address(&self, address: &str) -> Result<bool, AddressError> {
        Ok(self.decode(address)?.format() == AddressFormat::CashAddr)
    }

    /// True for a bare 40-character hex Hash160.
    pub fn is_hash160(&self, address: &str) -> Result<bool, AddressError> {
        Ok(self.decode(address)?.format() == AddressFormat::Hash160)
    }

    /// True for mainnet addresses.
    ///
    /// Strings starting with `x` (extended key export) are mainnet and
    /// strings starting with `t` are testnet, without decoding.
    pub fn is_mainnet_address(&self, address: &str) -> Result<bool, AddressError> {
        if let Some(network) = extended_key_network(address) {
            return Ok(network == Network::Mainnet);
        }
        Ok(self.decode(address)?.network() == Network::Mainnet)
    }

    /// True for testnet addresses. Same `x`/`t` short-circuit as
    /// [`is_mainnet_address`](Self::is_mainnet_address).
    pub fn is_testnet_address(&self, address: &str) -> Result<bool, AddressError> {
        if let Some(network) = extended_key_network(address) {
            return Ok(network == Network::Testnet);
        }
        Ok(self.decode(address)?.network() == Network::Testnet)
    }

    /// True for regtest addresses. Only CashAddr input can be regtest;
    /// legacy input shares testnet's version bytes.
    pub fn is_regtest_address(&self, address: &str) -> Result<bool, AddressError> {
        Ok(self.decode(address)?.network() == Network::Regtest)
    }

    /// True if the address pays to a public key hash.
    pub fn is_p2pkh_address(&self, address: &str) -> Result<bool, AddressError> {
        Ok(self.decode(address)?.address_type() == AddressType::P2pkh)
    }

    /// True if the address pays to a script hash.
    pub fn is_p2sh_address(&self, address: &str) -> Result<bool, AddressError> {
        Ok(self.decode(address)?.address_type() == AddressType::P2sh)
    }

    /// `legacy`, `cashaddr` or `hash160`.
    pub fn detect_address_format(&self, address: &str) -> Result<&'static str, AddressError> {
        Ok(self.decode(address)?.format().as_str())
    }

    /// `mainnet`, `testnet` or `regtest`.
    ///
    /// Unlike [`is_mainnet_address`](Self::is_mainnet_address) there is no
    /// extended-key short-circuit: `xpub...` input is an error here.
    pub fn detect_address_network(&self, address: &str) -> Result<&'static str, AddressError> {
        Ok(self.decode(address)?.network().as_str())
    }

    /// `p2pkh` or `p2sh`.
    pub fn detect_address_type(&self, address: &str) -> Result<&'static str, AddressError> {
        Ok(self.decode(address)?.address_type().as_str())
    }
}

impl Resolve for AddressResolver {
    fn resolve(&self, address: &str) -> Result<DecodedAddress, AddressError> {
        self.decode(address)
    }

    fn table(&self) -> &VersionTable {
        self.table
    }
}

/// Network implied by an extended key export prefix, if any.
fn extended_key_network(address: &str) -> Option<Network> {
    match address.as_bytes().first() {
        Some(b'x') => Some(Network::Mainnet),
        Some(b't') => Some(Network::Testnet),
        _ => None,
    }
}

/// Parse exactly 40 hex characters into a 20-byte hash.
pub(crate) fn parse_hash160(s: &str) -> Option<[u8; 20]> {
    let mut hash = [0u8; 20];
    if s.len() != 40 || hex::decode_to_slice(s, &mut hash).is_err() {
        return None;
    }
    Some(hash)
}

/// A CashAddr-family payload is only an address if its hash is 20 bytes.
fn matched_payload(network: Network, payload: CashAddrPayload, format: AddressFormat) -> Attempt {
    match decoded_from_payload(network, payload, format) {
        Some(decoded) => Attempt::Matched(decoded),
        None => Attempt::NoMatch,
    }
}

pub(crate) fn decoded_from_payload(
    network: Network,
    payload: CashAddrPayload,
    format: AddressFormat,
) -> Option<DecodedAddress> {
    let hash = <[u8; 20]>::try_from(payload.hash).ok()?;
    let address_type = match payload.kind {
        HashKind::PubKeyHash => AddressType::P2pkh,
        HashKind::ScriptHash => AddressType::P2sh,
    };
    Some(DecodedAddress::new(network, address_type, hash, format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::NetworkParams;

    const HASH: &str = "b75f0054e64a52149faf71df4a62f35c86e67f3d";

    const LEGACY_MAINNET_P2PKH: &str = "1HiaTupadqQN66Tvgt7QSE5Wg13BUy25eN";
    const LEGACY_MAINNET_P2SH: &str = "3JQbPTK2BjikBGAMoymzrrSSpXKu6ePuff";
    const LEGACY_TESTNET_P2PKH: &str = "mxEXkxuZSrqcsCwYQT5nG9HqXzdtNhUCMv";
    const LEGACY_TESTNET_P2SH: &str = "2N9xoTCF3oCE6P3nuV7PsUoRi2sY4sg4JHD";

    const CASH_MAINNET_P2PKH: &str = "bitcoincash:qzm47qz5ue99y9yl4aca7jnz7dwgdenl85jkfx3znl";
    const CASH_MAINNET_P2SH: &str = "bitcoincash:pzm47qz5ue99y9yl4aca7jnz7dwgdenl859n5fkpgz";
    const CASH_TESTNET_P2PKH: &str = "bchtest:qzm47qz5ue99y9yl4aca7jnz7dwgdenl85kydpn45r";
    const CASH_TESTNET_P2SH: &str = "bchtest:pzm47qz5ue99y9yl4aca7jnz7dwgdenl85ppsw5k07";
    const CASH_REGTEST_P2PKH: &str = "bchreg:qzm47qz5ue99y9yl4aca7jnz7dwgdenl85vcmqsxh9";
    const CASH_REGTEST_P2SH: &str = "bchreg:pzm47qz5ue99y9yl4aca7jnz7dwgdenl85max0h9vc";

    fn resolver() -> AddressResolver {
        AddressResolver::new()
    }

    fn bare(address: &str) -> &str {
        address.split_once(':').unwrap().1
    }

    // -----------------------------------------------------------------------
    // decode
    // -----------------------------------------------------------------------

    #[test]
    fn test_decode_legacy_table() {
        let cases = [
            (LEGACY_MAINNET_P2PKH, Network::Mainnet, AddressType::P2pkh),
            (LEGACY_MAINNET_P2SH, Network::Mainnet, AddressType::P2sh),
            (LEGACY_TESTNET_P2PKH, Network::Testnet, AddressType::P2pkh),
            (LEGACY_TESTNET_P2SH, Network::Testnet, AddressType::P2sh),
        ];
        for (addr, network, address_type) in cases {
            let d = resolver().decode(addr).unwrap();
            assert_eq!(d.network(), network, "{}", addr);
            assert_eq!(d.address_type(), address_type, "{}", addr);
            assert_eq!(d.format(), AddressFormat::Legacy);
            assert_eq!(d.hash_hex(), HASH);
        }
    }

    #[test]
    fn test_decode_cash_table_prefixed_and_bare() {
        let cases = [
            (CASH_MAINNET_P2PKH, Network::Mainnet, AddressType::P2pkh),
            (CASH_MAINNET_P2SH, Network::Mainnet, AddressType::P2sh),
            (CASH_TESTNET_P2PKH, Network::Testnet, AddressType::P2pkh),
            (CASH_TESTNET_P2SH, Network::Testnet, AddressType::P2sh),
            (CASH_REGTEST_P2PKH, Network::Regtest, AddressType::P2pkh),
            (CASH_REGTEST_P2SH, Network::Regtest, AddressType::P2sh),
        ];
        for (addr, network, address_type) in cases {
            for input in [addr, bare(addr)] {
                let d = resolver().decode(input).unwrap();
                assert_eq!(d.network(), network, "{}", input);
                assert_eq!(d.address_type(), address_type, "{}", input);
                assert_eq!(d.format(), AddressFormat::CashAddr);
                assert_eq!(d.hash_hex(), HASH);
            }
        }
    }

    #[test]
    fn test_decode_hash160_defaults_to_mainnet_p2pkh() {
        let d = resolver().decode(HASH).unwrap();
        assert_eq!(d.format(), AddressFormat::Hash160);
        assert_eq!(d.network(), Network::Mainnet);
        assert_eq!(d.address_type(), AddressType::P2pkh);
    }

    #[test]
    fn test_decode_unsupported() {
        let err = resolver().decode("not-a-real-address").unwrap_err();
        assert!(matches!(err, AddressError::UnsupportedAddressFormat(ref s) if s == "not-a-real-address"));
    }

    #[test]
    fn test_decode_empty_string() {
        assert!(matches!(
            resolver().decode(""),
            Err(AddressError::UnsupportedAddressFormat(_))
        ));
    }

    #[test]
    fn test_decode_hash160_wrong_length() {
        assert!(resolver().decode(&HASH[..38]).is_err());
        assert!(resolver().decode(&format!("{}00", HASH)).is_err());
    }

    #[test]
    fn test_decode_unknown_version_byte() {
        // Base58Check of 0x80 || [0; 20]: well-formed, but not an address version.
        let err = resolver().decode("tWGD2u9st6K9gUr68hdo53qhZZyk3JoQAF").unwrap_err();
        assert!(matches!(err, AddressError::InvalidVersionByte(0x80)));
    }

    #[test]
    fn test_decode_unknown_prefix() {
        let err = resolver()
            .decode("pref:pr6m7j9njldwwzlg9v7v53unlr4jkmx6ey65nvtks5")
            .unwrap_err();
        assert!(matches!(err, AddressError::InvalidPrefix(ref p) if p == "pref"));
    }

    #[test]
    fn test_decode_bad_cash_checksum() {
        let tampered = CASH_MAINNET_P2PKH.replace("znl", "znm");
        assert!(matches!(
            resolver().decode(&tampered),
            Err(AddressError::UnsupportedAddressFormat(_))
        ));
    }

    #[test]
    fn test_decode_uppercase_cash() {
        let d = resolver().decode(&CASH_TESTNET_P2SH.to_uppercase()).unwrap();
        assert_eq!(d.network(), Network::Testnet);
        assert_eq!(d.address_type(), AddressType::P2sh);
    }

    #[test]
    fn test_decode_custom_table_without_testnet() {
        static MAINNET_ONLY: VersionTable = VersionTable::new(&[NetworkParams {
            network: Network::Mainnet,
            p2pkh_version: 0x00,
            p2sh_version: 0x05,
            cash_prefix: "bitcoincash",
            slp_prefix: "simpleledger",
        }]);
        let r = AddressResolver::with_table(&MAINNET_ONLY);
        assert!(r.decode(LEGACY_MAINNET_P2PKH).is_ok());
        assert!(matches!(
            r.decode(LEGACY_TESTNET_P2PKH),
            Err(AddressError::InvalidVersionByte(0x6f))
        ));
        assert!(matches!(
            r.decode(CASH_TESTNET_P2PKH),
            Err(AddressError::InvalidPrefix(_))
        ));
        assert!(matches!(
            r.decode(bare(CASH_TESTNET_P2PKH)),
            Err(AddressError::UnsupportedAddressFormat(_))
        ));
    }

    // -----------------------------------------------------------------------
    // Conversions
    // -----------------------------------------------------------------------

    #[test]
    fn test_legacy_to_cash() {
        assert_eq!(
            resolver().to_cash_address(LEGACY_MAINNET_P2PKH, true, false).unwrap(),
            CASH_MAINNET_P2PKH
        );
        assert_eq!(
            resolver().to_cash_address(LEGACY_TESTNET_P2SH, true, false).unwrap(),
            CASH_TESTNET_P2SH
        );
    }

    #[test]
    fn test_cash_to_legacy() {
        assert_eq!(resolver().to_legacy_address(CASH_MAINNET_P2PKH).unwrap(), LEGACY_MAINNET_P2PKH);
        assert_eq!(resolver().to_legacy_address(CASH_MAINNET_P2SH).unwrap(), LEGACY_MAINNET_P2SH);
        assert_eq!(resolver().to_legacy_address(CASH_TESTNET_P2PKH).unwrap(), LEGACY_TESTNET_P2PKH);
        // Regtest has no legacy bytes of its own.
        assert_eq!(resolver().to_legacy_address(CASH_REGTEST_P2SH).unwrap(), LEGACY_TESTNET_P2SH);
    }

    #[test]
    fn test_to_cash_without_prefix() {
        assert_eq!(
            resolver().to_cash_address(LEGACY_MAINNET_P2PKH, false, false).unwrap(),
            bare(CASH_MAINNET_P2PKH)
        );
    }

    #[test]
    fn test_to_cash_regtest_override() {
        assert_eq!(
            resolver().to_cash_address(LEGACY_TESTNET_P2PKH, true, true).unwrap(),
            CASH_REGTEST_P2PKH
        );
        // The override applies to mainnet input too; only the prefix changes.
        assert_eq!(
            resolver().to_cash_address(CASH_MAINNET_P2SH, true, true).unwrap(),
            CASH_REGTEST_P2SH
        );
    }

    #[test]
    fn test_to_hash160() {
        for addr in [LEGACY_MAINNET_P2PKH, CASH_TESTNET_P2SH, bare(CASH_REGTEST_P2PKH), HASH] {
            assert_eq!(resolver().to_hash160(addr).unwrap(), HASH);
        }
    }

    #[test]
    fn test_hash160_to_legacy() {
        assert_eq!(
            resolver().hash160_to_legacy(HASH, DEFAULT_VERSION).unwrap(),
            LEGACY_MAINNET_P2PKH
        );
        assert_eq!(resolver().hash160_to_legacy(HASH, 0xc4).unwrap(), LEGACY_TESTNET_P2SH);
        assert_eq!(
            resolver()
                .hash160_to_legacy("573d93b475be4f1925f3b74ed951201b0147eac1", 0x00)
                .unwrap(),
            "18xHZ8g2feo4ceejGpvzHkvXT79fi2ZdTG"
        );
    }

    #[test]
    fn test_hash160_to_cash() {
        assert_eq!(
            resolver()
                .hash160_to_cash("573d93b475be4f1925f3b74ed951201b0147eac1", DEFAULT_VERSION, false)
                .unwrap(),
            "bitcoincash:qptnmya5wkly7xf97wm5ak23yqdsz3l2cyj7k9vyyh"
        );
        assert_eq!(resolver().hash160_to_cash(HASH, 0x05, false).unwrap(), CASH_MAINNET_P2SH);
        assert_eq!(resolver().hash160_to_cash(HASH, 0x6f, true).unwrap(), CASH_REGTEST_P2PKH);
    }

    #[test]
    fn test_hash160_errors() {
        assert!(matches!(
            resolver().hash160_to_legacy("abcd", 0x00),
            Err(AddressError::InvalidHash160(_))
        ));
        assert!(matches!(
            resolver().hash160_to_legacy(&"zz".repeat(20), 0x00),
            Err(AddressError::InvalidHash160(_))
        ));
        assert!(matches!(
            resolver().hash160_to_cash(HASH, 0x42, false),
            Err(AddressError::InvalidVersionByte(0x42))
        ));
    }

    #[test]
    fn test_hash160_view() {
        let view = resolver().hash160_view(HASH).unwrap();
        assert_eq!(view.legacy_address, LEGACY_MAINNET_P2PKH);
        assert_eq!(view.cash_address, CASH_MAINNET_P2PKH);
    }

    // -----------------------------------------------------------------------
    // Predicates and detection
    // -----------------------------------------------------------------------

    #[test]
    fn test_format_predicates() {
        let r = resolver();
        assert!(r.is_legacy_address(LEGACY_TESTNET_P2PKH).unwrap());
        assert!(!r.is_legacy_address(CASH_TESTNET_P2PKH).unwrap());
        assert!(r.is_cash_address(CASH_REGTEST_P2SH).unwrap());
        assert!(r.is_cash_address(bare(CASH_MAINNET_P2PKH)).unwrap());
        assert!(!r.is_cash_address(HASH).unwrap());
        assert!(r.is_hash160(HASH).unwrap());
        assert!(!r.is_hash160(LEGACY_MAINNET_P2SH).unwrap());
    }

    #[test]
    fn test_predicates_propagate_errors() {
        let r = resolver();
        assert!(r.is_legacy_address("not-a-real-address").is_err());
        assert!(r.is_p2sh_address("not-a-real-address").is_err());
        assert!(r.is_regtest_address("not-a-real-address").is_err());
    }

    #[test]
    fn test_network_predicates() {
        let r = resolver();
        assert!(r.is_mainnet_address(LEGACY_MAINNET_P2SH).unwrap());
        assert!(!r.is_mainnet_address(CASH_TESTNET_P2PKH).unwrap());
        assert!(r.is_testnet_address(LEGACY_TESTNET_P2SH).unwrap());
        assert!(r.is_testnet_address(bare(CASH_TESTNET_P2SH)).unwrap());
        assert!(!r.is_testnet_address(CASH_REGTEST_P2PKH).unwrap());
        assert!(r.is_regtest_address(CASH_REGTEST_P2PKH).unwrap());
        assert!(r.is_regtest_address(bare(CASH_REGTEST_P2SH)).unwrap());
        // Legacy regtest is indistinguishable from testnet.
        assert!(!r.is_regtest_address(LEGACY_TESTNET_P2PKH).unwrap());
    }

    #[test]
    fn test_extended_key_short_circuit() {
        let r = resolver();
        let xpub = "xpub6CUGRUonZSQ4TWtTMmzXdrXDtypWKiKrhko4egpiMZbpiaQL2jkwSB1icqYh2cfDfVxdx4df189oLKnC5fSwqPfgyP3hooxujYzAu3fDVmz";
        let tpub = "tpubD6NzVbkrYhZ4XgiXtGrdW5XDAPFCL9h7we1vwNCpn8tGbBcgfVYjXyhWo4E1xkh56hjod1RhGjxbaTLV3X4FyWuejifB9jusQ46QzG87VKp";
        assert!(r.is_mainnet_address(xpub).unwrap());
        assert!(!r.is_testnet_address(xpub).unwrap());
        assert!(r.is_testnet_address(tpub).unwrap());
        assert!(!r.is_mainnet_address(tpub).unwrap());
    }

    #[test]
    fn test_detect_network_has_no_extended_key_short_circuit() {
        // Kept asymmetric with is_mainnet_address on purpose.
        let xpub = "xpub6CUGRUonZSQ4TWtTMmzXdrXDtypWKiKrhko4egpiMZbpiaQL2jkwSB1icqYh2cfDfVxdx4df189oLKnC5fSwqPfgyP3hooxujYzAu3fDVmz";
        assert!(resolver().detect_address_network(xpub).is_err());
        assert!(resolver().is_regtest_address(xpub).is_err());
    }

    #[test]
    fn test_type_predicates() {
        let r = resolver();
        assert!(r.is_p2pkh_address(LEGACY_MAINNET_P2PKH).unwrap());
        assert!(!r.is_p2pkh_address(CASH_MAINNET_P2SH).unwrap());
        assert!(r.is_p2sh_address(LEGACY_TESTNET_P2SH).unwrap());
        assert!(r.is_p2sh_address(bare(CASH_REGTEST_P2SH)).unwrap());
        assert!(r.is_p2pkh_address(HASH).unwrap());
    }

    #[test]
    fn test_detect_tokens() {
        let r = resolver();
        assert_eq!(r.detect_address_format(LEGACY_MAINNET_P2PKH).unwrap(), "legacy");
        assert_eq!(r.detect_address_format(CASH_MAINNET_P2PKH).unwrap(), "cashaddr");
        assert_eq!(r.detect_address_format(HASH).unwrap(), "hash160");
        assert_eq!(r.detect_address_network(LEGACY_MAINNET_P2PKH).unwrap(), "mainnet");
        assert_eq!(r.detect_address_network(CASH_TESTNET_P2SH).unwrap(), "testnet");
        assert_eq!(r.detect_address_network(CASH_REGTEST_P2PKH).unwrap(), "regtest");
        assert_eq!(r.detect_address_type(LEGACY_TESTNET_P2SH).unwrap(), "p2sh");
        assert_eq!(r.detect_address_type(CASH_REGTEST_P2PKH).unwrap(), "p2pkh");
    }

    #[test]
    fn test_detect_network_bare_testnet() {
        assert_eq!(
            resolver()
                .detect_address_network("qph2v4mkxjgdqgmlyjx6njmey0ftrxlnggt9t0a6zy")
                .unwrap(),
            "testnet"
        );
    }

    #[test]
    fn test_resolve_trait_object() {
        let r = resolver();
        let dynamic: &dyn Resolve = &r;
        assert_eq!(dynamic.resolve(CASH_MAINNET_P2SH).unwrap(), r.decode(CASH_MAINNET_P2SH).unwrap());
        assert_eq!(dynamic.table().rows().len(), 3);
    }
}
