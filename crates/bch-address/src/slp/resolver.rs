use log::debug;

use crate::decoded::DecodedAddress;
use crate::network::AddressFormat;
use crate::resolver::{AddressResolver, Resolve};
use crate::slp::codec;
use crate::table::VersionTable;
use crate::AddressError;

/// Address operations that also understand SLP addresses.
///
/// Holds a reference to an [`AddressResolver`] and delegates to it. Every
/// operation first checks that the input converts to CashAddr (legacy,
/// CashAddr or SLP input); anything else fails with
/// [`AddressError::InvalidAddress`] before the resolver is consulted.
#[derive(Clone, Copy, Debug)]
pub struct SlpAddressResolver<'r> {
    resolver: &'r AddressResolver,
}

impl<'r> SlpAddressResolver<'r> {
    /// Wrap `resolver`; the SLP prefixes come from its version table.
    pub fn new(resolver: &'r AddressResolver) -> Self {
        Self { resolver }
    }

    /// The resolver this extension delegates to.
    pub fn resolver(&self) -> &'r AddressResolver {
        self.resolver
    }

    fn table(&self) -> &'static VersionTable {
        self.resolver.table()
    }

    /// Convert `address` to a prefixed CashAddr, or reject it.
    ///
    /// Hash160 literals are not addresses here.
    fn to_cash_form(&self, address: &str) -> Result<String, AddressError> {
        let invalid = || AddressError::InvalidAddress(address.to_string());
        if let Ok(decoded) = codec::decode(self.table(), address) {
            return decoded
                .to_cash_address(self.table(), true, false)
                .map_err(|_| invalid());
        }
        match self.resolver.decode(address) {
            Ok(decoded) if decoded.format() != AddressFormat::Hash160 => decoded
                .to_cash_address(self.table(), true, false)
                .map_err(|_| invalid()),
            Ok(_) => Err(invalid()),
            Err(err) => {
                debug!("rejecting {}: {}", address, err);
                Err(invalid())
            }
        }
    }

    /// Decode `address`, tagging SLP input with [`AddressFormat::SlpAddr`].
    pub fn decode(&self, address: &str) -> Result<DecodedAddress, AddressError> {
        let cash = self.to_cash_form(address)?;
        let decoded = self.resolver.decode(&cash)?;
        if codec::is_slp_address(self.table(), address) {
            Ok(decoded.with_format(AddressFormat::SlpAddr))
        } else {
            self.resolver.decode(address)
        }
    }

    /// Convert to an SLP address.
    pub fn to_slp_address(&self, address: &str, with_prefix: bool, regtest: bool) -> Result<String, AddressError> {
        let cash = self.to_cash_form(address)?;
        let decoded = self.resolver.decode(&cash)?;
        codec::encode(self.table(), &decoded, with_prefix, regtest)
    }

    /// Convert legacy, CashAddr or SLP input to CashAddr.
    ///
    /// # Arguments
    /// * `with_prefix` - Keep the `bitcoincash:`-style prefix.
    /// * `regtest` - Render with the regtest prefix whatever the network.
    pub fn to_cash_address(&self, address: &str, with_prefix: bool, regtest: bool) -> Result<String, AddressError> {
        let cash = self.to_cash_form(address)?;
        self.resolver.to_cash_address(&cash, with_prefix, regtest)
    }

    /// Convert legacy, CashAddr or SLP input to a legacy Base58Check address.
    pub fn to_legacy_address(&self, address: &str) -> Result<String, AddressError> {
        let cash = self.to_cash_form(address)?;
        self.resolver.to_legacy_address(&cash)
    }

    /// True if `address` carries an SLP prefix (or is a bare payload whose
    /// checksum verifies against one).
    pub fn is_slp_address(&self, address: &str) -> Result<bool, AddressError> {
        self.to_cash_form(address)?;
        Ok(codec::is_slp_address(self.table(), address))
    }

    /// True for legacy Base58Check input.
    pub fn is_legacy_address(&self, address: &str) -> Result<bool, AddressError> {
        self.to_cash_form(address)?;
        if codec::is_slp_address(self.table(), address) {
            return Ok(false);
        }
        self.resolver.is_legacy_address(address)
    }

    /// True for plain CashAddr input; an SLP address is never a CashAddr.
    pub fn is_cash_address(&self, address: &str) -> Result<bool, AddressError> {
        self.to_cash_form(address)?;
        if codec::is_slp_address(self.table(), address) {
            return Ok(false);
        }
        self.resolver.is_cash_address(address)
    }

    /// True for mainnet addresses in any accepted format.
    ///
    /// Unlike [`AddressResolver::is_mainnet_address`], key-export strings are
    /// rejected with `InvalidAddress` rather than short-circuited.
    pub fn is_mainnet_address(&self, address: &str) -> Result<bool, AddressError> {
        let cash = self.to_cash_form(address)?;
        self.resolver.is_mainnet_address(&cash)
    }

    /// True for testnet addresses in any accepted format.
    pub fn is_testnet_address(&self, address: &str) -> Result<bool, AddressError> {
        let cash = self.to_cash_form(address)?;
        self.resolver.is_testnet_address(&cash)
    }

    /// True for regtest addresses (`bchreg:` / `slpreg:` input only).
    pub fn is_regtest_address(&self, address: &str) -> Result<bool, AddressError> {
        let cash = self.to_cash_form(address)?;
        self.resolver.is_regtest_address(&cash)
    }

    /// True if the address pays to a public key hash.
    pub fn is_p2pkh_address(&self, address: &str) -> Result<bool, AddressError> {
        let cash = self.to_cash_form(address)?;
        self.resolver.is_p2pkh_address(&cash)
    }

    /// True if the address pays to a script hash.
    pub fn is_p2sh_address(&self, address: &str) -> Result<bool, AddressError> {
        let cash = self.to_cash_form(address)?;
        self.resolver.is_p2sh_address(&cash)
    }

    /// `slpaddr`, `cashaddr` or `legacy`. SLP is checked first: the base
    /// resolver does not know SLP prefixes.
    pub fn detect_address_format(&self, address: &str) -> Result<&'static str, AddressError> {
        self.to_cash_form(address)?;
        if codec::is_slp_address(self.table(), address) {
            return Ok(AddressFormat::SlpAddr.as_str());
        }
        self.resolver.detect_address_format(address)
    }

    /// `mainnet`, `testnet` or `regtest`.
    pub fn detect_address_network(&self, address: &str) -> Result<&'static str, AddressError> {
        let cash = self.to_cash_form(address)?;
        self.resolver.detect_address_network(&cash)
    }

    /// `p2pkh` or `p2sh`.
    pub fn detect_address_type(&self, address: &str) -> Result<&'static str, AddressError> {
        let cash = self.to_cash_form(address)?;
        self.resolver.detect_address_type(&cash)
    }
}

impl Resolve for SlpAddressResolver<'_> {
    fn resolve(&self, address: &str) -> Result<DecodedAddress, AddressError> {
        self.decode(address)
    }

    fn table(&self) -> &VersionTable {
        self.resolver.table()
    }
}
