//! SLP address encoding and decoding against a [`VersionTable`].

use bch_primitives::cashaddr;

use crate::decoded::DecodedAddress;
use crate::network::{AddressFormat, Network};
use crate::resolver::decoded_from_payload;
use crate::table::VersionTable;
use crate::AddressError;

/// Decode an SLP address, prefixed or bare.
///
/// A bare payload is checked against each network's SLP prefix in table
/// order. Anything that is not an SLP address (including a valid CashAddr)
/// is an error.
pub fn decode(table: &VersionTable, address: &str) -> Result<DecodedAddress, AddressError> {
    let not_slp = || AddressError::InvalidAddress(address.to_string());

    if address.contains(':') {
        let payload = cashaddr::decode(address)?;
        let network = table
            .network_for_slp_prefix(&payload.prefix)
            .ok_or_else(|| AddressError::InvalidPrefix(payload.prefix.clone()))?;
        return decoded_from_payload(network, payload, AddressFormat::SlpAddr).ok_or_else(not_slp);
    }

    table
        .rows()
        .iter()
        .find_map(|params| {
            cashaddr::decode_with_prefix(address, params.slp_prefix)
                .ok()
                .and_then(|payload| decoded_from_payload(params.network, payload, AddressFormat::SlpAddr))
        })
        .ok_or_else(not_slp)
}

/// True if `address` decodes as an SLP address.
pub fn is_slp_address(table: &VersionTable, address: &str) -> bool {
    decode(table, address).is_ok()
}

/// Render `decoded` as an SLP address.
///
/// `regtest` forces the regtest SLP prefix; `with_prefix = false` drops the
/// `prefix:` part.
pub fn encode(
    table: &VersionTable,
    decoded: &DecodedAddress,
    with_prefix: bool,
    regtest: bool,
) -> Result<String, AddressError> {
    let network = if regtest { Network::Regtest } else { decoded.network() };
    let params = table.params(network).ok_or(AddressError::MissingNetwork(network))?;
    decoded.encode_with_prefix(params.slp_prefix, with_prefix)
}
