//! Conversions between addresses and the locking scripts they stand for.
//!
//! These take the resolver as a parameter so callers choose the decoding
//! rules (plain, or SLP-aware) and the version table.

use bch_address::{AddressFormat, AddressType, DecodedAddress, Network, Resolve};
use bch_primitives::hash::hash160;

use crate::{Script, ScriptError};

/// Build the locking script for `address`, in any format `resolver` accepts.
pub fn to_output_script<R: Resolve + ?Sized>(resolver: &R, address: &str) -> Result<Script, ScriptError> {
    let decoded = resolver.resolve(address)?;
    Ok(match decoded.address_type() {
        AddressType::P2pkh => Script::new_p2pkh(decoded.hash()),
        AddressType::P2sh => Script::new_p2sh(decoded.hash()),
    })
}

/// Recover the address a P2PKH or P2SH locking script pays to.
///
/// Scripts carry no network, so the caller supplies it.
pub fn from_output_script(script: &Script, network: Network) -> Result<DecodedAddress, ScriptError> {
    let address_type = if script.is_p2pkh() {
        AddressType::P2pkh
    } else if script.is_p2sh() {
        AddressType::P2sh
    } else {
        return Err(ScriptError::UnsupportedScript(script.to_hex()));
    };
    let hash = script
        .address_hash()
        .ok_or_else(|| ScriptError::UnsupportedScript(script.to_hex()))?;
    Ok(DecodedAddress::new(network, address_type, hash, AddressFormat::CashAddr))
}

/// The prefixed P2SH CashAddr paying to `redeem_script` on `network`.
pub fn redeem_script_to_address<R: Resolve + ?Sized>(
    resolver: &R,
    redeem_script: &Script,
    network: Network,
) -> Result<String, ScriptError> {
    let hash = hash160(redeem_script.to_bytes());
    let decoded = DecodedAddress::new(network, AddressType::P2sh, hash, AddressFormat::CashAddr);
    Ok(decoded.to_cash_address(resolver.table(), true, false)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bch_address::{AddressError, AddressResolver, SlpAddressResolver};

    const LEGACY: &str = "1HiaTupadqQN66Tvgt7QSE5Wg13BUy25eN";
    const P2PKH_HEX: &str = "76a914b75f0054e64a52149faf71df4a62f35c86e67f3d88ac";
    const P2SH_HEX: &str = "a914b75f0054e64a52149faf71df4a62f35c86e67f3d87";
    // 1-of-1 multisig over the secp256k1 generator point.
    const REDEEM: &str = "51210279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f8179851ae";

    #[test]
    fn test_to_output_script_every_format() {
        let resolver = AddressResolver::new();
        for address in [
            LEGACY,
            "bitcoincash:qzm47qz5ue99y9yl4aca7jnz7dwgdenl85jkfx3znl",
            "qzm47qz5ue99y9yl4aca7jnz7dwgdenl85jkfx3znl",
            "b75f0054e64a52149faf71df4a62f35c86e67f3d",
        ] {
            let script = to_output_script(&resolver, address).unwrap();
            assert_eq!(script.to_hex(), P2PKH_HEX, "{}", address);
        }
        let p2sh = to_output_script(&resolver, "3JQbPTK2BjikBGAMoymzrrSSpXKu6ePuff").unwrap();
        assert_eq!(p2sh.to_hex(), P2SH_HEX);
    }

    #[test]
    fn test_to_output_script_slp() {
        let resolver = AddressResolver::new();
        let slp = SlpAddressResolver::new(&resolver);
        let script = to_output_script(&slp, "simpleledger:qzm47qz5ue99y9yl4aca7jnz7dwgdenl857dzayzdp").unwrap();
        assert_eq!(script.to_hex(), P2PKH_HEX);
        // The plain resolver does not know SLP prefixes.
        assert!(to_output_script(&resolver, "simpleledger:qzm47qz5ue99y9yl4aca7jnz7dwgdenl857dzayzdp").is_err());
    }

    #[test]
    fn test_to_output_script_invalid() {
        let resolver = AddressResolver::new();
        assert!(matches!(
            to_output_script(&resolver, "not an address"),
            Err(ScriptError::Address(AddressError::UnsupportedAddressFormat(_)))
        ));
    }

    #[test]
    fn test_from_output_script() {
        let script = Script::from_hex(P2PKH_HEX).unwrap();
        let decoded = from_output_script(&script, Network::Mainnet).unwrap();
        assert_eq!(decoded.address_type(), AddressType::P2pkh);
        assert_eq!(decoded.format(), AddressFormat::CashAddr);
        assert_eq!(decoded.hash_hex(), "b75f0054e64a52149faf71df4a62f35c86e67f3d");

        let resolver = AddressResolver::new();
        assert_eq!(
            decoded.to_cash_address(resolver.table(), true, false).unwrap(),
            "bitcoincash:qzm47qz5ue99y9yl4aca7jnz7dwgdenl85jkfx3znl"
        );

        let script = Script::from_hex(P2SH_HEX).unwrap();
        let decoded = from_output_script(&script, Network::Testnet).unwrap();
        assert_eq!(decoded.address_type(), AddressType::P2sh);
        assert_eq!(decoded.to_legacy(resolver.table()).unwrap(), "2N9xoTCF3oCE6P3nuV7PsUoRi2sY4sg4JHD");
    }

    #[test]
    fn test_from_output_script_unsupported() {
        let data = Script::new_data(&[b"hello"]).unwrap();
        assert!(matches!(
            from_output_script(&data, Network::Mainnet),
            Err(ScriptError::UnsupportedScript(_))
        ));
        assert!(from_output_script(&Script::new(), Network::Mainnet).is_err());
    }

    #[test]
    fn test_redeem_script_to_address() {
        let resolver = AddressResolver::new();
        let redeem = Script::from_hex(REDEEM).unwrap();
        assert_eq!(
            redeem_script_to_address(&resolver, &redeem, Network::Mainnet).unwrap(),
            "bitcoincash:pzp7awma0x4p6wyw8v9vvkuc43vqcndqrg9umkmd8g"
        );
        assert_eq!(
            redeem_script_to_address(&resolver, &redeem, Network::Testnet).unwrap(),
            "bchtest:pzp7awma0x4p6wyw8v9vvkuc43vqcndqrgpwl3e6q5"
        );
        let cash = redeem_script_to_address(&resolver, &redeem, Network::Mainnet).unwrap();
        assert_eq!(resolver.to_legacy_address(&cash).unwrap(), "3DicS6C8JZm59RsrgXr56iVHzYdQngiehV");
    }

    #[test]
    fn test_round_trip_through_script() {
        let resolver = AddressResolver::new();
        let script = to_output_script(&resolver, LEGACY).unwrap();
        let decoded = from_output_script(&script, Network::Mainnet).unwrap();
        assert_eq!(decoded.to_legacy(resolver.table()).unwrap(), LEGACY);
    }
}
