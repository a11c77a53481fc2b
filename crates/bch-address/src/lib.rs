/// Bitcoin Cash SDK - Address detection and conversion.
///
/// Normalizes an address string of unknown format (legacy Base58Check,
/// CashAddr, SLP address, or a bare Hash160) into a [`DecodedAddress`] and
/// re-renders it in any other format, for mainnet, testnet and regtest.
///
/// ```
/// use bch_address::AddressResolver;
///
/// let resolver = AddressResolver::new();
/// let cash = resolver
///     .to_cash_address("1HiaTupadqQN66Tvgt7QSE5Wg13BUy25eN", true, false)
///     .unwrap();
/// assert_eq!(cash, "bitcoincash:qzm47qz5ue99y9yl4aca7jnz7dwgdenl85jkfx3znl");
/// ```

pub mod network;
pub mod table;
pub mod decoded;
pub mod resolver;
pub mod slp;

mod error;
pub use error::AddressError;
pub use network::{AddressFormat, AddressType, Network};
pub use table::{NetworkParams, VersionTable, DEFAULT_VERSION, VERSION_TABLE};
pub use decoded::DecodedAddress;
pub use resolver::{AddressResolver, Hash160View, Resolve};
pub use slp::SlpAddressResolver;
