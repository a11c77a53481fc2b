#![deny(missing_docs)]

//! Bitcoin Cash SDK - Complete SDK.
//!
//! Re-exports all BCH SDK components for convenient single-crate usage.
//!
//! ```
//! use bch_sdk::address::{AddressResolver, SlpAddressResolver};
//!
//! let resolver = AddressResolver::new();
//! let cash = resolver.to_cash_address("1HiaTupadqQN66Tvgt7QSE5Wg13BUy25eN", true, false).unwrap();
//! assert_eq!(cash, "bitcoincash:qzm47qz5ue99y9yl4aca7jnz7dwgdenl85jkfx3znl");
//!
//! let slp = SlpAddressResolver::new(&resolver);
//! assert!(slp.is_slp_address(&slp.to_slp_address(&cash, true, false).unwrap()).unwrap());
//! ```

pub use bch_primitives as primitives;
pub use bch_address as address;
pub use bch_script as script;
pub use bch_rest as rest;
