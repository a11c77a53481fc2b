//! SLP token addresses.
//!
//! An SLP address is a CashAddr under a token-layer prefix (`simpleledger`,
//! `slptest`, `slpreg`). Payload, type and network semantics are those of
//! CashAddr, so [`SlpAddressResolver`] normalizes to CashAddr and delegates
//! to an [`AddressResolver`](crate::AddressResolver).

pub mod codec;
mod resolver;

pub use resolver::SlpAddressResolver;
