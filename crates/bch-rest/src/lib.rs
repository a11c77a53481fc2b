#![deny(missing_docs)]

//! # bch-rest
//!
//! Async client for the BCH REST API's double-spend proof endpoint.
//!
//! # Example
//!
//! ```no_run
//! use bch_rest::{RestClient, RestConfig};
//!
//! # async fn example() -> Result<(), bch_rest::RestError> {
//! let client = RestClient::new(RestConfig {
//!     api_token: Some("my-token".to_string()),
//!     ..Default::default()
//! });
//!
//! let txid = "ee0df780b58f6f24467605b2589c44c3a50fc849fb8f91b89669a4ae0d86bc7e";
//! match client.get_ds_proof(txid).await? {
//!     Some(proof) => println!("double spend detected: {}", proof.dspid),
//!     None => println!("no proof known"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;


pub use client::RestClient;
pub use error::RestError;
pub use types::{DsProof, Outpoint, RestConfig};
