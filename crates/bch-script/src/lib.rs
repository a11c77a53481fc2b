/// Bitcoin Cash SDK - Script encoding and locking scripts for addresses.
///
/// Provides the `Script` type, opcode constants, chunk parsing and ASM
/// conversion, and P2PKH/P2SH locking scripts built from addresses in any
/// format via an injected address resolver.

pub mod script;
pub mod opcodes;
pub mod chunk;
pub mod address;

mod error;
pub use error::ScriptError;
pub use script::Script;
pub use chunk::ScriptChunk;
pub use address::{from_output_script, redeem_script_to_address, to_output_script};
