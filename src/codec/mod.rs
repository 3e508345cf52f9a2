//! ACH codec: encoder, decoder, validator and the fixed-width formatters
//!
//! # Components
//!
//! - `fields` - Canonical zero-pad / space-pad formatters and fixed-column
//!   extraction
//! - `encoder` - Request hierarchy to flat 94-character lines, with derived
//!   totals and block padding
//! - `decoder` - Raw lines back to the record model, resilient per line
//! - `validator` - Fail-fast structural and domain rules with positional
//!   errors
//!
//! All three operations are synchronous and side-effect-free with respect
//! to shared state: each call owns its record model and the caller owns all
//! file, network and persistence I/O. Concurrent calls on independent
//! inputs are safe by construction.

pub mod decoder;
pub mod encoder;
pub mod fields;
pub mod validator;

pub use decoder::decode;
pub use encoder::encode;
pub use validator::validate;
