//! Core data types for the ACH codec
//!
//! # Components
//!
//! - `records` - Record model: the five physical record kinds and the
//!   Batch/AchFile containers
//! - `request` - Encode-side DTOs deserialized from JSON
//! - `transaction_code` - Closed code sets and debit/credit classification
//! - `error` - The `AchError` taxonomy

pub mod error;
pub mod records;
pub mod request;
pub mod transaction_code;

pub use error::AchError;
pub use records::{
    AchFile, Batch, BatchControl, BatchHeader, EntryDetail, FileControl, FileHeader,
    BATCH_CONTROL_TAG, BATCH_HEADER_TAG, BLOCKING_FACTOR, ENTRY_DETAIL_TAG, FILE_CONTROL_TAG,
    FILE_HEADER_TAG, RECORD_LENGTH,
};
pub use request::{AchFileRequest, BatchRequest, EntryRequest};
pub use transaction_code::{classify, is_valid_transaction_code, EntryClass};
