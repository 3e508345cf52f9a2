//! ACH Codec Library
//! # Overview
//!
//! This library encodes, decodes and validates fixed-width 94-character
//! ACH/NACHA batch-payment files.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (record model, file requests, errors)
//! - [`codec`] - The hard core:
//!   - [`codec::encoder`] - Request hierarchy to flat lines with derived
//!     control totals and block padding
//!   - [`codec::decoder`] - Raw lines back to the record model, resilient
//!     per line
//!   - [`codec::validator`] - Fail-fast structural and domain rules with
//!     positional errors
//! - [`pipeline`] - Trait seams for the external encryption, transport and
//!   persistence collaborators, plus the inbound/outbound orchestrations
//! - [`io`] - File line loading and CSV export
//! - [`cli`] - CLI arguments parsing
//!
//! # File shape
//!
//! A file is one file header record, one or more batches (batch header,
//! entry details, batch control), and a file control record, padded with
//! filler lines to a whole number of 10-line blocks. Every physical line
//! is exactly 94 ASCII characters; counts, debit/credit totals and the
//! routing-derived entry hash are computed, never supplied.

pub mod cli;
pub mod codec;
pub mod io;
pub mod pipeline;
pub mod types;

pub use codec::{decode, encode, validate};
pub use io::{read_ach_lines, write_entries_csv};
pub use pipeline::{
    deliver, FileCipher, FileTransport, InboundPipeline, OutboundPipeline, RecordSink,
};
pub use types::{
    AchError, AchFile, AchFileRequest, Batch, BatchControl, BatchHeader, BatchRequest, EntryDetail,
    EntryRequest, FileControl, FileHeader,
};
