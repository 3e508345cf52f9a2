//! I/O module
//!
//! Handles file reading and CSV export.
//!
//! # Components
//!
//! - `line_reader` - Buffered line loading for the decoder
//! - `csv_export` - Decoded entry details as CSV rows

pub mod csv_export;
pub mod line_reader;

pub use csv_export::write_entries_csv;
pub use line_reader::read_ach_lines;
