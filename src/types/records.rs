//! Record model for ACH fixed-width files
//!
//! This module defines plain value types for each physical record kind
//! (File Header, Batch Header, Entry Detail, Batch Control, File Control)
//! and the containers expressing the file hierarchy (Batch, AchFile).
//!
//! # Design
//!
//! Records are pure data holders. Polymorphism across record kinds is by the
//! record-type tag character in column 1 ('1', '5', '6', '8', '9'), not by
//! the types themselves - consumers dispatch on that tag. Textual fields are
//! kept as `String` so they round-trip byte-exactly; derived quantities
//! (amounts, counts, hashes, totals) are unsigned integers in minor currency
//! units (cents).
//!
//! A fresh record model is built per encode or decode call; there is no
//! shared instance between calls.

use serde::Serialize;

/// Record-type tag for a File Header line
pub const FILE_HEADER_TAG: char = '1';
/// Record-type tag for a Batch Header line
pub const BATCH_HEADER_TAG: char = '5';
/// Record-type tag for an Entry Detail line
pub const ENTRY_DETAIL_TAG: char = '6';
/// Record-type tag for a Batch Control line
pub const BATCH_CONTROL_TAG: char = '8';
/// Record-type tag for a File Control line
pub const FILE_CONTROL_TAG: char = '9';

/// Exact length of every physical record line
pub const RECORD_LENGTH: usize = 94;

/// Number of physical records per block; files are padded to whole blocks
pub const BLOCKING_FACTOR: u64 = 10;

/// File Header record (type "1")
///
/// One per file. Identifies the exchange parties (immediate destination and
/// origin, 10 characters each) and carries the file-level framing fields:
/// creation date/time, file-ID modifier, record size, blocking factor and
/// format code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileHeader {
    pub record_type_code: String,
    pub priority_code: String,
    pub immediate_destination: String,
    pub immediate_origin: String,
    pub file_creation_date: String,
    pub file_creation_time: String,
    pub file_id_modifier: String,
    pub record_size: String,
    pub blocking_factor: String,
    pub format_code: String,
    pub immediate_destination_name: String,
    pub immediate_origin_name: String,
    pub reference_code: String,
}

/// Batch Header record (type "5")
///
/// Opens a batch. Carries the service class code, originating company
/// identity, the Standard Entry Class (SEC) code, entry description and
/// date fields, the originating DFI identification (8 digits) and the batch
/// sequence number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchHeader {
    pub record_type_code: String,
    pub service_class_code: String,
    pub company_name: String,
    pub company_discretionary_data: String,
    pub company_identification: String,
    pub standard_entry_class_code: String,
    pub company_entry_description: String,
    pub company_descriptive_date: String,
    pub effective_entry_date: String,
    pub settlement_date: String,
    pub originator_status_code: String,
    pub originating_dfi: String,
    pub batch_number: String,
}

impl BatchHeader {
    /// Sentinel header substituted when a batch header line cannot be parsed
    ///
    /// Marks the batch explicitly invalid instead of dropping it, so the
    /// validator (not the decoder) rejects the file with position context.
    pub fn invalid() -> Self {
        BatchHeader {
            record_type_code: "5".to_string(),
            service_class_code: String::new(),
            company_name: String::new(),
            company_discretionary_data: String::new(),
            company_identification: String::new(),
            standard_entry_class_code: "INVALID".to_string(),
            company_entry_description: String::new(),
            company_descriptive_date: String::new(),
            effective_entry_date: String::new(),
            settlement_date: String::new(),
            originator_status_code: String::new(),
            originating_dfi: String::new(),
            batch_number: String::new(),
        }
    }
}

/// Entry Detail record (type "6")
///
/// A single payment instruction: two-digit transaction code, receiving DFI
/// routing identification (8 digits) plus check digit, account number,
/// amount in cents, individual identification/name, discretionary data,
/// addenda indicator and trace number. Order within a batch is preserved
/// (insertion order = file order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryDetail {
    pub record_type_code: String,
    pub transaction_code: String,
    pub receiving_dfi_identification: String,
    pub check_digit: String,
    pub dfi_account_number: String,
    /// Amount in minor currency units (cents)
    pub amount: u64,
    pub individual_identification_number: String,
    pub individual_name: String,
    pub discretionary_data: String,
    pub addenda_record_indicator: String,
    pub trace_number: String,
}

/// Batch Control record (type "8")
///
/// Closes a batch. Echoes the service class code and batch number and
/// carries the derived batch totals: entry/addenda count, truncated entry
/// hash, total debit and credit amounts. Each is a pure function of the
/// batch's entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchControl {
    pub record_type_code: String,
    pub service_class_code: String,
    pub entry_addenda_count: u64,
    pub entry_hash: u64,
    pub total_debit: u64,
    pub total_credit: u64,
    pub company_identification: String,
    pub message_authentication_code: String,
    pub reserved: String,
    pub originating_dfi: String,
    pub batch_number: String,
}

/// File Control record (type "9")
///
/// Closes the file. Carries batch count, computed block count, total
/// entry/addenda count, file entry hash and total debit/credit across all
/// batches. Each is a pure function of the file's batches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileControl {
    pub record_type_code: String,
    pub batch_count: u64,
    pub block_count: u64,
    pub entry_addenda_count: u64,
    pub entry_hash: u64,
    pub total_debit: u64,
    pub total_credit: u64,
    pub reserved: String,
}

/// A batch: header, ordered entries, and the closing control record
///
/// The batch exclusively owns its header, entries and control; entries
/// never outlive their batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub header: BatchHeader,
    pub entries: Vec<EntryDetail>,
    pub control: BatchControl,
}

/// A decoded ACH file: file header, ordered batches, file control
///
/// Header and control are optional because the decoder is resilient: it
/// returns whatever it could reconstruct and leaves completeness judgments
/// to the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AchFile {
    pub header: Option<FileHeader>,
    pub batches: Vec<Batch>,
    pub control: Option<FileControl>,
}

impl AchFile {
    /// Total number of entry detail records across all batches
    pub fn entry_count(&self) -> usize {
        self.batches.iter().map(|b| b.entries.len()).sum()
    }
}
