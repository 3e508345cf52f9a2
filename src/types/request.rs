//! Encode-side request types
//!
//! These are the input DTOs for the encoder: a file request carrying the
//! exchange identifiers and an ordered list of batch requests, each with an
//! ordered list of entry requests. They deserialize from JSON with serde.
//!
//! Derived fields (counts, hashes, totals, block count) are intentionally
//! absent - the encoder computes them from the entries.

use serde::Deserialize;

/// Request describing one outbound ACH file
#[derive(Debug, Clone, Deserialize)]
pub struct AchFileRequest {
    /// Immediate destination identifier (10 characters, zero-padded)
    pub immediate_destination: String,
    /// Immediate origin identifier (10 characters, zero-padded)
    pub immediate_origin: String,
    /// Destination institution name (23 characters, space-padded)
    pub destination_name: String,
    /// Origin institution name (23 characters, space-padded)
    pub origin_name: String,
    /// File-ID modifier; a random character from [A-Z0-9] when absent
    #[serde(default)]
    pub file_id_modifier: Option<String>,
    /// Ordered batches; file order = request order
    pub batches: Vec<BatchRequest>,
}

/// Request describing one batch within a file
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRequest {
    /// Service class code, e.g. "200" (mixed), "220" (credits), "225" (debits)
    pub service_class_code: String,
    /// Company name (16 characters)
    pub company_name: String,
    /// Company discretionary data (20 characters, optional)
    #[serde(default)]
    pub company_discretionary_data: String,
    /// Company identification (10 characters)
    pub company_identification: String,
    /// Standard Entry Class code, e.g. "PPD" or "CCD"
    pub standard_entry_class_code: String,
    /// Company entry description (10 characters)
    pub company_entry_description: String,
    /// Company descriptive date (6 characters, optional)
    #[serde(default)]
    pub company_descriptive_date: String,
    /// Effective entry date, YYMMDD
    pub effective_entry_date: String,
    /// Originating DFI identification (first 8 digits of the ODFI routing)
    pub originating_dfi: String,
    /// Batch sequence number within the file
    pub batch_number: u32,
    /// Ordered entries; batch order = request order
    pub entries: Vec<EntryRequest>,
}

/// Request describing one entry detail within a batch
#[derive(Debug, Clone, Deserialize)]
pub struct EntryRequest {
    /// Two-digit transaction code, e.g. "22" checking credit, "27" checking debit
    pub transaction_code: String,
    /// Receiving DFI routing identification (first 8 digits)
    pub rdfi_routing_number: String,
    /// Ninth digit of the receiving routing number
    pub check_digit: String,
    /// Receiver account number at the RDFI (17 characters)
    pub dfi_account_number: String,
    /// Amount in minor currency units (cents), e.g. 1000 for $10.00
    pub amount: u64,
    /// Individual identification number (15 characters, optional)
    #[serde(default)]
    pub individual_id_number: String,
    /// Individual name (22 characters)
    pub individual_name: String,
    /// Discretionary data (2 characters, optional)
    #[serde(default)]
    pub discretionary_data: String,
    /// Addenda record indicator: 0 = no addenda, 1 = addenda follows
    #[serde(default)]
    pub addenda_record_indicator: u8,
    /// Trace number: 8-digit ODFI routing prefix + 7-digit sequence
    pub trace_number: String,
}
