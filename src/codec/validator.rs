//! ACH file validator
//!
//! A pure predicate over a decoded [`AchFile`]: walks the hierarchy in
//! file-then-batch-then-entry order and fails fast at the first violation.
//! Nothing is mutated and no violations are aggregated - the caller gets
//! exactly one typed error carrying a message, machine error code, field
//! name and 1-based record position.
//!
//! # Rules
//!
//! 1. File header present, tagged "1", priority code "01".
//! 2. At least one batch.
//! 3. Per batch: header tagged "5", SEC code in the closed set, originating
//!    DFI exactly 8 characters.
//! 4. Per entry: tagged "6", transaction code in the closed set, receiving
//!    DFI exactly 8 characters.
//! 5. File control present, tagged "9".

use crate::types::{is_valid_transaction_code, AchError, AchFile, BatchHeader, EntryDetail};
use tracing::debug;

/// SEC codes accepted for inbound batches
const VALID_SEC_CODES: [&str; 9] = [
    "PPD", "CCD", "CTX", "WEB", "TEL", "POP", "ARC", "BOC", "RCK",
];

/// Validate a decoded file, returning the first violation found
///
/// Positions follow the record hierarchy: the file header is record 1,
/// batch N is record N+1, entries are numbered 1-based within their batch,
/// and the file control is record batchCount+2.
pub fn validate(file: &AchFile) -> Result<(), AchError> {
    let header = file
        .header
        .as_ref()
        .ok_or_else(|| AchError::structural("File header missing", "fileHeader", 1))?;
    if header.record_type_code != "1" {
        return Err(AchError::structural(
            "Bad fileHeader recordType",
            "recordTypeCode",
            1,
        ));
    }
    if header.priority_code != "01" {
        return Err(AchError::structural("Bad priority code", "priorityCode", 1));
    }

    if file.batches.is_empty() {
        return Err(AchError::structural("No batches found", "batches", 1));
    }

    for (index, batch) in file.batches.iter().enumerate() {
        let batch_position = index + 2;
        validate_batch_header(&batch.header, batch_position)?;
        for (entry_index, entry) in batch.entries.iter().enumerate() {
            validate_entry_detail(entry, entry_index + 1)?;
        }
        debug!(batch = index + 1, entries = batch.entries.len(), "batch valid");
    }

    let control = file.control.as_ref().ok_or_else(|| {
        AchError::structural("File control missing", "fileControl", file.batches.len() + 2)
    })?;
    if control.record_type_code != "9" {
        return Err(AchError::structural(
            "Bad fileControl recordType",
            "recordTypeCode",
            file.batches.len() + 2,
        ));
    }

    Ok(())
}

fn validate_batch_header(header: &BatchHeader, position: usize) -> Result<(), AchError> {
    if header.record_type_code != "5" {
        return Err(AchError::structural(
            "Bad batchHeader recordType",
            "recordTypeCode",
            position,
        ));
    }
    if !VALID_SEC_CODES.contains(&header.standard_entry_class_code.as_str()) {
        return Err(AchError::invalid_sec_code(
            &header.standard_entry_class_code,
            position,
        ));
    }
    if header.originating_dfi.len() != 8 {
        return Err(AchError::invalid_routing_number(
            &header.originating_dfi,
            position,
        ));
    }
    Ok(())
}

fn validate_entry_detail(entry: &EntryDetail, position: usize) -> Result<(), AchError> {
    if entry.record_type_code != "6" {
        return Err(AchError::structural(
            "Bad entry recordType",
            "recordTypeCode",
            position,
        ));
    }
    if !is_valid_transaction_code(&entry.transaction_code) {
        return Err(AchError::invalid_transaction_code(
            &entry.transaction_code,
            position,
        ));
    }
    if entry.receiving_dfi_identification.len() != 8 {
        return Err(AchError::invalid_routing_number(
            &entry.receiving_dfi_identification,
            position,
        ));
    }
    Ok(())
}
