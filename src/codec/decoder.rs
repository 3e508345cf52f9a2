//! ACH file decoder
//!
//! Reconstructs the record model from raw lines. Dispatch is by the
//! record-type tag in column 1:
//!
//! - `'1'` - file header
//! - `'5'` - opens a new batch
//! - `'6'` - entry detail, appended to the open batch
//! - `'8'` - batch control, closes the open batch
//! - `'9'` - file control (first occurrence; later all-'9' filler lines are
//!   ignored)
//!
//! Unknown leading characters are ignored for forward compatibility.
//!
//! # Resilience
//!
//! Decoding is line-at-a-time and never fails as a whole. Lines shorter
//! than the 94-character record length are skipped with a warning; an entry
//! with no open batch is dropped; a batch header that cannot be parsed is
//! replaced by a sentinel marked `INVALID` so the batch is not silently
//! lost. A fully populated [`AchFile`] is returned even when lines were
//! skipped - judging completeness is the validator's job, not the
//! decoder's.

use crate::codec::fields::{digits, field};
use crate::types::{
    AchError, AchFile, Batch, BatchControl, BatchHeader, EntryDetail, FileControl, FileHeader,
    RECORD_LENGTH,
};
use tracing::{debug, warn};

/// Decode raw lines into the record model
///
/// Always returns a file; skipped or malformed lines are reported through
/// warning-level diagnostics only.
pub fn decode(lines: &[String]) -> AchFile {
    let mut file = AchFile::default();
    let mut open_batch: Option<(BatchHeader, Vec<EntryDetail>)> = None;

    for (index, line) in lines.iter().enumerate() {
        let line_number = index + 1;
        if line.len() < RECORD_LENGTH {
            warn!(line = line_number, length = line.len(), "skipping short line");
            continue;
        }

        match line.chars().next() {
            Some('1') => match parse_file_header(line) {
                Ok(header) => file.header = Some(header),
                Err(e) => warn!(line = line_number, error = %e, "unparsable file header"),
            },
            Some('5') => {
                if open_batch.is_some() {
                    warn!(line = line_number, "batch header while a batch is open; previous batch dropped");
                }
                let header = parse_batch_header(line).unwrap_or_else(|e| {
                    warn!(line = line_number, error = %e, "unparsable batch header; substituting sentinel");
                    BatchHeader::invalid()
                });
                open_batch = Some((header, Vec::new()));
            }
            Some('6') => match open_batch.as_mut() {
                Some((_, entries)) => match parse_entry_detail(line) {
                    Ok(entry) => entries.push(entry),
                    Err(e) => warn!(line = line_number, error = %e, "unparsable entry detail"),
                },
                None => warn!(line = line_number, "entry detail without an open batch"),
            },
            Some('8') => match open_batch.take() {
                Some((header, entries)) => match parse_batch_control(line) {
                    Ok(control) => file.batches.push(Batch {
                        header,
                        entries,
                        control,
                    }),
                    Err(e) => {
                        warn!(line = line_number, error = %e, "unparsable batch control; batch dropped")
                    }
                },
                None => warn!(line = line_number, "batch control without an open batch"),
            },
            Some('9') => {
                if file.control.is_none() {
                    match parse_file_control(line) {
                        Ok(control) => file.control = Some(control),
                        Err(e) => warn!(line = line_number, error = %e, "unparsable file control"),
                    }
                } else {
                    debug!(line = line_number, "ignoring filler line");
                }
            }
            Some(other) => debug!(line = line_number, tag = %other, "ignoring unknown record type"),
            None => {}
        }
    }

    if open_batch.is_some() {
        warn!("file ended with an unterminated batch; batch dropped");
    }

    debug!(batches = file.batches.len(), entries = file.entry_count(), "decode complete");
    file
}

fn parse_file_header(line: &str) -> Result<FileHeader, AchError> {
    Ok(FileHeader {
        record_type_code: field(line, 0, 1)?.to_string(),
        priority_code: field(line, 1, 3)?.to_string(),
        immediate_destination: field(line, 3, 13)?.to_string(),
        immediate_origin: field(line, 13, 23)?.to_string(),
        file_creation_date: field(line, 23, 29)?.to_string(),
        file_creation_time: field(line, 29, 33)?.to_string(),
        file_id_modifier: field(line, 33, 34)?.to_string(),
        record_size: field(line, 34, 37)?.to_string(),
        blocking_factor: field(line, 37, 39)?.to_string(),
        format_code: field(line, 39, 40)?.to_string(),
        immediate_destination_name: field(line, 40, 63)?.trim().to_string(),
        immediate_origin_name: field(line, 63, 86)?.trim().to_string(),
        reference_code: field(line, 86, 94)?.trim().to_string(),
    })
}

fn parse_batch_header(line: &str) -> Result<BatchHeader, AchError> {
    Ok(BatchHeader {
        record_type_code: field(line, 0, 1)?.to_string(),
        service_class_code: field(line, 1, 4)?.to_string(),
        company_name: field(line, 4, 20)?.trim().to_string(),
        company_discretionary_data: field(line, 20, 40)?.trim().to_string(),
        company_identification: field(line, 40, 50)?.trim().to_string(),
        standard_entry_class_code: field(line, 50, 53)?.trim().to_string(),
        company_entry_description: field(line, 53, 63)?.trim().to_string(),
        company_descriptive_date: field(line, 63, 69)?.trim().to_string(),
        effective_entry_date: field(line, 69, 75)?.trim().to_string(),
        settlement_date: field(line, 75, 78)?.trim().to_string(),
        originator_status_code: field(line, 78, 79)?.to_string(),
        originating_dfi: field(line, 79, 87)?.trim().to_string(),
        batch_number: field(line, 87, 94)?.to_string(),
    })
}

fn parse_entry_detail(line: &str) -> Result<EntryDetail, AchError> {
    Ok(EntryDetail {
        record_type_code: field(line, 0, 1)?.to_string(),
        transaction_code: field(line, 1, 3)?.trim().to_string(),
        receiving_dfi_identification: field(line, 3, 11)?.to_string(),
        check_digit: field(line, 11, 12)?.to_string(),
        dfi_account_number: field(line, 12, 29)?.trim().to_string(),
        amount: digits(field(line, 29, 39)?),
        individual_identification_number: field(line, 39, 54)?.trim().to_string(),
        individual_name: field(line, 54, 76)?.trim().to_string(),
        discretionary_data: field(line, 76, 78)?.trim().to_string(),
        addenda_record_indicator: field(line, 78, 79)?.to_string(),
        trace_number: field(line, 79, 94)?.to_string(),
    })
}

fn parse_batch_control(line: &str) -> Result<BatchControl, AchError> {
    Ok(BatchControl {
        record_type_code: field(line, 0, 1)?.to_string(),
        service_class_code: field(line, 1, 4)?.to_string(),
        entry_addenda_count: digits(field(line, 4, 10)?),
        entry_hash: digits(field(line, 10, 20)?),
        total_debit: digits(field(line, 20, 32)?),
        total_credit: digits(field(line, 32, 44)?),
        company_identification: field(line, 44, 54)?.trim().to_string(),
        message_authentication_code: field(line, 54, 73)?.trim().to_string(),
        reserved: field(line, 73, 79)?.trim().to_string(),
        originating_dfi: field(line, 79, 87)?.trim().to_string(),
        batch_number: field(line, 87, 94)?.to_string(),
    })
}

fn parse_file_control(line: &str) -> Result<FileControl, AchError> {
    Ok(FileControl {
        record_type_code: field(line, 0, 1)?.to_string(),
        batch_count: digits(field(line, 1, 7)?),
        block_count: digits(field(line, 7, 13)?),
        entry_addenda_count: digits(field(line, 13, 21)?),
        entry_hash: digits(field(line, 21, 31)?),
        total_debit: digits(field(line, 31, 43)?),
        total_credit: digits(field(line, 43, 55)?),
        reserved: field(line, 55, 94)?.trim().to_string(),
    })
}
