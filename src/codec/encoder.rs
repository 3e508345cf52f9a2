//! ACH file encoder
//!
//! Turns an [`AchFileRequest`] into the exact flat-file text: one file
//! header, then per batch a batch header, its entry details and a batch
//! control, then the file control, then `'9'`-filler lines padding the file
//! to a whole number of 10-line blocks.
//!
//! # Derived totals
//!
//! Per-batch running counters (entry count, entry-hash partial sum, debit
//! and credit sums) accumulate as entries are emitted. They seed that
//! batch's control record and then roll into the file-level accumulators
//! for the file control:
//!
//! - `entryHash(batch) = (sum of first 8 routing digits per entry) mod 10^10`
//! - `entryHash(file)  = (sum of batch hashes) mod 10^10`
//! - `blockCount = ceil((1 + 2 * batchCount + entries + 1) / 10)`
//!
//! # Post-condition
//!
//! Every emitted line is exactly 94 characters. A violation is the fatal
//! internal [`AchError::LineLength`] - it indicates a formatter defect, not
//! bad input, and the malformed file is never emitted.

use crate::codec::fields::{alpha, digits, numeric};
use crate::types::{
    classify, AchError, AchFileRequest, BatchRequest, EntryClass, EntryRequest, BLOCKING_FACTOR,
    RECORD_LENGTH,
};
use chrono::Local;
use rand::Rng;
use tracing::warn;

/// Modulus applied to entry-hash sums (hash fields are 10 columns wide)
const ENTRY_HASH_MODULUS: u64 = 10_000_000_000;

/// Characters eligible as a generated file-ID modifier
const FILE_ID_MODIFIER_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Running totals for one batch, rolled into the file totals at batch close
#[derive(Debug, Default, Clone, Copy)]
struct BatchTotals {
    entry_count: u64,
    hash_sum: u64,
    total_debit: u64,
    total_credit: u64,
}

impl BatchTotals {
    /// Accumulate one entry: count, routing-prefix hash, debit/credit sum
    fn add(&mut self, entry: &EntryRequest, routing_prefix: &str) {
        self.entry_count += 1;
        self.hash_sum += digits(routing_prefix);
        match classify(&entry.transaction_code) {
            Some(EntryClass::Credit) => self.total_credit += entry.amount,
            Some(EntryClass::Debit) => self.total_debit += entry.amount,
            None => {
                // Flagged instead of silently dropped from the control totals
                warn!(
                    code = %entry.transaction_code,
                    trace = %entry.trace_number,
                    amount = entry.amount,
                    "unclassified transaction code; amount counts toward neither total"
                );
            }
        }
    }

    /// Batch entry hash, truncated to the 10-column field
    fn entry_hash(&self) -> u64 {
        self.hash_sum % ENTRY_HASH_MODULUS
    }
}

/// Encode a file request into ACH text
///
/// Produces the full newline-terminated file, including block padding.
///
/// # Errors
///
/// Returns [`AchError::LineLength`] if any rendered record is not exactly
/// 94 characters. This is an internal invariant violation; no partial or
/// repaired output is ever returned.
pub fn encode(request: &AchFileRequest) -> Result<String, AchError> {
    let mut lines: Vec<String> = Vec::new();
    lines.push(build_file_header(request)?);

    let mut file_entry_count: u64 = 0;
    let mut file_hash_sum: u64 = 0;
    let mut file_debit: u64 = 0;
    let mut file_credit: u64 = 0;

    for batch in &request.batches {
        lines.push(build_batch_header(batch)?);

        let mut totals = BatchTotals::default();
        for entry in &batch.entries {
            let routing_prefix = numeric(digits(&entry.rdfi_routing_number), 8);
            lines.push(build_entry_detail(entry, &routing_prefix)?);
            totals.add(entry, &routing_prefix);
        }

        lines.push(build_batch_control(batch, &totals)?);

        file_entry_count += totals.entry_count;
        file_hash_sum += totals.entry_hash();
        file_debit += totals.total_debit;
        file_credit += totals.total_credit;
    }

    let batch_count = request.batches.len() as u64;
    lines.push(build_file_control(
        batch_count,
        file_entry_count,
        file_hash_sum % ENTRY_HASH_MODULUS,
        file_debit,
        file_credit,
    )?);

    // Pad to a whole number of blocks with filler lines
    let filler = "9".repeat(RECORD_LENGTH);
    while lines.len() as u64 % BLOCKING_FACTOR != 0 {
        lines.push(filler.clone());
    }

    let mut text = lines.join("\n");
    text.push('\n');
    Ok(text)
}

/// Check the 94-character post-condition for a rendered record
fn ensure_length(line: String, record: &str) -> Result<String, AchError> {
    if line.chars().count() != RECORD_LENGTH {
        return Err(AchError::line_length(record, line.chars().count()));
    }
    Ok(line)
}

fn build_file_header(request: &AchFileRequest) -> Result<String, AchError> {
    let now = Local::now();
    let line = format!(
        "101{dest}{origin}{date}{time}{modifier}094101{dest_name}{origin_name}{reference}",
        dest = numeric(digits(&request.immediate_destination), 10),
        origin = numeric(digits(&request.immediate_origin), 10),
        date = now.format("%y%m%d"),
        time = now.format("%H%M"),
        modifier = file_id_modifier(request),
        dest_name = alpha(&request.destination_name, 23),
        origin_name = alpha(&request.origin_name, 23),
        reference = alpha("", 8),
    );
    ensure_length(line, "File Header")
}

fn build_batch_header(batch: &BatchRequest) -> Result<String, AchError> {
    let line = format!(
        "5{scc}{name}{discretionary}{company_id}{sec}{description}{descriptive_date}\
         {effective_date}{settlement}1{odfi}{number}",
        scc = numeric(digits(&batch.service_class_code), 3),
        name = alpha(&batch.company_name, 16),
        discretionary = alpha(&batch.company_discretionary_data, 20),
        company_id = alpha(&batch.company_identification, 10),
        sec = alpha(&batch.standard_entry_class_code, 3),
        description = alpha(&batch.company_entry_description, 10),
        descriptive_date = alpha(&batch.company_descriptive_date, 6),
        effective_date = alpha(&batch.effective_entry_date, 6),
        settlement = alpha("", 3),
        odfi = alpha(&batch.originating_dfi, 8),
        number = numeric(u64::from(batch.batch_number), 7),
    );
    ensure_length(line, "Batch Header")
}

fn build_entry_detail(entry: &EntryRequest, routing_prefix: &str) -> Result<String, AchError> {
    let line = format!(
        "6{code}{routing}{check}{account}{amount}{individual_id}{name}{discretionary}\
         {addenda}{trace}",
        code = alpha(&entry.transaction_code, 2),
        routing = routing_prefix,
        check = numeric(digits(&entry.check_digit), 1),
        account = alpha(&entry.dfi_account_number, 17),
        amount = numeric(entry.amount, 10),
        individual_id = alpha(&entry.individual_id_number, 15),
        name = alpha(&entry.individual_name, 22),
        discretionary = alpha(&entry.discretionary_data, 2),
        addenda = numeric(u64::from(entry.addenda_record_indicator), 1),
        trace = numeric(digits(&entry.trace_number), 15),
    );
    ensure_length(line, "Entry Detail")
}

fn build_batch_control(batch: &BatchRequest, totals: &BatchTotals) -> Result<String, AchError> {
    let line = format!(
        "8{scc}{count}{hash}{debit}{credit}{company_id}{mac}{reserved}{odfi}{number}",
        scc = numeric(digits(&batch.service_class_code), 3),
        count = numeric(totals.entry_count, 6),
        hash = numeric(totals.entry_hash(), 10),
        debit = numeric(totals.total_debit, 12),
        credit = numeric(totals.total_credit, 12),
        company_id = alpha(&batch.company_identification, 10),
        mac = alpha("", 19),
        reserved = alpha("", 6),
        odfi = alpha(&batch.originating_dfi, 8),
        number = numeric(u64::from(batch.batch_number), 7),
    );
    ensure_length(line, "Batch Control")
}

fn build_file_control(
    batch_count: u64,
    entry_count: u64,
    entry_hash: u64,
    total_debit: u64,
    total_credit: u64,
) -> Result<String, AchError> {
    // File header + header/control pair per batch + entries + file control
    let total_records = 1 + 2 * batch_count + entry_count + 1;
    let block_count = total_records.div_ceil(BLOCKING_FACTOR);

    let line = format!(
        "9{batches}{blocks}{entries}{hash}{debit}{credit}{reserved}",
        batches = numeric(batch_count, 6),
        blocks = numeric(block_count, 6),
        entries = numeric(entry_count, 8),
        hash = numeric(entry_hash, 10),
        debit = numeric(total_debit, 12),
        credit = numeric(total_credit, 12),
        reserved = alpha("", 39),
    );
    ensure_length(line, "File Control")
}

/// File-ID modifier from the request, or a random [A-Z0-9] character
fn file_id_modifier(request: &AchFileRequest) -> String {
    match request.file_id_modifier.as_deref() {
        Some(modifier) if !modifier.is_empty() => alpha(modifier, 1),
        _ => {
            let index = rand::thread_rng().gen_range(0..FILE_ID_MODIFIER_CHARSET.len());
            (FILE_ID_MODIFIER_CHARSET[index] as char).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AchFileRequest, BatchRequest, EntryRequest};
    use rstest::rstest;

    fn entry(code: &str, routing: &str, amount: u64) -> EntryRequest {
        EntryRequest {
            transaction_code: code.to_string(),
            rdfi_routing_number: routing.to_string(),
            check_digit: "4".to_string(),
            dfi_account_number: "123456789".to_string(),
            amount,
            individual_id_number: "ID-1".to_string(),
            individual_name: "JANE DOE".to_string(),
            discretionary_data: String::new(),
            addenda_record_indicator: 0,
            trace_number: "099000010000001".to_string(),
        }
    }

    fn request(entries: Vec<EntryRequest>) -> AchFileRequest {
        AchFileRequest {
            immediate_destination: "0210000211".to_string(),
            immediate_origin: "0990000192".to_string(),
            destination_name: "FED CLEARING".to_string(),
            origin_name: "ACME PAYROLL".to_string(),
            file_id_modifier: Some("A".to_string()),
            batches: vec![BatchRequest {
                service_class_code: "200".to_string(),
                company_name: "ACME CORP".to_string(),
                company_discretionary_data: String::new(),
                company_identification: "1234567890".to_string(),
                standard_entry_class_code: "PPD".to_string(),
                company_entry_description: "PAYROLL".to_string(),
                company_descriptive_date: String::new(),
                effective_entry_date: "260827".to_string(),
                originating_dfi: "09900001".to_string(),
                batch_number: 1,
                entries,
            }],
        }
    }

    #[test]
    fn test_every_line_is_94_chars() {
        let text = encode(&request(vec![
            entry("22", "02100012", 1000),
            entry("27", "02100012", 2500),
        ]))
        .unwrap();
        for line in text.lines() {
            assert_eq!(line.chars().count(), 94, "bad line: {:?}", line);
        }
    }

    #[test]
    fn test_line_count_is_multiple_of_ten() {
        for entries in 1..=15 {
            let text =
                encode(&request((0..entries).map(|_| entry("22", "02100012", 100)).collect()))
                    .unwrap();
            let count = text.lines().count();
            assert_eq!(count % 10, 0, "{} entries gave {} lines", entries, count);
            // Smallest multiple of 10 covering the unpadded record count
            let unpadded = 1 + 1 + entries + 1 + 1;
            assert!(count < unpadded + 10);
        }
    }

    #[test]
    fn test_record_order_and_tags() {
        let text = encode(&request(vec![entry("22", "02100012", 1000)])).unwrap();
        let tags: Vec<char> = text.lines().filter_map(|l| l.chars().next()).collect();
        assert_eq!(&tags[..4], &['1', '5', '6', '8']);
        assert_eq!(tags[4], '9');
        // The rest is filler
        assert!(tags[5..].iter().all(|&t| t == '9'));
    }

    #[test]
    fn test_batch_control_totals_for_known_scenario() {
        // Two entries on routing prefix 02100012: one $10.00 credit, one
        // $25.00 debit. Expected hash: (2100012 + 2100012) mod 10^10.
        let text = encode(&request(vec![
            entry("22", "02100012", 1000),
            entry("27", "02100012", 2500),
        ]))
        .unwrap();
        let control = text.lines().find(|l| l.starts_with('8')).unwrap();
        assert_eq!(&control[4..10], "000002"); // entry count
        assert_eq!(&control[10..20], "0004200024"); // entry hash
        assert_eq!(&control[20..32], "000000002500"); // total debit
        assert_eq!(&control[32..44], "000000001000"); // total credit
    }

    #[test]
    fn test_file_control_echoes_batch_totals() {
        let text = encode(&request(vec![
            entry("22", "02100012", 1000),
            entry("27", "02100012", 2500),
        ]))
        .unwrap();
        let control = text.lines().find(|l| l.starts_with('9')).unwrap();
        assert_eq!(&control[1..7], "000001"); // batch count
        assert_eq!(&control[7..13], "000001"); // ceil(6/10) blocks
        assert_eq!(&control[13..21], "00000002"); // entry/addenda count
        assert_eq!(&control[21..31], "0004200024"); // entry hash
        assert_eq!(&control[31..43], "000000002500");
        assert_eq!(&control[43..55], "000000001000");
    }

    #[test]
    fn test_hash_truncation_keeps_low_ten_digits() {
        // 5 entries of routing 99999999 sum to 499999995, still below the
        // modulus; force truncation with many large prefixes instead.
        let entries: Vec<EntryRequest> =
            (0..200).map(|_| entry("22", "99999999", 1)).collect();
        let sum: u64 = 99_999_999 * 200;
        let text = encode(&request(entries)).unwrap();
        let control = text.lines().find(|l| l.starts_with('8')).unwrap();
        let rendered: u64 = control[10..20].parse().unwrap();
        assert_eq!(rendered, sum % ENTRY_HASH_MODULUS);
    }

    #[rstest]
    #[case::prenote_credit("23", 0, 700)]
    #[case::gl_credit("42", 0, 700)]
    #[case::loan_debit("55", 700, 0)]
    #[case::unknown_neither("99", 0, 0)]
    fn test_classification_families(
        #[case] code: &str,
        #[case] debit: u64,
        #[case] credit: u64,
    ) {
        let text = encode(&request(vec![entry(code, "02100012", 700)])).unwrap();
        let control = text.lines().find(|l| l.starts_with('8')).unwrap();
        assert_eq!(control[20..32].parse::<u64>().unwrap(), debit);
        assert_eq!(control[32..44].parse::<u64>().unwrap(), credit);
    }

    #[test]
    fn test_long_fields_truncate_to_width() {
        let mut req = request(vec![entry("22", "02100012", 1000)]);
        req.batches[0].company_name = "AN UNREASONABLY LONG COMPANY NAME".to_string();
        let text = encode(&req).unwrap();
        let header = text.lines().find(|l| l.starts_with('5')).unwrap();
        assert_eq!(header.len(), 94);
        assert_eq!(&header[4..20], "AN UNREASONABLY ");
    }

    #[test]
    fn test_empty_batch_list_still_pads() {
        let mut req = request(vec![]);
        req.batches.clear();
        let text = encode(&req).unwrap();
        // Header + control padded up to one block
        assert_eq!(text.lines().count(), 10);
        let control = text.lines().nth(1).unwrap();
        assert!(control.starts_with('9'));
        assert_eq!(&control[1..7], "000000");
    }

    #[test]
    fn test_file_id_modifier_from_request() {
        let text = encode(&request(vec![entry("22", "02100012", 1)])).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(&header[33..34], "A");
    }

    #[test]
    fn test_generated_file_id_modifier_is_alphanumeric() {
        let mut req = request(vec![entry("22", "02100012", 1)]);
        req.file_id_modifier = None;
        let text = encode(&req).unwrap();
        let modifier = text.lines().next().unwrap().as_bytes()[33];
        assert!(FILE_ID_MODIFIER_CHARSET.contains(&modifier));
    }
}
