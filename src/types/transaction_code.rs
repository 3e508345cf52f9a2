//! Transaction-code classification and validation sets
//!
//! Two distinct closed sets live here and they are not the same:
//!
//! - [`is_valid_transaction_code`] is the validator's closed set of accepted
//!   two-digit codes for inbound entries.
//! - [`classify`] is the encoder's debit/credit classification used when
//!   accumulating control totals. It covers the checking/savings/GL/loan
//!   families plus their pre-note variants.
//!
//! A code the classifier does not recognize contributes to neither total;
//! the encoder logs these so dropped amounts are visible to the caller.

/// Debit or credit classification of an entry's transaction code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryClass {
    /// Funds move to the receiver (e.g. payroll deposit)
    Credit,
    /// Funds move from the receiver (e.g. bill collection)
    Debit,
}

/// Codes accepted by the validator for inbound entry details
const VALID_TRANSACTION_CODES: [&str; 12] = [
    "22", "23", "24", "27", "28", "29", "32", "33", "34", "37", "38", "39",
];

/// Live and pre-note credit codes across account families
const CREDIT_CODES: [&str; 8] = ["22", "32", "42", "52", "23", "33", "43", "53"];

/// Live and pre-note debit codes across account families
const DEBIT_CODES: [&str; 8] = ["27", "37", "47", "55", "28", "38", "48", "58"];

/// Whether a code belongs to the validator's closed set
pub fn is_valid_transaction_code(code: &str) -> bool {
    VALID_TRANSACTION_CODES.contains(&code)
}

/// Classify a transaction code as debit or credit for control totals
///
/// Returns `None` for codes outside both families; such entries contribute
/// to neither the debit nor the credit total.
pub fn classify(code: &str) -> Option<EntryClass> {
    if CREDIT_CODES.contains(&code) {
        Some(EntryClass::Credit)
    } else if DEBIT_CODES.contains(&code) {
        Some(EntryClass::Debit)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::checking_credit("22", Some(EntryClass::Credit))]
    #[case::savings_credit("32", Some(EntryClass::Credit))]
    #[case::gl_credit("42", Some(EntryClass::Credit))]
    #[case::loan_credit("52", Some(EntryClass::Credit))]
    #[case::checking_credit_prenote("23", Some(EntryClass::Credit))]
    #[case::savings_credit_prenote("33", Some(EntryClass::Credit))]
    #[case::checking_debit("27", Some(EntryClass::Debit))]
    #[case::savings_debit("37", Some(EntryClass::Debit))]
    #[case::gl_debit("47", Some(EntryClass::Debit))]
    #[case::loan_debit("55", Some(EntryClass::Debit))]
    #[case::checking_debit_prenote("28", Some(EntryClass::Debit))]
    #[case::unknown("99", None)]
    #[case::empty("", None)]
    fn test_classify(#[case] code: &str, #[case] expected: Option<EntryClass>) {
        assert_eq!(classify(code), expected);
    }

    #[rstest]
    #[case::checking_credit("22", true)]
    #[case::prenote_return("24", true)]
    #[case::savings_return("39", true)]
    #[case::gl_credit_not_accepted("42", false)]
    #[case::unknown("99", false)]
    fn test_validation_set(#[case] code: &str, #[case] expected: bool) {
        assert_eq!(is_valid_transaction_code(code), expected);
    }
}
