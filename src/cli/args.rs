use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Encode, decode and validate fixed-width ACH batch-payment files
#[derive(Parser, Debug)]
#[command(name = "ach-codec")]
#[command(about = "Encode, decode and validate fixed-width ACH batch-payment files", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Available operations
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a JSON file request into ACH text
    Encode {
        /// Path to the JSON file request
        #[arg(value_name = "REQUEST", help = "Path to the JSON file request")]
        request: PathBuf,

        /// Where to write the ACH file; stdout when omitted
        #[arg(
            long,
            short,
            value_name = "FILE",
            help = "Write the ACH file here instead of stdout"
        )]
        output: Option<PathBuf>,
    },

    /// Decode an ACH file, validate it and print control totals
    Decode {
        /// Path to the ACH file
        #[arg(value_name = "INPUT", help = "Path to the ACH file")]
        input: PathBuf,

        /// Export decoded entry details as CSV
        #[arg(
            long,
            value_name = "FILE",
            help = "Export decoded entry details to this CSV file"
        )]
        export_entries: Option<PathBuf>,
    },

    /// Validate an ACH file, reporting the first violation
    Validate {
        /// Path to the ACH file
        #[arg(value_name = "INPUT", help = "Path to the ACH file")]
        input: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::Path;

    #[test]
    fn test_encode_parsing() {
        let parsed =
            CliArgs::try_parse_from(["program", "encode", "request.json", "-o", "out.ach"])
                .unwrap();
        match parsed.command {
            Command::Encode { request, output } => {
                assert_eq!(request, Path::new("request.json"));
                assert_eq!(output.as_deref(), Some(Path::new("out.ach")));
            }
            other => panic!("Expected Encode, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_defaults_to_stdout() {
        let parsed = CliArgs::try_parse_from(["program", "encode", "request.json"]).unwrap();
        match parsed.command {
            Command::Encode { output, .. } => assert!(output.is_none()),
            other => panic!("Expected Encode, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_with_export() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "decode",
            "in.ach",
            "--export-entries",
            "entries.csv",
        ])
        .unwrap();
        match parsed.command {
            Command::Decode {
                input,
                export_entries,
            } => {
                assert_eq!(input, Path::new("in.ach"));
                assert_eq!(export_entries.as_deref(), Some(Path::new("entries.csv")));
            }
            other => panic!("Expected Decode, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_parsing() {
        let parsed = CliArgs::try_parse_from(["program", "validate", "in.ach"]).unwrap();
        assert!(matches!(parsed.command, Command::Validate { .. }));
    }

    #[rstest]
    #[case::no_subcommand(&["program"])]
    #[case::unknown_subcommand(&["program", "transmogrify", "in.ach"])]
    #[case::encode_missing_request(&["program", "encode"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
