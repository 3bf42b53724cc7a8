/*
    tempeval (TempEval-3 annotated document reader)

        Licensed under the GNU General Public License v3
*/

//! Command-line interface for inspecting TempEval-3 files.
//!
//! Usage:
//!   tempeval `<file>`...                  - Print each document as JSON
//!   tempeval --csv `<file>`...            - Print the annotations of each document as CSV
//!   tempeval --validate `<file>`...       - Verify all annotation offsets

use clap::{Arg, ArgAction, Command};
use std::process::exit;
use std::sync::Arc;

use tempeval::{
    Config, Configurable, Document, OffsetBase, Reader, ReferenceTimePolicy, TempEval3Reader,
    TempEvalError, ToCsv, ToJson, WhitespaceAnalyzer,
};

fn main() {
    let matches = Command::new("tempeval")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reads TempEval-3 (TimeML) files and prints their text, reference time and annotations")
        .arg_required_else_help(true)
        .arg(
            Arg::new("files")
                .help("TempEval-3 files to read, - reads standard input")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("JSON configuration file"),
        )
        .arg(
            Arg::new("csv")
                .long("csv")
                .help("Output annotations as CSV instead of the whole document as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail on documents with more than one creation time")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("analyzer-offsets")
                .long("analyzer-offsets")
                .help("Express offsets relative to the text without leading whitespace")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("tokenize")
                .long("tokenize")
                .help("Run the built-in whitespace tokenizer on every document")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("validate")
                .long("validate")
                .help("Validate the offsets of all annotations, print nothing else")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .short('d')
                .help("Print debug information to standard error")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = match matches.get_one::<String>("config") {
        Some(filename) => Config::from_file(filename).unwrap_or_else(|e| fail(e)),
        None => Config::default(),
    };
    let debug = matches.get_flag("debug") || config.debug();
    let mut config = config.with_debug(debug);
    if matches.get_flag("strict") {
        config = config.with_reference_time_policy(ReferenceTimePolicy::Strict);
    }
    if matches.get_flag("analyzer-offsets") {
        config = config.with_offset_base(OffsetBase::Analyzer);
    }

    let mut reader = TempEval3Reader::default().with_config(config);
    if matches.get_flag("tokenize") {
        reader = reader.with_analyzer(Arc::new(WhitespaceAnalyzer::new()));
    }

    let files: Vec<&String> = matches
        .get_many::<String>("files")
        .map(|files| files.collect())
        .unwrap_or_default();
    for filename in files {
        let document = reader.parse_file(filename).unwrap_or_else(|e| fail(e));
        if let Err(e) = output(&document, &reader, &matches) {
            fail(e);
        }
    }
}

fn output(
    document: &Document,
    reader: &TempEval3Reader,
    matches: &clap::ArgMatches,
) -> Result<(), TempEvalError> {
    if matches.get_flag("validate") {
        document.validate_text(true)?;
        eprintln!("{}: {} annotations valid", document.source(), document.annotations().len());
        Ok(())
    } else if matches.get_flag("csv") {
        document.to_csv_file("-", reader.config())
    } else {
        document.to_json_file("-", reader.config())?;
        println!();
        Ok(())
    }
}

fn fail(e: TempEvalError) -> ! {
    eprintln!("{}", e);
    exit(1)
}
