//! End-to-end checks of the exporter commands.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use e2b_cli::cli::{Cli, Command, EncodeArgs};
use e2b_cli::commands::{encode_options, run_encode, vocab_table};
use e2b_vocab::{TableKind, default_registry};

const CASE_JSON: &str = r#"{
    "caseId": "PV-CLI-7",
    "triage": { "receivedDate": "2024-03-02", "country": "Spain" },
    "patient": { "initials": "MR", "sex": "Male" },
    "products": [ { "name": "Ibuprofen", "role": "Suspect" } ],
    "events": [ { "term": "Gastric pain", "outcome": "Recovered" } ]
}"#;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("e2b-cli-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn encode_args(case_json: PathBuf) -> EncodeArgs {
    EncodeArgs {
        case_json,
        output_dir: None,
        stdout: false,
        compact: false,
        creation_time: None,
        sender_organization: None,
    }
}

#[test]
fn encode_writes_next_to_the_case_file() {
    let dir = scratch_dir("encode");
    let case_path = dir.join("case.json");
    fs::write(&case_path, CASE_JSON).expect("write case");

    let outcome = run_encode(&encode_args(case_path)).expect("encode");
    assert_eq!(outcome.case_id, "PV-CLI-7");
    assert_eq!(outcome.drugs, 1);
    assert_eq!(outcome.reactions, 1);
    assert_eq!(outcome.causality_assessments, 0);

    let output = outcome.output.expect("written to a file");
    assert_eq!(output, dir.join("PV-CLI-7_E2B_R3.xml"));
    let xml = fs::read_to_string(&output).expect("read output");
    assert!(xml.starts_with("<?xml"));
    assert!(xml.contains("Gastric pain"));
    assert_eq!(xml.len(), outcome.bytes);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn output_dir_is_created() {
    let dir = scratch_dir("outdir");
    let case_path = dir.join("case.json");
    fs::write(&case_path, CASE_JSON).expect("write case");

    let mut args = encode_args(case_path);
    args.output_dir = Some(dir.join("nested").join("out"));
    args.compact = true;
    let outcome = run_encode(&args).expect("encode");

    let output = outcome.output.expect("written to a file");
    assert!(output.starts_with(dir.join("nested").join("out")));
    let xml = fs::read_to_string(&output).expect("read output");
    assert!(!xml.trim_end().contains('\n'));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_case_file_is_reported() {
    let dir = scratch_dir("missing");
    let error = run_encode(&encode_args(dir.join("absent.json"))).expect_err("must fail");
    assert!(format!("{error:#}").contains("absent.json"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn case_without_id_is_reported() {
    let dir = scratch_dir("noid");
    let case_path = dir.join("case.json");
    fs::write(&case_path, r#"{ "narrative": "No identifier" }"#).expect("write case");
    assert!(run_encode(&encode_args(case_path)).is_err());
    assert_eq!(fs::read_dir(&dir).expect("list").count(), 1);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn flags_become_encode_options() {
    let cli = Cli::try_parse_from([
        "e2b-encode",
        "encode",
        "case.json",
        "--compact",
        "--creation-time",
        "2024-01-21T10:30:00Z",
        "--sender-organization",
        "Acme Safety",
    ])
    .expect("parse");
    let Command::Encode(args) = cli.command else {
        panic!("expected encode");
    };
    let options = encode_options(&args);
    assert_eq!(options.indent, None);
    assert_eq!(options.sender_organization, "Acme Safety");
    assert_eq!(
        options.creation_time.map(|t| t.to_rfc3339()),
        Some("2024-01-21T10:30:00+00:00".to_string())
    );
}

#[test]
fn output_dir_conflicts_with_stdout() {
    let parsed = Cli::try_parse_from([
        "e2b-encode",
        "encode",
        "case.json",
        "--stdout",
        "--output-dir",
        "out",
    ]);
    assert!(parsed.is_err());
}

#[test]
fn vocab_overview_lists_every_table() {
    let table = vocab_table(None);
    assert_eq!(table.row_iter().count(), default_registry().tables().count());
}

#[test]
fn vocab_table_lists_labels_and_fallback() {
    let labels = default_registry().table(TableKind::Outcome).labels().len();
    let table = vocab_table(Some(TableKind::Outcome));
    assert_eq!(table.row_iter().count(), labels + 1);
}
