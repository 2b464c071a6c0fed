use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use e2b_encode::{EncodeOptions, IcsrEncoder};
use e2b_model::CaseRecord;
use e2b_vocab::{Fallback, TableKind, default_registry};
use tracing::{debug, info, info_span};

use crate::cli::{EncodeArgs, VocabArgs};
use crate::logging::redact_value;
use crate::summary::apply_table_style;

/// What one `encode` run produced.
#[derive(Debug, Clone)]
pub struct EncodeOutcome {
    pub case_id: String,
    pub drugs: usize,
    pub reactions: usize,
    pub causality_assessments: usize,
    /// Written file; `None` when the XML went to stdout.
    pub output: Option<PathBuf>,
    pub bytes: usize,
}

pub fn load_case(path: &Path) -> Result<CaseRecord> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let case = CaseRecord::from_reader(BufReader::new(file))
        .with_context(|| format!("parse case record {}", path.display()))?;
    debug!(
        patient = redact_value(case.patient_initials().unwrap_or_default()),
        products = case.products.len(),
        events = case.events.len(),
        "loaded case record"
    );
    Ok(case)
}

pub fn encode_options(args: &EncodeArgs) -> EncodeOptions {
    let mut options = EncodeOptions::default();
    if let Some(instant) = args.creation_time {
        options = options.with_creation_time(instant);
    }
    if args.compact {
        options = options.with_indent(None);
    }
    if let Some(name) = &args.sender_organization {
        options = options.with_sender_organization(name.clone());
    }
    options
}

pub fn run_encode(args: &EncodeArgs) -> Result<EncodeOutcome> {
    let span = info_span!("export", case_file = %args.case_json.display());
    let _guard = span.enter();

    let case = load_case(&args.case_json)?;
    let encoded = IcsrEncoder::new(encode_options(args))
        .encode(&case)
        .with_context(|| format!("encode {}", args.case_json.display()))?;

    let output = if args.stdout {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(encoded.xml.as_bytes())
            .and_then(|()| stdout.write_all(b"\n"))
            .context("write to stdout")?;
        None
    } else {
        let dir = args.output_dir.clone().unwrap_or_else(|| {
            args.case_json
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default()
        });
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        let path = dir.join(encoded.file_name());
        fs::write(&path, &encoded.xml).with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), "wrote ICSR");
        Some(path)
    };

    Ok(EncodeOutcome {
        drugs: encoded.drug_tokens.len(),
        reactions: encoded.reaction_tokens.len(),
        causality_assessments: encoded.causality_assessments,
        bytes: encoded.xml.len(),
        case_id: encoded.case_id,
        output,
    })
}

pub fn run_vocab(args: &VocabArgs) -> Result<()> {
    println!("{}", vocab_table(args.table));
    Ok(())
}

/// One table's rows, or the overview of all tables.
pub fn vocab_table(kind: Option<TableKind>) -> Table {
    let registry = default_registry();
    let mut table = Table::new();
    apply_table_style(&mut table);
    match kind {
        Some(kind) => {
            let vocabulary = registry.table(kind);
            table.set_header(vec!["Label", "Code"]);
            for (label, code) in vocabulary.labels() {
                table.add_row(vec![*label, *code]);
            }
            table.add_row(vec!["(unmapped)".to_string(), fallback_text(vocabulary.fallback())]);
        }
        None => {
            table.set_header(vec!["Table", "Code system", "Labels", "Fallback"]);
            for vocabulary in registry.tables() {
                table.add_row(vec![
                    vocabulary.kind().to_string(),
                    vocabulary.code_system().to_string(),
                    vocabulary.labels().len().to_string(),
                    fallback_text(vocabulary.fallback()),
                ]);
            }
        }
    }
    table
}

fn fallback_text(fallback: Fallback) -> String {
    match fallback {
        Fallback::Code(code) => code.to_string(),
        Fallback::LabelPrefix(len) => format!("first {len} characters, uppercased"),
    }
}
