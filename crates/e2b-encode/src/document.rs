//! Document assembly: runs the section builders in schema order and
//! serializes the result.

use std::time::Instant;

use chrono::Utc;
use e2b_model::CaseRecord;
use e2b_vocab::oids::HL7_NS;
use e2b_vocab::{VocabularyRegistry, default_registry};
use e2b_xml::{XmlDocument, XmlElement};
use tracing::{info, info_span};

use crate::error::{EncodeError, Result};
use crate::format::format_timestamp;
use crate::hl7::relationship;
use crate::linker::{IdentifierLinker, TokenSource, UuidTokens};
use crate::options::EncodeOptions;
use crate::sections::{
    batch, causality, drug, header, history, lab, patient, reaction, reporter, sender,
};

/// Suffix of the attachment file name.
pub const FILE_SUFFIX: &str = "_E2B_R3.xml";

/// Result of one encoding pass.
#[derive(Debug, Clone)]
pub struct EncodedIcsr {
    pub case_id: String,
    pub xml: String,
    /// Drug tokens in input order.
    pub drug_tokens: Vec<String>,
    /// Reaction tokens in input order.
    pub reaction_tokens: Vec<String>,
    /// Relatedness assessments emitted, drug-role nodes excluded.
    pub causality_assessments: usize,
}

impl EncodedIcsr {
    /// Attachment file name, `<case id>_E2B_R3.xml`.
    ///
    /// Characters that are unsafe in file names become `_`.
    pub fn file_name(&self) -> String {
        let stem: String = self
            .case_id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("{stem}{FILE_SUFFIX}")
    }
}

/// Encodes case records into ICSR batch documents.
///
/// Holds only read-only state; one encoder can serve any number of cases,
/// from any number of threads.
#[derive(Debug, Clone)]
pub struct IcsrEncoder<'r> {
    registry: &'r VocabularyRegistry,
    options: EncodeOptions,
}

impl IcsrEncoder<'static> {
    /// Encoder over the shared registry.
    pub fn new(options: EncodeOptions) -> Self {
        Self {
            registry: default_registry(),
            options,
        }
    }
}

impl Default for IcsrEncoder<'static> {
    fn default() -> Self {
        Self::new(EncodeOptions::default())
    }
}

impl<'r> IcsrEncoder<'r> {
    pub fn with_registry(registry: &'r VocabularyRegistry, options: EncodeOptions) -> Self {
        Self { registry, options }
    }

    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Encode with random UUID identifier tokens.
    pub fn encode(&self, case: &CaseRecord) -> Result<EncodedIcsr> {
        self.encode_with_tokens(case, UuidTokens)
    }

    /// Encode drawing identifier tokens from `tokens`.
    ///
    /// Fails only when the case has no case id.
    pub fn encode_with_tokens<S: TokenSource>(
        &self,
        case: &CaseRecord,
        tokens: S,
    ) -> Result<EncodedIcsr> {
        let case_id = case.case_id().ok_or(EncodeError::MissingCaseId)?;
        let span = info_span!("encode_case", case_id = %case_id);
        let _guard = span.enter();
        let start = Instant::now();

        let mut linker = IdentifierLinker::new(tokens);
        let root = self.build(case, case_id, &mut linker);
        let xml = XmlDocument::new(root, HL7_NS)
            .to_xml_string(&self.options.serialize_options())?;

        let encoded = EncodedIcsr {
            case_id: case_id.to_string(),
            drug_tokens: linker.drugs().iter().map(|d| d.token.clone()).collect(),
            reaction_tokens: linker.reactions().iter().map(|r| r.token.clone()).collect(),
            causality_assessments: causality::conclusion_count(&case.medical),
            xml,
        };
        info!(
            drugs = encoded.drug_tokens.len(),
            reactions = encoded.reaction_tokens.len(),
            causality = encoded.causality_assessments,
            bytes = encoded.xml.len(),
            duration_ms = start.elapsed().as_millis(),
            "case encoded"
        );
        Ok(encoded)
    }

    /// Build the whole tree. The order of the pushes below is the order
    /// the schema requires.
    fn build<S: TokenSource>(
        &self,
        case: &CaseRecord,
        case_id: &str,
        linker: &mut IdentifierLinker<S>,
    ) -> XmlElement {
        let registry = self.registry;
        let instant = self.options.creation_time.unwrap_or_else(Utc::now);
        let timestamp = format_timestamp(&instant);
        let drugs = case.drugs();

        let mut role = patient::primary_role(registry, case);
        role.extend(history::medical_history(&case.patient.medical_history));
        role.extend(lab::lab_results(&case.patient.lab_results));
        role.extend(drug::drug_information(registry, &drugs, linker));
        role.extend(reaction::reactions(registry, case, linker));

        let mut assessment = XmlElement::new("adverseEventAssessment")
            .with_attrs([("classCode", "INVSTG"), ("moodCode", "EVN")]);
        assessment.push(relationship("subject1", "SBJ", role));
        assessment.extend(causality::assessments(registry, &drugs, &case.medical, linker));
        assessment.extend(sender::sender_comment(case));

        let worldwide_id = header::worldwide_case_id(registry, case, case_id);
        let mut event = header::investigation_event(case, case_id, &worldwide_id);
        event.push(relationship("component", "COMP", assessment));
        event.extend(reporter::primary_source(registry, case));
        event.push(sender::sender(registry, case, &self.options.sender_organization));
        event.push(sender::report_type(registry, case));

        let control_act =
            header::control_act(&timestamp).with_child(relationship("subject", "SUBJ", event));
        let message = header::message(case_id, &timestamp).with_child(control_act);

        let mut root = batch::batch_root(case_id, &timestamp);
        root.push(message);
        root.extend(batch::batch_footer());
        root
    }
}

/// Encode one case with default options and random tokens.
pub fn encode_case(case: &CaseRecord) -> Result<String> {
    Ok(IcsrEncoder::default().encode(case)?.xml)
}
