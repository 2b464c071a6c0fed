//! Sender information (ICH E2B C.3), the sender's comment (H.4) and the
//! report-type characteristic (C.1.3).

use e2b_model::{CaseRecord, non_blank};
use e2b_vocab::oids::{CHARACTERISTIC_OID, OBSERVATION_CODE_OID, observation as code};
use e2b_vocab::{TableKind, VocabularyRegistry};
use e2b_xml::XmlElement;

use crate::hl7::{coded, coded_value, relationship, text_value};

/// Code of the report-type characteristic within [`CHARACTERISTIC_OID`].
const REPORT_TYPE: &str = "1";

/// `subjectOf1` naming the sending organization.
///
/// Always emitted; an absent sender type takes the table fallback.
pub fn sender(registry: &VocabularyRegistry, case: &CaseRecord, organization: &str) -> XmlElement {
    let sender_type = non_blank(&case.general.sender_type).unwrap_or_default();
    let entity = XmlElement::new("assignedEntity")
        .with_attr("classCode", "ASSIGNED")
        .with_child(coded(
            "code",
            &registry.lookup(TableKind::SenderType, sender_type),
            registry.code_system(TableKind::SenderType),
        ))
        .with_child(
            XmlElement::new("representedOrganization")
                .with_attrs([("classCode", "ORG"), ("determinerCode", "INSTANCE")])
                .with_child(XmlElement::new("name").with_text(organization)),
        );
    let event = XmlElement::new("controlActEvent")
        .with_attrs([("classCode", "CACT"), ("moodCode", "EVN")])
        .with_child(relationship("author", "AUT", entity));
    relationship("subjectOf1", "SUBJ", event)
}

/// `subjectOf2` carrying the type of report.
///
/// Always emitted; an absent report type takes the table fallback.
pub fn report_type(registry: &VocabularyRegistry, case: &CaseRecord) -> XmlElement {
    let label = non_blank(&case.general.report_type).unwrap_or_default();
    let characteristic = XmlElement::new("investigationCharacteristic")
        .with_attrs([("classCode", "VERIF"), ("moodCode", "EVN")])
        .with_child(coded("code", REPORT_TYPE, CHARACTERISTIC_OID))
        .with_child(coded_value(
            &registry.lookup(TableKind::ReportType, label),
            registry.code_system(TableKind::ReportType),
        ));
    relationship("subjectOf2", "SUBJ", characteristic)
}

/// `component1` with the sender's comment on the case, if any.
pub fn sender_comment(case: &CaseRecord) -> Option<XmlElement> {
    let text = non_blank(&case.medical.company_comment)?;
    let event = XmlElement::new("observationEvent")
        .with_attrs([("classCode", "OBS"), ("moodCode", "EVN")])
        .with_child(crate::hl7::code(code::COMMENT, OBSERVATION_CODE_OID))
        .with_child(text_value(text));
    Some(relationship("component1", "COMP", event))
}
