//! ICSR message header and the investigation event that carries the case.

use e2b_model::{CaseRecord, non_blank};
use e2b_vocab::oids::{
    ACT_CODE_OID, CONTROL_ACT_TRIGGER, INTERACTION_ID_OID, MESSAGE_INTERACTION,
    MESSAGE_NUMBER_OID, MESSAGE_RECEIVER_OID, MESSAGE_SENDER_OID, RECEIVER_EXTENSION,
    SENDER_EXTENSION, TRIGGER_EVENT_OID, WORLDWIDE_CASE_OID,
};
use e2b_vocab::{TableKind, VocabularyRegistry};
use e2b_xml::XmlElement;

use crate::hl7::{code, date_element, device, id};

/// Worldwide unique case identifier (C.1.8.1).
///
/// An assigned identifier is used as is; otherwise one is derived from the
/// occurrence country, the sender and the case number.
pub fn worldwide_case_id(registry: &VocabularyRegistry, case: &CaseRecord, case_id: &str) -> String {
    if let Some(assigned) = non_blank(&case.worldwide_id) {
        return assigned.to_string();
    }
    let country = case
        .occurrence_country()
        .map(|label| registry.lookup(TableKind::Country, label).into_owned())
        .unwrap_or_else(|| "XX".to_string());
    format!("{country}-{SENDER_EXTENSION}-{case_id}")
}

/// `PORR_IN049016UV` with its transmission wrapper fields.
///
/// The control act is appended by the caller.
pub fn message(case_id: &str, timestamp: &str) -> XmlElement {
    let mut message = XmlElement::new(MESSAGE_INTERACTION);
    message.push(id(MESSAGE_NUMBER_OID, case_id));
    message.child("creationTime").set_attr("value", timestamp);
    message.push(
        XmlElement::new("interactionId")
            .with_attrs([("root", INTERACTION_ID_OID), ("extension", MESSAGE_INTERACTION)]),
    );
    message.child("processingCode").set_attr("code", "P");
    message.child("processingModeCode").set_attr("code", "T");
    message.child("acceptAckCode").set_attr("code", "AL");
    message.push(device("receiver", "RCV", MESSAGE_RECEIVER_OID, RECEIVER_EXTENSION));
    message.push(device("sender", "SND", MESSAGE_SENDER_OID, SENDER_EXTENSION));
    message
}

pub fn control_act(timestamp: &str) -> XmlElement {
    let mut act = XmlElement::new("controlActProcess")
        .with_attrs([("classCode", "CACT"), ("moodCode", "EVN")]);
    act.push(code(CONTROL_ACT_TRIGGER, TRIGGER_EVENT_OID));
    act.child("effectiveTime").set_attr("value", timestamp);
    act
}

/// `investigationEvent` with identifiers, narrative and report dates.
///
/// Sections below the header are appended by the caller.
pub fn investigation_event(case: &CaseRecord, case_id: &str, worldwide_id: &str) -> XmlElement {
    let mut event = XmlElement::new("investigationEvent")
        .with_attrs([("classCode", "INVSTG"), ("moodCode", "EVN")]);
    event.push(id(MESSAGE_NUMBER_OID, case_id));
    event.push(id(WORLDWIDE_CASE_OID, worldwide_id));
    event.push(code("PAT_ADV_EVNT", ACT_CODE_OID));
    if let Some(narrative) = case.narrative() {
        event.child("text").set_text(narrative);
    }
    event.child("statusCode").set_attr("code", "active");
    if let Some(low) = date_element("low", case.triage.received_date.as_deref()) {
        event.child("effectiveTime").push(low);
    }
    let latest = non_blank(&case.general.most_recent_info_date)
        .or_else(|| non_blank(&case.triage.received_date));
    event.extend(date_element("availabilityTime", latest));
    event
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_worldwide_id_uses_occurrence_country() {
        let registry = VocabularyRegistry::new();
        let mut case = CaseRecord::default();
        assert_eq!(
            worldwide_case_id(&registry, &case, "C-1"),
            "XX-SKYVIGILANCE-C-1"
        );

        case.triage.country = Some("Germany".to_string());
        assert_eq!(
            worldwide_case_id(&registry, &case, "C-1"),
            "DE-SKYVIGILANCE-C-1"
        );

        case.worldwide_id = Some("FR-ACME-0042".to_string());
        assert_eq!(worldwide_case_id(&registry, &case, "C-1"), "FR-ACME-0042");
    }

    #[test]
    fn availability_falls_back_to_receipt_date() {
        let mut case = CaseRecord::default();
        case.triage.received_date = Some("2024-02-01".to_string());
        let event = investigation_event(&case, "C-1", "XX-SKYVIGILANCE-C-1");
        assert_eq!(
            event.find("availabilityTime").and_then(|t| t.attr("value")),
            Some("20240201")
        );
        assert!(event.find("text").is_none());
    }
}
