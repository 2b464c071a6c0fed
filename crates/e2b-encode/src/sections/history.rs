//! Relevant medical history (ICH E2B D.7.1).

use e2b_model::{MedicalHistoryEntry, non_blank};
use e2b_vocab::oids::{ORGANIZER_CATEGORY_OID, observation as code, organizer};
use e2b_xml::XmlElement;
use tracing::debug;

use crate::hl7::{comment, flag, interval, meddra_term, relationship};

/// `subjectOf2/organizer` holding one observation per history entry, or
/// `None` when there is no history.
///
/// Entries with neither a term nor a code are skipped.
pub fn medical_history(entries: &[MedicalHistoryEntry]) -> Option<XmlElement> {
    let components: Vec<_> = entries
        .iter()
        .filter(|entry| non_blank(&entry.term).is_some() || non_blank(&entry.meddra_code).is_some())
        .map(|entry| relationship("component", "COMP", history_observation(entry)))
        .collect();
    debug!(
        entries = components.len(),
        skipped = entries.len() - components.len(),
        "encoded medical history"
    );
    if components.is_empty() {
        return None;
    }
    let mut organizer = category_organizer(organizer::MEDICAL_HISTORY);
    organizer.extend(components);
    Some(relationship("subjectOf2", "SBJ", organizer))
}

/// `<organizer classCode="CATEGORY" moodCode="EVN">` with a category code.
pub fn category_organizer(category: &str) -> XmlElement {
    XmlElement::new("organizer")
        .with_attrs([("classCode", "CATEGORY"), ("moodCode", "EVN")])
        .with_child(crate::hl7::code(category, ORGANIZER_CATEGORY_OID))
}

fn history_observation(entry: &MedicalHistoryEntry) -> XmlElement {
    let mut node = XmlElement::new("observation")
        .with_attrs([("classCode", "OBS"), ("moodCode", "EVN")]);
    node.push(meddra_term(
        "code",
        non_blank(&entry.meddra_code),
        None,
        non_blank(&entry.term),
    ));
    node.extend(interval(
        entry.start_date.as_deref(),
        entry.end_date.as_deref(),
    ));
    if let Some(text) = non_blank(&entry.comments) {
        node.push(comment("outboundRelationship2", text));
    }
    if let Some(continuing) = entry.continuing {
        node.push(flag("inboundRelationship", code::CONTINUING, continuing));
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_is_omitted() {
        assert!(medical_history(&[]).is_none());
    }

    #[test]
    fn entries_without_term_or_code_are_skipped() {
        let blank = MedicalHistoryEntry {
            start_date: Some("2020-01-01".to_string()),
            ..MedicalHistoryEntry::default()
        };
        assert!(medical_history(&[blank.clone()]).is_none());

        let coded = MedicalHistoryEntry {
            meddra_code: Some("10003553".to_string()),
            ..MedicalHistoryEntry::default()
        };
        let section = medical_history(&[blank, coded]).expect("history");
        assert_eq!(section.descendants("observation").len(), 1);
    }

    #[test]
    fn entry_keeps_term_dates_and_continuing_flag() {
        let entry = MedicalHistoryEntry {
            term: Some("Hypertension".to_string()),
            meddra_code: Some("10020772".to_string()),
            start_date: Some("2015-06".to_string()),
            continuing: Some(true),
            ..MedicalHistoryEntry::default()
        };
        let section = medical_history(&[entry]).expect("history");
        let organizer = section.find("organizer").expect("organizer");
        assert_eq!(
            organizer.find("code").and_then(|c| c.attr("code")),
            Some(organizer::MEDICAL_HISTORY)
        );

        let observation = section.descendants("observation")[0];
        assert_eq!(
            observation.find("code").and_then(|c| c.attr("code")),
            Some("10020772")
        );
        assert_eq!(
            observation
                .find("effectiveTime")
                .and_then(|t| t.find("low"))
                .and_then(|low| low.attr("value")),
            Some("201506")
        );
        let continuing = observation.find("inboundRelationship").expect("flag");
        assert_eq!(
            continuing.descendants("value")[0].attr("value"),
            Some("true")
        );
        assert!(observation.find("outboundRelationship2").is_none());
    }
}
