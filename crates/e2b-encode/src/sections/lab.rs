//! Tests and procedures relevant to the investigation (ICH E2B F.r).

use e2b_model::{LabResult, Numeric, non_blank};
use e2b_vocab::oids::organizer;
use e2b_xml::{ValueType, XmlElement};
use tracing::debug;

use crate::format::{format_quantity, numeric_quantity};
use crate::hl7::{comment, meddra_term, quantity_value, relationship, text_value, typed_date};
use crate::sections::history::category_organizer;

/// HL7 ObservationInterpretation code system.
const INTERPRETATION_OID: &str = "2.16.840.1.113883.5.83";

/// Unit for results entered without one (UCUM unity).
const UNITLESS: &str = "1";

/// `subjectOf2/organizer` with one observation per lab result, or `None`
/// when there are no results.
///
/// Results naming neither a test nor a code are skipped.
pub fn lab_results(results: &[LabResult]) -> Option<XmlElement> {
    let components: Vec<_> = results
        .iter()
        .filter(|result| {
            non_blank(&result.test_name).is_some() || non_blank(&result.meddra_code).is_some()
        })
        .map(|result| relationship("component", "COMP", lab_observation(result)))
        .collect();
    debug!(
        results = components.len(),
        skipped = results.len() - components.len(),
        "encoded lab results"
    );
    if components.is_empty() {
        return None;
    }
    let mut organizer = category_organizer(organizer::LAB_TESTS);
    organizer.extend(components);
    Some(relationship("subjectOf2", "SBJ", organizer))
}

fn lab_observation(result: &LabResult) -> XmlElement {
    let unit = non_blank(&result.unit).unwrap_or(UNITLESS);
    let mut node = XmlElement::new("observation")
        .with_attrs([("classCode", "OBS"), ("moodCode", "EVN")]);
    node.push(meddra_term(
        "code",
        non_blank(&result.meddra_code),
        None,
        non_blank(&result.test_name),
    ));
    node.extend(typed_date("effectiveTime", ValueType::Ts, result.date.as_deref()));
    node.extend(result.value.as_ref().and_then(|value| result_value(value, unit)));
    for (bound, interpretation) in [(&result.normal_low, "L"), (&result.normal_high, "H")] {
        if let Some(limit) = bound.as_ref().and_then(numeric_quantity) {
            node.push(reference_range(&limit, unit, interpretation));
        }
    }
    if let Some(text) = non_blank(&result.comments) {
        node.push(comment("outboundRelationship2", text));
    }
    node
}

/// `PQ` for numeric results; free text such as "negative" is kept as `ST`.
fn result_value(value: &Numeric, unit: &str) -> Option<XmlElement> {
    match value.value() {
        Some(number) => Some(quantity_value(&format_quantity(number), unit)),
        None => value.raw_text().map(|text| text_value(&text)),
    }
}

fn reference_range(limit: &str, unit: &str, interpretation: &str) -> XmlElement {
    let range = XmlElement::new("observationRange")
        .with_attrs([("classCode", "OBS"), ("moodCode", "EVN.CRT")])
        .with_child(quantity_value(limit, unit))
        .with_child(XmlElement::new("interpretationCode").with_attrs([
            ("code", interpretation),
            ("codeSystem", INTERPRETATION_OID),
        ]));
    relationship("referenceRange", "REFV", range)
}
