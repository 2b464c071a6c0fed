//! Drug information (ICH E2B G.k).
//!
//! Each drug becomes one `substanceAdministration` under the drug
//! organizer, in input order, and receives its linker token as `id`.

use e2b_model::{Dosage, DrugEntry, non_blank};
use e2b_vocab::oids::{AUTHORIZATION_NUMBER_OID, observation as code, organizer};
use e2b_vocab::{TableKind, VocabularyRegistry};
use e2b_xml::{ValueType, XmlElement};
use tracing::debug;

use crate::format::numeric_quantity;
use crate::hl7::{
    coded, coded_value, country_code, id, interval, meddra_value, observation, relationship,
    token_id,
};
use crate::linker::{IdentifierLinker, TokenSource};
use crate::sections::history::category_organizer;

/// Local code for the dechallenge observation; it has no ICH code.
pub const DECHALLENGE_CODE: &str = "DECHAL";

/// `subjectOf2/organizer` with every drug, or `None` when there are none.
///
/// Tokens are issued in input order, so the n-th drug token belongs to
/// the n-th entry of `drugs`.
pub fn drug_information<S: TokenSource>(
    registry: &VocabularyRegistry,
    drugs: &[DrugEntry],
    linker: &mut IdentifierLinker<S>,
) -> Option<XmlElement> {
    if drugs.is_empty() {
        return None;
    }
    let mut organizer = category_organizer(organizer::DRUG_INFORMATION);
    for (index, drug) in drugs.iter().enumerate() {
        let token = linker.issue_drug(index);
        organizer.push(relationship(
            "component",
            "COMP",
            substance_administration(registry, drug, &token),
        ));
    }
    debug!(drugs = drugs.len(), "encoded drug information");
    Some(relationship("subjectOf2", "SBJ", organizer))
}

fn substance_administration(
    registry: &VocabularyRegistry,
    drug: &DrugEntry,
    token: &str,
) -> XmlElement {
    let mut node = XmlElement::new("substanceAdministration")
        .with_attrs([("classCode", "SBADM"), ("moodCode", "EVN")]);
    node.push(token_id(token));
    node.push(consumable(registry, drug));
    node.extend(dosage(registry, &drug.dosage));
    if let Some(label) = non_blank(&drug.indication) {
        node.push(indication(label, non_blank(&drug.indication_code)));
    }
    if let Some(label) = non_blank(&drug.action_taken) {
        let action = XmlElement::new("act")
            .with_attrs([("classCode", "ACT"), ("moodCode", "EVN")])
            .with_child(coded(
                "code",
                &registry.lookup(TableKind::ActionTaken, label),
                registry.code_system(TableKind::ActionTaken),
            ));
        node.push(relationship("inboundRelationship", "CAUS", action));
    }
    if let Some(label) = non_blank(&drug.dechallenge) {
        let mut result = XmlElement::new("observation")
            .with_attrs([("classCode", "OBS"), ("moodCode", "EVN")]);
        result.push(XmlElement::new("code").with_attr("code", DECHALLENGE_CODE));
        result.push(challenge_value(registry, TableKind::Dechallenge, label));
        node.push(relationship("outboundRelationship2", "PERT", result));
    }
    if let Some(label) = non_blank(&drug.rechallenge) {
        let result = observation(code::RECURRENCE)
            .with_child(challenge_value(registry, TableKind::Rechallenge, label));
        node.push(relationship("outboundRelationship2", "PERT", result));
    }
    node
}

fn challenge_value(registry: &VocabularyRegistry, kind: TableKind, label: &str) -> XmlElement {
    coded_value(&registry.lookup(kind, label), registry.code_system(kind))
}

/// `consumable/instanceOfKind` with the lot and the product.
fn consumable(registry: &VocabularyRegistry, drug: &DrugEntry) -> XmlElement {
    let mut kind = XmlElement::new("instanceOfKind").with_attr("classCode", "INST");
    if let Some(lot) = non_blank(&drug.batch_number) {
        kind.push(
            XmlElement::new("productInstanceInstance")
                .with_attrs([("classCode", "MMAT"), ("determinerCode", "INSTANCE")])
                .with_child(XmlElement::new("lotNumberText").with_text(lot)),
        );
    }

    let mut product = XmlElement::new("kindOfProduct")
        .with_attrs([("classCode", "MMAT"), ("determinerCode", "KIND")]);
    if let Some(name) = non_blank(&drug.name) {
        product.child("name").set_text(name);
    }
    if let Some(form) = non_blank(&drug.formulation) {
        product.child("formCode").child("originalText").set_text(form);
    }
    if let Some(number) = non_blank(&drug.authorization_number) {
        let country = non_blank(&drug.authorization_country)
            .map(|label| registry.lookup(TableKind::Country, label));
        product.push(authorization(number, country.as_deref()));
    }
    if let Some(substance) = non_blank(&drug.generic_name) {
        let ingredient = XmlElement::new("ingredientSubstance")
            .with_attrs([("classCode", "MMAT"), ("determinerCode", "KIND")])
            .with_child(XmlElement::new("name").with_text(substance));
        product.push(
            XmlElement::new("ingredient")
                .with_attr("classCode", "ACTI")
                .with_child(ingredient),
        );
    }
    kind.push(product);

    XmlElement::new("consumable")
        .with_attr("typeCode", "CSM")
        .with_child(kind)
}

fn authorization(number: &str, country: Option<&str>) -> XmlElement {
    let mut approval = XmlElement::new("approval")
        .with_attrs([("classCode", "CNTRCT"), ("moodCode", "EVN")]);
    approval.push(id(AUTHORIZATION_NUMBER_OID, number));
    if let Some(country) = country {
        let territory = XmlElement::new("territory")
            .with_attr("classCode", "NAT")
            .with_child(country_code(country));
        let authority = XmlElement::new("territorialAuthority")
            .with_attr("classCode", "TERR")
            .with_child(territory);
        approval.push(relationship("author", "AUT", authority));
    }
    let subject = relationship("subjectOf", "SBJ", approval);
    XmlElement::new("asManufacturedProduct")
        .with_attr("classCode", "MANU")
        .with_child(subject)
}

/// Dosage regimen (G.k.4.r), or `None` when nothing was recorded.
fn dosage(registry: &VocabularyRegistry, dosage: &Dosage) -> Option<XmlElement> {
    let mut regimen = XmlElement::new("substanceAdministration")
        .with_attrs([("classCode", "SBADM"), ("moodCode", "EVN")]);
    regimen.extend(schedule(
        registry,
        non_blank(&dosage.frequency),
        dosage.start_date.as_deref(),
        dosage.stop_date.as_deref(),
    ));
    if let Some(route) = non_blank(&dosage.route) {
        regimen.push(coded(
            "routeCode",
            &registry.lookup(TableKind::Route, route),
            registry.code_system(TableKind::Route),
        ));
    }
    if let Some(value) = dosage.value.as_ref().and_then(numeric_quantity) {
        let unit = non_blank(&dosage.unit).unwrap_or("1");
        regimen.push(
            XmlElement::new("doseQuantity").with_attrs([("value", value.as_str()), ("unit", unit)]),
        );
    }
    if regimen.children().is_empty() {
        return None;
    }
    Some(relationship("outboundRelationship2", "COMP", regimen))
}

/// Treatment duration and dosing interval.
///
/// A mapped frequency yields `SXPR_TS` combining the period with the
/// duration; otherwise a plain `IVL_TS` duration, if any.
fn schedule(
    registry: &VocabularyRegistry,
    frequency: Option<&str>,
    start: Option<&str>,
    stop: Option<&str>,
) -> Option<XmlElement> {
    let duration = interval(start, stop);
    let Some(period) = frequency.and_then(|label| registry.frequency(label)) else {
        return duration;
    };
    let mut time = XmlElement::typed("effectiveTime", ValueType::SxprTs);
    time.push(
        XmlElement::typed("comp", ValueType::PivlTs)
            .with_child(XmlElement::new("period").with_attrs([
                ("value", period.value),
                ("unit", period.unit),
            ])),
    );
    if let Some(duration) = duration {
        let mut bounded = XmlElement::typed("comp", ValueType::IvlTs).with_attr("operator", "A");
        bounded.extend(duration.children().iter().cloned());
        time.push(bounded);
    }
    Some(time)
}

/// Indication (G.k.7.r) as a reason observation.
fn indication(label: &str, meddra_code: Option<&str>) -> XmlElement {
    let node = observation(code::INDICATION).with_child(meddra_value(meddra_code, None, Some(label)));
    relationship("inboundRelationship", "RSON", node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linker::SequentialTokens;
    use e2b_model::Numeric;

    fn encode(drugs: &[DrugEntry]) -> (XmlElement, IdentifierLinker<SequentialTokens>) {
        let registry = VocabularyRegistry::new();
        let mut linker = IdentifierLinker::new(SequentialTokens::new("drug"));
        let section = drug_information(&registry, drugs, &mut linker).expect("drug section");
        (section, linker)
    }

    #[test]
    fn one_token_per_drug_in_order() {
        let drugs = vec![DrugEntry::suspect("Aspirin"), DrugEntry::suspect("Warfarin")];
        let (section, linker) = encode(&drugs);
        let administrations: Vec<_> = section
            .descendants("component")
            .into_iter()
            .filter_map(|c| c.find("substanceAdministration"))
            .collect();
        assert_eq!(administrations.len(), 2);
        assert_eq!(
            administrations[1].find("id").and_then(|i| i.attr("root")),
            Some("drug-2")
        );
        assert_eq!(linker.drugs()[1].entry_index, 1);
    }

    #[test]
    fn full_drug_entry() {
        let drug = DrugEntry {
            name: Some("Tylenol".to_string()),
            generic_name: Some("Paracetamol".to_string()),
            authorization_number: Some("PL 12345/0001".to_string()),
            authorization_country: Some("United Kingdom".to_string()),
            batch_number: Some("LOT-77".to_string()),
            indication: Some("Headache".to_string()),
            action_taken: Some("Drug withdrawn".to_string()),
            dechallenge: Some("Positive".to_string()),
            rechallenge: Some("Not done".to_string()),
            dosage: Dosage {
                value: Some(Numeric::from(500.0)),
                unit: Some("mg".to_string()),
                route: Some("Oral".to_string()),
                frequency: Some("Twice daily".to_string()),
                start_date: Some("2024-01-01".to_string()),
                stop_date: Some("2024-01-05".to_string()),
            },
            ..DrugEntry::default()
        };
        let (section, _) = encode(&[drug]);

        assert_eq!(
            section.descendants("lotNumberText")[0].text(),
            Some("LOT-77")
        );
        assert_eq!(
            section.descendants("routeCode")[0].attr("code"),
            Some("048")
        );
        let dose = section.descendants("doseQuantity")[0];
        assert_eq!(dose.attr("value"), Some("500"));
        assert_eq!(dose.attr("unit"), Some("mg"));

        let period = section.descendants("period")[0];
        assert_eq!(period.attr("value"), Some("12"));
        assert_eq!(period.attr("unit"), Some("h"));

        let action = section.descendants("act")[0];
        assert_eq!(action.find("code").and_then(|c| c.attr("code")), Some("1"));

        let challenge_codes: Vec<_> = section
            .descendants("outboundRelationship2")
            .into_iter()
            .filter_map(|rel| rel.find("observation"))
            .filter_map(|obs| obs.find("value"))
            .filter_map(|value| value.attr("code"))
            .collect();
        assert_eq!(challenge_codes, vec!["1", "4"]);
        assert_eq!(
            section.descendants("territory")[0]
                .find("code")
                .and_then(|c| c.attr("code")),
            Some("GB")
        );
    }

    #[test]
    fn empty_dosage_is_omitted() {
        let (section, _) = encode(&[DrugEntry::suspect("Aspirin")]);
        assert!(section.descendants("outboundRelationship2").is_empty());
    }
}
