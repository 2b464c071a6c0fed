//! Patient characteristics (ICH E2B D.1 - D.5, D.9).

use e2b_model::{CaseRecord, Numeric, non_blank};
use e2b_vocab::oids::observation as code;
use e2b_vocab::{TableKind, VocabularyRegistry};
use e2b_xml::XmlElement;

use crate::format::numeric_quantity;
use crate::hl7::{coded, date_element, observation, quantity_value, relationship};

/// `primaryRole` with the patient and the demographic observations.
///
/// History, lab, drug and reaction subtrees are appended by the caller
/// after these children.
pub fn primary_role(registry: &VocabularyRegistry, case: &CaseRecord) -> XmlElement {
    let mut role = XmlElement::new("primaryRole").with_attr("classCode", "INVSBJ");
    role.push(person(registry, case));

    let patient = &case.patient;
    if let Some(age) = &patient.age {
        let unit = registry.lookup(
            TableKind::AgeUnit,
            non_blank(&patient.age_unit).unwrap_or("Years"),
        );
        role.extend(measurement(code::AGE, age, &unit));
    }
    if let Some(weight) = &patient.weight_kg {
        role.extend(measurement(code::BODY_WEIGHT, weight, "kg"));
    }
    if let Some(height) = &patient.height_cm {
        role.extend(measurement(code::HEIGHT, height, "cm"));
    }
    role
}

/// `player1`: initials, sex, birth date and death.
fn person(registry: &VocabularyRegistry, case: &CaseRecord) -> XmlElement {
    let patient = &case.patient;
    let mut person = XmlElement::new("player1")
        .with_attrs([("classCode", "PSN"), ("determinerCode", "INSTANCE")]);
    if let Some(initials) = case.patient_initials() {
        person.child("name").set_text(initials);
    }
    if let Some(sex) = non_blank(&patient.sex) {
        person.push(coded(
            "administrativeGenderCode",
            &registry.lookup(TableKind::Sex, sex),
            registry.code_system(TableKind::Sex),
        ));
    }
    person.extend(date_element("birthTime", patient.birth_date.as_deref()));
    if let Some(death) = death(registry, case) {
        person.push(XmlElement::new("deceasedInd").with_attr("value", "true"));
        person.extend(date_element("deceasedTime", death.date.as_deref()));
    }
    person
}

/// Death of the patient as recorded on the reactions.
struct Death {
    /// First death date in reaction order.
    date: Option<String>,
}

/// The patient died if any reaction was fatal or carries a death date.
fn death(registry: &VocabularyRegistry, case: &CaseRecord) -> Option<Death> {
    let fatal_outcome = registry
        .table(TableKind::Outcome)
        .get("Fatal")
        .unwrap_or("5");
    let mut died = false;
    for reaction in case.reactions().iter() {
        if let Some(date) = non_blank(&reaction.death_date) {
            return Some(Death {
                date: Some(date.to_string()),
            });
        }
        died |= non_blank(&reaction.outcome)
            .is_some_and(|outcome| registry.lookup(TableKind::Outcome, outcome) == fatal_outcome);
    }
    died.then_some(Death { date: None })
}

/// `subjectOf2/observation` with a `PQ` value; `None` for non-numeric input.
fn measurement(observation_code: &str, value: &Numeric, unit: &str) -> Option<XmlElement> {
    let value = numeric_quantity(value)?;
    let node = observation(observation_code).with_child(quantity_value(&value, unit));
    Some(relationship("subjectOf2", "SBJ", node))
}
