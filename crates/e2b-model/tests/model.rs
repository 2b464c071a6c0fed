//! Tests for e2b-model case record parsing.

use e2b_model::{CaseRecord, ModelError, Numeric};

#[test]
fn empty_object_yields_empty_sections() {
    let case = CaseRecord::from_json("{}").expect("parse empty case");
    assert!(case.case_id().is_none());
    assert!(case.products.is_empty());
    assert!(case.events.is_empty());
    assert!(case.patient.medical_history.is_empty());
    assert!(case.medical.causality.is_none());
    assert!(case.narrative().is_none());
}

#[test]
fn parses_camel_case_sections() {
    let json = r#"{
        "caseId": "SV-20240115-A1B2C3",
        "triage": {
            "reporterName": "Dr. John Smith",
            "patientInitials": "A.B.",
            "productName": "Acetaminophen 500mg",
            "eventDescription": "Severe rash after second dose",
            "country": "Germany"
        },
        "patient": {
            "sex": "Female",
            "age": "45",
            "ageUnit": "Years",
            "weightKg": 62.5
        },
        "products": [
            {
                "name": "Acetaminophen",
                "role": "Suspect",
                "dosage": { "value": 500, "unit": "mg", "route": "Oral", "startDate": "2024-01-10" }
            }
        ],
        "events": [
            { "term": "Rash", "meddraCode": "10037844", "onsetDate": "2024-01-12" }
        ],
        "medical": { "causality": "Probable", "naranjoScore": 6 }
    }"#;

    let case = CaseRecord::from_json(json).expect("parse case");
    assert_eq!(case.case_id(), Some("SV-20240115-A1B2C3"));
    assert_eq!(case.patient_initials(), Some("A.B."));
    assert_eq!(case.patient.age.as_ref().and_then(Numeric::value), Some(45.0));
    assert_eq!(case.patient.weight_kg.as_ref().and_then(Numeric::value), Some(62.5));
    assert_eq!(case.products[0].dosage.start_date.as_deref(), Some("2024-01-10"));
    assert_eq!(case.events[0].meddra_code.as_deref(), Some("10037844"));
    assert_eq!(case.medical.naranjo_score, Some(6));
    assert_eq!(case.narrative(), Some("Severe rash after second dose"));
    assert_eq!(case.occurrence_country(), Some("Germany"));
}

#[test]
fn triage_only_case_synthesises_drug_and_reaction() {
    let json = r#"{
        "caseId": "SV-1",
        "triage": { "productName": "Ibuprofen", "eventDescription": "Nausea" }
    }"#;
    let case = CaseRecord::from_json(json).expect("parse case");
    assert_eq!(case.drugs()[0].name.as_deref(), Some("Ibuprofen"));
    assert_eq!(case.reactions()[0].term.as_deref(), Some("Nausea"));
    assert!(case.reactions()[0].meddra_code.is_none());
}

#[test]
fn explicit_lists_are_not_replaced_by_triage() {
    let json = r#"{
        "triage": { "productName": "Ibuprofen" },
        "products": [ { "name": "Naproxen" }, { "name": "Omeprazole" } ]
    }"#;
    let case = CaseRecord::from_json(json).expect("parse case");
    let names: Vec<_> = case.drugs().iter().filter_map(|d| d.name.clone()).collect();
    assert_eq!(names, vec!["Naproxen", "Omeprazole"]);
}

#[test]
fn malformed_json_is_reported() {
    let error = CaseRecord::from_json("{ not json").expect_err("should fail");
    assert!(matches!(error, ModelError::Json(_)));
}

#[test]
fn reads_from_reader() {
    let bytes = br#"{ "caseId": "SV-2" }"#;
    let case = CaseRecord::from_reader(&bytes[..]).expect("parse from reader");
    assert_eq!(case.case_id(), Some("SV-2"));
}

#[test]
fn unset_form_fields_do_not_fail_the_record() {
    let json = r#"{
        "caseId": "PV-1",
        "patient": { "medicalHistory": [ { "term": "Asthma", "continuing": "" } ] },
        "medical": { "causality": "Probable", "naranjoScore": "" }
    }"#;
    let case = CaseRecord::from_json(json).expect("blank values are tolerated");
    assert_eq!(case.medical.naranjo_score, None);
    assert_eq!(case.patient.medical_history[0].continuing, None);
    assert_eq!(case.medical.causality.as_deref(), Some("Probable"));
}

#[test]
fn text_answers_are_read() {
    let json = r#"{
        "caseId": "PV-1",
        "patient": { "medicalHistory": [ { "term": "Asthma", "continuing": "yes" } ] },
        "medical": { "naranjoScore": "6" }
    }"#;
    let case = CaseRecord::from_json(json).expect("text values are read");
    assert_eq!(case.medical.naranjo_score, Some(6));
    assert_eq!(case.patient.medical_history[0].continuing, Some(true));
}
