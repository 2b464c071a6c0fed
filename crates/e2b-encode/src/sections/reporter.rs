//! Primary source of information (ICH E2B C.2.r).

use e2b_model::{CaseRecord, Reporter, non_blank};
use e2b_vocab::oids::RELATED_INVESTIGATION_OID;
use e2b_vocab::{TableKind, VocabularyRegistry};
use e2b_xml::XmlElement;

use crate::hl7::{coded, country_code, relationship};

/// Source report relationship code for the primary source.
const PRIMARY_SOURCE: &str = "2";

/// `outboundRelationship` for the primary source, or `None` when the case
/// names no reporter at all.
pub fn primary_source(registry: &VocabularyRegistry, case: &CaseRecord) -> Option<XmlElement> {
    let reporter = &case.general.reporter;
    let mut entity = XmlElement::new("assignedEntity").with_attr("classCode", "ASSIGNED");

    let address: Vec<_> = [
        ("streetAddressLine", &reporter.street),
        ("city", &reporter.city),
        ("postalCode", &reporter.postcode),
    ]
    .into_iter()
    .filter_map(|(part, value)| {
        non_blank(value).map(|text| XmlElement::new(part).with_text(text))
    })
    .collect();
    if !address.is_empty() {
        entity.child("addr").extend(address);
    }
    if let Some(phone) = non_blank(&reporter.telephone) {
        entity.push(XmlElement::new("telecom").with_attr("value", format!("tel:{phone}")));
    }
    if let Some(email) = non_blank(&reporter.email) {
        entity.push(XmlElement::new("telecom").with_attr("value", format!("mailto:{email}")));
    }

    let mut person = XmlElement::new("assignedPerson")
        .with_attrs([("classCode", "PSN"), ("determinerCode", "INSTANCE")]);
    person.extend(name(reporter, non_blank(&case.triage.reporter_name)));
    if let Some(label) = non_blank(&reporter.qualification) {
        let qualification = XmlElement::new("asQualifiedEntity")
            .with_attr("classCode", "QUAL")
            .with_child(coded(
                "code",
                &registry.lookup(TableKind::Qualification, label),
                registry.code_system(TableKind::Qualification),
            ));
        person.push(qualification);
    }
    if let Some(label) = non_blank(&reporter.country) {
        let place = XmlElement::new("location")
            .with_attrs([("classCode", "COUNTRY"), ("determinerCode", "INSTANCE")])
            .with_child(country_code(&registry.lookup(TableKind::Country, label)));
        person.push(
            XmlElement::new("asLocatedEntity")
                .with_attr("classCode", "LOCE")
                .with_child(place),
        );
    }
    if !person.children().is_empty() {
        entity.push(person);
    }
    entity.extend(organization(reporter));

    if entity.children().is_empty() {
        return None;
    }

    let author = relationship("author", "AUT", entity);
    let report = XmlElement::new("controlActEvent")
        .with_attrs([("classCode", "CACT"), ("moodCode", "EVN")])
        .with_child(author);
    let investigation = XmlElement::new("relatedInvestigation")
        .with_attrs([("classCode", "INVSTG"), ("moodCode", "EVN")])
        .with_child(coded("code", PRIMARY_SOURCE, RELATED_INVESTIGATION_OID))
        .with_child(relationship("subjectOf2", "SUBJ", report));
    Some(relationship("outboundRelationship", "SPRT", investigation))
}

/// Structured name, else the free-text name captured at triage.
fn name(reporter: &Reporter, triage_name: Option<&str>) -> Option<XmlElement> {
    let given = non_blank(&reporter.given_name);
    let family = non_blank(&reporter.family_name);
    let mut name = XmlElement::new("name");
    match (given, family) {
        (None, None) => {
            let full_name = triage_name?;
            name.child("family").set_text(full_name);
        }
        _ => {
            if let Some(given) = given {
                name.child("given").set_text(given);
            }
            if let Some(family) = family {
                name.child("family").set_text(family);
            }
        }
    }
    Some(name)
}

/// Department within its organization, as nested `representedOrganization`s.
fn organization(reporter: &Reporter) -> Option<XmlElement> {
    let organization = non_blank(&reporter.organization);
    let department = non_blank(&reporter.department);
    if organization.is_none() && department.is_none() {
        return None;
    }
    let mut outer = represented(department);
    if let Some(organization) = organization {
        let parent = XmlElement::new("assignedEntity")
            .with_attr("classCode", "ASSIGNED")
            .with_child(represented(Some(organization)));
        outer.push(parent);
    }
    Some(outer)
}

fn represented(name: Option<&str>) -> XmlElement {
    let mut organization = XmlElement::new("representedOrganization")
        .with_attrs([("classCode", "ORG"), ("determinerCode", "INSTANCE")]);
    if let Some(name) = name {
        organization.child("name").set_text(name);
    }
    organization
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_reporter_no_section() {
        let registry = VocabularyRegistry::new();
        assert!(primary_source(&registry, &CaseRecord::default()).is_none());
    }

    #[test]
    fn triage_name_is_used_without_structured_name() {
        let registry = VocabularyRegistry::new();
        let mut case = CaseRecord::default();
        case.triage.reporter_name = Some("Amara Osei".to_string());
        let section = primary_source(&registry, &case).expect("reporter");
        assert_eq!(
            section.descendants("family")[0].text(),
            Some("Amara Osei")
        );
        assert!(section.descendants("given").is_empty());
    }

    #[test]
    fn full_reporter() {
        let registry = VocabularyRegistry::new();
        let mut case = CaseRecord::default();
        case.general.reporter = Reporter {
            given_name: Some("Lena".to_string()),
            family_name: Some("Berg".to_string()),
            organization: Some("City Hospital".to_string()),
            department: Some("Cardiology".to_string()),
            city: Some("Oslo".to_string()),
            telephone: Some("+47 22 00 00 00".to_string()),
            country: Some("Norway".to_string()),
            email: Some("lena.berg@example.org".to_string()),
            qualification: Some("Physician".to_string()),
            ..Reporter::default()
        };
        let section = primary_source(&registry, &case).expect("reporter");
        assert_eq!(section.attr("typeCode"), Some("SPRT"));
        assert_eq!(section.descendants("city")[0].text(), Some("Oslo"));
        let telecoms: Vec<_> = section
            .descendants("telecom")
            .into_iter()
            .filter_map(|t| t.attr("value"))
            .collect();
        assert_eq!(
            telecoms,
            vec!["tel:+47 22 00 00 00", "mailto:lena.berg@example.org"]
        );
        assert_eq!(
            section.descendants("asQualifiedEntity")[0]
                .find("code")
                .and_then(|c| c.attr("code")),
            Some("1")
        );
        let names: Vec<_> = section
            .descendants("representedOrganization")
            .into_iter()
            .filter_map(|org| org.find("name").and_then(XmlElement::text))
            .collect();
        assert_eq!(names, vec!["Cardiology", "City Hospital"]);
    }
}
