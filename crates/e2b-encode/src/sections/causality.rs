//! Drug-reaction assessments (ICH E2B G.k.1, G.k.9.i.2).
//!
//! Built after the drug and reaction sections, from the tokens the linker
//! issued for them. Assessments reference drugs and reactions by token
//! only; nothing here looks back into the tree.

use e2b_model::{DrugEntry, MedicalReview, non_blank};
use e2b_vocab::oids::{OBSERVATION_CODE_OID, observation as code};
use e2b_vocab::{TableKind, VocabularyRegistry};
use e2b_xml::XmlElement;
use tracing::debug;

use crate::hl7::{coded_value, relationship, text_value, token_id};
use crate::linker::{IdentifierLinker, TokenSource};

/// Method recorded when the review does not name one.
pub const DEFAULT_METHOD: &str = "WHO-UMC";

/// Method of the supplementary score-based assessment.
pub const NARANJO_METHOD: &str = "Naranjo";

/// Naranjo probability category for a total score.
pub fn naranjo_category(score: i32) -> &'static str {
    match score {
        9.. => "Definite",
        5..=8 => "Probable",
        1..=4 => "Possible",
        _ => "Doubtful",
    }
}

/// Every causality `component`, in order: one drug-role assessment per
/// drug, then the primary assessment, then the score-based one.
pub fn assessments<S: TokenSource>(
    registry: &VocabularyRegistry,
    drugs: &[DrugEntry],
    review: &MedicalReview,
    linker: &IdentifierLinker<S>,
) -> Vec<XmlElement> {
    let mut components = Vec::new();
    for linked in linker.drugs() {
        let role = drugs
            .get(linked.entry_index)
            .and_then(|drug| non_blank(&drug.role))
            .unwrap_or("Suspect");
        let mut node = assessment(code::DRUG_ROLE);
        node.push(coded_value(
            &registry.lookup(TableKind::DrugRole, role),
            registry.code_system(TableKind::DrugRole),
        ));
        node.push(product_reference(&linked.token));
        components.push(component(node));
    }

    if let Some(conclusion) = non_blank(&review.causality) {
        let method = non_blank(&review.causality_method).unwrap_or(DEFAULT_METHOD);
        components.push(component(conclusion_node(
            conclusion,
            method,
            non_blank(&review.assessor),
            linker,
        )));
    }

    if let Some(score) = review.naranjo_score {
        let result = format!("{} (score {score})", naranjo_category(score));
        components.push(component(conclusion_node(
            &result,
            NARANJO_METHOD,
            non_blank(&review.assessor),
            linker,
        )));
    }

    debug!(
        roles = linker.drugs().len(),
        assessments = components.len() - linker.drugs().len(),
        "encoded causality"
    );
    components
}

/// Number of assessments that state a drug-reaction relatedness, as
/// opposed to a drug role.
pub fn conclusion_count(review: &MedicalReview) -> usize {
    usize::from(non_blank(&review.causality).is_some())
        + usize::from(review.naranjo_score.is_some())
}

fn assessment(observation_code: &str) -> XmlElement {
    XmlElement::new("causalityAssessment")
        .with_attrs([("classCode", "OBS"), ("moodCode", "EVN")])
        .with_child(crate::hl7::code(observation_code, OBSERVATION_CODE_OID))
}

/// A relatedness conclusion pointing at the first reaction and first drug.
fn conclusion_node<S: TokenSource>(
    result: &str,
    method: &str,
    assessor: Option<&str>,
    linker: &IdentifierLinker<S>,
) -> XmlElement {
    let mut node = assessment(code::CAUSALITY);
    node.push(text_value(result));
    node.child("methodCode").child("originalText").set_text(method);
    if let Some(assessor) = assessor {
        let entity = XmlElement::new("assignedEntity")
            .with_attr("classCode", "ASSIGNED")
            .with_child(XmlElement::new("code").with_child(
                XmlElement::new("originalText").with_text(assessor),
            ));
        node.push(relationship("author", "AUT", entity));
    }
    if let Some(reaction) = linker.first_reaction() {
        let reference = XmlElement::new("adverseEffectReference")
            .with_attrs([("classCode", "CASE"), ("moodCode", "EVN")])
            .with_child(token_id(reaction));
        node.push(relationship("subject1", "SUBJ", reference));
    }
    if let Some(drug) = linker.first_drug() {
        node.push(product_reference(drug));
    }
    node
}

fn product_reference(token: &str) -> XmlElement {
    let reference = XmlElement::new("productUseReference")
        .with_attrs([("classCode", "SBADM"), ("moodCode", "EVN")])
        .with_child(token_id(token));
    relationship("subject2", "SUBJ", reference)
}

fn component(assessment: XmlElement) -> XmlElement {
    relationship("component", "COMP", assessment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linker::SequentialTokens;

    fn linker(drugs: usize, reactions: usize) -> IdentifierLinker<SequentialTokens> {
        let mut linker = IdentifierLinker::new(SequentialTokens::new("t"));
        for index in 0..drugs {
            linker.issue_drug(index);
        }
        for index in 0..reactions {
            linker.issue_reaction(index);
        }
        linker
    }

    fn references(node: &XmlElement, name: &str) -> Vec<String> {
        node.descendants(name)
            .into_iter()
            .filter_map(|reference| reference.find("id").and_then(|id| id.attr("root")))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn naranjo_bands() {
        assert_eq!(naranjo_category(12), "Definite");
        assert_eq!(naranjo_category(9), "Definite");
        assert_eq!(naranjo_category(5), "Probable");
        assert_eq!(naranjo_category(1), "Possible");
        assert_eq!(naranjo_category(0), "Doubtful");
        assert_eq!(naranjo_category(-3), "Doubtful");
    }

    #[test]
    fn one_role_node_per_drug() {
        let drugs = vec![
            DrugEntry::suspect("A"),
            DrugEntry {
                role: Some("Concomitant".to_string()),
                ..DrugEntry::default()
            },
            DrugEntry::default(),
        ];
        let linker = linker(3, 1);
        let nodes = assessments(
            &VocabularyRegistry::new(),
            &drugs,
            &MedicalReview::default(),
            &linker,
        );
        assert_eq!(nodes.len(), 3);
        let roles: Vec<_> = nodes
            .iter()
            .filter_map(|node| {
                node.descendants("value")
                    .first()
                    .copied()
                    .and_then(|value| value.attr("code"))
            })
            .collect();
        assert_eq!(roles, vec!["1", "2", "1"]);
        assert_eq!(references(&nodes[1], "productUseReference"), vec!["t-2"]);
    }

    #[test]
    fn conclusions_reference_first_drug_and_reaction() {
        let review = MedicalReview {
            causality: Some("Probable".to_string()),
            assessor: Some("Dr. Osei".to_string()),
            naranjo_score: Some(6),
            ..MedicalReview::default()
        };
        let linker = linker(2, 2);
        let nodes = assessments(
            &VocabularyRegistry::new(),
            &[DrugEntry::default(), DrugEntry::default()],
            &review,
            &linker,
        );
        assert_eq!(nodes.len(), 4);
        assert_eq!(conclusion_count(&review), 2);

        let primary = &nodes[2];
        assert_eq!(primary.descendants("value")[0].text(), Some("Probable"));
        assert_eq!(
            primary.descendants("methodCode")[0]
                .find("originalText")
                .and_then(XmlElement::text),
            Some(DEFAULT_METHOD)
        );
        assert_eq!(references(primary, "adverseEffectReference"), vec!["t-3"]);
        assert_eq!(references(primary, "productUseReference"), vec!["t-1"]);

        let secondary = &nodes[3];
        assert_eq!(
            secondary.descendants("value")[0].text(),
            Some("Probable (score 6)")
        );
    }

    #[test]
    fn nothing_to_assess() {
        let linker = linker(0, 1);
        let nodes = assessments(
            &VocabularyRegistry::new(),
            &[],
            &MedicalReview::default(),
            &linker,
        );
        assert!(nodes.is_empty());
    }
}
