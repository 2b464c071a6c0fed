//! Reactions and events (ICH E2B E.i).

use e2b_model::{CaseRecord, ReactionEntry, any_label, non_blank};
use e2b_vocab::oids::{UNCODED_REACTION_CODE, observation as code};
use e2b_vocab::{TableKind, VocabularyRegistry};
use e2b_xml::XmlElement;
use tracing::debug;

use crate::hl7::{
    coded_value, country_code, flag, interval, meddra_value, observation, relationship, token_id,
};
use crate::linker::{IdentifierLinker, TokenSource};

/// One `subjectOf2/observation` per reaction, in input order.
pub fn reactions<S: TokenSource>(
    registry: &VocabularyRegistry,
    case: &CaseRecord,
    linker: &mut IdentifierLinker<S>,
) -> Vec<XmlElement> {
    let entries = case.reactions();
    let nodes: Vec<_> = entries
        .iter()
        .enumerate()
        .map(|(index, reaction)| {
            let token = linker.issue_reaction(index);
            let node = reaction_observation(registry, case, reaction, &token);
            relationship("subjectOf2", "SBJ", node)
        })
        .collect();
    debug!(reactions = nodes.len(), "encoded reactions");
    nodes
}

fn reaction_observation(
    registry: &VocabularyRegistry,
    case: &CaseRecord,
    reaction: &ReactionEntry,
    token: &str,
) -> XmlElement {
    let mut node = observation(code::REACTION);
    node.push(token_id(token));
    node.extend(interval(
        reaction.onset_date.as_deref(),
        reaction.stop_date.as_deref(),
    ));
    node.push(reaction_term(reaction));

    let country = non_blank(&reaction.country).or_else(|| case.occurrence_country());
    if let Some(label) = country {
        node.push(location(&registry.lookup(TableKind::Country, label)));
    }

    for criterion in seriousness_codes(registry, criteria(reaction, case)) {
        node.push(flag("outboundRelationship2", &criterion, true));
    }

    if let Some(label) = non_blank(&reaction.outcome) {
        let outcome = observation(code::OUTCOME).with_child(coded_value(
            &registry.lookup(TableKind::Outcome, label),
            registry.code_system(TableKind::Outcome),
        ));
        node.push(relationship("outboundRelationship2", "PERT", outcome));
    }
    node
}

/// The coded reaction term.
///
/// An uncoded reaction gets the placeholder code so the value stays
/// complete; the reporter's wording is kept as `originalText` either way.
fn reaction_term(reaction: &ReactionEntry) -> XmlElement {
    let coded = non_blank(&reaction.meddra_code);
    if coded.is_none() {
        debug!("reaction has no MedDRA code, using placeholder");
    }
    meddra_value(
        Some(coded.unwrap_or(UNCODED_REACTION_CODE)),
        non_blank(&reaction.meddra_version),
        non_blank(&reaction.term),
    )
}

fn location(country: &str) -> XmlElement {
    let place = XmlElement::new("locatedPlace")
        .with_attrs([("classCode", "COUNTRY"), ("determinerCode", "INSTANCE")])
        .with_child(country_code(country));
    let entity = XmlElement::new("locatedEntity")
        .with_attr("classCode", "LOCE")
        .with_child(place);
    relationship("location", "LOC", entity)
}

/// Seriousness criteria that apply to a reaction: its own, else the ones
/// declared for the case. Blank labels do not count as criteria.
pub fn criteria<'a>(reaction: &'a ReactionEntry, case: &'a CaseRecord) -> &'a [String] {
    if !any_label(&reaction.seriousness_criteria) {
        case.case_seriousness()
    } else {
        &reaction.seriousness_criteria
    }
}

/// Seriousness codes in first-seen order; labels mapping to the same code
/// are emitted once.
fn seriousness_codes(registry: &VocabularyRegistry, labels: &[String]) -> Vec<String> {
    let mut codes: Vec<String> = Vec::new();
    for label in labels.iter().map(|label| label.trim()).filter(|label| !label.is_empty()) {
        let code = registry.lookup(TableKind::Seriousness, label).into_owned();
        if !codes.contains(&code) {
            codes.push(code);
        }
    }
    codes
}
