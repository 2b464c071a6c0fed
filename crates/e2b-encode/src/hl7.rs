//! Recurring HL7 v3 element shapes.

use e2b_vocab::oids::{ISO3166_OID, MEDDRA_OID, OBSERVATION_CODE_OID};
use e2b_xml::{ValueType, XmlElement};

use crate::format::format_date;

/// `<id root=".." extension=".."/>`.
pub fn id(root: &str, extension: &str) -> XmlElement {
    XmlElement::new("id").with_attrs([("root", root), ("extension", extension)])
}

/// `<id root=".."/>`, used for linker tokens.
pub fn token_id(token: &str) -> XmlElement {
    XmlElement::new("id").with_attr("root", token)
}

/// `<{name} code=".." codeSystem=".."/>`.
pub fn coded(name: &str, code: &str, code_system: &str) -> XmlElement {
    XmlElement::new(name).with_attrs([("code", code), ("codeSystem", code_system)])
}

/// `<code code=".." codeSystem=".."/>`.
pub fn code(code: &str, code_system: &str) -> XmlElement {
    coded("code", code, code_system)
}

/// `<value xsi:type="CE" code=".." codeSystem=".."/>`.
pub fn coded_value(code: &str, code_system: &str) -> XmlElement {
    XmlElement::typed("value", ValueType::Ce)
        .with_attrs([("code", code), ("codeSystem", code_system)])
}

/// `<value xsi:type="BL" value=".."/>`.
pub fn bool_value(value: bool) -> XmlElement {
    XmlElement::typed("value", ValueType::Bl).with_attr("value", if value { "true" } else { "false" })
}

/// `<value xsi:type="PQ" value=".." unit=".."/>`.
pub fn quantity_value(value: &str, unit: &str) -> XmlElement {
    XmlElement::typed("value", ValueType::Pq).with_attrs([("value", value), ("unit", unit)])
}

/// `<value xsi:type="ST">..</value>`.
pub fn text_value(text: &str) -> XmlElement {
    XmlElement::typed("value", ValueType::St).with_text(text)
}

/// `<{name} value=".."/>` for an ISO date, or `None` when the date is absent
/// or unusable.
pub fn date_element(name: &str, date: Option<&str>) -> Option<XmlElement> {
    let value = format_date(date?)?;
    Some(XmlElement::new(name).with_attr("value", value))
}

/// `<effectiveTime xsi:type="IVL_TS">` with `low`/`high` bounds; `None` when
/// neither bound is usable.
pub fn interval(low: Option<&str>, high: Option<&str>) -> Option<XmlElement> {
    let low = date_element("low", low);
    let high = date_element("high", high);
    if low.is_none() && high.is_none() {
        return None;
    }
    let mut time = XmlElement::typed("effectiveTime", ValueType::IvlTs);
    time.extend(low);
    time.extend(high);
    Some(time)
}

/// `<observation classCode="OBS" moodCode="EVN">` with an ICH observation code.
pub fn observation(observation_code: &str) -> XmlElement {
    XmlElement::new("observation")
        .with_attrs([("classCode", "OBS"), ("moodCode", "EVN")])
        .with_child(code(observation_code, OBSERVATION_CODE_OID))
}

/// Wrap a node in a typed relationship element: `<{name} typeCode="..">`.
pub fn relationship(name: &str, type_code: &str, child: XmlElement) -> XmlElement {
    XmlElement::new(name)
        .with_attr("typeCode", type_code)
        .with_child(child)
}

/// A MedDRA-coded term, keeping the verbatim text as `originalText`.
///
/// Without a code only the text is kept.
pub fn meddra_term(
    name: &str,
    meddra_code: Option<&str>,
    version: Option<&str>,
    verbatim: Option<&str>,
) -> XmlElement {
    with_meddra(XmlElement::new(name), meddra_code, version, verbatim)
}

/// `<value xsi:type="CE">` holding a MedDRA term.
pub fn meddra_value(
    meddra_code: Option<&str>,
    version: Option<&str>,
    verbatim: Option<&str>,
) -> XmlElement {
    with_meddra(
        XmlElement::typed("value", ValueType::Ce),
        meddra_code,
        version,
        verbatim,
    )
}

fn with_meddra(
    mut term: XmlElement,
    meddra_code: Option<&str>,
    version: Option<&str>,
    verbatim: Option<&str>,
) -> XmlElement {
    if let Some(meddra_code) = meddra_code {
        term.set_attr("code", meddra_code);
        term.set_attr("codeSystem", MEDDRA_OID);
        if let Some(version) = version {
            term.set_attr("codeSystemVersion", version);
        }
    }
    if let Some(verbatim) = verbatim {
        term.child("originalText").set_text(verbatim);
    }
    term
}

/// `<{name} xsi:type=".." value=".."/>` for a date-typed value, or `None`
/// when the date is absent or unusable.
pub fn typed_date(name: &str, value_type: ValueType, date: Option<&str>) -> Option<XmlElement> {
    let value = format_date(date?)?;
    Some(XmlElement::typed(name, value_type).with_attr("value", value))
}

/// A boolean observation wrapped as a pertinent relationship.
pub fn flag(name: &str, observation_code: &str, value: bool) -> XmlElement {
    relationship(
        name,
        "PERT",
        observation(observation_code).with_child(bool_value(value)),
    )
}

/// Comment attached to an observation: `<{name} typeCode="REFR">` wrapping a
/// code 10 observation with an `ST` value.
pub fn comment(name: &str, text: &str) -> XmlElement {
    relationship(
        name,
        "REFR",
        observation(e2b_vocab::oids::observation::COMMENT).with_child(text_value(text)),
    )
}

/// `<code code="XX" codeSystem="ISO 3166"/>`.
pub fn country_code(country: &str) -> XmlElement {
    code(country, ISO3166_OID)
}

/// `<{outer} typeCode=".."><device classCode="DEV" determinerCode="INSTANCE"><id/></device></{outer}>`.
pub fn device(outer: &str, type_code: &str, root: &str, extension: &str) -> XmlElement {
    let device = XmlElement::new("device")
        .with_attrs([("classCode", "DEV"), ("determinerCode", "INSTANCE")])
        .with_child(id(root, extension));
    relationship(outer, type_code, device)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_skips_missing_bounds() {
        let time = interval(Some("2024-01-10"), None).expect("interval");
        assert_eq!(time.attr("xsi:type"), Some("IVL_TS"));
        assert_eq!(time.children().len(), 1);
        assert_eq!(time.find("low").and_then(|low| low.attr("value")), Some("20240110"));
        assert!(interval(None, Some("not a date")).is_none());
    }

    #[test]
    fn meddra_value_is_typed_and_coded() {
        let value = meddra_value(Some("10019211"), Some("26.1"), Some("Headache"));
        assert_eq!(value.attr("xsi:type"), Some("CE"));
        assert_eq!(value.attr("codeSystem"), Some(MEDDRA_OID));
        assert_eq!(value.attr("codeSystemVersion"), Some("26.1"));
    }

    #[test]
    fn meddra_term_without_code_keeps_text() {
        let term = meddra_term("code", None, None, Some("Headache"));
        assert_eq!(term.attr("code"), None);
        assert_eq!(
            term.find("originalText").and_then(XmlElement::text),
            Some("Headache")
        );
    }
}
