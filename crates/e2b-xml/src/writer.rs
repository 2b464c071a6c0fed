//! Serialization of an element tree to UTF-8 text.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::element::{XSI_NS, XSI_PREFIX, XmlElement};
use crate::error::Result;

/// Tag names some serializers collapse under a default-namespace binding,
/// as `(collapsed, restored)` pairs.
pub const COLLAPSED_TAGS: &[(&str, &str)] = &[("v", "value")];

/// Output options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Indentation width in spaces; `None` writes a single line.
    pub indent: Option<usize>,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self { indent: Some(2) }
    }
}

impl SerializeOptions {
    pub fn compact() -> Self {
        Self { indent: None }
    }
}

/// A root element bound to its default namespace.
#[derive(Debug, Clone)]
pub struct XmlDocument {
    pub root: XmlElement,
    pub default_namespace: String,
}

impl XmlDocument {
    pub fn new(root: XmlElement, default_namespace: impl Into<String>) -> Self {
        Self {
            root,
            default_namespace: default_namespace.into(),
        }
    }

    /// Render the document with an XML declaration.
    pub fn to_xml_string(&self, options: &SerializeOptions) -> Result<String> {
        let buffer = Vec::new();
        let bytes = match options.indent {
            Some(width) => {
                let mut xml = Writer::new_with_indent(buffer, b' ', width);
                self.write_to(&mut xml)?;
                xml.into_inner()
            }
            None => {
                let mut xml = Writer::new(buffer);
                self.write_to(&mut xml)?;
                xml.into_inner()
            }
        };
        let text = String::from_utf8(bytes)?;
        Ok(restore_collapsed_tags(&text))
    }

    fn write_to<W: Write>(&self, xml: &mut Writer<W>) -> Result<()> {
        xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        let xsi_binding = format!("xmlns:{XSI_PREFIX}");
        let namespaces = [
            ("xmlns", self.default_namespace.as_str()),
            (xsi_binding.as_str(), XSI_NS),
        ];
        write_element(xml, &self.root, &namespaces)
    }
}

fn write_element<W: Write>(
    xml: &mut Writer<W>,
    element: &XmlElement,
    namespaces: &[(&str, &str)],
) -> Result<()> {
    let mut start = BytesStart::new(element.name());
    for (name, value) in namespaces {
        start.push_attribute((*name, *value));
    }
    for (name, value) in element.attributes() {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.is_empty() {
        xml.write_event(Event::Empty(start))?;
        return Ok(());
    }

    xml.write_event(Event::Start(start))?;
    if let Some(text) = element.text() {
        xml.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in element.children() {
        write_element(xml, child, &[])?;
    }
    xml.write_event(Event::End(BytesEnd::new(element.name())))?;
    Ok(())
}

/// Restore tag names listed in [`COLLAPSED_TAGS`].
///
/// Only markup is touched: `<` never appears unescaped in text or attribute
/// values, so the patterns below can only match start, end or empty tags.
pub fn restore_collapsed_tags(xml: &str) -> String {
    let mut out = xml.to_string();
    for (collapsed, restored) in COLLAPSED_TAGS {
        for (from, to) in [
            (format!("<{collapsed} "), format!("<{restored} ")),
            (format!("<{collapsed}>"), format!("<{restored}>")),
            (format!("<{collapsed}/>"), format!("<{restored}/>")),
            (format!("</{collapsed}>"), format!("</{restored}>")),
        ] {
            if out.contains(&from) {
                out = out.replace(&from, &to);
            }
        }
    }
    out
}
