//! In-memory element tree.
//!
//! A small construction primitive: create an element, attach
//! attributes, append children, set text. Every element lives in the
//! document's default namespace; the schema-instance namespace only appears
//! as the `xsi:type` discriminator on typed value nodes.

use std::fmt;

/// Prefix bound to the XML Schema instance namespace.
pub const XSI_PREFIX: &str = "xsi";

/// XML Schema instance namespace.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// HL7 v3 data types used as `xsi:type` discriminators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// Physical quantity.
    Pq,
    /// Coded value.
    Ce,
    /// Boolean.
    Bl,
    /// Point in time.
    Ts,
    /// Interval of time.
    IvlTs,
    /// Character string.
    St,
    /// Integer.
    Int,
    /// Set expression of time (dosing regimen).
    SxprTs,
    /// Periodic interval of time.
    PivlTs,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Pq => "PQ",
            ValueType::Ce => "CE",
            ValueType::Bl => "BL",
            ValueType::Ts => "TS",
            ValueType::IvlTs => "IVL_TS",
            ValueType::St => "ST",
            ValueType::Int => "INT",
            ValueType::SxprTs => "SXPR_TS",
            ValueType::PivlTs => "PIVL_TS",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One element of the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// A typed value node: `<name xsi:type="...">`.
    pub fn typed(name: impl Into<String>, value_type: ValueType) -> Self {
        Self::new(name).with_attr(type_attribute(), value_type.as_str())
    }

    /// Add an attribute, consuming and returning the element.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Add several attributes in order.
    #[must_use]
    pub fn with_attrs<'a, I>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, value) in attributes {
            self.set_attr(name, value);
        }
        self
    }

    /// Set text content, consuming and returning the element.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child, consuming and returning the element.
    #[must_use]
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    /// Set an attribute, replacing an existing value of the same name.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    /// Append an existing subtree and return a handle to it.
    pub fn push(&mut self, child: XmlElement) -> &mut XmlElement {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Append a new empty child and return a handle to it.
    pub fn child(&mut self, name: impl Into<String>) -> &mut XmlElement {
        self.push(XmlElement::new(name))
    }

    /// Append every subtree from an iterator.
    pub fn extend<I: IntoIterator<Item = XmlElement>>(&mut self, children: I) {
        self.children.extend(children);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.text.is_none()
    }

    /// First direct child with the given name.
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == name)
    }

    /// All direct children with the given name.
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// All elements below this one with the given name, in document order.
    pub fn descendants<'a>(&'a self, name: &str) -> Vec<&'a XmlElement> {
        let mut found = Vec::new();
        collect_descendants(self, name, &mut found);
        found
    }
}

fn collect_descendants<'a>(element: &'a XmlElement, name: &str, found: &mut Vec<&'a XmlElement>) {
    for child in &element.children {
        if child.name == name {
            found.push(child);
        }
        collect_descendants(child, name, found);
    }
}

/// Qualified name of the type discriminator attribute.
pub fn type_attribute() -> String {
    format!("{XSI_PREFIX}:type")
}
