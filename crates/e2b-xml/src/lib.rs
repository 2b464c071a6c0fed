//! Minimal XML tree construction and serialization.
//!
//! [`XmlElement`] builds the tree without any validation; [`XmlDocument`]
//! binds it to a default namespace and renders it through `quick-xml`.

mod element;
mod error;
mod writer;

pub use element::{ValueType, XSI_NS, XSI_PREFIX, XmlElement, type_attribute};
pub use error::{Result, XmlError};
pub use writer::{COLLAPSED_TAGS, SerializeOptions, XmlDocument, restore_collapsed_tags};
