use e2b_xml::XmlError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    /// The case has no case number; the caller broke the input contract.
    #[error("case record has no case id")]
    MissingCaseId,
    #[error(transparent)]
    Xml(#[from] XmlError),
}

pub type Result<T> = std::result::Result<T, EncodeError>;
