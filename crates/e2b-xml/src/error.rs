use thiserror::Error;

#[derive(Debug, Error)]
pub enum XmlError {
    #[error("failed to write xml: {0}")]
    Write(#[from] std::io::Error),
    #[error("serialized xml is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, XmlError>;
