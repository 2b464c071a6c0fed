//! ICH E2B(R3) ICSR encoder.
//!
//! Turns a [`CaseRecord`](e2b_model::CaseRecord) into an HL7 v3
//! `MCCI_IN200100UV01` batch holding one `PORR_IN049016UV` safety report.
//!
//! Encoding is a pure single pass. Missing or malformed optional data is
//! omitted or mapped to a documented fallback code; the only failure is a
//! case without a case id.
//!
//! ```no_run
//! use e2b_encode::{EncodeOptions, IcsrEncoder};
//! use e2b_model::CaseRecord;
//!
//! let case = CaseRecord::from_json(r#"{"caseId": "PV-2024-0001"}"#)?;
//! let encoded = IcsrEncoder::new(EncodeOptions::default()).encode(&case)?;
//! std::fs::write(encoded.file_name(), &encoded.xml)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod document;
pub mod error;
pub mod format;
pub mod hl7;
pub mod linker;
pub mod options;
pub mod sections;

pub use document::{EncodedIcsr, FILE_SUFFIX, IcsrEncoder, encode_case};
pub use error::{EncodeError, Result};
pub use linker::{IdentifierLinker, LinkedToken, SequentialTokens, TokenSource, UuidTokens};
pub use options::EncodeOptions;
