//! One builder per ICSR section.
//!
//! Each reads its slice of the case and the vocabulary registry and returns
//! a detached subtree; [`crate::document`] decides where it goes.

pub mod batch;
pub mod causality;
pub mod drug;
pub mod header;
pub mod history;
pub mod lab;
pub mod patient;
pub mod reaction;
pub mod reporter;
pub mod sender;
