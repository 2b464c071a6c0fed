//! Command-line export of case records as E2B(R3) ICSR XML.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
