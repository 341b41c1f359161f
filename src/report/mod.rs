//! Discovery report handling
//!
//! This module covers everything before enrichment:
//! - Obtaining the raw report (discovery tool, file, or stdin)
//! - Stripping terminal color codes
//! - Parsing name and reference lines into ordered entries

mod ansi;
mod parser;
mod source;

pub use ansi::strip_ansi;
pub use parser::{parse_report, Entry};
pub use source::ReportSource;
