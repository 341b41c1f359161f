//! Output module for presenting run results
//!
//! This module handles:
//! - Rendering enriched entries as plain text
//! - Tallying and logging where descriptions came from

mod console;
pub mod stats;

pub use console::{render_empty, render_entries, NO_SKILLS_FOUND};
pub use stats::{log_statistics, RunStatistics};
