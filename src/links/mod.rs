//! Release link health checking.
//!
//! Used as a release gate: every download button on the site points at a
//! `releases/latest` alias, and a missing asset only shows up as a 404 once
//! a visitor clicks it.

mod operations;
mod state;
mod targets;


pub use operations::{build_agent, check_all, check_target};
pub use state::{CheckMethod, LinkCheckResult, LinkReport, LinkTarget};
pub use targets::{required_targets, resource_targets};
