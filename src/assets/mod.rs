//! Build-time asset processing for the site.
//!
//! These run offline before the site is bundled. Jobs are sequential and any
//! I/O or codec error aborts the run.

mod encode;
mod logo;
mod report;
mod screenshots;


pub use logo::{
    clean_icon_edges, composite_depth, contain, process_logo, render_runtime_depth,
    render_runtime_icon, softened_alpha,
};
pub use report::format_kb;
pub use screenshots::{process_job, process_screenshots, render_screenshot};
