//! Download recommendation logic and build tooling for the Unimozer Next
//! website.
//!
//! The client-side decisions (which installer to recommend, which download
//! tab is open, which feature slide is showing) live in [`platform`] and
//! [`ui`] as pure functions. The offline build steps (logo compositing,
//! screenshot transcoding, release link checks) live in [`assets`] and
//! [`links`] and are driven by the `unimozer-site` binary.

pub mod assets;
pub mod config;
pub mod constants;
pub mod downloads;
pub mod links;
pub mod paths;
pub mod platform;
pub mod ui;
