//! Client-side page state, expressed as pure functions and reducers.
//!
//! Each controller owns its state and advances it through a `reduce`
//! method; the page only forwards events (clicks, key presses, hash
//! changes) and renders whatever state comes back.

pub mod carousel;
pub mod depth_logo;
pub mod hero;
pub mod tabs;

pub use carousel::{CarouselEvent, CarouselKey, CarouselState, FEATURE_SLIDES, Slide};
pub use hero::{HeroCta, hero_cta};
pub use tabs::{DownloadTab, TabEvent, TabState, tab_for_fragment};
