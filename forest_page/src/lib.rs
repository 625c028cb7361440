//! ForestSustain page: a smooth-scrolled single page over a 3D forest,
//! with scroll-triggered reveals and scroll-linked parallax.
//!
//! Library root: the per-frame subsystems, the page view that owns them,
//! and the SDK builder that composes them into an app.

pub mod config;
pub mod content;
pub mod easing;
pub mod frame;
pub mod page;
pub mod scene;
pub mod scroll;
pub mod timeline;
pub mod ui;

pub mod prelude;
pub mod sdk;

pub use content::{ContentError, PageContent, SectionProps};
pub use sdk::ForestPageBuilder;
