//! Minimal prelude for SDK consumers.

pub use crate::config::{page_config, PageConfig};
pub use crate::content::{PageContent, SectionProps};
pub use crate::easing::Easing;
pub use crate::page::{despawn_page, spawn_page, PageRoot, Viewport};
pub use crate::scroll::{
    ScrollRequest, ScrollSettings, ScrollTarget, ScrollToOptions, ScrollUpdated,
};
pub use crate::sdk::ForestPageBuilder;
pub use crate::timeline::TriggerFired;
