//! Environment-driven page configuration.

use std::path::Path;
use std::str::FromStr;

use crate::content::PageContent;
use crate::scene::{ForestSettings, DEFAULT_TREE_COUNT};
use crate::scroll::{ScrollSettings, DEFAULT_DURATION};

pub const SEED_VAR: &str = "FOREST_SEED";
pub const TREE_COUNT_VAR: &str = "FOREST_TREE_COUNT";
pub const CONTENT_VAR: &str = "FOREST_CONTENT";
pub const SCROLL_DURATION_VAR: &str = "FOREST_SCROLL_DURATION";

#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    /// Fixed tree layout seed. `None` draws a fresh layout per mount.
    pub seed: Option<u64>,
    pub tree_count: usize,
    pub content: PageContent,
    /// Wheel easing duration, seconds.
    pub scroll_duration: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tree_count: DEFAULT_TREE_COUNT,
            content: PageContent::default(),
            scroll_duration: DEFAULT_DURATION,
        }
    }
}

impl PageConfig {
    pub fn forest_settings(&self) -> ForestSettings {
        ForestSettings {
            seed: self.seed,
            tree_count: self.tree_count,
        }
    }

    pub fn scroll_settings(&self) -> ScrollSettings {
        ScrollSettings {
            duration: self.scroll_duration,
            ..ScrollSettings::default()
        }
    }
}

/// Reads `FOREST_*` variables. Anything unset or invalid keeps its default.
pub fn page_config() -> PageConfig {
    let defaults = PageConfig::default();
    let scroll_duration = env_value::<f32>(SCROLL_DURATION_VAR)
        .filter(|secs| {
            let valid = secs.is_finite() && *secs > 0.0;
            if !valid {
                eprintln!("forest-sustain: {SCROLL_DURATION_VAR} must be positive, got {secs}");
            }
            valid
        })
        .unwrap_or(defaults.scroll_duration);

    PageConfig {
        seed: env_value(SEED_VAR),
        tree_count: env_value(TREE_COUNT_VAR).unwrap_or(defaults.tree_count),
        content: content_override().unwrap_or(defaults.content),
        scroll_duration,
    }
}

fn env_value<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            eprintln!("forest-sustain: invalid {key}: {raw:?}, using default");
            None
        }
    }
}

fn content_override() -> Option<PageContent> {
    let path = std::env::var(CONTENT_VAR).ok()?;
    match PageContent::from_json(Path::new(&path)) {
        Ok(content) => Some(content),
        Err(err) => {
            eprintln!("forest-sustain: {err}; using built-in content");
            None
        }
    }
}
