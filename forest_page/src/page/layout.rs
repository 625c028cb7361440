//! Document layout: where each page region sits on the virtual scroll axis.

use bevy::prelude::*;

use crate::content::PageContent;
use crate::scroll::AnchorLookup;

pub const HOME_ANCHOR: &str = "home";
pub const CONTACT_ANCHOR: &str = "contact";
pub const FOOTER_HEIGHT: f32 = 320.0;
const MIN_SECTION_HEIGHT: f32 = 640.0;
const MIN_CONTACT_HEIGHT: f32 = 720.0;

/// Size of the window the page is drawn into, in logical pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    pub anchor: String,
    pub top: f32,
    pub height: f32,
}

impl Region {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Stacked page regions, top to bottom. Lives on the page root.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct PageLayout {
    pub viewport: Viewport,
    pub regions: Vec<Region>,
    pub document_height: f32,
}

impl PageLayout {
    /// Hero, one region per section, contact, then the unanchored footer.
    pub fn measure(content: &PageContent, viewport: Viewport) -> Self {
        let vh = viewport.height;
        let mut regions = Vec::with_capacity(content.sections.len() + 2);
        let mut cursor = 0.0;
        let mut push = |anchor: &str, height: f32| {
            regions.push(Region {
                anchor: anchor.to_string(),
                top: cursor,
                height,
            });
            cursor += height;
        };

        push(HOME_ANCHOR, vh);
        for section in &content.sections {
            push(&section.id, vh.max(MIN_SECTION_HEIGHT));
        }
        push(CONTACT_ANCHOR, vh.max(MIN_CONTACT_HEIGHT));
        let document_height = cursor + FOOTER_HEIGHT;

        Self {
            viewport,
            regions,
            document_height,
        }
    }

    /// Largest reachable scroll offset.
    pub fn scroll_limit(&self) -> f32 {
        (self.document_height - self.viewport.height).max(0.0)
    }

    pub fn region(&self, anchor: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.anchor == anchor)
    }

    /// Top of the footer block.
    pub fn footer_top(&self) -> f32 {
        self.document_height - FOOTER_HEIGHT
    }

    /// The last region whose top has scrolled past the upper third of the
    /// viewport. Drives the navbar highlight.
    pub fn active_anchor(&self, offset: f32) -> &str {
        let probe = offset + self.viewport.height / 3.0;
        self.regions
            .iter()
            .rev()
            .find(|r| r.top <= probe)
            .map(|r| r.anchor.as_str())
            .unwrap_or(HOME_ANCHOR)
    }
}

impl AnchorLookup for PageLayout {
    fn anchor_top(&self, id: &str) -> Option<f32> {
        self.region(id).map(|r| r.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_stack_in_page_order() {
        let layout = PageLayout::measure(&PageContent::default(), Viewport::default());
        let anchors: Vec<&str> = layout.regions.iter().map(|r| r.anchor.as_str()).collect();
        assert_eq!(
            anchors,
            ["home", "about", "sustainability", "gallery", "contact"]
        );
        for pair in layout.regions.windows(2) {
            assert_eq!(pair[0].bottom(), pair[1].top);
        }
        assert_eq!(layout.anchor_top("about"), Some(720.0));
        assert_eq!(layout.footer_top(), layout.region("contact").unwrap().bottom());
    }

    #[test]
    fn short_viewports_keep_minimum_section_height() {
        let layout = PageLayout::measure(
            &PageContent::default(),
            Viewport {
                width: 800.0,
                height: 400.0,
            },
        );
        assert_eq!(layout.region("about").unwrap().height, MIN_SECTION_HEIGHT);
        assert_eq!(layout.region("contact").unwrap().height, MIN_CONTACT_HEIGHT);
        assert_eq!(layout.scroll_limit(), layout.document_height - 400.0);
    }

    #[test]
    fn active_anchor_follows_offset() {
        let layout = PageLayout::measure(&PageContent::default(), Viewport::default());
        assert_eq!(layout.active_anchor(0.0), "home");
        assert_eq!(layout.active_anchor(600.0), "about");
        assert_eq!(layout.active_anchor(layout.scroll_limit()), "contact");
    }
}
