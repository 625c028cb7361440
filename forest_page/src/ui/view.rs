//! Per-frame snapshot of what the overlay draws, gathered from the page's
//! entities before any egui call.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::content::{PageContent, SectionProps};
use crate::page::{Hero, PageLayout, PageRoot, Region, Section, Viewport};
use crate::scroll::ScrollEmulator;
use crate::timeline::{region_progress, RevealSlot, SectionParallax, Timeline, VisualState};

use super::images::SectionImage;

/// Virtual scroll past which the navbar gets its solid background.
pub const NAVBAR_SOLID_AFTER_PX: f32 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroView {
    pub title: VisualState,
    pub subtitle: VisualState,
    pub buttons: VisualState,
    pub indicator_opacity: f32,
    pub indicator_bounce: f32,
}

#[derive(Clone, Debug)]
pub struct SectionView<'a> {
    pub props: &'a SectionProps,
    pub region: &'a Region,
    pub title: VisualState,
    pub description: VisualState,
    pub fact: Option<VisualState>,
    pub image_y: f32,
    /// Scroll-linked fade of the whole section, image and text.
    pub opacity: f32,
    pub image: Option<&'a SectionImage>,
}

#[derive(Clone, Debug)]
pub struct PageView<'a> {
    pub offset: f32,
    pub viewport: Viewport,
    pub layout: &'a PageLayout,
    pub content: &'a PageContent,
    pub navbar_solid: bool,
    pub active_anchor: &'a str,
    pub hero: HeroView,
    pub sections: Vec<SectionView<'a>>,
}

impl PageView<'_> {
    /// Screen-space top of a document position.
    pub fn screen_y(&self, document_y: f32) -> f32 {
        document_y - self.offset
    }

    /// Whether any part of `[top, top + height)` is inside the viewport.
    pub fn on_screen(&self, top: f32, height: f32) -> bool {
        let y = self.screen_y(top);
        y < self.viewport.height && y + height > 0.0
    }
}

pub fn navbar_solid(offset: f32) -> bool {
    offset > NAVBAR_SOLID_AFTER_PX
}

/// Everything the overlay reads from the world.
#[derive(SystemParam)]
pub struct PageQueries<'w, 's> {
    pages: Query<
        'w,
        's,
        (
            &'static ScrollEmulator,
            &'static PageLayout,
            &'static PageContent,
            &'static Children,
        ),
        With<PageRoot>,
    >,
    heroes: Query<'w, 's, Option<&'static Children>, With<Hero>>,
    sections: Query<
        'w,
        's,
        (
            &'static Section,
            Option<&'static SectionImage>,
            Option<&'static Children>,
        ),
    >,
    reveals: Query<'w, 's, (&'static RevealSlot, &'static Timeline)>,
    parallax: Local<'s, SectionParallax>,
}

impl PageQueries<'_, '_> {
    /// Snapshot of the first mounted page, if any.
    pub fn view(&self) -> Option<PageView<'_>> {
        let (emulator, layout, content, children) = self.pages.iter().next()?;
        let offset = emulator.offset();
        let vh = layout.viewport.height;

        let mut hero = HeroView {
            title: VisualState::SHOWN,
            subtitle: VisualState::SHOWN,
            buttons: VisualState::SHOWN,
            indicator_opacity: 1.0,
            indicator_bounce: 0.0,
        };
        let mut sections = Vec::new();

        for &child in children.iter() {
            if let Ok(hero_children) = self.heroes.get(child) {
                if let Some(timeline) = self.reveal(hero_children, RevealSlot::HeroText) {
                    hero.title = timeline.sample(0);
                    hero.subtitle = timeline.sample(1);
                    hero.buttons = timeline.sample(2);
                }
                if let Some(timeline) = self.reveal(hero_children, RevealSlot::ScrollIndicatorFade)
                {
                    hero.indicator_opacity = timeline.sample(0).opacity;
                }
                if let Some(timeline) =
                    self.reveal(hero_children, RevealSlot::ScrollIndicatorBounce)
                {
                    hero.indicator_bounce = timeline.sample(0).offset_y;
                }
                continue;
            }

            let Ok((section, image, triggers)) = self.sections.get(child) else {
                continue;
            };
            let Some(region) = layout.region(section.anchor()) else {
                continue;
            };
            let text = self.reveal(triggers, RevealSlot::SectionText);
            let progress = region_progress(offset, region, vh);
            sections.push(SectionView {
                props: &section.props,
                region,
                title: text.map_or(VisualState::SHOWN, |t| t.sample(0)),
                description: text.map_or(VisualState::SHOWN, |t| t.sample(1)),
                fact: section
                    .props
                    .has_fact()
                    .then(|| {
                        self.reveal(triggers, RevealSlot::SectionFact)
                            .map_or(VisualState::SHOWN, |t| t.sample(0))
                    }),
                image_y: self.parallax.image_y.sample(progress),
                opacity: self.parallax.opacity.sample(progress),
                image,
            });
        }

        Some(PageView {
            offset,
            viewport: layout.viewport,
            layout,
            content,
            navbar_solid: navbar_solid(offset),
            active_anchor: layout.active_anchor(offset),
            hero,
            sections,
        })
    }

    fn reveal(&self, children: Option<&Children>, slot: RevealSlot) -> Option<&Timeline> {
        children?.iter().find_map(|&child| {
            self.reveals
                .get(child)
                .ok()
                .filter(|(s, _)| **s == slot)
                .map(|(_, timeline)| timeline)
        })
    }
}
