//! Scroll triggers: band crossing detection for one registered element.

use bevy::prelude::*;

use crate::frame::FrameSubscription;
use crate::page::Region;
use crate::timeline::actions::{Crossing, ToggleActions};
use crate::timeline::band::TriggerBand;

/// Where the scroll offset sits relative to a trigger's two bands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BandRegion {
    #[default]
    Before,
    Active,
    After,
}

impl BandRegion {
    fn locate(offset: f32, start: f32, end: f32) -> Self {
        if offset < start {
            BandRegion::Before
        } else if offset > end {
            BandRegion::After
        } else {
            BandRegion::Active
        }
    }
}

const ENTER: &[Crossing] = &[Crossing::Enter];
const LEAVE: &[Crossing] = &[Crossing::Leave];
const ENTER_BACK: &[Crossing] = &[Crossing::EnterBack];
const LEAVE_BACK: &[Crossing] = &[Crossing::LeaveBack];
const JUMP_FORWARD: &[Crossing] = &[Crossing::Enter, Crossing::Leave];
const JUMP_BACK: &[Crossing] = &[Crossing::EnterBack, Crossing::LeaveBack];

/// Crossings fired by one update, in the order they happened.
fn crossings(from: BandRegion, to: BandRegion) -> &'static [Crossing] {
    use BandRegion::*;
    match (from, to) {
        (Before, Active) => ENTER,
        (Before, After) => JUMP_FORWARD,
        (Active, After) => LEAVE,
        (After, Active) => ENTER_BACK,
        (After, Before) => JUMP_BACK,
        (Active, Before) => LEAVE_BACK,
        _ => &[],
    }
}

/// A trigger registration. Lives on a child entity of its section, next to
/// the [`Timeline`](crate::timeline::Timeline) it controls.
#[derive(Component, Clone, Debug)]
#[require(FrameSubscription)]
pub struct ScrollTrigger {
    pub section: Entity,
    pub start: TriggerBand,
    pub end: TriggerBand,
    pub actions: ToggleActions,
    region: BandRegion,
    forward_fires: u32,
    reverse_fires: u32,
}

impl ScrollTrigger {
    pub fn new(section: Entity, start: TriggerBand, end: TriggerBand) -> Self {
        Self {
            section,
            start,
            end,
            actions: ToggleActions::default(),
            region: BandRegion::Before,
            forward_fires: 0,
            reverse_fires: 0,
        }
    }

    pub fn with_actions(mut self, actions: ToggleActions) -> Self {
        self.actions = actions;
        self
    }

    pub fn region(&self) -> BandRegion {
        self.region
    }

    /// Number of times the start band was crossed going forward.
    pub fn forward_fires(&self) -> u32 {
        self.forward_fires
    }

    /// Number of times the start band was crossed going backward.
    pub fn reverse_fires(&self) -> u32 {
        self.reverse_fires
    }

    /// Start and end offsets for an element occupying `region`. The end is
    /// never before the start.
    pub fn span(&self, region: &Region, viewport_height: f32) -> (f32, f32) {
        let start = self.start.resolve(region.top, region.height, viewport_height);
        let end = self.end.resolve(region.top, region.height, viewport_height);
        (start, end.max(start))
    }

    /// Moves the trigger to `offset` and returns the crossings on the way.
    pub fn update(&mut self, offset: f32, start: f32, end: f32) -> &'static [Crossing] {
        let next = BandRegion::locate(offset, start, end);
        let fired = crossings(self.region, next);
        self.region = next;
        for crossing in fired {
            match crossing {
                Crossing::Enter => self.forward_fires += 1,
                Crossing::LeaveBack => self.reverse_fires += 1,
                Crossing::Leave | Crossing::EnterBack => {}
            }
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trigger() -> ScrollTrigger {
        ScrollTrigger::new(
            Entity::PLACEHOLDER,
            TriggerBand::new(0.0, 0.8),
            TriggerBand::new(0.0, 0.5),
        )
    }

    #[test]
    fn span_resolves_top_80_to_top_50() {
        let region = Region {
            anchor: "about".into(),
            top: 720.0,
            height: 720.0,
        };
        let (start, end) = trigger().span(&region, 720.0);
        assert_eq!(start, 720.0 - 576.0);
        assert_eq!(end, 720.0 - 360.0);
    }

    #[test]
    fn crossings_follow_scroll_direction() {
        let mut trigger = trigger();
        assert!(trigger.update(50.0, 100.0, 200.0).is_empty());
        assert_eq!(trigger.update(150.0, 100.0, 200.0), &[Crossing::Enter]);
        assert_eq!(trigger.update(250.0, 100.0, 200.0), &[Crossing::Leave]);
        assert_eq!(trigger.update(150.0, 100.0, 200.0), &[Crossing::EnterBack]);
        assert_eq!(trigger.update(0.0, 100.0, 200.0), &[Crossing::LeaveBack]);
        assert_eq!(trigger.forward_fires(), 1);
        assert_eq!(trigger.reverse_fires(), 1);
    }

    #[test]
    fn jumping_over_the_band_fires_both_crossings() {
        let mut trigger = trigger();
        assert_eq!(
            trigger.update(500.0, 100.0, 200.0),
            &[Crossing::Enter, Crossing::Leave]
        );
        assert_eq!(
            trigger.update(0.0, 100.0, 200.0),
            &[Crossing::EnterBack, Crossing::LeaveBack]
        );
        assert_eq!(trigger.region(), BandRegion::Before);
    }

    #[test]
    fn staying_inside_a_region_fires_nothing() {
        let mut trigger = trigger();
        trigger.update(150.0, 100.0, 200.0);
        assert!(trigger.update(160.0, 100.0, 200.0).is_empty());
        assert!(trigger.update(199.0, 100.0, 200.0).is_empty());
        assert_eq!(trigger.forward_fires(), 1);
    }
}
