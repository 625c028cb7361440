//! Timeline animator: scroll-triggered and autoplaying keyframe tweens.

mod actions;
mod band;
mod scrub;
mod trigger;
mod tween;

use bevy::prelude::*;

pub use actions::{Crossing, ToggleAction, ToggleActions, ToggleActionsError};
pub use band::{TriggerBand, TriggerBandError};
pub use scrub::{region_progress, ScrollLinked, SectionParallax};
pub use trigger::{BandRegion, ScrollTrigger};
pub use tween::{Repeat, Timeline, TriggerPhase, Tween, VisualState};

use crate::easing::Easing;
use crate::frame::FrameSet;
use crate::page::{PageLayout, PageRoot, Section};
use crate::scroll::ScrollUpdated;

/// Which drawn element group a timeline animates.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealSlot {
    /// Hero title, subtitle and buttons.
    HeroText,
    ScrollIndicatorFade,
    ScrollIndicatorBounce,
    /// Section title and description.
    SectionText,
    SectionFact,
}

/// Emitted for every band crossing.
#[derive(Event, Clone, Debug)]
pub struct TriggerFired {
    pub trigger: Entity,
    pub section: Entity,
    pub crossing: Crossing,
    pub action: ToggleAction,
}

const HIDDEN_BELOW: VisualState = VisualState {
    opacity: 0.0,
    offset_y: 50.0,
    scale: 1.0,
};

pub fn hero_text_tween() -> Tween {
    Tween {
        from: HIDDEN_BELOW,
        to: VisualState::SHOWN,
        duration: 1.0,
        delay: 0.5,
        stagger: 0.2,
        easing: Easing::Power3Out,
        targets: 3,
    }
}

pub fn scroll_indicator_fade_tween() -> Tween {
    Tween {
        from: VisualState {
            opacity: 0.0,
            ..VisualState::SHOWN
        },
        to: VisualState::SHOWN,
        duration: 1.0,
        delay: 1.5,
        stagger: 0.0,
        easing: Easing::Power2Out,
        targets: 1,
    }
}

pub fn scroll_indicator_bounce_tween() -> Tween {
    Tween {
        from: VisualState::SHOWN,
        to: VisualState {
            offset_y: 10.0,
            ..VisualState::SHOWN
        },
        duration: 0.75,
        delay: 0.0,
        stagger: 0.0,
        easing: Easing::SineInOut,
        targets: 1,
    }
}

pub fn section_text_tween() -> Tween {
    Tween {
        from: HIDDEN_BELOW,
        to: VisualState::SHOWN,
        duration: 1.0,
        delay: 0.0,
        stagger: 0.2,
        easing: Easing::Power3Out,
        targets: 2,
    }
}

pub fn section_fact_tween() -> Tween {
    Tween {
        from: VisualState {
            opacity: 0.0,
            offset_y: 0.0,
            scale: 0.8,
        },
        to: VisualState::SHOWN,
        duration: 0.8,
        delay: 0.0,
        stagger: 0.0,
        easing: Easing::BackOut(1.7),
        targets: 1,
    }
}

/// Trigger for a section's text reveal: `top 80%` to `top 50%`.
pub fn section_text_trigger(section: Entity) -> ScrollTrigger {
    ScrollTrigger::new(section, TriggerBand::new(0.0, 0.8), TriggerBand::new(0.0, 0.5))
        .with_actions(ToggleActions::PLAY_AND_REVERSE)
}

/// Trigger for a section's fact card: `top 70%` to `top 40%`.
pub fn section_fact_trigger(section: Entity) -> ScrollTrigger {
    ScrollTrigger::new(section, TriggerBand::new(0.0, 0.7), TriggerBand::new(0.0, 0.4))
        .with_actions(ToggleActions::PLAY_AND_REVERSE)
}

pub fn timeline_plugin(app: &mut App) {
    app.add_event::<TriggerFired>().add_systems(
        Update,
        (evaluate_triggers, advance_timelines)
            .chain()
            .in_set(FrameSet::Animate),
    );
}

/// Re-evaluates every trigger of a page whenever its scroll offset moves.
fn evaluate_triggers(
    mut updates: EventReader<ScrollUpdated>,
    pages: Query<&PageLayout, With<PageRoot>>,
    sections: Query<(&Section, &Parent)>,
    mut triggers: Query<(Entity, &mut ScrollTrigger, &mut Timeline)>,
    mut fired: EventWriter<TriggerFired>,
) {
    for update in updates.read() {
        let Ok(layout) = pages.get(update.page) else {
            continue;
        };
        for (entity, mut trigger, mut timeline) in &mut triggers {
            let Ok((section, parent)) = sections.get(trigger.section) else {
                continue;
            };
            if parent.get() != update.page {
                continue;
            }
            let Some(region) = layout.region(section.anchor()) else {
                continue;
            };
            let (start, end) = trigger.span(region, layout.viewport.height);
            let section_entity = trigger.section;
            for &crossing in trigger.update(update.state.offset, start, end) {
                let action = trigger.actions.action_for(crossing);
                debug!(
                    "trigger #{} {crossing:?} at {:.0}px -> {action:?}",
                    section.anchor(),
                    update.state.offset
                );
                timeline.apply(action);
                fired.send(TriggerFired {
                    trigger: entity,
                    section: section_entity,
                    crossing,
                    action,
                });
            }
        }
    }
}

fn advance_timelines(time: Res<Time>, mut timelines: Query<&mut Timeline>) {
    let dt = time.delta_secs();
    for mut timeline in &mut timelines {
        if timeline.is_playing() {
            timeline.advance(dt);
        }
    }
}
