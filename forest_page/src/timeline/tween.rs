//! Keyframe tweens and the playhead that drives them.

use bevy::prelude::Component;

use crate::easing::Easing;
use crate::frame::FrameSubscription;
use crate::timeline::actions::ToggleAction;

/// The animated properties of one drawn element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    /// Vertical displacement in logical pixels, positive is down.
    pub offset_y: f32,
    pub scale: f32,
}

impl Default for VisualState {
    fn default() -> Self {
        Self::SHOWN
    }
}

impl VisualState {
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    pub fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            offset_y: self.offset_y + (to.offset_y - self.offset_y) * t,
            scale: self.scale + (to.scale - self.scale) * t,
        }
    }

    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        (self.opacity - other.opacity).abs() <= tolerance
            && (self.offset_y - other.offset_y).abs() <= tolerance
            && (self.scale - other.scale).abs() <= tolerance
    }
}

/// One `from -> to` tween applied to `targets` elements, each starting
/// `stagger` seconds after the previous one.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub from: VisualState,
    pub to: VisualState,
    pub duration: f32,
    pub delay: f32,
    pub stagger: f32,
    pub easing: Easing,
    pub targets: usize,
}

impl Tween {
    pub fn total_duration(&self) -> f32 {
        let staggered = self.stagger * self.targets.saturating_sub(1) as f32;
        self.delay + staggered + self.duration
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Repeat {
    #[default]
    Once,
    /// Bounce between the ends forever.
    Yoyo,
}

/// Per-trigger playback phase, derived from the playhead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerPhase {
    Idle,
    Entering,
    Settled,
    Reversing,
}

#[derive(Component, Clone, Debug)]
#[require(FrameSubscription)]
pub struct Timeline {
    tween: Tween,
    playhead: f32,
    /// 1 playing forward, -1 reversing, 0 paused.
    rate: f32,
    heading: f32,
    repeat: Repeat,
}

impl Timeline {
    /// A paused timeline rendering its `from` state.
    pub fn new(tween: Tween) -> Self {
        Self {
            tween,
            playhead: 0.0,
            rate: 0.0,
            heading: 1.0,
            repeat: Repeat::Once,
        }
    }

    /// A timeline that starts playing as soon as it is spawned.
    pub fn autoplay(tween: Tween) -> Self {
        let mut timeline = Self::new(tween);
        timeline.play();
        timeline
    }

    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn tween(&self) -> &Tween {
        &self.tween
    }

    pub fn duration(&self) -> f32 {
        self.tween.total_duration()
    }

    pub fn playhead(&self) -> f32 {
        self.playhead
    }

    pub fn is_playing(&self) -> bool {
        self.rate != 0.0
    }

    pub fn phase(&self) -> TriggerPhase {
        if self.rate > 0.0 {
            TriggerPhase::Entering
        } else if self.rate < 0.0 {
            TriggerPhase::Reversing
        } else if self.playhead <= 0.0 {
            TriggerPhase::Idle
        } else {
            TriggerPhase::Settled
        }
    }

    pub fn play(&mut self) {
        self.set_rate(1.0);
    }

    pub fn reverse(&mut self) {
        self.set_rate(-1.0);
    }

    pub fn pause(&mut self) {
        self.rate = 0.0;
    }

    pub fn resume(&mut self) {
        self.set_rate(self.heading);
    }

    pub fn restart(&mut self) {
        self.playhead = 0.0;
        self.set_rate(1.0);
    }

    /// Pauses on the first frame.
    pub fn reset(&mut self) {
        self.playhead = 0.0;
        self.rate = 0.0;
    }

    /// Jumps to the last frame.
    pub fn complete(&mut self) {
        self.playhead = self.duration();
        self.rate = 0.0;
    }

    pub fn apply(&mut self, action: ToggleAction) {
        match action {
            ToggleAction::Play => self.play(),
            ToggleAction::Pause => self.pause(),
            ToggleAction::Resume => self.resume(),
            ToggleAction::Reverse => self.reverse(),
            ToggleAction::Restart => self.restart(),
            ToggleAction::Reset => self.reset(),
            ToggleAction::Complete => self.complete(),
            ToggleAction::None => {}
        }
    }

    pub fn advance(&mut self, dt: f32) {
        if self.rate == 0.0 {
            return;
        }
        let total = self.duration();
        self.playhead += self.rate * dt;

        if self.playhead >= total {
            match self.repeat {
                Repeat::Once => {
                    self.playhead = total;
                    self.rate = 0.0;
                }
                Repeat::Yoyo => {
                    self.playhead = (2.0 * total - self.playhead).max(0.0);
                    self.set_rate(-1.0);
                }
            }
        } else if self.playhead <= 0.0 {
            match self.repeat {
                Repeat::Once => {
                    self.playhead = 0.0;
                    self.rate = 0.0;
                }
                Repeat::Yoyo => {
                    self.playhead = (-self.playhead).min(total);
                    self.set_rate(1.0);
                }
            }
        }
    }

    /// The visual state of target `index` at the current playhead.
    pub fn sample(&self, index: usize) -> VisualState {
        let tween = &self.tween;
        let local = self.playhead - tween.delay - tween.stagger * index as f32;
        let fraction = if tween.duration <= 0.0 {
            if local >= 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            (local / tween.duration).clamp(0.0, 1.0)
        };
        if fraction <= 0.0 {
            return tween.from;
        }
        tween.from.lerp(tween.to, tween.easing.apply(fraction))
    }

    fn set_rate(&mut self, rate: f32) {
        self.rate = rate;
        self.heading = rate;
    }
}
