//! Virtual scroll offset with eased inertia.
//!
//! Input never moves the offset directly. It moves a target, and every tick
//! the offset follows the target along an easing curve that restarts from
//! the current offset whenever the target changes, so the offset is
//! continuous except for explicit immediate jumps.

use bevy::log::debug;
use bevy::prelude::Component;

use crate::easing::Easing;

/// Wheel easing duration in seconds.
pub const DEFAULT_DURATION: f32 = 1.2;
/// Pixels per wheel line when the platform reports line deltas.
pub const LINE_HEIGHT_PX: f32 = 100.0 / 6.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    Forward,
    Backward,
    #[default]
    Still,
}

/// Per-frame snapshot of the emulator, handed to every subscriber.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub offset: f32,
    /// Pixels per second over the last tick.
    pub velocity: f32,
    pub target: f32,
    pub limit: f32,
    pub direction: ScrollDirection,
    pub is_scrolling: bool,
}

impl ScrollState {
    /// Fraction of the scrollable range covered, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.limit <= 0.0 {
            0.0
        } else {
            (self.offset / self.limit).clamp(0.0, 1.0)
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScrollSettings {
    pub duration: f32,
    pub easing: Easing,
    pub wheel_multiplier: f32,
    pub touch_multiplier: f32,
    pub smooth_touch: bool,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            easing: Easing::ExpoOut,
            wheel_multiplier: 1.0,
            touch_multiplier: 2.0,
            smooth_touch: false,
        }
    }
}

/// Where a `scroll_to` request should land.
#[derive(Clone, Debug, PartialEq)]
pub enum ScrollTarget {
    Anchor(String),
    Offset(f32),
    Top,
    Bottom,
}

impl From<&str> for ScrollTarget {
    /// Accepts `"#about"`, `"/#about"`, `"top"`, `"bottom"` or a pixel offset.
    fn from(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some((_, id)) = raw.rsplit_once('#') {
            return ScrollTarget::Anchor(id.to_string());
        }
        match raw {
            "top" | "start" | "left" => ScrollTarget::Top,
            "bottom" | "end" | "right" => ScrollTarget::Bottom,
            _ => match raw.parse::<f32>() {
                Ok(px) if px.is_finite() => ScrollTarget::Offset(px),
                _ => ScrollTarget::Anchor(raw.to_string()),
            },
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScrollToOptions {
    /// Added to the resolved destination before clamping.
    pub offset: f32,
    /// Falls back to the emulator's wheel duration.
    pub duration: Option<f32>,
    pub easing: Option<Easing>,
    pub immediate: bool,
    /// Honour the request even while the emulator is stopped.
    pub force: bool,
}

impl ScrollToOptions {
    /// The options in-page anchor links use.
    pub fn anchor_link() -> Self {
        Self {
            offset: -100.0,
            duration: Some(1.5),
            easing: Some(Easing::ExpoOut),
            ..Default::default()
        }
    }
}

/// Resolves anchor ids to document offsets.
pub trait AnchorLookup {
    fn anchor_top(&self, id: &str) -> Option<f32>;
}

#[derive(Clone, Debug)]
struct Animation {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
    easing: Easing,
}

impl Animation {
    /// Returns the new value and whether the animation has completed.
    fn advance(&mut self, dt: f32) -> (f32, bool) {
        self.elapsed += dt;
        let linear = (self.elapsed / self.duration).clamp(0.0, 1.0);
        let completed = linear >= 1.0;
        let eased = if completed {
            1.0
        } else {
            self.easing.apply(linear)
        };
        (self.from + (self.to - self.from) * eased, completed)
    }
}

/// Smooth-scroll emulator owned by a page root.
#[derive(Component, Debug)]
pub struct ScrollEmulator {
    settings: ScrollSettings,
    offset: f32,
    target: f32,
    velocity: f32,
    direction: ScrollDirection,
    /// `None` until the page layout has been measured.
    limit: Option<f32>,
    animation: Option<Animation>,
    stopped: bool,
    changed: bool,
    last_time_ms: Option<f64>,
}

impl Default for ScrollEmulator {
    fn default() -> Self {
        Self::new(ScrollSettings::default())
    }
}

impl ScrollEmulator {
    pub fn new(settings: ScrollSettings) -> Self {
        Self {
            settings,
            offset: 0.0,
            target: 0.0,
            velocity: 0.0,
            direction: ScrollDirection::Still,
            limit: None,
            animation: None,
            stopped: false,
            // The first tick always publishes so subscribers see offset 0.
            changed: true,
            last_time_ms: None,
        }
    }

    pub fn settings(&self) -> &ScrollSettings {
        &self.settings
    }

    pub fn is_ready(&self) -> bool {
        self.limit.is_some()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn state(&self) -> ScrollState {
        ScrollState {
            offset: self.offset,
            velocity: self.velocity,
            target: self.target,
            limit: self.limit.unwrap_or(0.0),
            direction: self.direction,
            is_scrolling: self.animation.is_some(),
        }
    }

    /// Sets the maximum offset. The first call makes the emulator ready.
    pub fn resize(&mut self, limit: f32) {
        let limit = limit.max(0.0);
        self.limit = Some(limit);
        if self.target > limit {
            self.target = limit;
            if let Some(animation) = &mut self.animation {
                animation.to = limit;
            }
        }
        if self.offset > limit {
            self.offset = limit;
            self.animation = None;
            self.changed = true;
        }
    }

    pub fn stop(&mut self) {
        self.stopped = true;
        self.animation = None;
        self.target = self.offset;
        self.velocity = 0.0;
    }

    pub fn start(&mut self) {
        self.stopped = false;
    }

    /// Feeds one wheel event, already converted to pixels.
    pub fn on_wheel(&mut self, delta_px: f32) {
        let delta = delta_px * self.settings.wheel_multiplier;
        self.scroll_by(delta);
    }

    /// Feeds one touch drag delta in pixels. Without smooth touch the drag
    /// moves the offset directly, like native touch scrolling.
    pub fn on_touch(&mut self, delta_px: f32) {
        let delta = delta_px * self.settings.touch_multiplier;
        if !delta.is_finite() {
            debug!("touch delta {delta_px} ignored: not finite");
            return;
        }
        if self.settings.smooth_touch {
            self.scroll_by(delta);
        } else if let Some(limit) = self.limit.filter(|_| !self.stopped) {
            let dest = (self.offset + delta).clamp(0.0, limit);
            self.jump(dest);
        }
    }

    /// Moves the target by `delta_px` with the wheel easing.
    pub fn scroll_by(&mut self, delta_px: f32) {
        let Some(limit) = self.limit else {
            return;
        };
        if self.stopped || delta_px == 0.0 {
            return;
        }
        if !delta_px.is_finite() {
            debug!("scroll_by {delta_px} ignored: not finite");
            return;
        }
        let dest = (self.target + delta_px).clamp(0.0, limit);
        self.animate_to(dest, self.settings.duration, self.settings.easing);
    }

    /// Scrolls to `target`. Silently ignored when the emulator is not ready,
    /// is stopped without `force`, the anchor does not exist or the
    /// destination is not a finite offset.
    pub fn scroll_to(
        &mut self,
        target: &ScrollTarget,
        options: &ScrollToOptions,
        anchors: &impl AnchorLookup,
    ) {
        let Some(limit) = self.limit else {
            debug!("scroll_to {target:?} ignored: layout not measured");
            return;
        };
        if self.stopped && !options.force {
            debug!("scroll_to {target:?} ignored: emulator stopped");
            return;
        }
        let base = match target {
            ScrollTarget::Offset(px) => *px,
            ScrollTarget::Top => 0.0,
            ScrollTarget::Bottom => limit,
            ScrollTarget::Anchor(id) => match anchors.anchor_top(id) {
                Some(top) => top,
                None => {
                    debug!("scroll_to ignored: no anchor #{id}");
                    return;
                }
            },
        };
        let dest = base + options.offset;
        if !dest.is_finite() {
            debug!("scroll_to {target:?} ignored: destination not finite");
            return;
        }
        let dest = dest.clamp(0.0, limit);
        let duration = options.duration.unwrap_or(self.settings.duration);
        if options.immediate || duration <= 0.0 {
            self.jump(dest);
        } else {
            let easing = options.easing.unwrap_or(self.settings.easing);
            self.animate_to(dest, duration, easing);
        }
    }

    /// Advances the offset by `dt` seconds and returns the new snapshot.
    pub fn tick(&mut self, dt: f32) -> ScrollState {
        let dt = dt.max(0.0);
        let prev = self.offset;
        if let Some(animation) = &mut self.animation {
            let (value, completed) = animation.advance(dt);
            self.offset = value;
            if completed {
                self.animation = None;
            }
        }
        let moved = self.offset - prev;
        self.velocity = if dt > 0.0 { moved / dt } else { 0.0 };
        if moved > 0.0 {
            self.direction = ScrollDirection::Forward;
        } else if moved < 0.0 {
            self.direction = ScrollDirection::Backward;
        }
        if moved != 0.0 {
            self.changed = true;
        }
        self.state()
    }

    /// Ticks from an absolute frame timestamp in milliseconds. The first
    /// call only records the timestamp.
    pub fn raf(&mut self, time_ms: f64) -> ScrollState {
        let dt = self
            .last_time_ms
            .map(|last| ((time_ms - last) * 0.001) as f32)
            .unwrap_or(0.0);
        self.last_time_ms = Some(time_ms);
        self.tick(dt)
    }

    /// Forces the next tick to publish, e.g. after the bands moved under a
    /// still offset.
    pub fn mark_changed(&mut self) {
        self.changed = true;
    }

    /// Returns whether the offset changed since the last call.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    fn animate_to(&mut self, dest: f32, duration: f32, easing: Easing) {
        self.target = dest;
        self.animation = Some(Animation {
            from: self.offset,
            to: dest,
            elapsed: 0.0,
            duration,
            easing,
        });
    }

    fn jump(&mut self, dest: f32) {
        self.offset = dest;
        self.target = dest;
        self.velocity = 0.0;
        self.animation = None;
        self.changed = true;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    impl AnchorLookup for HashMap<String, f32> {
        fn anchor_top(&self, id: &str) -> Option<f32> {
            self.get(id).copied()
        }
    }

    fn anchors() -> HashMap<String, f32> {
        HashMap::from([("about".to_string(), 720.0), ("contact".to_string(), 2880.0)])
    }

    fn ready(limit: f32) -> ScrollEmulator {
        let mut emulator = ScrollEmulator::default();
        emulator.resize(limit);
        emulator
    }

    fn run_for(emulator: &mut ScrollEmulator, seconds: f32) -> Vec<ScrollState> {
        let frames = (seconds / FRAME).ceil() as usize;
        (0..frames).map(|_| emulator.tick(FRAME)).collect()
    }

    #[test]
    fn scroll_to_reaches_target_by_duration_without_overshoot() {
        for duration in [0.3, 0.8, 1.2, 1.5, 2.5] {
            let mut emulator = ready(4000.0);
            let options = ScrollToOptions {
                duration: Some(duration),
                ..Default::default()
            };
            emulator.scroll_to(&ScrollTarget::Offset(2500.0), &options, &anchors());

            let states = run_for(&mut emulator, duration + FRAME);
            for state in &states {
                assert!(state.offset <= 2500.0, "overshoot at duration {duration}");
            }
            let last = states.last().unwrap();
            assert!((last.offset - 2500.0).abs() < 1e-3);
            assert!(!last.is_scrolling);
        }
    }

    #[test]
    fn scroll_to_is_ignored_before_layout() {
        let mut emulator = ScrollEmulator::default();
        emulator.scroll_to(
            &ScrollTarget::Anchor("about".into()),
            &ScrollToOptions::anchor_link(),
            &anchors(),
        );
        emulator.tick(FRAME);
        assert_eq!(emulator.target(), 0.0);
        assert_eq!(emulator.offset(), 0.0);
        assert!(!emulator.is_ready());
    }

    #[test]
    fn unknown_anchor_is_a_no_op() {
        let mut emulator = ready(4000.0);
        emulator.scroll_to(
            &ScrollTarget::Anchor("missing".into()),
            &ScrollToOptions::anchor_link(),
            &anchors(),
        );
        assert_eq!(emulator.target(), 0.0);
        assert!(!emulator.state().is_scrolling);
    }

    #[test]
    fn anchor_link_applies_offset_and_clamps() {
        let mut emulator = ready(2000.0);
        emulator.scroll_to(
            &ScrollTarget::Anchor("about".into()),
            &ScrollToOptions::anchor_link(),
            &anchors(),
        );
        assert_eq!(emulator.target(), 620.0);

        emulator.scroll_to(
            &ScrollTarget::Anchor("contact".into()),
            &ScrollToOptions::anchor_link(),
            &anchors(),
        );
        assert_eq!(emulator.target(), 2000.0);
    }

    #[test]
    fn wheel_accumulates_target_within_limit() {
        let mut emulator = ready(300.0);
        emulator.on_wheel(120.0);
        emulator.on_wheel(120.0);
        assert_eq!(emulator.target(), 240.0);
        emulator.on_wheel(500.0);
        assert_eq!(emulator.target(), 300.0);
        emulator.on_wheel(-1000.0);
        assert_eq!(emulator.target(), 0.0);
    }

    #[test]
    fn touch_drag_moves_the_offset_directly() {
        let mut emulator = ready(4000.0);
        emulator.on_touch(50.0);
        assert_eq!(emulator.offset(), 100.0);
        assert_eq!(emulator.target(), 100.0);
        assert!(!emulator.state().is_scrolling);

        emulator.on_touch(-500.0);
        assert_eq!(emulator.offset(), 0.0);
        emulator.on_touch(f32::NAN);
        assert_eq!(emulator.offset(), 0.0);
    }

    #[test]
    fn smooth_touch_eases_like_the_wheel() {
        let mut emulator = ScrollEmulator::new(ScrollSettings {
            smooth_touch: true,
            ..Default::default()
        });
        emulator.resize(4000.0);
        emulator.on_touch(50.0);
        assert_eq!(emulator.offset(), 0.0);
        assert_eq!(emulator.target(), 100.0);
        assert!(emulator.state().is_scrolling);

        run_for(&mut emulator, DEFAULT_DURATION + FRAME);
        assert!((emulator.offset() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn retargeting_mid_flight_stays_continuous() {
        let mut emulator = ready(5000.0);
        emulator.scroll_to(
            &ScrollTarget::Offset(1000.0),
            &ScrollToOptions::default(),
            &anchors(),
        );
        let mut prev = emulator.offset();
        for frame in 0..120 {
            if frame == 20 {
                emulator.scroll_to(
                    &ScrollTarget::Offset(200.0),
                    &ScrollToOptions::default(),
                    &anchors(),
                );
            }
            let state = emulator.tick(FRAME);
            assert!((state.offset - prev).abs() < 150.0, "jump at frame {frame}");
            prev = state.offset;
        }
        assert!((prev - 200.0).abs() < 1e-3);
    }

    #[test]
    fn immediate_jump_lands_on_the_same_tick() {
        let mut emulator = ready(4000.0);
        emulator.take_changed();
        let options = ScrollToOptions {
            immediate: true,
            ..Default::default()
        };
        emulator.scroll_to(&ScrollTarget::Bottom, &options, &anchors());
        assert!(emulator.take_changed());
        let state = emulator.tick(FRAME);
        assert_eq!(state.offset, 4000.0);
        assert_eq!(state.progress(), 1.0);
    }

    #[test]
    fn stopped_emulator_only_honours_forced_requests() {
        let mut emulator = ready(4000.0);
        emulator.stop();
        emulator.on_wheel(200.0);
        emulator.scroll_to(&ScrollTarget::Offset(900.0), &Default::default(), &anchors());
        assert_eq!(emulator.target(), 0.0);

        let forced = ScrollToOptions {
            force: true,
            ..Default::default()
        };
        emulator.scroll_to(&ScrollTarget::Offset(900.0), &forced, &anchors());
        assert_eq!(emulator.target(), 900.0);

        emulator.start();
        emulator.on_wheel(100.0);
        assert_eq!(emulator.target(), 1000.0);
    }

    #[test]
    fn raf_derives_delta_from_timestamps() {
        let mut emulator = ready(4000.0);
        emulator.scroll_to(
            &ScrollTarget::Offset(1000.0),
            &ScrollToOptions {
                duration: Some(1.0),
                easing: Some(Easing::Linear),
                ..Default::default()
            },
            &anchors(),
        );
        assert_eq!(emulator.raf(10_000.0).offset, 0.0);
        let state = emulator.raf(10_500.0);
        assert!((state.offset - 500.0).abs() < 1e-2);
        assert!((state.velocity - 1000.0).abs() < 1e-1);
        assert_eq!(state.direction, ScrollDirection::Forward);
    }

    #[test]
    fn shrinking_limit_clamps_offset() {
        let mut emulator = ready(4000.0);
        emulator.scroll_to(
            &ScrollTarget::Offset(3000.0),
            &ScrollToOptions {
                immediate: true,
                ..Default::default()
            },
            &anchors(),
        );
        emulator.resize(1000.0);
        assert_eq!(emulator.offset(), 1000.0);
        assert_eq!(emulator.target(), 1000.0);
    }

    #[test]
    fn targets_parse_from_hrefs() {
        assert_eq!(ScrollTarget::from("#about"), ScrollTarget::Anchor("about".into()));
        assert_eq!(ScrollTarget::from("/page#gallery"), ScrollTarget::Anchor("gallery".into()));
        assert_eq!(ScrollTarget::from("top"), ScrollTarget::Top);
        assert_eq!(ScrollTarget::from("end"), ScrollTarget::Bottom);
        assert_eq!(ScrollTarget::from("250"), ScrollTarget::Offset(250.0));
        assert_eq!(ScrollTarget::from("NaN"), ScrollTarget::Anchor("NaN".into()));
        assert_eq!(ScrollTarget::from("inf"), ScrollTarget::Anchor("inf".into()));
    }

    #[test]
    fn non_finite_destinations_leave_the_page_usable() {
        let mut emulator = ready(4000.0);
        emulator.scroll_to(&ScrollTarget::from("nan"), &Default::default(), &anchors());
        emulator.scroll_to(&ScrollTarget::Offset(f32::NAN), &Default::default(), &anchors());
        emulator.scroll_to(
            &ScrollTarget::Top,
            &ScrollToOptions {
                offset: f32::INFINITY,
                immediate: true,
                ..Default::default()
            },
            &anchors(),
        );
        emulator.scroll_by(f32::NAN);
        emulator.on_wheel(f32::NEG_INFINITY);
        run_for(&mut emulator, 2.0);
        assert_eq!(emulator.offset(), 0.0);
        assert_eq!(emulator.target(), 0.0);

        emulator.on_wheel(120.0);
        run_for(&mut emulator, 2.0);
        assert!((emulator.offset() - 120.0).abs() < 1e-3);
    }
}
