//! The scene camera: an eased fly-in, then a constrained orbit around the
//! forest, lowered as the page scrolls past the hero.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

use crate::easing::Easing;
use crate::frame::FrameSubscription;
use crate::page::{PageRoot, Viewport};
use crate::scroll::ScrollEmulator;

use super::ForestScene;

pub const REST_POSITION: Vec3 = Vec3::new(0.0, 5.0, 15.0);
pub const INTRO_FROM: Vec3 = Vec3::new(0.0, 15.0, 30.0);
pub const INTRO_DURATION: f32 = 2.5;
pub const FIELD_OF_VIEW_DEGREES: f32 = 45.0;
/// World units the camera sinks per pixel of page scroll.
pub const HERO_WORLD_UNITS_PER_PX: f32 = 0.004;

const ROTATE_SPEED: f32 = 0.3;
const MIN_POLAR: f32 = FRAC_PI_4;
const MAX_POLAR: f32 = FRAC_PI_2 - 0.1;

#[derive(Clone, Copy, Debug)]
struct Intro {
    elapsed: f32,
    duration: f32,
    easing: Easing,
}

/// Spherical camera state around the forest origin.
#[derive(Component, Clone, Debug)]
#[require(FrameSubscription)]
pub struct CameraRig {
    yaw: f32,
    polar: f32,
    radius: f32,
    intro: Option<Intro>,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraRig {
    /// A rig resting at [`REST_POSITION`] that first flies in from
    /// [`INTRO_FROM`].
    pub fn new() -> Self {
        let radius = REST_POSITION.length();
        Self {
            yaw: REST_POSITION.x.atan2(REST_POSITION.z),
            polar: (REST_POSITION.y / radius).acos(),
            radius,
            intro: Some(Intro {
                elapsed: 0.0,
                duration: INTRO_DURATION,
                easing: Easing::Power3InOut,
            }),
        }
    }

    pub fn is_intro_done(&self) -> bool {
        self.intro.is_none()
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn advance_intro(&mut self, dt: f32) {
        if let Some(intro) = &mut self.intro {
            intro.elapsed += dt;
            if intro.elapsed >= intro.duration {
                self.intro = None;
            }
        }
    }

    fn orbit_position(&self) -> Vec3 {
        let ring = self.radius * self.polar.sin();
        Vec3::new(
            ring * self.yaw.sin(),
            self.radius * self.polar.cos(),
            ring * self.yaw.cos(),
        )
    }

    /// Eye position before scroll coupling.
    pub fn position(&self) -> Vec3 {
        match self.intro {
            Some(intro) => {
                let t = intro.easing.apply(intro.elapsed / intro.duration);
                INTRO_FROM.lerp(self.orbit_position(), t)
            }
            None => self.orbit_position(),
        }
    }

    /// Drag rotation in screen pixels. Ignored until the fly-in lands.
    pub fn orbit(&mut self, drag: Vec2, viewport_height: f32) {
        if self.intro.is_some() || viewport_height <= 0.0 {
            return;
        }
        let scale = TAU * ROTATE_SPEED / viewport_height;
        self.yaw -= drag.x * scale;
        self.polar = (self.polar - drag.y * scale).clamp(MIN_POLAR, MAX_POLAR);
    }
}

pub(super) fn camera_bundle() -> impl Bundle {
    (
        Name::new("scene camera"),
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FIELD_OF_VIEW_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_translation(INTRO_FROM).looking_at(Vec3::ZERO, Vec3::Y),
        CameraRig::new(),
    )
}

pub(super) fn camera_rig_system(
    time: Res<Time>,
    pages: Query<&ScrollEmulator, With<PageRoot>>,
    scenes: Query<&Parent, With<ForestScene>>,
    mut rigs: Query<(&mut CameraRig, &mut Transform, &Parent)>,
) {
    let dt = time.delta_secs();
    for (mut rig, mut transform, scene) in &mut rigs {
        rig.advance_intro(dt);
        let offset = scenes
            .get(scene.get())
            .and_then(|page| pages.get(page.get()))
            .map(ScrollEmulator::offset)
            .unwrap_or(0.0);
        let drop = Vec3::Y * offset * HERO_WORLD_UNITS_PER_PX;
        *transform = Transform::from_translation(rig.position() - drop)
            .looking_at(Vec3::ZERO - drop, Vec3::Y);
    }
}

pub(super) fn orbit_input_system(
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    viewport: Res<Viewport>,
    mut rigs: Query<&mut CameraRig>,
) {
    let drag: Vec2 = motion.read().map(|m| m.delta).sum();
    if !buttons.pressed(MouseButton::Left) || drag == Vec2::ZERO {
        return;
    }
    for mut rig in &mut rigs {
        rig.orbit(drag, viewport.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intro_flies_from_start_to_rest() {
        let mut rig = CameraRig::new();
        assert!(rig.position().distance(INTRO_FROM) < 1e-4);

        rig.advance_intro(INTRO_DURATION / 2.0);
        let mid = rig.position();
        assert!(mid.y < INTRO_FROM.y && mid.y > REST_POSITION.y);

        rig.advance_intro(INTRO_DURATION);
        assert!(rig.is_intro_done());
        assert!(rig.position().distance(REST_POSITION) < 1e-4);
    }

    #[test]
    fn orbit_is_locked_during_intro() {
        let mut rig = CameraRig::new();
        let before = rig.yaw();
        rig.orbit(Vec2::new(200.0, 0.0), 720.0);
        assert_eq!(rig.yaw(), before);
    }

    #[test]
    fn polar_angle_is_clamped() {
        let mut rig = CameraRig::new();
        rig.advance_intro(INTRO_DURATION);

        rig.orbit(Vec2::new(0.0, 10_000.0), 720.0);
        assert!((rig.polar() - MIN_POLAR).abs() < 1e-6);
        rig.orbit(Vec2::new(0.0, -10_000.0), 720.0);
        assert!((rig.polar() - MAX_POLAR).abs() < 1e-6);
    }

    #[test]
    fn orbit_keeps_the_radius() {
        let mut rig = CameraRig::new();
        rig.advance_intro(INTRO_DURATION);
        rig.orbit(Vec2::new(150.0, 40.0), 720.0);
        assert!((rig.position().length() - REST_POSITION.length()).abs() < 1e-4);
    }
}
