//! Per-frame scheduling: one ordered chain of system sets per frame, and the
//! marker that accounts for every per-frame registration.

use bevy::prelude::*;

/// Stages of a frame, run in declaration order inside `Update`.
#[derive(SystemSet, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Viewport sync, input and scroll requests.
    Input,
    /// The scroll emulator ticks and publishes its snapshot.
    Scroll,
    /// Triggers, timelines and the 3D scene consume the snapshot.
    Animate,
    /// The page overlay is drawn.
    Present,
}

/// Attached (as a required component) to everything that does work every
/// frame on behalf of a page: trigger registrations, timelines, spinning
/// scene nodes and the camera rig. Despawning the page releases them all.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct FrameSubscription;

pub fn frame_plugin(app: &mut App) {
    app.configure_sets(
        Update,
        (
            FrameSet::Input,
            FrameSet::Scroll,
            FrameSet::Animate,
            FrameSet::Present,
        )
            .chain(),
    );
}

/// Number of live per-frame registrations in `world`.
pub fn active_subscriptions(world: &mut World) -> usize {
    world
        .query_filtered::<Entity, With<FrameSubscription>>()
        .iter(world)
        .count()
}
