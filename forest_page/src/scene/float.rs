use bevy::prelude::*;

use crate::frame::FrameSubscription;

/// Phase offsets are drawn from `[0, FLOAT_PHASE_RANGE)` so trees drift out of
/// step with each other.
pub const FLOAT_PHASE_RANGE: f32 = 10_000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatParams {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

impl Default for FloatParams {
    fn default() -> Self {
        Self {
            speed: 1.0,
            rotation_intensity: 0.2,
            float_intensity: 0.5,
        }
    }
}

/// Gentle bob and sway applied to the wrapper above each tree.
#[derive(Component, Clone, Copy, Debug)]
#[require(FrameSubscription)]
pub struct TreeFloat {
    pub phase: f32,
    pub params: FloatParams,
}

impl TreeFloat {
    pub fn new(phase: f32) -> Self {
        Self {
            phase,
            params: FloatParams::default(),
        }
    }

    /// Rotation and vertical offset at `elapsed` seconds.
    pub fn pose(&self, elapsed: f32) -> (Quat, f32) {
        let FloatParams {
            speed,
            rotation_intensity,
            float_intensity,
        } = self.params;
        let t = (self.phase + elapsed) / 4.0 * speed;
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            t.cos() / 8.0 * rotation_intensity,
            t.sin() / 8.0 * rotation_intensity,
            t.sin() / 20.0 * rotation_intensity,
        );
        (rotation, t.sin() / 10.0 * float_intensity)
    }
}

pub(super) fn float_trees_system(time: Res<Time>, mut floats: Query<(&TreeFloat, &mut Transform)>) {
    let elapsed = time.elapsed_secs();
    for (float, mut transform) in &mut floats {
        let (rotation, y) = float.pose(elapsed);
        transform.rotation = rotation;
        transform.translation.y = y;
    }
}
