//! Easing curves shared by the scroll emulator, timelines and camera intro.

use std::f32::consts::PI;

/// Maps the elapsed fraction of a duration to an interpolation fraction.
///
/// Every curve satisfies `apply(0) == 0` and `apply(1) == 1`. Only
/// [`Easing::BackOut`] leaves `[0, 1]` in between.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    /// `min(1, 1.001 - 2^(-10t))`, the smooth-scroll curve. Saturates just
    /// before `t = 1` and never overshoots.
    #[default]
    ExpoOut,
    Power2Out,
    Power3Out,
    Power3InOut,
    SineInOut,
    /// Overshoots by an amount controlled by the tension parameter.
    BackOut(f32),
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::ExpoOut => (1.001 - 2f32.powf(-10.0 * t)).clamp(0.0, 1.0),
            Easing::Power2Out => 1.0 - (1.0 - t).powi(2),
            Easing::Power3Out => 1.0 - (1.0 - t).powi(3),
            Easing::Power3InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Easing::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
        }
    }

    /// Whether the curve can leave `[0, 1]`.
    pub fn overshoots(self) -> bool {
        matches!(self, Easing::BackOut(s) if s > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 7] = [
        Easing::Linear,
        Easing::ExpoOut,
        Easing::Power2Out,
        Easing::Power3Out,
        Easing::Power3InOut,
        Easing::SineInOut,
        Easing::BackOut(1.7),
    ];

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() <= 2e-3, "{easing:?} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
        }
    }

    #[test]
    fn expo_out_saturates_without_overshoot() {
        let mut prev = 0.0;
        for step in 0..=1000 {
            let v = Easing::ExpoOut.apply(step as f32 / 1000.0);
            assert!(v <= 1.0);
            assert!(v >= prev, "expo out must be monotonic");
            prev = v;
        }
        assert_eq!(Easing::ExpoOut.apply(0.9975), 1.0);
    }

    #[test]
    fn back_out_overshoots_then_settles() {
        let peak = (1..100)
            .map(|i| Easing::BackOut(1.7).apply(i as f32 / 100.0))
            .fold(0.0f32, f32::max);
        assert!(peak > 1.0);
        assert!(Easing::BackOut(1.7).overshoots());
        assert!(!Easing::ExpoOut.overshoots());
    }

    #[test]
    fn power3_in_out_is_symmetric() {
        let a = Easing::Power3InOut.apply(0.25);
        let b = Easing::Power3InOut.apply(0.75);
        assert!((a + b - 1.0).abs() < 1e-5);
    }
}
