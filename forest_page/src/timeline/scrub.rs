//! Scroll-linked transforms: outputs that follow scroll progress directly
//! instead of playing over time.

use crate::page::Region;

/// Progress of `region` through the viewport, from its top touching the
/// viewport bottom (0) to its bottom leaving the viewport top (1).
pub fn region_progress(offset: f32, region: &Region, viewport_height: f32) -> f32 {
    let start = region.top - viewport_height;
    let span = region.height + viewport_height;
    if span <= 0.0 {
        return 0.0;
    }
    ((offset - start) / span).clamp(0.0, 1.0)
}

/// Piecewise-linear map from progress to an output value.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollLinked {
    input: Vec<f32>,
    output: Vec<f32>,
}

impl ScrollLinked {
    /// `input` must be ascending. Extra points on the longer side are
    /// dropped.
    pub fn new(input: &[f32], output: &[f32]) -> Self {
        debug_assert!(input.windows(2).all(|w| w[0] <= w[1]));
        let len = input.len().min(output.len());
        Self {
            input: input[..len].to_vec(),
            output: output[..len].to_vec(),
        }
    }

    pub fn sample(&self, progress: f32) -> f32 {
        let (Some(&first), Some(&last)) = (self.input.first(), self.input.last()) else {
            return 0.0;
        };
        if progress <= first {
            return self.output[0];
        }
        if progress >= last {
            return self.output[self.output.len() - 1];
        }
        let upper = self
            .input
            .iter()
            .position(|&x| x > progress)
            .unwrap_or(self.input.len() - 1);
        let lower = upper - 1;
        let (x0, x1) = (self.input[lower], self.input[upper]);
        let (y0, y1) = (self.output[lower], self.output[upper]);
        if x1 == x0 {
            return y1;
        }
        y0 + (y1 - y0) * (progress - x0) / (x1 - x0)
    }
}

/// The continuous parallax applied to every content section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionParallax {
    pub image_y: ScrollLinked,
    pub opacity: ScrollLinked,
}

impl Default for SectionParallax {
    fn default() -> Self {
        Self {
            image_y: ScrollLinked::new(&[0.0, 1.0], &[100.0, -100.0]),
            opacity: ScrollLinked::new(&[0.0, 0.2, 0.8, 1.0], &[0.0, 1.0, 1.0, 0.0]),
        }
    }
}
