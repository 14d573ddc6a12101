// Frame timing and the values pushed to the heart shader.
//
// Kept free of browser types so the arithmetic can be exercised on the host.

use std::time::Duration;

/// Window size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build from the `f64` values reported by `window.innerWidth/innerHeight`.
    /// Negative or non-finite input collapses to zero.
    pub fn from_inner(width: f64, height: f64) -> Self {
        let clamp = |v: f64| {
            if v.is_finite() && v > 0.0 {
                v as u32
            } else {
                0
            }
        };
        Self {
            width: clamp(width),
            height: clamp(height),
        }
    }
}

/// Seconds of animation time, grown by the wall-clock delta of each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    elapsed: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one frame's delta and return the new total.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed += dt.as_secs_f32();
        self.elapsed
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

/// Scalar uniforms consumed by the fragment stage, exactly as uploaded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameUniforms {
    pub time: f32,
    pub width: f32,
    pub height: f32,
}

impl FrameUniforms {
    pub fn new(time: f32, viewport: Viewport) -> Self {
        Self {
            time,
            width: viewport.width as f32,
            height: viewport.height as f32,
        }
    }
}
