//! Window-derived geometry
//!
//! The orbit radius and the fade-out horizon both derive from the host
//! surface size. They are recomputed on every resize without touching any
//! entity state.

use serde::{Deserialize, Serialize};

use crate::config::Tuning;

/// Host surface dimensions plus the values derived from them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Boundary distance at which ripples trigger a hit
    pub orbit_radius: f32,
    /// Window diagonal, the diameter at which ripples have left the screen
    pub max_diameter: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, tuning: &Tuning) -> Self {
        let mut vp = Self {
            width,
            height,
            orbit_radius: 0.0,
            max_diameter: 0.0,
        };
        vp.recompute(tuning);
        vp
    }

    /// Apply a new surface size and rederive the geometry
    pub fn resize(&mut self, width: f32, height: f32, tuning: &Tuning) {
        self.width = width;
        self.height = height;
        self.recompute(tuning);
    }

    fn recompute(&mut self, tuning: &Tuning) {
        let mut r = self.width.min(self.height) * tuning.orbit_factor;
        if let Some((lo, hi)) = tuning.orbit_bounds {
            r = r.clamp(lo, hi);
        }
        self.orbit_radius = r;
        self.max_diameter = (self.width * self.width + self.height * self.height).sqrt();
    }

    /// Half the window diagonal, the dust containment radius
    #[inline]
    pub fn half_diagonal(&self) -> f32 {
        self.max_diameter / 2.0
    }

    /// Scene center in screen coordinates
    #[inline]
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Linear map of `value` from [in_lo, in_hi] to [out_lo, out_hi], clamped to
/// the output range. Works with a descending output range.
pub fn map_clamped(value: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    if (in_hi - in_lo).abs() < f32::EPSILON {
        return out_lo;
    }
    let t = ((value - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo + t * (out_hi - out_lo)
}

/// Linear interpolation
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VariantPreset;

    #[test]
    fn test_uncapped_orbit_radius() {
        let tuning = Tuning::for_preset(VariantPreset::Classic);
        let vp = Viewport::new(800.0, 600.0, &tuning);
        assert!((vp.orbit_radius - 600.0 * 0.3).abs() < 0.001);
        assert!((vp.max_diameter - 1000.0).abs() < 0.001);
    }

    #[test]
    fn test_clamped_orbit_radius() {
        let tuning = Tuning::default();
        // 0.35 * 300 = 105, below the lower bound of 120
        let small = Viewport::new(400.0, 300.0, &tuning);
        assert!((small.orbit_radius - 120.0).abs() < 0.001);
        // 0.35 * 2000 = 700, above the upper bound of 350
        let large = Viewport::new(2400.0, 2000.0, &tuning);
        assert!((large.orbit_radius - 350.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_recomputes_deterministically() {
        let tuning = Tuning::default();
        let mut vp = Viewport::new(800.0, 600.0, &tuning);
        vp.resize(1200.0, 800.0, &tuning);
        assert!((vp.orbit_radius - (800.0f32 * 0.35).clamp(120.0, 350.0)).abs() < 0.001);
        let expected = (1200.0f32 * 1200.0 + 800.0 * 800.0).sqrt();
        assert!((vp.max_diameter - expected).abs() < 0.01);
    }

    #[test]
    fn test_map_clamped() {
        // Mid-domain, descending range
        assert!((map_clamped(150.0, 100.0, 200.0, 255.0, 0.0) - 127.5).abs() < 0.001);
        // Below the domain clamps to the start of the range
        assert!((map_clamped(50.0, 100.0, 200.0, 255.0, 0.0) - 255.0).abs() < 0.001);
        // Past the domain clamps to the end
        assert!(map_clamped(300.0, 100.0, 200.0, 255.0, 0.0).abs() < 0.001);
        // Degenerate domain
        assert!((map_clamped(5.0, 1.0, 1.0, 10.0, 20.0) - 10.0).abs() < 0.001);
    }
}
