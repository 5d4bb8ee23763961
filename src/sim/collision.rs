//! Ripple/bubble proximity detection
//!
//! A ripple is a thin expanding ring; a bubble is struck when its center
//! sits within the ring band, padded by half the bubble size plus a tuned
//! margin. Both motion modes reduce to the same radial band test because
//! bubble positions are center-relative.

use glam::Vec2;

use super::state::{Bubble, Ripple};

/// Distance from the scene center used for the band test
#[inline]
pub fn radial_distance(pos: Vec2) -> f32 {
    pos.length()
}

/// True when a point at `dist` from center lies within the ripple's ring band
pub fn ring_band_contains(ripple: &Ripple, dist: f32, pad: f32) -> bool {
    (dist - ripple.radius()).abs() < pad + ripple.stroke_width
}

/// True when `ripple` passes through `bubble` this frame
pub fn ripple_strikes_bubble(ripple: &Ripple, bubble: &Bubble, margin: f32) -> bool {
    let dist = radial_distance(bubble.pos);
    ring_band_contains(ripple, dist, bubble.size / 2.0 + margin)
}
