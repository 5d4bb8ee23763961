//! Deterministic simulation module
//!
//! All animation logic lives here. This module must stay pure and
//! deterministic:
//! - One fixed step per display frame
//! - Seeded RNG only
//! - Fixed per-kind update order (ripples, bubbles, dust, debris)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;

pub use collision::{ring_band_contains, ripple_strikes_bubble};
pub use geometry::{Viewport, lerp, map_clamped};
pub use state::{Bubble, BubbleMotion, Debris, Dust, Ripple, SceneState};
pub use tick::{SceneEvent, TickInput, cadence_due, tick};
