//! Echo Orbit - a hub-and-orbit generative sonar animation
//!
//! Core modules:
//! - `sim`: Deterministic per-frame simulation (ripples, bubbles, dust, debris)
//! - `renderer`: WebGPU rendering pipeline with motion-trail accumulation
//! - `config`: Named tuning parameters and variant presets
//! - `ui`: Button hit regions, hover state, tooltip layout
//! - `audio`: WebAudio channel rack (wasm only)

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod config;
pub mod renderer;
pub mod sim;
pub mod ui;

pub use config::{Config, Tuning, VariantPreset};
pub use sim::{SceneState, TickInput};

use glam::Vec2;

/// Shared animation constants
pub mod consts {
    /// Hub rotation rate at rest (radians per frame)
    pub const BASE_SPIN_RATE: f32 = 0.01;
    /// Hub rotation rate while the pointer is held below the UI strip
    pub const PRESSED_SPIN_RATE: f32 = 0.04;
    /// Smoothing factor pulling the spin rate toward its target
    pub const SPIN_LERP: f32 = 0.05;

    /// Flash intensity decay per frame
    pub const FLASH_DECAY: f32 = 5.0;

    /// Debris particles per explosion burst
    pub const BURST_COUNT: usize = 12;

    /// Heartbeat cue interval in frames
    pub const HEARTBEAT_INTERVAL: u64 = 60;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
