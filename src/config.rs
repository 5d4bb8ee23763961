//! Tuning parameters and variant presets
//!
//! The three animation variants differ only in a handful of constants and in how
//! the bubbles move. Every one of those magic numbers is a named field here,
//! and a preset picks the matching set of defaults. Preferences are persisted
//! separately from simulation state in LocalStorage.

use serde::{Deserialize, Serialize};

/// The three animation variants, oldest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum VariantPreset {
    /// Uncapped orbit radius, orbiting bubbles, no explosion bursts
    Classic,
    /// Clamped orbit radius, orbiting bubbles, bursts on ripple hit
    #[default]
    Pulse,
    /// Clamped orbit radius, free-floating bouncing bubbles
    Drift,
}

impl VariantPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantPreset::Classic => "Classic",
            VariantPreset::Pulse => "Pulse",
            VariantPreset::Drift => "Drift",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(VariantPreset::Classic),
            "pulse" => Some(VariantPreset::Pulse),
            "drift" => Some(VariantPreset::Drift),
            _ => None,
        }
    }

    /// Parse a variant override from a URL query string, e.g. `?preset=drift`
    pub fn from_query(query: &str) -> Option<Self> {
        query
            .strip_prefix('?')
            .unwrap_or(query)
            .split('&')
            .find_map(|pair| pair.strip_prefix("preset="))
            .and_then(Self::from_str)
    }

    /// Whether bubbles drift freely and bounce instead of orbiting
    pub fn floating_bubbles(&self) -> bool {
        matches!(self, VariantPreset::Drift)
    }

    /// Whether a ripple crossing the orbit boundary spawns debris bursts
    pub fn bursts_enabled(&self) -> bool {
        !matches!(self, VariantPreset::Classic)
    }
}

/// Every per-variant constant, named
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    // === Derived geometry ===
    /// Orbit radius as a fraction of the smaller window dimension
    pub orbit_factor: f32,
    /// Clamp applied to the orbit radius, None leaves it uncapped
    pub orbit_bounds: Option<(f32, f32)>,

    // === Ripples ===
    /// Frames between ripple spawns while idle
    pub spawn_rate_idle: u64,
    /// Frames between ripple spawns while the pointer is held down
    pub spawn_rate_pressed: u64,
    /// Diameter growth per frame
    pub ripple_speed: f32,
    /// Diameter a ripple starts at
    pub ripple_seed_diameter: f32,
    /// Alpha fades to zero at max_diameter times this factor
    pub ripple_fade_scale: f32,

    // === Flash ===
    /// Flash intensity set on a ripple hit (clamped to [0, 255])
    pub flash_ceiling: f32,
    /// Flash intensity decay per frame
    pub flash_decay: f32,

    // === Bubbles ===
    /// Number of ambient bubbles
    pub bubble_count: usize,
    /// Hit timer value set when a ripple strikes a bubble
    pub hit_timer_max: f32,
    /// Hit timer decay per frame
    pub hit_timer_decay: f32,
    /// Extra proximity margin in the ripple/bubble collision test
    pub collision_margin: f32,

    // === Dust ===
    /// Number of background dust motes
    pub dust_count: usize,
    /// Velocity scale applied when dust bounces back at the half-diagonal
    pub dust_damping: f32,

    // === Debris ===
    /// Per-frame velocity multiplier for explosion debris
    pub debris_drag: f32,
    /// Lifespan lost per frame (out of 255)
    pub debris_fade: f32,

    // === Scene dressing ===
    /// Radial spokes around the hub (also the burst anchor count)
    pub spoke_count: usize,
    /// Concentric orbit track rings
    pub track_count: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            orbit_factor: 0.35,
            orbit_bounds: Some((120.0, 350.0)),
            spawn_rate_idle: 60,
            spawn_rate_pressed: 15,
            ripple_speed: 10.0,
            ripple_seed_diameter: 50.0,
            ripple_fade_scale: 1.1,
            flash_ceiling: 150.0,
            flash_decay: 5.0,
            bubble_count: 9,
            hit_timer_max: 90.0,
            hit_timer_decay: 2.0,
            collision_margin: 4.0,
            dust_count: 40,
            dust_damping: 0.8,
            debris_drag: 0.95,
            debris_fade: 3.0,
            spoke_count: 5,
            track_count: 10,
        }
    }
}

impl Tuning {
    /// Tuning values matching a given variant
    pub fn for_preset(preset: VariantPreset) -> Self {
        let mut t = Self::default();
        match preset {
            VariantPreset::Classic => {
                t.orbit_factor = 0.3;
                t.orbit_bounds = None;
                t.bubble_count = 7;
                t.dust_count = 30;
            }
            VariantPreset::Pulse => {}
            VariantPreset::Drift => {
                t.collision_margin = 6.0;
            }
        }
        t
    }
}

/// User-facing configuration, persisted across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active animation variant
    pub preset: VariantPreset,
    /// Tuning values (preset defaults unless the user overrode them)
    pub tuning: Tuning,
}

impl Default for Config {
    fn default() -> Self {
        let preset = VariantPreset::default();
        Self {
            preset,
            tuning: Tuning::for_preset(preset),
        }
    }
}

impl Config {
    /// Config for a specific variant
    pub fn for_preset(preset: VariantPreset) -> Self {
        Self {
            preset,
            tuning: Tuning::for_preset(preset),
        }
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "echo_orbit_config";

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(config) = serde_json::from_str(&json) {
                    log::info!("Loaded config from LocalStorage");
                    return config;
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Save config to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Config saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
