//! Scene state and entity types
//!
//! All entities are owned exclusively by the per-kind collections in
//! [`SceneState`]; nothing aliases across collections. The state is advanced
//! once per display frame by [`crate::sim::tick`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::geometry::{Viewport, map_clamped};
use crate::config::Config;
use crate::consts::*;
use crate::polar_to_cartesian;

/// An expanding ring signaling an event wave from the center outward
#[derive(Debug, Clone, PartialEq)]
pub struct Ripple {
    /// Current diameter, grows by `speed` each frame
    pub diameter: f32,
    /// Diameter growth per frame
    pub speed: f32,
    /// Stroke width, derived from speed at spawn time
    pub stroke_width: f32,
    /// 255 at the orbit boundary, fading to 0 at the fade horizon
    pub alpha: f32,
    /// Latched the first frame the radius reaches the orbit boundary
    pub has_hit: bool,
}

impl Ripple {
    pub fn new(speed: f32, seed_diameter: f32) -> Self {
        Self {
            diameter: seed_diameter,
            speed,
            stroke_width: if speed > 10.0 { 5.0 } else { 2.0 },
            alpha: 255.0,
            has_hit: false,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }

    /// Grow one frame and recompute the fade-out alpha
    pub fn advance(&mut self, viewport: &Viewport, fade_scale: f32) {
        self.diameter += self.speed;
        self.alpha = map_clamped(
            self.diameter,
            viewport.orbit_radius,
            viewport.max_diameter * fade_scale,
            255.0,
            0.0,
        );
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.alpha <= 0.0
    }
}

/// How a bubble moves, fixed at construction by the variant preset
#[derive(Debug, Clone, PartialEq)]
pub enum BubbleMotion {
    /// Constant signed angular velocity around the hub, with a sinusoidal
    /// wobble on the orbital distance
    Orbiting {
        angle: f32,
        base_distance: f32,
        angular_speed: f32,
    },
    /// Straight-line drift with elastic reflection at the window half-extents
    Floating { velocity: Vec2 },
}

/// An ambient moving dot that flashes red when a ripple passes through it
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    /// Center-relative position, recomputed from the motion state each frame
    pub pos: Vec2,
    pub motion: BubbleMotion,
    pub size: f32,
    pub base_alpha: f32,
    /// Counts down from the configured maximum once struck, floored at 0
    pub hit_timer: f32,
}

impl Bubble {
    #[inline]
    pub fn is_struck(&self) -> bool {
        self.hit_timer > 0.0
    }
}

/// Background ambient mote, bounded by the half-diagonal
#[derive(Debug, Clone, PartialEq)]
pub struct Dust {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub alpha: f32,
}

/// Explosion debris, spawned in bursts of [`BURST_COUNT`]
#[derive(Debug, Clone, PartialEq)]
pub struct Debris {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// 255 down to 0, entity purged once negative
    pub lifespan: f32,
}

impl Debris {
    /// Apply drag, integrate position, burn lifespan
    pub fn advance(&mut self, drag: f32, fade: f32) {
        self.vel *= drag;
        self.pos += self.vel;
        self.lifespan -= fade;
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.lifespan < 0.0
    }
}

/// Complete animation state, owned by the frame loop
#[derive(Debug, Clone)]
pub struct SceneState {
    /// Seed the scene was built from
    pub seed: u64,
    /// Frame counter, drives every cadence predicate
    pub frame: u64,
    /// Hub rotation phase
    pub angle: f32,
    /// Current smoothed rotation rate (radians per frame)
    pub spin_rate: f32,
    /// Decaying hit-glow scalar in [0, 255]
    pub flash_intensity: f32,
    pub viewport: Viewport,
    pub ripples: Vec<Ripple>,
    pub bubbles: Vec<Bubble>,
    pub dust: Vec<Dust>,
    pub debris: Vec<Debris>,
    pub(crate) rng: Pcg32,
}

impl SceneState {
    /// Build a fresh scene: viewport geometry plus the ambient populations
    pub fn new(seed: u64, width: f32, height: f32, config: &Config) -> Self {
        let viewport = Viewport::new(width, height, &config.tuning);
        let mut rng = Pcg32::seed_from_u64(seed);

        let bubbles = (0..config.tuning.bubble_count)
            .map(|_| spawn_bubble(&mut rng, &viewport, config))
            .collect();
        let dust = (0..config.tuning.dust_count)
            .map(|_| spawn_dust(&mut rng, &viewport))
            .collect();

        Self {
            seed,
            frame: 0,
            angle: 0.0,
            spin_rate: BASE_SPIN_RATE,
            flash_intensity: 0.0,
            viewport,
            ripples: Vec::new(),
            bubbles,
            dust,
            debris: Vec::new(),
            rng,
        }
    }

    /// Rederive geometry for a new surface size; entity state is untouched
    pub fn resize(&mut self, width: f32, height: f32, config: &Config) {
        self.viewport.resize(width, height, &config.tuning);
    }

    /// Append a burst of debris particles at a point
    pub fn spawn_burst(&mut self, at: Vec2) {
        for _ in 0..BURST_COUNT {
            let theta = self.rng.random_range(0.0..std::f32::consts::TAU);
            let speed = self.rng.random_range(3.0..7.0);
            self.debris.push(Debris {
                pos: at,
                vel: polar_to_cartesian(speed, theta),
                size: self.rng.random_range(5.0..9.0),
                lifespan: 255.0,
            });
        }
    }
}

fn spawn_bubble(rng: &mut Pcg32, viewport: &Viewport, config: &Config) -> Bubble {
    let size = rng.random_range(6.0..14.0);
    let base_alpha = rng.random_range(120.0..200.0);

    if config.preset.floating_bubbles() {
        let half_w = viewport.width / 2.0 - size / 2.0;
        let half_h = viewport.height / 2.0 - size / 2.0;
        let speed = rng.random_range(0.5..2.0);
        let dir = rng.random_range(0.0..std::f32::consts::TAU);
        Bubble {
            pos: Vec2::new(
                rng.random_range(-half_w..half_w),
                rng.random_range(-half_h..half_h),
            ),
            motion: BubbleMotion::Floating {
                velocity: polar_to_cartesian(speed, dir),
            },
            size,
            base_alpha,
            hit_timer: 0.0,
        }
    } else {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let base_distance = viewport.orbit_radius * rng.random_range(0.35..1.0);
        let magnitude = rng.random_range(0.005..0.02);
        let angular_speed = if rng.random_bool(0.5) {
            magnitude
        } else {
            -magnitude
        };
        Bubble {
            pos: polar_to_cartesian(base_distance, angle),
            motion: BubbleMotion::Orbiting {
                angle,
                base_distance,
                angular_speed,
            },
            size,
            base_alpha,
            hit_timer: 0.0,
        }
    }
}

fn spawn_dust(rng: &mut Pcg32, viewport: &Viewport) -> Dust {
    // Uniform over the visible disk
    let r = viewport.half_diagonal() * rng.random_range(0.0f32..1.0).sqrt();
    let theta = rng.random_range(0.0..std::f32::consts::TAU);
    let drift = rng.random_range(0.1..0.5);
    let drift_dir = rng.random_range(0.0..std::f32::consts::TAU);
    Dust {
        pos: polar_to_cartesian(r, theta),
        vel: polar_to_cartesian(drift, drift_dir),
        size: rng.random_range(1.0..3.0),
        alpha: rng.random_range(40.0..120.0),
    }
}
