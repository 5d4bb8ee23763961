//! Per-frame scene update
//!
//! One call per display refresh. Fixed order within a frame: spawn cadence,
//! then ripples, bubbles, dust, debris, then the global decays. The update is
//! pure with respect to the platform; anything the host should sonify comes
//! back as [`SceneEvent`]s.

use std::f32::consts::TAU;

use glam::Vec2;

use super::collision::ripple_strikes_bubble;
use super::geometry::lerp;
use super::state::{BubbleMotion, Ripple, SceneState};
use crate::config::Config;
use crate::consts::*;
use crate::polar_to_cartesian;

/// Pointer facts the simulation cares about, precomputed by the UI layer
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer held down outside the reserved UI rectangle (drives the
    /// faster ripple spawn cadence)
    pub pressed_outside_ui: bool,
    /// Pointer held down below the UI-exempt strip (drives the hub spin-up)
    pub pressed_below_ui: bool,
}

/// Something that happened this frame which the host may turn into sound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    /// A ripple reached the orbit boundary for the first time
    RippleHit,
    /// A bubble transitioned from calm to struck
    BubbleStruck,
    /// The heartbeat cadence elapsed
    Heartbeat,
}

/// Pure cadence predicate: does an interval elapse on this frame?
#[inline]
pub fn cadence_due(frame: u64, interval: u64) -> bool {
    interval > 0 && frame % interval == 0
}

/// Sinusoidal perturbation of an orbiting bubble's distance
const WOBBLE_FREQ: f32 = 0.05;
const WOBBLE_AMP: f32 = 6.0;
const WOBBLE_PHASE_SCALE: f32 = 3.0;

/// Advance the scene by one frame
pub fn tick(state: &mut SceneState, input: &TickInput, config: &Config) -> Vec<SceneEvent> {
    let tuning = &config.tuning;
    let mut events = Vec::new();

    state.frame += 1;

    // --- Ripple spawn cadence ---
    let spawn_rate = if input.pressed_outside_ui {
        tuning.spawn_rate_pressed
    } else {
        tuning.spawn_rate_idle
    };
    if cadence_due(state.frame, spawn_rate) {
        state
            .ripples
            .push(Ripple::new(tuning.ripple_speed, tuning.ripple_seed_diameter));
    }

    // --- Ripples: grow, fade, latch the boundary hit ---
    let mut burst_points: Vec<Vec2> = Vec::new();
    let orbit_radius = state.viewport.orbit_radius;
    for ripple in &mut state.ripples {
        ripple.advance(&state.viewport, tuning.ripple_fade_scale);

        if !ripple.has_hit && ripple.radius() >= orbit_radius {
            ripple.has_hit = true;
            state.flash_intensity = tuning.flash_ceiling.clamp(0.0, 255.0);
            events.push(SceneEvent::RippleHit);

            if config.preset.bursts_enabled() {
                for i in 0..tuning.spoke_count {
                    let theta = state.angle + (TAU / tuning.spoke_count as f32) * i as f32;
                    burst_points.push(polar_to_cartesian(orbit_radius, theta));
                }
            }
        }
    }
    state.ripples.retain(|r| !r.is_finished());
    for point in burst_points {
        state.spawn_burst(point);
    }

    // --- Bubbles: move, then test against every active ripple ---
    let frame = state.frame;
    let half_w = state.viewport.width / 2.0;
    let half_h = state.viewport.height / 2.0;
    for bubble in &mut state.bubbles {
        bubble.hit_timer = (bubble.hit_timer - tuning.hit_timer_decay).max(0.0);

        match &mut bubble.motion {
            BubbleMotion::Orbiting {
                angle,
                base_distance,
                angular_speed,
            } => {
                *angle += *angular_speed;
                let wobble =
                    (frame as f32 * WOBBLE_FREQ + *angle * WOBBLE_PHASE_SCALE).sin() * WOBBLE_AMP;
                bubble.pos = polar_to_cartesian(*base_distance + wobble, *angle);
            }
            BubbleMotion::Floating { velocity } => {
                bubble.pos += *velocity;
                let limit_x = half_w - bubble.size / 2.0;
                let limit_y = half_h - bubble.size / 2.0;
                if bubble.pos.x.abs() > limit_x {
                    velocity.x = -velocity.x;
                    bubble.pos.x = bubble.pos.x.clamp(-limit_x, limit_x);
                }
                if bubble.pos.y.abs() > limit_y {
                    velocity.y = -velocity.y;
                    bubble.pos.y = bubble.pos.y.clamp(-limit_y, limit_y);
                }
            }
        }

        let was_calm = bubble.hit_timer <= 0.0;
        for ripple in &state.ripples {
            if ripple_strikes_bubble(ripple, bubble, tuning.collision_margin) {
                // Re-triggerable, never cumulative
                bubble.hit_timer = tuning.hit_timer_max;
            }
        }
        if was_calm && bubble.is_struck() {
            events.push(SceneEvent::BubbleStruck);
        }
    }

    // --- Dust: drift, bounce back inside the half-diagonal ---
    let bound = state.viewport.half_diagonal();
    for mote in &mut state.dust {
        mote.pos += mote.vel;
        let dist = mote.pos.length();
        if dist > bound {
            mote.vel = -mote.vel * tuning.dust_damping;
            mote.pos *= bound / dist;
        }
    }

    // --- Debris: drag, integrate, burn out ---
    for d in &mut state.debris {
        d.advance(tuning.debris_drag, tuning.debris_fade);
    }
    state.debris.retain(|d| !d.is_finished());

    // --- Global frame state ---
    let target_rate = if input.pressed_below_ui {
        PRESSED_SPIN_RATE
    } else {
        BASE_SPIN_RATE
    };
    state.spin_rate = lerp(state.spin_rate, target_rate, SPIN_LERP);
    state.angle = (state.angle + state.spin_rate).rem_euclid(TAU);

    state.flash_intensity = (state.flash_intensity - tuning.flash_decay).clamp(0.0, 255.0);

    if cadence_due(state.frame, HEARTBEAT_INTERVAL) {
        events.push(SceneEvent::Heartbeat);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VariantPreset;

    /// Config with a fixed 200 px orbit radius and no ambient entities, so
    /// ripple arithmetic is easy to follow
    fn bare_config() -> Config {
        let mut config = Config::for_preset(VariantPreset::Pulse);
        config.tuning.orbit_bounds = Some((200.0, 200.0));
        config.tuning.bubble_count = 0;
        config.tuning.dust_count = 0;
        config
    }

    fn bare_state(config: &Config) -> SceneState {
        SceneState::new(1, 800.0, 600.0, config)
    }

    #[test]
    fn test_ripple_hits_orbit_after_exact_step_count() {
        let config = bare_config();
        let mut state = bare_state(&config);
        state.ripples.push(Ripple::new(10.0, 50.0));

        // (400 - 50) / 10 = 35 growth steps to reach radius 200
        let mut hit_events = 0;
        for step in 1..=35 {
            let events = tick(&mut state, &TickInput::default(), &config);
            hit_events += events
                .iter()
                .filter(|e| **e == SceneEvent::RippleHit)
                .count();
            if step < 35 {
                assert!(!state.ripples[0].has_hit, "no hit before step 35");
                assert_eq!(hit_events, 0);
            }
        }
        assert!(state.ripples[0].has_hit);
        assert_eq!(hit_events, 1);
        assert_eq!(state.flash_intensity, config.tuning.flash_ceiling - config.tuning.flash_decay);
    }

    #[test]
    fn test_has_hit_latches_once() {
        let config = bare_config();
        let mut state = bare_state(&config);
        state.ripples.push(Ripple::new(10.0, 450.0)); // already past the boundary

        let first = tick(&mut state, &TickInput::default(), &config);
        assert_eq!(
            first
                .iter()
                .filter(|e| **e == SceneEvent::RippleHit)
                .count(),
            1
        );
        let second = tick(&mut state, &TickInput::default(), &config);
        assert!(!second.contains(&SceneEvent::RippleHit));
    }

    #[test]
    fn test_hit_triggers_burst_at_spoke_anchors() {
        let config = bare_config();
        let mut state = bare_state(&config);
        state.ripples.push(Ripple::new(10.0, 390.0));

        tick(&mut state, &TickInput::default(), &config);
        assert!(state.ripples[0].has_hit);
        assert_eq!(
            state.debris.len(),
            config.tuning.spoke_count * BURST_COUNT
        );
        // Debris spawn on the boundary and take their first integration
        // step the same frame, so they sit within one burst-speed of it
        for d in &state.debris {
            assert!((d.pos.length() - 200.0).abs() <= 7.0);
        }
    }

    #[test]
    fn test_classic_preset_skips_bursts() {
        let mut config = Config::for_preset(VariantPreset::Classic);
        config.tuning.orbit_bounds = Some((200.0, 200.0));
        config.tuning.bubble_count = 0;
        config.tuning.dust_count = 0;
        let mut state = bare_state(&config);
        state.ripples.push(Ripple::new(10.0, 390.0));

        tick(&mut state, &TickInput::default(), &config);
        assert!(state.ripples[0].has_hit);
        assert!(state.debris.is_empty());
    }

    #[test]
    fn test_finished_ripple_removed_without_disturbing_neighbors() {
        let config = bare_config();
        let mut state = bare_state(&config);
        // First ripple is a step away from fully faded (horizon is
        // max_diameter * 1.1 = 1100); the second is mid-flight.
        state.ripples.push(Ripple::new(10.0, 1095.0));
        state.ripples.push(Ripple::new(10.0, 300.0));
        state.ripples[0].has_hit = true;
        state.ripples[1].has_hit = true;

        tick(&mut state, &TickInput::default(), &config);
        assert_eq!(state.ripples.len(), 1);
        assert_eq!(state.ripples[0].diameter, 310.0);
        assert!(state.ripples[0].alpha > 0.0);
    }

    #[test]
    fn test_spawn_cadence_pressed_vs_idle() {
        let config = bare_config();

        let mut idle = bare_state(&config);
        for _ in 0..60 {
            tick(&mut idle, &TickInput::default(), &config);
        }
        assert_eq!(idle.ripples.len(), 1); // frame 60 only

        let mut pressed = bare_state(&config);
        let input = TickInput {
            pressed_outside_ui: true,
            pressed_below_ui: true,
        };
        for _ in 0..60 {
            tick(&mut pressed, &input, &config);
        }
        assert_eq!(pressed.ripples.len(), 4); // frames 15, 30, 45, 60
    }

    #[test]
    fn test_hit_timer_reaches_zero_in_45_steps() {
        let mut config = bare_config();
        config.tuning.bubble_count = 1;
        let mut state = bare_state(&config);

        state.bubbles[0].hit_timer = 90.0;
        for step in 1..=45 {
            tick(&mut state, &TickInput::default(), &config);
            let expected = 90.0 - 2.0 * step as f32;
            assert_eq!(state.bubbles[0].hit_timer, expected.max(0.0));
        }
        assert_eq!(state.bubbles[0].hit_timer, 0.0);
    }

    #[test]
    fn test_retrigger_resets_timer_never_exceeds_max() {
        let mut config = bare_config();
        config.tuning.bubble_count = 1;
        let mut state = bare_state(&config);

        // Park a huge slow ripple band right on top of the bubble so every
        // frame re-triggers.
        let dist = state.bubbles[0].pos.length();
        let mut ripple = Ripple::new(0.0, dist * 2.0);
        ripple.stroke_width = 50.0;
        ripple.has_hit = true;
        state.ripples.push(ripple);

        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), &config);
            assert_eq!(state.bubbles[0].hit_timer, 90.0);
        }
    }

    #[test]
    fn test_floating_bubble_reflects_at_half_extent_minus_radius() {
        use crate::sim::state::Bubble;

        let mut config = Config::for_preset(VariantPreset::Drift);
        config.tuning.orbit_bounds = Some((200.0, 200.0));
        config.tuning.bubble_count = 0;
        config.tuning.dust_count = 0;
        let mut state = bare_state(&config);
        state.bubbles.push(Bubble {
            pos: Vec2::new(393.0, 0.0),
            motion: BubbleMotion::Floating {
                velocity: Vec2::new(1.0, 0.0),
            },
            size: 10.0,
            base_alpha: 150.0,
            hit_timer: 0.0,
        });

        // Reflection limit is half-width minus the radius: 400 - 5 = 395,
        // so x = 394 is still legal free flight
        tick(&mut state, &TickInput::default(), &config);
        assert_eq!(state.bubbles[0].pos.x, 394.0);

        // Two more steps cross the limit: clamp to it and reverse
        tick(&mut state, &TickInput::default(), &config);
        tick(&mut state, &TickInput::default(), &config);
        assert_eq!(state.bubbles[0].pos.x, 395.0);
        match state.bubbles[0].motion {
            BubbleMotion::Floating { velocity } => assert_eq!(velocity.x, -1.0),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_dust_bounces_back_inside_half_diagonal() {
        use crate::sim::state::Dust;

        let config = bare_config();
        let mut state = bare_state(&config);
        // Half-diagonal of 800x600 is 500; this mote crosses it this frame
        state.dust.push(Dust {
            pos: Vec2::new(499.0, 0.0),
            vel: Vec2::new(2.0, 0.0),
            size: 2.0,
            alpha: 80.0,
        });

        tick(&mut state, &TickInput::default(), &config);
        let mote = &state.dust[0];
        assert!((mote.pos.length() - 500.0).abs() < 0.001);
        assert_eq!(mote.vel.x, -2.0 * config.tuning.dust_damping);
    }

    #[test]
    fn test_resize_preserves_entities() {
        let config = Config::default();
        let mut state = SceneState::new(5, 800.0, 600.0, &config);
        state.ripples.push(Ripple::new(10.0, 120.0));
        let bubbles_before = state.bubbles.clone();
        let dust_before = state.dust.clone();

        state.resize(1200.0, 800.0, &config);
        assert_eq!(state.bubbles, bubbles_before);
        assert_eq!(state.dust, dust_before);
        assert_eq!(state.ripples.len(), 1);
        assert!((state.viewport.orbit_radius - (800.0f32 * 0.35).clamp(120.0, 350.0)).abs() < 0.001);
    }

    #[test]
    fn test_heartbeat_every_60_frames() {
        let config = bare_config();
        let mut state = bare_state(&config);
        let mut beats = 0;
        for _ in 0..180 {
            if tick(&mut state, &TickInput::default(), &config).contains(&SceneEvent::Heartbeat) {
                beats += 1;
            }
        }
        assert_eq!(beats, 3);
    }

    #[test]
    fn test_spin_rate_accelerates_toward_pressed_target() {
        let config = bare_config();
        let mut state = bare_state(&config);
        let input = TickInput {
            pressed_outside_ui: true,
            pressed_below_ui: true,
        };
        for _ in 0..200 {
            tick(&mut state, &input, &config);
        }
        assert!((state.spin_rate - PRESSED_SPIN_RATE).abs() < 0.001);

        for _ in 0..200 {
            tick(&mut state, &TickInput::default(), &config);
        }
        assert!((state.spin_rate - BASE_SPIN_RATE).abs() < 0.001);
    }

    mod invariants {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Flash, ripple alpha, hit timers, dust containment, and the
            /// floating-bubble bounds hold for any run length, any press
            /// pattern, and both motion modes.
            #[test]
            fn ranges_hold_under_arbitrary_input(
                steps in 1usize..600,
                press_mask in any::<u64>(),
                seed in any::<u64>(),
                floating in any::<bool>(),
            ) {
                let preset = if floating {
                    VariantPreset::Drift
                } else {
                    VariantPreset::Pulse
                };
                let mut config = Config::for_preset(preset);
                config.tuning.bubble_count = 4;
                config.tuning.dust_count = 8;
                let mut state = SceneState::new(seed, 800.0, 600.0, &config);

                for step in 0..steps {
                    let pressed = press_mask >> (step % 64) & 1 == 1;
                    let input = TickInput {
                        pressed_outside_ui: pressed,
                        pressed_below_ui: pressed,
                    };
                    tick(&mut state, &input, &config);

                    prop_assert!((0.0..=255.0).contains(&state.flash_intensity));
                    for ripple in &state.ripples {
                        prop_assert!((0.0..=255.0).contains(&ripple.alpha));
                    }
                    for bubble in &state.bubbles {
                        prop_assert!(bubble.hit_timer >= 0.0);
                        prop_assert!(bubble.hit_timer <= config.tuning.hit_timer_max);
                    }
                    // Past the boundary implies the latch is set
                    for ripple in &state.ripples {
                        if ripple.radius() >= state.viewport.orbit_radius {
                            prop_assert!(ripple.has_hit);
                        }
                    }
                    // Dust never escapes the half-diagonal
                    let bound = state.viewport.half_diagonal();
                    for mote in &state.dust {
                        prop_assert!(mote.pos.length() <= bound + 1e-3);
                    }
                    // Floating bubbles stay inside the reflection limits
                    for bubble in &state.bubbles {
                        if let BubbleMotion::Floating { .. } = bubble.motion {
                            let limit_x = state.viewport.width / 2.0 - bubble.size / 2.0;
                            let limit_y = state.viewport.height / 2.0 - bubble.size / 2.0;
                            prop_assert!(bubble.pos.x.abs() <= limit_x + 1e-3);
                            prop_assert!(bubble.pos.y.abs() <= limit_y + 1e-3);
                        }
                    }
                }
            }
        }
    }
}
