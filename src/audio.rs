//! Audio system using Web Audio API
//!
//! Procedurally generated soundscape - no external files needed. Two looping
//! beds (ambient drone, movement shimmer) run behind one-shot cues. Browsers
//! only allow audio after a user gesture, so the beds start on the first
//! pointer-down and the rack is silent until then.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

/// Per-channel gain levels
const AMBIENT_LEVEL: f32 = 0.08;
const MOVEMENT_LEVEL: f32 = 0.2;
const INTERACTION_LEVEL: f32 = 0.8;
const HEARTBEAT_LEVEL: f32 = 0.8;
const BUTTON_LEVEL: f32 = 0.2;

/// One-shot sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Pointer-down on the open canvas
    Interaction,
    /// Periodic pulse, fired on a frame cadence
    Heartbeat,
    /// Mute button click
    ButtonClick,
}

/// A looping bed: oscillators run until dropped, the gain node is the
/// mute/unmute handle
struct Bed {
    gain: GainNode,
    level: f32,
}

/// Audio manager for the animation
pub struct AudioRack {
    ctx: Option<AudioContext>,
    beds: Vec<Bed>,
    started: bool,
    muted: bool,
}

impl Default for AudioRack {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioRack {
    pub fn new() -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            beds: Vec::new(),
            started: false,
            muted: false,
        }
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Mute/unmute: beds are rescaled in place, cues are gated in `play`
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        for bed in &self.beds {
            let level = if muted { 0.0 } else { bed.level };
            bed.gain.gain().set_value(level);
        }
    }

    /// Start the looping beds. Safe to call every pointer-down; only the
    /// first unmuted call does anything.
    pub fn ensure_started(&mut self) {
        if self.muted {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        if self.started {
            return;
        }
        self.started = true;

        // Ambient drone: two detuned sines sharing the channel level
        let mut ambient = Vec::new();
        for freq in [55.0, 82.5] {
            if let Some((osc, gain)) =
                create_osc(ctx, freq, OscillatorType::Sine)
            {
                gain.gain().set_value(AMBIENT_LEVEL / 2.0);
                osc.start().ok();
                ambient.push(Bed {
                    gain,
                    level: AMBIENT_LEVEL / 2.0,
                });
            }
        }

        // Movement shimmer: soft triangle a couple of octaves up
        if let Some((osc, gain)) = create_osc(ctx, 220.0, OscillatorType::Triangle) {
            gain.gain().set_value(MOVEMENT_LEVEL);
            osc.start().ok();
            ambient.push(Bed {
                gain,
                level: MOVEMENT_LEVEL,
            });
        }

        self.beds = ambient;
        log::info!("Audio beds started");
    }

    /// Play a one-shot cue
    pub fn play(&self, cue: Cue) {
        if self.muted && cue != Cue::ButtonClick {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match cue {
            Cue::Interaction => self.play_interaction(ctx),
            Cue::Heartbeat => self.play_heartbeat(ctx),
            Cue::ButtonClick => self.play_button_click(ctx),
        }
    }

    /// Interaction - bright ping sweeping down
    fn play_interaction(&self, ctx: &AudioContext) {
        let Some((osc, gain)) = create_osc(ctx, 600.0, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(INTERACTION_LEVEL * 0.4, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.3)
            .ok();
        osc.frequency().set_value_at_time(600.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(200.0, t + 0.3)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.35).ok();
    }

    /// Heartbeat - two low thumps
    fn play_heartbeat(&self, ctx: &AudioContext) {
        for (i, delay) in [0.0, 0.18].iter().enumerate() {
            let Some((osc, gain)) = create_osc(ctx, 70.0, OscillatorType::Sine) else {
                continue;
            };
            let t = ctx.current_time() + delay;
            let level = HEARTBEAT_LEVEL * if i == 0 { 0.4 } else { 0.3 };

            gain.gain().set_value_at_time(level, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.12)
                .ok();
            osc.frequency().set_value_at_time(70.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(40.0, t + 0.12)
                .ok();

            osc.start_with_when(t).ok();
            osc.stop_with_when(t + 0.15).ok();
        }
    }

    /// Button click - short tap
    fn play_button_click(&self, ctx: &AudioContext) {
        let Some((osc, gain)) = create_osc(ctx, 300.0, OscillatorType::Triangle) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(BUTTON_LEVEL, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.05)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.08).ok();
    }
}

/// Create an oscillator with gain envelope
fn create_osc(
    ctx: &AudioContext,
    freq: f32,
    osc_type: OscillatorType,
) -> Option<(OscillatorNode, GainNode)> {
    let osc = ctx.create_oscillator().ok()?;
    let gain = ctx.create_gain().ok()?;

    osc.set_type(osc_type);
    osc.frequency().set_value(freq);
    osc.connect_with_audio_node(&gain).ok()?;
    gain.connect_with_audio_node(&ctx.destination()).ok()?;

    Some((osc, gain))
}
