//! Scene composition
//!
//! Pure function of simulation + UI state to a back-to-front vertex list.
//! Everything is emitted in CSS-pixel screen coordinates with the origin at
//! the top-left; the pipeline maps to NDC on upload. Draw order follows the
//! frame pass: trail fade, orbit tracks, hub, ripples, debris, spokes and
//! boundary, bubbles, dust, then the button overlay. Tooltip text lives in a
//! DOM overlay, not here.

use glam::Vec2;
use std::f32::consts::TAU;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::config::Tuning;
use crate::consts::BURST_COUNT;
use crate::sim::SceneState;
use crate::ui::{self, UiState};

const HUB_TICKS: u32 = 8;

const SEGMENTS_LARGE: u32 = 64;
const SEGMENTS_SMALL: u32 = 24;
const SEGMENTS_TINY: u32 = 12;

/// Build the full frame
pub fn build_scene(state: &SceneState, ui: &UiState, tuning: &Tuning) -> Vec<Vertex> {
    let vp = &state.viewport;
    let center = vp.center();

    // Rough per-frame budget: bursts dominate transient counts
    let mut verts = Vec::with_capacity(4096 + state.debris.len().max(BURST_COUNT) * 64);

    // Translucent fill over last frame gives the motion trail
    verts.extend(shapes::rect(
        Vec2::ZERO,
        Vec2::new(vp.width, vp.height),
        colors::TRAIL_FADE,
    ));

    push_orbit_tracks(&mut verts, center, vp.orbit_radius, tuning.track_count);
    push_hub(&mut verts, center, state.angle);

    for ripple in &state.ripples {
        if ripple.alpha <= 0.0 {
            continue;
        }
        let color = with_alpha(colors::RIPPLE, ripple.alpha / 255.0);
        verts.extend(shapes::stroke_circle(
            center,
            ripple.radius(),
            ripple.stroke_width,
            color,
            SEGMENTS_LARGE,
        ));
    }

    for d in &state.debris {
        let color = with_alpha(colors::DEBRIS, (d.lifespan / 255.0).clamp(0.0, 1.0));
        verts.extend(shapes::circle(
            center + d.pos,
            d.size / 2.0,
            color,
            SEGMENTS_TINY,
        ));
    }

    push_spokes(
        &mut verts,
        center,
        vp.orbit_radius,
        state.angle,
        state.flash_intensity,
        tuning.spoke_count,
    );

    for bubble in &state.bubbles {
        let pos = center + bubble.pos;
        if bubble.is_struck() {
            // Radial strike line plus an enlarged highlight
            let alpha = ((bubble.base_alpha + bubble.hit_timer) / 255.0).min(1.0);
            verts.extend(shapes::line(
                center,
                pos,
                2.0,
                with_alpha(colors::BUBBLE_STRUCK, (bubble.hit_timer / 255.0).min(1.0)),
            ));
            verts.extend(shapes::circle(
                pos,
                bubble.size,
                with_alpha(colors::BUBBLE_STRUCK, alpha),
                SEGMENTS_SMALL,
            ));
        } else {
            verts.extend(shapes::circle(
                pos,
                bubble.size / 2.0,
                with_alpha(colors::BUBBLE, bubble.base_alpha / 255.0),
                SEGMENTS_SMALL,
            ));
        }
    }

    for dust in &state.dust {
        verts.extend(shapes::circle(
            center + dust.pos,
            dust.size / 2.0,
            with_alpha(colors::DUST, dust.alpha / 255.0),
            SEGMENTS_TINY,
        ));
    }

    push_buttons(&mut verts, ui);

    verts
}

/// Faint concentric rings, spacing tied to the orbit radius
fn push_orbit_tracks(verts: &mut Vec<Vertex>, center: Vec2, orbit_radius: f32, tracks: u32) {
    for layer in 1..=tracks {
        let radius = layer as f32 * (orbit_radius / tracks as f32) + 20.0;
        verts.extend(shapes::stroke_circle(
            center,
            radius,
            1.0,
            colors::TRACK,
            SEGMENTS_LARGE,
        ));
    }
}

/// Double ring core with counter-rotating tick marks
fn push_hub(verts: &mut Vec<Vertex>, center: Vec2, angle: f32) {
    verts.extend(shapes::stroke_circle(
        center,
        5.0,
        1.0,
        colors::HUB_CORE,
        SEGMENTS_SMALL,
    ));
    verts.extend(shapes::stroke_circle(
        center,
        20.0,
        1.0,
        colors::HUB_HALO,
        SEGMENTS_SMALL,
    ));

    let base = -angle * 2.0;
    for i in 0..HUB_TICKS {
        let tick_angle = base + TAU / HUB_TICKS as f32 * (i + 1) as f32;
        let dir = Vec2::from_angle(tick_angle);
        verts.extend(shapes::line(
            center + dir * 10.0,
            center + dir * 15.0,
            1.0,
            colors::HUB_CORE,
        ));
    }
}

/// Boundary ring, radial spokes and satellite rings, reddened by the flash
fn push_spokes(
    verts: &mut Vec<Vertex>,
    center: Vec2,
    orbit_radius: f32,
    angle: f32,
    flash: f32,
    spokes: usize,
) {
    let tint = flash_tint(flash);
    let spoke_color = [1.0, 1.0, 1.0, ((180.0 + flash) / 255.0).min(1.0)];

    verts.extend(shapes::stroke_circle(
        center,
        orbit_radius,
        4.0,
        tint,
        SEGMENTS_LARGE,
    ));

    for i in 0..spokes {
        let spoke_angle = angle + TAU / spokes as f32 * i as f32;
        let dir = Vec2::from_angle(spoke_angle);
        let anchor = center + dir * orbit_radius;

        verts.extend(shapes::line(
            center,
            center + dir * (orbit_radius * 1.5),
            4.0,
            spoke_color,
        ));
        verts.extend(shapes::stroke_circle(
            anchor,
            orbit_radius * 0.33,
            3.0,
            tint,
            SEGMENTS_LARGE,
        ));
        verts.extend(shapes::stroke_circle(
            anchor,
            6.0,
            2.0,
            [1.0, 1.0, 1.0, 1.0],
            SEGMENTS_SMALL,
        ));
    }
}

/// Boundary/satellite color: red channel climbs with the flash, green and
/// blue are capped lower so the shift stays warm
fn flash_tint(flash: f32) -> [f32; 4] {
    [
        (220.0 + flash).clamp(0.0, 255.0) / 255.0,
        (30.0 + flash).clamp(0.0, 200.0) / 255.0,
        (40.0 + flash).clamp(0.0, 200.0) / 255.0,
        1.0,
    ]
}

fn with_alpha(rgb: [f32; 3], alpha: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], alpha]
}

/// Mute and info buttons with their vector glyphs
fn push_buttons(verts: &mut Vec<Vertex>, ui: &UiState) {
    let mute = ui::mute_button();
    let info = ui::info_button();

    let mute_fill = if ui.hovering_mute() {
        colors::BUTTON_HOVER
    } else {
        colors::BUTTON_IDLE
    };
    verts.extend(shapes::rounded_rect(
        Vec2::new(mute.x, mute.y),
        Vec2::new(mute.w, mute.h),
        8.0,
        mute_fill,
    ));

    // Speaker silhouette
    let o = Vec2::new(mute.x, mute.y);
    let speaker = [
        o + Vec2::new(10.0, 14.0),
        o + Vec2::new(18.0, 14.0),
        o + Vec2::new(28.0, 8.0),
        o + Vec2::new(28.0, 32.0),
        o + Vec2::new(18.0, 26.0),
        o + Vec2::new(10.0, 26.0),
    ];
    verts.extend(shapes::polygon(&speaker, colors::GLYPH));

    if ui.muted {
        verts.extend(shapes::line(
            o + Vec2::new(5.0, 5.0),
            o + Vec2::new(mute.w - 5.0, mute.h - 5.0),
            2.0,
            colors::MUTE_SLASH,
        ));
    }

    let info_fill = if ui.hovering_info() {
        colors::BUTTON_HOVER
    } else {
        colors::BUTTON_IDLE
    };
    verts.extend(shapes::rounded_rect(
        Vec2::new(info.x, info.y),
        Vec2::new(info.w, info.h),
        8.0,
        info_fill,
    ));

    // Lowercase "i": dot above a stem
    let cx = info.x + info.w / 2.0;
    verts.extend(shapes::circle(
        Vec2::new(cx, info.y + 12.0),
        2.5,
        colors::GLYPH,
        SEGMENTS_TINY,
    ));
    verts.extend(shapes::rect(
        Vec2::new(cx - 2.0, info.y + 18.0),
        Vec2::new(4.0, 14.0),
        colors::GLYPH,
    ));
}
