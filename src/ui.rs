//! Fixed-position button layer
//!
//! Two square hit regions (mute toggle, info tooltip), a reserved rectangle
//! the simulation treats as interaction-suppressed, and the tooltip layout.
//! Everything here is pure layout/state; DOM listeners and audio effects are
//! wired up in the entry point.

use glam::Vec2;

use crate::sim::TickInput;

/// Button edge length in CSS pixels
pub const BTN_SIZE: f32 = 40.0;
/// Top edge shared by both buttons
pub const BTN_Y: f32 = 20.0;
/// Left edge of the mute toggle
pub const BTN_SOUND_X: f32 = 20.0;
/// Left edge of the info button
pub const BTN_INFO_X: f32 = 70.0;

/// Reserved top-left rectangle where pointer-down never drives the scene
pub const RESERVED_WIDTH: f32 = 150.0;
pub const RESERVED_HEIGHT: f32 = 100.0;

/// Tooltip box dimensions and pointer offset
pub const TOOLTIP_WIDTH: f32 = 220.0;
pub const TOOLTIP_HEIGHT: f32 = 90.0;
pub const TOOLTIP_OFFSET: f32 = 15.0;

/// Axis-aligned screen rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x > self.x && p.x < self.x + self.w && p.y > self.y && p.y < self.y + self.h
    }
}

/// The mute toggle hit region
pub fn mute_button() -> Rect {
    Rect {
        x: BTN_SOUND_X,
        y: BTN_Y,
        w: BTN_SIZE,
        h: BTN_SIZE,
    }
}

/// The info button hit region
pub fn info_button() -> Rect {
    Rect {
        x: BTN_INFO_X,
        y: BTN_Y,
        w: BTN_SIZE,
        h: BTN_SIZE,
    }
}

/// Interaction-suppressed predicate for the reserved UI corner
pub fn in_reserved_region(p: Vec2) -> bool {
    p.x < RESERVED_WIDTH && p.y < RESERVED_HEIGHT
}

/// What a pointer-down resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Mute button: flip the flag, play the click cue
    ToggleMute,
    /// Info button: no state change, tooltip is hover-driven
    Info,
    /// Anywhere else: start/refresh the soundscape
    Canvas,
}

/// Pointer and mute state, owned by the frame loop
#[derive(Debug, Clone, Copy, Default)]
pub struct UiState {
    pub muted: bool,
    /// Last known pointer position in CSS pixels, None before first move
    pub pointer: Option<Vec2>,
    /// Pointer currently held down
    pub pressed: bool,
}

impl UiState {
    /// Resolve a pointer-down, applying the mute toggle as a side effect
    pub fn pointer_down(&mut self, pos: Vec2) -> UiAction {
        self.pressed = true;
        self.pointer = Some(pos);
        if mute_button().contains(pos) {
            self.muted = !self.muted;
            UiAction::ToggleMute
        } else if info_button().contains(pos) {
            UiAction::Info
        } else {
            UiAction::Canvas
        }
    }

    pub fn pointer_up(&mut self) {
        self.pressed = false;
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    pub fn hovering_mute(&self) -> bool {
        self.pointer.is_some_and(|p| mute_button().contains(p))
    }

    pub fn hovering_info(&self) -> bool {
        self.pointer.is_some_and(|p| info_button().contains(p))
    }

    /// Tooltip placement, flipped left of the pointer near the right edge
    pub fn tooltip_rect(&self, window_width: f32) -> Option<Rect> {
        if !self.hovering_info() {
            return None;
        }
        let p = self.pointer?;
        let mut x = p.x + TOOLTIP_OFFSET;
        if x + TOOLTIP_WIDTH > window_width {
            x = p.x - TOOLTIP_WIDTH - TOOLTIP_OFFSET;
        }
        Some(Rect {
            x,
            y: p.y + TOOLTIP_OFFSET,
            w: TOOLTIP_WIDTH,
            h: TOOLTIP_HEIGHT,
        })
    }

    /// Pointer facts the simulation consumes this frame
    pub fn tick_input(&self) -> TickInput {
        let held = self.pressed && self.pointer.is_some();
        TickInput {
            pressed_outside_ui: held && self.pointer.is_some_and(|p| !in_reserved_region(p)),
            pressed_below_ui: held && self.pointer.is_some_and(|p| p.y > RESERVED_HEIGHT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_hit_regions() {
        assert!(mute_button().contains(Vec2::new(40.0, 40.0)));
        assert!(!mute_button().contains(Vec2::new(61.0, 40.0)));
        assert!(info_button().contains(Vec2::new(90.0, 40.0)));
        assert!(!info_button().contains(Vec2::new(90.0, 61.0)));
    }

    #[test]
    fn test_mute_toggles_on_down() {
        let mut ui = UiState::default();
        assert_eq!(ui.pointer_down(Vec2::new(40.0, 40.0)), UiAction::ToggleMute);
        assert!(ui.muted);
        assert_eq!(ui.pointer_down(Vec2::new(40.0, 40.0)), UiAction::ToggleMute);
        assert!(!ui.muted);
    }

    #[test]
    fn test_info_and_canvas_leave_mute_alone() {
        let mut ui = UiState::default();
        assert_eq!(ui.pointer_down(Vec2::new(90.0, 40.0)), UiAction::Info);
        assert_eq!(ui.pointer_down(Vec2::new(400.0, 300.0)), UiAction::Canvas);
        assert!(!ui.muted);
    }

    #[test]
    fn test_reserved_region() {
        assert!(in_reserved_region(Vec2::new(10.0, 10.0)));
        assert!(in_reserved_region(Vec2::new(149.0, 99.0)));
        assert!(!in_reserved_region(Vec2::new(151.0, 50.0)));
        assert!(!in_reserved_region(Vec2::new(50.0, 101.0)));
    }

    #[test]
    fn test_tick_input_respects_reserved_region() {
        let mut ui = UiState::default();
        ui.pointer_down(Vec2::new(40.0, 40.0)); // inside reserved corner
        let input = ui.tick_input();
        assert!(!input.pressed_outside_ui);
        assert!(!input.pressed_below_ui);

        ui.pointer_down(Vec2::new(400.0, 300.0));
        let input = ui.tick_input();
        assert!(input.pressed_outside_ui);
        assert!(input.pressed_below_ui);

        ui.pointer_up();
        assert!(!ui.tick_input().pressed_outside_ui);
    }

    #[test]
    fn test_pressed_below_ui_needs_y_past_strip() {
        let mut ui = UiState::default();
        // Outside the reserved corner horizontally, but still in the strip
        ui.pointer_down(Vec2::new(400.0, 50.0));
        let input = ui.tick_input();
        assert!(input.pressed_outside_ui);
        assert!(!input.pressed_below_ui);
    }

    #[test]
    fn test_tooltip_flips_near_right_edge() {
        let mut ui = UiState::default();
        ui.pointer_moved(Vec2::new(90.0, 40.0)); // hovering info

        let normal = ui.tooltip_rect(1000.0).unwrap();
        assert_eq!(normal.x, 90.0 + TOOLTIP_OFFSET);
        assert_eq!(normal.y, 40.0 + TOOLTIP_OFFSET);

        let flipped = ui.tooltip_rect(300.0).unwrap();
        assert_eq!(flipped.x, 90.0 - TOOLTIP_WIDTH - TOOLTIP_OFFSET);
    }

    #[test]
    fn test_tooltip_requires_info_hover() {
        let mut ui = UiState::default();
        ui.pointer_moved(Vec2::new(400.0, 300.0));
        assert!(ui.tooltip_rect(1000.0).is_none());
    }
}
