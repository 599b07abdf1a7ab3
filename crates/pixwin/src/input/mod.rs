//! Input state double-buffering engine
//!
//! Input events arrive asynchronously while a frame is being produced, but
//! user code wants a stable per-frame snapshot with edge detection. This
//! module keeps three state slots in a fixed arena:
//!
//! - *pending* — mutated by drained native events between rotations
//! - *current* — the immutable snapshot queries read
//! - *previous* — the prior snapshot, for just-pressed/just-released edges
//!
//! Once per update the slots rotate by index (previous ← current ← pending)
//! in O(1); no state structs are copied wholesale. The recycled pending slot
//! is reseeded so held buttons and the mouse position persist across frames
//! while the per-frame accumulators (repeat flags, scroll, typed text) start
//! empty.

mod button;
pub(crate) mod joystick;

pub use button::Button;

use crate::display::{ButtonAction, DisplayEvent};
use crate::math::{Rect, Vec2};

/// One slot of sampled input state
#[derive(Debug)]
struct InputState {
    buttons: [bool; Button::COUNT],
    repeat: [bool; Button::COUNT],
    mouse: Vec2,
    scroll: Vec2,
    typed: String,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            buttons: [false; Button::COUNT],
            repeat: [false; Button::COUNT],
            mouse: Vec2::zeros(),
            scroll: Vec2::zeros(),
            typed: String::new(),
        }
    }
}

/// Triple-buffered input state with per-update rotation
#[derive(Debug)]
pub(crate) struct InputBuffer {
    slots: [InputState; 3],
    pending: usize,
    current: usize,
    previous: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self {
            slots: [
                InputState::default(),
                InputState::default(),
                InputState::default(),
            ],
            pending: 0,
            current: 1,
            previous: 2,
        }
    }

    /// Fold one drained native event into the pending slot
    ///
    /// Cursor positions are converted from raw window space (top-left
    /// origin, Y-down) into the window's logical bounds space (minimum
    /// corner origin, Y-up).
    pub fn apply(&mut self, event: &DisplayEvent, bounds: &Rect) {
        let pending = &mut self.slots[self.pending];
        match *event {
            DisplayEvent::Button { button, action } => match action {
                ButtonAction::Press => pending.buttons[button.code()] = true,
                ButtonAction::Release => pending.buttons[button.code()] = false,
                ButtonAction::Repeat => pending.repeat[button.code()] = true,
            },
            DisplayEvent::CursorPos { x, y } => {
                pending.mouse = Vec2::new(x + bounds.min.x, (bounds.h() - y) + bounds.min.y);
            }
            DisplayEvent::Scroll { x, y } => {
                pending.scroll.x += x;
                pending.scroll.y += y;
            }
            DisplayEvent::Char(c) => pending.typed.push(c),
            // Cursor enter/leave is not double-buffered; the window tracks it.
            DisplayEvent::CursorEnter(_) => {}
        }
    }

    /// Promote pending to current and current to previous
    ///
    /// The old previous slot becomes the new pending slot. Button states and
    /// the mouse position persist (a held button stays pressed until its
    /// release event); repeat flags, scroll and typed text reset.
    pub fn rotate(&mut self) {
        let recycled = self.previous;
        self.previous = self.current;
        self.current = self.pending;
        self.pending = recycled;

        let buttons = self.slots[self.current].buttons;
        let mouse = self.slots[self.current].mouse;
        let pending = &mut self.slots[self.pending];
        pending.buttons = buttons;
        pending.mouse = mouse;
        pending.repeat = [false; Button::COUNT];
        pending.scroll = Vec2::zeros();
        pending.typed.clear();
    }

    pub fn pressed(&self, button: Button) -> bool {
        self.slots[self.current].buttons[button.code()]
    }

    pub fn just_pressed(&self, button: Button) -> bool {
        self.slots[self.current].buttons[button.code()]
            && !self.slots[self.previous].buttons[button.code()]
    }

    pub fn just_released(&self, button: Button) -> bool {
        !self.slots[self.current].buttons[button.code()]
            && self.slots[self.previous].buttons[button.code()]
    }

    pub fn repeated(&self, button: Button) -> bool {
        self.slots[self.current].repeat[button.code()]
    }

    pub fn mouse(&self) -> Vec2 {
        self.slots[self.current].mouse
    }

    pub fn previous_mouse(&self) -> Vec2 {
        self.slots[self.previous].mouse
    }

    pub fn scroll(&self) -> Vec2 {
        self.slots[self.current].scroll
    }

    pub fn typed(&self) -> &str {
        &self.slots[self.current].typed
    }

    /// Privileged write used by programmatic cursor warps: makes the
    /// position visible to every slot immediately, without waiting for the
    /// native round-trip event.
    pub fn force_mouse(&mut self, position: Vec2) {
        for slot in &mut self.slots {
            slot.mouse = position;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 600.0)
    }

    fn press(button: Button) -> DisplayEvent {
        DisplayEvent::Button {
            button,
            action: ButtonAction::Press,
        }
    }

    fn release(button: Button) -> DisplayEvent {
        DisplayEvent::Button {
            button,
            action: ButtonAction::Release,
        }
    }

    #[test]
    fn press_then_release_produces_edges() {
        let mut input = InputBuffer::new();

        // frame 1: nothing
        input.rotate();
        assert!(!input.pressed(Button::Space));

        // frame 2: press arrives
        input.apply(&press(Button::Space), &bounds());
        input.rotate();
        assert!(input.pressed(Button::Space));
        assert!(input.just_pressed(Button::Space));
        assert!(!input.just_released(Button::Space));

        // frame 3: release arrives
        input.apply(&release(Button::Space), &bounds());
        input.rotate();
        assert!(!input.pressed(Button::Space));
        assert!(!input.just_pressed(Button::Space));
        assert!(input.just_released(Button::Space));
    }

    #[test]
    fn held_button_persists_across_rotations() {
        let mut input = InputBuffer::new();
        input.apply(&press(Button::W), &bounds());
        input.rotate();

        // No further events; the button stays down for several frames
        // without being just-pressed again.
        for _ in 0..3 {
            input.rotate();
            assert!(input.pressed(Button::W));
            assert!(!input.just_pressed(Button::W));
        }
    }

    #[test]
    fn repeat_flags_clear_every_rotation() {
        let mut input = InputBuffer::new();
        input.apply(&press(Button::A), &bounds());
        input.apply(
            &DisplayEvent::Button {
                button: Button::A,
                action: ButtonAction::Repeat,
            },
            &bounds(),
        );
        input.rotate();
        assert!(input.repeated(Button::A));

        input.rotate();
        assert!(!input.repeated(Button::A));
        assert!(input.pressed(Button::A));
    }

    #[test]
    fn scroll_and_typed_reset_every_rotation() {
        let mut input = InputBuffer::new();
        input.apply(&DisplayEvent::Scroll { x: 1.0, y: -2.0 }, &bounds());
        input.apply(&DisplayEvent::Scroll { x: 0.5, y: 0.5 }, &bounds());
        input.apply(&DisplayEvent::Char('h'), &bounds());
        input.apply(&DisplayEvent::Char('i'), &bounds());
        input.rotate();

        assert_relative_eq!(input.scroll().x, 1.5);
        assert_relative_eq!(input.scroll().y, -1.5);
        assert_eq!(input.typed(), "hi");

        input.rotate();
        assert_relative_eq!(input.scroll().x, 0.0);
        assert_relative_eq!(input.scroll().y, 0.0);
        assert_eq!(input.typed(), "");
    }

    #[test]
    fn cursor_position_transforms_into_bounds_space() {
        let mut input = InputBuffer::new();
        // Raw cursor at the top-left corner maps to the top-left in Y-up
        // logical space.
        input.apply(&DisplayEvent::CursorPos { x: 0.0, y: 0.0 }, &bounds());
        input.rotate();
        assert_relative_eq!(input.mouse().x, 0.0);
        assert_relative_eq!(input.mouse().y, 600.0);

        // Offset bounds shift the result by the minimum corner.
        let shifted = Rect::new(10.0, 20.0, 810.0, 620.0);
        input.apply(&DisplayEvent::CursorPos { x: 100.0, y: 50.0 }, &shifted);
        input.rotate();
        assert_relative_eq!(input.mouse().x, 110.0);
        assert_relative_eq!(input.mouse().y, 570.0);
    }

    #[test]
    fn mouse_position_persists_and_previous_lags() {
        let mut input = InputBuffer::new();
        input.apply(&DisplayEvent::CursorPos { x: 100.0, y: 100.0 }, &bounds());
        input.rotate();
        let first = input.mouse();

        input.apply(&DisplayEvent::CursorPos { x: 200.0, y: 150.0 }, &bounds());
        input.rotate();
        assert_relative_eq!(input.previous_mouse().x, first.x);
        assert_relative_eq!(input.previous_mouse().y, first.y);
        assert_relative_eq!(input.mouse().x, 200.0);

        // No movement: the position carries into the next frame.
        input.rotate();
        assert_relative_eq!(input.mouse().x, 200.0);
    }

    #[test]
    fn force_mouse_hits_every_slot() {
        let mut input = InputBuffer::new();
        input.force_mouse(Vec2::new(42.0, 24.0));
        assert_relative_eq!(input.mouse().x, 42.0);
        assert_relative_eq!(input.previous_mouse().x, 42.0);
        input.rotate();
        assert_relative_eq!(input.mouse().x, 42.0);
        assert_relative_eq!(input.previous_mouse().x, 42.0);
    }
}
