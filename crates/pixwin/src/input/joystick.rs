//! Joystick connection tracking and state snapshots
//!
//! Unlike keyboard and mouse input, joysticks are polled: once per update
//! the designated thread samples every device slot and the poller rotates a
//! two-bank state array for edge detection. Hot-plugging and wildly varying
//! button/axis counts across hardware make every query permissive: an
//! out-of-range index or a disconnected slot answers `false`/`0.0`/empty
//! instead of failing.

use log::info;

/// Number of device slots the native layer exposes
pub const JOYSTICK_COUNT: usize = 16;

/// One device slot's state as sampled on the designated thread
#[derive(Debug, Clone, Default)]
pub(crate) struct GamepadSnapshot {
    pub present: bool,
    pub name: String,
    pub buttons: Vec<bool>,
    pub axes: Vec<f32>,
}

#[derive(Debug, Clone, Default)]
struct JoystickState {
    connected: bool,
    name: String,
    buttons: Vec<bool>,
    axes: Vec<f32>,
}

impl JoystickState {
    fn button(&self, index: usize) -> bool {
        self.buttons.get(index).copied().unwrap_or(false)
    }

    fn axis(&self, index: usize) -> f64 {
        self.axes.get(index).copied().unwrap_or(0.0).into()
    }
}

/// Double-buffered per-slot joystick state
#[derive(Debug)]
pub(crate) struct JoystickPoller {
    banks: [[JoystickState; JOYSTICK_COUNT]; 2],
    current: usize,
}

impl JoystickPoller {
    pub fn new() -> Self {
        Self {
            banks: [
                std::array::from_fn(|_| JoystickState::default()),
                std::array::from_fn(|_| JoystickState::default()),
            ],
            current: 0,
        }
    }

    /// Rotate the banks and rebuild the current one from fresh snapshots
    ///
    /// A newly connected device caches its name; a still-connected one keeps
    /// the cached name; a disconnected slot resets to its zero value.
    pub fn refresh(&mut self, snapshots: Vec<GamepadSnapshot>) {
        self.current ^= 1;
        let previous = self.current ^ 1;

        for (slot, snap) in snapshots.into_iter().enumerate().take(JOYSTICK_COUNT) {
            let was_connected = self.banks[previous][slot].connected;
            let carried_name = if snap.present && was_connected {
                Some(self.banks[previous][slot].name.clone())
            } else {
                None
            };

            let state = &mut self.banks[self.current][slot];
            if snap.present {
                if !was_connected {
                    info!("joystick {slot} connected: {}", snap.name);
                }
                state.connected = true;
                state.name = carried_name.unwrap_or(snap.name);
                state.buttons = snap.buttons;
                state.axes = snap.axes;
            } else {
                if was_connected {
                    info!("joystick {slot} disconnected");
                }
                *state = JoystickState::default();
            }
        }
    }

    fn slot(&self, slot: usize) -> Option<&JoystickState> {
        self.banks[self.current].get(slot)
    }

    fn previous_slot(&self, slot: usize) -> Option<&JoystickState> {
        self.banks[self.current ^ 1].get(slot)
    }

    pub fn present(&self, slot: usize) -> bool {
        self.slot(slot).is_some_and(|s| s.connected)
    }

    pub fn name(&self, slot: usize) -> &str {
        self.slot(slot).map_or("", |s| s.name.as_str())
    }

    pub fn button_count(&self, slot: usize) -> usize {
        self.slot(slot).map_or(0, |s| s.buttons.len())
    }

    pub fn axis_count(&self, slot: usize) -> usize {
        self.slot(slot).map_or(0, |s| s.axes.len())
    }

    pub fn pressed(&self, slot: usize, button: usize) -> bool {
        self.slot(slot).is_some_and(|s| s.button(button))
    }

    pub fn just_pressed(&self, slot: usize, button: usize) -> bool {
        self.pressed(slot, button) && !self.previous_slot(slot).is_some_and(|s| s.button(button))
    }

    pub fn just_released(&self, slot: usize, button: usize) -> bool {
        !self.pressed(slot, button) && self.previous_slot(slot).is_some_and(|s| s.button(button))
    }

    pub fn axis(&self, slot: usize, axis: usize) -> f64 {
        self.slot(slot).map_or(0.0, |s| s.axis(axis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad(name: &str, buttons: &[bool], axes: &[f32]) -> GamepadSnapshot {
        GamepadSnapshot {
            present: true,
            name: name.to_owned(),
            buttons: buttons.to_vec(),
            axes: axes.to_vec(),
        }
    }

    fn empty_frame() -> Vec<GamepadSnapshot> {
        vec![GamepadSnapshot::default(); JOYSTICK_COUNT]
    }

    fn frame_with(slot: usize, snap: GamepadSnapshot) -> Vec<GamepadSnapshot> {
        let mut frame = empty_frame();
        frame[slot] = snap;
        frame
    }

    #[test]
    fn connection_caches_name_and_state() {
        let mut poller = JoystickPoller::new();
        poller.refresh(frame_with(2, pad("Gamepad", &[true, false], &[0.5, -1.0])));

        assert!(poller.present(2));
        assert_eq!(poller.name(2), "Gamepad");
        assert_eq!(poller.button_count(2), 2);
        assert_eq!(poller.axis_count(2), 2);
        assert!(poller.pressed(2, 0));
        assert!(poller.just_pressed(2, 0));
        assert!((poller.axis(2, 1) + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn disconnect_resets_the_slot() {
        let mut poller = JoystickPoller::new();
        poller.refresh(frame_with(0, pad("Gamepad", &[true], &[1.0])));
        poller.refresh(empty_frame());

        assert!(!poller.present(0));
        assert_eq!(poller.name(0), "");
        assert_eq!(poller.button_count(0), 0);
        assert_eq!(poller.axis_count(0), 0);
        assert!(!poller.pressed(0, 0));
        assert!(poller.axis(0, 0) == 0.0);
    }

    #[test]
    fn edges_compare_against_previous_frame() {
        let mut poller = JoystickPoller::new();
        poller.refresh(frame_with(1, pad("Gamepad", &[false], &[])));
        poller.refresh(frame_with(1, pad("Gamepad", &[true], &[])));
        assert!(poller.just_pressed(1, 0));
        assert!(!poller.just_released(1, 0));

        poller.refresh(frame_with(1, pad("Gamepad", &[true], &[])));
        assert!(!poller.just_pressed(1, 0));

        poller.refresh(frame_with(1, pad("Gamepad", &[false], &[])));
        assert!(poller.just_released(1, 0));
    }

    #[test]
    fn out_of_range_queries_are_permissive() {
        let mut poller = JoystickPoller::new();
        poller.refresh(frame_with(0, pad("Gamepad", &[true], &[0.25])));

        assert!(!poller.pressed(0, 99));
        assert!(poller.axis(0, 99) == 0.0);
        assert!(!poller.pressed(99, 0));
        assert!(poller.axis(99, 0) == 0.0);
        assert!(!poller.present(99));
    }

    #[test]
    fn reconnect_counts_as_a_fresh_press_edge() {
        let mut poller = JoystickPoller::new();
        poller.refresh(frame_with(3, pad("Gamepad", &[true], &[])));
        poller.refresh(empty_frame());
        poller.refresh(frame_with(3, pad("Gamepad", &[true], &[])));
        assert!(poller.just_pressed(3, 0));
    }
}
