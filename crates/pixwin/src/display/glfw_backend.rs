//! GLFW-backed display implementation
//!
//! Wraps the `glfw` crate behind the [`Display`] trait. Windows are handed
//! out as opaque [`WindowId`]s and routed through a handle-indexed table, so
//! no native pointers or receivers leak past this module. Native events are
//! translated into [`DisplayEvent`]s here; anything the input engine does
//! not consume (refresh, focus, file drops) is dropped during translation
//! because the window layer queries that state directly.

use std::collections::HashMap;

use glfw::Context;
use log::debug;

use super::{
    ButtonAction, Display, DisplayError, DisplayEvent, IconImage, MonitorId, VideoMode,
    WindowHints, WindowId,
};
use crate::input::Button;

const JOYSTICK_IDS: [glfw::JoystickId; 16] = [
    glfw::JoystickId::Joystick1,
    glfw::JoystickId::Joystick2,
    glfw::JoystickId::Joystick3,
    glfw::JoystickId::Joystick4,
    glfw::JoystickId::Joystick5,
    glfw::JoystickId::Joystick6,
    glfw::JoystickId::Joystick7,
    glfw::JoystickId::Joystick8,
    glfw::JoystickId::Joystick9,
    glfw::JoystickId::Joystick10,
    glfw::JoystickId::Joystick11,
    glfw::JoystickId::Joystick12,
    glfw::JoystickId::Joystick13,
    glfw::JoystickId::Joystick14,
    glfw::JoystickId::Joystick15,
    glfw::JoystickId::Joystick16,
];

struct WindowSlot {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    // GLFW can report this, but caching it here keeps fullscreen state
    // consistent with the transitions we issued.
    monitor: Option<MonitorId>,
}

/// Production [`Display`] backend over GLFW
///
/// Must be created and driven on the process main thread; the executor in
/// [`crate::mainthread`] takes ownership and enforces that.
pub struct GlfwDisplay {
    glfw: glfw::Glfw,
    windows: HashMap<WindowId, WindowSlot>,
    next_id: u64,
}

impl GlfwDisplay {
    /// Initialize the native display layer
    pub fn init() -> Result<Self, DisplayError> {
        let glfw =
            glfw::init(glfw::fail_on_errors).map_err(|e| DisplayError::Init(e.to_string()))?;
        Ok(Self {
            glfw,
            windows: HashMap::new(),
            next_id: 1,
        })
    }

    fn slot_mut(&mut self, id: WindowId) -> &mut WindowSlot {
        self.windows.get_mut(&id).expect("unknown window handle")
    }
}

impl Display for GlfwDisplay {
    fn create_window(
        &mut self,
        width: u32,
        height: u32,
        title: &str,
        hints: &WindowHints,
        share: Option<WindowId>,
    ) -> Result<WindowId, DisplayError> {
        self.glfw
            .window_hint(glfw::WindowHint::ContextVersionMajor(3));
        self.glfw
            .window_hint(glfw::WindowHint::ContextVersionMinor(3));
        self.glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        self.glfw
            .window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
        self.glfw
            .window_hint(glfw::WindowHint::Resizable(hints.resizable));
        self.glfw
            .window_hint(glfw::WindowHint::Decorated(hints.decorated));
        self.glfw
            .window_hint(glfw::WindowHint::Floating(hints.always_on_top));
        self.glfw
            .window_hint(glfw::WindowHint::AutoIconify(hints.auto_iconify));
        self.glfw.window_hint(glfw::WindowHint::TransparentFramebuffer(
            hints.transparent_framebuffer,
        ));

        let created = match share {
            Some(share_id) => {
                let anchor = self.windows.get_mut(&share_id).expect("unknown window handle");
                anchor
                    .window
                    .create_shared(width, height, title, glfw::WindowMode::Windowed)
            }
            None => self
                .glfw
                .create_window(width, height, title, glfw::WindowMode::Windowed),
        };
        let (mut window, events) = created.ok_or_else(|| {
            DisplayError::WindowCreation("native window allocation failed".to_owned())
        })?;

        window.set_all_polling(true);

        let id = WindowId(self.next_id);
        self.next_id += 1;
        debug!("created native window {id:?} ({width}x{height})");
        self.windows.insert(
            id,
            WindowSlot {
                window,
                events,
                monitor: None,
            },
        );
        Ok(id)
    }

    fn destroy_window(&mut self, id: WindowId) {
        debug!("destroying native window {id:?}");
        self.windows.remove(&id);
    }

    fn window_size(&mut self, id: WindowId) -> (u32, u32) {
        let (w, h) = self.slot_mut(id).window.get_size();
        (w as u32, h as u32)
    }

    fn set_window_size(&mut self, id: WindowId, width: u32, height: u32) {
        self.slot_mut(id).window.set_size(width as i32, height as i32);
    }

    fn framebuffer_size(&mut self, id: WindowId) -> (u32, u32) {
        let (w, h) = self.slot_mut(id).window.get_framebuffer_size();
        (w as u32, h as u32)
    }

    fn window_pos(&mut self, id: WindowId) -> (i32, i32) {
        self.slot_mut(id).window.get_pos()
    }

    fn set_window_pos(&mut self, id: WindowId, x: i32, y: i32) {
        self.slot_mut(id).window.set_pos(x, y);
    }

    fn set_title(&mut self, id: WindowId, title: &str) {
        self.slot_mut(id).window.set_title(title);
    }

    fn set_icon(&mut self, id: WindowId, icons: &[IconImage]) {
        let images = icons
            .iter()
            .map(|icon| glfw::PixelImage {
                width: icon.width,
                height: icon.height,
                pixels: icon.pixels.clone(),
            })
            .collect();
        self.slot_mut(id).window.set_icon_from_pixels(images);
    }

    fn focused(&mut self, id: WindowId) -> bool {
        self.slot_mut(id).window.is_focused()
    }

    fn should_close(&mut self, id: WindowId) -> bool {
        self.slot_mut(id).window.should_close()
    }

    fn set_should_close(&mut self, id: WindowId, close: bool) {
        self.slot_mut(id).window.set_should_close(close);
    }

    fn set_cursor_visible(&mut self, id: WindowId, visible: bool) {
        let mode = if visible {
            glfw::CursorMode::Normal
        } else {
            glfw::CursorMode::Hidden
        };
        self.slot_mut(id).window.set_cursor_mode(mode);
    }

    fn set_cursor_pos(&mut self, id: WindowId, x: f64, y: f64) {
        self.slot_mut(id).window.set_cursor_pos(x, y);
    }

    fn make_current(&mut self, id: WindowId) {
        self.slot_mut(id).window.make_current();
    }

    fn detach_current(&mut self) {
        glfw::make_context_current(None);
    }

    fn swap_buffers(&mut self, id: WindowId) {
        self.slot_mut(id).window.swap_buffers();
    }

    fn set_swap_interval(&mut self, interval: u32) {
        let interval = if interval == 0 {
            glfw::SwapInterval::None
        } else {
            glfw::SwapInterval::Sync(interval)
        };
        self.glfw.set_swap_interval(interval);
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    fn drain_events(&mut self, id: WindowId) -> Vec<DisplayEvent> {
        let slot = self.slot_mut(id);
        glfw::flush_messages(&slot.events)
            .filter_map(|(_, event)| translate_event(event))
            .collect()
    }

    fn monitor_count(&mut self) -> usize {
        self.glfw.with_connected_monitors(|_, monitors| monitors.len())
    }

    fn primary_monitor(&mut self) -> Option<MonitorId> {
        // GLFW lists the primary monitor first.
        self.glfw
            .with_connected_monitors(|_, monitors| (!monitors.is_empty()).then_some(MonitorId(0)))
    }

    fn monitor_name(&mut self, monitor: MonitorId) -> String {
        self.glfw.with_connected_monitors(|_, monitors| {
            monitors
                .get(monitor.0)
                .and_then(|m| m.get_name())
                .unwrap_or_default()
        })
    }

    fn video_mode(&mut self, monitor: MonitorId) -> VideoMode {
        self.glfw.with_connected_monitors(|_, monitors| {
            monitors
                .get(monitor.0)
                .and_then(|m| m.get_video_mode())
                .map_or(
                    VideoMode {
                        width: 0,
                        height: 0,
                        refresh_rate: 0,
                    },
                    |mode| VideoMode {
                        width: mode.width,
                        height: mode.height,
                        refresh_rate: mode.refresh_rate,
                    },
                )
        })
    }

    fn window_monitor(&mut self, id: WindowId) -> Option<MonitorId> {
        self.slot_mut(id).monitor
    }

    fn set_window_monitor(
        &mut self,
        id: WindowId,
        monitor: Option<MonitorId>,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        refresh_rate: u32,
    ) {
        let slot = self.windows.get_mut(&id).expect("unknown window handle");
        match monitor {
            Some(target) => {
                self.glfw.with_connected_monitors(|_, monitors| {
                    if let Some(native) = monitors.get(target.0) {
                        slot.window.set_monitor(
                            glfw::WindowMode::FullScreen(native),
                            x,
                            y,
                            width,
                            height,
                            Some(refresh_rate),
                        );
                    }
                });
                slot.monitor = Some(target);
            }
            None => {
                slot.window
                    .set_monitor(glfw::WindowMode::Windowed, x, y, width, height, None);
                slot.monitor = None;
            }
        }
    }

    fn gamepad_present(&mut self, slot: usize) -> bool {
        JOYSTICK_IDS
            .get(slot)
            .is_some_and(|&id| self.glfw.get_joystick(id).is_gamepad())
    }

    fn gamepad_name(&mut self, slot: usize) -> String {
        JOYSTICK_IDS
            .get(slot)
            .and_then(|&id| self.glfw.get_joystick(id).get_name())
            .unwrap_or_default()
    }

    fn gamepad_buttons(&mut self, slot: usize) -> Vec<bool> {
        JOYSTICK_IDS.get(slot).map_or_else(Vec::new, |&id| {
            self.glfw
                .get_joystick(id)
                .get_buttons()
                .into_iter()
                .map(|b| b != 0)
                .collect()
        })
    }

    fn gamepad_axes(&mut self, slot: usize) -> Vec<f32> {
        JOYSTICK_IDS
            .get(slot)
            .map_or_else(Vec::new, |&id| self.glfw.get_joystick(id).get_axes())
    }
}

fn translate_action(action: glfw::Action) -> ButtonAction {
    match action {
        glfw::Action::Press => ButtonAction::Press,
        glfw::Action::Release => ButtonAction::Release,
        glfw::Action::Repeat => ButtonAction::Repeat,
    }
}

fn translate_event(event: glfw::WindowEvent) -> Option<DisplayEvent> {
    match event {
        glfw::WindowEvent::Key(key, _, action, _) => Some(DisplayEvent::Button {
            button: Button::from_code(key as i32)?,
            action: translate_action(action),
        }),
        glfw::WindowEvent::MouseButton(button, action, _) => Some(DisplayEvent::Button {
            button: Button::from_code(button as i32)?,
            action: translate_action(action),
        }),
        glfw::WindowEvent::CursorPos(x, y) => Some(DisplayEvent::CursorPos { x, y }),
        glfw::WindowEvent::CursorEnter(entered) => Some(DisplayEvent::CursorEnter(entered)),
        glfw::WindowEvent::Scroll(x, y) => Some(DisplayEvent::Scroll { x, y }),
        glfw::WindowEvent::Char(c) => Some(DisplayEvent::Char(c)),
        _ => None,
    }
}
