//! Native display backend abstraction
//!
//! This module defines the trait through which the windowing layer talks to
//! the native window/OpenGL-context manager. The trait covers everything the
//! window lifecycle needs: context creation and sharing, buffer swapping,
//! event polling, monitor enumeration, and gamepad sampling.
//!
//! Every method on [`Display`] touches native state that is not thread-safe,
//! so a backend must only ever be driven from the designated main thread.
//! The executor in [`crate::mainthread`] enforces that discipline by owning
//! the backend and running submitted closures against it in submission order.
//!
//! The production backend is [`GlfwDisplay`]; tests use a scripted in-memory
//! backend so the full window lifecycle runs headless.

mod glfw_backend;
#[cfg(test)]
pub(crate) mod mock;

pub use glfw_backend::GlfwDisplay;

use thiserror::Error;

use crate::input::Button;

/// Errors reported by a display backend
#[derive(Error, Debug)]
pub enum DisplayError {
    /// The native display layer could not be initialized
    #[error("display initialization failed: {0}")]
    Init(String),

    /// Native window/context allocation failed (e.g. no GPU or driver)
    #[error("native window allocation failed: {0}")]
    WindowCreation(String),
}

/// Opaque identity of one native window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub(crate) u64);

/// Opaque identity of one connected monitor
///
/// Identity comparisons between monitors go through this handle, never
/// through video-mode values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonitorId(pub(crate) usize);

/// Resolution and refresh rate of a monitor's active video mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoMode {
    /// Horizontal resolution in pixels
    pub width: u32,
    /// Vertical resolution in pixels
    pub height: u32,
    /// Refresh rate in Hz
    pub refresh_rate: u32,
}

/// One icon candidate as a packed RGBA pixel buffer
///
/// Pixels are row-major from the top-left corner, one `u32` per pixel in
/// little-endian RGBA byte order.
#[derive(Debug, Clone)]
pub struct IconImage {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Packed pixel data, `width * height` entries
    pub pixels: Vec<u32>,
}

/// Creation-time native window attributes
#[derive(Debug, Clone, Copy)]
pub struct WindowHints {
    /// Whether the user may resize the window
    pub resizable: bool,
    /// Whether the window has borders and decorations
    pub decorated: bool,
    /// Whether the window floats above regular windows
    pub always_on_top: bool,
    /// Whether a fullscreen window iconifies on focus loss
    pub auto_iconify: bool,
    /// Whether the framebuffer supports per-pixel transparency
    pub transparent_framebuffer: bool,
}

/// Action half of a button transition event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// The button went down
    Press,
    /// The button went up
    Release,
    /// The button is held down and the native layer synthesized a repeat
    Repeat,
}

/// One input event drained from the native event queue
///
/// Backends translate their native event representation into this enum, so
/// the input engine and the tests never depend on native types. Cursor
/// positions are in raw window space: origin at the top-left corner, Y
/// growing downward.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayEvent {
    /// A keyboard key or mouse button changed state
    Button {
        /// The affected button in the unioned key/mouse code space
        button: Button,
        /// What happened to it
        action: ButtonAction,
    },
    /// The cursor moved, coordinates in raw window space
    CursorPos {
        /// Horizontal position from the left edge
        x: f64,
        /// Vertical position from the top edge
        y: f64,
    },
    /// The cursor entered (`true`) or left (`false`) the window
    CursorEnter(bool),
    /// The user scrolled, in native scroll steps
    Scroll {
        /// Horizontal scroll delta
        x: f64,
        /// Vertical scroll delta
        y: f64,
    },
    /// A character of text input was decoded
    Char(char),
}

/// The native window/context manager consumed by the windowing layer
///
/// Implementations wrap a concrete native layer (GLFW in production, a
/// scripted double in tests). All methods must be called from the designated
/// main thread; the executor guarantees this for closures submitted through
/// it.
pub trait Display {
    /// Open a native window with an OpenGL context
    ///
    /// `share` names an existing window whose context the new one shares GPU
    /// resources with.
    fn create_window(
        &mut self,
        width: u32,
        height: u32,
        title: &str,
        hints: &WindowHints,
        share: Option<WindowId>,
    ) -> Result<WindowId, DisplayError>;

    /// Release the native window and its context
    fn destroy_window(&mut self, id: WindowId);

    /// Client-area size in screen coordinates
    fn window_size(&mut self, id: WindowId) -> (u32, u32);

    /// Resize the client area
    fn set_window_size(&mut self, id: WindowId, width: u32, height: u32);

    /// Backing-store size in pixels, which may exceed the client-area size
    /// under display scaling
    fn framebuffer_size(&mut self, id: WindowId) -> (u32, u32);

    /// Position of the client area's top-left corner in screen coordinates
    fn window_pos(&mut self, id: WindowId) -> (i32, i32);

    /// Move the window
    fn set_window_pos(&mut self, id: WindowId, x: i32, y: i32);

    /// Change the title-bar text
    fn set_title(&mut self, id: WindowId, title: &str);

    /// Offer a set of icon images; the system picks the closest sizes
    fn set_icon(&mut self, id: WindowId, icons: &[IconImage]);

    /// Whether the window currently has input focus
    fn focused(&mut self, id: WindowId) -> bool;

    /// Whether closing the window has been requested
    fn should_close(&mut self, id: WindowId) -> bool;

    /// Request or cancel closing the window
    fn set_should_close(&mut self, id: WindowId, close: bool);

    /// Show or hide the cursor while it is over the window
    fn set_cursor_visible(&mut self, id: WindowId, visible: bool);

    /// Warp the cursor to a raw window-space position
    fn set_cursor_pos(&mut self, id: WindowId, x: f64, y: f64);

    /// Bind the window's context on the calling thread
    fn make_current(&mut self, id: WindowId);

    /// Release whatever context is bound on the calling thread
    fn detach_current(&mut self);

    /// Present the back buffer
    fn swap_buffers(&mut self, id: WindowId);

    /// Set the buffer-swap interval for the bound context (0 = immediate,
    /// 1 = synchronized with the monitor refresh)
    fn set_swap_interval(&mut self, interval: u32);

    /// Pump the native event queue, filling per-window queues
    fn poll_events(&mut self);

    /// Take all pending events for one window, in arrival order
    fn drain_events(&mut self, id: WindowId) -> Vec<DisplayEvent>;

    /// Number of connected monitors
    fn monitor_count(&mut self) -> usize;

    /// The system's primary monitor, if any is connected
    fn primary_monitor(&mut self) -> Option<MonitorId>;

    /// Human-readable monitor name
    fn monitor_name(&mut self, monitor: MonitorId) -> String;

    /// The monitor's active video mode
    fn video_mode(&mut self, monitor: MonitorId) -> VideoMode;

    /// The monitor a fullscreen window occupies, `None` while windowed
    fn window_monitor(&mut self, id: WindowId) -> Option<MonitorId>;

    /// Move the window onto a monitor (fullscreen) or back to windowed
    /// placement at `x, y` with size `width x height`
    fn set_window_monitor(
        &mut self,
        id: WindowId,
        monitor: Option<MonitorId>,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        refresh_rate: u32,
    );

    /// Whether the device slot holds a connected gamepad
    fn gamepad_present(&mut self, slot: usize) -> bool;

    /// Device name for the slot, empty when disconnected
    fn gamepad_name(&mut self, slot: usize) -> String;

    /// Current button states for the slot, in device order
    fn gamepad_buttons(&mut self, slot: usize) -> Vec<bool>;

    /// Current axis values for the slot, normalized to [-1, 1]
    fn gamepad_axes(&mut self, slot: usize) -> Vec<f32>;
}
