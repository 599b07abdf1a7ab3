//! Declarative window creation options

use image::DynamicImage;

use crate::display::{IconImage, WindowHints};
use crate::monitor::Monitor;

/// Immutable configuration snapshot consumed once at window creation
///
/// Assembled by chaining `with_*` builders over the documented defaults:
/// empty title, not resizable, decorated, not always-on-top, no
/// auto-iconify, vsync off, no icon, opaque framebuffer, windowed.
#[derive(Debug, Clone)]
pub struct WindowOptions {
    pub(crate) title: String,
    pub(crate) icon: Vec<DynamicImage>,
    pub(crate) monitor: Option<Monitor>,
    pub(crate) resizable: bool,
    pub(crate) decorated: bool,
    pub(crate) always_on_top: bool,
    pub(crate) auto_iconify: bool,
    pub(crate) transparent_framebuffer: bool,
    pub(crate) vsync: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            icon: Vec::new(),
            monitor: None,
            resizable: false,
            decorated: true,
            always_on_top: false,
            auto_iconify: false,
            transparent_framebuffer: false,
            vsync: false,
        }
    }
}

impl WindowOptions {
    /// Options with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Title at the top of the window
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Icon images offered to the window system
    ///
    /// The system picks whichever sizes suit it best and rescales as
    /// needed; 16x16, 32x32 and 48x48 are good candidates. Has no effect on
    /// macOS, where icons come from the application bundle.
    pub fn with_icon(mut self, icon: Vec<DynamicImage>) -> Self {
        self.icon = icon;
        self
    }

    /// Start fullscreen on the given monitor instead of windowed
    pub fn with_monitor(mut self, monitor: Monitor) -> Self {
        self.monitor = Some(monitor);
        self
    }

    /// Whether the user may resize the window
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Whether the window has borders and decorations
    pub fn with_decorated(mut self, decorated: bool) -> Self {
        self.decorated = decorated;
        self
    }

    /// Float above regular windows; intended for debugging
    pub fn with_always_on_top(mut self, always_on_top: bool) -> Self {
        self.always_on_top = always_on_top;
        self
    }

    /// Iconify a fullscreen window automatically on focus loss
    pub fn with_auto_iconify(mut self, auto_iconify: bool) -> Self {
        self.auto_iconify = auto_iconify;
        self
    }

    /// Request a framebuffer with per-pixel transparency
    pub fn with_transparent_framebuffer(mut self, transparent: bool) -> Self {
        self.transparent_framebuffer = transparent;
        self
    }

    /// Synchronize buffer swaps with the monitor refresh rate
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Creation-time native attributes derived from these options
    pub(crate) fn hints(&self) -> WindowHints {
        WindowHints {
            resizable: self.resizable,
            decorated: self.decorated,
            always_on_top: self.always_on_top,
            auto_iconify: self.auto_iconify,
            transparent_framebuffer: self.transparent_framebuffer,
        }
    }

    /// Rasterize the icon set into the packed pixel buffers the native
    /// layer wants
    pub(crate) fn rasterized_icons(&self) -> Vec<IconImage> {
        self.icon
            .iter()
            .map(|icon| {
                let rgba = icon.to_rgba8();
                IconImage {
                    width: rgba.width(),
                    height: rgba.height(),
                    pixels: rgba.pixels().map(|p| u32::from_le_bytes(p.0)).collect(),
                }
            })
            .collect()
    }
}
