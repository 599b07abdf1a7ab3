//! Monitor handles for fullscreen placement
//!
//! A [`Monitor`] is an opaque native handle plus the video mode cached at
//! enumeration time; the mode is only consulted during fullscreen
//! transitions. Two monitors are equal when they refer to the same native
//! handle, never by comparing modes.

use crate::display::{MonitorId, VideoMode};
use crate::mainthread::MainThreadHandle;

/// A connected monitor
#[derive(Debug, Clone)]
pub struct Monitor {
    pub(crate) id: MonitorId,
    name: String,
    pub(crate) mode: VideoMode,
}

impl Monitor {
    /// Enumerate all connected monitors
    pub fn all(main: &MainThreadHandle) -> Vec<Self> {
        main.run_sync(|ctx| {
            let display = ctx.display();
            let count = display.monitor_count();
            (0..count)
                .map(|index| {
                    let id = MonitorId(index);
                    (id, display.monitor_name(id), display.video_mode(id))
                })
                .collect::<Vec<_>>()
        })
        .into_iter()
        .map(|(id, name, mode)| Self { id, name, mode })
        .collect()
    }

    /// The system's primary monitor
    pub fn primary(main: &MainThreadHandle) -> Option<Self> {
        main.run_sync(|ctx| {
            let display = ctx.display();
            display
                .primary_monitor()
                .map(|id| (id, display.monitor_name(id), display.video_mode(id)))
        })
        .map(|(id, name, mode)| Self { id, name, mode })
    }

    pub(crate) fn from_parts(id: MonitorId, name: String, mode: VideoMode) -> Self {
        Self { id, name, mode }
    }

    /// Human-readable monitor name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolution of the active video mode in pixels
    pub fn size(&self) -> (u32, u32) {
        (self.mode.width, self.mode.height)
    }

    /// Refresh rate of the active video mode in Hz
    pub fn refresh_rate(&self) -> u32 {
        self.mode.refresh_rate
    }
}

impl PartialEq for Monitor {
    /// Identity comparison by native handle
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Monitor {}
