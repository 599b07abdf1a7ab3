//! Scripted in-memory display backend for headless tests
//!
//! The mock keeps its whole world behind an `Arc<Mutex<_>>` so tests hold a
//! handle to the same state the executor drives: they queue input events,
//! plug and unplug gamepads, and then assert on what the window layer did.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{
    Display, DisplayError, DisplayEvent, IconImage, MonitorId, VideoMode, WindowHints, WindowId,
};
use crate::math::{Rect, Vec2};
use crate::surface::{ComposeMethod, Mat3, PixelRect, Rgba, Surface};

pub(crate) type SharedState = Arc<Mutex<MockState>>;

#[derive(Debug, Clone, Default)]
pub(crate) struct MockPad {
    pub present: bool,
    pub name: String,
    pub buttons: Vec<bool>,
    pub axes: Vec<f32>,
}

#[derive(Debug, Clone)]
pub(crate) struct MockMonitor {
    pub name: String,
    pub mode: VideoMode,
}

#[derive(Debug)]
pub(crate) struct MockWindow {
    pub size: (u32, u32),
    pub fb_scale: u32,
    pub pos: (i32, i32),
    pub title: String,
    pub hints: WindowHints,
    pub share: Option<WindowId>,
    pub should_close: bool,
    pub focused: bool,
    pub cursor_visible: bool,
    pub warped_to: Option<(f64, f64)>,
    pub monitor: Option<MonitorId>,
    pub icon_count: usize,
    pub set_monitor_calls: usize,
    pub pending: Vec<DisplayEvent>,
}

pub(crate) struct MockState {
    next_id: u64,
    pub fail_create: bool,
    pub windows: HashMap<WindowId, MockWindow>,
    pub destroyed: Vec<WindowId>,
    pub monitors: Vec<MockMonitor>,
    pub pads: Vec<MockPad>,
    pub current: Option<WindowId>,
    pub make_current_calls: usize,
    pub detach_calls: usize,
    pub swap_interval: u32,
    pub interval_at_last_swap: Option<u32>,
    pub swaps: usize,
    pub poll_calls: usize,
}

impl MockState {
    /// The single window most tests create
    pub fn only_window(&self) -> WindowId {
        assert_eq!(self.windows.len(), 1, "expected exactly one mock window");
        *self.windows.keys().next().unwrap()
    }

    /// Queue an input event for the next poll
    pub fn push_event(&mut self, id: WindowId, event: DisplayEvent) {
        self.windows.get_mut(&id).unwrap().pending.push(event);
    }

    pub fn window(&self, id: WindowId) -> &MockWindow {
        self.windows.get(&id).unwrap()
    }

    pub fn window_mut(&mut self, id: WindowId) -> &mut MockWindow {
        self.windows.get_mut(&id).unwrap()
    }

    pub fn pad_mut(&mut self, slot: usize) -> &mut MockPad {
        &mut self.pads[slot]
    }
}

/// Display backend double driven entirely from test code
pub(crate) struct MockDisplay {
    state: SharedState,
}

impl MockDisplay {
    /// A fresh backend with one 1920x1080@60 monitor and 16 empty pad slots
    pub fn new() -> (Self, SharedState) {
        let state = Arc::new(Mutex::new(MockState {
            next_id: 1,
            fail_create: false,
            windows: HashMap::new(),
            destroyed: Vec::new(),
            monitors: vec![MockMonitor {
                name: "Mock Monitor".to_owned(),
                mode: VideoMode {
                    width: 1920,
                    height: 1080,
                    refresh_rate: 60,
                },
            }],
            pads: vec![MockPad::default(); 16],
            current: None,
            make_current_calls: 0,
            detach_calls: 0,
            swap_interval: 0,
            interval_at_last_swap: None,
            swaps: 0,
            poll_calls: 0,
        }));
        (
            Self {
                state: Arc::clone(&state),
            },
            state,
        )
    }
}

impl Display for MockDisplay {
    fn create_window(
        &mut self,
        width: u32,
        height: u32,
        title: &str,
        hints: &WindowHints,
        share: Option<WindowId>,
    ) -> Result<WindowId, DisplayError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_create {
            return Err(DisplayError::WindowCreation("no graphics device".to_owned()));
        }
        let id = WindowId(state.next_id);
        state.next_id += 1;
        state.windows.insert(
            id,
            MockWindow {
                size: (width, height),
                fb_scale: 1,
                pos: (0, 0),
                title: title.to_owned(),
                hints: *hints,
                share,
                should_close: false,
                focused: true,
                cursor_visible: true,
                warped_to: None,
                monitor: None,
                icon_count: 0,
                set_monitor_calls: 0,
                pending: Vec::new(),
            },
        );
        Ok(id)
    }

    fn destroy_window(&mut self, id: WindowId) {
        let mut state = self.state.lock().unwrap();
        state.windows.remove(&id);
        state.destroyed.push(id);
    }

    fn window_size(&mut self, id: WindowId) -> (u32, u32) {
        self.state.lock().unwrap().window(id).size
    }

    fn set_window_size(&mut self, id: WindowId, width: u32, height: u32) {
        self.state.lock().unwrap().window_mut(id).size = (width, height);
    }

    fn framebuffer_size(&mut self, id: WindowId) -> (u32, u32) {
        let state = self.state.lock().unwrap();
        let window = state.window(id);
        (
            window.size.0 * window.fb_scale,
            window.size.1 * window.fb_scale,
        )
    }

    fn window_pos(&mut self, id: WindowId) -> (i32, i32) {
        self.state.lock().unwrap().window(id).pos
    }

    fn set_window_pos(&mut self, id: WindowId, x: i32, y: i32) {
        self.state.lock().unwrap().window_mut(id).pos = (x, y);
    }

    fn set_title(&mut self, id: WindowId, title: &str) {
        self.state.lock().unwrap().window_mut(id).title = title.to_owned();
    }

    fn set_icon(&mut self, id: WindowId, icons: &[IconImage]) {
        self.state.lock().unwrap().window_mut(id).icon_count = icons.len();
    }

    fn focused(&mut self, id: WindowId) -> bool {
        self.state.lock().unwrap().window(id).focused
    }

    fn should_close(&mut self, id: WindowId) -> bool {
        self.state.lock().unwrap().window(id).should_close
    }

    fn set_should_close(&mut self, id: WindowId, close: bool) {
        self.state.lock().unwrap().window_mut(id).should_close = close;
    }

    fn set_cursor_visible(&mut self, id: WindowId, visible: bool) {
        self.state.lock().unwrap().window_mut(id).cursor_visible = visible;
    }

    fn set_cursor_pos(&mut self, id: WindowId, x: f64, y: f64) {
        self.state.lock().unwrap().window_mut(id).warped_to = Some((x, y));
    }

    fn make_current(&mut self, id: WindowId) {
        let mut state = self.state.lock().unwrap();
        state.current = Some(id);
        state.make_current_calls += 1;
    }

    fn detach_current(&mut self) {
        let mut state = self.state.lock().unwrap();
        state.current = None;
        state.detach_calls += 1;
    }

    fn swap_buffers(&mut self, _id: WindowId) {
        let mut state = self.state.lock().unwrap();
        state.swaps += 1;
        state.interval_at_last_swap = Some(state.swap_interval);
    }

    fn set_swap_interval(&mut self, interval: u32) {
        self.state.lock().unwrap().swap_interval = interval;
    }

    fn poll_events(&mut self) {
        self.state.lock().unwrap().poll_calls += 1;
    }

    fn drain_events(&mut self, id: WindowId) -> Vec<DisplayEvent> {
        std::mem::take(&mut self.state.lock().unwrap().window_mut(id).pending)
    }

    fn monitor_count(&mut self) -> usize {
        self.state.lock().unwrap().monitors.len()
    }

    fn primary_monitor(&mut self) -> Option<MonitorId> {
        let state = self.state.lock().unwrap();
        (!state.monitors.is_empty()).then_some(MonitorId(0))
    }

    fn monitor_name(&mut self, monitor: MonitorId) -> String {
        self.state.lock().unwrap().monitors[monitor.0].name.clone()
    }

    fn video_mode(&mut self, monitor: MonitorId) -> VideoMode {
        self.state.lock().unwrap().monitors[monitor.0].mode
    }

    fn window_monitor(&mut self, id: WindowId) -> Option<MonitorId> {
        self.state.lock().unwrap().window(id).monitor
    }

    fn set_window_monitor(
        &mut self,
        id: WindowId,
        monitor: Option<MonitorId>,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        _refresh_rate: u32,
    ) {
        let mut state = self.state.lock().unwrap();
        let window = state.window_mut(id);
        window.set_monitor_calls += 1;
        window.monitor = monitor;
        window.size = (width, height);
        window.pos = (x, y);
    }

    fn gamepad_present(&mut self, slot: usize) -> bool {
        self.state
            .lock()
            .unwrap()
            .pads
            .get(slot)
            .is_some_and(|p| p.present)
    }

    fn gamepad_name(&mut self, slot: usize) -> String {
        self.state.lock().unwrap().pads[slot].name.clone()
    }

    fn gamepad_buttons(&mut self, slot: usize) -> Vec<bool> {
        self.state.lock().unwrap().pads[slot].buttons.clone()
    }

    fn gamepad_axes(&mut self, slot: usize) -> Vec<f32> {
        self.state.lock().unwrap().pads[slot].axes.clone()
    }
}

#[derive(Debug)]
pub(crate) struct SurfaceLog {
    pub bounds: Rect,
    pub begins: Vec<(u32, u32)>,
    pub blits: Vec<(PixelRect, PixelRect)>,
    pub ends: usize,
    pub clears: Vec<Rgba>,
    pub smooth: bool,
}

pub(crate) type SharedSurfaceLog = Arc<Mutex<SurfaceLog>>;

/// Surface double recording every presentation call
pub(crate) struct MockSurface {
    log: SharedSurfaceLog,
}

impl MockSurface {
    pub fn new(bounds: Rect) -> (Self, SharedSurfaceLog) {
        let log = Arc::new(Mutex::new(SurfaceLog {
            bounds,
            begins: Vec::new(),
            blits: Vec::new(),
            ends: 0,
            clears: Vec::new(),
            smooth: false,
        }));
        (
            Self {
                log: Arc::clone(&log),
            },
            log,
        )
    }
}

impl Surface for MockSurface {
    fn set_bounds(&mut self, bounds: Rect) {
        self.log.lock().unwrap().bounds = bounds;
    }

    fn texture_size(&self) -> (u32, u32) {
        let log = self.log.lock().unwrap();
        (log.bounds.w().round() as u32, log.bounds.h().round() as u32)
    }

    fn begin_frame(&mut self, framebuffer_width: u32, framebuffer_height: u32) {
        self.log
            .lock()
            .unwrap()
            .begins
            .push((framebuffer_width, framebuffer_height));
    }

    fn blit(&mut self, src: PixelRect, dst: PixelRect) {
        self.log.lock().unwrap().blits.push((src, dst));
    }

    fn end_frame(&mut self) {
        self.log.lock().unwrap().ends += 1;
    }

    fn clear(&mut self, color: Rgba) {
        self.log.lock().unwrap().clears.push(color);
    }

    fn set_matrix(&mut self, _matrix: Mat3) {}

    fn set_color_mask(&mut self, _mask: Rgba) {}

    fn set_compose_method(&mut self, _method: ComposeMethod) {}

    fn set_smooth(&mut self, smooth: bool) {
        self.log.lock().unwrap().smooth = smooth;
    }

    fn smooth(&self) -> bool {
        self.log.lock().unwrap().smooth
    }

    fn color_at(&self, _at: Vec2) -> Rgba {
        Rgba::TRANSPARENT
    }
}
