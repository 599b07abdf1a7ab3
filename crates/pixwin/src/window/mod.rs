//! Window lifecycle, presentation and per-frame input sampling
//!
//! A [`Window`] pairs a native window on the designated thread with an
//! off-screen surface and a frame-synchronous input pipeline. All native
//! access is marshalled through [`MainThreadHandle`]; the window itself
//! may live on any thread. Input queries answer from snapshots frozen at
//! the last [`Window::update`], so a held key reads the same for the
//! whole frame no matter when during the frame it is asked.

mod options;

pub use options::WindowOptions;

use log::{debug, info};
use thiserror::Error;

use crate::display::{DisplayError, DisplayEvent, WindowId};
use crate::input::joystick::{GamepadSnapshot, JoystickPoller, JOYSTICK_COUNT};
use crate::input::{Button, InputBuffer};
use crate::mainthread::MainThreadHandle;
use crate::math::{Rect, Vec2};
use crate::monitor::Monitor;
use crate::surface::{ComposeMethod, Mat3, Rgba, Surface};

/// Errors surfaced by window creation
#[derive(Error, Debug)]
pub enum WindowError {
    /// The native layer refused to create the window or its context
    #[error("creating window failed: {0}")]
    Creation(#[from] DisplayError),
}

/// Windowed placement remembered across a fullscreen round trip
#[derive(Debug, Clone, Copy, Default)]
struct RestorePlacement {
    pos: (i32, i32),
    size: (u32, u32),
}

/// A native window together with its surface and input state
#[derive(Debug)]
pub struct Window {
    main: MainThreadHandle,
    id: WindowId,
    title: String,
    bounds: Rect,
    vsync: bool,
    cursor_visible: bool,
    cursor_inside: bool,
    restore: RestorePlacement,
    input: InputBuffer,
    joysticks: JoystickPoller,
}

impl Window {
    /// Create a window of `width x height` logical pixels
    ///
    /// `make_surface` runs on the designated thread with the new context
    /// current, so it may allocate native resources; it receives the
    /// initial bounds and returns the surface that every frame is drawn
    /// into. Contexts of all windows created through the same handle
    /// share resources.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::Creation`] when the native layer cannot
    /// create the window.
    pub fn create<S>(
        main: &MainThreadHandle,
        width: u32,
        height: u32,
        options: WindowOptions,
        make_surface: S,
    ) -> Result<Self, WindowError>
    where
        S: FnOnce(Rect) -> Box<dyn Surface> + Send + 'static,
    {
        let hints = options.hints();
        let icons = options.rasterized_icons();
        let title = options.title.clone();
        let bounds = Rect::new(0.0, 0.0, f64::from(width), f64::from(height));

        let id = main.run_sync(move |ctx| -> Result<WindowId, DisplayError> {
            let share = ctx.share_anchor();
            let id = ctx
                .display()
                .create_window(width, height, &title, &hints, share)?;
            ctx.register_window(id);
            if !icons.is_empty() {
                ctx.display().set_icon(id, &icons);
            }
            ctx.bind(id);
            let surface = make_surface(bounds);
            ctx.install_surface(id, surface);
            ctx.unbind();
            Ok(id)
        })?;

        info!("created window \"{}\" ({}x{})", options.title, width, height);

        let mut window = Self {
            main: main.clone(),
            id,
            title: options.title,
            bounds,
            vsync: options.vsync,
            cursor_visible: true,
            cursor_inside: false,
            restore: RestorePlacement::default(),
            input: InputBuffer::new(),
            joysticks: JoystickPoller::new(),
        };

        if let Some(monitor) = options.monitor.clone() {
            window.set_monitor(Some(&monitor));
        }
        window.update();
        Ok(window)
    }

    /// Present the surface and advance one input frame
    ///
    /// Reconciles the logical bounds with the native size, blits the
    /// surface to the framebuffer, swaps, then drains events and samples
    /// gamepads so the frozen input snapshot moves forward exactly one
    /// frame.
    pub fn update(&mut self) {
        let id = self.id;

        let (width, height) = self.main.run_sync(move |ctx| ctx.display().window_size(id));
        self.bounds = Rect::from_min_size(self.bounds.min, f64::from(width), f64::from(height));

        let bounds = self.bounds;
        let vsync = self.vsync;
        let (events, pads) = self.main.run_sync(move |ctx| {
            ctx.surface(id).set_bounds(bounds);

            let (fb_width, fb_height) = ctx.display().framebuffer_size(id);
            ctx.bind(id);
            ctx.surface(id).begin_frame(fb_width, fb_height);
            let (tex_width, tex_height) = ctx.surface(id).texture_size();
            ctx.surface(id)
                .blit((0, 0, tex_width, tex_height), (0, 0, fb_width, fb_height));
            ctx.surface(id).end_frame();
            // the interval is latched right before the swap so a runtime
            // vsync toggle takes effect on this very frame
            ctx.display().set_swap_interval(u32::from(vsync));
            ctx.display().swap_buffers(id);
            ctx.unbind();

            ctx.display().poll_events();
            let events = ctx.display().drain_events(id);

            let pads = (0..JOYSTICK_COUNT)
                .map(|slot| {
                    if ctx.display().gamepad_present(slot) {
                        GamepadSnapshot {
                            present: true,
                            name: ctx.display().gamepad_name(slot),
                            buttons: ctx.display().gamepad_buttons(slot),
                            axes: ctx.display().gamepad_axes(slot),
                        }
                    } else {
                        GamepadSnapshot::default()
                    }
                })
                .collect::<Vec<_>>();
            (events, pads)
        });

        for event in &events {
            if let DisplayEvent::CursorEnter(inside) = event {
                self.cursor_inside = *inside;
            } else {
                self.input.apply(event, &self.bounds);
            }
        }
        self.input.rotate();
        self.joysticks.refresh(pads);
    }

    /// Whether the user asked the window to close
    pub fn closed(&self) -> bool {
        let id = self.id;
        self.main.run_sync(move |ctx| ctx.display().should_close(id))
    }

    /// Set or clear the close request flag
    pub fn set_closed(&self, closed: bool) {
        let id = self.id;
        self.main
            .run_sync(move |ctx| ctx.display().set_should_close(id, closed));
    }

    /// Current window title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Change the window title
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
        let id = self.id;
        let title = self.title.clone();
        self.main
            .run_sync(move |ctx| ctx.display().set_title(id, &title));
    }

    /// Logical bounds of the drawable area
    ///
    /// The rectangle uses Y-up coordinates; its extent tracks the native
    /// size, its minimum corner is wherever the caller last put it.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Move and resize the logical bounds
    ///
    /// The minimum corner is kept verbatim as the new coordinate origin;
    /// the extent is rounded to whole pixels for the native resize.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        let id = self.id;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (width, height) = (bounds.w().round() as u32, bounds.h().round() as u32);
        self.main
            .run_sync(move |ctx| ctx.display().set_window_size(id, width, height));
    }

    /// Resize the drawable area without moving the coordinate origin
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.set_bounds(Rect::from_min_size(self.bounds.min, width, height));
    }

    /// Position of the window's upper-left corner on the desktop
    pub fn pos(&self) -> Vec2 {
        let id = self.id;
        let (x, y) = self.main.run_sync(move |ctx| ctx.display().window_pos(id));
        Vec2::new(f64::from(x), f64::from(y))
    }

    /// Move the window on the desktop; ignored while fullscreen
    pub fn set_pos(&mut self, pos: Vec2) {
        let id = self.id;
        #[allow(clippy::cast_possible_truncation)]
        let (x, y) = (pos.x.round() as i32, pos.y.round() as i32);
        self.main.run_sync(move |ctx| {
            if ctx.display().window_monitor(id).is_none() {
                ctx.display().set_window_pos(id, x, y);
            }
        });
    }

    /// The monitor the window is fullscreen on, `None` while windowed
    pub fn monitor(&self) -> Option<Monitor> {
        let id = self.id;
        self.main
            .run_sync(move |ctx| {
                let display = ctx.display();
                display
                    .window_monitor(id)
                    .map(|mid| (mid, display.monitor_name(mid), display.video_mode(mid)))
            })
            .map(|(mid, name, mode)| Monitor::from_parts(mid, name, mode))
    }

    /// Switch between fullscreen and windowed mode
    ///
    /// `Some(monitor)` goes fullscreen at the monitor's video mode,
    /// remembering the windowed placement first; `None` restores that
    /// placement. Asking for the state the window is already in does
    /// nothing, so the restore record survives repeated calls.
    pub fn set_monitor(&mut self, monitor: Option<&Monitor>) {
        let id = self.id;
        let current = self
            .main
            .run_sync(move |ctx| ctx.display().window_monitor(id));
        if current == monitor.map(|m| m.id) {
            return;
        }
        match monitor {
            Some(monitor) => {
                let (pos, size) = self.main.run_sync(move |ctx| {
                    (ctx.display().window_pos(id), ctx.display().window_size(id))
                });
                self.restore = RestorePlacement { pos, size };
                debug!("window {id:?} entering fullscreen on \"{}\"", monitor.name());
                let target = monitor.id;
                let mode = monitor.mode;
                self.main.run_sync(move |ctx| {
                    ctx.display().set_window_monitor(
                        id,
                        Some(target),
                        0,
                        0,
                        mode.width,
                        mode.height,
                        mode.refresh_rate,
                    );
                });
            }
            None => {
                let restore = self.restore;
                debug!("window {id:?} leaving fullscreen");
                self.main.run_sync(move |ctx| {
                    ctx.display().set_window_monitor(
                        id,
                        None,
                        restore.pos.0,
                        restore.pos.1,
                        restore.size.0,
                        restore.size.1,
                        0,
                    );
                });
            }
        }
    }

    /// Whether the window has input focus
    pub fn focused(&self) -> bool {
        let id = self.id;
        self.main.run_sync(move |ctx| ctx.display().focused(id))
    }

    /// Whether buffer swaps wait for the monitor refresh
    pub fn vsync(&self) -> bool {
        self.vsync
    }

    /// Toggle vsync; applies at the next [`Window::update`]
    pub fn set_vsync(&mut self, vsync: bool) {
        self.vsync = vsync;
    }

    /// Whether the cursor is drawn over the window
    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Show or hide the cursor while over the window
    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
        let id = self.id;
        self.main
            .run_sync(move |ctx| ctx.display().set_cursor_visible(id, visible));
    }

    /// Whether the cursor is inside the window area
    pub fn mouse_inside_window(&self) -> bool {
        self.cursor_inside
    }

    /// Whether `button` was down at the last [`Window::update`]
    pub fn pressed(&self, button: Button) -> bool {
        self.input.pressed(button)
    }

    /// Whether `button` went down within the last frame
    pub fn just_pressed(&self, button: Button) -> bool {
        self.input.just_pressed(button)
    }

    /// Whether `button` went up within the last frame
    pub fn just_released(&self, button: Button) -> bool {
        self.input.just_released(button)
    }

    /// Whether a key repeat for `button` arrived within the last frame
    pub fn repeated(&self, button: Button) -> bool {
        self.input.repeated(button)
    }

    /// Cursor position in logical bounds coordinates
    pub fn mouse_position(&self) -> Vec2 {
        self.input.mouse()
    }

    /// Cursor position one frame earlier
    pub fn mouse_previous_position(&self) -> Vec2 {
        self.input.previous_mouse()
    }

    /// Scroll wheel motion accumulated over the last frame
    pub fn mouse_scroll(&self) -> Vec2 {
        self.input.scroll()
    }

    /// Text typed over the last frame
    pub fn typed(&self) -> &str {
        self.input.typed()
    }

    /// Warp the cursor to `pos` in logical bounds coordinates
    ///
    /// Ignored when `pos` lies outside the drawable area. On success the
    /// frozen snapshots are overwritten, so the warp does not register as
    /// mouse motion on the next frame.
    pub fn set_mouse_position(&mut self, pos: Vec2) {
        let local = pos - self.bounds.min;
        if local.x < 0.0 || local.x > self.bounds.w() || local.y < 0.0 || local.y > self.bounds.h()
        {
            return;
        }
        let id = self.id;
        let (x, y) = (local.x, self.bounds.h() - local.y);
        self.main
            .run_sync(move |ctx| ctx.display().set_cursor_pos(id, x, y));
        self.input.force_mouse(pos);
    }

    /// Whether a joystick is connected in `slot`
    pub fn joystick_present(&self, slot: usize) -> bool {
        self.joysticks.present(slot)
    }

    /// Device name of the joystick in `slot`, empty when disconnected
    pub fn joystick_name(&self, slot: usize) -> &str {
        self.joysticks.name(slot)
    }

    /// Number of buttons on the joystick in `slot`
    pub fn joystick_button_count(&self, slot: usize) -> usize {
        self.joysticks.button_count(slot)
    }

    /// Number of axes on the joystick in `slot`
    pub fn joystick_axis_count(&self, slot: usize) -> usize {
        self.joysticks.axis_count(slot)
    }

    /// Whether joystick button `button` in `slot` was down last frame
    pub fn joystick_pressed(&self, slot: usize, button: usize) -> bool {
        self.joysticks.pressed(slot, button)
    }

    /// Whether joystick button `button` in `slot` went down last frame
    pub fn joystick_just_pressed(&self, slot: usize, button: usize) -> bool {
        self.joysticks.just_pressed(slot, button)
    }

    /// Whether joystick button `button` in `slot` went up last frame
    pub fn joystick_just_released(&self, slot: usize, button: usize) -> bool {
        self.joysticks.just_released(slot, button)
    }

    /// Value of axis `axis` on the joystick in `slot`
    pub fn joystick_axis(&self, slot: usize, axis: usize) -> f64 {
        self.joysticks.axis(slot, axis)
    }

    /// Fill the whole surface with `color`
    pub fn clear(&self, color: Rgba) {
        let id = self.id;
        self.main.run_sync(move |ctx| ctx.surface(id).clear(color));
    }

    /// Set the transform applied to subsequent drawing
    pub fn set_matrix(&self, matrix: Mat3) {
        let id = self.id;
        self.main
            .run_sync(move |ctx| ctx.surface(id).set_matrix(matrix));
    }

    /// Set the color every subsequent draw is multiplied by
    pub fn set_color_mask(&self, mask: Rgba) {
        let id = self.id;
        self.main
            .run_sync(move |ctx| ctx.surface(id).set_color_mask(mask));
    }

    /// Set how subsequent draws compose onto the surface
    pub fn set_compose_method(&self, method: ComposeMethod) {
        let id = self.id;
        self.main
            .run_sync(move |ctx| ctx.surface(id).set_compose_method(method));
    }

    /// Toggle smooth filtering when the surface is stretched
    pub fn set_smooth(&self, smooth: bool) {
        let id = self.id;
        self.main
            .run_sync(move |ctx| ctx.surface(id).set_smooth(smooth));
    }

    /// Whether smooth filtering is on
    pub fn smooth(&self) -> bool {
        let id = self.id;
        self.main.run_sync(move |ctx| ctx.surface(id).smooth())
    }

    /// Color of the surface pixel containing `at`
    pub fn color_at(&self, at: Vec2) -> Rgba {
        let id = self.id;
        self.main.run_sync(move |ctx| ctx.surface(id).color_at(at))
    }

    /// Release the window deterministically
    ///
    /// Equivalent to dropping it; provided so teardown reads as an
    /// explicit lifecycle step at call sites.
    pub fn destroy(self) {
        drop(self);
    }

    /// Run `f` on the designated thread with the surface bound
    ///
    /// This is the escape hatch for drawing code that needs the surface
    /// and its context directly.
    pub fn with_canvas<R, F>(&self, f: F) -> R
    where
        R: Send + 'static,
        F: FnOnce(&mut dyn Surface) -> R + Send + 'static,
    {
        let id = self.id;
        self.main.run_sync(move |ctx| {
            ctx.bind(id);
            let result = f(ctx.surface(id));
            ctx.unbind();
            result
        })
    }
}

impl Drop for Window {
    /// Tear down the native window on the designated thread
    ///
    /// Submitted asynchronously; if the executor is already gone the
    /// native layer has torn everything down anyway.
    fn drop(&mut self) {
        let id = self.id;
        debug!("destroying window {id:?}");
        self.main.run_async(move |ctx| ctx.remove_window(id));
    }
}
