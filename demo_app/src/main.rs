//! Window demo application
//!
//! Opens a window, mirrors input to the log and exercises fullscreen
//! switching. The surface here is a stub since this demo carries no
//! renderer of its own; a real application would hand `Window::create` a
//! surface backed by its rendering stack.

use pixwin::prelude::*;

/// Surface stand-in that only remembers its parameters
struct NullSurface {
    bounds: Rect,
    smooth: bool,
}

impl Surface for NullSurface {
    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn texture_size(&self) -> (u32, u32) {
        (self.bounds.w().round() as u32, self.bounds.h().round() as u32)
    }

    fn begin_frame(&mut self, _framebuffer_width: u32, _framebuffer_height: u32) {}

    fn blit(&mut self, _src: (u32, u32, u32, u32), _dst: (u32, u32, u32, u32)) {}

    fn end_frame(&mut self) {}

    fn clear(&mut self, _color: Rgba) {}

    fn set_matrix(&mut self, _matrix: Mat3) {}

    fn set_color_mask(&mut self, _mask: Rgba) {}

    fn set_compose_method(&mut self, _method: ComposeMethod) {}

    fn set_smooth(&mut self, smooth: bool) {
        self.smooth = smooth;
    }

    fn smooth(&self) -> bool {
        self.smooth
    }

    fn color_at(&self, _at: Vec2) -> Rgba {
        Rgba::TRANSPARENT
    }
}

fn run_demo(main: &MainThreadHandle) -> Result<(), WindowError> {
    let options = WindowOptions::new()
        .with_title("pixwin demo")
        .with_resizable(true)
        .with_vsync(true);
    let mut window = Window::create(main, 1024, 768, options, |bounds| {
        Box::new(NullSurface {
            bounds,
            smooth: false,
        })
    })?;

    for monitor in Monitor::all(main) {
        let (width, height) = monitor.size();
        log::info!(
            "monitor \"{}\": {}x{} @ {} Hz",
            monitor.name(),
            width,
            height,
            monitor.refresh_rate()
        );
    }

    while !window.closed() {
        window.update();

        if window.just_pressed(Button::Escape) {
            window.set_closed(true);
        }
        if window.just_pressed(Button::F) {
            match window.monitor() {
                Some(_) => window.set_monitor(None),
                None => {
                    if let Some(primary) = Monitor::primary(main) {
                        window.set_monitor(Some(&primary));
                    }
                }
            }
        }
        if window.just_pressed(Button::MOUSE_LEFT) {
            let at = window.mouse_position();
            log::info!("click at ({:.1}, {:.1})", at.x, at.y);
        }
        if !window.typed().is_empty() {
            log::info!("typed: {:?}", window.typed());
        }
        for slot in 0..16 {
            if window.joystick_just_pressed(slot, 0) {
                log::info!("joystick {} ({}) button 0", slot, window.joystick_name(slot));
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    log::info!("Initializing display backend...");
    let display = GlfwDisplay::init()?;
    log::info!("Display backend ready");

    pixwin::run(Box::new(display), |main| run_demo(&main))?;
    log::info!("Demo finished");
    Ok(())
}
