//! # pixwin
//!
//! A windowing and input layer over native OpenGL windows.
//!
//! ## Features
//!
//! - **Designated-thread marshalling**: all native calls run on the thread
//!   that owns the window system, windows are usable from anywhere
//! - **Frame-synchronous input**: button edges, cursor, scroll, typed text
//!   and joysticks frozen per frame
//! - **Off-screen presentation**: every window draws into a surface that is
//!   stretched onto the framebuffer each update
//! - **Fullscreen round trips**: monitor switching that restores the
//!   windowed placement
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pixwin::{GlfwDisplay, Window, WindowOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     pixwin::logging::init();
//!     let display = GlfwDisplay::init()?;
//!     pixwin::run(Box::new(display), |main| -> Result<(), pixwin::WindowError> {
//!         let options = WindowOptions::new().with_title("pixwin").with_vsync(true);
//!         let mut window = Window::create(&main, 1024, 768, options, |_bounds| {
//!             // build your rendering surface here
//!             todo!()
//!         })?;
//!         while !window.closed() {
//!             // draw, then:
//!             window.update();
//!         }
//!         Ok(())
//!     })?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::missing_panics_doc)]

pub mod config;
pub mod display;
pub mod input;
pub mod logging;
pub mod math;
pub mod monitor;
pub mod surface;
pub mod window;

mod mainthread;

pub use display::{DisplayError, GlfwDisplay};
pub use input::Button;
pub use mainthread::{run, MainContext, MainThreadHandle};
pub use monitor::Monitor;
pub use surface::{ComposeMethod, Rgba, Surface};
pub use window::{Window, WindowError, WindowOptions};

/// Common imports for pixwin users
pub mod prelude {
    pub use crate::{
        config::{ConfigError, WindowConfig},
        input::Button,
        mainthread::{run, MainThreadHandle},
        math::{Rect, Vec2},
        monitor::Monitor,
        surface::{ComposeMethod, Mat3, Rgba, Surface},
        window::{Window, WindowError, WindowOptions},
        GlfwDisplay,
    };
}
