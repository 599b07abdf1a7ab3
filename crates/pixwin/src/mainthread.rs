//! Main-thread execution discipline
//!
//! The native display layer is not thread-safe: every window, context and
//! event-polling call must happen on one designated thread. [`run`] turns
//! the calling thread into that designated thread, spawns the application on
//! a worker thread, and processes submitted jobs strictly in submission
//! order until the application returns.
//!
//! Jobs receive the [`MainContext`], which owns the display backend, the
//! per-window presentation surfaces, and the single "currently bound
//! context" field. Centralizing the bound-context state here keeps the
//! invariant in one place: at most one context is current at a time, and
//! re-binding the already-current window is a no-op.

use std::collections::HashMap;

use crossbeam_channel::{bounded, unbounded, Sender};

use crate::display::{Display, WindowId};
use crate::surface::Surface;

type Job = Box<dyn FnOnce(&mut MainContext) + Send>;

/// State owned by the designated thread
pub struct MainContext {
    display: Box<dyn Display>,
    surfaces: HashMap<WindowId, Box<dyn Surface>>,
    windows: Vec<WindowId>,
    bound: Option<WindowId>,
}

impl MainContext {
    fn new(display: Box<dyn Display>) -> Self {
        Self {
            display,
            surfaces: HashMap::new(),
            windows: Vec::new(),
            bound: None,
        }
    }

    /// The native display backend
    pub fn display(&mut self) -> &mut dyn Display {
        self.display.as_mut()
    }

    /// The window whose context a new window should share resources with
    pub fn share_anchor(&self) -> Option<WindowId> {
        self.windows.last().copied()
    }

    /// Record a freshly created window
    pub fn register_window(&mut self, id: WindowId) {
        self.windows.push(id);
    }

    /// Attach the presentation surface backing a window
    pub fn install_surface(&mut self, id: WindowId, surface: Box<dyn Surface>) {
        self.surfaces.insert(id, surface);
    }

    /// The presentation surface backing a window
    ///
    /// Every registered window installs a surface during creation, so a
    /// missing entry is an internal contract violation.
    pub fn surface(&mut self, id: WindowId) -> &mut dyn Surface {
        self.surfaces
            .get_mut(&id)
            .expect("window has no surface installed")
            .as_mut()
    }

    /// Make the window's context current, skipping redundant switches
    pub fn bind(&mut self, id: WindowId) {
        if self.bound != Some(id) {
            self.display.make_current(id);
            self.bound = Some(id);
        }
    }

    /// Release whatever context is current
    pub fn unbind(&mut self) {
        self.display.detach_current();
        self.bound = None;
    }

    /// Tear down a window: surface, registration, native resources
    pub fn remove_window(&mut self, id: WindowId) {
        if self.bound == Some(id) {
            self.unbind();
        }
        self.surfaces.remove(&id);
        self.windows.retain(|w| *w != id);
        self.display.destroy_window(id);
    }
}

/// Cloneable handle for submitting work to the designated thread
#[derive(Clone, Debug)]
pub struct MainThreadHandle {
    tx: Sender<Job>,
}

impl MainThreadHandle {
    /// Execute a closure on the designated thread and block for its result
    ///
    /// Jobs run strictly in submission order. Panics if the executor has
    /// already shut down; calling this from the designated thread itself
    /// would deadlock and is a usage error.
    pub fn run_sync<R, F>(&self, job: F) -> R
    where
        F: FnOnce(&mut MainContext) -> R + Send + 'static,
        R: Send + 'static,
    {
        let (done_tx, done_rx) = bounded(1);
        self.tx
            .send(Box::new(move |ctx: &mut MainContext| {
                let _ = done_tx.send(job(ctx));
            }))
            .expect("main thread executor has shut down");
        done_rx
            .recv()
            .expect("main thread executor dropped a submitted job")
    }

    /// Enqueue a closure on the designated thread without waiting
    ///
    /// Submissions after shutdown are silently dropped, which lets `Drop`
    /// implementations submit cleanup without caring about teardown order.
    pub fn run_async<F>(&self, job: F)
    where
        F: FnOnce(&mut MainContext) + Send + 'static,
    {
        let _ = self.tx.send(Box::new(job));
    }
}

/// Claim the calling thread as the designated thread and run the application
///
/// `app` executes on a worker thread with a [`MainThreadHandle`] for
/// submitting native work. `run` returns `app`'s result once it finishes and
/// all submitted jobs have drained; a panic in `app` is propagated.
pub fn run<T, F>(display: Box<dyn Display>, app: F) -> T
where
    T: Send,
    F: FnOnce(MainThreadHandle) -> T + Send,
{
    let (tx, rx) = unbounded::<Job>();
    let handle = MainThreadHandle { tx };
    let mut ctx = MainContext::new(display);

    std::thread::scope(|scope| {
        let worker = scope.spawn(move || app(handle));
        // Runs until the application and every handle clone are gone.
        while let Ok(job) = rx.recv() {
            job(&mut ctx);
        }
        match worker.join() {
            Ok(value) => value,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    })
}
