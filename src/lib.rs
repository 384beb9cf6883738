#![warn(missing_docs)]
#![doc = include_str!("../readme.md")]

/// A retained pixel buffer
pub mod canvas;
/// Window and render loop configuration
pub mod config;
/// Errors, and how they map to exit codes
pub mod error;
/// Window events, as far as the render loop cares about them
pub mod event;
/// Rectangles and random placement
pub mod geometry;
/// The render loop itself
pub mod render_loop;
/// The interface between the render loop and a window
pub mod screen;
#[cfg(feature = "window")]
/// The real window, using winit and softbuffer
pub mod window;

pub use config::Conf;
pub use error::{Error, Result};
pub use render_loop::{RenderLoop, RunSummary};

/// The rand crate is used to place and colour rectangles
pub use rand;

use rand::Rng;
use screen::Screen;

/// Open a screen with `open`, then draw on it until the user quits.
///
/// `open` is only called once `conf` is known to be valid, and nothing is drawn if it fails.
/// The screen is dropped, closing any window, before this returns.
pub fn run_with<S: Screen>(
    conf: &Conf,
    open: impl FnOnce(&Conf) -> Result<S>,
    rng: impl Rng,
) -> Result<RunSummary> {
    conf.validate()?;
    let screen = open(conf)?;
    RenderLoop::new(screen, rng, conf)?.run()
}

#[cfg(feature = "window")]
/// Open a real window described by `conf` and draw on it until it is closed.
///
/// # NOTE
/// Must be called from the main thread.
pub fn run(conf: &Conf) -> Result<RunSummary> {
    run_with(conf, window::WindowScreen::open, rand::thread_rng())
}
