use crate::{error::Result, event::Event, geometry::Rect};

/// A window with a drawing surface, as far as the render loop is concerned.
///
/// [crate::window::WindowScreen] is the real one, tests use a scripted implementation.
pub trait Screen {
    /// Size of the drawing surface, in pixels
    fn size(&self) -> (u32, u32);

    /// Overwrite `rect` on the surface with `colour`, an 0RGB pixel value
    fn fill_rect(&mut self, rect: Rect, colour: u32) -> Result<()>;

    /// Overwrite the whole surface with `colour`
    fn clear(&mut self, colour: u32) -> Result<()>;

    /// Make everything drawn so far visible
    fn present(&mut self) -> Result<()>;

    /// Append every queued event to `events`, without blocking
    fn poll_events(&mut self, events: &mut Vec<Event>);
}
