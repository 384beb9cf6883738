use crate::error::{Error, Result};

/// Configuration for the window and the render loop, see [crate::run].
///
/// The defaults open an 800x600 window titled "hello world!" at the top left of the screen and
/// draw 100x100 rectangles as fast as possible, never clearing old ones.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Conf {
    /// Title of the window
    pub title: String,
    /// Inner size of the window, in physical pixels
    pub window_size: (u32, u32),
    /// Position of the window, in physical pixels
    pub window_pos: (i32, i32),
    /// Size of the rectangle filled every frame
    pub rect_size: (u32, u32),
    /// Maximum frames per second, `None` runs unbounded
    pub frame_cap: Option<u32>,
    /// Clear the whole surface before every fill, removing the trail of old rectangles
    pub clear_each_frame: bool,
}

impl Default for Conf {
    fn default() -> Self {
        Self {
            title: "hello world!".to_owned(),
            window_size: (800, 600),
            window_pos: (0, 0),
            rect_size: (100, 100),
            frame_cap: None,
            clear_each_frame: false,
        }
    }
}

impl Conf {
    /// Check that the rectangle can be placed inside the window
    pub fn validate(&self) -> Result<()> {
        let (w, h) = self.window_size;
        let (rw, rh) = self.rect_size;
        if w == 0 || h == 0 {
            return Err(Error::Config(format!("window size {w}x{h} has a zero dimension")));
        }
        if rw == 0 || rh == 0 {
            return Err(Error::Config(format!("rectangle size {rw}x{rh} has a zero dimension")));
        }
        if rw > w || rh > h {
            return Err(Error::Config(format!(
                "rectangle {rw}x{rh} does not fit in window {w}x{h}"
            )));
        }
        if self.frame_cap == Some(0) {
            return Err(Error::Config("frame cap must be at least 1".to_owned()));
        }
        Ok(())
    }
}
