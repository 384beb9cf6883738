//! A retained pixel buffer, the contents of which survive between frames

use crate::{
    error::{Error, Result},
    geometry::Rect,
};

/// A `width` x `height` buffer of 0RGB pixels, stored row by row
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Canvas {
    /// A black canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    /// Size in pixels
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// All pixels, row by row
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Single pixel, `None` when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Overwrite every pixel of `rect` with `colour`.
    ///
    /// The rectangle must lie completely inside the canvas.
    pub fn fill_rect(&mut self, rect: Rect, colour: u32) -> Result<()> {
        if !rect.fits_in(self.width, self.height) {
            return Err(Error::Fill(format!(
                "{rect:?} is outside of the {}x{} surface",
                self.width, self.height
            )));
        }
        let stride = self.width as usize;
        let (x, w) = (rect.x as usize, rect.width as usize);
        for row in rect.y as usize..rect.bottom() as usize {
            let start = row * stride + x;
            self.pixels[start..start + w].fill(colour);
        }
        Ok(())
    }

    /// Overwrite the whole canvas with `colour`
    pub fn clear(&mut self, colour: u32) {
        self.pixels.fill(colour);
    }
}
