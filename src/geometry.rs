use rand::Rng;

/// An axis aligned rectangle in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Width, in pixels
    pub width: u32,
    /// Height, in pixels
    pub height: u32,
}

impl Rect {
    /// Create a rectangle at the origin with the given size
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Exclusive right edge
    pub fn right(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> u64 {
        self.y as u64 + self.height as u64
    }

    /// Whether the whole rectangle lies inside a `width` x `height` area anchored at the origin
    pub fn fits_in(&self, width: u32, height: u32) -> bool {
        self.right() <= width as u64 && self.bottom() <= height as u64
    }

    /// Move the rectangle to a uniformly random position where it doesn't clip a
    /// `width` x `height` area, so `x` is in `[0, width - self.width)`, and the same for `y`.
    ///
    /// A rectangle that spans an axis completely is always placed at 0 on that axis.
    pub fn place_randomly(&mut self, rng: &mut impl Rng, width: u32, height: u32) {
        self.x = random_offset(rng, width.saturating_sub(self.width));
        self.y = random_offset(rng, height.saturating_sub(self.height));
    }
}

fn random_offset(rng: &mut impl Rng, span: u32) -> u32 {
    if span == 0 {
        0
    } else {
        rng.gen_range(0..span)
    }
}

/// A random pixel value in the 0RGB layout used by window surfaces
pub fn random_colour(rng: &mut impl Rng) -> u32 {
    rng.gen::<u32>() & 0x00FF_FFFF
}
