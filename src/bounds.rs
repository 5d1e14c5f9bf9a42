use nalgebra::Vector2;
use std::convert::TryFrom;

/// The drawable area balls bounce within. Re-read from the window every tick,
/// since the window may be resized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(width: i32, height: i32) -> Self {
        Bounds { width, height }
    }

    pub fn extent(&self) -> Vector2<i32> {
        Vector2::new(self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl From<(u32, u32)> for Bounds {
    fn from((width, height): (u32, u32)) -> Self {
        Bounds::new(
            i32::try_from(width).unwrap_or(i32::MAX),
            i32::try_from(height).unwrap_or(i32::MAX),
        )
    }
}
