use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos2 {
    pub x: i64,
    pub y: i64,
}

/// The Moore neighborhood as offsets from a center cell, row by row.
const NEIGHBOR_OFFSETS: [Pos2; 8] = [
    Pos2 { x: -1, y: -1 },
    Pos2 { x: 0, y: -1 },
    Pos2 { x: 1, y: -1 },
    Pos2 { x: -1, y: 0 },
    Pos2 { x: 1, y: 0 },
    Pos2 { x: -1, y: 1 },
    Pos2 { x: 0, y: 1 },
    Pos2 { x: 1, y: 1 },
];

impl Pos2 {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The 8 neighboring coordinates of this cell.
    ///
    /// Returned as an array so callers can iterate it any number of times.
    #[inline]
    pub fn neighbors(self) -> [Pos2; 8] {
        NEIGHBOR_OFFSETS.map(|offset| self + offset)
    }
}

impl Default for Pos2 {
    #[inline]
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Add for Pos2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Pos2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
