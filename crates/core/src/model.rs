//! Core value types for the map grid.

use std::fmt;

/// A settlement location on the game grid.
///
/// Equality and hashing are by value; the derived `Ord` gives lexicographic
/// `(x, y)` order for deterministic tie-breaking. Game servers use
/// coordinates in `[1, 100]`, but nothing here enforces that bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    /// Renders as `x:y`, the form used in exported reports.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}
