/// A row/column position.
///
/// Depending on context this is either a logical position (character index
/// into a line) or a display position (tabs expanded). The derived ordering
/// is row-major: rows first, then columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Returns `(min, max)` of two positions.
pub fn ordered(a: Coord, b: Coord) -> (Coord, Coord) {
    if b < a {
        (b, a)
    } else {
        (a, b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/coord.rs"]
mod tests;
