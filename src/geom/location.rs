use std::fmt;

/// The topological position of a point relative to a geometry.
///
/// The discriminant values double as DE-9IM matrix indices downstream, so
/// they are fixed: Interior=0, Boundary=1, Exterior=2. "No information yet"
/// is modelled as `Option<Location>::None` rather than a fourth variant, so
/// the compiler tracks which label slots have been resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    Interior = 0,
    Boundary = 1,
    Exterior = 2,
}

impl Location {
    /// The DE-9IM matrix index for this location.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> char {
        match self {
            Location::Interior => 'i',
            Location::Boundary => 'b',
            Location::Exterior => 'e',
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Where a location slot sits relative to an edge: on the edge itself, or on
/// its left or right side (facing along the coordinate order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    On = 0,
    Left = 1,
    Right = 2,
}

impl Position {
    pub fn index(self) -> usize {
        self as usize
    }

    /// The position seen when walking the edge in the opposite direction.
    pub fn opposite(self) -> Position {
        match self {
            Position::On => Position::On,
            Position::Left => Position::Right,
            Position::Right => Position::Left,
        }
    }
}
