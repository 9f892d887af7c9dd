use std::fmt;

use crate::geom::{Location, Position};

/// Topology locations for up to two geometry arguments.
///
/// For each argument (0 or 1) a label holds a location for the ON position
/// and, for edges bounding an area, the LEFT and RIGHT sides. A label
/// attached to a point carries only ON.
///
/// A label is owned by exactly one Node or Edge and is mutated in place as
/// merges and newly discovered intersections refine it; it is never replaced
/// wholesale once attached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Label {
    locations: [[Option<Location>; 3]; 2],
}

impl Label {
    /// A label with only the ON location set for one argument, as used for
    /// points and line edges.
    pub fn new_on(arg_index: usize, on: Location) -> Label {
        let mut label = Label::default();
        label.set_on_location(arg_index, on);
        label
    }

    /// A label for an edge bounding an area: ON plus both sides.
    pub fn new_area(arg_index: usize, on: Location, left: Location, right: Location) -> Label {
        let mut label = Label::default();
        label.set_location(arg_index, Position::On, on);
        label.set_location(arg_index, Position::Left, left);
        label.set_location(arg_index, Position::Right, right);
        label
    }

    pub fn location(&self, arg_index: usize, pos: Position) -> Option<Location> {
        self.locations[arg_index][pos.index()]
    }

    pub fn on_location(&self, arg_index: usize) -> Option<Location> {
        self.location(arg_index, Position::On)
    }

    pub fn set_location(&mut self, arg_index: usize, pos: Position, loc: Location) {
        self.locations[arg_index][pos.index()] = Some(loc);
    }

    pub fn set_on_location(&mut self, arg_index: usize, loc: Location) {
        self.set_location(arg_index, Position::On, loc);
    }

    /// Copies locations from `other` into slots this label has not resolved
    /// yet. Slots already set keep their value: merging never discards
    /// information.
    pub fn merge(&mut self, other: &Label) {
        for arg in 0..2 {
            for pos in 0..3 {
                if self.locations[arg][pos].is_none() {
                    self.locations[arg][pos] = other.locations[arg][pos];
                }
            }
        }
    }

    /// Swaps the LEFT and RIGHT locations for one argument, as when an
    /// edge's coordinate order is conceptually reversed.
    pub fn flip(&mut self, arg_index: usize) {
        self.locations[arg_index].swap(Position::Left.index(), Position::Right.index());
    }

    /// Whether this label carries side information for the argument.
    pub fn is_area(&self, arg_index: usize) -> bool {
        self.locations[arg_index][Position::Left.index()].is_some()
            || self.locations[arg_index][Position::Right.index()].is_some()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (arg, slots) in self.locations.iter().enumerate() {
            if arg > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:", (b'A' + arg as u8) as char)?;
            for slot in slots {
                match slot {
                    Some(loc) => write!(f, "{}", loc)?,
                    None => write!(f, "-")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_label_has_only_on() {
        let label = Label::new_on(0, Location::Interior);
        assert_eq!(label.on_location(0), Some(Location::Interior));
        assert_eq!(label.location(0, Position::Left), None);
        assert_eq!(label.on_location(1), None);
        assert!(!label.is_area(0));
    }

    #[test]
    fn area_label_has_sides() {
        let label = Label::new_area(1, Location::Boundary, Location::Exterior, Location::Interior);
        assert!(label.is_area(1));
        assert!(!label.is_area(0));
        assert_eq!(label.location(1, Position::Left), Some(Location::Exterior));
        assert_eq!(label.location(1, Position::Right), Some(Location::Interior));
    }

    #[test]
    fn merge_fills_only_empty_slots() {
        let mut label = Label::new_on(0, Location::Boundary);
        let other = Label::new_area(0, Location::Interior, Location::Interior, Location::Exterior);
        label.merge(&other);

        // ON was already resolved; sides were not
        assert_eq!(label.on_location(0), Some(Location::Boundary));
        assert_eq!(label.location(0, Position::Left), Some(Location::Interior));
        assert_eq!(label.location(0, Position::Right), Some(Location::Exterior));
    }

    #[test]
    fn flip_swaps_sides_for_one_argument() {
        let mut label = Label::new_area(0, Location::Boundary, Location::Exterior, Location::Interior);
        label.set_location(1, Position::Left, Location::Interior);
        label.flip(0);
        assert_eq!(label.location(0, Position::Left), Some(Location::Interior));
        assert_eq!(label.location(0, Position::Right), Some(Location::Exterior));
        assert_eq!(label.location(1, Position::Left), Some(Location::Interior));
    }

    #[test]
    fn display_is_compact() {
        let label = Label::new_area(0, Location::Boundary, Location::Exterior, Location::Interior);
        assert_eq!(format!("{}", label), "A:bei B:---");
    }
}
