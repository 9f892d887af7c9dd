use crate::geom::Location;

/// Decides whether a vertex is in a geometry's boundary, given how many
/// times that vertex appears as an endpoint of the geometry's rings and
/// lines.
///
/// A pure function of the appearance count. The rule is consulted every time
/// a vertex is inserted as a boundary candidate: ring endpoints, line
/// endpoints, and self-intersection points coincident with a boundary edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryNodeRule {
    /// The SFS default: a vertex is in the boundary iff it is an endpoint of
    /// an odd number of components.
    #[default]
    Mod2,
    /// Any endpoint is in the boundary.
    EndPoint,
    /// Only endpoints of exactly one component are in the boundary.
    MonoValent,
    /// Only endpoints shared by more than one component are in the boundary.
    MultiValent,
}

impl BoundaryNodeRule {
    pub fn is_in_boundary(self, boundary_count: usize) -> bool {
        match self {
            BoundaryNodeRule::Mod2 => boundary_count % 2 == 1,
            BoundaryNodeRule::EndPoint => boundary_count > 0,
            BoundaryNodeRule::MonoValent => boundary_count == 1,
            BoundaryNodeRule::MultiValent => boundary_count > 1,
        }
    }

    /// The location a boundary candidate resolves to under this rule.
    pub fn determine_boundary(self, boundary_count: usize) -> Location {
        if self.is_in_boundary(boundary_count) {
            Location::Boundary
        } else {
            Location::Interior
        }
    }
}
