use thiserror::Error;

use crate::geom::Coordinate;

/// Errors surfaced by strict-validity checking.
///
/// Graph construction itself never fails on malformed input: a degenerate
/// ring or line is recorded as a flag plus the offending coordinate, and
/// lenient pipelines carry on. Strict callers convert the flag into this
/// error via [`GeometryGraph::check_valid`](crate::graph::GeometryGraph::check_valid).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopologyError {
    #[error("ring or line has too few distinct points at {0}")]
    TooFewPoints(Coordinate),
}
