use rustc_hash::FxHashMap;

use crate::algorithm::{IndexedPointInAreaLocator, LineIntersector, PointLocator};
use crate::geom::{
    remove_repeated_points, winding_order, Coordinate, Geometry, Location, Polygon, Ring,
    WindingOrder,
};
use crate::index::{EdgeSetIntersector, SegmentIntersector, SweepLineIntersector};

use super::boundary::BoundaryNodeRule;
use super::edge::{Edge, EdgeId};
use super::error::TopologyError;
use super::label::Label;
use super::node::NodeId;
use super::planar::PlanarGraph;

/// Above this many polygonal components, `locate` switches from the direct
/// ring-crossing test to the indexed locator. Purely a performance
/// threshold; results are identical either way.
pub const MAX_SIMPLE_LOCATE_COMPONENTS: usize = 50;

/// Identifies one linear component (line or ring) of the input geometry, in
/// decomposition order. The key for `find_edge`.
pub type ComponentId = u32;

/// The complete topology graph of one geometry argument.
///
/// Construction walks the geometry's structure, creating one Edge per linear
/// component with a label derived from the component's role, and inserting
/// boundary-candidate nodes under the graph's BoundaryNodeRule. The
/// intersection phase (`compute_self_nodes` / `compute_edge_intersections`)
/// then discovers every place edges cross or touch and promotes those points
/// to nodes.
///
/// One GeometryGraph exists per argument (0 or 1) of a spatial operation.
#[derive(Debug)]
pub struct GeometryGraph<'a> {
    arg_index: usize,
    geometry: &'a Geometry,
    boundary_rule: BoundaryNodeRule,
    graph: PlanarGraph,
    line_edge_map: FxHashMap<ComponentId, EdgeId>,
    next_component: ComponentId,
    // A MultiPolygon's ring endpoints are always boundary: the OGC model
    // exempts polygon exteriors from endpoint counting.
    use_boundary_determination_rule: bool,
    invalid_point: Option<Coordinate>,
    boundary_nodes: Option<Box<[NodeId]>>,
    boundary_points: Option<Box<[Coordinate]>>,
    area_locator: Option<IndexedPointInAreaLocator>,
}

impl<'a> GeometryGraph<'a> {
    pub fn new(arg_index: usize, geometry: &'a Geometry) -> GeometryGraph<'a> {
        GeometryGraph::with_rule(arg_index, geometry, BoundaryNodeRule::default())
    }

    pub fn with_rule(
        arg_index: usize,
        geometry: &'a Geometry,
        boundary_rule: BoundaryNodeRule,
    ) -> GeometryGraph<'a> {
        let mut graph = GeometryGraph {
            arg_index,
            geometry,
            boundary_rule,
            graph: PlanarGraph::new(),
            line_edge_map: FxHashMap::default(),
            next_component: 0,
            use_boundary_determination_rule: true,
            invalid_point: None,
            boundary_nodes: None,
            boundary_points: None,
            area_locator: None,
        };
        graph.add_geometry(geometry);
        graph
    }

    pub fn arg_index(&self) -> usize {
        self.arg_index
    }

    pub fn geometry(&self) -> &'a Geometry {
        self.geometry
    }

    pub fn boundary_node_rule(&self) -> BoundaryNodeRule {
        self.boundary_rule
    }

    pub fn planar_graph(&self) -> &PlanarGraph {
        &self.graph
    }

    pub fn edges(&self) -> &[Edge] {
        self.graph.edges()
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        self.graph.edge(id)
    }

    /// The edge generated for a linear component, by decomposition ordinal.
    pub fn find_edge(&self, component: ComponentId) -> Option<EdgeId> {
        self.line_edge_map.get(&component).copied()
    }

    /// Whether some ring or line had too few distinct points and was
    /// skipped.
    pub fn has_too_few_points(&self) -> bool {
        self.invalid_point.is_some()
    }

    pub fn invalid_point(&self) -> Option<Coordinate> {
        self.invalid_point
    }

    /// The strict-mode projection of the lenient malformed-input flag.
    pub fn check_valid(&self) -> Result<(), TopologyError> {
        match self.invalid_point {
            Some(c) => Err(TopologyError::TooFewPoints(c)),
            None => Ok(()),
        }
    }

    // ---------------------------------------------------------------------
    // Construction: geometry decomposition
    // ---------------------------------------------------------------------

    fn add_geometry(&mut self, geometry: &Geometry) {
        match geometry {
            Geometry::Point(c) => self.add_point(*c),
            Geometry::MultiPoint(cs) => {
                for c in cs.iter() {
                    self.add_point(*c);
                }
            }
            Geometry::LineString(pts) => self.add_line_string(pts),
            Geometry::MultiLineString(lines) => {
                for pts in lines.iter() {
                    self.add_line_string(pts);
                }
            }
            Geometry::Polygon(p) => self.add_polygon(p),
            Geometry::MultiPolygon(ps) => {
                self.use_boundary_determination_rule = false;
                for p in ps.iter() {
                    self.add_polygon(p);
                }
            }
            Geometry::Collection(gs) => {
                for g in gs.iter() {
                    self.add_geometry(g);
                }
            }
        }
    }

    fn add_point(&mut self, coord: Coordinate) {
        self.insert_point(self.arg_index, coord, Location::Interior);
    }

    fn add_line_string(&mut self, raw: &[Coordinate]) {
        let pts = remove_repeated_points(raw);
        if pts.len() < 2 {
            self.mark_invalid(pts.first().or(raw.first()));
            return;
        }
        let first = pts[0];
        let last = pts[pts.len() - 1];

        let edge_id = self
            .graph
            .add_edge(Edge::new(pts, Label::new_on(self.arg_index, Location::Interior)));
        let component = self.next_component_id();
        self.line_edge_map.insert(component, edge_id);

        // Both endpoints become boundary candidates, even when the line is
        // closed and they are the same coordinate: the rule then sees a
        // count of 2 there, which is what the OGC boundary definition for
        // closed curves requires.
        self.insert_boundary_point(self.arg_index, first);
        self.insert_boundary_point(self.arg_index, last);
    }

    fn add_polygon(&mut self, polygon: &Polygon) {
        self.add_polygon_ring(&polygon.shell, Location::Exterior, Location::Interior);
        // The interior of the polygon lies on the opposite side of a hole.
        for hole in polygon.holes.iter() {
            self.add_polygon_ring(hole, Location::Interior, Location::Exterior);
        }
    }

    /// `cw_left`/`cw_right` are the side locations assuming the ring runs
    /// clockwise; a counter-clockwise ring gets them swapped.
    fn add_polygon_ring(&mut self, ring: &Ring, cw_left: Location, cw_right: Location) {
        let pts = remove_repeated_points(ring.coordinates());
        if pts.len() < 4 {
            self.mark_invalid(pts.first().or(ring.coordinates().first()));
            return;
        }
        let (left, right) = match winding_order(pts.iter()) {
            WindingOrder::Clockwise => (cw_left, cw_right),
            WindingOrder::CounterClockwise => (cw_right, cw_left),
        };
        let first = pts[0];

        let edge_id = self.graph.add_edge(Edge::new(
            pts,
            Label::new_area(self.arg_index, Location::Boundary, left, right),
        ));
        let component = self.next_component_id();
        self.line_edge_map.insert(component, edge_id);

        self.insert_point(self.arg_index, first, Location::Boundary);
    }

    fn next_component_id(&mut self) -> ComponentId {
        let id = self.next_component;
        self.next_component += 1;
        id
    }

    fn mark_invalid(&mut self, at: Option<&Coordinate>) {
        self.invalid_point =
            Some(at.copied().unwrap_or(Coordinate::new(f64::NAN, f64::NAN)));
    }

    /// Unconditionally sets the ON location at `coord` for this argument.
    pub fn insert_point(&mut self, arg_index: usize, coord: Coordinate, loc: Location) {
        let node = self.graph.add_node(coord);
        self.graph.nodes_mut().node_mut(node).set_on_location(arg_index, loc);
    }

    /// Offers `coord` as a boundary candidate: re-derives its appearance
    /// count from the node's current label and lets the rule decide.
    pub fn insert_boundary_point(&mut self, arg_index: usize, coord: Coordinate) {
        let node = self.graph.add_node(coord);
        let node = self.graph.nodes_mut().node_mut(node);

        // This insertion, plus one if the node already resolved to Boundary.
        let mut boundary_count = 1;
        if node.label().on_location(arg_index) == Some(Location::Boundary) {
            boundary_count += 1;
        }
        let new_loc = self.boundary_rule.determine_boundary(boundary_count);
        node.set_on_location(arg_index, new_loc);
    }

    // ---------------------------------------------------------------------
    // Intersection phase
    // ---------------------------------------------------------------------

    /// Finds every place this graph's edges cross or touch each other and
    /// promotes the discovered points to nodes.
    ///
    /// When the geometry is polygonal and the caller does not need strict
    /// ring validity (`compute_ring_self_nodes = false`), segments of the
    /// same ring are not tested against each other: rings are assumed
    /// non-self-intersecting by construction.
    pub fn compute_self_nodes(
        &mut self,
        li: LineIntersector,
        compute_ring_self_nodes: bool,
    ) -> SegmentIntersector {
        let mut si = SegmentIntersector::new(li, true, false);
        let test_all_segments = compute_ring_self_nodes || !self.geometry.is_polygonal();

        SweepLineIntersector::new().compute_self_intersections(
            self.graph.edges_mut(),
            &mut si,
            test_all_segments,
        );
        self.add_self_intersection_nodes(self.arg_index);
        si
    }

    /// Finds every place this graph's edges cross or touch another graph's
    /// edges (the two-geometry case). Both graphs' boundary nodes are wired
    /// into the intersector so it can tell a boundary/boundary contact from
    /// an interior/interior one at the same coordinate.
    pub fn compute_edge_intersections(
        &mut self,
        other: &mut GeometryGraph<'_>,
        li: LineIntersector,
        include_proper: bool,
    ) -> SegmentIntersector {
        let mut si = SegmentIntersector::new(li, include_proper, true);
        si.set_boundary_nodes(
            self.boundary_points().to_vec(),
            other.boundary_points().to_vec(),
        );

        SweepLineIntersector::new().compute_cross_intersections(
            self.graph.edges_mut(),
            other.graph.edges_mut(),
            &mut si,
        );
        si
    }

    fn add_self_intersection_nodes(&mut self, arg_index: usize) {
        let mut discovered: Vec<(Coordinate, Option<Location>)> = Vec::new();
        for edge in self.graph.edges() {
            let edge_loc = edge.label.on_location(arg_index);
            for ei in edge.intersections().iter() {
                discovered.push((ei.coord, edge_loc));
            }
        }
        for (coord, edge_loc) in discovered {
            self.add_self_intersection_node(arg_index, coord, edge_loc);
        }
    }

    fn add_self_intersection_node(
        &mut self,
        arg_index: usize,
        coord: Coordinate,
        edge_loc: Option<Location>,
    ) {
        // An already-known boundary node keeps its classification.
        if self.graph.is_boundary_node(arg_index, &coord) {
            return;
        }
        if edge_loc == Some(Location::Boundary) && self.use_boundary_determination_rule {
            self.insert_boundary_point(arg_index, coord);
        } else {
            self.insert_point(arg_index, coord, edge_loc.unwrap_or(Location::Interior));
        }
    }

    /// Emits the sub-edges implied by every recorded intersection, in
    /// traversal order per edge. The handoff point to overlay construction.
    pub fn compute_split_edges(&mut self, out: &mut Vec<Edge>) {
        for edge in self.graph.edges_mut() {
            edge.add_split_edges(out);
        }
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// The nodes in this argument's boundary, in coordinate order. Computed
    /// once and cached; callers may rely on getting the same collection
    /// back.
    pub fn boundary_nodes(&mut self) -> &[NodeId] {
        if self.boundary_nodes.is_none() {
            let nodes = self.graph.nodes().boundary_nodes(self.arg_index);
            self.boundary_nodes = Some(nodes.into_boxed_slice());
        }
        self.boundary_nodes.as_deref().unwrap()
    }

    /// The coordinates of the boundary nodes, cached like
    /// [`boundary_nodes`](Self::boundary_nodes).
    pub fn boundary_points(&mut self) -> &[Coordinate] {
        if self.boundary_points.is_none() {
            self.boundary_nodes();
            let coords: Vec<Coordinate> = self
                .boundary_nodes
                .as_deref()
                .unwrap()
                .iter()
                .map(|&id| self.graph.nodes().node(id).coordinate())
                .collect();
            self.boundary_points = Some(coords.into_boxed_slice());
        }
        self.boundary_points.as_deref().unwrap()
    }

    /// Locates `coord` relative to the parent geometry.
    ///
    /// Large polygonal inputs get a one-time spatial index; small ones use
    /// the direct test. Same answers either way.
    pub fn locate(&mut self, coord: Coordinate) -> Location {
        if self.geometry.is_polygonal()
            && self.geometry.component_count() > MAX_SIMPLE_LOCATE_COMPONENTS
        {
            let locator = self
                .area_locator
                .get_or_insert_with(|| IndexedPointInAreaLocator::new(self.geometry));
            return locator.locate(coord);
        }
        PointLocator::with_rule(self.boundary_rule).locate(coord, self.geometry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Position;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    // Clockwise on math axes (y-up).
    fn cw_square() -> Ring {
        Ring::new(vec![
            c(0.0, 0.0),
            c(0.0, 10.0),
            c(10.0, 10.0),
            c(10.0, 0.0),
            c(0.0, 0.0),
        ])
    }

    fn ccw_square() -> Ring {
        let mut pts: Vec<Coordinate> = cw_square().coordinates().to_vec();
        pts.reverse();
        Ring::new(pts)
    }

    #[test]
    fn cw_shell_gets_exterior_on_left() {
        let geom = Geometry::Polygon(Polygon::new(cw_square(), vec![]));
        let graph = GeometryGraph::new(0, &geom);

        let edge = &graph.edges()[0];
        assert_eq!(edge.label.on_location(0), Some(Location::Boundary));
        assert_eq!(edge.label.location(0, Position::Left), Some(Location::Exterior));
        assert_eq!(edge.label.location(0, Position::Right), Some(Location::Interior));
    }

    #[test]
    fn reversed_shell_swaps_sides_but_exterior_stays_outside() {
        let geom = Geometry::Polygon(Polygon::new(ccw_square(), vec![]));
        let graph = GeometryGraph::new(0, &geom);

        // Travelling the reversed coordinate order, the outside is now on
        // the right: the same physical side of the ring.
        let edge = &graph.edges()[0];
        assert_eq!(edge.label.location(0, Position::Left), Some(Location::Interior));
        assert_eq!(edge.label.location(0, Position::Right), Some(Location::Exterior));
    }

    #[test]
    fn hole_gets_inverted_side_assumptions() {
        let hole = Ring::new(vec![
            c(2.0, 2.0),
            c(2.0, 8.0),
            c(8.0, 8.0),
            c(8.0, 2.0),
            c(2.0, 2.0),
        ]);
        let geom = Geometry::Polygon(Polygon::new(cw_square(), vec![hole]));
        let graph = GeometryGraph::new(0, &geom);

        // The hole ring is clockwise, so it keeps the inverse assumption:
        // polygon interior on its left, hole (exterior) on its right.
        let hole_edge = &graph.edges()[1];
        assert_eq!(hole_edge.label.location(0, Position::Left), Some(Location::Interior));
        assert_eq!(hole_edge.label.location(0, Position::Right), Some(Location::Exterior));
    }

    #[test]
    fn line_endpoints_are_boundary() {
        let geom = Geometry::line_string(vec![c(0.0, 0.0), c(5.0, 0.0), c(5.0, 5.0)]);
        let mut graph = GeometryGraph::new(0, &geom);

        let pts: Vec<Coordinate> = graph.boundary_points().to_vec();
        assert_eq!(pts, vec![c(0.0, 0.0), c(5.0, 5.0)]);
    }

    #[test]
    fn closed_line_endpoint_counts_twice() {
        let ring_pts = vec![c(0.0, 0.0), c(5.0, 0.0), c(5.0, 5.0), c(0.0, 0.0)];

        // Mod-2: the coordinate-identical endpoints count as 2, so the join
        // point is Interior, not Boundary.
        let geom = Geometry::line_string(ring_pts.clone());
        let mut graph = GeometryGraph::new(0, &geom);
        assert!(graph.boundary_nodes().is_empty());
        let node = graph.planar_graph().find_node(&c(0.0, 0.0)).unwrap();
        assert_eq!(
            graph.planar_graph().nodes().node(node).label().on_location(0),
            Some(Location::Interior)
        );

        // EndPoint rule: any endpoint count puts it in the boundary.
        let geom = Geometry::line_string(ring_pts);
        let mut graph = GeometryGraph::with_rule(0, &geom, BoundaryNodeRule::EndPoint);
        assert_eq!(graph.boundary_points(), &[c(0.0, 0.0)]);
    }

    #[test]
    fn multipolygon_shared_vertex_is_boundary_under_any_rule() {
        // Two triangles sharing their start vertex at the origin.
        let tri = |flip: f64| {
            Polygon::new(
                Ring::new(vec![
                    c(0.0, 0.0),
                    c(flip * 10.0, 0.0),
                    c(flip * 10.0, 10.0),
                    c(0.0, 0.0),
                ]),
                vec![],
            )
        };
        let geom = Geometry::MultiPolygon(vec![tri(1.0), tri(-1.0)].into_boxed_slice());

        for rule in [BoundaryNodeRule::Mod2, BoundaryNodeRule::EndPoint] {
            let mut graph = GeometryGraph::with_rule(0, &geom, rule);
            assert!(
                graph.boundary_points().contains(&c(0.0, 0.0)),
                "shared vertex must be boundary under {:?}",
                rule
            );
        }
    }

    #[test]
    fn figure_eight_adds_one_interior_node() {
        // Crosses itself at (5,5), away from both endpoints.
        let geom = Geometry::line_string(vec![
            c(0.0, 0.0),
            c(10.0, 10.0),
            c(0.0, 10.0),
            c(10.0, 0.0),
        ]);
        let mut graph = GeometryGraph::new(0, &geom);
        assert_eq!(graph.planar_graph().nodes().len(), 2);

        let si = graph.compute_self_nodes(LineIntersector::new(), true);
        assert!(si.has_proper_intersection());

        assert_eq!(graph.planar_graph().nodes().len(), 3);
        let node = graph.planar_graph().find_node(&c(5.0, 5.0)).unwrap();
        assert_eq!(
            graph.planar_graph().nodes().node(node).label().on_location(0),
            Some(Location::Interior)
        );
    }

    #[test]
    fn figure_eight_split_edges() {
        let geom = Geometry::line_string(vec![
            c(0.0, 0.0),
            c(10.0, 10.0),
            c(0.0, 10.0),
            c(10.0, 0.0),
        ]);
        let mut graph = GeometryGraph::new(0, &geom);
        graph.compute_self_nodes(LineIntersector::new(), true);

        let mut splits = Vec::new();
        graph.compute_split_edges(&mut splits);

        assert_eq!(splits.len(), 3);
        assert_eq!(splits[0].pts(), &[c(0.0, 0.0), c(5.0, 5.0)]);
        assert_eq!(
            splits[1].pts(),
            &[c(5.0, 5.0), c(10.0, 10.0), c(0.0, 10.0), c(5.0, 5.0)]
        );
        assert_eq!(splits[2].pts(), &[c(5.0, 5.0), c(10.0, 0.0)]);
    }

    #[test]
    fn valid_polygon_self_nodes_add_nothing_new() {
        let geom = Geometry::Polygon(Polygon::new(cw_square(), vec![]));
        let mut graph = GeometryGraph::new(0, &geom);
        let nodes_before = graph.planar_graph().nodes().len();

        let si = graph.compute_self_nodes(LineIntersector::new(), true);
        assert!(!si.has_proper_intersection());
        assert_eq!(graph.planar_graph().nodes().len(), nodes_before);
    }

    #[test]
    fn degenerate_ring_is_flagged_and_skipped() {
        // Collapses to 3 distinct coordinates: too few for a ring.
        let ring = Ring::new(vec![c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)]);
        let geom = Geometry::Polygon(Polygon::new(ring, vec![]));
        let graph = GeometryGraph::new(0, &geom);

        assert!(graph.has_too_few_points());
        assert_eq!(graph.invalid_point(), Some(c(0.0, 0.0)));
        assert!(graph.edges().is_empty());
        assert_eq!(
            graph.check_valid(),
            Err(TopologyError::TooFewPoints(c(0.0, 0.0)))
        );
    }

    #[test]
    fn degenerate_line_is_flagged_and_skipped() {
        let geom = Geometry::line_string(vec![c(3.0, 3.0), c(3.0, 3.0)]);
        let graph = GeometryGraph::new(0, &geom);

        assert!(graph.has_too_few_points());
        assert_eq!(graph.invalid_point(), Some(c(3.0, 3.0)));
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn boundary_nodes_are_cached() {
        let geom = Geometry::line_string(vec![c(0.0, 0.0), c(5.0, 0.0)]);
        let mut graph = GeometryGraph::new(0, &geom);

        let first = graph.boundary_nodes().as_ptr();
        let second = graph.boundary_nodes().as_ptr();
        assert_eq!(first, second);
    }

    #[test]
    fn find_edge_by_component_ordinal() {
        let geom = Geometry::MultiLineString(
            vec![
                vec![c(0.0, 0.0), c(1.0, 0.0)].into_boxed_slice(),
                vec![c(0.0, 1.0), c(1.0, 1.0)].into_boxed_slice(),
            ]
            .into_boxed_slice(),
        );
        let graph = GeometryGraph::new(0, &geom);

        let e1 = graph.find_edge(1).unwrap();
        assert_eq!(graph.edge(e1).pts()[0], c(0.0, 1.0));
        assert!(graph.find_edge(2).is_none());
    }

    #[test]
    fn cross_intersections_record_into_both_graphs() {
        let a = Geometry::line_string(vec![c(0.0, 0.0), c(10.0, 0.0)]);
        let b = Geometry::line_string(vec![c(5.0, -5.0), c(5.0, 5.0)]);
        let mut ga = GeometryGraph::new(0, &a);
        let mut gb = GeometryGraph::new(1, &b);

        let si = ga.compute_edge_intersections(&mut gb, LineIntersector::new(), true);

        assert!(si.has_intersection());
        assert!(si.has_proper_intersection());
        assert!(si.has_proper_interior_intersection());
        assert_eq!(si.proper_intersection_point(), Some(c(5.0, 0.0)));
        assert!(ga.edges()[0].intersections().is_intersection(&c(5.0, 0.0)));
        assert!(gb.edges()[0].intersections().is_intersection(&c(5.0, 0.0)));
    }

    #[test]
    fn touch_at_boundary_node_is_not_proper_interior() {
        let a = Geometry::line_string(vec![c(0.0, 0.0), c(10.0, 0.0)]);
        // Endpoint of b sits in the interior of a.
        let b = Geometry::line_string(vec![c(5.0, 0.0), c(5.0, 5.0)]);
        let mut ga = GeometryGraph::new(0, &a);
        let mut gb = GeometryGraph::new(1, &b);

        let si = ga.compute_edge_intersections(&mut gb, LineIntersector::new(), true);

        assert!(si.has_intersection());
        // The contact is at b's boundary endpoint: not proper.
        assert!(!si.has_proper_intersection());
    }

    #[test]
    fn locate_dispatches_to_point_locator() {
        let geom = Geometry::Polygon(Polygon::new(cw_square(), vec![]));
        let mut graph = GeometryGraph::new(0, &geom);

        assert_eq!(graph.locate(c(5.0, 5.0)), Location::Interior);
        assert_eq!(graph.locate(c(0.0, 5.0)), Location::Boundary);
        assert_eq!(graph.locate(c(20.0, 5.0)), Location::Exterior);
    }

    #[test]
    fn locate_uses_index_above_threshold() {
        // 51 disjoint unit squares: enough components to switch locators.
        let polys: Vec<Polygon> = (0..=MAX_SIMPLE_LOCATE_COMPONENTS)
            .map(|i| {
                let x = i as f64 * 3.0;
                Polygon::new(
                    Ring::new(vec![
                        c(x, 0.0),
                        c(x + 1.0, 0.0),
                        c(x + 1.0, 1.0),
                        c(x, 1.0),
                        c(x, 0.0),
                    ]),
                    vec![],
                )
            })
            .collect();
        let geom = Geometry::MultiPolygon(polys.into_boxed_slice());
        let mut graph = GeometryGraph::new(0, &geom);

        assert_eq!(graph.locate(c(0.5, 0.5)), Location::Interior);
        assert_eq!(graph.locate(c(3.5, 0.5)), Location::Interior);
        assert_eq!(graph.locate(c(2.0, 0.5)), Location::Exterior);
        assert_eq!(graph.locate(c(3.0, 0.5)), Location::Boundary);
    }
}
