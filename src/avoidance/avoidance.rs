use crate::avoidance::{dijkstra, graph, AvoidanceError};
use crate::geometry::Coords;
use crate::obstacles::{BoxedObstacle, Obstacle, ObstacleId, ObstacleRegistry, PolygonObstacle};
use log::debug;
use num_traits::Float;
use std::sync::Arc;

/// The path-avoidance facade.
///
/// One planning query ([`Avoidance::avoidance`]) validates the start and
/// finish positions, rebuilds the visibility graph from the current obstacle
/// set and runs Dijkstra over it; the resulting waypoint list is served
/// through [`Avoidance::get_path_size`] / [`Avoidance::get_path_pose`] until
/// the next query overwrites it. A failed query leaves no stored path, so
/// callers must observe the returned `Result` before reading the accessors.
///
/// The obstacle registry is shared: a perception thread holding a clone of
/// the [`Arc`] may mutate the dynamic obstacles concurrently. Each planning
/// query and each [`Avoidance::check_recompute`] call holds the registry
/// lock for its whole read phase and therefore sees one consistent obstacle
/// snapshot.
pub struct Avoidance<F: Float> {
    borders: PolygonObstacle<F>,
    registry: Arc<ObstacleRegistry<F>>,
    path: Vec<Coords<F>>,
    is_avoidance_computed: bool,
}

impl<F: Float> Avoidance<F> {
    /// Constructs the engine from the arena borders (a convex polygon) and a
    /// shared obstacle registry.
    pub fn new(borders: PolygonObstacle<F>, registry: Arc<ObstacleRegistry<F>>) -> Self {
        Self {
            borders,
            registry,
            path: Vec::new(),
            is_avoidance_computed: false,
        }
    }

    /// Computes an obstacle-avoiding path from `start` to `finish`.
    ///
    /// On success the stored path runs from the first waypoint after the
    /// start through the finish (start excluded, finish included). On
    /// failure the previous path is discarded and the engine is back in the
    /// idle state.
    pub fn avoidance(
        &mut self,
        start: Coords<F>,
        finish: Coords<F>,
    ) -> Result<(), AvoidanceError> {
        debug!("avoidance: compute avoidance");
        self.is_avoidance_computed = false;
        self.path.clear();

        let (valid_points, built_graph) = {
            let obstacle_set = self.registry.read();
            let obstacles: Vec<&dyn Obstacle<F>> = obstacle_set.all().collect();

            let start = graph::validate_poses(&self.borders, &obstacles, start, finish)?;
            let valid_points =
                graph::collect_valid_points(&self.borders, &obstacles, start, finish);
            let built_graph = graph::build_graph(&valid_points, &obstacles);
            (valid_points, built_graph)
        };

        let indices = dijkstra::dijkstra(&built_graph, valid_points.len())?;
        self.path = indices.iter().map(|&i| valid_points[i]).collect();
        self.is_avoidance_computed = true;
        Ok(())
    }

    /// Cheap staleness test for a previously computed path: true iff the
    /// straight segment `[start, stop]` crosses at least one enabled dynamic
    /// obstacle whose center is inside the borders.
    ///
    /// Fixed obstacles, the graph and the stored path are not consulted. A
    /// caller following a path can test the direct segment to its next
    /// waypoint on each tick and skip the expensive rebuild while this
    /// returns false.
    pub fn check_recompute(&self, start: &Coords<F>, stop: &Coords<F>) -> bool {
        let obstacle_set = self.registry.read();
        let crossed = obstacle_set.dynamic().any(|obstacle| {
            obstacle.enabled()
                && self.borders.is_point_inside(obstacle.center().coords())
                && obstacle.is_segment_crossing(start, stop)
        });
        crossed
    }

    /// Number of waypoints in the stored path.
    pub fn get_path_size(&self) -> usize {
        self.path.len()
    }

    /// Waypoint at `index` in the stored path.
    pub fn get_path_pose(&self, index: usize) -> Result<Coords<F>, AvoidanceError> {
        self.path
            .get(index)
            .copied()
            .ok_or(AvoidanceError::IndexOutOfRange {
                index,
                size: self.path.len(),
            })
    }

    /// True while a computed path is stored (the query state machine is in
    /// its path-ready state).
    pub fn is_avoidance_computed(&self) -> bool {
        self.is_avoidance_computed
    }

    pub fn borders(&self) -> &PolygonObstacle<F> {
        &self.borders
    }

    /// Replaces the arena borders. Does not recompute anything by itself.
    pub fn set_borders(&mut self, new_borders: PolygonObstacle<F>) {
        self.borders = new_borders;
    }

    /// The shared obstacle registry; clone the [`Arc`] to mutate obstacles
    /// from another thread.
    pub fn registry(&self) -> &Arc<ObstacleRegistry<F>> {
        &self.registry
    }

    pub fn add_fixed_obstacle(&self, obstacle: BoxedObstacle<F>) -> ObstacleId {
        self.registry.add_fixed(obstacle)
    }

    pub fn remove_fixed_obstacle(&self, id: ObstacleId) -> Option<BoxedObstacle<F>> {
        self.registry.remove_fixed(id)
    }

    pub fn clear_fixed_obstacles(&self) {
        self.registry.clear_fixed();
    }

    pub fn add_dynamic_obstacle(&self, obstacle: BoxedObstacle<F>) -> ObstacleId {
        self.registry.add_dynamic(obstacle)
    }

    pub fn remove_dynamic_obstacle(&self, id: ObstacleId) -> Option<BoxedObstacle<F>> {
        self.registry.remove_dynamic(id)
    }

    pub fn clear_dynamic_obstacles(&self) {
        self.registry.clear_dynamic();
    }
}
