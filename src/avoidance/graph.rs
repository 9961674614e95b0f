use crate::avoidance::AvoidanceError;
use crate::geometry::Coords;
use crate::obstacles::{Obstacle, PolygonObstacle};
use log::{debug, trace};
use num_traits::Float;
use std::collections::BTreeMap;

/// Adjacency map of the visibility graph: vertex index to neighbor index to
/// Euclidean distance. An open map rather than a fixed-size bitmask, so the
/// candidate-vertex count is not bounded by obstacle density; the ordered
/// map keeps iteration, and hence equal-cost tie-breaking, deterministic.
pub type Graph<F> = BTreeMap<usize, BTreeMap<usize, F>>;

/// Index of the (possibly snapped) start vertex in the valid-point list.
pub const START_INDEX: usize = 0;
/// Index of the finish vertex in the valid-point list.
pub const FINISH_INDEX: usize = 1;

/// Checks the start and finish positions against borders and obstacles.
///
/// Fails if the finish is outside the borders or inside any enabled
/// obstacle. A start inside an enabled obstacle is replaced by that
/// obstacle's nearest perimeter point; every obstacle is visited so the
/// returned start has been snapped out of each one that contained it.
pub(crate) fn validate_poses<F: Float>(
    borders: &PolygonObstacle<F>,
    obstacles: &[&dyn Obstacle<F>],
    start: Coords<F>,
    finish: Coords<F>,
) -> Result<Coords<F>, AvoidanceError> {
    if !borders.is_point_inside(&finish) {
        debug!("validate_poses: finish pose outside borders");
        return Err(AvoidanceError::FinishUnreachable);
    }

    let mut start = start;
    for obstacle in obstacles {
        if !obstacle.enabled() {
            continue;
        }
        if obstacle.is_point_inside(&finish) {
            debug!("validate_poses: finish pose inside an obstacle");
            return Err(AvoidanceError::FinishBlocked);
        }
        if obstacle.is_point_inside(&start) {
            start = obstacle.nearest_point(&start);
        }
    }
    Ok(start)
}

/// True if `p` is inside any enabled obstacle, skipping the obstacle at
/// index `skip` if given.
fn is_point_in_obstacles<F: Float>(
    p: &Coords<F>,
    obstacles: &[&dyn Obstacle<F>],
    skip: Option<usize>,
) -> bool {
    obstacles.iter().enumerate().any(|(i, obstacle)| {
        Some(i) != skip && obstacle.enabled() && obstacle.is_point_inside(p)
    })
}

/// Enumerates the candidate vertices for one planning query.
///
/// Index 0 is the start, index 1 the finish. Every enabled obstacle whose
/// center is inside the borders offers its bounding-box vertices; a vertex
/// is admitted if it is inside the borders and not inside any other enabled
/// obstacle. Obstacles centered outside the borders contribute no vertices
/// but still block edges in [`build_graph`].
pub(crate) fn collect_valid_points<F: Float>(
    borders: &PolygonObstacle<F>,
    obstacles: &[&dyn Obstacle<F>],
    start: Coords<F>,
    finish: Coords<F>,
) -> Vec<Coords<F>> {
    let mut valid_points = vec![start, finish];

    for (i, obstacle) in obstacles.iter().enumerate() {
        if !obstacle.enabled() {
            continue;
        }
        if !borders.is_point_inside(obstacle.center().coords()) {
            continue;
        }
        for point in obstacle.bounding_box() {
            if !borders.is_point_inside(point) {
                continue;
            }
            if is_point_in_obstacles(point, obstacles, Some(i)) {
                continue;
            }
            valid_points.push(*point);
        }
    }

    debug!(
        "collect_valid_points: {} valid points",
        valid_points.len()
    );
    valid_points
}

/// Builds the visibility graph over the valid points: an edge connects every
/// pair whose straight segment crosses no enabled obstacle, weighted by
/// Euclidean distance and stored symmetrically.
pub(crate) fn build_graph<F: Float>(
    valid_points: &[Coords<F>],
    obstacles: &[&dyn Obstacle<F>],
) -> Graph<F> {
    let mut graph = Graph::new();

    for i in 0..valid_points.len() {
        for j in (i + 1)..valid_points.len() {
            let collides = obstacles.iter().any(|obstacle| {
                obstacle.enabled()
                    && obstacle.is_segment_crossing(&valid_points[i], &valid_points[j])
            });
            if !collides {
                let distance = valid_points[i].distance(&valid_points[j]);
                graph.entry(i).or_default().insert(j, distance);
                graph.entry(j).or_default().insert(i, distance);
            }
        }
    }

    trace!("build_graph: {} connected vertices", graph.len());
    graph
}
