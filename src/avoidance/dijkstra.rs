use crate::avoidance::graph::{Graph, FINISH_INDEX, START_INDEX};
use crate::avoidance::AvoidanceError;
use crate::util::OrderedFloat;
use log::debug;
use num_traits::Float;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Dijkstra over the visibility graph from the start vertex (index 0) to the
/// finish vertex (index 1).
///
/// Returns the vertex indices of the path from the first waypoint after the
/// start through the finish, start excluded. Equal-cost alternatives are
/// resolved deterministically in favor of the lowest vertex index.
pub(crate) fn dijkstra<F: Float>(
    graph: &Graph<F>,
    point_count: usize,
) -> Result<Vec<usize>, AvoidanceError> {
    // Without at least one collision-free edge from the start there is
    // nothing to relax.
    match graph.get(&START_INDEX) {
        Some(neighbors) if !neighbors.is_empty() => {}
        _ => {
            debug!("dijkstra: start pose has no reachable neighbors");
            return Err(AvoidanceError::NoReachableNeighbors);
        }
    }

    let mut distance = vec![F::infinity(); point_count];
    let mut parent: Vec<Option<usize>> = vec![None; point_count];
    let mut heap = BinaryHeap::new();

    distance[START_INDEX] = F::zero();
    heap.push(Reverse((OrderedFloat::new(F::zero()), START_INDEX)));

    while let Some(Reverse((d, v))) = heap.pop() {
        if v == FINISH_INDEX {
            break;
        }
        if d.get() > distance[v] {
            continue; // Stale heap entry.
        }
        if let Some(neighbors) = graph.get(&v) {
            for (&neighbor, &weight) in neighbors {
                let candidate = d.get() + weight;
                if candidate < distance[neighbor] {
                    distance[neighbor] = candidate;
                    parent[neighbor] = Some(v);
                    heap.push(Reverse((OrderedFloat::new(candidate), neighbor)));
                }
            }
        }
    }

    if distance[FINISH_INDEX].is_infinite() {
        debug!("dijkstra: no path between start and finish");
        return Err(AvoidanceError::NoPath);
    }

    // Walk the parent pointers back from the finish, excluding the start.
    let mut path = Vec::new();
    let mut current = FINISH_INDEX;
    while current != START_INDEX {
        path.push(current);
        current = parent[current].expect("settled vertex without parent");
    }
    path.reverse();

    debug!("dijkstra: path of {} waypoints", path.len());
    Ok(path)
}
