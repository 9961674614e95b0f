//! End-to-end planning scenarios on a 3000 x 2000 mm arena.

use avoidance2d::{
    Avoidance, AvoidanceError, CircleObstacle, Coords, Obstacle, ObstacleRegistry, PolygonObstacle,
    Pose, RectangleObstacle,
};
use std::sync::Arc;

fn arena_borders() -> PolygonObstacle<f64> {
    PolygonObstacle::new(
        vec![
            Coords::new(0.0, 0.0),
            Coords::new(3000.0, 0.0),
            Coords::new(3000.0, 2000.0),
            Coords::new(0.0, 2000.0),
        ],
        0.0,
    )
}

fn new_engine() -> Avoidance<f64> {
    Avoidance::new(arena_borders(), Arc::new(ObstacleRegistry::new()))
}

fn path_of(avoidance: &Avoidance<f64>) -> Vec<Coords<f64>> {
    (0..avoidance.get_path_size())
        .map(|i| avoidance.get_path_pose(i).unwrap())
        .collect()
}

/// Checks that every consecutive segment of `start` + path is collision-free
/// against the given obstacle.
fn assert_path_avoids(start: Coords<f64>, path: &[Coords<f64>], obstacle: &dyn Obstacle<f64>) {
    let mut previous = start;
    for waypoint in path {
        assert!(
            !obstacle.is_segment_crossing(&previous, waypoint),
            "path segment ({}, {}) -> ({}, {}) crosses an obstacle",
            previous.x,
            previous.y,
            waypoint.x,
            waypoint.y
        );
        previous = *waypoint;
    }
}

#[test]
fn empty_arena_yields_direct_path() {
    let mut avoidance = new_engine();
    avoidance
        .avoidance(Coords::new(100.0, 100.0), Coords::new(2900.0, 1900.0))
        .unwrap();
    assert!(avoidance.is_avoidance_computed());
    assert_eq!(path_of(&avoidance), vec![Coords::new(2900.0, 1900.0)]);
}

#[test]
fn path_routes_around_a_circle() {
    let mut avoidance = new_engine();
    avoidance.add_fixed_obstacle(Box::new(CircleObstacle::new(
        Pose::new(1500.0, 1000.0, 0.0),
        400.0,
        0.2,
    )));

    let start = Coords::new(100.0, 1000.0);
    let finish = Coords::new(2900.0, 1000.0);
    avoidance.avoidance(start, finish).unwrap();

    let path = path_of(&avoidance);
    assert!(path.len() >= 2, "blocked direct line needs a detour");
    assert_eq!(*path.last().unwrap(), finish);

    let reference = CircleObstacle::new(Pose::new(1500.0, 1000.0, 0.0), 400.0, 0.2);
    assert_path_avoids(start, &path, &reference);
}

#[test]
fn path_routes_around_a_rectangle() {
    let mut avoidance = new_engine();
    avoidance.add_fixed_obstacle(Box::new(RectangleObstacle::new(
        Pose::new(1500.0, 1000.0, 0.0),
        400.0,
        400.0,
        0.25,
    )));

    let start = Coords::new(100.0, 1000.0);
    let finish = Coords::new(2900.0, 1000.0);
    avoidance.avoidance(start, finish).unwrap();

    let path = path_of(&avoidance);
    assert!(path.len() >= 2);
    let reference = RectangleObstacle::new(Pose::new(1500.0, 1000.0, 0.0), 400.0, 400.0, 0.25);
    assert_path_avoids(start, &path, &reference);
}

#[test]
fn finish_inside_obstacle_is_blocked() {
    let mut avoidance = new_engine();
    avoidance.add_fixed_obstacle(Box::new(CircleObstacle::new(
        Pose::new(1450.0, 1000.0, 0.0),
        2000.0,
        0.2,
    )));

    let result = avoidance.avoidance(Coords::new(100.0, 1000.0), Coords::new(1500.0, 1000.0));
    assert_eq!(result, Err(AvoidanceError::FinishBlocked));
    assert!(!avoidance.is_avoidance_computed());
}

#[test]
fn start_inside_obstacle_is_snapped_to_its_boundary() {
    let mut avoidance = new_engine();
    avoidance.add_fixed_obstacle(Box::new(CircleObstacle::new(
        Pose::new(1450.0, 1000.0, 0.0),
        300.0,
        0.2,
    )));

    // Start inside the circle; it is snapped to (1810, 1000) on the
    // margined boundary, from where the finish is in direct line of sight.
    avoidance
        .avoidance(Coords::new(1500.0, 1000.0), Coords::new(2900.0, 1000.0))
        .unwrap();
    assert_eq!(path_of(&avoidance), vec![Coords::new(2900.0, 1000.0)]);
}

#[test]
fn fully_blocked_arena_fails() {
    let mut avoidance = new_engine();
    // Two bands spanning the whole arena width; their bounding-box corners
    // fall outside the borders, so no candidate vertex is admissible.
    avoidance.add_fixed_obstacle(Box::new(RectangleObstacle::new(
        Pose::new(1500.0, 800.0, 0.0),
        3200.0,
        200.0,
        0.0,
    )));
    avoidance.add_fixed_obstacle(Box::new(RectangleObstacle::new(
        Pose::new(1500.0, 1200.0, 0.0),
        3200.0,
        200.0,
        0.0,
    )));

    let result = avoidance.avoidance(Coords::new(1500.0, 100.0), Coords::new(1500.0, 1900.0));
    assert!(
        matches!(
            result,
            Err(AvoidanceError::NoReachableNeighbors) | Err(AvoidanceError::NoPath)
        ),
        "unexpected result: {result:?}"
    );
}

#[test]
fn disabled_obstacles_are_inert() {
    let mut avoidance = new_engine();
    let id = avoidance.add_fixed_obstacle(Box::new(CircleObstacle::new(
        Pose::new(1500.0, 1000.0, 0.0),
        400.0,
        0.2,
    )));
    avoidance.registry().set_enabled(id, false);

    avoidance
        .avoidance(Coords::new(100.0, 1000.0), Coords::new(2900.0, 1000.0))
        .unwrap();
    assert_eq!(path_of(&avoidance), vec![Coords::new(2900.0, 1000.0)]);
}

#[test]
fn repeated_query_is_idempotent() {
    let mut avoidance = new_engine();
    avoidance.add_fixed_obstacle(Box::new(CircleObstacle::new(
        Pose::new(1500.0, 1000.0, 0.0),
        400.0,
        0.2,
    )));

    let start = Coords::new(100.0, 1000.0);
    let finish = Coords::new(2900.0, 1000.0);
    avoidance.avoidance(start, finish).unwrap();
    let first = path_of(&avoidance);
    avoidance.avoidance(start, finish).unwrap();
    let second = path_of(&avoidance);
    assert_eq!(first, second);
}

#[test]
fn check_recompute_follows_dynamic_obstacles() {
    let avoidance = new_engine();
    let start = Coords::new(500.0, 1000.0);
    let stop = Coords::new(2500.0, 1000.0);
    assert!(!avoidance.check_recompute(&start, &stop));

    // Circle of radius 300 centered exactly on the segment.
    let id = avoidance.add_dynamic_obstacle(Box::new(CircleObstacle::new(
        Pose::new(1500.0, 1000.0, 0.0),
        300.0,
        0.2,
    )));
    assert!(avoidance.check_recompute(&start, &stop));

    avoidance.remove_dynamic_obstacle(id).unwrap();
    assert!(!avoidance.check_recompute(&start, &stop));
}

#[test]
fn check_recompute_skips_disabled_dynamic_obstacles() {
    let avoidance = new_engine();
    let start = Coords::new(500.0, 1000.0);
    let stop = Coords::new(2500.0, 1000.0);

    let id = avoidance.add_dynamic_obstacle(Box::new(CircleObstacle::new(
        Pose::new(1500.0, 1000.0, 0.0),
        300.0,
        0.2,
    )));
    assert!(avoidance.check_recompute(&start, &stop));

    assert!(avoidance.registry().set_enabled(id, false));
    assert!(!avoidance.check_recompute(&start, &stop));

    assert!(avoidance.registry().set_enabled(id, true));
    assert!(avoidance.check_recompute(&start, &stop));
}

#[test]
fn check_recompute_ignores_obstacles_centered_outside_borders() {
    let avoidance = new_engine();
    // Crosses the segment geometrically, but its center is out of the arena.
    avoidance.add_dynamic_obstacle(Box::new(CircleObstacle::new(
        Pose::new(1500.0, 2100.0, 0.0),
        400.0,
        0.2,
    )));
    assert!(!avoidance.check_recompute(&Coords::new(500.0, 1900.0), &Coords::new(2500.0, 1900.0)));
}

#[test]
fn dynamic_obstacle_blocks_and_releases_a_path() {
    let mut avoidance = new_engine();
    let start = Coords::new(100.0, 1000.0);
    let finish = Coords::new(2900.0, 1000.0);

    avoidance.avoidance(start, finish).unwrap();
    assert_eq!(avoidance.get_path_size(), 1);

    let id = avoidance.add_dynamic_obstacle(Box::new(CircleObstacle::new(
        Pose::new(1500.0, 1000.0, 0.0),
        400.0,
        0.2,
    )));
    avoidance.avoidance(start, finish).unwrap();
    assert!(avoidance.get_path_size() >= 2);

    avoidance.remove_dynamic_obstacle(id).unwrap();
    avoidance.avoidance(start, finish).unwrap();
    assert_eq!(path_of(&avoidance), vec![finish]);
}

#[test]
fn perception_thread_can_move_obstacles_between_queries() {
    let mut avoidance = new_engine();
    let registry = Arc::clone(avoidance.registry());
    let id = registry.add_dynamic(Box::new(CircleObstacle::new(
        Pose::new(1500.0, 1000.0, 0.0),
        400.0,
        0.2,
    )));

    let start = Coords::new(100.0, 1000.0);
    let finish = Coords::new(2900.0, 1000.0);
    avoidance.avoidance(start, finish).unwrap();
    assert!(avoidance.get_path_size() >= 2);

    // A perception update moves the obstacle out of the way.
    let mover = std::thread::spawn(move || {
        registry.update_dynamic(id, |o| o.set_center(Pose::new(1500.0, 1900.0, 0.0)));
    });
    mover.join().unwrap();

    avoidance.avoidance(start, finish).unwrap();
    assert_eq!(path_of(&avoidance), vec![finish]);
}

#[test]
fn path_index_out_of_range_is_reported() {
    let mut avoidance = new_engine();
    avoidance
        .avoidance(Coords::new(100.0, 100.0), Coords::new(2900.0, 1900.0))
        .unwrap();
    assert_eq!(avoidance.get_path_size(), 1);
    assert!(avoidance.get_path_pose(0).is_ok());
    assert_eq!(
        avoidance.get_path_pose(1),
        Err(AvoidanceError::IndexOutOfRange { index: 1, size: 1 })
    );
}
