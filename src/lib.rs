//! 2D path avoidance for a mobile robot in a bounded rectangular arena.
//!
//! Given a start and a finish position, the engine builds a visibility graph
//! whose vertices are the margin-enlarged bounding-box corners of the
//! registered obstacles and whose edges are the obstacle-free straight
//! segments between them, then runs Dijkstra over it to produce a waypoint
//! list. A cheap [`Avoidance::check_recompute`] test lets a caller decide
//! whether a previously computed path is still trustworthy after dynamic
//! obstacles moved, without rebuilding the graph.
//!
//! The engine spawns no threads of its own. A perception thread may mutate
//! the dynamic obstacles through a shared [`ObstacleRegistry`] while a
//! planning thread queries [`Avoidance`]; every query holds the registry
//! lock for its whole read phase and sees one consistent obstacle snapshot.

pub mod avoidance;
pub mod geometry;
pub mod obstacles;
pub mod util;

pub use avoidance::{Avoidance, AvoidanceError};
pub use geometry::{Coords, Pose};
pub use obstacles::{
    BoxedObstacle, CircleObstacle, Obstacle, ObstacleId, ObstacleRegistry, PolygonObstacle,
    RectangleObstacle,
};
