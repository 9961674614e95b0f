use crate::geometry::{Coords, Pose};
use num_traits::Float;

/// Capability interface shared by every obstacle shape.
///
/// Every shape owns a reference pose, a circumscribed-circle radius, an
/// enabled flag and a margin-enlarged bounding polygon whose vertices are
/// offered to the visibility graph as candidate waypoints. The bounding box
/// is recomputed on construction and on every [`Obstacle::set_center`], so it
/// is never stale when queried.
pub trait Obstacle<F: Float> {
    /// Returns the obstacle reference pose (center position + orientation).
    fn center(&self) -> &Pose<F>;

    /// Moves the obstacle and recomputes its bounding box.
    fn set_center(&mut self, center: Pose<F>);

    /// Returns the circumscribed-circle radius.
    fn radius(&self) -> F;

    /// Returns true if the obstacle participates in collision queries.
    fn enabled(&self) -> bool;

    /// Enables or disables the obstacle. A disabled obstacle is inert for
    /// every geometric query made by the planner.
    fn enable(&mut self, enabled: bool);

    /// Returns the margin-enlarged bounding polygon vertices.
    fn bounding_box(&self) -> &[Coords<F>];

    /// Checks if the given point is inside the obstacle.
    fn is_point_inside(&self, p: &Coords<F>) -> bool;

    /// Checks if the segment `[a, b]` crosses the obstacle.
    fn is_segment_crossing(&self, a: &Coords<F>, b: &Coords<F>) -> bool;

    /// Returns a point on the enlarged perimeter near `p`, used to snap a
    /// start pose out of the obstacle.
    fn nearest_point(&self, p: &Coords<F>) -> Coords<F>;
}

/// Owned, thread-transferable obstacle as stored by the registry.
pub type BoxedObstacle<F> = Box<dyn Obstacle<F> + Send>;
