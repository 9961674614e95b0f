use crate::geometry::{Coords, Pose};
use crate::obstacles::Obstacle;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// A circular obstacle defined by its center pose and radius.
///
/// The bounding box is a regular polygon circumscribing nothing: its vertices
/// sit on the margin-enlarged radius and serve as visibility-graph candidate
/// waypoints around the circle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircleObstacle<F: Float> {
    center: Pose<F>,
    radius: F,
    bounding_box_margin: F,
    /// Number of bounding-box vertices used to discretize the circle.
    bounding_box_points: usize,
    enabled: bool,
    bounding_box: Vec<Coords<F>>,
}

impl<F: Float> CircleObstacle<F> {
    /// Default discretization of the bounding polygon.
    pub const DEFAULT_BOUNDING_BOX_POINTS: usize = 8;

    /// Constructs a circle obstacle with the default bounding-box
    /// discretization.
    pub fn new(center: Pose<F>, radius: F, bounding_box_margin: F) -> Self {
        Self::with_discretization(
            center,
            radius,
            bounding_box_margin,
            Self::DEFAULT_BOUNDING_BOX_POINTS,
        )
    }

    /// Constructs a circle obstacle with `bounding_box_points` vertices on
    /// its bounding polygon.
    pub fn with_discretization(
        center: Pose<F>,
        radius: F,
        bounding_box_margin: F,
        bounding_box_points: usize,
    ) -> Self {
        let mut circle = Self {
            center,
            radius,
            bounding_box_margin,
            bounding_box_points,
            enabled: true,
            bounding_box: Vec::new(),
        };
        circle.update_bounding_box();
        circle
    }

    /// Radius enlarged by the bounding-box margin.
    fn enlarged_radius(&self) -> F {
        self.radius * (F::one() + self.bounding_box_margin)
    }

    fn update_bounding_box(&mut self) {
        self.bounding_box.clear();
        if self.radius <= F::zero() {
            return;
        }
        let enlarged = self.enlarged_radius();
        let tau = F::from(std::f64::consts::TAU).unwrap();
        let count = F::from(self.bounding_box_points).unwrap();
        for i in 0..self.bounding_box_points {
            let angle = F::from(i).unwrap() * tau / count;
            self.bounding_box.push(Coords::new(
                self.center.x() + enlarged * angle.cos(),
                self.center.y() + enlarged * angle.sin(),
            ));
        }
    }

    /// True if the infinite line through `a` and `b` passes within `radius`
    /// of the center.
    fn is_line_crossing(&self, a: &Coords<F>, b: &Coords<F>) -> bool {
        let ab = *b - *a;
        let ac = *self.center.coords() - *a;
        let length = ab.length();
        if length == F::zero() {
            return self.center.distance(a) <= self.radius;
        }
        ab.cross(&ac).abs() / length <= self.radius
    }
}

impl<F: Float> Obstacle<F> for CircleObstacle<F> {
    fn center(&self) -> &Pose<F> {
        &self.center
    }

    fn set_center(&mut self, center: Pose<F>) {
        self.center = center;
        self.update_bounding_box();
    }

    fn radius(&self) -> F {
        self.radius
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn enable(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn bounding_box(&self) -> &[Coords<F>] {
        &self.bounding_box
    }

    fn is_point_inside(&self, p: &Coords<F>) -> bool {
        self.center.distance(p) <= self.radius
    }

    /// True if an endpoint is inside the circle, or the supporting line
    /// passes within the radius of the center and the closest approach lies
    /// between `a` and `b` (both projection dot products non-negative).
    fn is_segment_crossing(&self, a: &Coords<F>, b: &Coords<F>) -> bool {
        if self.is_point_inside(a) || self.is_point_inside(b) {
            return true;
        }
        if !self.is_line_crossing(a, b) {
            return false;
        }
        let ab = *b - *a;
        let ba = *a - *b;
        let ac = *self.center.coords() - *a;
        let bc = *self.center.coords() - *b;
        ab.dot(&ac) >= F::zero() && ba.dot(&bc) >= F::zero()
    }

    /// Projects `p` radially from the center onto the margin-enlarged
    /// radius. A point exactly at the center is pushed along the x axis.
    fn nearest_point(&self, p: &Coords<F>) -> Coords<F> {
        let direction = *p - *self.center.coords();
        let norm = direction.length();
        if norm == F::zero() {
            return Coords::new(self.center.x() + self.enlarged_radius(), self.center.y());
        }
        let scale = self.enlarged_radius() / norm;
        *self.center.coords() + direction * scale
    }
}
