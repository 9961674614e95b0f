use crate::geometry::{Coords, Pose};
use crate::obstacles::{Obstacle, PolygonObstacle};
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// A rectangle obstacle built from a center pose and two side lengths.
///
/// A specialization of [`PolygonObstacle`]: the four corners are computed
/// from the pose (the orientation rotates the rectangle) and every geometric
/// query is delegated to the inner polygon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RectangleObstacle<F: Float> {
    center: Pose<F>,
    radius: F,
    length_x: F,
    length_y: F,
    bounding_box_margin: F,
    inner: PolygonObstacle<F>,
}

impl<F: Float> RectangleObstacle<F> {
    /// Constructs a rectangle obstacle centered on `center`, with side
    /// lengths `length_x` and `length_y` along the rotated axes.
    pub fn new(center: Pose<F>, length_x: F, length_y: F, bounding_box_margin: F) -> Self {
        let inner = PolygonObstacle::new(
            Self::corners(&center, length_x, length_y),
            bounding_box_margin,
        );
        Self {
            center,
            radius: length_x.hypot(length_y) / F::from(2.0).unwrap(),
            length_x,
            length_y,
            bounding_box_margin,
            inner,
        }
    }

    pub fn length_x(&self) -> F {
        self.length_x
    }

    pub fn length_y(&self) -> F {
        self.length_y
    }

    /// Corner coordinates in counter-clockwise order.
    fn corners(center: &Pose<F>, length_x: F, length_y: F) -> Vec<Coords<F>> {
        let half = F::from(0.5).unwrap();
        let (hx, hy) = (length_x * half, length_y * half);
        let (sin_o, cos_o) = center.o_rad().sin_cos();
        [(-hx, -hy), (hx, -hy), (hx, hy), (-hx, hy)]
            .iter()
            .map(|&(dx, dy)| {
                Coords::new(
                    center.x() + dx * cos_o - dy * sin_o,
                    center.y() + dx * sin_o + dy * cos_o,
                )
            })
            .collect()
    }
}

impl<F: Float> Obstacle<F> for RectangleObstacle<F> {
    fn center(&self) -> &Pose<F> {
        &self.center
    }

    /// Rebuilds the corners from the new pose; orientation changes rotate
    /// the rectangle.
    fn set_center(&mut self, center: Pose<F>) {
        let enabled = self.inner.enabled();
        self.center = center;
        let mut inner = PolygonObstacle::new(
            Self::corners(&center, self.length_x, self.length_y),
            self.bounding_box_margin,
        );
        inner.enable(enabled);
        self.inner = inner;
    }

    fn radius(&self) -> F {
        self.radius
    }

    fn enabled(&self) -> bool {
        self.inner.enabled()
    }

    fn enable(&mut self, enabled: bool) {
        self.inner.enable(enabled);
    }

    fn bounding_box(&self) -> &[Coords<F>] {
        self.inner.bounding_box()
    }

    fn is_point_inside(&self, p: &Coords<F>) -> bool {
        self.inner.is_point_inside(p)
    }

    fn is_segment_crossing(&self, a: &Coords<F>, b: &Coords<F>) -> bool {
        self.inner.is_segment_crossing(a, b)
    }

    fn nearest_point(&self, p: &Coords<F>) -> Coords<F> {
        self.inner.nearest_point(p)
    }
}
