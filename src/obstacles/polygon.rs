use crate::geometry::{point_on_segment, segments_properly_cross, Coords, Pose};
use crate::obstacles::Obstacle;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// A convex polygon obstacle defined by its vertex list.
///
/// The center pose is derived from the area centroid and the radius from the
/// farthest vertex. Convexity and a consistent (counter-clockwise) winding
/// are hard preconditions of the point and segment tests, so both are
/// enforced at construction: winding is normalized and non-convex input is
/// rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolygonObstacle<F: Float> {
    center: Pose<F>,
    radius: F,
    bounding_box_margin: F,
    enabled: bool,
    points: Vec<Coords<F>>,
    bounding_box: Vec<Coords<F>>,
}

impl<F: Float> PolygonObstacle<F> {
    /// Constructs a polygon obstacle from its vertices.
    ///
    /// Panics if fewer than 3 vertices are given, if the polygon is
    /// degenerate (zero area) or if it is not convex. Vertices given in
    /// clockwise order are reversed to counter-clockwise.
    pub fn new(points: Vec<Coords<F>>, bounding_box_margin: F) -> Self {
        assert!(
            points.len() >= 3,
            "polygon obstacle needs at least 3 vertices"
        );

        let mut points = points;
        let area = Self::signed_area(&points);
        assert!(area != F::zero(), "polygon obstacle is degenerate");
        if area < F::zero() {
            points.reverse();
        }
        assert!(Self::is_convex(&points), "polygon obstacle must be convex");

        let centroid = Self::centroid(&points);
        let radius = points
            .iter()
            .map(|p| centroid.distance(p))
            .fold(F::zero(), F::max);

        let mut polygon = Self {
            center: Pose::from_coords(centroid, F::zero()),
            radius,
            bounding_box_margin,
            enabled: true,
            points,
            bounding_box: Vec::new(),
        };
        polygon.update_bounding_box();
        polygon
    }

    /// Returns the raw (non-enlarged) vertex list, counter-clockwise.
    pub fn points(&self) -> &[Coords<F>] {
        &self.points
    }

    /// Twice the shoelace sum; positive for counter-clockwise winding.
    fn signed_area(points: &[Coords<F>]) -> F {
        let mut area = F::zero();
        for (i, p) in points.iter().enumerate() {
            let q = &points[(i + 1) % points.len()];
            area = area + p.cross(q);
        }
        area * F::from(0.5).unwrap()
    }

    /// True if every pair of consecutive edges turns left or is collinear.
    /// Assumes counter-clockwise winding.
    fn is_convex(points: &[Coords<F>]) -> bool {
        let n = points.len();
        (0..n).all(|i| {
            let edge = points[(i + 1) % n] - points[i];
            let next_edge = points[(i + 2) % n] - points[(i + 1) % n];
            edge.cross(&next_edge) >= F::zero()
        })
    }

    /// Area centroid of the polygon.
    fn centroid(points: &[Coords<F>]) -> Coords<F> {
        let mut area = F::zero();
        let mut x_sum = F::zero();
        let mut y_sum = F::zero();
        for (i, p) in points.iter().enumerate() {
            let q = &points[(i + 1) % points.len()];
            let cross = p.cross(q);
            area = area + cross;
            x_sum = x_sum + (p.x + q.x) * cross;
            y_sum = y_sum + (p.y + q.y) * cross;
        }
        let factor = F::one() / (F::from(3.0).unwrap() * area.abs());
        Coords::new(x_sum * factor, y_sum * factor)
    }

    fn update_bounding_box(&mut self) {
        let scale = F::one() + self.bounding_box_margin;
        if scale == F::one() {
            // Keep the exact vertex values so candidate points stay
            // bit-identical to the shape vertices.
            self.bounding_box = self.points.clone();
            return;
        }
        let center = *self.center.coords();
        self.bounding_box = self
            .points
            .iter()
            .map(|p| center + (*p - center) * scale)
            .collect();
    }

    fn vertex_index(&self, p: &Coords<F>) -> Option<usize> {
        self.points.iter().position(|v| v == p)
    }

    /// True if vertices `i` and `j` are consecutive on the polygon ring,
    /// first and last included.
    fn ring_adjacent(i: usize, j: usize, n: usize) -> bool {
        let d = i.abs_diff(j);
        d == 1 || d == n - 1
    }
}

impl<F: Float> Obstacle<F> for PolygonObstacle<F> {
    fn center(&self) -> &Pose<F> {
        &self.center
    }

    /// Translates the polygon so its centroid moves to the new center
    /// position. The orientation component is stored but does not rotate the
    /// vertices.
    fn set_center(&mut self, center: Pose<F>) {
        let delta = *center.coords() - *self.center.coords();
        for p in &mut self.points {
            *p = *p + delta;
        }
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

    /// True iff `p` is strictly on the interior side of every directed edge.
    /// Points on the boundary are outside.
    fn is_point_inside(&self, p: &Coords<F>) -> bool {
        let n = self.points.len();
        (0..n).all(|i| {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            (b - a).cross(&(*p - a)) > F::zero()
        })
    }

    /// True if `[a, b]` properly crosses any edge, if a and b are both
    /// non-consecutive polygon vertices (a diagonal through the shape), or if
    /// any other vertex lies on `[a, b]`. A path segment between two
    /// consecutive vertices runs along the perimeter and is allowed.
    fn is_segment_crossing(&self, a: &Coords<F>, b: &Coords<F>) -> bool {
        let n = self.points.len();
        for i in 0..n {
            let c = &self.points[i];
            let d = &self.points[(i + 1) % n];
            if segments_properly_cross(a, b, c, d) {
                return true;
            }
        }

        if let (Some(i), Some(j)) = (self.vertex_index(a), self.vertex_index(b)) {
            if i != j && !Self::ring_adjacent(i, j, n) {
                return true;
            }
        }

        self.points
            .iter()
            .any(|v| v != a && v != b && point_on_segment(a, b, v))
    }

    /// Nearest bounding-box vertex. An approximation of the true nearest
    /// perimeter point, sufficient for snapping a start pose out of the
    /// shape.
    fn nearest_point(&self, p: &Coords<F>) -> Coords<F> {
        let mut best = self.bounding_box[0];
        let mut best_distance = p.distance(&best);
        for v in &self.bounding_box[1..] {
            let distance = p.distance(v);
            if distance < best_distance {
                best = *v;
                best_distance = distance;
            }
        }
        best
    }
}
