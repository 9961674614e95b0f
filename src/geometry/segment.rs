use crate::geometry::Coords;
use num_traits::Float;

/// Tolerance, in coordinate units, for the collinearity tests below.
fn epsilon<F: Float>() -> F {
    F::from(1e-6).unwrap()
}

/// Returns true if `c` and `d` lie strictly on opposite sides of the
/// supporting line of `[a, b]`.
fn strictly_straddles<F: Float>(
    a: &Coords<F>,
    b: &Coords<F>,
    c: &Coords<F>,
    d: &Coords<F>,
) -> bool {
    let ab = *b - *a;
    let ac = *c - *a;
    let ad = *d - *a;
    ab.cross(&ac) * ab.cross(&ad) < F::zero()
}

/// Returns true if segments `[a, b]` and `[c, d]` properly cross, i.e. they
/// intersect in a single point interior to both. Touching endpoints and
/// collinear overlaps do not count.
pub fn segments_properly_cross<F: Float>(
    a: &Coords<F>,
    b: &Coords<F>,
    c: &Coords<F>,
    d: &Coords<F>,
) -> bool {
    strictly_straddles(a, b, c, d) && strictly_straddles(c, d, a, b)
}

/// Returns true if `p` lies on the segment `[a, b]`, endpoints included.
pub fn point_on_segment<F: Float>(a: &Coords<F>, b: &Coords<F>, p: &Coords<F>) -> bool {
    let ab = *b - *a;
    let ap = *p - *a;
    let length = ab.length();
    if length == F::zero() {
        return a.distance(p) <= epsilon();
    }
    // Perpendicular distance from p to the supporting line.
    if ab.cross(&ap).abs() / length > epsilon() {
        return false;
    }
    // Projection parameter along the segment.
    let t = ab.dot(&ap) / (length * length);
    t >= F::zero() && t <= F::one()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_segments() {
        let a = Coords::new(0.0, 0.0);
        let b = Coords::new(4.0, 4.0);
        let c = Coords::new(0.0, 4.0);
        let d = Coords::new(4.0, 0.0);
        assert!(segments_properly_cross(&a, &b, &c, &d));
    }

    #[test]
    fn disjoint_segments_do_not_cross() {
        let a = Coords::new(0.0, 0.0);
        let b = Coords::new(1.0, 0.0);
        let c = Coords::new(0.0, 1.0);
        let d = Coords::new(1.0, 1.0);
        assert!(!segments_properly_cross(&a, &b, &c, &d));
    }

    #[test]
    fn touching_endpoint_is_not_a_proper_cross() {
        let a = Coords::new(0.0, 0.0);
        let b = Coords::new(2.0, 0.0);
        let c = Coords::new(2.0, 0.0);
        let d = Coords::new(2.0, 2.0);
        assert!(!segments_properly_cross(&a, &b, &c, &d));
    }

    #[test]
    fn collinear_overlap_is_not_a_proper_cross() {
        let a = Coords::new(0.0, 0.0);
        let b = Coords::new(4.0, 0.0);
        let c = Coords::new(1.0, 0.0);
        let d = Coords::new(3.0, 0.0);
        assert!(!segments_properly_cross(&a, &b, &c, &d));
    }

    #[test]
    fn point_on_segment_interior_and_endpoints() {
        let a = Coords::new(0.0, 0.0);
        let b = Coords::new(4.0, 0.0);
        assert!(point_on_segment(&a, &b, &Coords::new(2.0, 0.0)));
        assert!(point_on_segment(&a, &b, &a));
        assert!(point_on_segment(&a, &b, &b));
    }

    #[test]
    fn point_off_segment() {
        let a = Coords::new(0.0, 0.0);
        let b = Coords::new(4.0, 0.0);
        assert!(!point_on_segment(&a, &b, &Coords::new(2.0, 0.1)));
        assert!(!point_on_segment(&a, &b, &Coords::new(5.0, 0.0)));
        assert!(!point_on_segment(&a, &b, &Coords::new(-1.0, 0.0)));
    }
}
