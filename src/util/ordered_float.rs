use num_traits::Float;
use std::cmp::Ordering;

/// A float wrapper with a total order, usable as a binary-heap key.
/// Construction rejects NaN, so the `Ord` implementation never observes one.
#[derive(Debug, Copy, Clone)]
pub struct OrderedFloat<F: Float>(F);

impl<F: Float> OrderedFloat<F> {
    /// Wraps a float value. Panics if the value is NaN.
    pub fn new(value: F) -> Self {
        assert!(!value.is_nan(), "OrderedFloat cannot hold NaN");
        Self(value)
    }

    /// Returns the wrapped value.
    pub fn get(&self) -> F {
        self.0
    }
}

impl<F: Float> PartialEq for OrderedFloat<F> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<F: Float> Eq for OrderedFloat<F> {}

impl<F: Float> PartialOrd for OrderedFloat<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Float> Ord for OrderedFloat<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Safe because new() rejects NaN.
        self.0.partial_cmp(&other.0).expect("NaN in OrderedFloat")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_floats() {
        let a = OrderedFloat::new(1.0_f64);
        let b = OrderedFloat::new(2.0_f64);
        assert!(a < b);
        assert_eq!(a, OrderedFloat::new(1.0_f64));
        assert_eq!(b.get(), 2.0);
    }

    #[test]
    #[should_panic]
    fn rejects_nan() {
        let _ = OrderedFloat::new(f64::NAN);
    }
}
