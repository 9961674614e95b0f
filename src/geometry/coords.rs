use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A 2D point or displacement vector. Plain value type with no identity.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coords<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Coords<F> {
    /// Constructs a new point from its coordinates.
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of two 2D vectors.
    /// Positive when `other` is counter-clockwise from `self`.
    pub fn cross(&self, other: &Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Euclidean length of the vector.
    pub fn length(&self) -> F {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Self) -> F {
        (*other - *self).length()
    }
}

impl<F: Float> Add for Coords<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<F: Float> Sub for Coords<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<F: Float> Mul<F> for Coords<F> {
    type Output = Self;

    fn mul(self, rhs: F) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_products() {
        let a = Coords::new(3.0, 0.0);
        let b = Coords::new(0.0, 2.0);
        assert_eq!(a.dot(&b), 0.0);
        assert_eq!(a.cross(&b), 6.0);
        assert_eq!(b.cross(&a), -6.0);
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Coords::new(0.0, 0.0);
        let b = Coords::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn arithmetic_ops() {
        let a = Coords::new(1.0, 2.0);
        let b = Coords::new(3.0, -1.0);
        assert_eq!(a + b, Coords::new(4.0, 1.0));
        assert_eq!(b - a, Coords::new(2.0, -3.0));
        assert_eq!(a * 2.0, Coords::new(2.0, 4.0));
    }
}
