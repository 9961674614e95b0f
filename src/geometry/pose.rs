use crate::geometry::Coords;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// A 2D pose: a point plus an orientation angle in degrees.
/// Used as the reference pose of obstacles and the robot; positions elsewhere
/// are plain [`Coords`].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pose<F: Float> {
    coords: Coords<F>,
    /// Orientation in degrees.
    o: F,
}

impl<F: Float> Pose<F> {
    /// Constructs a pose from coordinates and an orientation in degrees.
    pub fn new(x: F, y: F, o: F) -> Self {
        Self {
            coords: Coords::new(x, y),
            o,
        }
    }

    /// Constructs a pose from a point and an orientation in degrees.
    pub fn from_coords(coords: Coords<F>, o: F) -> Self {
        Self { coords, o }
    }

    pub fn coords(&self) -> &Coords<F> {
        &self.coords
    }

    pub fn x(&self) -> F {
        self.coords.x
    }

    pub fn y(&self) -> F {
        self.coords.y
    }

    /// Orientation in degrees.
    pub fn o(&self) -> F {
        self.o
    }

    /// Orientation in radians.
    pub fn o_rad(&self) -> F {
        self.o.to_radians()
    }

    /// Euclidean distance from this pose's position to a point.
    pub fn distance(&self, p: &Coords<F>) -> F {
        self.coords.distance(p)
    }
}
