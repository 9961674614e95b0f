pub mod coords;
pub mod pose;
pub mod segment;

pub use coords::Coords;
pub use pose::Pose;
pub use segment::{point_on_segment, segments_properly_cross};
