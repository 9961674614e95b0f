mod avoidance;
mod dijkstra;
mod error;
mod graph;

pub use avoidance::Avoidance;
pub use error::AvoidanceError;
pub use graph::{Graph, FINISH_INDEX, START_INDEX};
