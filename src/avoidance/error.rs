use thiserror::Error;

/// Failure modes of a planning query.
///
/// All variants are recoverable at the call site: a failed query leaves the
/// engine without a stored path and the caller retries after the obstacle
/// set changes, or reports the mission failure upward.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvoidanceError {
    /// The finish pose lies outside the arena borders.
    #[error("finish pose outside borders")]
    FinishUnreachable,

    /// The finish pose lies inside an enabled obstacle.
    #[error("finish pose inside an obstacle")]
    FinishBlocked,

    /// The start vertex has no collision-free edge to any other candidate
    /// vertex.
    #[error("start pose has no reachable neighbors")]
    NoReachableNeighbors,

    /// The visibility graph is disconnected between start and finish.
    #[error("no path between start and finish")]
    NoPath,

    /// A path accessor was called with an index outside the stored path.
    #[error("path index {index} out of range (path size is {size})")]
    IndexOutOfRange { index: usize, size: usize },
}
