pub mod circle;
pub mod obstacle;
pub mod polygon;
pub mod rectangle;
pub mod registry;

pub use circle::CircleObstacle;
pub use obstacle::{BoxedObstacle, Obstacle};
pub use polygon::PolygonObstacle;
pub use rectangle::RectangleObstacle;
pub use registry::{ObstacleId, ObstacleRegistry, RegistryReadGuard};
