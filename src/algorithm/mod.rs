pub mod traits;
pub mod state;
pub mod dijkstra;
pub mod parallel;

pub use state::{PathState, NO_PARENT};
pub use traits::ShortestPathAlgorithm;
