mod heuristic;
mod manhattan;
mod zero;

pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use manhattan::ManhattanDistance;
pub use zero::ZeroHeuristic;
