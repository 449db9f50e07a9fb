use crate::search::heuristics::{Heuristic, HeuristicValue};
use crate::search::{GridSnapshot, Position};

/// Minimum Manhattan distance from a position to any dirty cell.
///
/// Admissible: it counts the minimum number of moves ignoring walls and every
/// move costs at least one unit. Callers must not evaluate it on a snapshot
/// with no dirty cells; [`crate::search::plan`] guards that case with
/// [`crate::search::PlanningError::EmptyGoalSet`], and the evaluation falls
/// back to an infinite sentinel rather than panicking.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanDistance;

impl ManhattanDistance {
    pub fn new() -> Self {
        Self
    }
}

impl Heuristic for ManhattanDistance {
    fn evaluate(&self, position: &Position, grid: &GridSnapshot) -> HeuristicValue {
        grid.dirty()
            .map(|dirty| HeuristicValue::from(f64::from(position.manhattan_distance(dirty))))
            .min()
            .unwrap_or(HeuristicValue::from(f64::INFINITY))
    }
}
