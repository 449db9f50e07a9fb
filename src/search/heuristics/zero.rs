use crate::search::heuristics::{Heuristic, HeuristicValue};
use crate::search::{GridSnapshot, Position};

/// The zero heuristic. Degenerate but admissible; under it A* expands the
/// same states as UCS and greedy search degenerates to insertion order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl ZeroHeuristic {
    pub fn new() -> Self {
        Self
    }
}

impl Heuristic for ZeroHeuristic {
    fn evaluate(&self, _position: &Position, _grid: &GridSnapshot) -> HeuristicValue {
        (0.0).into()
    }
}
