use crate::search::heuristics::{ManhattanDistance, ZeroHeuristic};
use crate::search::{GridSnapshot, Position};
use ordered_float::OrderedFloat;
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

/// Estimate of the remaining cost from a position to the nearest goal.
///
/// Must never overestimate for A* to stay optimal. Every move costs at least
/// one unit, so any estimate that counts minimum moves while ignoring walls
/// is admissible.
pub trait Heuristic: Debug {
    fn evaluate(&self, position: &Position, grid: &GridSnapshot) -> HeuristicValue;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default)]
#[clap(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(help = "Manhattan distance to the nearest dirty cell.")]
    #[default]
    Manhattan,
    #[clap(help = "The zero heuristic; turns A* into UCS.")]
    Zero,
}

impl HeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::Manhattan => Box::new(ManhattanDistance::new()),
            HeuristicName::Zero => Box::new(ZeroHeuristic::new()),
        }
    }
}
