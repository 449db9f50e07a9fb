mod action;
mod cost;
mod error;
mod grid;
pub mod heuristics;
mod plan;
mod planner;
mod position;
mod problem;
pub mod search_engines;
mod validate;

pub use action::{Action, Axis};
pub use cost::{Cost, CostModel};
pub use error::PlanningError;
pub use grid::GridSnapshot;
pub use plan::Plan;
pub use planner::{plan, PlannerConfig};
pub use position::Position;
pub use problem::VacuumProblem;
pub use search_engines::{SearchEngineName, SearchResult, SearchSpace, SearchStatistics, Solution};
pub use validate::validate;
