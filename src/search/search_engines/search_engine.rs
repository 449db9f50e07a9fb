use crate::search::search_engines::{
    best_first, FrontierPolicy, SearchStatistics, TerminationCondition,
};
use crate::search::{Cost, Plan, PlanningError, Position, VacuumProblem};
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// Terminal outcome of one search invocation. The explored set is carried on
/// every variant so that callers can always display it, success or not.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    /// A goal was reached; the solution holds the path and its cost.
    Success(Solution),
    /// The frontier emptied before any goal was found. A normal outcome, not
    /// an error: no path exists.
    NoSolution { explored: Vec<Position> },
    /// The search hit its wall-clock limit before concluding.
    TimeLimitExceeded { explored: Vec<Position> },
    /// The search hit its memory limit before concluding.
    MemoryLimitExceeded { explored: Vec<Position> },
}

impl SearchResult {
    /// The states expanded before the search concluded, in expansion order.
    pub fn explored(&self) -> &[Position] {
        match self {
            SearchResult::Success(solution) => &solution.explored,
            SearchResult::NoSolution { explored }
            | SearchResult::TimeLimitExceeded { explored }
            | SearchResult::MemoryLimitExceeded { explored } => explored,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Ordered actions from the agent's cell to the reached dirty cell.
    pub plan: Plan,
    /// Total path cost of the plan under the problem's cost model.
    pub cost: Cost,
    /// States expanded on the way, in expansion order.
    pub explored: Vec<Position>,
}

/// The search engine registry. All five engines run the same generic loop and
/// differ only in the frontier policy they select.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SearchEngineName {
    #[clap(help = "Breadth-first search; finds a minimum-action-count path.")]
    Bfs,
    #[clap(help = "Depth-first search; fast on open grids, no optimality guarantee.")]
    Dfs,
    #[clap(help = "Uniform-cost search; optimal under the configured cost model.")]
    Ucs,
    #[clap(help = "Greedy best-first search on the heuristic alone; not optimal.")]
    Greedy,
    #[clap(name = "astar", help = "A*; optimal, the heuristic is admissible here.")]
    #[strum(serialize = "astar", serialize = "a*")]
    AStar,
}

impl SearchEngineName {
    /// Parse a selector string, reporting unknown names as a planning error
    /// rather than a process failure.
    pub fn parse(name: &str) -> Result<Self, PlanningError> {
        Self::from_str(name).map_err(|_| PlanningError::UnknownEngine(name.to_owned()))
    }

    pub fn policy(&self) -> FrontierPolicy {
        match self {
            SearchEngineName::Bfs => FrontierPolicy::Fifo,
            SearchEngineName::Dfs => FrontierPolicy::Lifo,
            SearchEngineName::Ucs => FrontierPolicy::ByPathCost,
            SearchEngineName::Greedy => FrontierPolicy::ByHeuristic,
            SearchEngineName::AStar => FrontierPolicy::ByPathCostPlusHeuristic,
        }
    }

    /// Run this engine on `problem` until it concludes or `termination`
    /// fires.
    pub fn search(
        &self,
        problem: &VacuumProblem,
        termination: &mut TerminationCondition,
    ) -> Result<(SearchResult, SearchStatistics), PlanningError> {
        best_first::search(problem, self.policy(), termination)
    }
}
