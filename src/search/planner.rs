use crate::search::heuristics::HeuristicName;
use crate::search::search_engines::{
    SearchEngineName, SearchResult, SearchStatistics, TerminationCondition,
};
use crate::search::{CostModel, GridSnapshot, PlanningError, VacuumProblem};
use std::time::Duration;

/// The configuration surface of one planning call: which engine orders the
/// frontier, whether rotation is priced, and optional resource limits.
#[derive(Debug, Clone, Copy)]
pub struct PlannerConfig {
    pub engine: SearchEngineName,
    pub heuristic: HeuristicName,
    pub turn_cost_enabled: bool,
    pub time_limit: Option<Duration>,
    pub memory_limit_mb: Option<usize>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            engine: SearchEngineName::AStar,
            heuristic: HeuristicName::Manhattan,
            turn_cost_enabled: false,
            time_limit: None,
            memory_limit_mb: None,
        }
    }
}

impl PlannerConfig {
    pub fn new(engine: SearchEngineName) -> Self {
        Self {
            engine,
            ..Self::default()
        }
    }

    pub fn with_turn_cost(mut self, enabled: bool) -> Self {
        self.turn_cost_enabled = enabled;
        self
    }
}

/// Plan a path from the agent's cell to the nearest dirty cell of `grid`.
///
/// One clean, independent search per call: the snapshot is read-only input
/// and no state survives the call. Replanning after a cell is cleaned is the
/// caller's loop, re-invoking this with the updated snapshot.
///
/// Fails with [`PlanningError::EmptyGoalSet`] when the snapshot has no dirty
/// cell; callers should check the dirty count first. An unreachable goal is
/// not an error but a [`SearchResult::NoSolution`] outcome.
pub fn plan(
    grid: &GridSnapshot,
    config: &PlannerConfig,
) -> Result<(SearchResult, SearchStatistics), PlanningError> {
    let problem = VacuumProblem::new(
        grid,
        CostModel::new(config.turn_cost_enabled),
        config.heuristic.create(),
    )?;
    let mut termination = TerminationCondition::new(config.time_limit, config.memory_limit_mb);
    let outcome = config.engine.search(&problem, &mut termination);
    termination.finalise();
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Position;
    use crate::test_utils::*;

    #[test]
    fn planning_on_a_clean_grid_is_rejected() {
        let grid = GridSnapshot::from_text(SMALL_OPEN_MAP).unwrap();
        let swept = grid.cleaned(&Position::new(3, 3));
        let result = plan(&swept, &PlannerConfig::default());
        assert!(matches!(result, Err(PlanningError::EmptyGoalSet)));
    }

    #[test]
    fn default_config_finds_a_path() {
        let grid = GridSnapshot::from_text(SMALL_OPEN_MAP).unwrap();
        let (result, _) = plan(&grid, &PlannerConfig::default()).unwrap();
        assert!(matches!(result, SearchResult::Success(_)));
    }

    #[test]
    fn explored_set_is_returned_on_failure_too() {
        let grid = GridSnapshot::from_text(ENCLOSED_DIRT_MAP).unwrap();
        let (result, _) =
            plan(&grid, &PlannerConfig::new(SearchEngineName::Greedy)).unwrap();
        assert!(!result.explored().is_empty());
        assert!(matches!(result, SearchResult::NoSolution { .. }));
    }
}
