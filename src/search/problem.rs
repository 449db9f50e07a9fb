use crate::search::heuristics::{Heuristic, HeuristicValue};
use crate::search::{Action, CostModel, GridSnapshot, PlanningError, Position};
use smallvec::SmallVec;
use strum::IntoEnumIterator;

/// The problem of reaching the next dirty cell, formulated for graph search.
///
/// Binds a grid snapshot, a cost model and a heuristic into the operations
/// every search engine needs. All operations are deterministic functions of
/// the snapshot; nothing here depends on search history.
#[derive(Debug)]
pub struct VacuumProblem<'a> {
    grid: &'a GridSnapshot,
    cost_model: CostModel,
    heuristic: Box<dyn Heuristic>,
}

impl<'a> VacuumProblem<'a> {
    /// Fails with [`PlanningError::EmptyGoalSet`] when the snapshot has no
    /// dirty cell: the goal test could never pass and the heuristic has no
    /// finite value.
    pub fn new(
        grid: &'a GridSnapshot,
        cost_model: CostModel,
        heuristic: Box<dyn Heuristic>,
    ) -> Result<Self, PlanningError> {
        if grid.dirty_count() == 0 {
            return Err(PlanningError::EmptyGoalSet);
        }
        Ok(Self {
            grid,
            cost_model,
            heuristic,
        })
    }

    pub fn grid(&self) -> &GridSnapshot {
        self.grid
    }

    /// The agent's position when the snapshot was taken, the root state of
    /// every search.
    pub fn initial_position(&self) -> Position {
        self.grid.agent()
    }

    /// The agent's last-taken action, pricing the first move of the leg.
    pub fn initial_action(&self) -> Option<Action> {
        self.grid.heading()
    }

    /// The actions executable in `position`: all four directions minus those
    /// blocked by an adjacent wall.
    pub fn actions(&self, position: &Position) -> SmallVec<[Action; 4]> {
        Action::iter()
            .filter(|action| !self.grid.is_wall(&position.step(*action)))
            .collect()
    }

    /// The position reached by taking `action` in `position`. Fails fast with
    /// [`PlanningError::InvalidAction`] on a wall-blocked action instead of
    /// producing an out-of-bounds state.
    pub fn result(&self, position: &Position, action: Action) -> Result<Position, PlanningError> {
        let next = position.step(action);
        if self.grid.is_wall(&next) {
            return Err(PlanningError::InvalidAction {
                position: *position,
                action,
            });
        }
        Ok(next)
    }

    pub fn is_goal(&self, position: &Position) -> bool {
        self.grid.is_dirty(position)
    }

    /// Incremental cost of taking `next` when the previous action along the
    /// path was `prev` (`None` at an unheaded root).
    pub fn step_cost(&self, prev: Option<Action>, next: Action) -> crate::search::Cost {
        self.cost_model.step_cost(prev, next)
    }

    pub fn heuristic(&self, position: &Position) -> HeuristicValue {
        self.heuristic.evaluate(position, self.grid)
    }
}
