use crate::search::{Action, Position};
use thiserror::Error;

/// Failures a planning call can report. All of these are local and
/// recoverable; an exhausted search is not an error but a
/// [`crate::search::SearchResult::NoSolution`] outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanningError {
    /// Planning was requested while no dirty cell remains. The heuristic has
    /// no finite value in that case, so the call is rejected up front.
    #[error("no dirty cell remains, nothing to plan for")]
    EmptyGoalSet,

    /// An action was applied in a state where it is blocked by a wall.
    #[error("action {action} is blocked from {position}")]
    InvalidAction { position: Position, action: Action },

    /// The engine selector did not name a known search engine.
    #[error("unknown search engine `{0}`, expected one of bfs, dfs, ucs, greedy, astar")]
    UnknownEngine(String),

    /// A text map could not be parsed into a valid snapshot.
    #[error("malformed grid: {0}")]
    MalformedGrid(String),

    /// A plan replayed cleanly but its final cell is not dirty.
    #[error("plan ends at {0}, which is not a dirty cell")]
    GoalNotReached(Position),
}
