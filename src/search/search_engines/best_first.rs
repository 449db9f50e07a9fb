//! The generic expand/test/enqueue loop shared by all five search engines.
//!
//! The loop follows graph-search convention: the goal test runs when a node
//! is popped for expansion, not when it is generated, and a state is never
//! expanded twice. Deduplication happens only through the explored set at pop
//! time; children are always inserted, so a state reached along two paths
//! sits in the frontier twice and the ordering policy decides which labeling
//! gets expanded.

use crate::search::search_engines::{
    Frontier, FrontierPolicy, SearchResult, SearchSpace, SearchStatistics, Solution, Termination,
    TerminationCondition,
};
use crate::search::{Cost, PlanningError, Position, VacuumProblem};
use std::collections::HashSet;

pub(crate) fn search(
    problem: &VacuumProblem,
    policy: FrontierPolicy,
    termination: &mut TerminationCondition,
) -> Result<(SearchResult, SearchStatistics), PlanningError> {
    let mut statistics = SearchStatistics::new();
    let (mut space, root) = SearchSpace::new(problem.initial_position(), problem.initial_action());
    let mut frontier = Frontier::new(policy);
    // Membership is checked against the set; the vector preserves expansion
    // order for the caller.
    let mut explored: Vec<Position> = Vec::new();
    let mut explored_set: HashSet<Position> = HashSet::new();

    let root_h = evaluate(problem, &problem.initial_position(), policy, &mut statistics);
    frontier.push(root, policy.f_value((0.0).into(), root_h));
    statistics.record_frontier_size(frontier.len());

    while let Some(id) = frontier.pop() {
        if let Some(reason) = termination.should_terminate() {
            statistics.finalise_search();
            let result = match reason {
                Termination::TimeLimit => SearchResult::TimeLimitExceeded { explored },
                Termination::MemoryLimit => SearchResult::MemoryLimitExceeded { explored },
            };
            return Ok((result, statistics));
        }

        let (position, g, prev_action) = {
            let node = space.node(id);
            (node.position(), node.g(), node.action())
        };
        if !explored_set.insert(position) {
            statistics.increment_duplicate_pops();
            continue;
        }
        explored.push(position);
        statistics.increment_expanded_nodes();

        if problem.is_goal(&position) {
            let plan = space.extract_plan(id);
            statistics.finalise_search();
            let solution = Solution {
                plan,
                cost: g,
                explored,
            };
            return Ok((SearchResult::Success(solution), statistics));
        }

        for action in problem.actions(&position) {
            let child_position = problem.result(&position, action)?;
            let child_g = g + problem.step_cost(prev_action, action);
            let child = space.push_child(id, action, child_position, child_g);
            statistics.increment_generated_nodes();
            let child_h = evaluate(problem, &child_position, policy, &mut statistics);
            frontier.push(child, policy.f_value(child_g, child_h));
        }
        statistics.record_frontier_size(frontier.len());
    }

    statistics.finalise_search();
    Ok((SearchResult::NoSolution { explored }, statistics))
}

fn evaluate(
    problem: &VacuumProblem,
    position: &Position,
    policy: FrontierPolicy,
    statistics: &mut SearchStatistics,
) -> Cost {
    if policy.uses_heuristic() {
        statistics.increment_evaluated_nodes();
        problem.heuristic(position)
    } else {
        (0.0).into()
    }
}
