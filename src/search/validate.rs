use crate::search::{GridSnapshot, Plan, PlanningError, Position};

/// Replay `plan` against `grid` starting from the agent's cell.
///
/// Fails fast with [`PlanningError::InvalidAction`] on the first wall-blocked
/// move and with [`PlanningError::GoalNotReached`] when the replay ends on a
/// cell that is not dirty. Returns the final position on success.
pub fn validate(plan: &Plan, grid: &GridSnapshot) -> Result<Position, PlanningError> {
    let mut position = grid.agent();
    for &action in plan.steps() {
        let next = position.step(action);
        if grid.is_wall(&next) {
            return Err(PlanningError::InvalidAction { position, action });
        }
        position = next;
    }
    if !grid.is_dirty(&position) {
        return Err(PlanningError::GoalNotReached(position));
    }
    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Action;
    use crate::test_utils::*;

    #[test]
    fn good_plan_replays_to_the_dirty_cell() {
        let grid = GridSnapshot::from_text(CORRIDOR_MAP).unwrap();
        let plan = Plan::new(vec![Action::Right, Action::Right, Action::Up]);
        assert_eq!(validate(&plan, &grid), Ok(Position::new(3, 2)));
    }

    #[test]
    fn blocked_move_is_rejected_at_the_blocking_step() {
        let grid = GridSnapshot::from_text(CORRIDOR_MAP).unwrap();
        let plan = Plan::new(vec![Action::Right, Action::Up]);
        assert_eq!(
            validate(&plan, &grid),
            Err(PlanningError::InvalidAction {
                position: Position::new(2, 1),
                action: Action::Up,
            })
        );
    }

    #[test]
    fn plan_ending_off_dirt_is_rejected() {
        let grid = GridSnapshot::from_text(CORRIDOR_MAP).unwrap();
        let plan = Plan::new(vec![Action::Right]);
        assert_eq!(
            validate(&plan, &grid),
            Err(PlanningError::GoalNotReached(Position::new(2, 1)))
        );
    }
}
