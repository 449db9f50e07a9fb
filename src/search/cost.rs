use crate::search::Action;
use ordered_float::OrderedFloat;

/// Cost of a single node evaluation: g, h, and f values are all `Cost`s.
pub type Cost = OrderedFloat<f64>;

/// Prices one move given the action that preceded it.
///
/// Every move costs a base unit. With turn accounting enabled, rotating
/// between moves costs extra: a quarter turn is half a unit and a full
/// reversal is a whole unit. The asymmetry is deliberate, a reversal is two
/// quarter turns of physical rotation.
#[derive(Debug, Clone, Copy)]
pub struct CostModel {
    turn_cost_enabled: bool,
}

const MOVE_COST: f64 = 1.0;
const QUARTER_TURN_COST: f64 = 0.5;
const REVERSAL_COST: f64 = 1.0;

impl CostModel {
    pub fn new(turn_cost_enabled: bool) -> Self {
        Self { turn_cost_enabled }
    }

    /// Incremental cost of taking `next` after `prev`. `prev` is `None` when
    /// the agent's prior motion is unknown, in which case no turn is charged.
    pub fn step_cost(&self, prev: Option<Action>, next: Action) -> Cost {
        let turn_cost = match prev {
            Some(prev) if self.turn_cost_enabled => turn_cost(prev, next),
            _ => 0.0,
        };
        OrderedFloat(MOVE_COST + turn_cost)
    }
}

fn turn_cost(prev: Action, next: Action) -> f64 {
    if prev.axis() != next.axis() {
        QUARTER_TURN_COST
    } else if prev != next {
        REVERSAL_COST
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Axis;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn straight_continuation_is_free() {
        let model = CostModel::new(true);
        assert_approx_eq!(model.step_cost(Some(Action::Up), Action::Up).0, 1.0);
        assert_approx_eq!(model.step_cost(Some(Action::Left), Action::Left).0, 1.0);
    }

    #[test]
    fn reversal_costs_a_full_unit() {
        let model = CostModel::new(true);
        assert_approx_eq!(model.step_cost(Some(Action::Up), Action::Down).0, 2.0);
        assert_approx_eq!(model.step_cost(Some(Action::Left), Action::Right).0, 2.0);
    }

    #[test]
    fn quarter_turn_costs_half_a_unit() {
        let model = CostModel::new(true);
        assert_approx_eq!(model.step_cost(Some(Action::Up), Action::Left).0, 1.5);
        assert_approx_eq!(model.step_cost(Some(Action::Right), Action::Down).0, 1.5);
    }

    #[test]
    fn first_move_without_heading_charges_no_turn() {
        let model = CostModel::new(true);
        assert_approx_eq!(model.step_cost(None, Action::Down).0, 1.0);
    }

    #[test]
    fn disabled_model_charges_base_cost_only() {
        let model = CostModel::new(false);
        assert_approx_eq!(model.step_cost(Some(Action::Up), Action::Down).0, 1.0);
        assert_approx_eq!(model.step_cost(Some(Action::Up), Action::Left).0, 1.0);
    }

    #[test]
    fn axis_classes_match_the_turn_table() {
        assert_eq!(Action::Up.axis(), Axis::Vertical);
        assert_eq!(Action::Down.axis(), Axis::Vertical);
        assert_eq!(Action::Left.axis(), Axis::Horizontal);
        assert_eq!(Action::Right.axis(), Axis::Horizontal);
    }
}
