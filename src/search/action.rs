use strum_macros::{Display, EnumIter, EnumString};

/// One atomic directional move attempt. Availability in a given cell is
/// filtered by wall adjacency, see [`crate::search::VacuumProblem::actions`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, clap::ValueEnum,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[clap(rename_all = "lower")]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

/// Axis class of an action. The turn-cost model only cares whether two
/// successive actions share an axis, not which axis it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Action {
    /// Unit translation applied to a position, `(dx, dy)`. `Up` increases `y`.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Action::Up => (0, 1),
            Action::Down => (0, -1),
            Action::Left => (-1, 0),
            Action::Right => (1, 0),
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            Action::Up | Action::Down => Axis::Vertical,
            Action::Left | Action::Right => Axis::Horizontal,
        }
    }

    /// The 180-degree reversal of this action.
    pub fn reversed(&self) -> Action {
        match self {
            Action::Up => Action::Down,
            Action::Down => Action::Up,
            Action::Left => Action::Right,
            Action::Right => Action::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn deltas_are_unit_steps() {
        for action in Action::iter() {
            let (dx, dy) = action.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn reversal_shares_axis() {
        for action in Action::iter() {
            assert_ne!(action, action.reversed());
            assert_eq!(action.axis(), action.reversed().axis());
        }
    }

    #[test]
    fn parses_direction_names() {
        assert_eq!(Action::from_str("UP").unwrap(), Action::Up);
        assert_eq!(Action::from_str("left").unwrap(), Action::Left);
        assert!(Action::from_str("NORTH").is_err());
    }

    #[test]
    fn displays_in_uppercase() {
        assert_eq!(Action::Right.to_string(), "RIGHT");
    }
}
