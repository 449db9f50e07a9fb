use crate::search::{Action, PlanningError, Position};
use itertools::Itertools;
use std::collections::{BTreeSet, HashSet};

/// An immutable view of the environment captured at the start of a planning
/// call: grid dimensions, wall cells, dirty cells, and the agent.
///
/// The outer ring of the grid is always wall; only interior walls are stored
/// explicitly. The agent's heading is the last action it took, which the
/// turn-cost model uses to price the first move of a leg. A fresh snapshot
/// (nothing moved yet) has no heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSnapshot {
    width: i32,
    height: i32,
    walls: HashSet<Position>,
    dirty: BTreeSet<Position>,
    agent: Position,
    heading: Option<Action>,
}

impl GridSnapshot {
    pub fn new(
        width: i32,
        height: i32,
        walls: HashSet<Position>,
        dirty: BTreeSet<Position>,
        agent: Position,
        heading: Option<Action>,
    ) -> Result<Self, PlanningError> {
        if width < 3 || height < 3 {
            return Err(PlanningError::MalformedGrid(format!(
                "grid must be at least 3x3 to have an interior, got {}x{}",
                width, height
            )));
        }
        let snapshot = Self {
            width,
            height,
            walls,
            dirty,
            agent,
            heading,
        };
        if snapshot.is_wall(&agent) {
            return Err(PlanningError::MalformedGrid(format!(
                "agent at {} stands on a wall",
                agent
            )));
        }
        Ok(snapshot)
    }

    /// Parse a text map. `#` is wall, `*` is dirty, `@` is the agent, `+` is
    /// the agent standing on a dirty cell, `.` is an empty cell. The last
    /// text line is `y = 0`, so maps read the way they render. The parsed
    /// snapshot has no heading; set one with [`GridSnapshot::with_heading`].
    pub fn from_text(text: &str) -> Result<Self, PlanningError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |row| row.len() as i32);
        if rows.iter().any(|row| row.len() as i32 != width) {
            return Err(PlanningError::MalformedGrid(
                "rows have unequal widths".to_owned(),
            ));
        }

        let mut walls = HashSet::new();
        let mut dirty = BTreeSet::new();
        let mut agent = None;
        for (y, row) in rows.iter().rev().enumerate() {
            for (x, cell) in row.chars().enumerate() {
                let position = Position::new(x as i32, y as i32);
                match cell {
                    '#' => {
                        walls.insert(position);
                    }
                    '*' => {
                        dirty.insert(position);
                    }
                    '@' | '+' => {
                        if cell == '+' {
                            dirty.insert(position);
                        }
                        if agent.replace(position).is_some() {
                            return Err(PlanningError::MalformedGrid(
                                "more than one agent marker".to_owned(),
                            ));
                        }
                    }
                    '.' => {}
                    other => {
                        return Err(PlanningError::MalformedGrid(format!(
                            "unrecognised cell `{}` at {}",
                            other, position
                        )));
                    }
                }
            }
        }

        let agent = agent.ok_or_else(|| {
            PlanningError::MalformedGrid("no agent marker in map".to_owned())
        })?;
        let snapshot = Self::new(width, height, walls, dirty, agent, None)?;
        if let Some(gap) = snapshot
            .ring_positions()
            .find(|position| !snapshot.walls.contains(position))
        {
            return Err(PlanningError::MalformedGrid(format!(
                "outer ring must be wall, {} is not",
                gap
            )));
        }
        Ok(snapshot)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn agent(&self) -> Position {
        self.agent
    }

    pub fn heading(&self) -> Option<Action> {
        self.heading
    }

    /// Whether `position` is blocked. Anything on or beyond the outer ring
    /// counts as wall, so callers never step outside the grid.
    pub fn is_wall(&self, position: &Position) -> bool {
        position.x <= 0
            || position.y <= 0
            || position.x >= self.width - 1
            || position.y >= self.height - 1
            || self.walls.contains(position)
    }

    pub fn is_dirty(&self, position: &Position) -> bool {
        self.dirty.contains(position)
    }

    pub fn dirty(&self) -> impl Iterator<Item = &Position> {
        self.dirty.iter()
    }

    pub fn dirty_count(&self) -> usize {
        self.dirty.len()
    }

    /// All interior cells, wall or not, in row-major order.
    pub fn interior_positions(&self) -> impl Iterator<Item = Position> + '_ {
        (1..self.height - 1)
            .cartesian_product(1..self.width - 1)
            .map(|(y, x)| Position::new(x, y))
    }

    fn ring_positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height)
            .cartesian_product(0..self.width)
            .map(|(y, x)| Position::new(x, y))
            .filter(|position| {
                position.x == 0
                    || position.y == 0
                    || position.x == self.width - 1
                    || position.y == self.height - 1
            })
    }

    pub fn with_heading(mut self, heading: Action) -> Self {
        self.heading = Some(heading);
        self
    }

    /// Snapshot after the agent has moved to `agent`, now facing `heading`.
    pub fn with_agent(&self, agent: Position, heading: Option<Action>) -> Self {
        Self {
            agent,
            heading,
            ..self.clone()
        }
    }

    /// Snapshot after the cell at `position` has been cleaned.
    pub fn cleaned(&self, position: &Position) -> Self {
        let mut dirty = self.dirty.clone();
        dirty.remove(position);
        Self {
            dirty,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn parses_small_open_map() {
        let grid = GridSnapshot::from_text(SMALL_OPEN_MAP).unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.agent(), Position::new(1, 1));
        assert_eq!(grid.heading(), None);
        assert_eq!(grid.dirty_count(), 1);
        assert!(grid.is_dirty(&Position::new(3, 3)));
    }

    #[test]
    fn ring_is_wall_and_interior_is_not() {
        let grid = GridSnapshot::from_text(SMALL_OPEN_MAP).unwrap();
        assert!(grid.is_wall(&Position::new(0, 0)));
        assert!(grid.is_wall(&Position::new(4, 2)));
        assert!(!grid.is_wall(&Position::new(2, 2)));
        // Out of bounds counts as wall too.
        assert!(grid.is_wall(&Position::new(-1, 2)));
        assert!(grid.is_wall(&Position::new(2, 9)));
    }

    #[test]
    fn rejects_map_without_agent() {
        let text = "###\n#*#\n###";
        assert!(matches!(
            GridSnapshot::from_text(text),
            Err(PlanningError::MalformedGrid(_))
        ));
    }

    #[test]
    fn rejects_ragged_rows() {
        let text = "####\n#@#\n####";
        assert!(matches!(
            GridSnapshot::from_text(text),
            Err(PlanningError::MalformedGrid(_))
        ));
    }

    #[test]
    fn rejects_open_ring() {
        let text = "###\n.@#\n###";
        assert!(matches!(
            GridSnapshot::from_text(text),
            Err(PlanningError::MalformedGrid(_))
        ));
    }

    #[test]
    fn rejects_two_agents() {
        let text = "####\n#@@#\n####";
        assert!(matches!(
            GridSnapshot::from_text(text),
            Err(PlanningError::MalformedGrid(_))
        ));
    }

    #[test]
    fn cleaned_removes_only_the_given_cell() {
        let grid = GridSnapshot::from_text(MULTI_DIRT_MAP).unwrap();
        let before = grid.dirty_count();
        let target = *grid.dirty().next().unwrap();
        let cleaned = grid.cleaned(&target);
        assert_eq!(cleaned.dirty_count(), before - 1);
        assert!(!cleaned.is_dirty(&target));
        // The original snapshot is untouched.
        assert_eq!(grid.dirty_count(), before);
    }

    #[test]
    fn with_agent_moves_agent_and_heading() {
        let grid = GridSnapshot::from_text(SMALL_OPEN_MAP).unwrap();
        let moved = grid.with_agent(Position::new(2, 1), Some(Action::Right));
        assert_eq!(moved.agent(), Position::new(2, 1));
        assert_eq!(moved.heading(), Some(Action::Right));
    }
}
