//! A plan is the ordered sequence of actions leading from the agent's cell to
//! the goal cell a search found.

use crate::search::Action;
use std::fmt;
use std::ops::Deref;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Plan {
    steps: Vec<Action>,
}

impl Plan {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<Action>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Action] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for step in &self.steps {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", step)?;
            first = false;
        }
        Ok(())
    }
}

impl IntoIterator for Plan {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl Deref for Plan {
    type Target = [Action];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_space_separated_uppercase_steps() {
        let plan = Plan::new(vec![Action::Right, Action::Right, Action::Up]);
        assert_eq!(plan.to_string(), "RIGHT RIGHT UP");
        assert_eq!(plan.len(), 3);
    }

    #[test]
    fn empty_plan_displays_nothing() {
        assert_eq!(Plan::empty().to_string(), "");
        assert!(Plan::empty().is_empty());
    }
}
