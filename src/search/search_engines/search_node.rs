use crate::search::{Action, Cost, Position};

/// Handle into a [`crate::search::SearchSpace`] arena. Nodes refer to their
/// parents through these instead of owning pointers; the arena outlives every
/// handle taken from it during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(super) usize);

/// One node of the search tree: a position plus the back-pointer needed to
/// reconstruct the path that reached it. Never mutated after creation; many
/// children share one parent.
#[derive(Debug, Clone)]
pub struct SearchNode {
    position: Position,
    /// `None` for the root.
    parent: Option<NodeId>,
    /// The action that produced this node. For the root this is the agent's
    /// heading, which only feeds the turn-cost model and is never part of an
    /// extracted plan.
    action: Option<Action>,
    /// Accumulated path cost from the root.
    g: Cost,
    depth: u32,
}

impl SearchNode {
    pub(super) fn root(position: Position, heading: Option<Action>) -> Self {
        Self {
            position,
            parent: None,
            action: heading,
            g: (0.0).into(),
            depth: 0,
        }
    }

    pub(super) fn child(
        position: Position,
        parent: NodeId,
        action: Action,
        g: Cost,
        depth: u32,
    ) -> Self {
        Self {
            position,
            parent: Some(parent),
            action: Some(action),
            g,
            depth,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn action(&self) -> Option<Action> {
        self.action
    }

    pub fn g(&self) -> Cost {
        self.g
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}
