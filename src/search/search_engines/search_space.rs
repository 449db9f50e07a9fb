use crate::search::search_engines::search_node::{NodeId, SearchNode};
use crate::search::{Action, Cost, Plan, Position};
use segvec::{Linear, SegVec};

/// Arena holding every node generated during one search.
///
/// The node tree is private to a single planning call and dropped wholesale
/// when the call returns; integer handles keep parent sharing cheap without
/// reference counting. Tree-search discipline: a position reached along two
/// different paths gets two nodes, duplicate expansion is prevented by the
/// explored set in the search loop instead.
#[derive(Debug)]
pub struct SearchSpace {
    nodes: SegVec<SearchNode, Linear>,
}

impl SearchSpace {
    /// Create a space containing only the root node and return its handle.
    pub fn new(position: Position, heading: Option<Action>) -> (Self, NodeId) {
        let mut nodes = SegVec::new();
        nodes.push(SearchNode::root(position, heading));
        (Self { nodes }, NodeId(0))
    }

    pub fn push_child(
        &mut self,
        parent: NodeId,
        action: Action,
        position: Position,
        g: Cost,
    ) -> NodeId {
        let depth = self.node(parent).depth() + 1;
        debug_assert!(
            g >= self.node(parent).g(),
            "path cost must be non-decreasing along a parent chain"
        );
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode::child(position, parent, action, g, depth));
        id
    }

    pub fn node(&self, id: NodeId) -> &SearchNode {
        self.nodes.get(id.0).expect("invalid node id")
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Reconstruct the action sequence from the root to `goal`. The root's
    /// own action (the agent heading) is not part of the plan.
    pub fn extract_plan(&self, goal: NodeId) -> Plan {
        let mut steps = vec![];
        let mut current = self.node(goal);
        while let Some(parent) = current.parent() {
            steps.push(current.action().expect("non-root node must carry an action"));
            current = self.node(parent);
        }
        steps.reverse();
        Plan::new(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_plan_walks_back_to_the_root() {
        let (mut space, root) = SearchSpace::new(Position::new(1, 1), None);
        let a = space.push_child(root, Action::Right, Position::new(2, 1), (1.0).into());
        let b = space.push_child(a, Action::Up, Position::new(2, 2), (2.0).into());
        let plan = space.extract_plan(b);
        assert_eq!(plan.steps(), &[Action::Right, Action::Up]);
        assert_eq!(space.node(b).depth(), 2);
    }

    #[test]
    fn root_heading_is_not_part_of_the_plan() {
        let (mut space, root) = SearchSpace::new(Position::new(1, 1), Some(Action::Up));
        let a = space.push_child(root, Action::Down, Position::new(1, 0), (2.0).into());
        assert_eq!(space.extract_plan(a).steps(), &[Action::Down]);
        let empty: &[Action] = &[];
        assert_eq!(space.extract_plan(root).steps(), empty);
    }

    #[test]
    fn children_can_share_a_parent() {
        let (mut space, root) = SearchSpace::new(Position::new(2, 2), None);
        let left = space.push_child(root, Action::Left, Position::new(1, 2), (1.0).into());
        let right = space.push_child(root, Action::Right, Position::new(3, 2), (1.0).into());
        assert_eq!(space.node(left).parent(), Some(root));
        assert_eq!(space.node(right).parent(), Some(root));
        assert_eq!(space.len(), 3);
    }
}
