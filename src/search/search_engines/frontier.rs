use crate::search::search_engines::search_node::NodeId;
use crate::search::Cost;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::VecDeque;

/// The one axis on which the five search engines differ: the order in which
/// frontier nodes come up for expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierPolicy {
    /// First in, first out: breadth-first expansion.
    Fifo,
    /// Last in, first out: depth-first expansion.
    Lifo,
    /// Ascending accumulated path cost: uniform-cost expansion.
    ByPathCost,
    /// Ascending heuristic estimate alone: greedy best-first expansion.
    ByHeuristic,
    /// Ascending path cost plus heuristic estimate: A* expansion.
    ByPathCostPlusHeuristic,
}

impl FrontierPolicy {
    /// Whether nodes need a heuristic evaluation before insertion.
    pub fn uses_heuristic(&self) -> bool {
        matches!(
            self,
            FrontierPolicy::ByHeuristic | FrontierPolicy::ByPathCostPlusHeuristic
        )
    }

    /// The f-value ordering the frontier under this policy. Ignored by the
    /// FIFO and LIFO disciplines.
    pub fn f_value(&self, g: Cost, h: Cost) -> Cost {
        match self {
            FrontierPolicy::Fifo | FrontierPolicy::Lifo => (0.0).into(),
            FrontierPolicy::ByPathCost => g,
            FrontierPolicy::ByHeuristic => h,
            FrontierPolicy::ByPathCostPlusHeuristic => g + h,
        }
    }
}

/// The open set of nodes awaiting expansion.
///
/// The priority discipline breaks f-value ties by insertion order so that
/// search results are deterministic across runs.
#[derive(Debug)]
pub struct Frontier {
    queue: Queue,
}

#[derive(Debug)]
enum Queue {
    Fifo(VecDeque<NodeId>),
    Lifo(Vec<NodeId>),
    Priority {
        queue: PriorityQueue<NodeId, Reverse<(Cost, u64)>>,
        next_seq: u64,
    },
}

impl Frontier {
    pub fn new(policy: FrontierPolicy) -> Self {
        let queue = match policy {
            FrontierPolicy::Fifo => Queue::Fifo(VecDeque::new()),
            FrontierPolicy::Lifo => Queue::Lifo(Vec::new()),
            FrontierPolicy::ByPathCost
            | FrontierPolicy::ByHeuristic
            | FrontierPolicy::ByPathCostPlusHeuristic => Queue::Priority {
                queue: PriorityQueue::new(),
                next_seq: 0,
            },
        };
        Self { queue }
    }

    pub fn push(&mut self, id: NodeId, f: Cost) {
        match &mut self.queue {
            Queue::Fifo(queue) => queue.push_back(id),
            Queue::Lifo(stack) => stack.push(id),
            Queue::Priority { queue, next_seq } => {
                queue.push(id, Reverse((f, *next_seq)));
                *next_seq += 1;
            }
        }
    }

    pub fn pop(&mut self) -> Option<NodeId> {
        match &mut self.queue {
            Queue::Fifo(queue) => queue.pop_front(),
            Queue::Lifo(stack) => stack.pop(),
            Queue::Priority { queue, .. } => queue.pop().map(|(id, _)| id),
        }
    }

    pub fn len(&self) -> usize {
        match &self.queue {
            Queue::Fifo(queue) => queue.len(),
            Queue::Lifo(stack) => stack.len(),
            Queue::Priority { queue, .. } => queue.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
