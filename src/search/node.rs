use crate::errors::SearchError;
use crate::grid::{Action, Cell};


/// Handle of an expanded node inside a NodePool
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}


/// Search tree node
/// Parent and action are stored together, so only the root lacks an action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    state: Cell,
    link: Option<(NodeId, Action)>, // parent handle + move taken from the parent
    cost: usize, // path length from the start
}

impl Node {

    pub fn root(state: Cell) -> Self {
        Self { state, link: None, cost: 0 }
    }

    /// Child reached from `self` by `action`
    /// `id` is the pool handle under which `self` was stored
    pub fn child(&self, id: NodeId, action: Action, state: Cell) -> Self {
        Self {
            state,
            link: Some((id, action)),
            cost: self.cost + 1,
        }
    }

    pub fn state(&self) -> Cell {
        self.state
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.link.map(|(id, _)| id)
    }

    pub fn action(&self) -> Option<Action> {
        self.link.map(|(_, action)| action)
    }

    pub fn cost(&self) -> usize {
        self.cost
    }
}


/// Arena of expanded nodes
/// Nodes are never removed, the whole pool is dropped when a search returns
#[derive(Debug, Default)]
pub struct NodePool {
    nodes: Vec<Node>,
}

impl NodePool {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk parent handles from `goal` back to the root
    /// Returns (actions, cells) ordered start -> goal, the root itself is left out
    pub fn reconstruct(&self, goal: &Node) -> Result<(Vec<Action>, Vec<Cell>), SearchError> {
        let mut actions = Vec::with_capacity(goal.cost);
        let mut cells = Vec::with_capacity(goal.cost);
        let mut current = *goal;

        // Trace back from goal to start
        while let Some((parent, action)) = current.link {
            actions.push(action);
            cells.push(current.state);
            current = *self.get(parent).ok_or(SearchError::DanglingParent(parent.0))?;
        }

        // The path is in reverse order, so reverse it
        actions.reverse();
        cells.reverse();

        Ok((actions, cells))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_orders_start_to_goal() {
        let mut pool = NodePool::new();

        let root = Node::root(Cell::new(0, 0));
        let root_id = pool.insert(root);
        let a = root.child(root_id, Action::Down, Cell::new(1, 0));
        let a_id = pool.insert(a);
        assert_eq!((root_id.index(), a_id.index()), (0, 1));
        assert_eq!(pool.len(), 2);
        let b = a.child(a_id, Action::Right, Cell::new(1, 1));

        let (actions, cells) = pool.reconstruct(&b).unwrap();
        assert_eq!(actions, vec![Action::Down, Action::Right]);
        assert_eq!(cells, vec![Cell::new(1, 0), Cell::new(1, 1)]);
        assert_eq!(b.cost(), 2);
    }

    #[test]
    fn test_reconstruct_root_is_empty() {
        let pool = NodePool::new();
        let (actions, cells) = pool.reconstruct(&Node::root(Cell::new(3, 3))).unwrap();
        assert!(actions.is_empty());
        assert!(cells.is_empty());
    }

    #[test]
    fn test_reconstruct_dangling_parent() {
        let mut other = NodePool::new();
        let root = Node::root(Cell::new(0, 0));
        let id = other.insert(root);
        let child = root.child(id, Action::Right, Cell::new(0, 1));

        // child points into a pool it was never stored in
        let empty = NodePool::new();
        assert_eq!(empty.reconstruct(&child), Err(SearchError::DanglingParent(0)));
    }

    #[test]
    fn test_root_has_no_parent_or_action() {
        let root = Node::root(Cell::new(2, 1));
        assert_eq!(root.parent(), None);
        assert_eq!(root.action(), None);
        assert_eq!(root.cost(), 0);
    }
}
