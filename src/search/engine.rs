use std::fmt;

use indexmap::map::Entry::{Occupied, Vacant};
use log::{debug, trace};

use super::frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};
use super::heuristic::{Heuristic, Manhattan};
use super::node::{Node, NodePool};
use super::solution::Solution;
use crate::collections::{FxHashSet, FxIndexMap};
use crate::errors::SearchError;
use crate::grid::{Cell, Grid};


/// Exploration order
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    /// Best-first on cost + heuristic
    AStar(Box<dyn Heuristic>),
}

impl Strategy {

    /// A* guided by the Manhattan distance to the grid's goal
    pub fn a_star(grid: &Grid) -> Self {
        Strategy::AStar(Box::new(Manhattan::for_grid(grid)))
    }

    /// A* with a caller supplied heuristic, admissible or not
    pub fn a_star_with<H: Heuristic + 'static>(heuristic: H) -> Self {
        Strategy::AStar(Box::new(heuristic))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::DepthFirst => "depth-first",
            Strategy::BreadthFirst => "breadth-first",
            Strategy::AStar(_) => "a-star",
        }
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// Decides which popped nodes get expanded and which children enter the frontier
trait ExploredRecord {

    /// Record a popped, non-goal node
    /// Returns false when the node must be dropped without expansion
    fn settle(&mut self, node: &Node) -> bool;

    /// Whether a freshly generated child may be added to the frontier
    fn admits<F: Frontier>(&self, frontier: &F, state: Cell) -> bool;
}

/// DFS/BFS: duplicates are suppressed when enqueueing
#[derive(Default)]
struct VisitedSet(FxHashSet<Cell>);

impl ExploredRecord for VisitedSet {
    fn settle(&mut self, node: &Node) -> bool {
        self.0.insert(node.state());
        true
    }

    fn admits<F: Frontier>(&self, frontier: &F, state: Cell) -> bool {
        !frontier.contains_state(state) && !self.0.contains(&state)
    }
}

/// A*: smallest settled cost per state
/// Every child is pushed, stale duplicates are dropped when popped
/// A state is expanded again if it is reached with a strictly lower cost
#[derive(Default)]
struct CostRecord(FxIndexMap<Cell, usize>);

impl ExploredRecord for CostRecord {
    fn settle(&mut self, node: &Node) -> bool {
        match self.0.entry(node.state()) {
            Vacant(e) => {
                e.insert(node.cost());
                true
            }
            Occupied(mut e) => {
                if node.cost() < *e.get() {
                    // cheaper path to an already settled state
                    e.insert(node.cost());
                    true
                } else {
                    false
                }
            }
        }
    }

    fn admits<F: Frontier>(&self, _frontier: &F, _state: Cell) -> bool {
        true
    }
}


/// Grid search engine
/// Holds only configuration: every call to solve starts from a fresh frontier, explored record and node pool
#[derive(Debug)]
pub struct SearchEngine {
    strategy: Strategy,
    max_expansions: Option<usize>, // None = run until goal or exhaustion
}

impl SearchEngine {

    pub fn new(strategy: Strategy) -> Self {
        Self { strategy, max_expansions: None }
    }

    /// Stop with ExpansionLimit once `limit` nodes have been expanded without reaching the goal
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }

    /// Find a path from the grid's start to its goal
    /// Fails with NoSolution when the goal is unreachable
    pub fn solve(&self, grid: &Grid) -> Result<Solution, SearchError> {
        debug!(
            "{} search from {} to {} on {}x{} grid",
            self.strategy.name(), grid.start(), grid.goal(), grid.height(), grid.width()
        );

        let result = match &self.strategy {
            Strategy::DepthFirst => self.run(grid, StackFrontier::new(), VisitedSet::default()),
            Strategy::BreadthFirst => self.run(grid, QueueFrontier::new(), VisitedSet::default()),
            Strategy::AStar(heuristic) => {
                self.run(grid, PriorityFrontier::new(&**heuristic), CostRecord::default())
            }
        };

        match &result {
            Ok(solution) => debug!(
                "{} search found path of cost {} after {} expansions",
                self.strategy.name(), solution.cost(), solution.expanded()
            ),
            Err(e) => debug!("{} search failed: {e}", self.strategy.name()),
        }
        result
    }

    /// The search loop shared by all strategies
    /// Goal test happens when a node is removed from the frontier, not when it is generated
    fn run<F, E>(&self, grid: &Grid, mut frontier: F, mut explored: E) -> Result<Solution, SearchError>
    where
        F: Frontier,
        E: ExploredRecord,
    {
        let mut pool = NodePool::new();
        let mut expanded = 0;
        let goal = grid.goal();

        frontier.add(Node::root(grid.start()));

        while !frontier.is_empty() {

            if let Some(limit) = self.max_expansions {
                if expanded >= limit {
                    return Err(SearchError::ExpansionLimit { limit });
                }
            }

            let node = frontier.remove()?;
            expanded += 1;
            trace!("expand {} at cost {} ({} in frontier)", node.state(), node.cost(), frontier.len());

            // Check if we've reached the goal
            if node.state() == goal {
                let (actions, cells) = pool.reconstruct(&node)?;
                return Ok(Solution::new(actions, cells, expanded));
            }

            if !explored.settle(&node) {
                continue;
            }

            // Only expanded nodes become parents, so only they enter the pool
            let id = pool.insert(node);
            for (action, state) in grid.neighbors(node.state()) {
                if explored.admits(&frontier, state) {
                    frontier.add(node.child(id, action, state));
                }
            }
        }

        Err(SearchError::NoSolution { expanded })
    }
}
