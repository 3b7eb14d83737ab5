//! Constraint satisfaction by chronological backtracking
//! Variables are assigned in the given order, values tried in domain order,
//! no forward checking or ordering heuristics

use std::{fmt::Debug, hash::Hash};

use log::trace;

use crate::collections::FxIndexMap;
use crate::errors::CspError;


/// Binary constraint problem
/// constraint(var1, value1, var2, value2) returns true when the pair is allowed
pub struct Csp<V, D, C> {
    variables: Vec<V>,
    domains: FxIndexMap<V, Vec<D>>,
    neighbors: FxIndexMap<V, Vec<V>>, // variables sharing a constraint, missing = none
    constraint: C,
}

impl<V, D, C> Csp<V, D, C>
where
    V: Eq + Hash + Clone + Debug,
    D: Clone + Debug,
    C: Fn(&V, &D, &V, &D) -> bool,
{

    /// Every variable needs a domain, repeated variables are ignored
    pub fn new(
        variables: Vec<V>,
        domains: FxIndexMap<V, Vec<D>>,
        neighbors: FxIndexMap<V, Vec<V>>,
        constraint: C,
    ) -> Result<Self, CspError> {
        let mut unique: Vec<V> = Vec::with_capacity(variables.len());
        for var in variables {
            if !domains.contains_key(&var) {
                return Err(CspError::MissingDomain(format!("{var:?}")));
            }
            if !unique.contains(&var) {
                unique.push(var);
            }
        }

        Ok(Self { variables: unique, domains, neighbors, constraint })
    }

    pub fn variables(&self) -> &[V] {
        &self.variables
    }

    /// Whether `var = value` agrees with every assigned neighbor
    pub fn is_consistent(&self, var: &V, value: &D, assignment: &FxIndexMap<V, D>) -> bool {
        let Some(neighbors) = self.neighbors.get(var) else {
            return true;
        };
        neighbors.iter().all(|other| match assignment.get(other) {
            Some(other_value) => (self.constraint)(var, value, other, other_value),
            None => true,
        })
    }

    /// Complete assignment in variable order, or NoSolution
    pub fn backtracking_search(&self) -> Result<FxIndexMap<V, D>, CspError> {
        let mut assignment = FxIndexMap::default();
        if self.backtrack(&mut assignment) {
            Ok(assignment)
        } else {
            Err(CspError::NoSolution)
        }
    }

    fn backtrack(&self, assignment: &mut FxIndexMap<V, D>) -> bool {

        // first unassigned variable in the given order
        let Some(var) = self.variables.iter().find(|v| !assignment.contains_key(*v)) else {
            return true;
        };
        let Some(domain) = self.domains.get(var) else {
            return false;
        };

        for value in domain {
            if !self.is_consistent(var, value, assignment) {
                continue;
            }

            trace!("try {var:?} = {value:?} at depth {}", assignment.len());
            assignment.insert(var.clone(), value.clone());
            if self.backtrack(assignment) {
                return true;
            }

            // Variables are assigned in order, so `var` is always the last entry
            assignment.pop();
        }

        false
    }
}
