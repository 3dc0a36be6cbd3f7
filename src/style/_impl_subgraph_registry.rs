use crate::style::{Attributes, Subgraph, SubgraphRegistry};
use crate::VariableId;
use std::collections::BTreeSet;

impl Subgraph {
    pub fn new(variables: BTreeSet<VariableId>, attributes: Attributes) -> Subgraph {
        Subgraph {
            variables,
            attributes,
        }
    }

    pub fn variables(&self) -> &BTreeSet<VariableId> {
        &self.variables
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// If this subgraph has exactly one member, return it.
    pub fn single_variable(&self) -> Option<VariableId> {
        if self.variables.len() == 1 {
            self.variables.iter().next().cloned()
        } else {
            None
        }
    }

    /// True if the two subgraphs are disjoint, or one is a subset of the other.
    pub fn is_laminar_with(&self, other: &Subgraph) -> bool {
        self.variables.is_disjoint(&other.variables)
            || self.variables.is_subset(&other.variables)
            || other.variables.is_subset(&self.variables)
    }
}

impl SubgraphRegistry {
    pub fn new() -> SubgraphRegistry {
        SubgraphRegistry::default()
    }

    /// Add a new subgraph, replacing any existing subgraph with exactly the same set
    /// of variables.
    ///
    /// Empty subgraphs are ignored.
    pub fn add_or_replace(&mut self, variables: BTreeSet<VariableId>, attributes: Attributes) {
        if variables.is_empty() {
            return;
        }
        self.subgraphs.retain(|it| it.variables != variables);
        self.subgraphs.push(Subgraph::new(variables, attributes));
    }

    /// Add a new subgraph without checking for existing subgraphs with the same
    /// variables.
    ///
    /// Empty subgraphs are ignored.
    pub fn append(&mut self, variables: BTreeSet<VariableId>, attributes: Attributes) {
        if variables.is_empty() {
            return;
        }
        self.subgraphs.push(Subgraph::new(variables, attributes));
    }

    /// Remove all subgraphs matching the given `predicate`. Returns the number of removed
    /// subgraphs.
    pub fn remove_if<F: FnMut(&Subgraph) -> bool>(&mut self, mut predicate: F) -> usize {
        let before = self.subgraphs.len();
        self.subgraphs.retain(|it| !predicate(it));
        before - self.subgraphs.len()
    }

    /// Find the (last added) subgraph with exactly the given variables.
    pub fn find(&self, variables: &BTreeSet<VariableId>) -> Option<&Subgraph> {
        self.subgraphs.iter().rev().find(|it| &it.variables == variables)
    }

    pub fn get(&self, index: usize) -> Option<&Subgraph> {
        self.subgraphs.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<Subgraph> {
        self.subgraphs.iter()
    }

    pub fn len(&self) -> usize {
        self.subgraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subgraphs.is_empty()
    }

    pub fn clear(&mut self) {
        self.subgraphs.clear();
    }

    /// Check that every pair of subgraphs is either disjoint or nested.
    pub fn is_laminar(&self) -> bool {
        self.find_conflict().is_none()
    }

    /// Find the indices of the first pair of subgraphs that are neither disjoint
    /// nor nested.
    pub fn find_conflict(&self) -> Option<(usize, usize)> {
        for (i, a) in self.subgraphs.iter().enumerate() {
            for (j, b) in self.subgraphs.iter().enumerate().skip(i + 1) {
                if !a.is_laminar_with(b) {
                    return Some((i, j));
                }
            }
        }
        None
    }

    /// Compute the nesting forest of a laminar registry: for every subgraph, the index of
    /// the smallest subgraph that contains it (or `None` for top-level subgraphs).
    ///
    /// Subgraphs with identical variables are nested in the order in which they were added
    /// (the older one is on the outside). The result is meaningless if the registry
    /// is not laminar.
    pub fn parents(&self) -> Vec<Option<usize>> {
        let mut result = Vec::with_capacity(self.subgraphs.len());
        for (i, child) in self.subgraphs.iter().enumerate() {
            let mut parent: Option<usize> = None;
            for (j, candidate) in self.subgraphs.iter().enumerate() {
                if i == j || !child.variables.is_subset(&candidate.variables) {
                    continue;
                }
                if candidate.variables == child.variables && j > i {
                    // Equal sets: only older subgraphs can wrap newer ones.
                    continue;
                }
                let is_better = match parent {
                    None => true,
                    Some(p) => {
                        let current = self.subgraphs[p].len();
                        candidate.len() < current || (candidate.len() == current && j > p)
                    }
                };
                if is_better {
                    parent = Some(j);
                }
            }
            result.push(parent);
        }
        result
    }
}
