use crate::_impl_interaction_graph::signed_directed_graph::SdGraph;
use crate::{SignSet, VariableId};
use std::collections::HashSet;

impl SdGraph {
    /// Return the set of vertices forward-reachable from the `initial` set.
    pub fn forward_reachable(&self, initial: HashSet<VariableId>) -> HashSet<VariableId> {
        reachability(&self.successors, initial)
    }

    /// Return the set of vertices backward-reachable from the `initial` set.
    pub fn backward_reachable(&self, initial: HashSet<VariableId>) -> HashSet<VariableId> {
        reachability(&self.predecessors, initial)
    }
}

/// **(internal)** A shared utility method that implements either forward or backward reachability
/// depending on the supplied set of `SdGraph` edges.
fn reachability(
    edges: &[Vec<(VariableId, SignSet)>],
    initial: HashSet<VariableId>,
) -> HashSet<VariableId> {
    let mut result = initial;
    let mut frontier: Vec<VariableId> = result.iter().cloned().collect();
    while let Some(x) = frontier.pop() {
        for (step, _) in &edges[x.to_index()] {
            if result.insert(*step) {
                frontier.push(*step);
            }
        }
    }
    result
}
