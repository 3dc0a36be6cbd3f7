use crate::{InteractionGraph, SignSet, VariableId};
use std::collections::HashSet;

/// **(internal)** Basic utility methods for manipulating the `SdGraph`.
mod _impl_sd_graph;

/// **(internal)** Compute basic reachability properties within the `SdGraph`.
mod _reachability;

/// **(internal)** Perform a decomposition of the signed directed graph
/// into strongly connected components.
mod _strongly_connected_components;

/// An adjacency-list representation of the signed directed graph underlying
/// an `InteractionGraph`. It is used to implement the more demanding analysis
/// algorithms (reachability, SCC) in linear time.
#[derive(Clone, Debug)]
pub struct SdGraph {
    successors: Vec<Vec<(VariableId, SignSet)>>,
    predecessors: Vec<Vec<(VariableId, SignSet)>>,
}

/// Reachability queries on the underlying directed graph.
impl InteractionGraph {
    /// Compute all variables that transitively regulate the given `target` variable.
    pub fn transitive_regulators(&self, target: VariableId) -> HashSet<VariableId> {
        SdGraph::from(self).backward_reachable(HashSet::from([target]))
    }

    /// Compute all variables that are transitively regulated by the given `regulator` variable.
    pub fn transitive_targets(&self, regulator: VariableId) -> HashSet<VariableId> {
        SdGraph::from(self).forward_reachable(HashSet::from([regulator]))
    }
}
