use crate::_impl_interaction_graph::signed_directed_graph::SdGraph;
use crate::{InteractionGraph, SignSet, VariableId};
use std::collections::HashSet;

impl SdGraph {
    pub fn mk_all_vertices(&self) -> HashSet<VariableId> {
        let var_count = self.successors.len();
        (0..var_count).map(VariableId::from_index).collect()
    }

    pub fn num_vertices(&self) -> usize {
        self.successors.len()
    }

    pub fn successors(&self, vertex: VariableId) -> &[(VariableId, SignSet)] {
        &self.successors[vertex.to_index()]
    }

    pub fn predecessors(&self, vertex: VariableId) -> &[(VariableId, SignSet)] {
        &self.predecessors[vertex.to_index()]
    }
}

impl From<&InteractionGraph> for SdGraph {
    fn from(ig: &InteractionGraph) -> Self {
        let mut successors = vec![Vec::new(); ig.num_vars()];
        let mut predecessors = vec![Vec::new(); ig.num_vars()];
        // Interactions are sorted, so the adjacency lists are sorted as well.
        for interaction in ig.interactions() {
            let (regulator, target) = (interaction.regulator(), interaction.target());
            successors[regulator.to_index()].push((target, interaction.signs()));
            predecessors[target.to_index()].push((regulator, interaction.signs()));
        }
        SdGraph {
            successors,
            predecessors,
        }
    }
}
