//! The condensation of an `InteractionGraph`: a directed acyclic graph of its strongly
//! connected components, where every component is assigned a *depth*.
//!
//! The depth of a component is the length of the longest path that ends in the component.
//! Components without regulators have depth zero.

use crate::_impl_interaction_graph::signed_directed_graph::SdGraph;
use crate::{InteractionGraph, VariableId};
use std::collections::{BTreeSet, VecDeque};

/// A type-safe index of a `Component` inside a `CondensationGraph`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ComponentId(usize);

/// One strongly connected component of an `InteractionGraph`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Component {
    variables: BTreeSet<VariableId>,
    depth: usize,
    non_trivial: bool,
}

/// A directed acyclic graph of the strongly connected components of an `InteractionGraph`.
///
/// Components are sorted by `(depth, smallest variable)`, so the ordering of components
/// is also a valid topological ordering of the graph.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CondensationGraph {
    components: Vec<Component>,
    component_of: Vec<ComponentId>,
    edges: BTreeSet<(ComponentId, ComponentId)>,
}

impl ComponentId {
    pub fn to_index(self) -> usize {
        self.0
    }
}

impl Component {
    /// The variables of this component.
    pub fn variables(&self) -> &BTreeSet<VariableId> {
        &self.variables
    }

    /// The length of the longest path in the condensation that ends in this component.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// A component is non-trivial if it has more than one variable, or its only variable
    /// regulates itself. Non-trivial components contain feedback loops.
    pub fn is_non_trivial(&self) -> bool {
        self.non_trivial
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl CondensationGraph {
    /// Compute the condensation of the given `InteractionGraph`.
    pub fn new(graph: &InteractionGraph) -> CondensationGraph {
        let sd_graph = SdGraph::from(graph);
        let raw_components = sd_graph.strongly_connected_components();

        let mut raw_component_of = vec![0; graph.num_vars()];
        for (i, component) in raw_components.iter().enumerate() {
            for var in component {
                raw_component_of[var.to_index()] = i;
            }
        }

        let mut raw_edges = BTreeSet::new();
        for interaction in graph.interactions() {
            let source = raw_component_of[interaction.regulator().to_index()];
            let target = raw_component_of[interaction.target().to_index()];
            if source != target {
                raw_edges.insert((source, target));
            }
        }

        let depth = longest_path_depth(raw_components.len(), &raw_edges);

        // Renumber components by (depth, smallest variable) to make the result independent
        // of the traversal order of the SCC algorithm.
        let mut order: Vec<usize> = (0..raw_components.len()).collect();
        order.sort_by_key(|i| (depth[*i], raw_components[*i].first().cloned()));
        let mut new_index = vec![ComponentId(0); raw_components.len()];
        for (new, old) in order.iter().enumerate() {
            new_index[*old] = ComponentId(new);
        }

        let components = order
            .iter()
            .map(|old| Component {
                variables: raw_components[*old].iter().cloned().collect(),
                depth: depth[*old],
                non_trivial: sd_graph.is_non_trivial(&raw_components[*old]),
            })
            .collect();

        CondensationGraph {
            components,
            component_of: raw_component_of.iter().map(|old| new_index[*old]).collect(),
            edges: raw_edges
                .into_iter()
                .map(|(s, t)| (new_index[s], new_index[t]))
                .collect(),
        }
    }

    pub fn num_components(&self) -> usize {
        self.components.len()
    }

    /// All components, sorted by `(depth, smallest variable)`.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Iterate over all component ids.
    pub fn component_ids(&self) -> impl Iterator<Item = ComponentId> {
        (0..self.components.len()).map(ComponentId)
    }

    pub fn component(&self, id: ComponentId) -> &Component {
        &self.components[id.0]
    }

    /// The component which contains the given variable.
    pub fn component_of(&self, variable: VariableId) -> ComponentId {
        self.component_of[variable.to_index()]
    }

    pub fn depth(&self, id: ComponentId) -> usize {
        self.components[id.0].depth
    }

    /// All edges between components, sorted.
    pub fn edges(&self) -> &BTreeSet<(ComponentId, ComponentId)> {
        &self.edges
    }

    pub fn successors(&self, id: ComponentId) -> Vec<ComponentId> {
        self.edges
            .range((id, ComponentId(0))..=(id, ComponentId(usize::MAX)))
            .map(|(_, t)| *t)
            .collect()
    }

    pub fn predecessors(&self, id: ComponentId) -> Vec<ComponentId> {
        self.edges
            .iter()
            .filter(|(_, t)| *t == id)
            .map(|(s, _)| *s)
            .collect()
    }

    /// Check that the condensation does not contain a cycle.
    ///
    /// This is guaranteed by construction; the method exists to allow independent
    /// verification.
    pub fn is_acyclic(&self) -> bool {
        let edges: BTreeSet<(usize, usize)> = self.edges.iter().map(|(s, t)| (s.0, t.0)).collect();
        topological_order(self.components.len(), &edges).is_some()
    }
}

/// **(internal)** Compute a topological order of a graph with `num_vertices` vertices
/// using Kahn's algorithm, or `None` if the graph has a cycle.
fn topological_order(num_vertices: usize, edges: &BTreeSet<(usize, usize)>) -> Option<Vec<usize>> {
    let mut in_degree = vec![0usize; num_vertices];
    let mut successors = vec![Vec::new(); num_vertices];
    for (s, t) in edges {
        in_degree[*t] += 1;
        successors[*s].push(*t);
    }
    let mut queue: VecDeque<usize> = (0..num_vertices).filter(|v| in_degree[*v] == 0).collect();
    let mut result = Vec::with_capacity(num_vertices);
    while let Some(v) = queue.pop_front() {
        result.push(v);
        for t in &successors[v] {
            in_degree[*t] -= 1;
            if in_degree[*t] == 0 {
                queue.push_back(*t);
            }
        }
    }
    if result.len() == num_vertices {
        Some(result)
    } else {
        None
    }
}

/// **(internal)** For every vertex of a DAG, compute the length of the longest path ending
/// in that vertex.
fn longest_path_depth(num_vertices: usize, edges: &BTreeSet<(usize, usize)>) -> Vec<usize> {
    let mut predecessors = vec![Vec::new(); num_vertices];
    for (s, t) in edges {
        predecessors[*t].push(*s);
    }
    let mut depth = vec![0; num_vertices];
    // Components from the SCC decomposition are always acyclic.
    let order = topological_order(num_vertices, edges).unwrap_or_default();
    for v in order {
        depth[v] = predecessors[v]
            .iter()
            .map(|p| depth[*p] + 1)
            .max()
            .unwrap_or(0);
    }
    depth
}

#[cfg(test)]
mod tests {
    use super::{longest_path_depth, ComponentId, CondensationGraph};
    use crate::_impl_interaction_graph::_impl_misc::tests::{
        arb_interaction_graph, build_test_interaction_graph,
    };
    use crate::{InteractionGraph, VariableId};
    use proptest::prelude::*;
    use std::collections::{BTreeSet, HashSet};

    #[test]
    fn test_condensation_of_test_graph() {
        let ig = build_test_interaction_graph();
        let cg = CondensationGraph::new(&ig);
        let var = |name: &str| ig.find_variable(name).unwrap();

        assert_eq!(5, cg.num_components());
        let depth_of = |name: &str| cg.depth(cg.component_of(var(name)));
        assert_eq!(0, depth_of("a"));
        assert_eq!(0, depth_of("b_1"));
        assert_eq!(0, depth_of("b_2"));
        assert_eq!(1, depth_of("c"));
        assert_eq!(2, depth_of("d_1"));
        assert_eq!(2, depth_of("e"));

        // Components are sorted by (depth, smallest variable).
        let expected: Vec<BTreeSet<VariableId>> = vec![
            BTreeSet::from([var("a")]),
            BTreeSet::from([var("b_1"), var("b_2")]),
            BTreeSet::from([var("c")]),
            BTreeSet::from([var("d_1"), var("d_2"), var("d_3")]),
            BTreeSet::from([var("e")]),
        ];
        let actual: Vec<BTreeSet<VariableId>> =
            cg.components().iter().map(|it| it.variables().clone()).collect();
        assert_eq!(expected, actual);

        let trivial: Vec<bool> = cg
            .components()
            .iter()
            .map(|it| it.is_non_trivial())
            .collect();
        assert_eq!(vec![false, true, false, true, true], trivial);

        let c = cg.component_of(var("c"));
        assert_eq!(vec![ComponentId(0), ComponentId(1)], cg.predecessors(c));
        assert_eq!(vec![ComponentId(3), ComponentId(4)], cg.successors(c));
        assert_eq!(4, cg.edges().len());
        assert!(cg.is_acyclic());
    }

    #[test]
    fn test_condensation_of_empty_graph() {
        let ig = InteractionGraph::new(Vec::new()).unwrap();
        let cg = CondensationGraph::new(&ig);
        assert_eq!(0, cg.num_components());
        assert!(cg.edges().is_empty());
        assert!(cg.is_acyclic());
    }

    #[test]
    fn test_depth_is_longest_path() {
        // 0 -> 1 -> 2 -> 3 and a shortcut 0 -> 3.
        let edges = BTreeSet::from([(0, 1), (1, 2), (2, 3), (0, 3), (4, 3)]);
        assert_eq!(vec![0, 1, 2, 3, 0], longest_path_depth(5, &edges));
    }

    proptest! {
        #[test]
        fn condensation_properties(ig in arb_interaction_graph()) {
            let cg = CondensationGraph::new(&ig);

            prop_assert!(cg.is_acyclic());

            // Components partition the variables.
            let mut seen = HashSet::new();
            for component in cg.components() {
                prop_assert!(!component.is_empty());
                for var in component.variables() {
                    prop_assert!(seen.insert(*var));
                }
            }
            prop_assert_eq!(seen.len(), ig.num_vars());

            // Co-membership is exactly mutual reachability.
            for x in ig.variables() {
                let fwd = ig.transitive_targets(x);
                let bwd = ig.transitive_regulators(x);
                for y in ig.variables() {
                    let same = cg.component_of(x) == cg.component_of(y);
                    prop_assert_eq!(same, fwd.contains(&y) && bwd.contains(&y));
                }
            }

            // Depth is monotone along edges and exact for every component.
            for (s, t) in cg.edges() {
                prop_assert!(cg.depth(*t) > cg.depth(*s));
            }
            for id in cg.component_ids() {
                let expected = cg
                    .predecessors(id)
                    .iter()
                    .map(|p| cg.depth(*p) + 1)
                    .max()
                    .unwrap_or(0);
                prop_assert_eq!(expected, cg.depth(id));
            }
        }
    }
}
