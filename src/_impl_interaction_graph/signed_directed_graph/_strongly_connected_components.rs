use crate::_impl_interaction_graph::signed_directed_graph::SdGraph;
use crate::VariableId;
use std::cmp::min;

const UNVISITED: usize = usize::MAX;

impl SdGraph {
    /// Find all strongly connected components of this `SdGraph`, including the trivial ones.
    ///
    /// The components are returned in *reverse topological order* (a component is always
    /// listed before all of its regulators) and each component is sorted.
    pub fn strongly_connected_components(&self) -> Vec<Vec<VariableId>> {
        tarjan(self)
    }

    /// Check if a strongly connected component is non-trivial, i.e. it has more than one
    /// vertex or a self-loop.
    ///
    /// Note that this does not verify that the set is an actual SCC.
    pub fn is_non_trivial(&self, component: &[VariableId]) -> bool {
        match component {
            [single] => self.successors[single.to_index()]
                .iter()
                .any(|(x, _)| x == single),
            _ => component.len() > 1,
        }
    }
}

/// **(internal)** An iterative version of Tarjan's algorithm.
///
/// The explicit call stack holds `(vertex, index of the next successor to explore)`, so that
/// deep graphs cannot overflow the native stack.
fn tarjan(graph: &SdGraph) -> Vec<Vec<VariableId>> {
    let num_vertices = graph.num_vertices();
    let mut index = vec![UNVISITED; num_vertices];
    let mut low_link = vec![0; num_vertices];
    let mut on_stack = vec![false; num_vertices];
    let mut stack: Vec<usize> = Vec::new();
    let mut call_stack: Vec<(usize, usize)> = Vec::new();
    let mut next_index = 0;
    let mut results = Vec::new();

    for root in 0..num_vertices {
        if index[root] != UNVISITED {
            continue;
        }
        index[root] = next_index;
        low_link[root] = next_index;
        next_index += 1;
        stack.push(root);
        on_stack[root] = true;
        call_stack.push((root, 0));

        while let Some(frame) = call_stack.last_mut() {
            let v = frame.0;
            if let Some((w, _)) = graph.successors[v].get(frame.1) {
                frame.1 += 1;
                let w = w.to_index();
                if index[w] == UNVISITED {
                    index[w] = next_index;
                    low_link[w] = next_index;
                    next_index += 1;
                    stack.push(w);
                    on_stack[w] = true;
                    call_stack.push((w, 0));
                } else if on_stack[w] {
                    low_link[v] = min(low_link[v], index[w]);
                }
            } else {
                call_stack.pop();
                if let Some((parent, _)) = call_stack.last() {
                    low_link[*parent] = min(low_link[*parent], low_link[v]);
                }
                if low_link[v] == index[v] {
                    let mut component = Vec::new();
                    while let Some(w) = stack.pop() {
                        on_stack[w] = false;
                        component.push(VariableId::from_index(w));
                        if w == v {
                            break;
                        }
                    }
                    component.sort();
                    results.push(component);
                }
            }
        }
    }

    results
}
