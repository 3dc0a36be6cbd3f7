use crate::Monotonicity::{Activation, Inhibition};
use crate::{ClauseMap, IgraphError, InteractionGraph, SignSet, VariableId};
use fxhash::FxHashMap;
use std::collections::BTreeSet;

impl InteractionGraph {
    /// Build the interaction graph of a network given by the clauses of its update functions.
    ///
    /// For every clause of variable `name`, and every `(regulator, value)` literal of that
    /// clause, the graph contains an edge `regulator -> name` which is activating when
    /// `value = 1` and inhibiting when `value = 0`. Signs of the same edge are accumulated
    /// over all clauses. Regulators without their own update function are added as
    /// variables as well (they are typically constants).
    ///
    /// Returns `Err` if some clause uses a value other than `0` or `1`.
    pub fn try_from_clauses(clauses: &ClauseMap) -> Result<InteractionGraph, IgraphError> {
        let mut names: BTreeSet<&String> = clauses.keys().collect();
        for (target, target_clauses) in clauses {
            for clause in target_clauses {
                for (regulator, value) in clause {
                    if *value > 1 {
                        return Err(IgraphError::validation(format!(
                            "Clause of `{}` requires `{}` to be {}, but only 0 or 1 are allowed.",
                            target, regulator, value
                        )));
                    }
                    names.insert(regulator);
                }
            }
        }

        let mut graph = InteractionGraph::new(names.into_iter().cloned().collect())?;

        // Since variables are sorted, edges can be accumulated using ids directly.
        let mut edges: FxHashMap<(VariableId, VariableId), SignSet> = FxHashMap::default();
        for (target, target_clauses) in clauses {
            let target = graph.find_variable(target).unwrap();
            for clause in target_clauses {
                for (regulator, value) in clause {
                    let regulator = graph.find_variable(regulator).unwrap();
                    let sign = if *value == 1 { Activation } else { Inhibition };
                    edges
                        .entry((regulator, target))
                        .and_modify(|signs| signs.insert(sign))
                        .or_insert_with(|| SignSet::new(sign));
                }
            }
        }

        for ((regulator, target), signs) in edges {
            graph.add_raw_interaction(regulator, target, signs);
        }

        Ok(graph)
    }

    /// Build the interaction graph of a `.bnet` model with update functions written
    /// in disjunctive normal form. See `bnet::clauses_from_bnet` for details.
    pub fn try_from_bnet(model: &str) -> Result<InteractionGraph, IgraphError> {
        let clauses = crate::bnet::clauses_from_bnet(model)?;
        InteractionGraph::try_from_clauses(&clauses)
    }
}
