use crate::condensation::CondensationGraph;
use crate::style::{AttributeKey, Attributes, SubgraphRegistry};
use crate::{
    IgraphError, Interaction, InteractionGraph, InteractionIterator, Monotonicity, SignSet,
    VariableId, VariableIdIterator, ID_REGEX,
};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Methods for safely constructing new instances of `InteractionGraph`s.
impl InteractionGraph {
    /// Create a new `InteractionGraph` with the given variables and no interactions.
    ///
    /// The variables are sorted by name. Returns `Err` if the names contain duplicates.
    pub fn new(mut variables: Vec<String>) -> Result<InteractionGraph, IgraphError> {
        variables.sort();
        if let Some(pair) = variables.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(IgraphError::validation(format!(
                "Variable `{}` is declared more than once.",
                pair[0]
            )));
        }
        let node_defaults = Attributes::new()
            .with(AttributeKey::Style, "filled")
            .with(AttributeKey::Shape, "rect")
            .with(AttributeKey::Color, "none")
            .with(AttributeKey::FillColor, "gray95");
        Ok(InteractionGraph {
            variable_to_index: variables
                .iter()
                .enumerate()
                .map(|(i, name)| (name.clone(), VariableId(i)))
                .collect(),
            node_attributes: vec![Attributes::new(); variables.len()],
            variables,
            interactions: BTreeMap::new(),
            regulator_index: BTreeSet::new(),
            graph_attributes: Attributes::new(),
            node_defaults,
            subgraphs: SubgraphRegistry::new(),
            condensation: None,
        })
    }

    /// Add a `Monotonicity` to the interaction `regulator -> target`, creating the
    /// interaction if it does not exist yet.
    ///
    /// Returns `Err` if `regulator` or `target` are not valid graph variables.
    pub fn add_interaction(
        &mut self,
        regulator: &str,
        target: &str,
        sign: Monotonicity,
    ) -> Result<(), IgraphError> {
        let regulator = self.get_regulator(regulator)?;
        let target = self.get_target(target)?;
        self.add_raw_interaction(regulator, target, SignSet::new(sign));
        Ok(())
    }

    /// **(internal)** Merge `signs` into the interaction between two existing variables.
    pub(crate) fn add_raw_interaction(
        &mut self,
        regulator: VariableId,
        target: VariableId,
        signs: SignSet,
    ) {
        self.regulator_index.insert((target, regulator));
        let interaction = self
            .interactions
            .entry((regulator, target))
            .or_insert_with(|| Interaction {
                regulator,
                target,
                signs,
                attributes: Attributes::new(),
            });
        for sign in signs.iter() {
            interaction.signs.insert(sign);
        }
    }

    /// **(internal)** Safely obtain a regulator variable (with an appropriate error message).
    fn get_regulator(&self, name: &str) -> Result<VariableId, IgraphError> {
        self.find_variable(name).ok_or_else(|| {
            IgraphError::validation(format!("Invalid interaction: Unknown regulator {}.", name))
        })
    }

    /// **(internal)** Safely obtain a target variable (with an appropriate error message).
    fn get_target(&self, name: &str) -> Result<VariableId, IgraphError> {
        self.find_variable(name).ok_or_else(|| {
            IgraphError::validation(format!("Invalid interaction: Unknown target {}.", name))
        })
    }

    /// **(internal)** Resolve a list of names into variable ids, failing on the first
    /// unknown name.
    pub(crate) fn resolve_variables<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<Vec<VariableId>, IgraphError> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.find_variable(name).ok_or_else(|| {
                    IgraphError::validation(format!("Unknown variable `{}`.", name))
                })
            })
            .collect()
    }

    /// Copy the variable names from this graph into a separate vector (sorted).
    pub fn variable_names(&self) -> Vec<String> {
        self.variables.clone()
    }

    /// A static check that allows to verify validity of a variable name.
    pub fn is_valid_name(name: &str) -> bool {
        ID_REGEX.is_match(name)
    }
}

/// Some basic utility methods for inspecting the `InteractionGraph`.
impl InteractionGraph {
    /// The number of variables in this `InteractionGraph`.
    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    /// The number of interactions (edges) in this `InteractionGraph`.
    pub fn num_interactions(&self) -> usize {
        self.interactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Find a `VariableId` for the given name, or `None` if the variable does not exist.
    pub fn find_variable(&self, name: &str) -> Option<VariableId> {
        self.variable_to_index.get(name).cloned()
    }

    /// Return the name of the given variable.
    pub fn get_variable_name(&self, id: VariableId) -> &str {
        &self.variables[id.0]
    }

    /// Return an iterator over all variable ids of this graph.
    pub fn variables(&self) -> VariableIdIterator {
        (0..self.variables.len()).map(VariableId)
    }

    /// Return an iterator over all interactions of this graph, sorted by `(regulator, target)`.
    pub fn interactions(&self) -> InteractionIterator {
        self.interactions.values()
    }

    /// Find an `Interaction` between two variables if it exists, `None` otherwise.
    pub fn find_interaction(
        &self,
        regulator: VariableId,
        target: VariableId,
    ) -> Option<&Interaction> {
        self.interactions.get(&(regulator, target))
    }

    /// Mutable version of `InteractionGraph::find_interaction`.
    pub fn find_interaction_mut(
        &mut self,
        regulator: VariableId,
        target: VariableId,
    ) -> Option<&mut Interaction> {
        self.interactions.get_mut(&(regulator, target))
    }

    /// Return a sorted list of variables that regulate the given `target` variable.
    pub fn regulators(&self, target: VariableId) -> Vec<VariableId> {
        self.regulator_index
            .range((target, VariableId(0))..=(target, VariableId(usize::MAX)))
            .map(|(_, r)| *r)
            .collect()
    }

    /// Return a sorted list of variables that are regulated by the given `regulator` variable.
    pub fn targets(&self, regulator: VariableId) -> Vec<VariableId> {
        self.interactions
            .range((regulator, VariableId(0))..=(regulator, VariableId(usize::MAX)))
            .map(|((_, t), _)| *t)
            .collect()
    }

    pub fn in_degree(&self, variable: VariableId) -> usize {
        self.regulator_index
            .range((variable, VariableId(0))..=(variable, VariableId(usize::MAX)))
            .count()
    }

    pub fn out_degree(&self, variable: VariableId) -> usize {
        self.targets(variable).len()
    }

    /// A variable is an *input* if its only regulator is the variable itself.
    ///
    /// Note that a variable with a self-loop and some other regulator is not an input.
    pub fn is_input(&self, variable: VariableId) -> bool {
        self.regulators(variable) == vec![variable]
    }

    /// A variable is an *output* if it has no targets, or its only target is the variable itself.
    pub fn is_output(&self, variable: VariableId) -> bool {
        let targets = self.targets(variable);
        targets.is_empty() || targets == vec![variable]
    }

    /// A variable is a *constant* if it has no regulators.
    pub fn is_constant(&self, variable: VariableId) -> bool {
        self.in_degree(variable) == 0
    }

    /// Compute all *non-trivial* strongly connected components of this graph (components
    /// with more than one variable, or with a self-loop).
    ///
    /// The result is sorted by component size.
    pub fn strongly_connected_components(&self) -> Vec<HashSet<VariableId>> {
        let mut components: Vec<HashSet<VariableId>> = self
            .condensation_graph()
            .components()
            .iter()
            .filter(|it| it.is_non_trivial())
            .map(|it| it.variables().iter().cloned().collect())
            .collect();
        components.sort_by_key(|it| it.len());
        components
    }

    /// Compute a fresh `CondensationGraph` of this graph.
    ///
    /// Unlike `InteractionGraph::condensation`, this does not use or modify the attached
    /// condensation.
    pub fn condensation_graph(&self) -> CondensationGraph {
        CondensationGraph::new(self)
    }
}

/// Access to the visual attributes of the graph.
impl InteractionGraph {
    /// Attributes of the whole graph (e.g. its `label`).
    pub fn graph_attributes(&self) -> &Attributes {
        &self.graph_attributes
    }

    pub fn graph_attributes_mut(&mut self) -> &mut Attributes {
        &mut self.graph_attributes
    }

    /// Attributes shared by all nodes, unless overridden by node attributes.
    pub fn node_defaults(&self) -> &Attributes {
        &self.node_defaults
    }

    pub fn node_defaults_mut(&mut self) -> &mut Attributes {
        &mut self.node_defaults
    }

    pub fn node_attributes(&self, variable: VariableId) -> &Attributes {
        &self.node_attributes[variable.0]
    }

    pub fn node_attributes_mut(&mut self, variable: VariableId) -> &mut Attributes {
        &mut self.node_attributes[variable.0]
    }

    pub fn subgraphs(&self) -> &SubgraphRegistry {
        &self.subgraphs
    }

    pub fn subgraphs_mut(&mut self) -> &mut SubgraphRegistry {
        &mut self.subgraphs
    }

    /// The condensation graph attached by `InteractionGraph::add_style_condensation`.
    pub fn condensation(&self) -> Option<&CondensationGraph> {
        self.condensation.as_ref()
    }
}

impl Interaction {
    pub fn regulator(&self) -> VariableId {
        self.regulator
    }

    pub fn target(&self) -> VariableId {
        self.target
    }

    pub fn signs(&self) -> SignSet {
        self.signs
    }

    pub fn is_self_loop(&self) -> bool {
        self.regulator == self.target
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}
