use crate::condensation::CondensationGraph;
use crate::style::AttributeKey::{
    ArrowHead, Color, FillColor, FontName, FontSize, Label, PenWidth, Shape, Style,
};
use crate::style::{Attributes, SubgraphRegistry};
use crate::Monotonicity::{Activation, Inhibition};
use crate::{Activities, IgraphError, InteractionGraph, VariableId};
use log::{debug, warn};
use std::collections::BTreeSet;

/// The default styling passes. Order matters, see `StylePipeline`.
impl InteractionGraph {
    /// Set the arrow head and color of every interaction to indicate its sign.
    ///
    /// Activating interactions are `normal`/`black`, inhibiting interactions are
    /// `tee`/`red`, and ambivalent interactions are `dot`/`dodgerblue`.
    pub fn add_style_interaction_signs(&mut self) {
        for interaction in self.interactions.values_mut() {
            let (arrow, color) = match interaction.signs.as_monotonicity() {
                Some(Activation) => ("normal", "black"),
                Some(Inhibition) => ("tee", "red"),
                None => ("dot", "dodgerblue"),
            };
            interaction.attributes.set(ArrowHead, arrow);
            interaction.attributes.set(Color, color);
        }
    }

    /// Add a filled subgraph for every strongly connected component (trivial ones included).
    ///
    /// Each subgraph is filled by a shade of gray that gets darker with the depth of
    /// the component in the condensation graph. Shades repeat after eight levels.
    pub fn add_style_sccs(&mut self) {
        let condensation = CondensationGraph::new(self);
        for component in condensation.components() {
            let shade = 2 + (component.depth() % 8);
            let attributes = Attributes::new()
                .with(Style, "filled")
                .with(FillColor, &format!("/greys9/{}", shade));
            self.subgraphs
                .add_or_replace(component.variables().clone(), attributes);
        }
    }

    /// Add a subgraph labelled "Inputs" which contains all input variables (see
    /// `InteractionGraph::is_input`).
    ///
    /// Single-variable subgraphs of the inputs (e.g. their trivial SCC subgraphs) are
    /// removed first.
    pub fn add_style_inputs(&mut self) {
        let inputs: BTreeSet<VariableId> = self.variables().filter(|v| self.is_input(*v)).collect();
        if inputs.is_empty() {
            return;
        }
        let removed = self
            .subgraphs
            .remove_if(|it| matches!(it.single_variable(), Some(v) if inputs.contains(&v)));
        debug!("Replaced {} single-variable subgraph(s) by the inputs subgraph.", removed);
        self.subgraphs
            .add_or_replace(inputs, section_attributes("Inputs"));
    }

    /// Add a subgraph labelled "Outputs" which contains all output variables (see
    /// `InteractionGraph::is_output`).
    ///
    /// The subgraph is appended, so an existing subgraph with the same variables (e.g. the
    /// SCC of a single output with a self-loop) is kept and the outputs subgraph is drawn
    /// inside it.
    ///
    /// A variable that is both an input and an output stays only in the inputs subgraph
    /// when one exists, otherwise the two subgraphs would overlap.
    pub fn add_style_outputs(&mut self) {
        let inputs = self.inputs_subgraph_variables();
        let outputs: BTreeSet<VariableId> = self
            .variables()
            .filter(|v| self.is_output(*v) && !inputs.contains(v))
            .collect();
        if outputs.is_empty() {
            return;
        }
        self.subgraphs
            .append(outputs, section_attributes("Outputs"));
    }

    /// Display constants (variables without regulators) as plain italic text and gray out
    /// their outgoing interactions.
    pub fn add_style_constants(&mut self) {
        for var in self.variables() {
            if !self.is_constant(var) {
                continue;
            }
            let attributes = &mut self.node_attributes[var.to_index()];
            attributes.set(Shape, "plaintext");
            attributes.set(FillColor, "none");
            attributes.set(FontName, "Times-Italic");
            for target in self.targets(var) {
                if let Some(interaction) = self.interactions.get_mut(&(var, target)) {
                    interaction.attributes.set(Color, "gray");
                }
            }
        }
    }

    /// Compute the condensation graph and attach it to this graph, so that it is displayed
    /// alongside the interaction graph.
    pub fn add_style_condensation(&mut self) {
        self.condensation = Some(CondensationGraph::new(self));
    }

    /// **(internal)** Variables of the subgraph created by `add_style_inputs`, if any.
    fn inputs_subgraph_variables(&self) -> BTreeSet<VariableId> {
        let label = section_label("Inputs");
        self.subgraphs
            .iter()
            .filter(|it| it.attributes().get(Label) == Some(label.as_str()))
            .flat_map(|it| it.variables().iter().cloned())
            .collect()
    }
}

/// Additional styles which depend on external input.
impl InteractionGraph {
    /// Color the variables fixed by the given `activities`: inactive variables are blue,
    /// active variables are red. Interactions involving fixed variables are grayed out, since
    /// they have no effect.
    ///
    /// Names which do not belong to this graph are ignored.
    pub fn add_style_activities(&mut self, activities: &Activities) {
        let mut fixed = BTreeSet::new();
        for (name, value) in activities.iter() {
            let Some(var) = self.find_variable(name) else {
                warn!("Ignoring activity of unknown variable `{}`.", name);
                continue;
            };
            let attributes = &mut self.node_attributes[var.to_index()];
            attributes.set(Color, "black");
            attributes.set(FillColor, if value { "/paired10/5" } else { "/paired10/1" });
            fixed.insert(var);
        }
        for ((regulator, target), interaction) in self.interactions.iter_mut() {
            if fixed.contains(regulator) || fixed.contains(target) {
                interaction.attributes.set(Color, "gray");
            }
        }
    }

    /// Set the color of all variables on the given `path` and of the interactions between
    /// consecutive variables to `color`. The interactions are also drawn thicker.
    ///
    /// Returns `Err` (without changing anything) if some variable does not exist, or two
    /// consecutive variables are not connected by an interaction.
    pub fn add_style_path<S: AsRef<str>>(
        &mut self,
        path: &[S],
        color: &str,
    ) -> Result<(), IgraphError> {
        let path = self.resolve_variables(path)?;
        for step in path.windows(2) {
            if self.find_interaction(step[0], step[1]).is_none() {
                return Err(IgraphError::validation(format!(
                    "Path step `{}` -> `{}` is not an interaction.",
                    self.get_variable_name(step[0]),
                    self.get_variable_name(step[1])
                )));
            }
        }
        for var in &path {
            self.node_attributes[var.to_index()].set(Color, color);
        }
        for step in path.windows(2) {
            if let Some(interaction) = self.interactions.get_mut(&(step[0], step[1])) {
                interaction.attributes.set(Color, color);
                interaction.attributes.set(PenWidth, "2");
            }
        }
        Ok(())
    }

    /// Add the given subgraphs, or overwrite existing subgraphs with the same variables.
    ///
    /// Each subgraph is a list of variable names with optional attributes (which extend
    /// the default `color=black`). Empty subgraphs are skipped.
    ///
    /// Returns `Err` (without changing anything) if a variable does not exist, or if the
    /// resulting family of subgraphs would not be laminar (GraphViz cannot draw
    /// intersecting clusters).
    pub fn add_style_subgraphs<S: AsRef<str>>(
        &mut self,
        subgraphs: &[(Vec<S>, Option<Attributes>)],
    ) -> Result<(), IgraphError> {
        let mut registry: SubgraphRegistry = self.subgraphs.clone();
        for (names, extra) in subgraphs {
            let variables: BTreeSet<VariableId> =
                self.resolve_variables(names.as_slice())?.into_iter().collect();
            let mut attributes = Attributes::new().with(Color, "black");
            if let Some(extra) = extra {
                attributes.extend(extra);
            }
            registry.add_or_replace(variables, attributes);
        }
        if let Some((i, j)) = registry.find_conflict() {
            let names = |index: usize| -> Vec<&str> {
                registry
                    .get(index)
                    .map(|it| it.variables().iter().map(|v| self.get_variable_name(*v)).collect())
                    .unwrap_or_default()
            };
            return Err(IgraphError::validation(format!(
                "Subgraphs {:?} and {:?} overlap, but neither contains the other.",
                names(i),
                names(j)
            )));
        }
        self.subgraphs = registry;
        Ok(())
    }
}

/// **(internal)** The bold HTML label of the inputs/outputs subgraph.
fn section_label(title: &str) -> String {
    format!("<<B>{}</B>>", title)
}

/// **(internal)** Attributes of the inputs/outputs subgraph.
fn section_attributes(title: &str) -> Attributes {
    Attributes::new()
        .with(Label, &section_label(title))
        .with(FontSize, "20")
}

#[cfg(test)]
mod tests {
    use crate::_impl_interaction_graph::_impl_misc::tests::build_test_interaction_graph;
    use crate::style::AttributeKey::{ArrowHead, Color, FillColor, FontName, Label, PenWidth, Shape};
    use crate::style::{AttributeKey, Attributes};
    use crate::Monotonicity::Activation;
    use crate::{Activities, Clause, ClauseMap, InteractionGraph, VariableId};
    use std::collections::BTreeSet;

    fn clause(literals: &[(&str, u8)]) -> Clause {
        literals.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    /// `v1 = v1`, `v2 = 1`, `v3 = v1 & !v2 | !v1 & v2`
    fn xor_graph() -> InteractionGraph {
        let mut clauses = ClauseMap::new();
        clauses.insert("v1".to_string(), vec![clause(&[("v1", 1)])]);
        clauses.insert("v2".to_string(), vec![clause(&[])]);
        clauses.insert(
            "v3".to_string(),
            vec![
                clause(&[("v1", 1), ("v2", 0)]),
                clause(&[("v1", 0), ("v2", 1)]),
            ],
        );
        InteractionGraph::try_from_clauses(&clauses).unwrap()
    }

    fn ids(ig: &InteractionGraph, names: &[&str]) -> BTreeSet<VariableId> {
        names.iter().map(|n| ig.find_variable(n).unwrap()).collect()
    }

    fn edge_attr(ig: &InteractionGraph, r: &str, t: &str, key: AttributeKey) -> Option<String> {
        let r = ig.find_variable(r).unwrap();
        let t = ig.find_variable(t).unwrap();
        ig.find_interaction(r, t)
            .unwrap()
            .attributes()
            .get(key)
            .map(|it| it.to_string())
    }

    fn node_attr(ig: &InteractionGraph, name: &str, key: AttributeKey) -> Option<String> {
        let v = ig.find_variable(name).unwrap();
        ig.node_attributes(v).get(key).map(|it| it.to_string())
    }

    #[test]
    fn style_interaction_signs() {
        let mut ig = xor_graph();
        ig.add_style_interaction_signs();
        assert_eq!(Some("normal".to_string()), edge_attr(&ig, "v1", "v1", ArrowHead));
        assert_eq!(Some("black".to_string()), edge_attr(&ig, "v1", "v1", Color));
        assert_eq!(Some("dot".to_string()), edge_attr(&ig, "v1", "v3", ArrowHead));
        assert_eq!(Some("dodgerblue".to_string()), edge_attr(&ig, "v2", "v3", Color));

        let mut ig = build_test_interaction_graph();
        ig.add_style_interaction_signs();
        assert_eq!(Some("tee".to_string()), edge_attr(&ig, "c", "e", ArrowHead));
        assert_eq!(Some("red".to_string()), edge_attr(&ig, "c", "e", Color));
    }

    #[test]
    fn style_constants() {
        let mut ig = xor_graph();
        ig.add_style_constants();
        assert_eq!(Some("plaintext".to_string()), node_attr(&ig, "v2", Shape));
        assert_eq!(Some("none".to_string()), node_attr(&ig, "v2", FillColor));
        assert_eq!(Some("Times-Italic".to_string()), node_attr(&ig, "v2", FontName));
        assert_eq!(Some("gray".to_string()), edge_attr(&ig, "v2", "v3", Color));
        assert_eq!(None, node_attr(&ig, "v1", Shape));
        assert_eq!(None, edge_attr(&ig, "v1", "v3", Color));
    }

    #[test]
    fn style_sccs_shades() {
        let mut ig = build_test_interaction_graph();
        ig.add_style_sccs();
        assert_eq!(5, ig.subgraphs().len());
        let shade = |names: &[&str]| {
            ig.subgraphs()
                .find(&ids(&ig, names))
                .unwrap()
                .attributes()
                .get(FillColor)
                .map(|it| it.to_string())
        };
        assert_eq!(Some("/greys9/2".to_string()), shade(&["a"]));
        assert_eq!(Some("/greys9/2".to_string()), shade(&["b_1", "b_2"]));
        assert_eq!(Some("/greys9/3".to_string()), shade(&["c"]));
        assert_eq!(Some("/greys9/4".to_string()), shade(&["d_1", "d_2", "d_3"]));

        // Running the pass again does not duplicate subgraphs.
        ig.add_style_sccs();
        assert_eq!(5, ig.subgraphs().len());
    }

    #[test]
    fn style_sccs_shades_cycle() {
        // A chain of ten variables has depths 0..=9, shades cycle after eight levels.
        let names: Vec<String> = (0..10).map(|i| format!("x{}", i)).collect();
        let mut ig = InteractionGraph::new(names.clone()).unwrap();
        for i in 0..9 {
            ig.add_interaction(&names[i], &names[i + 1], Activation).unwrap();
        }
        ig.add_style_sccs();
        let shade = |name: &str| {
            ig.subgraphs()
                .find(&ids(&ig, &[name]))
                .unwrap()
                .attributes()
                .get(FillColor)
                .map(|it| it.to_string())
        };
        assert_eq!(Some("/greys9/9".to_string()), shade("x7"));
        assert_eq!(Some("/greys9/2".to_string()), shade("x8"));
        assert_eq!(Some("/greys9/3".to_string()), shade("x9"));
    }

    #[test]
    fn style_inputs_replace_scc_subgraphs() {
        let mut ig = xor_graph();
        ig.add_style_sccs();
        assert_eq!(3, ig.subgraphs().len());
        ig.add_style_inputs();
        // {v1} was an SCC subgraph and is now the inputs subgraph.
        assert_eq!(3, ig.subgraphs().len());
        let inputs = ig.subgraphs().find(&ids(&ig, &["v1"])).unwrap();
        assert_eq!(Some("<<B>Inputs</B>>"), inputs.attributes().get(Label));
        assert!(ig.subgraphs().is_laminar());
    }

    #[test]
    fn style_inputs_and_outputs_sections() {
        // `i1` and `i2` are inputs, `o1` has no targets, `o2` only regulates itself,
        // `x` has a self-loop but also another regulator.
        let names: Vec<String> = ["i1", "i2", "o1", "o2", "x"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut ig = InteractionGraph::new(names).unwrap();
        ig.add_interaction("i1", "i1", Activation).unwrap();
        ig.add_interaction("i2", "i2", Activation).unwrap();
        ig.add_interaction("i1", "x", Activation).unwrap();
        ig.add_interaction("i2", "x", Activation).unwrap();
        ig.add_interaction("x", "x", Activation).unwrap();
        ig.add_interaction("x", "o1", Activation).unwrap();
        ig.add_interaction("x", "o2", Activation).unwrap();
        ig.add_interaction("o2", "o2", Activation).unwrap();

        ig.add_style_sccs();
        ig.add_style_inputs();
        ig.add_style_outputs();

        assert!(ig.subgraphs().find(&ids(&ig, &["i1"])).is_none());
        assert!(ig.subgraphs().find(&ids(&ig, &["i2"])).is_none());
        let inputs = ig.subgraphs().find(&ids(&ig, &["i1", "i2"])).unwrap();
        assert_eq!(Some("<<B>Inputs</B>>"), inputs.attributes().get(Label));
        let outputs = ig.subgraphs().find(&ids(&ig, &["o1", "o2"])).unwrap();
        assert_eq!(Some("<<B>Outputs</B>>"), outputs.attributes().get(Label));
        assert_eq!(Some("20"), outputs.attributes().get(AttributeKey::FontSize));
        // SCC subgraphs of outputs stay nested inside the outputs subgraph.
        assert!(ig.subgraphs().find(&ids(&ig, &["o2"])).is_some());
        assert!(ig.subgraphs().find(&ids(&ig, &["x"])).is_some());
        assert!(ig.subgraphs().is_laminar());
    }

    #[test]
    fn style_outputs_keep_non_trivial_scc_subgraph() {
        let mut ig = build_test_interaction_graph();
        ig.add_style_default();
        let e = ids(&ig, &["e"]);
        let indices: Vec<usize> = (0..ig.subgraphs().len())
            .filter(|i| ig.subgraphs().get(*i).unwrap().variables() == &e)
            .collect();
        assert_eq!(2, indices.len());

        // {e} has a self-loop, so its shaded SCC subgraph stays.
        let scc = ig.subgraphs().get(indices[0]).unwrap();
        assert_eq!(Some("/greys9/4"), scc.attributes().get(FillColor));
        let outputs = ig.subgraphs().get(indices[1]).unwrap();
        assert_eq!(Some("<<B>Outputs</B>>"), outputs.attributes().get(Label));
        assert_eq!(Some(indices[0]), ig.subgraphs().parents()[indices[1]]);
        assert!(ig.subgraphs().is_laminar());
    }

    #[test]
    fn style_isolated_input_is_not_an_output_subgraph() {
        // `s` is both an input and an output.
        let names: Vec<String> = ["s", "t"].iter().map(|s| s.to_string()).collect();
        let mut ig = InteractionGraph::new(names).unwrap();
        ig.add_interaction("s", "s", Activation).unwrap();
        let s = ig.find_variable("s").unwrap();
        assert!(ig.is_input(s) && ig.is_output(s));

        ig.add_style_default();
        let outputs = ig.subgraphs().find(&ids(&ig, &["t"])).unwrap();
        assert_eq!(Some("<<B>Outputs</B>>"), outputs.attributes().get(Label));
        assert!(ig.subgraphs().is_laminar());
    }

    #[test]
    fn style_activities() {
        let mut ig = xor_graph();
        let activities: Activities = vec![("v1", true), ("v2", false), ("unknown", true)]
            .into_iter()
            .collect();
        ig.add_style_activities(&activities);
        assert_eq!(Some("black".to_string()), node_attr(&ig, "v1", Color));
        assert_eq!(Some("/paired10/5".to_string()), node_attr(&ig, "v1", FillColor));
        assert_eq!(Some("/paired10/1".to_string()), node_attr(&ig, "v2", FillColor));
        assert_eq!(None, node_attr(&ig, "v3", FillColor));
        assert_eq!(Some("gray".to_string()), edge_attr(&ig, "v1", "v3", Color));
        assert_eq!(Some("gray".to_string()), edge_attr(&ig, "v2", "v3", Color));
        assert_eq!(Some("gray".to_string()), edge_attr(&ig, "v1", "v1", Color));
    }

    #[test]
    fn style_activities_only_touching_edges() {
        let mut ig = build_test_interaction_graph();
        let activities: Activities = vec![("e", true)].into_iter().collect();
        ig.add_style_activities(&activities);
        assert_eq!(Some("gray".to_string()), edge_attr(&ig, "c", "e", Color));
        assert_eq!(Some("gray".to_string()), edge_attr(&ig, "e", "e", Color));
        assert_eq!(None, edge_attr(&ig, "a", "c", Color));
    }

    #[test]
    fn style_path() {
        let mut ig = build_test_interaction_graph();
        ig.add_style_path(&["b_2", "c", "e"], "orange").unwrap();
        for name in ["b_2", "c", "e"] {
            assert_eq!(Some("orange".to_string()), node_attr(&ig, name, Color));
        }
        assert_eq!(None, node_attr(&ig, "a", Color));
        assert_eq!(Some("orange".to_string()), edge_attr(&ig, "b_2", "c", Color));
        assert_eq!(Some("2".to_string()), edge_attr(&ig, "b_2", "c", PenWidth));
        assert_eq!(Some("orange".to_string()), edge_attr(&ig, "c", "e", Color));
        assert_eq!(None, edge_attr(&ig, "a", "c", PenWidth));
    }

    #[test]
    fn style_path_edge_cases() {
        let mut ig = build_test_interaction_graph();
        let reference = build_test_interaction_graph();

        let empty: [&str; 0] = [];
        ig.add_style_path(&empty, "red").unwrap();
        for v in ig.variables() {
            assert_eq!(reference.node_attributes(v), ig.node_attributes(v));
        }

        ig.add_style_path(&["a"], "red").unwrap();
        assert_eq!(Some("red".to_string()), node_attr(&ig, "a", Color));

        let err = ig.add_style_path(&["c", "unknown"], "red").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(None, node_attr(&ig, "c", Color));

        // `c -> a` is not an interaction.
        let err = ig.add_style_path(&["c", "a"], "red").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(None, node_attr(&ig, "c", Color));
    }

    #[test]
    fn style_custom_subgraphs() {
        let mut ig = build_test_interaction_graph();
        ig.add_style_sccs();
        let genes = Attributes::new().with(Label, "Genes");
        ig.add_style_subgraphs(&[
            (vec!["b_1", "b_2"], Some(genes)),
            (vec!["a", "b_1", "b_2"], None),
            (vec![], None),
        ])
        .unwrap();

        // The SCC subgraph {b_1, b_2} was overwritten.
        assert_eq!(6, ig.subgraphs().len());
        let b = ig.subgraphs().find(&ids(&ig, &["b_1", "b_2"])).unwrap();
        assert_eq!(Some("Genes"), b.attributes().get(Label));
        assert_eq!(Some("black"), b.attributes().get(Color));
        assert_eq!(None, b.attributes().get(FillColor));
        assert!(ig.subgraphs().is_laminar());
    }

    #[test]
    fn style_custom_subgraphs_validation() {
        let mut ig = build_test_interaction_graph();
        ig.add_style_sccs();
        let before = ig.subgraphs().clone();

        let err = ig
            .add_style_subgraphs(&[(vec!["a", "missing"], None)])
            .unwrap_err();
        assert!(err.is_validation());

        // {b_2, c} intersects {b_1, b_2} without nesting.
        let err = ig
            .add_style_subgraphs(&[(vec!["a", "c"], None), (vec!["b_2", "c"], None)])
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(&before, ig.subgraphs());
    }

    #[test]
    fn style_condensation_attachment() {
        let mut ig = build_test_interaction_graph();
        assert!(ig.condensation().is_none());
        ig.add_style_condensation();
        assert_eq!(5, ig.condensation().unwrap().num_components());
        assert!(ig.subgraphs().is_empty());
    }
}
