use crate::style::_impl_attributes::{dot_id, dot_value};
use crate::style::{Attributes, Subgraph};
use crate::InteractionGraph;
use std::io::Write;

impl InteractionGraph {
    /// Export this interaction graph (including all styles) to the GraphViz `.dot` format.
    pub fn to_dot(&self) -> String {
        let mut buffer: Vec<u8> = Vec::new();
        self.write_as_dot(&mut buffer)
            .expect("I/O error converting `InteractionGraph` to `.dot`.");
        String::from_utf8(buffer).expect("Invalid UTF formatting in .dot string.")
    }

    /// Write the `.dot` representation of this graph into the given `output`.
    ///
    /// Subgraphs are written as nested `cluster` blocks according to their inclusion.
    /// If a condensation graph is attached, it is written as a separate cluster as well.
    pub fn write_as_dot(&self, output: &mut dyn Write) -> Result<(), std::io::Error> {
        writeln!(output, "digraph \"Interaction Graph\" {{")?;
        for (name, value) in self.graph_attributes.iter() {
            writeln!(output, "{}={};", name, dot_value(value))?;
        }
        if !self.node_defaults.is_empty() {
            writeln!(output, "node [{}];", self.node_defaults)?;
        }
        for var in self.variables() {
            let node = dot_id(self.get_variable_name(var));
            write_statement(output, 0, &node, self.node_attributes(var))?;
        }
        for interaction in self.interactions() {
            let edge = format!(
                "{} -> {}",
                dot_id(self.get_variable_name(interaction.regulator())),
                dot_id(self.get_variable_name(interaction.target()))
            );
            write_statement(output, 0, &edge, interaction.attributes())?;
        }

        let parents = self.subgraphs.parents();
        for (i, parent) in parents.iter().enumerate() {
            if parent.is_none() {
                self.write_subgraph(output, &parents, i, 1)?;
            }
        }

        if self.condensation.is_some() {
            self.write_condensation(output)?;
        }

        writeln!(output, "}}")?;
        Ok(())
    }

    /// **(internal)** Write the subgraph at `index` together with all nested subgraphs.
    fn write_subgraph(
        &self,
        output: &mut dyn Write,
        parents: &[Option<usize>],
        index: usize,
        depth: usize,
    ) -> Result<(), std::io::Error> {
        let indent = "  ".repeat(depth);
        let subgraph: &Subgraph = match self.subgraphs.get(index) {
            Some(subgraph) => subgraph,
            None => return Ok(()),
        };
        writeln!(output, "{}subgraph cluster_{} {{", indent, index)?;
        for (name, value) in subgraph.attributes().iter() {
            writeln!(output, "{}  {}={};", indent, name, dot_value(value))?;
        }
        for var in subgraph.variables() {
            writeln!(output, "{}  {};", indent, dot_id(self.get_variable_name(*var)))?;
        }
        for (child, parent) in parents.iter().enumerate() {
            if *parent == Some(index) {
                self.write_subgraph(output, parents, child, depth + 1)?;
            }
        }
        writeln!(output, "{}}}", indent)?;
        Ok(())
    }

    /// **(internal)** Write the attached condensation graph as a separate cluster.
    ///
    /// Each component is labelled by its variable if it is a singleton, and by its size
    /// otherwise.
    fn write_condensation(&self, output: &mut dyn Write) -> Result<(), std::io::Error> {
        let condensation = match &self.condensation {
            Some(condensation) => condensation,
            None => return Ok(()),
        };
        let node_id = |i: usize| dot_id(&format!("#scc{}", i));
        writeln!(output, "  subgraph cluster_condensation {{")?;
        writeln!(output, "    label=\"Condensation Graph\";")?;
        for id in condensation.component_ids() {
            let component = condensation.component(id);
            let label = match component.variables().iter().next() {
                Some(var) if component.len() == 1 => self.get_variable_name(*var).to_string(),
                _ => component.len().to_string(),
            };
            writeln!(output, "    {} [label={}];", node_id(id.to_index()), dot_id(&label))?;
        }
        for (source, target) in condensation.edges() {
            writeln!(
                output,
                "    {} -> {};",
                node_id(source.to_index()),
                node_id(target.to_index())
            )?;
        }
        writeln!(output, "  }}")?;
        Ok(())
    }
}

/// **(internal)** Write a node or edge statement with an optional attribute list.
fn write_statement(
    output: &mut dyn Write,
    depth: usize,
    statement: &str,
    attributes: &Attributes,
) -> Result<(), std::io::Error> {
    let indent = "  ".repeat(depth);
    if attributes.is_empty() {
        writeln!(output, "{}{};", indent, statement)
    } else {
        writeln!(output, "{}{} [{}];", indent, statement, attributes)
    }
}

#[cfg(test)]
mod tests {
    use crate::_impl_interaction_graph::_impl_misc::tests::build_test_interaction_graph;
    use crate::style::{AttributeKey, Attributes};
    use crate::{InteractionGraph, VariableId};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    #[test]
    pub fn test_interaction_graph_to_dot() {
        let mut ig =
            InteractionGraph::try_from_bnet("v1, v1\nv2, 1\nv3, v1&!v2 | !v1&v2").unwrap();
        ig.add_style_interaction_signs();
        ig.graph_attributes_mut().set(AttributeKey::Label, "1 of 2");

        let expected = r#"digraph "Interaction Graph" {
label="1 of 2";
node [color="none", fillcolor="gray95", shape="rect", style="filled"];
"v1";
"v2";
"v3";
"v1" -> "v1" [arrowhead="normal", color="black"];
"v1" -> "v3" [arrowhead="dot", color="dodgerblue"];
"v2" -> "v3" [arrowhead="dot", color="dodgerblue"];
}
"#;
        assert_eq!(expected, ig.to_dot());
    }

    #[test]
    pub fn test_nested_subgraphs_to_dot() {
        let mut ig = build_test_interaction_graph();
        ig.node_defaults_mut().remove(AttributeKey::Color);
        let ids = |names: &[&str]| -> BTreeSet<VariableId> {
            names.iter().map(|n| ig.find_variable(n).unwrap()).collect()
        };
        let (inner, outer, other) = (ids(&["d_1"]), ids(&["d_1", "d_2", "d_3"]), ids(&["a"]));
        ig.subgraphs_mut()
            .append(inner, Attributes::new().with(AttributeKey::Label, "inner"));
        ig.subgraphs_mut().append(outer, Attributes::new());
        ig.subgraphs_mut().append(other, Attributes::new());

        let dot = ig.to_dot();
        let expected_clusters = r#"  subgraph cluster_1 {
    "d_1";
    "d_2";
    "d_3";
    subgraph cluster_0 {
      label="inner";
      "d_1";
    }
  }
  subgraph cluster_2 {
    "a";
  }
}
"#;
        assert!(dot.ends_with(expected_clusters), "{}", dot);
        assert!(dot.contains("node [fillcolor=\"gray95\", shape=\"rect\", style=\"filled\"];"));
    }

    #[test]
    pub fn test_condensation_to_dot() {
        let mut ig = InteractionGraph::try_from_bnet("x, y\ny, x\nz, x").unwrap();
        ig.add_style_condensation();
        let dot = ig.to_dot();
        let expected = r##"  subgraph cluster_condensation {
    label="Condensation Graph";
    "#scc0" [label="2"];
    "#scc1" [label="z"];
    "#scc0" -> "#scc1";
  }
}
"##;
        assert!(dot.ends_with(expected), "{}", dot);
    }

    #[test]
    pub fn test_default_style_to_dot() {
        let mut ig = build_test_interaction_graph();
        ig.add_style_default();
        let dot = ig.to_dot();
        assert!(dot.starts_with("digraph \"Interaction Graph\" {\n"));
        assert!(dot.contains("label=<<B>Outputs</B>>;"));
        let constant = r#""a" [fillcolor="none", fontname="Times-Italic", shape="plaintext"];"#;
        assert!(dot.contains(constant));
        assert!(dot.contains("\"a\" -> \"c\" [arrowhead=\"normal\", color=\"gray\"];"));
        assert!(dot.contains("fillcolor=\"/greys9/4\";"));
        assert_eq!(dot.matches("subgraph cluster_").count(), 7);
        // The outputs subgraph {e} is nested in the SCC subgraph {e}.
        let nested = r#"  subgraph cluster_4 {
    fillcolor="/greys9/4";
    style="filled";
    "e";
    subgraph cluster_5 {
      fontsize="20";
      label=<<B>Outputs</B>>;
      "e";
    }
  }
"#;
        assert!(dot.contains(nested), "{}", dot);
    }

    #[test]
    pub fn test_empty_graph_to_dot() {
        let ig = InteractionGraph::new(Vec::new()).unwrap();
        assert!(ig.to_dot().ends_with("}\n"));
    }
}
