use crate::style::{StylePass, StylePipeline};
use crate::{IgraphError, InteractionGraph};
use log::debug;
use std::fmt::{Display, Formatter};

impl StylePass {
    /// The only valid relative order of the default styling passes.
    ///
    /// Subgraphs of strongly connected components must exist before the inputs pass runs,
    /// since the inputs pass retracts the single-variable subgraphs of the inputs. Running
    /// the passes in a different order can produce overlapping subgraphs.
    pub const DEFAULT_ORDER: [StylePass; 6] = [
        StylePass::InteractionSigns,
        StylePass::StronglyConnectedComponents,
        StylePass::Inputs,
        StylePass::Outputs,
        StylePass::Constants,
        StylePass::Condensation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StylePass::InteractionSigns => "interaction-signs",
            StylePass::StronglyConnectedComponents => "sccs",
            StylePass::Inputs => "inputs",
            StylePass::Outputs => "outputs",
            StylePass::Constants => "constants",
            StylePass::Condensation => "condensation",
        }
    }

    /// Run this pass on the given `graph`.
    pub fn apply(&self, graph: &mut InteractionGraph) {
        match self {
            StylePass::InteractionSigns => graph.add_style_interaction_signs(),
            StylePass::StronglyConnectedComponents => graph.add_style_sccs(),
            StylePass::Inputs => graph.add_style_inputs(),
            StylePass::Outputs => graph.add_style_outputs(),
            StylePass::Constants => graph.add_style_constants(),
            StylePass::Condensation => graph.add_style_condensation(),
        }
    }
}

impl Display for StylePass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Default for StylePipeline {
    fn default() -> Self {
        StylePipeline {
            stages: StylePass::DEFAULT_ORDER.to_vec(),
        }
    }
}

impl StylePipeline {
    /// A pipeline with all six default passes.
    pub fn new() -> StylePipeline {
        StylePipeline::default()
    }

    /// A pipeline with a subset of the default passes.
    ///
    /// Returns `Err` if the stages are repeated or do not follow `StylePass::DEFAULT_ORDER`.
    pub fn try_from_stages(stages: Vec<StylePass>) -> Result<StylePipeline, IgraphError> {
        // `StylePass` is ordered by `DEFAULT_ORDER`.
        if let Some(pair) = stages.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(IgraphError::validation(format!(
                "Style pass `{}` cannot run after `{}`.",
                pair[1], pair[0]
            )));
        }
        Ok(StylePipeline { stages })
    }

    pub fn stages(&self) -> &[StylePass] {
        &self.stages
    }

    /// Apply all stages to the given `graph`.
    pub fn run(&self, graph: &mut InteractionGraph) {
        self.run_with(graph, |_, _| {});
    }

    /// Apply all stages to the given `graph`, calling `after_stage` once every stage
    /// is finished.
    pub fn run_with<F>(&self, graph: &mut InteractionGraph, mut after_stage: F)
    where
        F: FnMut(StylePass, &InteractionGraph),
    {
        for stage in &self.stages {
            debug!("Running style pass `{}`.", stage);
            stage.apply(graph);
            after_stage(*stage, graph);
        }
    }
}

impl InteractionGraph {
    /// Apply the default styles: interaction signs, SCCs, inputs, outputs, constants
    /// and the condensation graph.
    pub fn add_style_default(&mut self) {
        StylePipeline::new().run(self);
    }
}
