//! Visual attributes of an `InteractionGraph` and the styling passes that compute them.
//!
//! Every styling pass is a method of `InteractionGraph` (see `add_style_*`). The six
//! *default* passes must run in a fixed order to keep the family of subgraphs laminar
//! (any two subgraphs are disjoint, or one contains the other). `StylePipeline` makes
//! this order explicit.

use crate::VariableId;
use std::collections::{BTreeMap, BTreeSet};

/// **(internal)** Utility methods for `Attributes` and `AttributeKey`.
pub(crate) mod _impl_attributes;
/// **(internal)** Implements the styling passes of `InteractionGraph`.
mod _impl_style_passes;
/// **(internal)** Implements `StylePass` and `StylePipeline`.
mod _impl_style_pipeline;
/// **(internal)** Implements the operations of `SubgraphRegistry`.
mod _impl_subgraph_registry;

/// The closed set of visual attributes recognised by the styling passes.
///
/// Anything else can be stored in the `extra` part of `Attributes`, which is only
/// consumed by the `.dot` serializer.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum AttributeKey {
    ArrowHead,
    Color,
    FillColor,
    FontName,
    FontSize,
    Label,
    PenWidth,
    Shape,
    Style,
}

/// A mapping of visual attributes of a node, edge, subgraph or graph.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Attributes {
    known: BTreeMap<AttributeKey, String>,
    extra: BTreeMap<String, String>,
}

/// A group of nodes that is displayed as one (possibly nested) cluster.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Subgraph {
    variables: BTreeSet<VariableId>,
    attributes: Attributes,
}

/// An ordered list of `Subgraph` objects.
///
/// The registry does not verify that its subgraphs form a laminar family on every
/// modification. Instead, the styling passes only add subgraphs that are compatible with
/// everything added before them (given the order of `StylePipeline`). The property
/// can be checked explicitly using `SubgraphRegistry::is_laminar`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SubgraphRegistry {
    subgraphs: Vec<Subgraph>,
}

/// One of the six default styling passes.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum StylePass {
    InteractionSigns,
    StronglyConnectedComponents,
    Inputs,
    Outputs,
    Constants,
    Condensation,
}

/// An ordered list of `StylePass` stages.
///
/// The stages always follow the order of `StylePass::DEFAULT_ORDER`; a pipeline can skip
/// stages, but cannot reorder them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StylePipeline {
    stages: Vec<StylePass>,
}
