//! A library for turning logical (Boolean) network descriptions into *interaction graphs*,
//! analysing their strongly connected structure, and styling them for visualisation
//! using GraphViz.
//!
//! The typical workflow is:
//!  1. Read update clauses (e.g. [bnet::clauses_from_bnet]) and build an [InteractionGraph].
//!  2. Apply styles, usually through [style::StylePipeline] or
//!     [InteractionGraph::add_style_default].
//!  3. Export the result using [InteractionGraph::to_dot] or render it with
//!     [render::Renderer].

#[macro_use]
extern crate lazy_static;

use crate::style::{Attributes, SubgraphRegistry};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::iter::Map;
use std::ops::Range;

pub mod bnet;
pub mod condensation;
pub mod render;
pub mod style;

/// **(internal)** Utility methods for `Activities`.
mod _impl_activities;
/// **(internal)** Utility methods and algorithms for `InteractionGraph`.
mod _impl_interaction_graph;
/// **(internal)** Utility methods for `SignSet`.
mod _impl_sign_set;
/// **(internal)** Utility methods for `VariableId`.
mod _impl_variable_id;
/// **(internal)** The error type of this crate.
mod error;

pub use error::{IgraphError, Result};

lazy_static! {
    /// A regular expression that matches the identifiers allowed as variable names.
    static ref ID_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9_{}]+$").unwrap();
}

/// A type-safe index of a variable (node) inside an `InteractionGraph`.
///
/// Variables are always sorted by name, hence the ordering of `VariableId` objects follows
/// the ordering of variable names.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VariableId(usize);

/// Possible monotonous effects of a regulation in an `InteractionGraph`.
///
/// Activation means increasing monotonicity and inhibition means decreasing
/// monotonicity.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Monotonicity {
    Activation,
    Inhibition,
}

/// A non-empty set of `Monotonicity` values observed on one edge of an `InteractionGraph`.
///
/// An edge with both values is *ambivalent*.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SignSet {
    activation: bool,
    inhibition: bool,
}

/// One clause of an update function: a conjunction of literals, given as a mapping from
/// regulator names to the value (`0` or `1`) that the regulator must have for the clause
/// to fire.
pub type Clause = BTreeMap<String, u8>;

/// Clauses of all update functions of a network, keyed by the name of the updated variable.
pub type ClauseMap = BTreeMap<String, Vec<Clause>>;

/// A partial assignment of Boolean values to variables (identified by name).
///
/// Activities are only used for styling: they never change the structure of a graph.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Activities(BTreeMap<String, bool>);

/// An edge of the `InteractionGraph` together with its visual attributes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Interaction {
    regulator: VariableId,
    target: VariableId,
    signs: SignSet,
    attributes: Attributes,
}

/// An interaction graph of a Boolean network: a directed graph where an edge `u -> v`
/// means that `u` appears in the update function of `v`. Every edge is annotated with
/// the `SignSet` of the regulation.
///
/// Besides the structure, the graph carries visual attributes of nodes, edges and the
/// graph itself, a `SubgraphRegistry` of node groupings (clusters), and optionally a
/// precomputed `CondensationGraph` which is displayed alongside the main graph.
#[derive(Clone, Debug)]
pub struct InteractionGraph {
    variables: Vec<String>,
    variable_to_index: HashMap<String, VariableId>,
    interactions: BTreeMap<(VariableId, VariableId), Interaction>,
    /// The keys of `interactions` as `(target, regulator)` pairs.
    regulator_index: BTreeSet<(VariableId, VariableId)>,
    graph_attributes: Attributes,
    node_defaults: Attributes,
    node_attributes: Vec<Attributes>,
    subgraphs: SubgraphRegistry,
    condensation: Option<condensation::CondensationGraph>,
}

/// An iterator over all `VariableId`s of an `InteractionGraph`.
pub type VariableIdIterator = Map<Range<usize>, fn(usize) -> VariableId>;

/// An iterator over all `Interaction`s of an `InteractionGraph`.
pub type InteractionIterator<'a> =
    std::collections::btree_map::Values<'a, (VariableId, VariableId), Interaction>;
