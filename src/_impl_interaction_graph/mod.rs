/// **(internal)** Utility methods for constructing and inspecting interaction graphs.
pub mod _impl_misc;

/// **(internal)** Builds an interaction graph from the clauses of update functions.
pub mod _impl_from_clauses;

/// **(internal)** Implements the export of (styled) interaction graphs into
/// the GraphViz `.dot` format.
pub mod _impl_dot_export;

/// **(internal)** A signed directed graph is an internal adjacency representation of the
/// interaction graph that is used to implement the analysis algorithms (reachability, SCC).
pub mod signed_directed_graph;
