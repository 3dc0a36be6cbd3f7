use biodivine_lib_igraph::{Activities, InteractionGraph};
use std::io::Read;

/// Read a `.bnet` model (in DNF) from stdin and print its styled interaction graph
/// as `.dot` to stdout.
///
/// An optional argument gives the activities of the variables as a subspace string,
/// e.g. `1-0-` (one character per variable, variables sorted by name).
fn main() {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer).unwrap();

    let mut graph = match InteractionGraph::try_from_bnet(buffer.as_str()) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    graph.add_style_default();

    if let Some(subspace) = std::env::args().nth(1) {
        match Activities::try_from_subspace_str(&graph.variable_names(), &subspace) {
            Ok(activities) => graph.add_style_activities(&activities),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    }

    print!("{}", graph.to_dot());
}
