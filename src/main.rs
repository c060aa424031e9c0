use adjacency_graph::{neighbour_report, neighbourhood_report, Graph, GraphResult};
use tracing_subscriber::EnvFilter;

const EDGES: [(usize, usize); 7] = [(0, 1), (0, 4), (1, 2), (1, 3), (1, 4), (2, 3), (3, 4)];

fn main() -> GraphResult<()> {
    // Logs go to stderr so the reports on stdout stay readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut graph = Graph::new(5)?;

    // Insert the edges
    for (a, b) in EDGES {
        graph.add_edge(a, b)?;
    }

    println!("Number of edges in the graph: {}", graph.edge_count());

    // Both directions of an edge must agree
    for (a, b) in [(0, 1), (0, 4), (4, 0), (1, 0), (0, 2), (0, 3)] {
        println!("{}", neighbour_report(&graph, a, b)?);
    }

    for vertex in 0..graph.vertex_count() {
        println!("{}", neighbourhood_report(&graph, vertex)?);
    }

    println!("done");
    Ok(())
}
