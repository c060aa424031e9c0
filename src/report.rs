use crate::{error::GraphResult, graph::Graph};

// Human-readable wrappers over the adjacency queries

pub fn neighbour_report(graph: &Graph, a: usize, b: usize) -> GraphResult<String> {
    if graph.are_neighbours(a, b)? {
        Ok(format!("vertex {} is a neighbour of {}", a, b))
    } else {
        Ok(format!("vertex {} is NOT a neighbour of {}", a, b))
    }
}

pub fn neighbourhood_report(graph: &Graph, vertex: usize) -> GraphResult<String> {
    let neighbours: Vec<usize> = graph.neighbours(vertex)?;

    if neighbours.is_empty() {
        return Ok(format!("vertex {} has no neighbours", vertex));
    }

    let listed: Vec<String> = neighbours.iter().map(|n| n.to_string()).collect();
    Ok(format!("vertex {} has neighbours: {}", vertex, listed.join(", ")))
}
