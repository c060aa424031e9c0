use ndarray::{Array2, ArrayView2};
use tracing::{debug, trace, warn};

use crate::error::{GraphError, GraphResult};

/// Undirected graph over a fixed set of vertices `0..n`, stored as a dense
/// adjacency matrix.
///
/// The matrix is symmetric at all times and its diagonal is never set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    // The adjacency matrix, 1 where two vertices share an edge and 0 elsewhere
    adjacency_matrix: Array2<u8>,

    // The number of vertices, fixed at construction
    n_vertices: usize,
}

impl Graph {
    /// Creates a graph of `n_vertices` vertices and no edges.
    pub fn new(n_vertices: usize) -> GraphResult<Self> {
        if n_vertices == 0 {
            warn!("rejected a graph with no vertices");
            return Err(GraphError::InvalidVertexCount(0));
        }

        // ndarray caps the element count at isize::MAX and panics past it
        let cells: usize = n_vertices
            .checked_mul(n_vertices)
            .filter(|&cells| cells <= isize::MAX as usize)
            .ok_or_else(|| {
                warn!(n_vertices, "adjacency matrix size overflows");
                GraphError::TooManyVertices(n_vertices)
            })?;

        let mut storage: Vec<u8> = Vec::new();
        storage.try_reserve_exact(cells).map_err(|_| {
            warn!(n_vertices, cells, "could not allocate adjacency matrix");
            GraphError::TooManyVertices(n_vertices)
        })?;
        storage.resize(cells, 0);

        debug!(n_vertices, "allocated adjacency matrix");

        let adjacency_matrix = Array2::from_shape_vec((n_vertices, n_vertices), storage)
            .map_err(|_| GraphError::TooManyVertices(n_vertices))?;

        Ok(Graph {
            adjacency_matrix,
            n_vertices,
        })
    }

    /// Converts a signed vertex id, rejecting negatives before the range check.
    pub fn vertex_from_signed(&self, id: i64) -> GraphResult<usize> {
        let vertex: usize = usize::try_from(id).map_err(|_| {
            warn!(id, "negative vertex id");
            GraphError::NegativeVertex(id)
        })?;

        self.check_vertex(vertex)?;
        Ok(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.n_vertices
    }

    /// Read-only view of the `n x n` adjacency matrix.
    pub fn adjacency(&self) -> ArrayView2<'_, u8> {
        self.adjacency_matrix.view()
    }

    /// Connects `a` and `b`. Inserting an edge that already exists is a no-op.
    pub fn add_edge(&mut self, a: usize, b: usize) -> GraphResult<()> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;

        if a == b {
            warn!(vertex = a, "rejected self-loop");
            return Err(GraphError::SelfLoop(a));
        }

        if self.has_edge(a, b) {
            trace!(a, b, "edge already present");
            return Ok(());
        }

        // A<---->B is stored as both A---->B and B---->A
        self.adjacency_matrix[(a, b)] = 1;
        self.adjacency_matrix[(b, a)] = 1;

        debug!(a, b, "inserted edge");
        Ok(())
    }

    /// Iterates over every distinct edge as `(i, j)` with `i > j`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        // Every edge is stored twice, so only the strictly-lower triangle is visited
        (0..self.n_vertices).flat_map(move |i| {
            (0..i)
                .filter(move |&j| self.has_edge(i, j))
                .map(move |j| (i, j))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    pub fn are_neighbours(&self, a: usize, b: usize) -> GraphResult<bool> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;

        Ok(self.has_edge(a, b))
    }

    /// Vertices sharing an edge with `vertex`, in ascending order.
    pub fn neighbours(&self, vertex: usize) -> GraphResult<Vec<usize>> {
        self.check_vertex(vertex)?;

        Ok((0..self.n_vertices)
            .filter(|&idx| self.has_edge(idx, vertex))
            .collect())
    }

    // The one test for "edge present", shared by every query
    fn has_edge(&self, a: usize, b: usize) -> bool {
        self.adjacency_matrix[(a, b)] != 0
    }

    fn check_vertex(&self, vertex: usize) -> GraphResult<()> {
        if vertex < self.n_vertices {
            return Ok(());
        }

        warn!(vertex, n_vertices = self.n_vertices, "vertex out of range");
        Err(GraphError::VertexOutOfRange {
            vertex,
            vertex_count: self.n_vertices,
        })
    }
}

impl TryFrom<i64> for Graph {
    type Error = GraphError;

    fn try_from(n_vertices: i64) -> GraphResult<Self> {
        match usize::try_from(n_vertices) {
            Ok(n) if n > 0 => Graph::new(n),
            _ => {
                warn!(n_vertices, "rejected non-positive vertex count");
                Err(GraphError::InvalidVertexCount(n_vertices))
            }
        }
    }
}
