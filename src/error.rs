use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("the number of vertices must be greater than 0, got {0}")]
    InvalidVertexCount(i64),

    #[error("{0} vertices do not fit in an adjacency matrix")]
    TooManyVertices(usize),

    #[error("vertex {vertex} is out of range for a graph of {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("vertex ids cannot be negative, got {0}")]
    NegativeVertex(i64),

    // The diagonal of the matrix is never set
    #[error("vertex {0} cannot be connected to itself")]
    SelfLoop(usize),
}

pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(feature = "python")]
impl From<GraphError> for pyo3::PyErr {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::VertexOutOfRange { .. } | GraphError::NegativeVertex(_) => {
                pyo3::exceptions::PyIndexError::new_err(err.to_string())
            }
            GraphError::InvalidVertexCount(_)
            | GraphError::TooManyVertices(_)
            | GraphError::SelfLoop(_) => {
                pyo3::exceptions::PyValueError::new_err(err.to_string())
            }
        }
    }
}
