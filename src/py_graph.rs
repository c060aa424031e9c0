use numpy::ToPyArray;
use pyo3::prelude::*;

use crate::graph::Graph;

// Vertex ids arrive as signed ints so negatives surface as IndexError
#[pyclass(name = "Graph")]
pub struct PyGraph {
    graph: Graph,
}

#[pymethods]
impl PyGraph {
    #[new]
    fn new(n_vertices: i64) -> PyResult<Self> {
        Ok(PyGraph {
            graph: Graph::try_from(n_vertices)?,
        })
    }

    fn add_edge(&mut self, a: i64, b: i64) -> PyResult<()> {
        let a = self.graph.vertex_from_signed(a)?;
        let b = self.graph.vertex_from_signed(b)?;
        Ok(self.graph.add_edge(a, b)?)
    }

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn are_neighbours(&self, a: i64, b: i64) -> PyResult<bool> {
        let a = self.graph.vertex_from_signed(a)?;
        let b = self.graph.vertex_from_signed(b)?;
        Ok(self.graph.are_neighbours(a, b)?)
    }

    fn neighbours(&self, vertex: i64) -> PyResult<Vec<usize>> {
        let vertex = self.graph.vertex_from_signed(vertex)?;
        Ok(self.graph.neighbours(vertex)?)
    }

    fn edges(&self) -> Vec<(usize, usize)> {
        self.graph.edges().collect()
    }

    // Copies the matrix out as a 2-D numpy uint8 array
    fn adjacency_matrix(&self) -> PyResult<PyObject> {
        Python::with_gil(|py| {
            let result_converted: PyObject =
                self.graph.adjacency().to_pyarray(py).to_owned().into();
            Ok(result_converted)
        })
    }
}
