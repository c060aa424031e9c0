mod error;
mod graph;
mod report;

#[cfg(feature = "python")]
mod py_graph;

pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use report::{neighbour_report, neighbourhood_report};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn adjacency_graph(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<py_graph::PyGraph>()?;
    Ok(())
}
