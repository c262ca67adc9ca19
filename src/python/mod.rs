//! Python bindings for the memory board generator.
//!
//! # Quick Start
//!
//! ```python
//! import memory_board as mb
//!
//! game = mb.create_game(4, 4, seed=42)
//! print(game.unique_cards)   # [0, 1, ..., 7]
//! print(game.board)          # [[...], [...], [...], [...]]
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::board::{BoardGenerator, GameResult};

/// Python wrapper for GameResult.
#[pyclass(name = "GameResult")]
#[derive(Clone, Debug)]
pub struct PyGameResult(pub GameResult);

#[pymethods]
impl PyGameResult {
    #[getter]
    fn rows_count(&self) -> i64 {
        self.0.rows_count
    }

    #[getter]
    fn columns_count(&self) -> i64 {
        self.0.columns_count
    }

    #[getter]
    fn unique_cards(&self) -> Vec<u32> {
        self.0.unique_cards.iter().map(|c| c.raw()).collect()
    }

    /// Board as a list of rows.
    #[getter]
    fn board(&self) -> Vec<Vec<u32>> {
        self.0
            .board
            .rows_iter()
            .map(|row| row.iter().map(|c| c.raw()).collect())
            .collect()
    }

    /// Serialize to the camelCase JSON layout.
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.0).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "GameResult(rows={}, columns={}, pairs={})",
            self.0.rows_count,
            self.0.columns_count,
            self.0.pair_count()
        )
    }
}

/// Create a game. Raises ValueError on invalid dimensions.
#[pyfunction]
#[pyo3(signature = (rows, columns, seed=None))]
fn create_game(rows: i64, columns: i64, seed: Option<u64>) -> PyResult<PyGameResult> {
    let mut generator = match seed {
        Some(seed) => BoardGenerator::new(seed),
        None => BoardGenerator::from_entropy(),
    };
    generator
        .create_game(rows, columns)
        .map(PyGameResult)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Check dimensions. Raises ValueError on the first broken rule.
#[pyfunction]
fn validate_dimensions(rows: i64, columns: i64) -> PyResult<()> {
    crate::board::validate_dimensions(rows, columns)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pymodule]
fn memory_board(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGameResult>()?;
    m.add_function(wrap_pyfunction!(create_game, m)?)?;
    m.add_function(wrap_pyfunction!(validate_dimensions, m)?)?;
    Ok(())
}
