//! Result of a query: chosen positions and their eligibility indicators.

use crate::core::error::{CardinalError, Result};
use crate::core::types::SampleIndex;
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix2};
use serde::{Deserialize, Serialize};

/// Positions chosen for labeling, in selection order, with the eligibility
/// indicator recorded for each one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    indices: Vec<SampleIndex>,
    indicators: Vec<bool>,
}

impl Selection {
    /// Pair up indices with their indicators.
    ///
    /// Both sequences must have the same length.
    pub fn new(indices: Vec<SampleIndex>, indicators: Vec<bool>) -> Result<Self> {
        if indices.len() != indicators.len() {
            return Err(CardinalError::invalid_argument(
                "indicators",
                indicators.len().to_string(),
                format!("length must match the {} selected indices", indices.len()),
            ));
        }
        Ok(Selection {
            indices,
            indicators,
        })
    }

    /// The empty selection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Selected positions, in selection order.
    pub fn indices(&self) -> &[SampleIndex] {
        &self.indices
    }

    /// Eligibility indicator for each selected position.
    pub fn indicators(&self) -> &[bool] {
        &self.indicators
    }

    /// Number of selected positions.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True if nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate over `(index, indicator)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (SampleIndex, bool)> + '_ {
        self.indices
            .iter()
            .copied()
            .zip(self.indicators.iter().copied())
    }

    /// Split into `(indices, indicators)`.
    pub fn into_parts(self) -> (Vec<SampleIndex>, Vec<bool>) {
        (self.indices, self.indicators)
    }

    /// Indicators as `1.0` / `0.0`.
    pub fn indicator_values(&self) -> Array1<f64> {
        self.indicators
            .iter()
            .map(|&flag| if flag { 1.0 } else { 0.0 })
            .collect()
    }

    /// Gather the selected rows of a feature matrix, in selection order.
    pub fn select_rows<A, S>(&self, pool: &ArrayBase<S, Ix2>) -> Result<Array2<A>>
    where
        A: Clone,
        S: Data<Elem = A>,
    {
        let nrows = pool.nrows();
        if let Some(&index) = self.indices.iter().find(|&&index| index >= nrows) {
            return Err(CardinalError::index_out_of_bounds(index, nrows));
        }
        Ok(pool.select(Axis(0), &self.indices))
    }
}
