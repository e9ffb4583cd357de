use super::alphabet::{decode_residue, GAP};
use crate::error::MsaError;
use itertools::Itertools;
use ndarray::{Array2, ArrayView1};

/// Alignment
///
/// An encoded multiple sequence alignment: one row per sequence, one column per
/// aligned position, values in `0..=20`. Row 0 is the query.
///
/// Rows always have equal length. An alignment with no rows is valid and empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alignment {
    matrix: Array2<u8>,
}

impl Alignment {
    pub fn empty() -> Self {
        Alignment {
            matrix: Array2::zeros((0, 0)),
        }
    }

    /// Build an alignment from encoded rows.
    ///
    /// Every row must have the length of the first one. Codes above 20 are
    /// clamped to the gap code.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, MsaError> {
        let Some(first) = rows.first() else {
            return Ok(Self::empty());
        };
        let expected = first.len();
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != expected)
        {
            return Err(MsaError::MalformedAlignment {
                row,
                expected,
                found,
            });
        }
        Ok(Self::from_uniform_rows(&rows, expected))
    }

    // callers guarantee every row has `width` entries
    fn from_uniform_rows(rows: &[Vec<u8>], width: usize) -> Self {
        let matrix = Array2::from_shape_fn((rows.len(), width), |(i, j)| rows[i][j].min(GAP));
        Alignment { matrix }
    }

    pub fn matrix(&self) -> &Array2<u8> {
        &self.matrix
    }

    pub fn n_sequences(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn n_columns(&self) -> usize {
        self.matrix.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.n_sequences() == 0
    }

    pub fn row(&self, index: usize) -> Option<ArrayView1<'_, u8>> {
        (index < self.n_sequences()).then(|| self.matrix.row(index))
    }

    /// The first sequence of the alignment.
    pub fn query(&self) -> Option<ArrayView1<'_, u8>> {
        self.row(0)
    }

    /// Render a row back to text. Codes without a symbol render as `-`.
    pub fn decode_row(&self, index: usize) -> Option<String> {
        self.row(index).map(|row| {
            row.iter()
                .map(|&code| decode_residue(code).unwrap_or('-'))
                .collect()
        })
    }

    /// Collapse identical rows, keeping the first occurrence of each.
    ///
    /// Input order is preserved, so the query remains row 0.
    pub fn dedup(&self) -> Alignment {
        let rows: Vec<Vec<u8>> = self
            .matrix
            .rows()
            .into_iter()
            .map(|row| row.to_vec())
            .unique()
            .collect();
        Self::from_uniform_rows(&rows, self.n_columns())
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::empty()
    }
}
