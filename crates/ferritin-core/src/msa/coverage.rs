//! Alignment Coverage
//!
//! Numeric series behind the "sequence coverage" plot of an alignment:
//!
//! - identity of every distinct sequence to the query, sorted low to high
//! - number of non-gap residues at every column
//!
//! Identical sequences are collapsed first. With fewer than two distinct
//! sequences there is nothing to plot and [`Coverage::Insufficient`] is returned.
use super::alignment::Alignment;
use super::alphabet::GAP;
use itertools::Itertools;
use log::info;
use ndarray::{Array2, Axis};
use serde::Serialize;

/// Result of [`summarize_coverage`].
#[derive(Clone, Debug, PartialEq)]
pub enum Coverage {
    /// Fewer than two distinct sequences.
    Insufficient { distinct: usize },
    Summary(CoverageSummary),
}

impl Coverage {
    pub fn summary(&self) -> Option<&CoverageSummary> {
        match self {
            Coverage::Summary(summary) => Some(summary),
            Coverage::Insufficient { .. } => None,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, Coverage::Insufficient { .. })
    }

    /// Number of distinct sequences in the alignment.
    pub fn distinct(&self) -> usize {
        match self {
            Coverage::Insufficient { distinct } => *distinct,
            Coverage::Summary(summary) => summary.order.len(),
        }
    }
}

/// CoverageSummary
///
/// `order` holds indices into the deduplicated alignment sorted by ascending
/// identity to the query; `identity` is given in that same order.
/// `non_gap_counts` has one entry per column.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CoverageSummary {
    order: Vec<usize>,
    identity: Vec<f64>,
    non_gap_counts: Vec<usize>,
    columns: usize,
    #[serde(skip)]
    unique: Alignment,
}

impl CoverageSummary {
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn identity(&self) -> &[f64] {
        &self.identity
    }

    pub fn non_gap_counts(&self) -> &[usize] {
        &self.non_gap_counts
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The deduplicated alignment the statistics were computed on.
    pub fn sequences(&self) -> &Alignment {
        &self.unique
    }

    /// Identity-weighted coverage matrix, rows in sorted order.
    ///
    /// Cell `(i, j)` holds the identity of the i-th sorted sequence where that
    /// sequence has a residue at column `j`, and NaN where it has a gap.
    pub fn heatmap(&self) -> Array2<f64> {
        let matrix = self.unique.matrix();
        Array2::from_shape_fn((self.order.len(), self.columns), |(i, j)| {
            if matrix[[self.order[i], j]] != GAP {
                self.identity[i]
            } else {
                f64::NAN
            }
        })
    }
}

/// Summarise coverage of an alignment relative to its query (row 0).
pub fn summarize_coverage(alignment: &Alignment) -> Coverage {
    let unique = alignment.dedup();
    let distinct = unique.n_sequences();
    info!("{} Sequences Found in Total", distinct);

    if distinct < 2 {
        return Coverage::Insufficient { distinct };
    }
    // dedup keeps the query as row 0
    let Some(query) = unique.query() else {
        return Coverage::Insufficient { distinct };
    };

    let columns = unique.n_columns();
    let raw_identity: Vec<f64> = unique
        .matrix()
        .rows()
        .into_iter()
        .map(|row| {
            let matches = row
                .iter()
                .zip(query.iter())
                .filter(|(residue, reference)| residue == reference)
                .count();
            matches as f64 / columns as f64
        })
        .collect();

    // stable, ties stay in alignment order
    let order: Vec<usize> = (0..distinct)
        .sorted_by(|&a, &b| raw_identity[a].total_cmp(&raw_identity[b]))
        .collect();
    let identity = order.iter().map(|&idx| raw_identity[idx]).collect();

    let non_gap_counts = unique
        .matrix()
        .map_axis(Axis(0), |column| {
            column.iter().filter(|&&code| code != GAP).count()
        })
        .to_vec();

    Coverage::Summary(CoverageSummary {
        order,
        identity,
        non_gap_counts,
        columns,
        unique,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode_residue;

    fn alignment(seqs: &[&str]) -> Alignment {
        Alignment::from_rows(
            seqs.iter()
                .map(|s| s.chars().map(encode_residue).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_identical_sequences_are_insufficient() {
        let coverage = summarize_coverage(&alignment(&["ARNDC", "ARNDC"]));
        assert_eq!(coverage, Coverage::Insufficient { distinct: 1 });
        assert!(coverage.is_insufficient());
        assert!(coverage.summary().is_none());
    }

    #[test]
    fn test_empty_is_insufficient() {
        let coverage = summarize_coverage(&Alignment::empty());
        assert_eq!(coverage, Coverage::Insufficient { distinct: 0 });
    }

    #[test]
    fn test_identity_and_counts() {
        let coverage = summarize_coverage(&alignment(&["ARNDC", "ARND-", "ARXDC"]));
        assert!(!coverage.is_insufficient());
        let summary = coverage.summary().unwrap();
        assert_eq!(coverage.distinct(), 3);
        // both homologs sit at 0.8 and keep their order; the query comes last
        assert_eq!(summary.order(), &[1, 2, 0]);
        assert_eq!(summary.identity(), &[0.8, 0.8, 1.0]);
        assert_eq!(summary.non_gap_counts(), &[3, 3, 2, 3, 2]);
        assert_eq!(summary.columns(), 5);
    }

    #[test]
    fn test_sequences_are_deduplicated() {
        let coverage = summarize_coverage(&alignment(&["ARND", "ARND", "ARN-", "ARND"]));
        assert_eq!(coverage.distinct(), 2);
        let unique = coverage.summary().unwrap().sequences();
        assert_eq!(unique.n_sequences(), 2);
        assert_eq!(unique.decode_row(0).unwrap(), "ARND");
        assert_eq!(unique.decode_row(1).unwrap(), "ARN-");
    }

    #[test]
    fn test_sorted_ascending() {
        let coverage = summarize_coverage(&alignment(&["AAAA", "AAAV", "VVVV", "AAVV"]));
        let summary = coverage.summary().unwrap();
        assert_eq!(summary.order(), &[2, 3, 1, 0]);
        assert_eq!(summary.identity(), &[0.0, 0.5, 0.75, 1.0]);
        assert!(summary.identity().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_query_identity_is_one() {
        let coverage = summarize_coverage(&alignment(&["AR-", "AR-", "---", "RRR"]));
        let summary = coverage.summary().unwrap();
        let query_pos = summary.order().iter().position(|&i| i == 0).unwrap();
        assert_eq!(summary.identity()[query_pos], 1.0);
        // gap against gap counts as a match
        let gaps_pos = summary.order().iter().position(|&i| i == 1).unwrap();
        assert!((summary.identity()[gaps_pos] - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(summary.non_gap_counts(), &[2, 2, 1]);
    }

    #[test]
    fn test_heatmap() {
        let coverage = summarize_coverage(&alignment(&["ARN", "A--"]));
        let heatmap = coverage.summary().unwrap().heatmap();
        assert_eq!(heatmap.dim(), (2, 3));
        // row 0 is the least similar sequence
        assert!((heatmap[[0, 0]] - 1.0 / 3.0).abs() < 1e-12);
        assert!(heatmap[[0, 1]].is_nan());
        assert!(heatmap[[0, 2]].is_nan());
        assert_eq!(heatmap.row(1).to_vec(), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_serialize() {
        let coverage = summarize_coverage(&alignment(&["AR", "A-"]));
        let json = serde_json::to_value(coverage.summary().unwrap()).unwrap();
        assert_eq!(json["order"], serde_json::json!([1, 0]));
        assert_eq!(json["identity"], serde_json::json!([0.5, 1.0]));
        assert_eq!(json["non_gap_counts"], serde_json::json!([2, 1]));
        assert_eq!(json["columns"], serde_json::json!(2));
        assert!(json.get("unique").is_none());
    }
}
