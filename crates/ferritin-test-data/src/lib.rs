//! ferritin-test-data
//!
//! A module to provide test files embedded in the crate for use in testing.
//! Small alignment and structure files are included in the crate distribution.
//!
//! The test files are represented as `TestFile` objects which package the raw
//! text and create temporary files for programs to operate on.
use std::fs;
use tempfile::{Builder, NamedTempFile};

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use ferritin_test_data::TestFile;
/// let (a3m_file, _temp) = TestFile::alignment_01().create_temp().unwrap();
/// let (pdb_file, _temp) = TestFile::structure_01().create_temp().unwrap();
///
/// ```
pub struct TestFile {
    contents: &'static str,
    suffix: &'static str,
}

impl TestFile {
    /// Query plus five hits: one duplicate, lowercase insertions, gaps and
    /// unknown residues. Five distinct sequences of 20 columns.
    pub fn alignment_01() -> Self {
        Self {
            contents: include_str!("../data/alignments/query_hits.a3m"),
            suffix: "a3m",
        }
    }
    /// Query and an identical copy.
    pub fn alignment_02() -> Self {
        Self {
            contents: include_str!("../data/alignments/single.a3m"),
            suffix: "a3m",
        }
    }
    /// Chains A and B with two residues each, plus REMARK, TER, HETATM and END records.
    pub fn structure_01() -> Self {
        Self {
            contents: include_str!("../data/structures/two_chains.pdb"),
            suffix: "pdb",
        }
    }
    /// Five residues numbered continuously on chain A, as written by the predictor
    /// for a 3 + 2 residue complex.
    pub fn structure_02() -> Self {
        Self {
            contents: include_str!("../data/structures/complex_single_chain.pdb"),
            suffix: "pdb",
        }
    }

    pub fn contents(&self) -> &'static str {
        self.contents
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(&temp, self.contents)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }
}
