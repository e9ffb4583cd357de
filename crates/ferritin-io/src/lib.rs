//! ferritin-io
//!
//! Readers and writers for the text formats produced by structure-prediction
//! pipelines:
//!
//! - [`a3m`]: multiple sequence alignments, encoded into an [`Alignment`](ferritin_core::Alignment)
//! - [`pdb`]: residue renumbering of predicted structures
//!
pub mod a3m;
mod lines;
pub mod pdb;

pub use self::a3m::{parse_a3m, read_a3m_file, Reader};
pub use self::pdb::{renumber_pdb, renumber_pdb_file, RenumberOptions};
