//! # ferritin-core
//!
//! Data model and numeric summaries for inspecting structure-prediction results.
//!
//! __ferritin-core__ provides functionality for:
//! * Encoding multiple sequence alignments as integer matrices ([`Alignment`])
//! * Summarising alignment coverage relative to the query ([`summarize_coverage`])
//! * Chain coloring and pLDDT legend helpers used when displaying structures
//! * Naming prediction jobs
//!
//! Parsing of the on-disk formats lives in `ferritin-io`.
//!
pub mod chain;
mod error;
pub mod job;
pub mod msa;
pub mod style;

pub use self::chain::{ChainMap, CHAIN_ALPHABET};
pub use self::error::{MsaError, StructureError, StyleError};
pub use self::msa::alignment::Alignment;
pub use self::msa::alphabet::{decode_residue, encode_residue, GAP, MSA_ALPHABET};
pub use self::msa::coverage::{summarize_coverage, Coverage, CoverageSummary};
pub use self::style::{ColorScheme, ViewStyle};
