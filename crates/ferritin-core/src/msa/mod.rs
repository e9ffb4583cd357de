//! Multiple Sequence Alignments
//!
//! - [`alphabet`]: the 21-symbol encoding shared by parser and summarizer
//! - [`alignment`]: the encoded matrix
//! - [`coverage`]: identity-to-query and per-column coverage
pub mod alignment;
pub mod alphabet;
pub mod coverage;
