//! Chain labels
//!
//! Structure files name chains with a single character. When chains are
//! relabelled from a list of lengths, labels are drawn from
//! [`CHAIN_ALPHABET`] in order.
use crate::error::StructureError;

/// Uppercase then lowercase Latin letters.
pub const CHAIN_ALPHABET: [char; 52] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l',
    'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// ChainMap
///
/// Maps a 0-based running residue index to the chain it falls into, given the
/// ordered residue count of every chain. Chain `k` covers the indices
/// `sum(lengths[..k])..sum(lengths[..=k])` and is labelled `CHAIN_ALPHABET[k]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainMap {
    // exclusive end index of every chain
    ends: Vec<usize>,
}

impl ChainMap {
    pub fn from_lengths(lengths: &[usize]) -> Result<Self, StructureError> {
        if lengths.len() > CHAIN_ALPHABET.len() {
            return Err(StructureError::UnsupportedFormat(format!(
                "{} chain lengths given, at most {} chains can be labelled",
                lengths.len(),
                CHAIN_ALPHABET.len()
            )));
        }
        let mut ends = Vec::with_capacity(lengths.len());
        let mut total = 0usize;
        for &len in lengths {
            total = total.checked_add(len).ok_or_else(|| {
                StructureError::UnsupportedFormat(format!(
                    "chain lengths {:?} overflow the residue index",
                    lengths
                ))
            })?;
            ends.push(total);
        }
        Ok(ChainMap { ends })
    }

    /// Total number of residues covered.
    pub fn len(&self) -> usize {
        self.ends.last().copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn n_chains(&self) -> usize {
        self.ends.len()
    }

    /// Chain label of the residue at `index`, `None` past the last chain.
    pub fn chain_for(&self, index: usize) -> Option<char> {
        let chain = self.ends.partition_point(|&end| end <= index);
        if chain < self.ends.len() {
            Some(CHAIN_ALPHABET[chain])
        } else {
            None
        }
    }
}
