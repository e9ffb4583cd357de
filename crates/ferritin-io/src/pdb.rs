//! PDB Residue Renumbering
//!
//! Predicted structures number residues per chain. Viewers color chains by
//! label, so before display the residues are renumbered with one running index
//! across the whole file and, when chain lengths are known, relabelled chain
//! by chain.
//!
//! Only the chain label (column 22) and residue number (columns 23-26) of
//! `ATOM` records are rewritten. Every other byte of a kept line is copied
//! verbatim.
use bon::Builder;
use ferritin_core::{ChainMap, StructureError};
use log::debug;
use std::fs;
use std::path::Path;

use crate::lines::lines_inclusive;

const ATOM_TAG: &[u8] = b"ATOM";
const CHAIN_COLUMN: usize = 21;
const RESNUM_START: usize = 22;
// the residue number is read from five columns but written into four
const RESNUM_READ_END: usize = 27;
const RESNUM_WRITE_END: usize = 26;
const MAX_RESIDUE_INDEX: usize = 9999;

/// Options for [`renumber_pdb`].
///
/// ```
/// use ferritin_io::RenumberOptions;
/// let options = RenumberOptions::builder().chain_lengths(vec![120, 80]).build();
/// assert_eq!(options.chain_lengths(), Some(&[120, 80][..]));
/// ```
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq)]
pub struct RenumberOptions {
    /// Residue count of every chain, in order. When set, chains are relabelled
    /// `A`, `B`, ... from these lengths and non-`ATOM` lines are kept.
    chain_lengths: Option<Vec<usize>>,
}

impl RenumberOptions {
    pub fn chain_lengths(&self) -> Option<&[usize]> {
        self.chain_lengths.as_deref()
    }
}

/// Chain label and residue number of an `ATOM` line.
struct ResidueKey {
    chain: u8,
    number: i64,
}

impl ResidueKey {
    fn parse(line: &[u8], line_no: usize) -> Result<Self, StructureError> {
        if line.len() < RESNUM_WRITE_END {
            return Err(StructureError::UnsupportedFormat(format!(
                "line {}: ATOM record too short ({} bytes)",
                line_no,
                line.len()
            )));
        }
        let field = &line[RESNUM_START..RESNUM_READ_END.min(line.len())];
        let number = std::str::from_utf8(field)
            .ok()
            .and_then(|s| s.trim().parse::<i64>().ok())
            .ok_or_else(|| {
                StructureError::UnsupportedFormat(format!(
                    "line {}: invalid residue number {:?}",
                    line_no,
                    String::from_utf8_lossy(field)
                ))
            })?;
        Ok(ResidueKey {
            chain: line[CHAIN_COLUMN],
            number,
        })
    }
}

/// Renumber the residues of a PDB file.
///
/// The running index starts at 1 and is compared against an initial residue
/// of chain `A` number 1, so a file that does not start there begins at 2.
/// Each change of chain label or residue number between consecutive `ATOM`
/// records advances the index.
///
/// Without chain lengths only `ATOM` lines are returned, keeping their chain
/// label. With chain lengths all other lines pass through unchanged and the
/// chain label comes from the length bucket of the running index.
pub fn renumber_pdb(text: &str, options: &RenumberOptions) -> Result<String, StructureError> {
    let chain_map = options
        .chain_lengths()
        .map(ChainMap::from_lengths)
        .transpose()?;

    let mut out = Vec::with_capacity(text.len());
    let mut index: usize = 1;
    let mut previous = ResidueKey {
        chain: b'A',
        number: 1,
    };
    let mut n_atoms = 0;

    for (line_no, line) in lines_inclusive(text.as_bytes()).enumerate() {
        let line_no = line_no + 1;
        if !line.starts_with(ATOM_TAG) {
            if chain_map.is_some() {
                out.extend_from_slice(line);
            }
            continue;
        }

        let key = ResidueKey::parse(line, line_no)?;
        if key.number != previous.number || key.chain != previous.chain {
            previous = key;
            index += 1;
        }
        if index > MAX_RESIDUE_INDEX {
            return Err(StructureError::UnsupportedFormat(format!(
                "line {}: residue index {} does not fit in four columns",
                line_no, index
            )));
        }

        out.extend_from_slice(&line[..CHAIN_COLUMN]);
        match &chain_map {
            Some(map) => {
                let label = map.chain_for(index - 1).ok_or_else(|| {
                    StructureError::UnsupportedFormat(format!(
                        "line {}: residue {} is past the {} residues covered by the chain lengths",
                        line_no,
                        index,
                        map.len()
                    ))
                })?;
                out.push(label as u8);
            }
            None => out.push(line[CHAIN_COLUMN]),
        }
        out.extend_from_slice(format!("{:>4}", index).as_bytes());
        out.extend_from_slice(&line[RESNUM_WRITE_END..]);
        n_atoms += 1;
    }

    debug!(
        "Renumbered {} ATOM records, last residue index {}",
        n_atoms, index
    );
    String::from_utf8(out).map_err(|_| {
        StructureError::UnsupportedFormat("non-ASCII text in rewritten columns".to_string())
    })
}

/// Read a PDB file and renumber it.
pub fn renumber_pdb_file<P: AsRef<Path>>(
    path: P,
    options: &RenumberOptions,
) -> Result<String, StructureError> {
    let text = fs::read_to_string(path)?;
    renumber_pdb(&text, options)
}
