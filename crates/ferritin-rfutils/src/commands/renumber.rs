use super::write_output;
use anyhow::{Context, Result};
use ferritin_io::{renumber_pdb_file, RenumberOptions};
use log::info;
use std::path::Path;

pub fn execute(input: &Path, output: Option<&Path>, lengths: Option<Vec<usize>>) -> Result<()> {
    info!("Renumbering {:?}", input);
    let options = RenumberOptions::builder()
        .maybe_chain_lengths(lengths)
        .build();
    let renumbered = renumber_pdb_file(input, &options)
        .with_context(|| format!("failed to renumber {:?}", input))?;
    write_output(output, &renumbered)
}
