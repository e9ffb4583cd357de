use super::write_output;
use anyhow::{Context, Result};
use ferritin_core::{summarize_coverage, Coverage};
use ferritin_io::read_a3m_file;
use log::{info, warn};
use std::path::Path;

pub fn execute(input: &Path, output: Option<&Path>) -> Result<()> {
    info!("Reading alignment {:?}", input);
    let alignment =
        read_a3m_file(input).with_context(|| format!("failed to read alignment {:?}", input))?;

    match summarize_coverage(&alignment) {
        Coverage::Insufficient { distinct } => {
            let message = format!("Unable to display MSA of length {}", distinct);
            warn!("{}", message);
            write_output(output, &(message + "\n"))
        }
        Coverage::Summary(summary) => {
            let mut json = serde_json::to_string_pretty(&summary)?;
            json.push('\n');
            write_output(output, &json)
        }
    }
}
