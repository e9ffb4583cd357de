use anyhow::Result;
use ferritin_core::style::PLDDT_LEGEND;
use ferritin_core::{ColorScheme, ViewStyle};

pub fn execute(color: &str, chains: Option<usize>) -> Result<()> {
    let style = ViewStyle::builder()
        .color(ColorScheme::parse(color)?)
        .maybe_chains(chains)
        .build();

    match style.color() {
        ColorScheme::Plddt => {
            let (vmin, vmax) = style.plddt_range();
            println!("range\t{}\t{}", vmin, vmax);
            for (label, hex) in PLDDT_LEGEND {
                println!("{}\t{}", label, hex);
            }
        }
        ColorScheme::Chain => {
            for (chain, hex) in style.chain_colors() {
                println!("{}\t{}", chain, hex);
            }
        }
        ColorScheme::Rainbow => println!("spectrum"),
    }
    Ok(())
}
