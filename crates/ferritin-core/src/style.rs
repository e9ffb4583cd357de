//! Style
//!
//! Inputs for displaying predicted structures: the color scheme, the chain
//! palette and the pLDDT legend. Rendering itself happens elsewhere.
use crate::chain::CHAIN_ALPHABET;
use crate::error::StyleError;
use bon::Builder;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

/// PyMOL chain colors, applied to chains in label order.
pub const CHAIN_COLORS: [&str; 40] = [
    "#33ff33", "#00ffff", "#ff33cc", "#ffff00", "#ff9999", "#e5e5e5", "#7f7fff", "#ff7f00",
    "#7fff7f", "#199999", "#ff007f", "#ffdd5e", "#8c3f99", "#b2b2b2", "#007fff", "#c4b200",
    "#8cb266", "#00bfbf", "#b27f7f", "#fcd1a5", "#ff7f7f", "#ffbfdd", "#7fffff", "#ffff7f",
    "#00ff7f", "#337fcc", "#d8337f", "#bfff3f", "#ff7fff", "#d8d8ff", "#3fffbf", "#b78c4c",
    "#339933", "#66b2b2", "#ba8c84", "#84bf00", "#b24c66", "#7f7f7f", "#3f3fa5", "#a5512b",
];

/// Legend entries for pLDDT coloring as `(label, color)`.
pub const PLDDT_LEGEND: [(&str, &str); 6] = [
    ("plDDT:", "#FFFFFF"),
    ("Very low (<50)", "#FF0000"),
    ("Low (60)", "#FFFF00"),
    ("OK (70)", "#00FF00"),
    ("Confident (80)", "#00FFFF"),
    ("Very high (>90)", "#0000FF"),
];

/// How a structure is colored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum ColorScheme {
    /// Gradient over the B-factor column, where predictions store pLDDT.
    #[default]
    #[strum(serialize = "lDDT")]
    Plddt,
    #[strum(serialize = "chain")]
    Chain,
    #[strum(serialize = "rainbow")]
    Rainbow,
}

impl ColorScheme {
    pub fn parse(name: &str) -> Result<Self, StyleError> {
        ColorScheme::from_str(name).map_err(|_| StyleError::UnknownColorScheme(name.to_string()))
    }
}

/// Color of the chain at `index`. The palette repeats after 40 chains.
pub fn chain_color(index: usize) -> &'static str {
    CHAIN_COLORS[index % CHAIN_COLORS.len()]
}

/// ViewStyle
///
/// Display settings for a predicted structure.
///
/// ```
/// use ferritin_core::{ColorScheme, ViewStyle};
/// let style = ViewStyle::builder()
///     .color(ColorScheme::Chain)
///     .chain_lengths(vec![120, 80])
///     .build();
/// assert_eq!(style.chain_count(), 2);
/// ```
#[derive(Builder, Clone, Debug, PartialEq)]
pub struct ViewStyle {
    #[builder(default)]
    color: ColorScheme,
    /// Lower bound of the pLDDT gradient.
    #[builder(default = 0.5)]
    vmin: f32,
    /// Upper bound of the pLDDT gradient.
    #[builder(default = 0.9)]
    vmax: f32,
    /// Residue count of every chain, in order.
    chain_lengths: Option<Vec<usize>>,
    /// Number of chains to color. Derived from `chain_lengths` when unset.
    chains: Option<usize>,
}

impl ViewStyle {
    pub fn color(&self) -> ColorScheme {
        self.color
    }

    pub fn plddt_range(&self) -> (f32, f32) {
        (self.vmin, self.vmax)
    }

    pub fn chain_lengths(&self) -> Option<&[usize]> {
        self.chain_lengths.as_deref()
    }

    pub fn chain_count(&self) -> usize {
        self.chains.unwrap_or(match &self.chain_lengths {
            Some(lengths) => lengths.len(),
            None => 1,
        })
    }

    /// `(chain label, color)` for every colored chain.
    ///
    /// Only as many chains as there are both labels and palette colors are
    /// listed. Empty unless the scheme is [`ColorScheme::Chain`].
    pub fn chain_colors(&self) -> Vec<(char, &'static str)> {
        if self.color != ColorScheme::Chain {
            return Vec::new();
        }
        CHAIN_ALPHABET
            .iter()
            .copied()
            .zip(CHAIN_COLORS)
            .take(self.chain_count())
            .collect()
    }
}

impl Default for ViewStyle {
    fn default() -> Self {
        ViewStyle::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_color_scheme() {
        assert_eq!(ColorScheme::parse("lDDT").unwrap(), ColorScheme::Plddt);
        assert_eq!(ColorScheme::parse("chain").unwrap(), ColorScheme::Chain);
        assert_eq!(ColorScheme::parse("rainbow").unwrap(), ColorScheme::Rainbow);
        let err = ColorScheme::parse("spectrum").unwrap_err();
        assert!(err.to_string().contains("spectrum"));
        for scheme in ColorScheme::iter() {
            assert_eq!(ColorScheme::parse(&scheme.to_string()).unwrap(), scheme);
        }
    }

    #[test]
    fn test_defaults() {
        let style = ViewStyle::default();
        assert_eq!(style.color(), ColorScheme::Plddt);
        assert_eq!(style.plddt_range(), (0.5, 0.9));
        assert_eq!(style.chain_count(), 1);
        assert!(style.chain_colors().is_empty());
    }

    #[test]
    fn test_chain_colors() {
        let style = ViewStyle::builder()
            .color(ColorScheme::Chain)
            .chain_lengths(vec![10, 20, 30])
            .build();
        assert_eq!(
            style.chain_colors(),
            vec![('A', "#33ff33"), ('B', "#00ffff"), ('C', "#ff33cc")]
        );

        let many = ViewStyle::builder()
            .color(ColorScheme::Chain)
            .chains(60)
            .build();
        assert_eq!(many.chain_colors().len(), 40);
    }

    #[test]
    fn test_chain_color_cycles() {
        assert_eq!(chain_color(0), "#33ff33");
        assert_eq!(chain_color(40), "#33ff33");
        assert_eq!(chain_color(39), "#a5512b");
    }
}
