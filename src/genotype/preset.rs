use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ResolveError;

/// Named family inheritance model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenotypePreset {
    /// No genotype restriction.
    Any,
    /// Variant in the index only.
    DeNovo,
    /// Heterozygous in affected, reference in unaffected individuals.
    Dominant,
    /// Homozygous recessive in the index trio.
    HomozygousRecessive,
    /// Compound heterozygous recessive in the index trio.
    CompoundHeterozygousRecessive,
    /// Either recessive mode in the index trio.
    Recessive,
    /// X-linked recessive in the index trio.
    XRecessive,
    /// Variant in affected, reference in unaffected individuals.
    AffectedCarriers,
}

impl GenotypePreset {
    /// Every preset, in presentation order.
    pub const ALL: [GenotypePreset; 8] = [
        GenotypePreset::Any,
        GenotypePreset::DeNovo,
        GenotypePreset::Dominant,
        GenotypePreset::HomozygousRecessive,
        GenotypePreset::CompoundHeterozygousRecessive,
        GenotypePreset::Recessive,
        GenotypePreset::XRecessive,
        GenotypePreset::AffectedCarriers,
    ];

    /// Snake-case tag used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            GenotypePreset::Any => "any",
            GenotypePreset::DeNovo => "de_novo",
            GenotypePreset::Dominant => "dominant",
            GenotypePreset::HomozygousRecessive => "homozygous_recessive",
            GenotypePreset::CompoundHeterozygousRecessive => "compound_heterozygous_recessive",
            GenotypePreset::Recessive => "recessive",
            GenotypePreset::XRecessive => "x_recessive",
            GenotypePreset::AffectedCarriers => "affected_carriers",
        }
    }

    /// Presets resolved relative to the index's father and mother.
    pub fn is_recessive(self) -> bool {
        matches!(
            self,
            GenotypePreset::HomozygousRecessive
                | GenotypePreset::CompoundHeterozygousRecessive
                | GenotypePreset::Recessive
                | GenotypePreset::XRecessive
        )
    }

    /// Presets that need an index individual.
    pub fn needs_index(self) -> bool {
        self == GenotypePreset::DeNovo || self.is_recessive()
    }
}

impl fmt::Display for GenotypePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenotypePreset {
    type Err = ResolveError;

    /// Case-insensitive; `-` is accepted in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        GenotypePreset::ALL
            .into_iter()
            .find(|preset| preset.as_str() == normalized)
            .ok_or_else(|| ResolveError::UnknownPreset(s.to_string()))
    }
}
