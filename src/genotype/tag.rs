use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Genotype label understood by the variant query engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenotypeTag {
    /// No restriction.
    Any,
    /// Heterozygous or homozygous alternative.
    Variant,
    /// Homozygous reference.
    Ref,
    /// Heterozygous.
    Het,
    /// Homozygous alternative.
    Hom,
    /// Anything but homozygous alternative.
    NonHom,
    /// Homozygous reference or no call.
    NonVariant,
    /// Anything but homozygous reference.
    NonReference,
    /// Index of a recessive query.
    RecessiveIndex,
    /// Father of the recessive index.
    RecessiveFather,
    /// Mother of the recessive index.
    RecessiveMother,
}

impl GenotypeTag {
    const ALL: [GenotypeTag; 11] = [
        GenotypeTag::Any,
        GenotypeTag::Variant,
        GenotypeTag::Ref,
        GenotypeTag::Het,
        GenotypeTag::Hom,
        GenotypeTag::NonHom,
        GenotypeTag::NonVariant,
        GenotypeTag::NonReference,
        GenotypeTag::RecessiveIndex,
        GenotypeTag::RecessiveFather,
        GenotypeTag::RecessiveMother,
    ];

    /// Snake-case tag used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            GenotypeTag::Any => "any",
            GenotypeTag::Variant => "variant",
            GenotypeTag::Ref => "ref",
            GenotypeTag::Het => "het",
            GenotypeTag::Hom => "hom",
            GenotypeTag::NonHom => "non_hom",
            GenotypeTag::NonVariant => "non_variant",
            GenotypeTag::NonReference => "non_reference",
            GenotypeTag::RecessiveIndex => "recessive_index",
            GenotypeTag::RecessiveFather => "recessive_father",
            GenotypeTag::RecessiveMother => "recessive_mother",
        }
    }
}

impl fmt::Display for GenotypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenotypeTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        GenotypeTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == normalized)
            .ok_or_else(|| format!("unknown genotype '{}'", s))
    }
}

/// Genotype constraint for one sample of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleGenotypeConstraint {
    /// Sample (individual) name.
    pub sample: String,
    /// Required genotype.
    pub genotype: GenotypeTag,
    /// Whether the constraint is active. Always `true` when resolved.
    pub enabled: bool,
    /// Whether no-calls pass the constraint. Always `false` when resolved.
    pub include_no_call: bool,
}

impl SampleGenotypeConstraint {
    /// Enabled constraint that excludes no-calls.
    pub fn new(sample: impl Into<String>, genotype: GenotypeTag) -> Self {
        Self {
            sample: sample.into(),
            genotype,
            enabled: true,
            include_no_call: false,
        }
    }
}
