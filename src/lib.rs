//! # Pedigree genotype presets
//!
//! Translates a family pedigree and a named inheritance preset into the
//! per-sample genotype constraints consumed by a variant-filtering query
//! engine.
//!
//! ## Resolution steps
//!
//! 1. **Founder distances**: longest chain of parent links from each
//!    individual back to a founder
//! 2. **Index selection**: deepest generation, affected individuals first
//! 3. **Preset mapping**: one genotype tag per individual, either relative to
//!    the index trio or evaluated per individual
//!
//! ## Usage Example
//!
//! ```
//! use pedigree_presets::{preset_to_genotype_choice, GenotypePreset, Individual, Pedigree, Sex};
//!
//! let pedigree = Pedigree::new(vec![
//!     Individual::new("son", Sex::Male, true).with_parents("father", "mother"),
//!     Individual::new("father", Sex::Male, false),
//!     Individual::new("mother", Sex::Female, false),
//! ])?;
//! let constraints = preset_to_genotype_choice(&pedigree, GenotypePreset::Recessive)?;
//! assert_eq!(constraints.len(), 3);
//! # Ok::<(), pedigree_presets::ResolveError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod genotype; // Presets, genotype tags and the resolver
pub mod pedigree; // Pedigree model, founder distances, index selection

pub use genotype::{
    per_individual_tag, preset_to_genotype_choice, resolve_settings, GenotypePreset,
    GenotypeSettings, GenotypeTag, SampleGenotypeConstraint,
};
pub use pedigree::{
    founder_distances, pick_index, pick_index_with, FounderDistances, Individual, Pedigree, Sex,
};

use thiserror::Error;

/// Errors raised while resolving a pedigree against a genotype preset.
///
/// All variants are data-integrity or programmer errors; none is retried and
/// no partial result accompanies them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The pedigree has no individuals.
    #[error("pedigree is empty")]
    EmptyPedigree,

    /// Parent links cannot be resolved back to founders.
    #[error("unresolvable pedigree: {0}")]
    UnresolvablePedigree(Unresolvable),

    /// The preset tag is not one of the known inheritance models.
    #[error("unknown genotype preset '{0}'")]
    UnknownPreset(String),

    /// Two individuals share a name.
    #[error("duplicate individual '{0}' in pedigree")]
    DuplicateIndividual(String),

    /// An individual is listed as its own parent.
    #[error("individual '{individual}' is listed as its own parent")]
    SelfParent {
        /// Offending individual.
        individual: String,
    },
}

/// Why founder distances could not be computed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Unresolvable {
    /// Both parents are declared but neither exists in the pedigree.
    #[error("parents '{father}' and '{mother}' of '{individual}' are not in the pedigree")]
    MissingParents {
        /// Individual declaring the parents.
        individual: String,
        /// Declared father name.
        father: String,
        /// Declared mother name.
        mother: String,
    },

    /// A declared parent does not exist in the pedigree.
    #[error("parent '{parent}' of '{individual}' is not in the pedigree")]
    DanglingParent {
        /// Individual declaring the parent.
        individual: String,
        /// Declared parent name.
        parent: String,
    },

    /// Parent links form a cycle among the listed individuals.
    #[error("parent links form a cycle among {}", .individuals.join(", "))]
    Cycle {
        /// Individuals left without a distance, in pedigree order.
        individuals: Vec<String>,
    },
}

impl From<Unresolvable> for ResolveError {
    fn from(reason: Unresolvable) -> Self {
        ResolveError::UnresolvablePedigree(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_individuals() {
        let err = ResolveError::from(Unresolvable::MissingParents {
            individual: "son".into(),
            father: "dad".into(),
            mother: "mum".into(),
        });
        let message = err.to_string();
        assert!(message.contains("son"));
        assert!(message.contains("dad"));
        assert!(message.contains("mum"));
    }

    #[test]
    fn test_cycle_message_lists_members() {
        let err = Unresolvable::Cycle {
            individuals: vec!["a".into(), "b".into()],
        };
        assert_eq!(err.to_string(), "parent links form a cycle among a, b");
    }
}
