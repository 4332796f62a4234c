//! Expands a genotype preset into one constraint per pedigree member.
//!
//! Two independent rules exist. Per-individual presets (`any`, `dominant`,
//! `affected_carriers`) look only at the individual itself. Index-relative
//! presets (`de_novo` and the recessive family) first pick the index and then
//! tag each individual by its role in the index trio.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{GenotypePreset, GenotypeTag, SampleGenotypeConstraint};
use crate::pedigree::{pick_index, Individual, Pedigree};
use crate::ResolveError;

/// Genotype fragment of a variant query's settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenotypeSettings {
    /// Preset the constraints were derived from.
    pub preset: GenotypePreset,
    /// One constraint per individual, in pedigree order.
    pub genotype: Vec<SampleGenotypeConstraint>,
    /// Index of a recessive query, `None` for other presets.
    pub recessive_index: Option<String>,
}

/// Role of an individual relative to the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrioRole {
    Index,
    Father,
    Mother,
    Other,
}

/// The index with whichever parents are present in the pedigree.
#[derive(Debug)]
struct IndexTrio<'a> {
    index: &'a Individual,
    father: Option<&'a str>,
    mother: Option<&'a str>,
}

impl<'a> IndexTrio<'a> {
    fn locate(pedigree: &'a Pedigree) -> Result<Self, ResolveError> {
        let index = pick_index(pedigree)?;
        let present = |name: Option<&'a str>| name.filter(|name| pedigree.contains(name));
        Ok(Self {
            index,
            father: present(index.recorded_father()),
            mother: present(index.recorded_mother()),
        })
    }

    fn role_of(&self, individual: &Individual) -> TrioRole {
        let name = individual.name.as_str();
        if name == self.index.name {
            TrioRole::Index
        } else if Some(name) == self.father {
            TrioRole::Father
        } else if Some(name) == self.mother {
            TrioRole::Mother
        } else {
            TrioRole::Other
        }
    }
}

/// Tag for presets evaluated on the individual alone.
///
/// Returns `None` for presets that depend on the index trio.
pub fn per_individual_tag(preset: GenotypePreset, individual: &Individual) -> Option<GenotypeTag> {
    match preset {
        GenotypePreset::Any => Some(GenotypeTag::Any),
        GenotypePreset::Dominant if individual.affected => Some(GenotypeTag::Het),
        GenotypePreset::AffectedCarriers if individual.affected => Some(GenotypeTag::Variant),
        GenotypePreset::Dominant | GenotypePreset::AffectedCarriers => Some(GenotypeTag::Ref),
        _ => None,
    }
}

fn index_relative_tag(preset: GenotypePreset, role: TrioRole) -> GenotypeTag {
    match (preset, role) {
        (GenotypePreset::DeNovo, TrioRole::Index) => GenotypeTag::Variant,
        (GenotypePreset::DeNovo, _) => GenotypeTag::Ref,
        (_, TrioRole::Index) => GenotypeTag::RecessiveIndex,
        (_, TrioRole::Father) => GenotypeTag::RecessiveFather,
        (_, TrioRole::Mother) => GenotypeTag::RecessiveMother,
        (_, TrioRole::Other) => GenotypeTag::Any,
    }
}

fn resolve<'a>(
    pedigree: &'a Pedigree,
    preset: GenotypePreset,
) -> Result<(Vec<SampleGenotypeConstraint>, Option<IndexTrio<'a>>), ResolveError> {
    if pedigree.is_empty() {
        return Err(ResolveError::EmptyPedigree);
    }

    let trio = if preset.needs_index() {
        Some(IndexTrio::locate(pedigree)?)
    } else {
        None
    };

    let constraints = pedigree
        .iter()
        .map(|individual| {
            let genotype = per_individual_tag(preset, individual)
                .or_else(|| {
                    trio.as_ref()
                        .map(|trio| index_relative_tag(preset, trio.role_of(individual)))
                })
                .unwrap_or(GenotypeTag::Any);
            trace!(sample = %individual.name, %genotype, "resolved genotype");
            SampleGenotypeConstraint::new(individual.name.clone(), genotype)
        })
        .collect();

    Ok((constraints, trio))
}

/// Translate a preset into one constraint per individual, in pedigree order.
///
/// Every constraint is enabled and excludes no-calls.
///
/// # Errors
/// [`ResolveError::EmptyPedigree`] for an empty pedigree; for `de_novo` and
/// the recessive presets, anything index selection reports.
pub fn preset_to_genotype_choice(
    pedigree: &Pedigree,
    preset: GenotypePreset,
) -> Result<Vec<SampleGenotypeConstraint>, ResolveError> {
    resolve(pedigree, preset).map(|(constraints, _)| constraints)
}

/// Resolve a preset into the genotype fragment of the query settings.
pub fn resolve_settings(
    pedigree: &Pedigree,
    preset: GenotypePreset,
) -> Result<GenotypeSettings, ResolveError> {
    let (genotype, trio) = resolve(pedigree, preset)?;
    let recessive_index = trio
        .filter(|_| preset.is_recessive())
        .map(|trio| trio.index.name.clone());
    debug!(%preset, samples = genotype.len(), recessive_index = ?recessive_index, "resolved genotype settings");
    Ok(GenotypeSettings {
        preset,
        genotype,
        recessive_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pedigree::Sex;
    use crate::Unresolvable;

    fn trio(son_affected: bool) -> Pedigree {
        Pedigree::new(vec![
            Individual::new("son", Sex::Male, son_affected).with_parents("father", "mother"),
            Individual::new("father", Sex::Male, false),
            Individual::new("mother", Sex::Female, false),
        ])
        .unwrap()
    }

    fn tags(constraints: &[SampleGenotypeConstraint]) -> Vec<(&str, GenotypeTag)> {
        constraints
            .iter()
            .map(|c| (c.sample.as_str(), c.genotype))
            .collect()
    }

    #[test]
    fn test_per_individual_tag() {
        let affected = Individual::new("a", Sex::Male, true);
        let unaffected = Individual::new("u", Sex::Male, false);
        assert_eq!(
            per_individual_tag(GenotypePreset::Dominant, &affected),
            Some(GenotypeTag::Het)
        );
        assert_eq!(
            per_individual_tag(GenotypePreset::AffectedCarriers, &unaffected),
            Some(GenotypeTag::Ref)
        );
        assert_eq!(per_individual_tag(GenotypePreset::Recessive, &affected), None);
        assert_eq!(per_individual_tag(GenotypePreset::DeNovo, &affected), None);
    }

    #[test]
    fn test_recessive_trio() {
        let constraints = preset_to_genotype_choice(&trio(true), GenotypePreset::Recessive).unwrap();
        assert_eq!(
            tags(&constraints),
            [
                ("son", GenotypeTag::RecessiveIndex),
                ("father", GenotypeTag::RecessiveFather),
                ("mother", GenotypeTag::RecessiveMother),
            ]
        );
        assert!(constraints.iter().all(|c| c.enabled && !c.include_no_call));
    }

    #[test]
    fn test_missing_parent_is_not_tagged() {
        let ped = Pedigree::new(vec![
            Individual::new("son", Sex::Male, true).with_parents("0", "mother"),
            Individual::new("mother", Sex::Female, false),
            Individual::new("aunt", Sex::Female, false),
        ])
        .unwrap();
        let constraints = preset_to_genotype_choice(&ped, GenotypePreset::XRecessive).unwrap();
        assert_eq!(
            tags(&constraints),
            [
                ("son", GenotypeTag::RecessiveIndex),
                ("mother", GenotypeTag::RecessiveMother),
                ("aunt", GenotypeTag::Any),
            ]
        );
    }

    #[test]
    fn test_per_individual_presets_skip_index_selection() {
        // dangling parent would fail index selection
        let ped = Pedigree::new(vec![
            Individual::new("son", Sex::Male, true).with_parents("ghost", "mother"),
            Individual::new("mother", Sex::Female, false),
        ])
        .unwrap();
        let constraints = preset_to_genotype_choice(&ped, GenotypePreset::Dominant).unwrap();
        assert_eq!(
            tags(&constraints),
            [("son", GenotypeTag::Het), ("mother", GenotypeTag::Ref)]
        );

        let err = preset_to_genotype_choice(&ped, GenotypePreset::DeNovo).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::UnresolvablePedigree(Unresolvable::DanglingParent { .. })
        ));
    }

    #[test]
    fn test_empty_pedigree_fails_for_every_preset() {
        for preset in GenotypePreset::ALL {
            assert_eq!(
                preset_to_genotype_choice(&Pedigree::default(), preset),
                Err(ResolveError::EmptyPedigree)
            );
        }
    }

    #[test]
    fn test_settings_carry_recessive_index() {
        let ped = trio(true);
        let settings = resolve_settings(&ped, GenotypePreset::CompoundHeterozygousRecessive).unwrap();
        assert_eq!(settings.recessive_index.as_deref(), Some("son"));
        assert_eq!(settings.genotype.len(), 3);

        let de_novo = resolve_settings(&ped, GenotypePreset::DeNovo).unwrap();
        assert_eq!(de_novo.recessive_index, None);
        assert_eq!(de_novo.genotype[0].genotype, GenotypeTag::Variant);
    }
}
