//! Founder distances: the longest chain of parent links from each individual
//! back to an individual without recorded parents.

use std::collections::HashMap;

use tracing::debug;

use super::{Individual, Pedigree};
use crate::{ResolveError, Unresolvable};

/// Distance of every individual from the founders, in pedigree order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FounderDistances {
    names: Vec<String>,
    distances: Vec<usize>,
    by_name: HashMap<String, usize>,
}

impl FounderDistances {
    /// Distance of the named individual.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).map(|&pos| self.distances[pos])
    }

    /// Distance of the individual at `position` in pedigree order.
    pub fn at(&self, position: usize) -> Option<usize> {
        self.distances.get(position).copied()
    }

    /// Largest distance, i.e. the deepest generation.
    pub fn max(&self) -> Option<usize> {
        self.distances.iter().copied().max()
    }

    /// Number of individuals covered.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Whether no individual is covered.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// `(name, distance)` pairs in pedigree order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.distances.iter().copied())
    }

    /// Owned name-to-distance map.
    pub fn to_map(&self) -> HashMap<String, usize> {
        self.iter()
            .map(|(name, distance)| (name.to_string(), distance))
            .collect()
    }
}

/// Compute founder distances by iterative relaxation.
///
/// Founders get 0. Everyone else gets one more than their deepest recorded
/// parent, once all recorded parents are resolved. A pass that resolves
/// nobody ends the search with [`ResolveError::UnresolvablePedigree`], so the
/// loop runs at most `pedigree.len()` passes.
///
/// # Errors
/// - [`ResolveError::EmptyPedigree`] for an empty pedigree.
/// - [`Unresolvable::MissingParents`] when an individual declares two parents
///   and neither is in the pedigree.
/// - [`Unresolvable::DanglingParent`] or [`Unresolvable::Cycle`] when
///   relaxation stalls.
pub fn founder_distances(pedigree: &Pedigree) -> Result<FounderDistances, ResolveError> {
    if pedigree.is_empty() {
        return Err(ResolveError::EmptyPedigree);
    }
    check_declared_parents(pedigree)?;

    let individuals = pedigree.individuals();
    let mut resolved: Vec<Option<usize>> = vec![None; individuals.len()];
    let mut pending: Vec<usize> = (0..individuals.len()).collect();
    let mut pass = 0usize;

    while !pending.is_empty() {
        pass += 1;
        let before = pending.len();
        pending.retain(|&pos| match settled_distance(pedigree, &individuals[pos], &resolved) {
            Some(distance) => {
                resolved[pos] = Some(distance);
                false
            }
            None => true,
        });
        debug!(
            pass,
            resolved = before - pending.len(),
            pending = pending.len(),
            "founder distance pass"
        );
        if pending.len() == before {
            return Err(stalled(pedigree, &pending).into());
        }
    }

    let distances = resolved.into_iter().flatten().collect();
    Ok(FounderDistances {
        names: individuals.iter().map(|ind| ind.name.clone()).collect(),
        distances,
        by_name: individuals
            .iter()
            .enumerate()
            .map(|(pos, ind)| (ind.name.clone(), pos))
            .collect(),
    })
}

fn check_declared_parents(pedigree: &Pedigree) -> Result<(), Unresolvable> {
    for individual in pedigree {
        if let (Some(father), Some(mother)) =
            (individual.recorded_father(), individual.recorded_mother())
        {
            if !pedigree.contains(father) && !pedigree.contains(mother) {
                return Err(Unresolvable::MissingParents {
                    individual: individual.name.clone(),
                    father: father.to_string(),
                    mother: mother.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Distance of `individual` if every recorded parent already has one.
fn settled_distance(
    pedigree: &Pedigree,
    individual: &Individual,
    resolved: &[Option<usize>],
) -> Option<usize> {
    let mut deepest: Option<usize> = None;
    for parent in individual.recorded_parents() {
        let distance = pedigree.position(parent).and_then(|pos| resolved[pos])?;
        deepest = Some(deepest.map_or(distance, |d| d.max(distance)));
    }
    Some(deepest.map_or(0, |d| d + 1))
}

fn stalled(pedigree: &Pedigree, pending: &[usize]) -> Unresolvable {
    let individuals = pedigree.individuals();
    for &pos in pending {
        let individual = &individuals[pos];
        if let Some(parent) = individual
            .recorded_parents()
            .find(|parent| !pedigree.contains(parent))
        {
            return Unresolvable::DanglingParent {
                individual: individual.name.clone(),
                parent: parent.to_string(),
            };
        }
    }
    Unresolvable::Cycle {
        individuals: pending
            .iter()
            .map(|&pos| individuals[pos].name.clone())
            .collect(),
    }
}
