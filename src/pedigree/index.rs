use tracing::debug;

use super::{founder_distances, FounderDistances, Individual, Pedigree};
use crate::ResolveError;

/// Pick the index individual (proband) of a pedigree.
///
/// See [`pick_index_with`] for the heuristic; distances are computed here.
pub fn pick_index(pedigree: &Pedigree) -> Result<&Individual, ResolveError> {
    let distances = founder_distances(pedigree)?;
    pick_index_with(pedigree, &distances)
}

/// Pick the index individual given precomputed founder distances.
///
/// Among the individuals of the deepest generation, the first affected one in
/// pedigree order wins; without an affected one, the first of that generation.
pub fn pick_index_with<'a>(
    pedigree: &'a Pedigree,
    distances: &FounderDistances,
) -> Result<&'a Individual, ResolveError> {
    let deepest = distances.max().ok_or(ResolveError::EmptyPedigree)?;
    let mut generation = pedigree
        .iter()
        .enumerate()
        .filter(|(pos, _)| distances.at(*pos) == Some(deepest))
        .map(|(_, individual)| individual)
        .peekable();

    let first = *generation.peek().ok_or(ResolveError::EmptyPedigree)?;
    let index = generation.find(|ind| ind.affected).unwrap_or(first);
    debug!(index = %index.name, generation = deepest, affected = index.affected, "picked index");
    Ok(index)
}
