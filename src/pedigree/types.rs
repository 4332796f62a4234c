use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ResolveError;

/// Parent value marking an unknown parent (founder side).
pub const FOUNDER_SENTINEL: &str = "0";

/// Sex recorded for an individual. Carried through but not used by the
/// resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Not recorded.
    #[default]
    Unknown,
    /// Any other value.
    Other,
}

impl Sex {
    /// Decode the PED sex column (`1` male, `2` female, `0` or `-9` unknown).
    pub fn from_ped_code(code: &str) -> Self {
        match code {
            "1" => Sex::Male,
            "2" => Sex::Female,
            "0" | "-9" => Sex::Unknown,
            _ => Sex::Other,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Unknown => "unknown",
            Sex::Other => "other",
        };
        f.write_str(label)
    }
}

/// A member of a pedigree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    /// Unique name within the pedigree, used as the sample identifier.
    pub name: String,
    /// Father's name, the founder sentinel, or absent.
    pub father: Option<String>,
    /// Mother's name, the founder sentinel, or absent.
    pub mother: Option<String>,
    /// Recorded sex.
    pub sex: Sex,
    /// Whether the individual is clinically affected.
    pub affected: bool,
    /// Family identifier from PED input, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

impl Individual {
    /// Construct a founder (no recorded parents).
    pub fn new(name: impl Into<String>, sex: Sex, affected: bool) -> Self {
        Self {
            name: name.into(),
            father: None,
            mother: None,
            sex,
            affected,
            family: None,
        }
    }

    /// Record both parents.
    pub fn with_parents(self, father: impl Into<String>, mother: impl Into<String>) -> Self {
        self.with_father(father).with_mother(mother)
    }

    /// Record the father.
    pub fn with_father(mut self, father: impl Into<String>) -> Self {
        self.father = Some(father.into());
        self
    }

    /// Record the mother.
    pub fn with_mother(mut self, mother: impl Into<String>) -> Self {
        self.mother = Some(mother.into());
        self
    }

    /// Record the family identifier.
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    /// Father's name unless absent, empty or the founder sentinel.
    pub fn recorded_father(&self) -> Option<&str> {
        recorded(self.father.as_deref())
    }

    /// Mother's name unless absent, empty or the founder sentinel.
    pub fn recorded_mother(&self) -> Option<&str> {
        recorded(self.mother.as_deref())
    }

    /// Recorded parents, father first.
    pub fn recorded_parents(&self) -> impl Iterator<Item = &str> {
        self.recorded_father().into_iter().chain(self.recorded_mother())
    }

    /// An individual without recorded parents.
    pub fn is_founder(&self) -> bool {
        self.recorded_father().is_none() && self.recorded_mother().is_none()
    }
}

fn recorded(parent: Option<&str>) -> Option<&str> {
    parent
        .map(str::trim)
        .filter(|name| !name.is_empty() && *name != FOUNDER_SENTINEL)
}

/// Ordered collection of individuals belonging to one case.
///
/// Names are unique; input order is preserved and drives every
/// order-sensitive decision downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pedigree {
    individuals: Vec<Individual>,
    by_name: HashMap<String, usize>,
}

impl Pedigree {
    /// Build a pedigree, rejecting duplicate names.
    pub fn new(individuals: impl IntoIterator<Item = Individual>) -> Result<Self, ResolveError> {
        let mut pedigree = Self::default();
        for individual in individuals {
            pedigree.push(individual)?;
        }
        Ok(pedigree)
    }

    /// Append an individual.
    ///
    /// Parents are not required to be present yet; dangling references are
    /// reported when distances are computed.
    pub fn push(&mut self, individual: Individual) -> Result<(), ResolveError> {
        if self.by_name.contains_key(&individual.name) {
            return Err(ResolveError::DuplicateIndividual(individual.name));
        }
        self.by_name
            .insert(individual.name.clone(), self.individuals.len());
        self.individuals.push(individual);
        Ok(())
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Whether the pedigree has no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Individuals in pedigree order.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Iterate individuals in pedigree order.
    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    /// Position of the named individual.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Look up an individual by name.
    pub fn get(&self, name: &str) -> Option<&Individual> {
        self.position(name).map(|idx| &self.individuals[idx])
    }

    /// Whether an individual with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Check the pedigree can be resolved.
    ///
    /// Reports the first problem found: emptiness, self-parenting, then
    /// anything [`founder_distances`](super::founder_distances) rejects.
    pub fn validate(&self) -> Result<(), ResolveError> {
        if self.is_empty() {
            return Err(ResolveError::EmptyPedigree);
        }
        if let Some(individual) = self
            .iter()
            .find(|ind| ind.recorded_parents().any(|parent| parent == ind.name))
        {
            return Err(ResolveError::SelfParent {
                individual: individual.name.clone(),
            });
        }
        super::founder_distances(self).map(|_| ())
    }
}

impl<'a> IntoIterator for &'a Pedigree {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}
