//! Loading pedigrees from PED files and case JSON documents.

use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::{Individual, Pedigree, Sex};
use crate::ResolveError;

/// Errors raised while loading a pedigree.
#[derive(Debug, Error)]
pub enum PedigreeIoError {
    /// Underlying read failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Case JSON could not be decoded.
    #[error("invalid case JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A PED line is malformed.
    #[error("PED line {line}: {message}")]
    Ped {
        /// 1-based line number.
        line: usize,
        /// What is wrong with it.
        message: String,
    },

    /// The records do not form a valid pedigree.
    #[error(transparent)]
    Pedigree(#[from] ResolveError),
}

#[derive(Debug, Deserialize)]
struct CaseRecord {
    individual_set: Vec<IndividualRecord>,
}

#[derive(Debug, Deserialize)]
struct IndividualRecord {
    name: String,
    #[serde(default)]
    father: Option<String>,
    #[serde(default)]
    mother: Option<String>,
    #[serde(default)]
    sex: Option<Sex>,
    #[serde(default)]
    affected: Option<bool>,
}

impl From<IndividualRecord> for Individual {
    fn from(record: IndividualRecord) -> Self {
        Individual {
            name: record.name,
            father: record.father,
            mother: record.mother,
            sex: record.sex.unwrap_or_default(),
            affected: record.affected.unwrap_or_default(),
            family: None,
        }
    }
}

/// Parse a whitespace-separated 6-column PED file.
///
/// Columns: family, name, father, mother, sex, affected. Blank lines and lines
/// starting with `#` are skipped. Affected is `2`; `1`, `0` and `-9` mean
/// unaffected.
pub fn parse_ped<R: BufRead>(reader: R) -> Result<Pedigree, PedigreeIoError> {
    let mut pedigree = Pedigree::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() < 6 {
            return Err(PedigreeIoError::Ped {
                line: line_no + 1,
                message: format!("expected 6 columns, found {}", fields.len()),
            });
        }

        let affected = match fields[5] {
            "2" => true,
            "1" | "0" | "-9" => false,
            other => {
                return Err(PedigreeIoError::Ped {
                    line: line_no + 1,
                    message: format!("invalid affected status '{}'", other),
                })
            }
        };

        let individual = Individual::new(fields[1], Sex::from_ped_code(fields[4]), affected)
            .with_parents(fields[2], fields[3])
            .with_family(fields[0]);
        pedigree.push(individual)?;
    }

    debug!(individuals = pedigree.len(), "parsed PED pedigree");
    Ok(pedigree)
}

/// Parse a case JSON document carrying an `individual_set` array.
///
/// Extra fields on the case or on individuals are ignored.
pub fn parse_case_json<R: Read>(reader: R) -> Result<Pedigree, PedigreeIoError> {
    let case: CaseRecord = serde_json::from_reader(reader)?;
    let pedigree = Pedigree::new(case.individual_set.into_iter().map(Individual::from))?;
    debug!(individuals = pedigree.len(), "parsed case JSON pedigree");
    Ok(pedigree)
}

/// Read a pedigree from disk.
///
/// `.ped` and `.json` extensions pick the format; anything else is sniffed
/// from the first non-blank character (`{` means JSON).
pub fn read_pedigree<P: AsRef<Path>>(path: P) -> Result<Pedigree, PedigreeIoError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("ped") => parse_ped(BufReader::new(fs::File::open(path)?)),
        Some("json") => parse_case_json(BufReader::new(fs::File::open(path)?)),
        _ => {
            let contents = fs::read_to_string(path)?;
            if contents.trim_start().starts_with('{') {
                parse_case_json(contents.as_bytes())
            } else {
                parse_ped(contents.as_bytes())
            }
        }
    }
}
