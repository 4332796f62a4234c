//! Pedigree model and the graph utilities used to pick an index individual.
//!
//! Individuals keep their input order; parent links are resolved by name.

mod founders;
mod index;
pub mod io;
mod types;

pub use founders::{founder_distances, FounderDistances};
pub use index::{pick_index, pick_index_with};
pub use io::{parse_case_json, parse_ped, read_pedigree, PedigreeIoError};
pub use types::{Individual, Pedigree, Sex, FOUNDER_SENTINEL};
