//! Genotype presets and their expansion into per-sample constraints.

mod preset;
mod render;
mod resolver;
mod tag;

pub use preset::GenotypePreset;
pub use render::{render_json, render_table, write_table};
pub use resolver::{per_individual_tag, preset_to_genotype_choice, resolve_settings, GenotypeSettings};
pub use tag::{GenotypeTag, SampleGenotypeConstraint};
