//! Resolve every preset for an affected trio and print the constraint tables.

use pedigree_presets::genotype::render_table;
use pedigree_presets::{resolve_settings, GenotypePreset, Individual, Pedigree, Sex};

fn main() -> anyhow::Result<()> {
    let pedigree = Pedigree::new(vec![
        Individual::new("index", Sex::Female, true).with_parents("father", "mother"),
        Individual::new("father", Sex::Male, false),
        Individual::new("mother", Sex::Female, false),
    ])?;

    for preset in GenotypePreset::ALL {
        let settings = resolve_settings(&pedigree, preset)?;
        println!("== {preset}");
        print!("{}", render_table(&settings.genotype)?);
    }
    Ok(())
}
