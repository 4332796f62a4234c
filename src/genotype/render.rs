use anyhow::{anyhow, Result};
use std::io::Write;

use super::{GenotypeSettings, SampleGenotypeConstraint};

const HEADER: &str = "#sample\tgenotype\tenabled\tinclude_no_call\n";

/// Write constraints as a tab-separated table.
pub fn write_table<W: Write>(writer: &mut W, constraints: &[SampleGenotypeConstraint]) -> Result<()> {
    writer.write_all(HEADER.as_bytes())?;

    for constraint in constraints {
        let line = format!(
            "{sample}\t{genotype}\t{enabled}\t{no_call}\n",
            sample = constraint.sample,
            genotype = constraint.genotype,
            enabled = constraint.enabled,
            no_call = constraint.include_no_call
        );
        writer.write_all(line.as_bytes())?;
    }

    writer.flush()?;
    Ok(())
}

/// Render constraints into a table string (useful for tests and snapshots).
pub fn render_table(constraints: &[SampleGenotypeConstraint]) -> Result<String> {
    let mut buffer = Vec::new();
    write_table(&mut buffer, constraints)?;
    String::from_utf8(buffer).map_err(|_| anyhow!("rendered table is not valid UTF-8"))
}

/// Render genotype settings as pretty-printed JSON.
pub fn render_json(settings: &GenotypeSettings) -> Result<String> {
    Ok(serde_json::to_string_pretty(settings)?)
}
