use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pedigree_presets::genotype::{render_json, write_table};
use pedigree_presets::pedigree::read_pedigree;
use pedigree_presets::{founder_distances, pick_index, resolve_settings, GenotypePreset, Pedigree};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "pedigree-presets",
    version,
    about = "Resolve inheritance presets into per-sample genotype constraints"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a genotype preset against a pedigree.
    Resolve {
        /// Pedigree file (PED or case JSON with `individual_set`).
        pedigree: PathBuf,
        /// Preset tag, e.g. `de_novo` or `recessive`.
        #[arg(long)]
        preset: String,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print each individual's distance from the founders.
    Founders {
        /// Pedigree file (PED or case JSON).
        pedigree: PathBuf,
    },
    /// Print the individual picked as index.
    Index {
        /// Pedigree file (PED or case JSON).
        pedigree: PathBuf,
    },
    /// List the known preset tags.
    Presets,
    /// Check that a pedigree can be resolved.
    Validate {
        /// Pedigree file (PED or case JSON).
        pedigree: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Tab-separated table.
    Text,
    /// Genotype settings JSON.
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Resolve {
            pedigree,
            preset,
            format,
        } => run_resolve(&pedigree, &preset, format)?,
        Commands::Founders { pedigree } => run_founders(&pedigree)?,
        Commands::Index { pedigree } => run_index(&pedigree)?,
        Commands::Presets => run_presets()?,
        Commands::Validate { pedigree } => run_validate(&pedigree)?,
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load(path: &Path) -> Result<Pedigree> {
    let pedigree = read_pedigree(path)
        .with_context(|| format!("failed to read pedigree from {}", path.display()))?;
    info!(path = %path.display(), individuals = pedigree.len(), "loaded pedigree");
    Ok(pedigree)
}

fn run_resolve(path: &Path, preset: &str, format: OutputFormat) -> Result<()> {
    let preset = preset.parse::<GenotypePreset>().context("invalid --preset")?;
    let pedigree = load(path)?;
    let settings = resolve_settings(&pedigree, preset)
        .with_context(|| format!("failed to resolve preset '{}'", preset))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => write_table(&mut out, &settings.genotype)?,
        OutputFormat::Json => writeln!(out, "{}", render_json(&settings)?)?,
    }
    Ok(())
}

fn run_founders(path: &Path) -> Result<()> {
    let pedigree = load(path)?;
    let distances = founder_distances(&pedigree).context("failed to compute founder distances")?;
    for (name, distance) in distances.iter() {
        println!("{}\t{}", name, distance);
    }
    Ok(())
}

fn run_index(path: &Path) -> Result<()> {
    let pedigree = load(path)?;
    let index = pick_index(&pedigree).context("failed to pick index individual")?;
    println!("{}", index.name);
    Ok(())
}

fn run_presets() -> Result<()> {
    for preset in GenotypePreset::ALL {
        println!("{}", preset);
    }
    Ok(())
}

fn run_validate(path: &Path) -> Result<()> {
    let pedigree = load(path)?;
    pedigree
        .validate()
        .with_context(|| format!("pedigree {} is not resolvable", path.display()))?;
    println!("ok");
    Ok(())
}
