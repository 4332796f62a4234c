//! Resolution benchmarks on generated multi-generation pedigrees

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pedigree_presets::*;

/// Founding couple followed by `generations` couples, each child marrying in a founder.
fn lineage(generations: usize) -> Pedigree {
    let mut individuals = vec![
        Individual::new("g0_father", Sex::Male, false),
        Individual::new("g0_mother", Sex::Female, false),
    ];
    for depth in 1..=generations {
        let father = format!("g{}_father", depth - 1);
        let mother = format!("g{}_mother", depth - 1);
        individuals.push(
            Individual::new(format!("g{depth}_father"), Sex::Male, depth == generations)
                .with_parents(father, mother),
        );
        individuals.push(Individual::new(format!("g{depth}_mother"), Sex::Female, false));
    }
    // listing the deepest generation first forces the most relaxation passes
    individuals.reverse();
    Pedigree::new(individuals).expect("generated names are unique")
}

fn benchmark_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("recessive");
    for generations in [2usize, 16, 128] {
        let pedigree = lineage(generations);
        group.bench_with_input(
            BenchmarkId::from_parameter(generations),
            &pedigree,
            |b, pedigree| {
                b.iter(|| preset_to_genotype_choice(black_box(pedigree), GenotypePreset::Recessive))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, benchmark_resolution);
criterion_main!(benches);
