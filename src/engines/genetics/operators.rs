use crate::catalog::GeneCatalog;
use crate::types::{AllelePair, Genotype};
use rand::seq::SliceRandom;
use rand::Rng;

/// Random founder genotype: two alleles drawn with replacement for each of
/// the first `gene_count` catalog genes (all genes when `None`).
pub fn random_genotype<R: Rng>(
    catalog: &GeneCatalog,
    gene_count: Option<usize>,
    rng: &mut R,
) -> Genotype {
    let count = gene_count.unwrap_or(catalog.len());
    let mut genotype = Genotype::new();

    for gene in catalog.genes().iter().take(count) {
        let first = gene.alleles.choose(rng);
        let second = gene.alleles.choose(rng);
        if let (Some(first), Some(second)) = (first, second) {
            genotype.insert(&gene.name, AllelePair::new(&first.symbol, &second.symbol));
        }
    }

    genotype
}

/// Uniform integer offset in `-noise..=noise`.
pub fn stat_offset<R: Rng>(noise: i32, rng: &mut R) -> i32 {
    if noise <= 0 {
        return 0;
    }
    rng.gen_range(-noise..=noise)
}

/// Per-trial seed, spread so neighbouring trials get unrelated streams.
pub fn trial_seed(seed: u64, trial: usize) -> u64 {
    seed ^ (trial as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
