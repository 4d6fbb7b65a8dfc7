use anyhow::Context;
use cavybreed::config::ConfigManager;
use cavybreed::engines::genetics::{generate_random_genotype, BreedingEngine, BreedingRecord};
use cavybreed::{GeneCatalog, StatComparison};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Usage: cavybreed [config.toml] [seed]
    let args: Vec<String> = env::args().collect();
    let manager = ConfigManager::new();
    if let Some(path) = args.get(1) {
        manager
            .load_layered(path)
            .with_context(|| format!("loading configuration from {}", path))?;
    }
    let config = manager.get();

    let seed = match args.get(2) {
        Some(raw) => Some(raw.parse::<u64>().context("seed must be an unsigned integer")?),
        None => config.breeding.seed,
    };
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let catalog = GeneCatalog::from_config(&config.catalog)?;
    let engine = BreedingEngine::new(&catalog, &config.stats, &config.breeding)?;

    let parent1 = generate_random_genotype(&catalog, config.breeding.random_gene_count, &mut rng);
    let parent2 = generate_random_genotype(&catalog, config.breeding.random_gene_count, &mut rng);
    let stats1 = engine.stat_deriver().derive_stats(&parent1, &mut rng)?;
    let stats2 = engine.stat_deriver().derive_stats(&parent2, &mut rng)?;

    println!("=== Cavybreed ===\n");
    println!("Parent 1: {}", engine.codec().encode(&parent1)?);
    println!("Parent 2: {}", engine.codec().encode(&parent2)?);

    let outcome = engine.breed(&parent1, &parent2, &mut rng)?;

    println!("\nPunnett squares:");
    for cross in &outcome.crosses {
        let buckets: Vec<String> = cross
            .punnett
            .probabilities
            .iter()
            .map(|p| format!("{} {}%", p.genotype, p.percent))
            .collect();
        println!("  {:<12} {} x {}: {}", cross.gene, cross.parent1, cross.parent2, buckets.join(", "));
    }

    println!("\nChild: {}", outcome.genetic_code);
    for note in &outcome.notes {
        println!("  {}", note);
    }
    for (stat, value) in outcome.stats.iter() {
        println!("  {:<10} {}", stat, value);
    }

    let comparison = StatComparison::between(&stats1, &stats2);
    println!(
        "\nParent scores: {:.1} vs {:.1} ({:?})",
        comparison.first_score, comparison.second_score, comparison.winner
    );

    let record = BreedingRecord::new(engine.codec(), &parent1, &parent2, &outcome)?;
    log::debug!("Breeding record:\n{}", record.to_json()?);

    Ok(())
}
