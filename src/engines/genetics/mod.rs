pub mod codec;
pub mod punnett;
pub mod phenotype;
pub mod operators;
pub mod stats;
pub mod breeding;
pub mod record;

pub use codec::{DecodedGene, GeneticCodec};
pub use punnett::{calculate as calculate_punnett, GenotypeProbability, PunnettResult};
pub use phenotype::{get_phenotype, resolve_pair, Inheritance, Phenotype};
pub use operators::random_genotype as generate_random_genotype;
pub use stats::StatDeriver;
pub use breeding::{genotype_frequencies, BreedingEngine, BreedingOutcome, GeneCross};
pub use record::BreedingRecord;
