use crate::catalog::GeneCatalog;
use crate::config::{BreedingConfig, StatRulesConfig};
use crate::engines::genetics::{
    codec::GeneticCodec,
    operators::trial_seed,
    phenotype::{resolve_pair, Phenotype},
    punnett::{self, PunnettResult},
    stats::StatDeriver,
};
use crate::error::{CavyError, Result};
use crate::types::{AllelePair, Genotype, ParentSlot, StatBundle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The cross of one gene shared by both parents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneCross {
    pub gene: String,
    pub parent1: AllelePair,
    pub parent2: AllelePair,
    pub punnett: PunnettResult,
    pub inherited: AllelePair,
    pub phenotype: Phenotype,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedingOutcome {
    pub child: Genotype,
    pub genetic_code: String,
    pub stats: StatBundle,
    /// Shared genes in catalog order.
    pub crosses: Vec<GeneCross>,
    pub notes: Vec<String>,
}

impl BreedingOutcome {
    pub fn cross(&self, gene: &str) -> Option<&GeneCross> {
        self.crosses.iter().find(|c| c.gene == gene)
    }

    pub fn punnett_results(&self) -> BTreeMap<&str, &PunnettResult> {
        self.crosses
            .iter()
            .map(|c| (c.gene.as_str(), &c.punnett))
            .collect()
    }

    pub fn inheritance_summary(&self) -> String {
        self.notes.join(" | ")
    }
}

pub struct BreedingEngine<'a> {
    catalog: &'a GeneCatalog,
    codec: GeneticCodec<'a>,
    stats: StatDeriver<'a>,
}

impl<'a> BreedingEngine<'a> {
    pub fn new(
        catalog: &'a GeneCatalog,
        rules: &StatRulesConfig,
        config: &BreedingConfig,
    ) -> Result<Self> {
        Ok(Self {
            catalog,
            codec: GeneticCodec::new(catalog),
            stats: StatDeriver::new(catalog, rules, config)?,
        })
    }

    pub fn codec(&self) -> &GeneticCodec<'a> {
        &self.codec
    }

    pub fn stat_deriver(&self) -> &StatDeriver<'a> {
        &self.stats
    }

    /// Breed one child from two parent genotypes.
    ///
    /// Only genes both parents carry are crossed; a gene one parent lacks is
    /// skipped and noted. Each shared gene inherits one of the four raw
    /// Punnett combinations with equal probability.
    pub fn breed<R: Rng>(
        &self,
        parent1: &Genotype,
        parent2: &Genotype,
        rng: &mut R,
    ) -> Result<BreedingOutcome> {
        Self::require_genetics(parent1, parent2)?;
        self.codec.validate(parent1)?;
        self.codec.validate(parent2)?;

        let mut child = Genotype::new();
        let mut crosses = Vec::new();
        let mut notes = Vec::new();

        for gene in self.catalog.genes() {
            let (p1, p2) = match (parent1.get(&gene.name), parent2.get(&gene.name)) {
                (Some(p1), Some(p2)) => (p1, p2),
                (None, None) => continue,
                (None, Some(_)) | (Some(_), None) => {
                    let missing = if parent1.contains(&gene.name) {
                        ParentSlot::Second
                    } else {
                        ParentSlot::First
                    };
                    log::warn!("Skipping gene '{}': missing in {}", gene.name, missing);
                    notes.push(format!(
                        "{}: skipped: missing in {}",
                        gene.trait_label, missing
                    ));
                    continue;
                }
            };

            let result = punnett::calculate(p1, p2);
            let inherited = result.sample(rng).clone();
            let phenotype = resolve_pair(self.catalog, &gene.name, &inherited)?;
            log::debug!(
                "{}: {} x {} -> {} ({})",
                gene.name, p1, p2, inherited, phenotype.inheritance
            );

            notes.push(format!(
                "{}: {} -> {} ({}) from {}/{} x {}/{}",
                gene.trait_label,
                inherited,
                phenotype.label,
                phenotype.inheritance,
                p1.first,
                p1.second,
                p2.first,
                p2.second
            ));
            child.insert(&gene.name, inherited.clone());
            crosses.push(GeneCross {
                gene: gene.name.clone(),
                parent1: p1.clone(),
                parent2: p2.clone(),
                punnett: result,
                inherited,
                phenotype,
            });
        }

        let genetic_code = self.codec.encode(&child)?;
        let stats = self.stats.derive_stats(&child, rng)?;
        log::info!(
            "Bred child {} from {} shared genes (score {:.1})",
            genetic_code,
            crosses.len(),
            stats.genetic_score()
        );

        Ok(BreedingOutcome {
            child,
            genetic_code,
            stats,
            crosses,
            notes,
        })
    }

    /// Run `trials` independent breedings in parallel. Trial `i` uses its own
    /// generator seeded from `seed` and `i`, so the batch is reproducible.
    pub fn breed_many(
        &self,
        parent1: &Genotype,
        parent2: &Genotype,
        trials: usize,
        seed: u64,
    ) -> Result<Vec<BreedingOutcome>> {
        Self::require_genetics(parent1, parent2)?;

        (0..trials)
            .into_par_iter()
            .map(|trial| {
                let mut rng = StdRng::seed_from_u64(trial_seed(seed, trial));
                self.breed(parent1, parent2, &mut rng)
            })
            .collect()
    }

    /// Punnett preview of a single gene without breeding.
    pub fn cross_gene(
        &self,
        gene: &str,
        parent1: &Genotype,
        parent2: &Genotype,
    ) -> Result<PunnettResult> {
        if self.catalog.gene(gene).is_none() {
            return Err(CavyError::Encoding(format!("gene '{}' is not in the catalog", gene)));
        }
        let p1 = parent1
            .get(gene)
            .ok_or(CavyError::MissingGenetics { parent: ParentSlot::First })?;
        let p2 = parent2
            .get(gene)
            .ok_or(CavyError::MissingGenetics { parent: ParentSlot::Second })?;
        Ok(punnett::calculate(p1, p2))
    }

    fn require_genetics(parent1: &Genotype, parent2: &Genotype) -> Result<()> {
        if parent1.is_empty() {
            return Err(CavyError::MissingGenetics { parent: ParentSlot::First });
        }
        if parent2.is_empty() {
            return Err(CavyError::MissingGenetics { parent: ParentSlot::Second });
        }
        Ok(())
    }
}

/// Tally the canonical child genotypes of `gene` across outcomes.
pub fn genotype_frequencies(outcomes: &[BreedingOutcome], gene: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for pair in outcomes.iter().filter_map(|o| o.child.get(gene)) {
        *counts.entry(pair.canonical()).or_insert(0) += 1;
    }
    counts
}
