use crate::catalog::GeneCatalog;
use crate::config::{BreedingConfig, CombineRule, StatRule, StatRulesConfig};
use crate::engines::genetics::operators::stat_offset;
use crate::engines::genetics::phenotype::resolve_pair;
use crate::error::{CavyError, Result};
use crate::types::{Genotype, StatBundle};
use rand::Rng;

/// Turns a genotype into gameplay stats.
///
/// `stat = clamp(baseline + modifier * influence_bias + offset, 0, 100)` where
/// the modifier folds the phenotype effects of the stat's contributing genes
/// and the offset is an independent draw per stat.
#[derive(Debug, Clone)]
pub struct StatDeriver<'a> {
    catalog: &'a GeneCatalog,
    rules: StatRulesConfig,
    baseline: f64,
    influence_bias: f64,
    noise_range: i32,
}

impl<'a> StatDeriver<'a> {
    pub fn new(
        catalog: &'a GeneCatalog,
        rules: &StatRulesConfig,
        config: &BreedingConfig,
    ) -> Result<Self> {
        for rule in &rules.rules {
            if let Some(missing) = rule.genes.iter().find(|g| catalog.gene(g).is_none()) {
                return Err(CavyError::Configuration(format!(
                    "stat '{}' references unknown gene '{}'",
                    rule.stat, missing
                )));
            }
        }

        Ok(Self {
            catalog,
            rules: rules.clone(),
            baseline: config.baseline,
            influence_bias: config.influence_bias,
            noise_range: config.noise_range,
        })
    }

    pub fn rules(&self) -> &StatRulesConfig {
        &self.rules
    }

    /// Combined phenotype effect of the rule's genes present in `genotype`.
    /// Genes the genotype lacks do not contribute.
    pub fn genetic_modifier(&self, rule: &StatRule, genotype: &Genotype) -> Result<f64> {
        let mut effects = Vec::with_capacity(rule.genes.len());
        for gene in &rule.genes {
            if let Some(pair) = genotype.get(gene) {
                effects.push(resolve_pair(self.catalog, gene, pair)?.effect);
            }
        }

        if effects.is_empty() {
            return Ok(0.0);
        }
        let total: f64 = effects.iter().sum();
        Ok(match rule.combine {
            CombineRule::Sum => total,
            CombineRule::Average => total / effects.len() as f64,
        })
    }

    pub fn derive_stats<R: Rng>(&self, genotype: &Genotype, rng: &mut R) -> Result<StatBundle> {
        let mut bundle = StatBundle::new();

        for rule in &self.rules.rules {
            let modifier = self.genetic_modifier(rule, genotype)?;
            let offset = stat_offset(self.noise_range, rng);
            let raw = self.baseline + modifier * self.influence_bias + offset as f64;
            // Fractional stats truncate toward zero.
            let value = raw.clamp(0.0, 100.0) as u8;

            log::debug!(
                "{}: modifier {:.1}, offset {}, value {}",
                rule.stat, modifier, offset, value
            );
            bundle.set(&rule.stat, value);
        }

        log::info!(
            "Derived stats [{}] (v{} rules)",
            bundle
                .iter()
                .map(|(stat, value)| format!("{}={}", stat, value))
                .collect::<Vec<_>>()
                .join(", "),
            self.rules.version
        );
        Ok(bundle)
    }
}
