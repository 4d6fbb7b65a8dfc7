use super::traits::ConfigSection;
use crate::error::CavyError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BreedingConfig {
    /// Stat value before genetics and noise are applied.
    pub baseline: f64,
    /// Share of a stat decided by genetics, the rest is noise.
    pub influence_bias: f64,
    /// Stat offsets are drawn from `-noise_range..=noise_range`.
    pub noise_range: i32,
    /// Genes given to founders; `None` means every catalog gene.
    pub random_gene_count: Option<usize>,
    pub seed: Option<u64>,
}

impl Default for BreedingConfig {
    fn default() -> Self {
        Self {
            baseline: 50.0,
            influence_bias: 0.7,
            noise_range: 5,
            random_gene_count: None,
            seed: None,
        }
    }
}

impl ConfigSection for BreedingConfig {
    fn section_name() -> &'static str {
        "breeding"
    }

    fn validate(&self) -> Result<(), CavyError> {
        if !(0.0..=100.0).contains(&self.baseline) {
            return Err(CavyError::Configuration(
                "Baseline must be between 0 and 100".to_string()
            ));
        }
        if !(0.0..=1.0).contains(&self.influence_bias) {
            return Err(CavyError::Configuration(
                "Influence bias must be between 0 and 1".to_string()
            ));
        }
        if !(0..=50).contains(&self.noise_range) {
            return Err(CavyError::Configuration(
                "Noise range must be between 0 and 50".to_string()
            ));
        }
        if self.random_gene_count == Some(0) {
            return Err(CavyError::Configuration(
                "Random gene count must be at least 1 when set".to_string()
            ));
        }
        Ok(())
    }
}
