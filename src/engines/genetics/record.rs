use crate::engines::genetics::breeding::{BreedingOutcome, GeneCross};
use crate::engines::genetics::codec::GeneticCodec;
use crate::error::Result;
use crate::types::{Genotype, StatBundle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable history entry for one breeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedingRecord {
    pub parent1_code: String,
    pub parent2_code: String,
    pub child_code: String,
    pub child_stats: StatBundle,
    pub crosses: Vec<GeneCross>,
    pub inheritance_notes: String,
    pub created_at: DateTime<Utc>,
}

impl BreedingRecord {
    pub fn new(
        codec: &GeneticCodec<'_>,
        parent1: &Genotype,
        parent2: &Genotype,
        outcome: &BreedingOutcome,
    ) -> Result<Self> {
        Ok(Self {
            parent1_code: codec.encode(parent1)?,
            parent2_code: codec.encode(parent2)?,
            child_code: outcome.genetic_code.clone(),
            child_stats: outcome.stats.clone(),
            crosses: outcome.crosses.clone(),
            inheritance_notes: outcome.inheritance_summary(),
            created_at: Utc::now(),
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
