use super::traits::ConfigSection;
use crate::error::CavyError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How the effects of several contributing genes fold into one modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombineRule {
    Sum,
    Average,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRule {
    pub stat: String,
    pub genes: Vec<String>,
    pub combine: CombineRule,
}

impl StatRule {
    pub fn new(stat: &str, genes: &[&str], combine: CombineRule) -> Self {
        Self {
            stat: stat.to_string(),
            genes: genes.iter().map(|g| g.to_string()).collect(),
            combine,
        }
    }
}

/// Versioned gene -> stat contribution table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRulesConfig {
    pub version: u32,
    pub rules: Vec<StatRule>,
}

impl Default for StatRulesConfig {
    fn default() -> Self {
        Self {
            version: 1,
            rules: vec![
                StatRule::new("speed", &["speed"], CombineRule::Sum),
                StatRule::new("endurance", &["endurance"], CombineRule::Sum),
            ],
        }
    }
}

impl ConfigSection for StatRulesConfig {
    fn section_name() -> &'static str {
        "stats"
    }

    fn validate(&self) -> Result<(), CavyError> {
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if rule.stat.trim().is_empty() {
                return Err(CavyError::Configuration(
                    "Stat names must not be empty".to_string()
                ));
            }
            if !seen.insert(rule.stat.as_str()) {
                return Err(CavyError::Configuration(format!(
                    "Stat '{}' is declared more than once",
                    rule.stat
                )));
            }
            if rule.genes.is_empty() {
                return Err(CavyError::Configuration(format!(
                    "Stat '{}' has no contributing genes",
                    rule.stat
                )));
            }
        }
        Ok(())
    }
}
