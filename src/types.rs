use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A variant form of a gene.
///
/// By convention an uppercase symbol marks a dominant allele and a lowercase
/// one a recessive allele, but only `dominance` decides expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allele {
    pub symbol: String,
    pub name: String,
    pub dominance: i32,
    pub effect: f64,
}

impl Allele {
    pub fn new(symbol: &str, name: &str, dominance: i32, effect: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            dominance,
            effect,
        }
    }
}

/// Catalog definition of a gene and the alleles it can carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gene {
    pub name: String,
    #[serde(rename = "trait")]
    pub trait_label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub default_allele: Option<String>,
    pub alleles: Vec<Allele>,
}

impl Gene {
    pub fn new(name: &str, trait_label: &str, alleles: Vec<Allele>) -> Self {
        Self {
            name: name.to_string(),
            trait_label: trait_label.to_string(),
            description: String::new(),
            default_allele: None,
            alleles,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn allele(&self, symbol: &str) -> Option<&Allele> {
        self.alleles.iter().find(|a| a.symbol == symbol)
    }
}

/// Two allele symbols carried for one gene, in the order the caller supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AllelePair {
    pub first: String,
    pub second: String,
}

impl AllelePair {
    pub fn new(first: &str, second: &str) -> Self {
        Self {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    pub fn is_homozygous(&self) -> bool {
        self.first == self.second
    }

    /// Order-independent key: "bB" and "Bb" both map to "Bb".
    pub fn canonical(&self) -> String {
        if self.first <= self.second {
            format!("{}{}", self.first, self.second)
        } else {
            format!("{}{}", self.second, self.first)
        }
    }

    pub fn symbols(&self) -> [&str; 2] {
        [&self.first, &self.second]
    }
}

impl fmt::Display for AllelePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

/// Diploid genotype: at most one allele pair per gene name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genotype {
    entries: BTreeMap<String, AllelePair>,
}

impl Genotype {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the pair for `gene`, returning the previous pair.
    pub fn insert(&mut self, gene: &str, pair: AllelePair) -> Option<AllelePair> {
        self.entries.insert(gene.to_string(), pair)
    }

    pub fn with(mut self, gene: &str, first: &str, second: &str) -> Self {
        self.insert(gene, AllelePair::new(first, second));
        self
    }

    pub fn get(&self, gene: &str) -> Option<&AllelePair> {
        self.entries.get(gene)
    }

    pub fn contains(&self, gene: &str) -> bool {
        self.entries.contains_key(gene)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in gene-name order. Use the catalog for declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AllelePair)> {
        self.entries.iter().map(|(gene, pair)| (gene.as_str(), pair))
    }
}

/// Which side of a cross an input came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParentSlot {
    First,
    Second,
}

impl fmt::Display for ParentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParentSlot::First => write!(f, "parent 1"),
            ParentSlot::Second => write!(f, "parent 2"),
        }
    }
}

/// Gameplay stats derived from a genotype, each in `0..=100`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBundle {
    stats: BTreeMap<String, u8>,
}

impl StatBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, stat: &str, value: u8) {
        self.stats.insert(stat.to_string(), value.min(100));
    }

    pub fn get(&self, stat: &str) -> Option<u8> {
        self.stats.get(stat).copied()
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.stats.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Mean of all stats, 0 for an empty bundle.
    pub fn genetic_score(&self) -> f64 {
        if self.stats.is_empty() {
            return 0.0;
        }
        let total: u32 = self.stats.values().map(|v| *v as u32).sum();
        total as f64 / self.stats.len() as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    First,
    Second,
    Tie,
}

/// Side-by-side comparison of two stat bundles by genetic score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatComparison {
    pub first_score: f64,
    pub second_score: f64,
    pub winner: Winner,
    pub score_difference: f64,
}

impl StatComparison {
    pub fn between(first: &StatBundle, second: &StatBundle) -> Self {
        let first_score = first.genetic_score();
        let second_score = second.genetic_score();
        let winner = match first_score.partial_cmp(&second_score) {
            Some(std::cmp::Ordering::Greater) => Winner::First,
            Some(std::cmp::Ordering::Less) => Winner::Second,
            _ => Winner::Tie,
        };
        Self {
            first_score,
            second_score,
            winner,
            score_difference: (first_score - second_score).abs(),
        }
    }
}
