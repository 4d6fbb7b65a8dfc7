use crate::catalog::GeneCatalog;
use crate::error::{CavyError, Result};
use crate::types::{Allele, AllelePair};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a phenotype was resolved from its two alleles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Inheritance {
    Homozygous,
    Dominant { dominant: String, recessive: String },
    CoDominant,
}

impl Inheritance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Inheritance::Homozygous => "homozygous",
            Inheritance::Dominant { .. } => "dominant",
            Inheritance::CoDominant => "co-dominant",
        }
    }
}

impl fmt::Display for Inheritance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phenotype {
    pub label: String,
    pub effect: f64,
    pub inheritance: Inheritance,
}

/// Resolve the observable trait of an allele pair.
///
/// Identical alleles are homozygous. Otherwise the strictly higher
/// dominance rank wins outright; equal ranks blend into a co-dominant
/// phenotype whose effect is the mean of both effects.
pub fn get_phenotype(allele1: &Allele, allele2: &Allele) -> Phenotype {
    if allele1.symbol == allele2.symbol {
        return Phenotype {
            label: allele1.name.clone(),
            effect: allele1.effect,
            inheritance: Inheritance::Homozygous,
        };
    }

    let (dominant, recessive) = match allele1.dominance.cmp(&allele2.dominance) {
        std::cmp::Ordering::Greater => (allele1, allele2),
        std::cmp::Ordering::Less => (allele2, allele1),
        std::cmp::Ordering::Equal => {
            return Phenotype {
                label: format!("{}/{}", allele1.name, allele2.name),
                effect: (allele1.effect + allele2.effect) / 2.0,
                inheritance: Inheritance::CoDominant,
            };
        }
    };

    Phenotype {
        label: dominant.name.clone(),
        effect: dominant.effect,
        inheritance: Inheritance::Dominant {
            dominant: dominant.symbol.clone(),
            recessive: recessive.symbol.clone(),
        },
    }
}

/// Look both symbols up in `gene` and resolve their phenotype.
pub fn resolve_pair(catalog: &GeneCatalog, gene: &str, pair: &AllelePair) -> Result<Phenotype> {
    let first = lookup(catalog, gene, &pair.first)?;
    let second = lookup(catalog, gene, &pair.second)?;
    Ok(get_phenotype(first, second))
}

fn lookup<'c>(catalog: &'c GeneCatalog, gene: &str, symbol: &str) -> Result<&'c Allele> {
    catalog.allele(gene, symbol).ok_or_else(|| {
        CavyError::Encoding(format!(
            "allele '{}' does not belong to gene '{}'",
            symbol, gene
        ))
    })
}
