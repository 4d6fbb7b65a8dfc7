use crate::config::CatalogConfig;
use crate::error::{CavyError, Result};
use crate::types::{Allele, Gene};
use std::collections::{HashMap, HashSet};

use super::defaults;

/// Read-only gene/allele reference data, indexed by gene name.
///
/// Genes keep their declaration order; the genetic code and every
/// per-gene report follow it.
#[derive(Debug, Clone)]
pub struct GeneCatalog {
    genes: Vec<Gene>,
    index: HashMap<String, usize>,
}

impl GeneCatalog {
    pub fn new(genes: Vec<Gene>) -> Result<Self> {
        if genes.is_empty() {
            return Err(CavyError::Catalog("catalog has no genes".to_string()));
        }

        let mut index = HashMap::with_capacity(genes.len());
        for (position, gene) in genes.iter().enumerate() {
            Self::validate_gene(gene)?;
            if index.insert(gene.name.clone(), position).is_some() {
                return Err(CavyError::Catalog(format!(
                    "gene '{}' is declared more than once",
                    gene.name
                )));
            }
        }

        Ok(Self { genes, index })
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        Self::new(config.genes.clone())
    }

    pub fn default_guinea_pig() -> Self {
        let genes = defaults::guinea_pig_genes();
        let index = genes
            .iter()
            .enumerate()
            .map(|(position, gene)| (gene.name.clone(), position))
            .collect();
        Self { genes, index }
    }

    fn validate_gene(gene: &Gene) -> Result<()> {
        if gene.name.is_empty() || gene.name.contains([':', ';']) {
            return Err(CavyError::Catalog(format!(
                "invalid gene name '{}'",
                gene.name
            )));
        }
        if gene.alleles.is_empty() {
            return Err(CavyError::Catalog(format!(
                "gene '{}' has no alleles",
                gene.name
            )));
        }

        let mut symbols = HashSet::new();
        for allele in &gene.alleles {
            if allele.symbol.is_empty() || allele.symbol.contains([':', ';']) {
                return Err(CavyError::Catalog(format!(
                    "gene '{}' has an invalid allele symbol '{}'",
                    gene.name, allele.symbol
                )));
            }
            if !symbols.insert(allele.symbol.as_str()) {
                return Err(CavyError::Catalog(format!(
                    "gene '{}' declares allele '{}' twice",
                    gene.name, allele.symbol
                )));
            }
        }

        // A symbol that prefixes another would make concatenated pairs ambiguous.
        for a in &gene.alleles {
            for b in &gene.alleles {
                if a.symbol.len() < b.symbol.len() && b.symbol.starts_with(&a.symbol) {
                    return Err(CavyError::Catalog(format!(
                        "gene '{}' allele '{}' is a prefix of '{}'",
                        gene.name, a.symbol, b.symbol
                    )));
                }
            }
        }

        if let Some(default) = &gene.default_allele {
            if gene.allele(default).is_none() {
                return Err(CavyError::Catalog(format!(
                    "gene '{}' names unknown default allele '{}'",
                    gene.name, default
                )));
            }
        }
        Ok(())
    }

    pub fn gene(&self, name: &str) -> Option<&Gene> {
        self.index.get(name).map(|&i| &self.genes[i])
    }

    pub fn allele(&self, gene: &str, symbol: &str) -> Option<&Allele> {
        self.gene(gene).and_then(|g| g.allele(symbol))
    }

    /// Declared default, or the first allele when none is declared.
    pub fn default_allele(&self, gene: &str) -> Option<&Allele> {
        let gene = self.gene(gene)?;
        match &gene.default_allele {
            Some(symbol) => gene.allele(symbol),
            None => gene.alleles.first(),
        }
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}
