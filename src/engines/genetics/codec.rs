//! Genetic code: the canonical text form of a genotype.
//!
//! `gene1:s1s2;gene2:s3s4` with genes in catalog order, no whitespace and no
//! trailing separator. Allele symbols are written in the order the genotype
//! holds them.

use crate::catalog::GeneCatalog;
use crate::engines::genetics::phenotype::{resolve_pair, Phenotype};
use crate::error::{CavyError, Result};
use crate::types::{AllelePair, Gene, Genotype};
use serde::{Deserialize, Serialize};

pub const GENE_SEPARATOR: &str = ";";
pub const SYMBOL_SEPARATOR: char = ':';

/// One gene of a decoded code together with its expressed phenotype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedGene {
    pub gene: String,
    pub trait_label: String,
    pub pair: AllelePair,
    pub phenotype: Phenotype,
}

pub struct GeneticCodec<'a> {
    catalog: &'a GeneCatalog,
}

impl<'a> GeneticCodec<'a> {
    pub fn new(catalog: &'a GeneCatalog) -> Self {
        Self { catalog }
    }

    /// Check that every entry names a catalog gene and alleles of that gene.
    pub fn validate(&self, genotype: &Genotype) -> Result<()> {
        for (gene_name, pair) in genotype.iter() {
            let gene = self.catalog.gene(gene_name).ok_or_else(|| {
                CavyError::Encoding(format!("gene '{}' is not in the catalog", gene_name))
            })?;
            for symbol in pair.symbols() {
                if gene.allele(symbol).is_none() {
                    return Err(CavyError::Encoding(format!(
                        "allele '{}' does not belong to gene '{}'",
                        symbol, gene_name
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn encode(&self, genotype: &Genotype) -> Result<String> {
        self.validate(genotype)?;

        let segments: Vec<String> = self
            .catalog
            .genes()
            .iter()
            .filter_map(|gene| {
                genotype
                    .get(&gene.name)
                    .map(|pair| format!("{}{}{}", gene.name, SYMBOL_SEPARATOR, pair))
            })
            .collect();

        Ok(segments.join(GENE_SEPARATOR))
    }

    /// Parse a genetic code. Any malformed segment fails the whole decode.
    pub fn decode(&self, code: &str) -> Result<Genotype> {
        let mut genotype = Genotype::new();
        if code.is_empty() {
            return Ok(genotype);
        }

        for segment in code.split(GENE_SEPARATOR) {
            let (gene_name, block) = segment.split_once(SYMBOL_SEPARATOR).ok_or_else(|| {
                CavyError::Decoding(format!("segment '{}' is missing ':'", segment))
            })?;

            let gene = self.catalog.gene(gene_name).ok_or_else(|| {
                CavyError::Decoding(format!("unknown gene '{}'", gene_name))
            })?;

            let pair = split_symbols(gene, block)?;
            if genotype.insert(gene_name, pair).is_some() {
                return Err(CavyError::Decoding(format!(
                    "gene '{}' appears more than once",
                    gene_name
                )));
            }
        }

        Ok(genotype)
    }

    /// Decode and resolve each gene's phenotype, in catalog order.
    pub fn decode_with_phenotypes(&self, code: &str) -> Result<Vec<DecodedGene>> {
        let genotype = self.decode(code)?;
        let mut decoded = Vec::with_capacity(genotype.len());

        for gene in self.catalog.genes() {
            if let Some(pair) = genotype.get(&gene.name) {
                decoded.push(DecodedGene {
                    gene: gene.name.clone(),
                    trait_label: gene.trait_label.clone(),
                    pair: pair.clone(),
                    phenotype: resolve_pair(self.catalog, &gene.name, pair)?,
                });
            }
        }

        Ok(decoded)
    }
}

/// Split an allele block such as `Bb` into exactly two symbols of `gene`.
fn split_symbols(gene: &Gene, block: &str) -> Result<AllelePair> {
    gene.alleles
        .iter()
        .filter_map(|first| block.strip_prefix(first.symbol.as_str()).map(|rest| (first, rest)))
        .find_map(|(first, rest)| {
            gene.allele(rest)
                .map(|second| AllelePair::new(&first.symbol, &second.symbol))
        })
        .ok_or_else(|| {
            CavyError::Decoding(format!(
                "'{}' is not two allele symbols of gene '{}'",
                block, gene.name
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Allele;

    #[test]
    fn test_multi_character_symbols() {
        let catalog = GeneCatalog::new(vec![Gene::new(
            "pattern",
            "Coat Pattern",
            vec![
                Allele::new("Sp", "Spotted", 2, 5.0),
                Allele::new("st", "Striped", 1, 0.0),
            ],
        )])
        .unwrap();
        let codec = GeneticCodec::new(&catalog);

        let genotype = codec.decode("pattern:stSp").unwrap();
        assert_eq!(genotype.get("pattern"), Some(&AllelePair::new("st", "Sp")));
        assert_eq!(codec.encode(&genotype).unwrap(), "pattern:stSp");
        assert!(codec.decode("pattern:stS").is_err());
    }

    #[test]
    fn test_duplicate_gene_is_rejected() {
        let catalog = GeneCatalog::default_guinea_pig();
        let codec = GeneticCodec::new(&catalog);
        assert!(matches!(
            codec.decode("speed:Ff;speed:ff"),
            Err(CavyError::Decoding(_))
        ));
    }
}
