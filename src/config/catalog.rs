use super::traits::ConfigSection;
use crate::catalog::{defaults, GeneCatalog};
use crate::error::CavyError;
use crate::types::Gene;
use serde::{Deserialize, Serialize};

/// Gene and allele definitions in catalog declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub genes: Vec<Gene>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            genes: defaults::guinea_pig_genes(),
        }
    }
}

impl ConfigSection for CatalogConfig {
    fn section_name() -> &'static str {
        "catalog"
    }

    fn validate(&self) -> Result<(), CavyError> {
        GeneCatalog::new(self.genes.clone()).map(|_| ())
    }
}
