use super::{
    breeding::BreedingConfig,
    catalog::CatalogConfig,
    stats::StatRulesConfig,
    traits::ConfigSection,
};
use crate::error::CavyError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix for environment overrides, e.g. `CAVY__BREEDING__INFLUENCE_BIAS=0.5`.
pub const ENV_PREFIX: &str = "CAVY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub breeding: BreedingConfig,
    pub stats: StatRulesConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), CavyError> {
        self.breeding.validate()?;
        self.stats.validate()?;
        self.catalog.validate()?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CavyError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CavyError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;

        log::info!(
            "Loaded configuration: {} genes, {} stat rules (v{})",
            config.catalog.genes.len(),
            config.stats.rules.len(),
            config.stats.version
        );
        *self.write() = config;
        Ok(())
    }

    /// Load `path` (if present) and apply `CAVY__SECTION__KEY` environment overrides.
    pub fn load_layered<P: AsRef<Path>>(&self, path: P) -> Result<(), CavyError> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("No configuration file at {}, using defaults", path.display());
        }

        let config: AppConfig = ::config::Config::builder()
            .add_source(
                ::config::File::from(path)
                    .format(::config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        *self.write() = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CavyError> {
        let toml_str = toml::to_string_pretty(&self.get())
            .map_err(|e| CavyError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| CavyError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Apply `f` to a copy and keep it only if it still validates.
    /// The write lock is held throughout so concurrent updates compose.
    pub fn update<F>(&self, f: F) -> Result<(), CavyError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut guard = self.write();
        let mut candidate = guard.clone();
        f(&mut candidate);
        candidate.validate()?;
        *guard = candidate;
        Ok(())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, AppConfig> {
        self.config
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
