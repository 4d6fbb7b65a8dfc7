pub mod traits;
pub mod breeding;
pub mod stats;
pub mod catalog;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use breeding::BreedingConfig;
pub use stats::{CombineRule, StatRule, StatRulesConfig};
pub use catalog::CatalogConfig;
pub use traits::ConfigSection;
