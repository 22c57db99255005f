use crate::{Config, ConfigError};

pub mod memory;

/// Where the current configuration lives. Every `load` must read fresh state.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config, ConfigError>;
    fn save(&self, config: &Config) -> Result<(), ConfigError>;
}
