use crate::{Config, ConfigError};
use parking_lot::RwLock;
use std::path::PathBuf;

#[derive(Default)]
pub struct MemoryConfigRepo {
    config: RwLock<Option<Config>>,
}

impl MemoryConfigRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config: RwLock::new(Some(config)),
        }
    }

    pub fn clear(&self) {
        *self.config.write() = None;
    }
}

impl crate::repo::ConfigRepository for MemoryConfigRepo {
    fn load(&self) -> Result<Config, ConfigError> {
        self.config.read().clone().ok_or(ConfigError::NotFound {
            path: PathBuf::from("<memory>"),
        })
    }

    fn save(&self, config: &Config) -> Result<(), ConfigError> {
        *self.config.write() = Some(config.clone());
        Ok(())
    }
}
