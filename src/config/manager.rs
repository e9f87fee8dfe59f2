use super::{analysis::AnalysisConfig, membership::MembershipConfig, traits::ConfigSection};
use crate::error::{FuzzyevalError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `FUZZYEVAL__ANALYSIS__ROC_STEPS=200`
pub const ENV_PREFIX: &str = "FUZZYEVAL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub membership: MembershipConfig,
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        self.membership.validate()?;
        self.analysis.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Layer defaults, an optional TOML/JSON file and environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?);

        if let Some(path) = path {
            if !path.exists() {
                return Err(FuzzyevalError::NotFound {
                    path: path.display().to_string(),
                });
            }
            log::info!("Loading configuration from {}", path.display());
            builder = builder.add_source(config::File::from(path.to_path_buf()));
        }

        let config: AppConfig = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        log::debug!(
            "Configuration sections: {}, {}",
            MembershipConfig::section_name(),
            AnalysisConfig::section_name()
        );

        Ok(Self { config })
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_str = toml::to_string_pretty(&self.config)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    pub fn update<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut updated = self.config.clone();
        f(&mut updated);
        updated.validate()?;
        self.config = updated;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
