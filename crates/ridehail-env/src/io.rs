use std::{fs, path::Path};

use crate::{EnvConfig, EnvError};

/// Load and validate an environment configuration from YAML on disk.
pub fn load_config(path: impl AsRef<Path>) -> Result<EnvConfig, EnvError> {
    let yaml = fs::read_to_string(path)?;
    let config: EnvConfig = serde_yaml::from_str(&yaml)?;
    config.validate()?;
    Ok(config)
}

/// Serialize and write an environment configuration to YAML.
pub fn save_config(path: impl AsRef<Path>, config: &EnvConfig) -> Result<(), EnvError> {
    let yaml = serde_yaml::to_string(config)?;
    fs::write(path, yaml)?;
    Ok(())
}
