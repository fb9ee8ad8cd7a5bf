//! Processor configuration.
//!
//! Only how hard the processor works is configurable. Rock, soil, wood and scope are
//! always derived from the placement itself.

use std::{fs, io, path::Path};

use serde::Deserialize;
use strata_utils::Identifier;
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("../../package-content/strata_config.json5");

/// Failure to load a [`ProcessorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("could not access config file: {0}")]
    Io(#[from] io::Error),
    /// The file is not valid json5 for this schema.
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json5::Error),
    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Tuning for [`BlockReplacementProcessor`](crate::processor::BlockReplacementProcessor).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Positions examined below an origin, the origin included, when looking for rock
    /// and soil.
    pub scan_depth: u32,
    /// Origins a worker cache holds before it is cleared.
    pub cache_capacity: usize,
    /// Namespaces of the structure templates the processor is attached to.
    pub structure_namespaces: Vec<String>,
}

impl ProcessorConfig {
    /// Parses and validates a json5 document. Missing fields take their defaults.
    pub fn from_json5(source: &str) -> Result<Self, ConfigError> {
        let config: ProcessorConfig = serde_json5::from_str(source)?;
        if let Err(err) = config.validate() {
            log::warn!("rejecting processor config: {err}");
            return Err(err);
        }
        Ok(config)
    }

    /// Reads the config at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_json5(&fs::read_to_string(path)?)
    }

    /// Reads the config at `path`, writing the default file first if none exists.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::load(path);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_CONFIG)?;
        log::info!("wrote default processor config to {}", path.display());
        Ok(Self::default())
    }

    /// Checks every field is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=4096).contains(&self.scan_depth) {
            return Err(ConfigError::Invalid("scan_depth must be in range 1..=4096"));
        }
        if !(1..=1_048_576).contains(&self.cache_capacity) {
            return Err(ConfigError::Invalid(
                "cache_capacity must be in range 1..=1048576",
            ));
        }
        if self
            .structure_namespaces
            .iter()
            .any(|namespace| !Identifier::validate_namespace(namespace))
        {
            return Err(ConfigError::Invalid(
                "structure_namespaces must be valid identifier namespaces",
            ));
        }
        Ok(())
    }

    /// True if the processor should run on templates with this identifier.
    #[must_use]
    pub fn applies_to(&self, template: &Identifier) -> bool {
        self.structure_namespaces
            .iter()
            .any(|namespace| template.is_in_namespace(namespace))
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            scan_depth: 64,
            cache_capacity: 2048,
            structure_namespaces: vec!["irons_spellbooks".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_default_matches_default_impl() {
        let bundled = ProcessorConfig::from_json5(DEFAULT_CONFIG).expect("bundled config");
        let default = ProcessorConfig::default();
        assert_eq!(bundled.scan_depth, default.scan_depth);
        assert_eq!(bundled.cache_capacity, default.cache_capacity);
        assert_eq!(bundled.structure_namespaces, default.structure_namespaces);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = ProcessorConfig::from_json5("{ scan_depth: 16 }").expect("partial config");
        assert_eq!(config.scan_depth, 16);
        assert_eq!(config.cache_capacity, 2048);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(matches!(
            ProcessorConfig::from_json5("{ scan_depth: 0 }"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ProcessorConfig::from_json5("{ cache_capacity: 0 }"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ProcessorConfig::from_json5("{ structure_namespaces: ['Bad Name'] }"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ProcessorConfig::from_json5("{ structure_namespaces: [''] }"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ProcessorConfig::from_json5("{ scan_depth: "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn applies_to_configured_namespaces_only() {
        let config = ProcessorConfig::default();
        assert!(config.applies_to(&Identifier::new_static("irons_spellbooks", "mage_tower")));
        assert!(!config.applies_to(&Identifier::vanilla_static("village/plains/house")));
    }

    #[test]
    fn load_or_create_writes_default_file() {
        let dir = std::env::temp_dir().join(format!("strata-config-{}", std::process::id()));
        let path = dir.join("strata_config.json5");
        let _ = fs::remove_file(&path);

        let created = ProcessorConfig::load_or_create(&path).expect("created");
        assert!(path.exists());
        let loaded = ProcessorConfig::load(&path).expect("reloaded");
        assert_eq!(created.scan_depth, loaded.scan_depth);

        let _ = fs::remove_dir_all(&dir);
    }
}
