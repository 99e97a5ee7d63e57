use crate::error::{CropCastError, Result};
use crate::logic::scoring::engine::DEFAULT_DATA_QUALITY;
use crate::models::Coordinate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
}

/// Location used when none is given on the command line.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LocationConfig {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationConfig {
    pub fn coordinate(&self) -> Result<Coordinate> {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Pick the location to use: all of `lat`, `lon` and `name` when given,
    /// this config when none are. Mixing the two is rejected so a coordinate
    /// is never paired with another place's name.
    pub fn resolve(
        &self,
        lat: Option<f64>,
        lon: Option<f64>,
        name: Option<&str>,
    ) -> Result<(Coordinate, String)> {
        match (lat, lon, name) {
            (Some(lat), Some(lon), Some(name)) => {
                Ok((Coordinate::new(lat, lon)?, name.trim().to_string()))
            }
            (None, None, None) => Ok((self.coordinate()?, self.name.clone())),
            _ => Err(CropCastError::Config(
                "latitude, longitude and name must be given together".into(),
            )),
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            name: "New Delhi, Delhi".into(),
            latitude: 28.61,
            longitude: 77.21,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScoringConfig {
    #[serde(default = "default_data_quality")]
    pub data_quality: u8,
}

fn default_data_quality() -> u8 {
    DEFAULT_DATA_QUALITY
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            data_quality: DEFAULT_DATA_QUALITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SourcesConfig {
    /// Captured provider readings (JSON or YAML).
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            snapshot: None,
            enabled: true,
        }
    }
}

impl Config {
    /// Load from the override path, or the first config found in the standard
    /// locations. With no file anywhere the defaults are used.
    pub fn load(config_override: Option<&Path>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(CropCastError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p.to_path_buf()
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| CropCastError::Config(format!("Failed to read config: {}", e)))?;

        let config = Self::parse(&config_str)?;
        tracing::debug!(path = %config_path.display(), "Loaded config");
        Ok(config)
    }

    /// Parse YAML after substituting `${VAR}` references from the environment.
    pub fn parse(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;
        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| CropCastError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.location.coordinate()?;
        if self.scoring.data_quality > 100 {
            return Err(CropCastError::Config(format!(
                "scoring.data_quality must be 0-100, got {}",
                self.scoring.data_quality
            )));
        }
        Ok(())
    }

    /// Snapshot path to read, if sources are enabled and one is configured.
    pub fn snapshot_path(&self) -> Option<&Path> {
        if self.sources.enabled {
            self.sources.snapshot.as_deref()
        } else {
            None
        }
    }

    /// First existing config.yaml in ./config or the XDG config directory.
    fn find_config_path() -> Option<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::config_dir()
            .map(|dir| dir.join("cropcast").join("config.yaml"))
            .filter(|p| p.exists())
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| CropCastError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}
