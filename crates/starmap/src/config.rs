//! Host settings. Loaded from config.ron at startup.

use procgen::GeneratorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for one generator run. Loaded from `config.ron` in the current directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarmapConfig {
    /// Fixed seed for reproducible catalogs. A fresh seed is picked when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Frequency table in JSON form.
    #[serde(default = "default_table_path")]
    pub table_path: PathBuf,
    /// Directory the catalog exports are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// System to lay out after the catalog is built (0 is the home star).
    #[serde(default = "default_open_system")]
    pub open_system: Option<usize>,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

fn default_table_path() -> PathBuf {
    PathBuf::from("data").join("spectral_classes.json")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("starmap_logs")
}
fn default_open_system() -> Option<usize> {
    Some(0)
}

impl Default for StarmapConfig {
    fn default() -> Self {
        Self {
            seed: None,
            table_path: default_table_path(),
            output_dir: default_output_dir(),
            open_system: default_open_system(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl StarmapConfig {
    /// Load config from `config.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if let Ok(data) = std::fs::read_to_string(path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    /// Whether a `config.ron` exists to load from.
    pub fn exists() -> bool {
        config_path().exists()
    }

    /// Save current config to `config.ron`. Logs on error.
    pub fn save(&self) {
        self.save_to(&config_path());
    }

    /// Save to `path`. Returns whether the file was written; failures are logged.
    pub fn save_to(&self, path: &Path) -> bool {
        match ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            Ok(s) => match std::fs::write(path, s) {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("Could not write config to {:?}: {}", path, e);
                    false
                }
            },
            Err(e) => {
                log::warn!("Could not serialize config: {}", e);
                false
            }
        }
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join("config.ron")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let config: StarmapConfig =
            ron::from_str("(seed: Some(42), generator: (num_stars: 12, min_separation: 150.0))")
                .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.generator.num_stars, 12);
        assert_eq!(config.generator.min_separation, 150.0);
        assert_eq!(config.generator.sphere_radius, 995.0);
        assert_eq!(config.table_path, default_table_path());
        assert_eq!(config.open_system, Some(0));
    }

    #[test]
    fn default_config_round_trips_through_ron() {
        let config = StarmapConfig::default();
        let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default()).unwrap();
        let back: StarmapConfig = ron::from_str(&text).unwrap();
        assert_eq!(back.generator, config.generator);
        assert_eq!(back.output_dir, config.output_dir);
    }

    #[test]
    fn saved_config_loads_back() {
        let path = std::env::temp_dir().join(format!("starmap_config_{}.ron", std::process::id()));
        let config = StarmapConfig {
            seed: Some(9),
            ..Default::default()
        };
        assert!(config.save_to(&path));
        let back = StarmapConfig::load_from(&path);
        assert_eq!(back.seed, Some(9));
        assert_eq!(back.generator, config.generator);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unwritable_path_reports_failure() {
        let path = Path::new("definitely/not/here/config.ron");
        assert!(!StarmapConfig::default().save_to(path));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = StarmapConfig::load_from(Path::new("definitely/not/here/config.ron"));
        assert_eq!(config.generator, GeneratorConfig::default());
        assert!(config.seed.is_none());
    }
}
