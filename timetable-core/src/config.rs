//! Viewer configuration at ~/.config/timetable/config.toml

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::Dataset;
use crate::error::{TimetableError, TimetableResult};
use crate::group::GroupId;
use crate::selection::ViewMode;
use crate::store::ScheduleStore;

/// Values can also come from `TIMETABLE_*` environment variables,
/// e.g. `TIMETABLE_DATASET=~/schedule.json`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct TimetableConfig {
    /// Dataset JSON file. None uses the bundled sample schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_group: Option<GroupId>,

    #[serde(default)]
    pub default_view: ViewMode,
}

impl TimetableConfig {
    pub fn config_path() -> TimetableResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| TimetableError::Config("Could not determine config directory".into()))?
            .join("timetable");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented template first
    /// if no config file exists yet.
    pub fn load() -> TimetableResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> TimetableResult<Self> {
        let config: TimetableConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("TIMETABLE"))
            .build()
            .map_err(|e| TimetableError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| TimetableError::Config(e.to_string()))?;

        debug!(path = %path.display(), ?config, "Loaded config");
        Ok(config)
    }

    /// Dataset path with `~` expanded.
    pub fn dataset_path(&self) -> Option<PathBuf> {
        self.dataset.as_ref().map(|p| {
            let expanded = shellexpand::tilde(&p.to_string_lossy()).into_owned();
            PathBuf::from(expanded)
        })
    }

    /// Build the store this config points at.
    pub fn load_store(&self) -> TimetableResult<ScheduleStore> {
        match self.dataset_path() {
            Some(path) => ScheduleStore::from_dataset(Dataset::from_path(&path)?),
            None => ScheduleStore::sample(),
        }
    }

    /// Create a config file with all options commented out.
    pub fn create_default_config(path: &Path) -> TimetableResult<()> {
        let contents = "\
# timetable configuration

# Schedule dataset (JSON). Leave unset to use the bundled sample:
# dataset = \"~/schedule.json\"

# Group shown when --group is not given:
# default_group = \"ИВТ-21\"

# Initial view, \"day\" or \"week\":
# default_view = \"day\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TimetableError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| TimetableError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        TimetableConfig::create_default_config(&path).unwrap();
        let config = TimetableConfig::load_from(&path).unwrap();

        assert!(config.dataset.is_none());
        assert!(config.default_group.is_none());
        assert_eq!(config.default_view, ViewMode::Day);
    }

    #[test]
    fn reads_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "dataset = \"/srv/schedule.json\"\ndefault_group = \"ИВТ-21\"\ndefault_view = \"week\"\n",
        )
        .unwrap();

        let config = TimetableConfig::load_from(&path).unwrap();
        assert_eq!(config.dataset, Some(PathBuf::from("/srv/schedule.json")));
        assert_eq!(config.default_group.as_deref(), Some("ИВТ-21"));
        assert_eq!(config.default_view, ViewMode::Week);
    }

    #[test]
    fn invalid_view_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_view = \"month\"\n").unwrap();

        let err = TimetableConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, TimetableError::Config(_)));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TimetableConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(config.dataset.is_none());
    }

    #[test]
    fn dataset_path_expands_tilde() {
        let config = TimetableConfig {
            dataset: Some(PathBuf::from("~/schedule.json")),
            ..Default::default()
        };
        let expanded = config.dataset_path().unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.ends_with("schedule.json"));
    }

    #[test]
    fn load_store_uses_sample_without_dataset() {
        let store = TimetableConfig::default().load_store().unwrap();
        assert_eq!(store.weeks().len(), 4);
    }

    #[test]
    fn load_store_reads_configured_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.json");
        std::fs::write(
            &path,
            r#"{ "weeks": [{ "id": 7, "start_date": "2025-02-03", "end_date": "2025-02-08" }] }"#,
        )
        .unwrap();

        let config = TimetableConfig {
            dataset: Some(path),
            ..Default::default()
        };
        let store = config.load_store().unwrap();
        assert!(store.get_week(7).is_some());
    }
}
