//! Clubsite configuration file handling

use anyhow::{Context, Result};
use clubsite_content::{DataSource, SiteIdentity};
use clubsite_core::Rect;
use clubsite_theme::{
    EnvPreference, FileStorage, FixedPreference, RootClassList, StyleMarker, ThemeOptions,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Config file looked up in the working directory when none is given
pub const CONFIG_FILE: &str = "clubsite.toml";

/// Top-level configuration (clubsite.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteIdentity,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub reveal: RevealSettings,

    /// Directory relative paths are resolved against
    #[serde(skip)]
    base_dir: PathBuf,
}

/// Where site data lives
#[derive(Debug, Deserialize, Serialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("public/data")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

/// Which scheme to use when nothing has been stored
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredScheme {
    /// Follow the environment
    #[default]
    System,
    Light,
    Dark,
}

/// Theme configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// JSON file holding the persisted choice
    #[serde(default = "default_storage_path")]
    pub storage_path: PathBuf,
    /// Whether the toggle control is offered to visitors
    #[serde(default)]
    pub show_toggle: bool,
    #[serde(default)]
    pub prefer: PreferredScheme,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from(".clubsite/theme.json")
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
            show_toggle: false,
            prefer: PreferredScheme::default(),
        }
    }
}

/// Settings for the reveal preview
#[derive(Debug, Deserialize, Serialize)]
pub struct RevealSettings {
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f32,
    /// Pixels scrolled per step
    #[serde(default = "default_scroll_step")]
    pub scroll_step: f32,
    /// Frames per second while ticking
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    /// Seconds spent at each scroll position
    #[serde(default = "default_dwell")]
    pub dwell: f32,
}

fn default_viewport_width() -> f32 {
    1280.0
}

fn default_viewport_height() -> f32 {
    720.0
}

fn default_scroll_step() -> f32 {
    240.0
}

fn default_frame_rate() -> u32 {
    60
}

fn default_dwell() -> f32 {
    0.25
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
            scroll_step: default_scroll_step(),
            frame_rate: default_frame_rate(),
            dwell: default_dwell(),
        }
    }
}

impl RevealSettings {
    pub fn viewport(&self) -> Rect {
        Rect::new(0.0, 0.0, self.viewport_width, self.viewport_height)
    }

    /// Seconds per frame
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.frame_rate.max(1) as f32
    }
}

impl SiteConfig {
    /// Load configuration.
    ///
    /// With an explicit path the file must exist. Without one, `clubsite.toml`
    /// in the working directory is used if present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let config_path = if path.is_dir() {
                    path.join(CONFIG_FILE)
                } else {
                    path.to_path_buf()
                };
                if !config_path.exists() {
                    anyhow::bail!("No config found at {}", config_path.display());
                }
                Self::load_file(&config_path)
            }
            None => {
                let config_path = Path::new(CONFIG_FILE);
                if config_path.exists() {
                    Self::load_file(config_path)
                } else {
                    tracing::debug!("no {CONFIG_FILE} found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    fn load_file(config_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let mut config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        config.base_dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Resolve a configured path against the config file's directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    pub fn data_source(&self) -> DataSource {
        DataSource::new(self.resolve(&self.data.dir))
    }

    /// Theme options backed by the configured storage file
    pub fn theme_options(&self, marker: Arc<RootClassList>) -> ThemeOptions {
        let storage = FileStorage::new(self.resolve(&self.theme.storage_path));
        let marker: Arc<dyn StyleMarker> = marker;

        match self.theme.prefer {
            PreferredScheme::System => ThemeOptions::new(storage, EnvPreference::from_env(), marker),
            PreferredScheme::Light => {
                ThemeOptions::new(storage, FixedPreference(Some(false)), marker)
            }
            PreferredScheme::Dark => ThemeOptions::new(storage, FixedPreference(Some(true)), marker),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = SiteConfig::from_toml("").unwrap();

        assert_eq!(config.site, SiteIdentity::default());
        assert_eq!(config.data.dir, PathBuf::from("public/data"));
        assert!(!config.theme.show_toggle);
        assert_eq!(config.theme.prefer, PreferredScheme::System);
        assert_eq!(config.reveal.frame_rate, 60);
    }

    #[test]
    fn test_partial_sections() {
        let config = SiteConfig::from_toml(
            r#"
            [site]
            name = "Byte Club"
            base_url = "https://byte.example.org"

            [theme]
            show_toggle = true
            prefer = "dark"

            [reveal]
            viewport_height = 900
            "#,
        )
        .unwrap();

        assert_eq!(config.site.name, "Byte Club");
        assert_eq!(config.site.address.locality, "Bhatkal");
        assert!(config.theme.show_toggle);
        assert_eq!(config.theme.prefer, PreferredScheme::Dark);
        assert_eq!(config.reveal.viewport_height, 900.0);
        assert_eq!(config.reveal.scroll_step, 240.0);
    }

    #[test]
    fn test_unknown_preference_is_an_error() {
        let err = SiteConfig::from_toml("[theme]\nprefer = \"sepia\"").unwrap_err();
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().starts_with("No config found"));
    }

    #[test]
    fn test_paths_resolve_next_to_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[data]\ndir = \"content\"\n").unwrap();

        let config = SiteConfig::load(Some(dir.path())).unwrap();
        assert_eq!(config.data_source().root(), dir.path().join("content"));
        assert_eq!(
            config.resolve(&config.theme.storage_path),
            dir.path().join(".clubsite/theme.json")
        );
    }

    #[test]
    fn test_frame_dt() {
        let settings = RevealSettings {
            frame_rate: 0,
            ..Default::default()
        };
        assert_eq!(settings.frame_dt(), 1.0);
    }
}
