use crate::{config::get_config_file, game_modes::CustomGameMode};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};

/// The preferences the game selection dialog reads on construction
/// and writes back when the user accepts.
pub trait SettingsStore {
    fn remember_game_mode(&self) -> bool;
    fn set_remember_game_mode(&mut self, remember: bool);
    fn remembered_game_mode(&self) -> &str;
    fn set_remembered_game_mode(&mut self, mode_id: String);
    fn save(&self) -> eyre::Result<()>;
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub debug: bool,
    pub config_version: Option<usize>,
    #[serde(default)]
    pub remember_game_mode: bool,
    #[serde(default)]
    pub remembered_game_mode: String,
    #[serde(default)]
    pub extra_game_modes: Vec<CustomGameMode>,
    #[serde(skip)]
    pub(crate) path: PathBuf,
}

const DEFAULT_CONFIG: &str = include_str!("defaultconfig.toml");

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config_file = get_config_file();
        let config_file_name = config_file.to_string_lossy();
        let env = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::with_name(config_file_name.as_ref()).required(false))
            // Optional per environment overrides, RUN_MODE defaults to development
            .add_source(File::with_name(&format!("config/{env}")).required(false))
            // Local overrides, never checked in
            .add_source(File::with_name("local.toml").required(false))
            // Environment overrides carry the `gameselect` prefix
            .add_source(Environment::with_prefix("gameselect").separator("-"))
            .build()?;
        let mut settings = config.try_deserialize::<Settings>()?;
        settings.path = config_file;
        Ok(settings)
    }

    /// Loads settings from an explicit file on top of the defaults.
    /// A missing file yields the defaults; `save` creates it.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(false))
            .build()?;
        let mut settings = config.try_deserialize::<Settings>()?;
        settings.path = path.to_path_buf();
        Ok(settings)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn forget_game_mode(&mut self) {
        self.remember_game_mode = false;
        self.remembered_game_mode.clear();
    }
}

impl SettingsStore for Settings {
    fn remember_game_mode(&self) -> bool {
        self.remember_game_mode
    }

    fn set_remember_game_mode(&mut self, remember: bool) {
        self.remember_game_mode = remember;
    }

    fn remembered_game_mode(&self) -> &str {
        &self.remembered_game_mode
    }

    fn set_remembered_game_mode(&mut self, mode_id: String) {
        self.remembered_game_mode = mode_id;
    }

    /// Persists the game choice into the config file only. Values that came
    /// from `RUN_MODE` files, `local.toml` or the environment stay out of it.
    fn save(&self) -> eyre::Result<()> {
        let mut on_disk = Settings::load_from(&self.path)?;
        on_disk.remember_game_mode = self.remember_game_mode;
        on_disk.remembered_game_mode = self.remembered_game_mode.clone();
        on_disk.write()
    }
}

impl Settings {
    fn write(&self) -> eyre::Result<()> {
        let toml = toml::to_string(self)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, toml)?;
        tracing::debug!(path = %self.path.display(), "Saved settings");
        Ok(())
    }
}
