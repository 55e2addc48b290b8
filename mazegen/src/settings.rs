use mazecore::algorithms::CarveStrategy;
use ron::{extensions::Extensions, ser::PrettyConfig};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

pub const DEFAULT_MIN_DIMENSION: i32 = 7;
pub const DEFAULT_MAX_DIMENSION: i32 = 50;
pub const DEFAULT_FRAME_DELAY_MS: u64 = 15;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load/save settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse settings file: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarveMode {
    #[default]
    Reshuffle,
    SinglePass,
}

impl From<CarveMode> for CarveStrategy {
    fn from(mode: CarveMode) -> Self {
        match mode {
            CarveMode::Reshuffle => CarveStrategy::Reshuffle,
            CarveMode::SinglePass => CarveStrategy::SinglePass,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }

    /// Level `steps` notches more verbose, saturating at [`LogLevel::Trace`]
    pub fn raised(self, steps: u8) -> Self {
        const ORDER: [LogLevel; 5] = [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ];

        let current = self as usize;
        ORDER[(current + steps as usize).min(ORDER.len() - 1)]
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub min_dimension: Option<i32>,
    #[serde(default)]
    pub max_dimension: Option<i32>,
    #[serde(default)]
    pub carve_mode: Option<CarveMode>,
    #[serde(default)]
    pub animate: Option<bool>,
    #[serde(default)]
    pub frame_delay_ms: Option<u64>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_min_dimension(mut self, value: i32) -> Self {
        self.min_dimension = Some(value);
        self
    }

    pub fn get_min_dimension(&self) -> i32 {
        self.min_dimension.unwrap_or(DEFAULT_MIN_DIMENSION)
    }

    pub fn set_max_dimension(mut self, value: i32) -> Self {
        self.max_dimension = Some(value);
        self
    }

    pub fn get_max_dimension(&self) -> i32 {
        self.max_dimension.unwrap_or(DEFAULT_MAX_DIMENSION)
    }

    pub fn set_carve_mode(mut self, value: CarveMode) -> Self {
        self.carve_mode = Some(value);
        self
    }

    pub fn get_carve_mode(&self) -> CarveMode {
        self.carve_mode.unwrap_or_default()
    }

    pub fn set_animate(mut self, value: bool) -> Self {
        self.animate = Some(value);
        self
    }

    pub fn get_animate(&self) -> bool {
        self.animate.unwrap_or(true)
    }

    pub fn set_frame_delay_ms(mut self, value: u64) -> Self {
        self.frame_delay_ms = Some(value);
        self
    }

    pub fn get_frame_delay_ms(&self) -> u64 {
        self.frame_delay_ms.unwrap_or(DEFAULT_FRAME_DELAY_MS)
    }

    pub fn set_seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn set_log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    /// Fixes dimension bounds no maze can be generated with
    pub fn validated(mut self) -> Self {
        let min = self.get_min_dimension();
        if min < 1 {
            log::warn!("min_dimension {} is below 1, using 1", min);
            self.min_dimension = Some(1);
        }

        let (min, max) = (self.get_min_dimension(), self.get_max_dimension());
        if min > max {
            log::warn!(
                "min_dimension {} is above max_dimension {}, using {} to {}",
                min,
                max,
                DEFAULT_MIN_DIMENSION,
                DEFAULT_MAX_DIMENSION
            );
            self.min_dimension = Some(DEFAULT_MIN_DIMENSION);
            self.max_dimension = Some(DEFAULT_MAX_DIMENSION);
        }

        self
    }

    pub fn default_path() -> PathBuf {
        dirs::preference_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mazegen")
            .join("settings.ron")
    }

    fn options() -> ron::Options {
        ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
    }

    pub fn from_ron(source: &str) -> Result<Self, SettingsError> {
        Ok(Self::options().from_str(source)?)
    }

    pub fn to_ron(&self) -> Result<String, SettingsError> {
        Ok(ron::ser::to_string_pretty(self, PrettyConfig::default())?)
    }

    /// Loads settings from `path`, writing the default file there first if it doesn't exist
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(source) => Self::from_ron(&source),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Self::reset_config(path)?;
                Self::from_ron(DEFAULT_SETTINGS)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|err| {
            log::warn!("Using default settings, {}", err);
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_ron()?)?;
        Ok(())
    }

    pub fn reset_config(path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_parse() {
        let settings = Settings::from_ron(DEFAULT_SETTINGS).unwrap();
        assert_eq!(settings.get_min_dimension(), 7);
        assert_eq!(settings.get_max_dimension(), 50);
        assert_eq!(settings.get_carve_mode(), CarveMode::Reshuffle);
        assert!(settings.get_animate());
        assert_eq!(settings.get_seed(), None);
        assert_eq!(settings.get_log_level(), LogLevel::Warn);
    }

    #[test]
    fn implicit_some_and_missing_fields() {
        let settings = Settings::from_ron("(seed: 42, carve_mode: SinglePass)").unwrap();
        assert_eq!(settings.get_seed(), Some(42));
        assert_eq!(settings.get_carve_mode(), CarveMode::SinglePass);
        assert_eq!(settings.get_frame_delay_ms(), DEFAULT_FRAME_DELAY_MS);
        assert_eq!(settings.get_min_dimension(), DEFAULT_MIN_DIMENSION);
    }

    #[test]
    fn round_trip() {
        let settings = Settings::new()
            .set_min_dimension(3)
            .set_max_dimension(30)
            .set_animate(false)
            .set_seed(7)
            .set_log_level(LogLevel::Debug);

        let source = settings.to_ron().unwrap();
        assert_eq!(Settings::from_ron(&source).unwrap(), settings);
    }

    #[test]
    fn broken_file_is_an_error() {
        assert!(matches!(
            Settings::from_ron("(min_dimension: \"seven\")"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn load_creates_missing_file() {
        let dir = std::env::temp_dir().join(format!("mazegen-settings-{}", std::process::id()));
        let path = dir.join("settings.ron");
        let _ = fs::remove_dir_all(&dir);

        let settings = Settings::load(&path).unwrap();
        assert!(path.exists());
        assert_eq!(settings, Settings::from_ron(DEFAULT_SETTINGS).unwrap());

        let changed = settings.set_frame_delay_ms(0);
        changed.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), changed);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn dimension_bounds_are_validated() {
        let settings = Settings::new()
            .set_min_dimension(-5)
            .set_max_dimension(10)
            .validated();
        assert_eq!(settings.get_min_dimension(), 1);
        assert_eq!(settings.get_max_dimension(), 10);

        let settings = Settings::new()
            .set_min_dimension(20)
            .set_max_dimension(3)
            .validated();
        assert_eq!(settings.get_min_dimension(), DEFAULT_MIN_DIMENSION);
        assert_eq!(settings.get_max_dimension(), DEFAULT_MAX_DIMENSION);

        let settings = Settings::new().set_max_dimension(0).validated();
        assert_eq!(settings.get_min_dimension(), DEFAULT_MIN_DIMENSION);
        assert_eq!(settings.get_max_dimension(), DEFAULT_MAX_DIMENSION);

        let untouched = Settings::new().validated();
        assert_eq!(untouched, Settings::new());
    }

    #[test]
    fn log_level_raise_saturates() {
        assert_eq!(LogLevel::Warn.raised(0), LogLevel::Warn);
        assert_eq!(LogLevel::Warn.raised(1), LogLevel::Info);
        assert_eq!(LogLevel::Warn.raised(10), LogLevel::Trace);
    }
}
