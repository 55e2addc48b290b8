use mazecore::algorithms::GeneratorError;
use thiserror::Error;

use crate::settings::SettingsError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("Dimension {value} is out of range, it has to be between {min} and {max}")]
    OutOfRange { value: i32, min: i32, max: i32 },
}
