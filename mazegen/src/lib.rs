pub mod app;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod renderer;
pub mod settings;
