use std::{
    io::{self, Write as _},
    sync::{Mutex, MutexGuard, OnceLock, RwLock},
};

use log::{Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(log::Level::Warn))
}

pub fn init() {
    if log::set_logger(get_logger()).is_ok() {
        log::set_max_level(get_logger().min_level().to_level_filter());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub level: log::Level,
    pub message: String,
    pub source: String,
}

impl Message {
    fn format(&self) -> String {
        format!("[{} {}] {}", self.level, self.source, self.message)
    }
}

/// Writes log lines to stderr.
///
/// While the terminal is taken over by an animation, messages are held back and
/// written once [`AppLogger::release`] is called.
pub struct AppLogger {
    min_level: RwLock<log::Level>,
    held: Mutex<Option<Vec<Message>>>,
}

impl AppLogger {
    fn new(min_level: log::Level) -> Self {
        Self {
            min_level: RwLock::new(min_level),
            held: Mutex::new(None),
        }
    }

    pub fn min_level(&self) -> log::Level {
        *self.min_level.read().unwrap()
    }

    pub fn set_min_level(&self, level: log::Level) {
        *self.min_level.write().unwrap() = level;
        log::set_max_level(level.to_level_filter());
    }

    fn borrow_mut_held(&self) -> MutexGuard<Option<Vec<Message>>> {
        self.held
            .lock()
            .expect("thread holding log panicked, cannot use this logger")
    }

    /// Starts holding messages back instead of writing them
    pub fn hold(&self) {
        let mut held = self.borrow_mut_held();
        if held.is_none() {
            *held = Some(Vec::new());
        }
    }

    /// Stops holding messages, returns the ones held back so far
    pub fn take_held(&self) -> Vec<Message> {
        self.borrow_mut_held().take().unwrap_or_default()
    }

    /// Stops holding messages and writes out everything held back so far
    pub fn release(&self) {
        let messages = self.take_held();
        let mut stderr = io::stderr().lock();
        for message in messages {
            let _ = writeln!(stderr, "{}", message.format());
        }
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = Message {
            level: record.level(),
            message: record.args().to_string(),
            source: record.module_path().unwrap_or("unknown").to_string(),
        };

        match self.borrow_mut_held().as_mut() {
            Some(held) => held.push(message),
            None => {
                let _ = writeln!(io::stderr().lock(), "{}", message.format());
            }
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(logger: &AppLogger, level: log::Level, text: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .module_path(Some("mazegen::tests"))
                .args(format_args!("{}", text))
                .build(),
        );
    }

    #[test]
    fn held_messages_respect_level() {
        let logger = AppLogger::new(log::Level::Info);
        logger.hold();

        record(&logger, log::Level::Warn, "kept");
        record(&logger, log::Level::Debug, "dropped");
        record(&logger, log::Level::Info, "also kept");

        let held = logger.take_held();
        assert_eq!(held.len(), 2);
        assert_eq!(held[0].message, "kept");
        assert_eq!(held[1].level, log::Level::Info);
        assert_eq!(held[0].format(), "[WARN mazegen::tests] kept");

        // nothing is held after taking
        assert!(logger.take_held().is_empty());
    }

    #[test]
    fn level_can_change() {
        let logger = AppLogger::new(log::Level::Warn);
        let debug = Metadata::builder().level(log::Level::Debug).build();
        assert!(!logger.enabled(&debug));

        logger.set_min_level(log::Level::Trace);
        assert!(logger.enabled(&debug));
    }
}
