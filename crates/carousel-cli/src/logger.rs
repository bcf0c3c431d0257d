use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};
use std::io::Write;

/// Logger writing `time level target: message` lines to stderr
#[derive(Clone, Copy)]
pub struct ConsoleLogger {
    level: Level,
}

impl ConsoleLogger {
    pub fn new(verbose: bool) -> Self {
        Self {
            level: if verbose { Level::Debug } else { Level::Warn },
        }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let filter = self.max_level();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }

    pub fn max_level(&self) -> LevelFilter {
        self.level.to_level_filter()
    }

    fn format(&self, record: &Record) -> String {
        format!(
            "{} {:<5} {}: {}",
            Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = self.format(record);
            let _ = writeln!(std::io::stderr().lock(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn test_verbosity_sets_level() {
        assert_eq!(ConsoleLogger::new(false).max_level(), LevelFilter::Warn);
        assert_eq!(ConsoleLogger::new(true).max_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_enabled_respects_level() {
        let quiet = ConsoleLogger::new(false);
        let debug = Metadata::builder().level(Level::Debug).build();
        let warn = Metadata::builder().level(Level::Warn).build();
        assert!(!quiet.enabled(&debug));
        assert!(quiet.enabled(&warn));
        assert!(ConsoleLogger::new(true).enabled(&debug));
    }

    #[test]
    fn test_format_includes_level_and_target() {
        let logger = ConsoleLogger::new(true);
        let line = logger.format(
            &Record::builder()
                .level(Level::Warn)
                .target("carousel_core::options")
                .args(format_args!("margin too large"))
                .build(),
        );
        assert!(line.contains("WARN"));
        assert!(line.ends_with("carousel_core::options: margin too large"));
    }

    #[test]
    fn test_init_installs_global_logger() {
        ConsoleLogger::new(false).init().unwrap();
        assert_eq!(log::max_level(), LevelFilter::Warn);
        assert!(ConsoleLogger::new(true).init().is_err());
    }
}
