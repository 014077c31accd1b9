//! Logger setup for the CLI.
//!
//! Stdout carries the JSON result, so log output goes to stderr and,
//! when `SCRAPE_ARTICLE_LOG_FILE` is set, to that file as well.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

pub const LEVEL_ENV: &str = "SCRAPE_ARTICLE_LOG";
pub const FILE_ENV: &str = "SCRAPE_ARTICLE_LOG_FILE";

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub file: Option<PathBuf>,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var(LEVEL_ENV).ok().as_deref(),
            std::env::var_os(FILE_ENV).map(PathBuf::from),
        )
    }

    fn from_values(level: Option<&str>, file: Option<PathBuf>) -> Self {
        Self {
            level: level.map_or(DEFAULT_LEVEL, parse_level),
            file: file.filter(|path| !path.as_os_str().is_empty()),
        }
    }
}

fn parse_level(raw: &str) -> LevelFilter {
    raw.trim().parse().unwrap_or(DEFAULT_LEVEL)
}

pub fn initialize(settings: &LogSettings) {
    if settings.level == LevelFilter::Off {
        return;
    }

    let config = build_config();
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        settings.level,
        config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    if let Some(path) = settings.file.as_deref() {
        if let Some(file_logger) = create_file_logger(path, settings.level, config) {
            loggers.push(file_logger);
        }
    }

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LogSettings, DEFAULT_LEVEL};
    use log::LevelFilter;
    use std::path::PathBuf;

    #[test]
    fn defaults_to_warn_without_file() {
        let settings = LogSettings::from_values(None, None);
        assert_eq!(settings.level, DEFAULT_LEVEL);
        assert_eq!(settings.file, None);
    }

    #[test]
    fn level_is_case_insensitive_and_falls_back() {
        assert_eq!(
            LogSettings::from_values(Some("DEBUG"), None).level,
            LevelFilter::Debug
        );
        assert_eq!(
            LogSettings::from_values(Some(" off "), None).level,
            LevelFilter::Off
        );
        assert_eq!(
            LogSettings::from_values(Some("loud"), None).level,
            DEFAULT_LEVEL
        );
    }

    #[test]
    fn empty_file_path_is_ignored() {
        let settings = LogSettings::from_values(None, Some(PathBuf::new()));
        assert_eq!(settings.file, None);
    }
}
