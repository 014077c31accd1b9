use std::time::Duration;

use article_engine::FetchSettings;
use engine_logging::engine_warn;

pub const TIMEOUT_ENV: &str = "SCRAPE_ARTICLE_TIMEOUT_SECS";

/// Fetch settings with environment overrides applied.
pub fn fetch_settings_from_env() -> FetchSettings {
    apply_timeout(
        FetchSettings::default(),
        std::env::var(TIMEOUT_ENV).ok().as_deref(),
    )
}

fn apply_timeout(mut settings: FetchSettings, raw: Option<&str>) -> FetchSettings {
    let Some(raw) = raw else {
        return settings;
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => settings.request_timeout = Duration::from_secs(secs),
        _ => engine_warn!("ignoring {}={:?}: expected a positive number of seconds", TIMEOUT_ENV, raw),
    }
    settings
}
