//! Browser logging.
//!
//! `tracing` events are written to the devtools console. The level starts at
//! WARN (INFO for debug builds) and can be raised or lowered at runtime with
//! [`set_log_level`]; the choice is kept in localStorage across reloads.

use std::sync::Once;

use tracing::level_filters::LevelFilter;

use crate::app::storage::{BrowserStorage, StorageType};

const LOG_LEVEL_KEY: &str = "ds_web_log_level";

static INIT: Once = Once::new();

#[cfg(feature = "web")]
static RELOAD_HANDLE: std::sync::OnceLock<tracing_subscriber::reload::Handle<LevelFilter, tracing_subscriber::Registry>> =
    std::sync::OnceLock::new();

/// Install the console subscriber and panic hook. Safe to call more than once.
pub fn init() {
    INIT.call_once(|| {
        #[cfg(feature = "web")]
        init_web_logging();
    });
}

#[cfg(feature = "web")]
fn init_web_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_web::MakeWebConsoleWriter;

    console_error_panic_hook::set_once();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(MakeWebConsoleWriter::new())
        .without_time();

    let (filter, handle) = tracing_subscriber::reload::Layer::new(get_log_level());
    let _ = RELOAD_HANDLE.set(handle);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}

fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) { LevelFilter::INFO } else { LevelFilter::WARN }
}

/// Parse a stored level name; unknown names fall back to the default.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value.and_then(|v| v.trim().parse::<LevelFilter>().ok()).unwrap_or_else(default_level)
}

pub fn get_log_level() -> LevelFilter {
    parse_level(BrowserStorage::new(StorageType::Local).get(LOG_LEVEL_KEY).as_deref())
}

pub fn set_log_level(level: LevelFilter) {
    #[cfg(feature = "web")]
    if let Some(handle) = RELOAD_HANDLE.get() {
        if let Err(e) = handle.reload(level) {
            tracing::warn!(error = %e, "failed to reload log filter");
        }
    }

    let name = level.to_string().to_ascii_lowercase();
    if let Err(e) = BrowserStorage::new(StorageType::Local).set(LOG_LEVEL_KEY, &name) {
        tracing::warn!(error = %e, "failed to persist log level");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_levels() {
        assert_eq!(parse_level(Some("debug")), LevelFilter::DEBUG);
        assert_eq!(parse_level(Some("ERROR")), LevelFilter::ERROR);
        assert_eq!(parse_level(Some(" trace ")), LevelFilter::TRACE);
        assert_eq!(parse_level(Some("off")), LevelFilter::OFF);
    }

    #[test]
    fn test_unknown_level_falls_back() {
        assert_eq!(parse_level(Some("loud")), default_level());
        assert_eq!(parse_level(None), default_level());
    }
}
