use std::error::Error;

use crate::error::render_error;
use crate::level::Level;

/// The platform console a formatted line is written to.
pub trait Console: Send + Sync {
    fn write(&self, level: Level, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>);
}

/// Writes through the `log` facade, which `logging::init_android_logger` routes to logcat.
///
/// `android_logger` takes the logcat tag from the record's module path when no fixed
/// tag is configured, so the per-call tag is passed there.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogcatConsole;

impl Console for LogcatConsole {
    fn write(&self, level: Level, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        let logger = log::logger();
        let log_level = level.as_log_level();
        match error {
            Some(error) => logger.log(
                &log::Record::builder()
                    .args(format_args!("{}\n{}", message, render_error(error)))
                    .level(log_level)
                    .target(tag)
                    .module_path(Some(tag))
                    .build(),
            ),
            None => logger.log(
                &log::Record::builder()
                    .args(format_args!("{}", message))
                    .level(log_level)
                    .target(tag)
                    .module_path(Some(tag))
                    .build(),
            ),
        }
    }
}
