use std::sync::Once;

static LOGGER_INIT: Once = Once::new();

/// Installs `android_logger` as the `log` backend.
///
/// No fixed tag is configured: `android_logger` then takes the logcat tag from the
/// record's module path, which `LogcatConsole` sets to the per-call tag.
pub fn init_android_logger() {
    LOGGER_INIT.call_once(|| {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Trace)
                .format(|f, record| write!(f, "{}", record.args())),
        );
        log::info!("Android logger initialized for MLog");
    });
}
