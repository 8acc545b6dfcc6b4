//! The leveled logging facade.
//!
//! Every call runs synchronously on the caller's thread and never fails: a missing
//! tag or message, a missing storage context, a denied permission or a sink I/O
//! error all turn the call (or its file half) into a no-op.

use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use log::warn;

use crate::chunk::{self, MAX_LOG_LENGTH};
use crate::config::MLogConfig;
use crate::console::{Console, LogcatConsole};
use crate::context::StorageContext;
use crate::error::MLogError;
use crate::file_log::{FileLog, FileSink};
use crate::level::Level;
use crate::message::Message;
use crate::tag;

pub type ErrorRef<'e> = Option<&'e (dyn Error + 'static)>;

pub struct MLog {
    logging_enabled: AtomicBool,
    file_logging_enabled: AtomicBool,
    folder_name: String,
    storage: Option<StorageContext>,
    console: Box<dyn Console>,
    file_sink: Box<dyn FileSink>,
    // Set once a sink failure has been reported; cleared after the next success.
    sink_failure_reported: AtomicBool,
}

impl MLog {
    /// Builds a logger that writes to logcat and, when enabled, to `<storage>/<folder>/mlog.log`.
    pub fn init(config: MLogConfig) -> Self {
        Self::with_sinks(config, Box::new(LogcatConsole), Box::new(FileLog::new()))
    }

    pub fn with_sinks(config: MLogConfig, console: Box<dyn Console>, file_sink: Box<dyn FileSink>) -> Self {
        let logger = Self {
            logging_enabled: AtomicBool::new(config.logging_enabled),
            file_logging_enabled: AtomicBool::new(false),
            folder_name: config.folder_name,
            storage: config.storage,
            console,
            file_sink,
            sink_failure_reported: AtomicBool::new(false),
        };
        if config.file_logging_enabled {
            logger.enable_file_logging();
        }
        logger
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.logging_enabled.load(Ordering::Relaxed)
    }

    pub fn is_file_logging_enabled(&self) -> bool {
        self.file_logging_enabled.load(Ordering::Relaxed)
    }

    pub fn folder_name(&self) -> &str {
        &self.folder_name
    }

    pub fn storage(&self) -> Option<&StorageContext> {
        self.storage.as_ref()
    }

    pub fn set_file_loggable(&self, enabled: bool) {
        if enabled {
            self.enable_file_logging();
        } else {
            self.disable_file_logging();
        }
    }

    /// Turns file logging on and prepares the sink under the configured folder.
    ///
    /// Without write permission the sink is left unprepared; the first write after the
    /// permission is granted prepares it instead.
    pub fn enable_file_logging(&self) {
        self.file_logging_enabled.store(true, Ordering::Relaxed);
        if let Some(storage) = &self.storage {
            if storage.can_write() {
                self.prepare_sink(storage);
            }
        }
    }

    pub fn disable_file_logging(&self) {
        self.file_logging_enabled.store(false, Ordering::Relaxed);
    }

    pub fn verbose<'a>(&self, tag: impl Into<Option<&'a str>>, message: impl Into<Message>, error: ErrorRef<'_>) {
        self.log(Level::Verbose, tag, message, error);
    }

    pub fn debug<'a>(&self, tag: impl Into<Option<&'a str>>, message: impl Into<Message>, error: ErrorRef<'_>) {
        self.log(Level::Debug, tag, message, error);
    }

    pub fn info<'a>(&self, tag: impl Into<Option<&'a str>>, message: impl Into<Message>, error: ErrorRef<'_>) {
        self.log(Level::Info, tag, message, error);
    }

    pub fn warn<'a>(&self, tag: impl Into<Option<&'a str>>, message: impl Into<Message>, error: ErrorRef<'_>) {
        self.log(Level::Warn, tag, message, error);
    }

    pub fn error<'a>(&self, tag: impl Into<Option<&'a str>>, message: impl Into<Message>, error: ErrorRef<'_>) {
        self.log(Level::Error, tag, message, error);
    }

    pub fn assert<'a>(&self, tag: impl Into<Option<&'a str>>, message: impl Into<Message>, error: ErrorRef<'_>) {
        self.log(Level::Assert, tag, message, error);
    }

    /// Formats `message` and writes it under `tag`. Without a tag or message nothing happens.
    pub fn log<'a>(
        &self,
        level: Level,
        tag: impl Into<Option<&'a str>>,
        message: impl Into<Message>,
        error: ErrorRef<'_>,
    ) {
        let Some(tag) = tag.into() else {
            return;
        };
        let Some(message) = message.into().format() else {
            return;
        };
        self.dispatch(level, tag, &message, error);
    }

    fn dispatch(&self, level: Level, tag: &str, message: &str, error: ErrorRef<'_>) {
        if tag.is_empty() {
            return;
        }
        let tag = tag::truncate(tag);

        if chunk::exceeds(message, MAX_LOG_LENGTH) {
            for part in chunk::split(message, MAX_LOG_LENGTH) {
                self.dispatch(level, tag, part, error);
            }
            return;
        }

        if self.is_logging_enabled() {
            self.console.write(level, tag, message, error);
        }
        self.write_file(level, tag, message, error);
    }

    fn write_file(&self, level: Level, tag: &str, message: &str, error: ErrorRef<'_>) {
        if !self.is_file_logging_enabled() {
            return;
        }
        let Some(storage) = &self.storage else {
            return;
        };
        if !storage.can_write() {
            return;
        }

        let result = match self.file_sink.log(level, tag, message, error) {
            Err(MLogError::SinkNotPrepared) if self.prepare_sink(storage) => {
                self.file_sink.log(level, tag, message, error)
            }
            result => result,
        };
        match result {
            Ok(()) => self.sink_failure_reported.store(false, Ordering::Relaxed),
            Err(e) => self.report_sink_failure(&e),
        }
    }

    fn prepare_sink(&self, storage: &StorageContext) -> bool {
        let dir = storage.folder(&self.folder_name);
        match self.file_sink.prepare(&dir) {
            Ok(()) => {
                self.sink_failure_reported.store(false, Ordering::Relaxed);
                true
            }
            Err(e) => {
                self.report_sink_failure(&e);
                false
            }
        }
    }

    // Diagnostics follow the logging switch and are emitted once per failure streak
    fn report_sink_failure(&self, e: &MLogError) {
        if self.is_logging_enabled() && !self.sink_failure_reported.swap(true, Ordering::Relaxed) {
            warn!("File logging unavailable: {}", e);
        }
    }
}

impl fmt::Debug for MLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MLog")
            .field("logging_enabled", &self.is_logging_enabled())
            .field("file_logging_enabled", &self.is_file_logging_enabled())
            .field("folder_name", &self.folder_name)
            .field("storage", &self.storage)
            .finish()
    }
}
