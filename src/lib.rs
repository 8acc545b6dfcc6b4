//! Logcat helper with call-site tags, long-message chunking, JSON pretty-printing
//! and an optional append-only file mirror, exposed to the JVM through JNI.

pub mod chunk;
pub mod config;
pub mod console;
pub mod context;
pub mod error;
pub mod file_log;
pub mod jni_bindings;
pub mod level;
pub mod logging;
pub mod message;
pub mod mlog;
pub mod tag;

pub use config::MLogConfig;
pub use console::{Console, LogcatConsole};
pub use context::{PermissionFlag, StorageContext, StoragePermission};
pub use error::{MLogError, MLogResult};
pub use file_log::{FileLog, FileSink};
pub use level::Level;
pub use message::Message;
pub use mlog::MLog;

#[doc(hidden)]
#[macro_export]
macro_rules! __mlog_at_caller {
    ($logger:expr, $level:expr, $message:expr, $error:expr) => {{
        let tag = $crate::caller_tag!();
        $logger.log($level, tag.as_deref(), $message, $error)
    }};
}

/// Verbose log tagged with the calling function: `mlog_v!(logger, msg)` or `mlog_v!(logger, msg, &err)`.
#[macro_export]
macro_rules! mlog_v {
    ($logger:expr, $message:expr) => {
        $crate::__mlog_at_caller!($logger, $crate::Level::Verbose, $message, None)
    };
    ($logger:expr, $message:expr, $error:expr) => {
        $crate::__mlog_at_caller!($logger, $crate::Level::Verbose, $message, Some($error))
    };
}

/// Debug log tagged with the calling function.
#[macro_export]
macro_rules! mlog_d {
    ($logger:expr, $message:expr) => {
        $crate::__mlog_at_caller!($logger, $crate::Level::Debug, $message, None)
    };
    ($logger:expr, $message:expr, $error:expr) => {
        $crate::__mlog_at_caller!($logger, $crate::Level::Debug, $message, Some($error))
    };
}

/// Info log tagged with the calling function.
#[macro_export]
macro_rules! mlog_i {
    ($logger:expr, $message:expr) => {
        $crate::__mlog_at_caller!($logger, $crate::Level::Info, $message, None)
    };
    ($logger:expr, $message:expr, $error:expr) => {
        $crate::__mlog_at_caller!($logger, $crate::Level::Info, $message, Some($error))
    };
}

/// Warn log tagged with the calling function.
#[macro_export]
macro_rules! mlog_w {
    ($logger:expr, $message:expr) => {
        $crate::__mlog_at_caller!($logger, $crate::Level::Warn, $message, None)
    };
    ($logger:expr, $message:expr, $error:expr) => {
        $crate::__mlog_at_caller!($logger, $crate::Level::Warn, $message, Some($error))
    };
}

/// Error log tagged with the calling function.
#[macro_export]
macro_rules! mlog_e {
    ($logger:expr, $message:expr) => {
        $crate::__mlog_at_caller!($logger, $crate::Level::Error, $message, None)
    };
    ($logger:expr, $message:expr, $error:expr) => {
        $crate::__mlog_at_caller!($logger, $crate::Level::Error, $message, Some($error))
    };
}

/// Assert log tagged with the calling function.
#[macro_export]
macro_rules! mlog_a {
    ($logger:expr, $message:expr) => {
        $crate::__mlog_at_caller!($logger, $crate::Level::Assert, $message, None)
    };
    ($logger:expr, $message:expr, $error:expr) => {
        $crate::__mlog_at_caller!($logger, $crate::Level::Assert, $message, Some($error))
    };
}
