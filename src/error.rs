use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Internal failures. None of these ever reach a caller of the logging facade.
#[derive(Debug, Error)]
pub enum MLogError {
    /// Configuration JSON could not be parsed.
    #[error("invalid logger configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// File sink was written to before `prepare` succeeded.
    #[error("file sink has not been prepared")]
    SinkNotPrepared,

    /// File sink I/O failed.
    #[error("file sink I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type MLogResult<T> = Result<T, MLogError>;

/// Error value carried across JNI, where the throwable arrives as its rendered text.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ThrowableText(pub String);

/// Renders an error and its `source()` chain the way a stack trace dump reads.
pub fn render_error(error: &(dyn std::error::Error + 'static)) -> String {
    let mut out = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        out.push_str("\nCaused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_includes_cause_chain() {
        let error = MLogError::Io {
            path: PathBuf::from("/tmp/mlog.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let rendered = render_error(&error);
        assert_eq!(
            rendered,
            "file sink I/O error on /tmp/mlog.log: denied\nCaused by: denied"
        );
    }

    #[test]
    fn test_throwable_text_displays_verbatim() {
        let error = ThrowableText("java.lang.IllegalStateException: boom".to_string());
        assert_eq!(render_error(&error), "java.lang.IllegalStateException: boom");
    }
}
