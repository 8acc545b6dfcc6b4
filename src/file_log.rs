//! Append-only text file sink.

use std::error::Error;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::Local;
use log::{info, warn};

use crate::error::{render_error, MLogError, MLogResult};
use crate::level::Level;

pub const LOG_FILE_NAME: &str = "mlog.log";

/// Durable destination for formatted log lines.
pub trait FileSink: Send + Sync {
    /// Gets the sink ready to write into `dir`. Called when file logging is switched on
    /// with permission, or by the first permitted write that finds the sink unprepared.
    fn prepare(&self, dir: &Path) -> MLogResult<()>;

    fn log(&self, level: Level, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) -> MLogResult<()>;
}

struct OpenFile {
    path: PathBuf,
    file: File,
}

/// Appends `<timestamp> <L>/<tag>: <message>` lines to `<dir>/mlog.log`.
#[derive(Default)]
pub struct FileLog {
    target: Mutex<Option<OpenFile>>,
}

impl FileLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the currently open log file, if any.
    pub fn path(&self) -> Option<PathBuf> {
        self.lock().as_ref().map(|open| open.path.clone())
    }

    fn lock(&self) -> MutexGuard<'_, Option<OpenFile>> {
        match self.target.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("File log mutex poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }
}

impl FileSink for FileLog {
    fn prepare(&self, dir: &Path) -> MLogResult<()> {
        let mut target = self.lock();
        let path = dir.join(LOG_FILE_NAME);
        if target.as_ref().is_some_and(|open| open.path == path) {
            return Ok(());
        }

        fs::create_dir_all(dir).map_err(|source| MLogError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| MLogError::Io {
                path: path.clone(),
                source,
            })?;

        info!("File logging to {}", path.display());
        *target = Some(OpenFile { path, file });
        Ok(())
    }

    fn log(&self, level: Level, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) -> MLogResult<()> {
        let mut target = self.lock();
        let OpenFile { path, file } = target.as_mut().ok_or(MLogError::SinkNotPrepared)?;

        let mut line = format!(
            "{} {}/{}: {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            level,
            tag,
            message
        );
        if let Some(error) = error {
            line.push_str(&render_error(error));
            line.push('\n');
        }

        file.write_all(line.as_bytes()).map_err(|source| MLogError::Io {
            path: path.clone(),
            source,
        })
    }
}
