use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Answers whether the host currently allows writes to shared storage.
pub trait StoragePermission: Send + Sync {
    fn is_write_granted(&self) -> bool;
}

impl<F> StoragePermission for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn is_write_granted(&self) -> bool {
        self()
    }
}

/// Permission state reported from the Java side after `checkSelfPermission`.
#[derive(Debug, Default)]
pub struct PermissionFlag(AtomicBool);

impl PermissionFlag {
    pub fn new(granted: bool) -> Self {
        Self(AtomicBool::new(granted))
    }

    pub fn set(&self, granted: bool) {
        self.0.store(granted, Ordering::Relaxed);
    }
}

impl StoragePermission for PermissionFlag {
    fn is_write_granted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Where log files may be written, and whether writing is currently allowed.
#[derive(Clone)]
pub struct StorageContext {
    root: PathBuf,
    permission: Arc<dyn StoragePermission>,
}

impl StorageContext {
    pub fn new(root: impl Into<PathBuf>, permission: Arc<dyn StoragePermission>) -> Self {
        Self {
            root: root.into(),
            permission,
        }
    }

    /// Storage whose write permission is never revoked.
    pub fn always_granted(root: impl Into<PathBuf>) -> Self {
        Self::new(root, Arc::new(|| true))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn folder(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn can_write(&self) -> bool {
        self.permission.is_write_granted()
    }
}

impl fmt::Debug for StorageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageContext")
            .field("root", &self.root)
            .field("write_granted", &self.can_write())
            .finish()
    }
}
