//! Startup configuration for a logger instance.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;

use crate::context::{StorageContext, StoragePermission};
use crate::error::MLogResult;

pub const DEFAULT_FOLDER_NAME: &str = "MLog";

/// Settings captured once when the logger is built.
#[derive(Clone, Debug)]
pub struct MLogConfig {
    pub logging_enabled: bool,
    pub file_logging_enabled: bool,
    pub folder_name: String,
    pub storage: Option<StorageContext>,
}

impl Default for MLogConfig {
    fn default() -> Self {
        Self {
            logging_enabled: false,
            file_logging_enabled: false,
            folder_name: DEFAULT_FOLDER_NAME.to_string(),
            storage: None,
        }
    }
}

impl MLogConfig {
    pub fn new(logging_enabled: bool) -> Self {
        Self {
            logging_enabled,
            ..Self::default()
        }
    }

    pub fn with_file_logging(mut self, enabled: bool) -> Self {
        self.file_logging_enabled = enabled;
        self
    }

    /// A `None` folder keeps the default name.
    pub fn with_folder<S: Into<String>>(mut self, folder: Option<S>) -> Self {
        if let Some(folder) = folder {
            self.folder_name = folder.into();
        }
        self
    }

    pub fn with_storage(mut self, storage: StorageContext) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Parses the JSON handed over by the host app, e.g.
    /// `{"loggingEnabled": true, "fileLoggingEnabled": true, "storageDir": "/sdcard"}`.
    pub fn from_json(json: &str, permission: Arc<dyn StoragePermission>) -> MLogResult<Self> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Ok(Self {
            logging_enabled: raw.logging_enabled,
            file_logging_enabled: raw.file_logging_enabled,
            folder_name: raw
                .folder_name
                .unwrap_or_else(|| DEFAULT_FOLDER_NAME.to_string()),
            storage: raw
                .storage_dir
                .map(|root| StorageContext::new(root, permission)),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawConfig {
    logging_enabled: bool,
    file_logging_enabled: bool,
    folder_name: Option<String>,
    storage_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::PermissionFlag;
    use crate::error::MLogError;

    #[test]
    fn test_defaults() {
        let config = MLogConfig::new(true);
        assert!(config.logging_enabled);
        assert!(!config.file_logging_enabled);
        assert_eq!(config.folder_name, "MLog");
        assert!(config.storage.is_none());
    }

    #[test]
    fn test_with_folder_none_keeps_default() {
        let config = MLogConfig::new(true).with_folder(None::<String>);
        assert_eq!(config.folder_name, "MLog");

        let config = MLogConfig::new(true).with_folder(Some("crash-logs"));
        assert_eq!(config.folder_name, "crash-logs");
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "loggingEnabled": true,
            "fileLoggingEnabled": true,
            "folderName": "app-logs",
            "storageDir": "/sdcard"
        }"#;
        let config = MLogConfig::from_json(json, Arc::new(PermissionFlag::new(true)))
            .expect("Failed to parse config");

        assert!(config.logging_enabled);
        assert!(config.file_logging_enabled);
        assert_eq!(config.folder_name, "app-logs");
        let storage = config.storage.expect("Storage not configured");
        assert_eq!(storage.folder(&config.folder_name), PathBuf::from("/sdcard/app-logs"));
    }

    #[test]
    fn test_from_json_missing_fields_use_defaults() {
        let config = MLogConfig::from_json("{}", Arc::new(PermissionFlag::default()))
            .expect("Failed to parse config");
        assert!(!config.logging_enabled);
        assert!(!config.file_logging_enabled);
        assert_eq!(config.folder_name, DEFAULT_FOLDER_NAME);
        assert!(config.storage.is_none());
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let result = MLogConfig::from_json("{not json", Arc::new(PermissionFlag::default()));
        assert!(matches!(result, Err(MLogError::Config(_))));
    }
}
