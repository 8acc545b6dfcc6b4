use jni::objects::{JClass, JString};
use jni::sys::{jboolean, jint, jlong, JNI_TRUE};
use jni::JNIEnv;
use log::{error, info, warn};
use std::error::Error;
use std::panic;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use dashmap::DashMap;
use lazy_static::lazy_static;
use crate::config::MLogConfig;
use crate::context::{PermissionFlag, StorageContext};
use crate::error::ThrowableText;
use crate::level::Level;
use crate::logging::init_android_logger;
use crate::mlog::MLog;

/// A logger handed out to the JVM together with the permission flag the Java side updates.
struct Registered {
    logger: MLog,
    permission: Arc<PermissionFlag>,
}

// Handle registry; handles are never reused within a process
lazy_static! {
    static ref LOGGERS: DashMap<jlong, Arc<Registered>> = DashMap::new();
}

static NEXT_HANDLE: AtomicI64 = AtomicI64::new(1);

// Macro to simplify logger lookup. The Arc is cloned out so no map guard is held while logging.
macro_rules! with_logger {
    ($handle:expr, $method_name:expr, $return_value:expr, $entry:ident => $code:block) => {
        match LOGGERS.get(&$handle).map(|entry| Arc::clone(entry.value())) {
            Some($entry) => $code,
            None => {
                error!("Invalid logger handle passed to {}: {}", $method_name, $handle);
                $return_value
            }
        }
    };
}

// Nothing may unwind into the JVM
fn guarded<R>(method_name: &str, fallback: R, f: impl FnOnce() -> R) -> R {
    match panic::catch_unwind(panic::AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(panic_err) => {
            error!("{} panicked: {:?}", method_name, panic_err);
            fallback
        }
    }
}

// Helper function to read a nullable Java string
fn optional_string<'local>(env: &mut JNIEnv<'local>, value: &JString<'local>, what: &str) -> Option<String> {
    if value.is_null() {
        return None;
    }
    match env.get_string(value) {
        Ok(s) => Some(s.into()),
        Err(e) => {
            error!("Failed to get {} string: {:?}", what, e);
            None
        }
    }
}

fn register(config: MLogConfig, permission: Arc<PermissionFlag>) -> jlong {
    let handle = NEXT_HANDLE.fetch_add(1, Ordering::Relaxed);
    let logger = MLog::init(config);
    info!("MLog initialized, handle: {}, {:?}", handle, logger);
    LOGGERS.insert(handle, Arc::new(Registered { logger, permission }));
    handle
}

fn destroy(handle: jlong) -> bool {
    match LOGGERS.remove(&handle) {
        Some(_) => {
            info!("MLog destroyed, handle: {}", handle);
            true
        }
        None => {
            warn!("No logger found for handle: {}", handle);
            false
        }
    }
}

fn set_file_loggable(handle: jlong, enabled: bool) {
    with_logger!(handle, "nativeSetFileLoggable", (), entry => {
        entry.logger.set_file_loggable(enabled);
    })
}

fn set_storage_permission(handle: jlong, granted: bool) {
    with_logger!(handle, "nativeSetStoragePermission", (), entry => {
        entry.permission.set(granted);
    })
}

fn log_line(handle: jlong, priority: jint, tag: Option<String>, message: Option<String>, throwable: Option<String>) {
    let Some(level) = Level::from_priority(priority) else {
        warn!("Unknown log priority: {}", priority);
        return;
    };
    let throwable = throwable.map(ThrowableText);
    with_logger!(handle, "nativeLog", (), entry => {
        entry.logger.log(
            level,
            tag.as_deref(),
            message,
            throwable.as_ref().map(|t| t as &(dyn Error + 'static)),
        );
    })
}

// Lifecycle management

#[no_mangle]
pub extern "system" fn Java_in_rmkrishna_mlog_MLogNative_nativeInit<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    storage_dir: JString<'local>,
    storage_granted: jboolean,
    log_enabled: jboolean,
    file_log_enabled: jboolean,
    folder: JString<'local>,
) -> jlong {
    init_android_logger();

    guarded("nativeInit", 0, || {
        let storage_dir = optional_string(&mut env, &storage_dir, "storage_dir");
        let folder = optional_string(&mut env, &folder, "folder");
        let permission = Arc::new(PermissionFlag::new(storage_granted == JNI_TRUE));

        let mut config = MLogConfig::new(log_enabled == JNI_TRUE)
            .with_file_logging(file_log_enabled == JNI_TRUE)
            .with_folder(folder);
        if let Some(dir) = storage_dir {
            config = config.with_storage(StorageContext::new(dir, permission.clone()));
        }
        register(config, permission)
    })
}

#[no_mangle]
pub extern "system" fn Java_in_rmkrishna_mlog_MLogNative_nativeInitFromJson<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    config_json: JString<'local>,
    storage_granted: jboolean,
) -> jlong {
    init_android_logger();

    guarded("nativeInitFromJson", 0, || {
        let Some(json) = optional_string(&mut env, &config_json, "config_json") else {
            error!("Null config passed to nativeInitFromJson");
            return 0;
        };
        let permission = Arc::new(PermissionFlag::new(storage_granted == JNI_TRUE));
        match MLogConfig::from_json(&json, permission.clone()) {
            Ok(config) => register(config, permission),
            Err(e) => {
                error!("Failed to parse logger config: {}", e);
                0
            }
        }
    })
}

#[no_mangle]
pub extern "system" fn Java_in_rmkrishna_mlog_MLogNative_nativeDestroy(
    _env: JNIEnv,
    _class: JClass,
    handle: jlong,
) {
    if handle == 0 {
        error!("Attempted to destroy null logger handle");
        return;
    }
    guarded("nativeDestroy", (), || {
        destroy(handle);
    })
}

// Runtime toggles

#[no_mangle]
pub extern "system" fn Java_in_rmkrishna_mlog_MLogNative_nativeSetFileLoggable(
    _env: JNIEnv,
    _class: JClass,
    handle: jlong,
    enabled: jboolean,
) {
    guarded("nativeSetFileLoggable", (), || set_file_loggable(handle, enabled == JNI_TRUE))
}

#[no_mangle]
pub extern "system" fn Java_in_rmkrishna_mlog_MLogNative_nativeSetStoragePermission(
    _env: JNIEnv,
    _class: JClass,
    handle: jlong,
    granted: jboolean,
) {
    guarded("nativeSetStoragePermission", (), || set_storage_permission(handle, granted == JNI_TRUE))
}

// Logging

#[no_mangle]
pub extern "system" fn Java_in_rmkrishna_mlog_MLogNative_nativeLog<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    handle: jlong,
    priority: jint,
    tag: JString<'local>,
    message: JString<'local>,
    throwable: JString<'local>,
) {
    guarded("nativeLog", (), || {
        let tag = optional_string(&mut env, &tag, "tag");
        let message = optional_string(&mut env, &message, "message");
        let throwable = optional_string(&mut env, &throwable, "throwable");
        log_line(handle, priority, tag, message, throwable);
    })
}
