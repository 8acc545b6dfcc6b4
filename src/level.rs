use std::fmt;

/// Log severity, numbered like the `android.util.Log` priority constants.
#[repr(i32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Level {
    Verbose = 2,
    Debug = 3,
    Info = 4,
    Warn = 5,
    Error = 6,
    Assert = 7,
}

impl Level {
    /// Maps an `android.util.Log` priority to a level.
    pub fn from_priority(priority: i32) -> Option<Self> {
        match priority {
            2 => Some(Level::Verbose),
            3 => Some(Level::Debug),
            4 => Some(Level::Info),
            5 => Some(Level::Warn),
            6 => Some(Level::Error),
            7 => Some(Level::Assert),
            _ => None,
        }
    }

    pub fn priority(self) -> i32 {
        self as i32
    }

    /// `log` has no assert level, so `Assert` is written as `Error`.
    pub fn as_log_level(self) -> log::Level {
        match self {
            Level::Verbose => log::Level::Trace,
            Level::Debug => log::Level::Debug,
            Level::Info => log::Level::Info,
            Level::Warn => log::Level::Warn,
            Level::Error | Level::Assert => log::Level::Error,
        }
    }

    /// Single-letter code as printed by logcat.
    pub fn letter(self) -> char {
        match self {
            Level::Verbose => 'V',
            Level::Debug => 'D',
            Level::Info => 'I',
            Level::Warn => 'W',
            Level::Error => 'E',
            Level::Assert => 'A',
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
