use std::fmt;
use std::io;

use schemalint::syntax::ConfigError;

// Exit codes follow the sysexits-style table shared with the other 3leaps CLIs.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

/// The more severe of two exit codes; unknown codes rank highest.
pub fn most_severe(a: i32, b: i32) -> i32 {
    fn rank(code: i32) -> u8 {
        match code {
            SUCCESS => 0,
            DATA_INVALID => 1,
            USAGE => 2,
            FAILURE => 3,
            PERMISSION_DENIED => 4,
            INTERNAL => 5,
            _ => 6,
        }
    }
    if rank(b) > rank(a) {
        b
    } else {
        a
    }
}

pub fn config_error(err: ConfigError) -> CliError {
    CliError::new(USAGE, format!("invalid configuration: {err}"))
}
