pub mod config;
pub mod frontmatter;
pub mod fs;
pub mod ignore;

pub use config::Config;
pub use fs::{
    file_exists, find_files, read_file_content, remove_directory, remove_file_if_exists,
    write_file_content,
};
pub use ignore::{IgnorePatterns, load_ignore_patterns};

use std::fmt;

/// Result type for rulesync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the core infrastructure layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Configuration file could not be read or parsed
    Config(String),

    /// Frontmatter block missing or malformed
    Frontmatter(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Config error: {}", msg),
            Error::Frontmatter(msg) => write!(f, "Frontmatter error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Config(_) | Error::Frontmatter(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
