// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// The banner source could not be turned into a banner list.
    Source(SourceError),
}

/// Reasons a banner source (directory or manifest) could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The path does not exist.
    NotFound(String),
    /// The path exists but is neither a directory nor a `.toml` manifest.
    UnsupportedSource(String),
    /// The manifest is not valid TOML or does not match the expected layout.
    InvalidManifest(String),
}

impl SourceError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SourceError::NotFound(_) => "error-source-not-found",
            SourceError::UnsupportedSource(_) => "error-source-unsupported",
            SourceError::InvalidManifest(_) => "error-source-invalid-manifest",
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::NotFound(path) => write!(f, "Banner source not found: {}", path),
            SourceError::UnsupportedSource(path) => {
                write!(f, "Unsupported banner source: {}", path)
            }
            SourceError::InvalidManifest(msg) => write!(f, "Invalid banner manifest: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Source(e) => write!(f, "Source Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<SourceError> for Error {
    fn from(err: SourceError) -> Self {
        Error::Source(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
