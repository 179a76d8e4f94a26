//! Unified error types for the pinyin-scaffold toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while generating and packaging projects.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    // --- Configuration ---

    /// The `--config` file was not found or could not be read.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The name registry contains an empty or duplicated name.
    #[error("invalid name registry: {0}")]
    InvalidRegistry(String),

    /// The archive name from the config is not a plain file name.
    #[error("invalid archive name '{0}': must be a file name without path separators")]
    InvalidArchiveName(String),

    /// The generator name is not one of: `collections`, `sorts`, `sites`.
    #[error("unknown generator: {0} (supported: collections, sorts, sites)")]
    UnknownGenerator(String),

    // --- Templates ---

    /// A placeholder referenced by a template body has no value in the substitution set.
    #[error("template '{template}' references '{{{{{placeholder}}}}}' but no value was supplied")]
    MissingSubstitution {
        template: String,
        placeholder: String,
    },

    /// The template index is outside the pool.
    #[error("template index {index} out of range for pool '{pool}' (size {size})")]
    UnknownTemplate {
        pool: &'static str,
        index: usize,
        size: usize,
    },

    /// Handlebars rejected the template or the data context.
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- Filesystem ---

    /// Folder creation or file write failed.
    #[error("filesystem error at {path}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Materializing one project failed; wraps the underlying cause.
    #[error("failed to materialize project '{name}'")]
    Project {
        name: String,
        #[source]
        source: Box<ScaffoldError>,
    },

    // --- Archive ---

    /// The zip writer or reader failed.
    #[error("archive error at {path}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// Reading a source file or writing the archive file failed.
    #[error("archive I/O error at {path}")]
    ArchiveIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file to archive does not live under the archive's base directory.
    #[error("{path} is not under archive base directory {base}")]
    OutsideBaseDir { path: PathBuf, base: PathBuf },

    /// The archive does not reproduce the tree on disk.
    #[error("archive does not match disk: {0}")]
    ArchiveMismatch(String),

    // --- General ---

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScaffoldError {
    /// Build a closure that wraps an [`std::io::Error`] as [`ScaffoldError::Filesystem`].
    pub(crate) fn fs(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Filesystem { path, source }
    }

    /// Build a closure that wraps an [`std::io::Error`] as [`ScaffoldError::ArchiveIo`].
    pub(crate) fn archive_io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::ArchiveIo { path, source }
    }

    /// Build a closure that wraps a [`zip::result::ZipError`] as [`ScaffoldError::Archive`].
    pub(crate) fn zip(path: impl Into<PathBuf>) -> impl FnOnce(zip::result::ZipError) -> Self {
        let path = path.into();
        move |source| Self::Archive { path, source }
    }
}

/// Alias for `Result<T, ScaffoldError>`.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
