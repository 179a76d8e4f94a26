//! The three generators and the trait they share.
//!
//! A generator decides *what* a project contains: which templates are rendered, with
//! which substitutions, at which relative paths. Writing to disk is the
//! [`crate::project::Materializer`]'s job, and packaging is the
//! [`crate::archive`] module's.

mod collections;
mod sites;
mod sorts;

use std::fmt;
use std::num::{NonZeroU32, NonZeroUsize};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use collections::JavaCollections;
pub use sites::StaticSites;
pub use sorts::JavaSorts;

use crate::error::{Result, ScaffoldError};
use crate::selector::Selection;
use crate::templates::renderer::TemplateRenderer;

/// One rendered file, relative to its project folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub relative_path: PathBuf,
    pub contents: String,
}

impl RenderedFile {
    pub fn new(relative_path: impl Into<PathBuf>, contents: String) -> Self {
        Self {
            relative_path: relative_path.into(),
            contents,
        }
    }
}

/// Every generator implements this trait.
pub trait Generator: Send + Sync {
    fn kind(&self) -> GeneratorKind;

    /// Display name for user-facing output.
    fn display_name(&self) -> &'static str;

    /// Bound for the template index.
    fn pool_size(&self) -> NonZeroUsize;

    /// Bound for the seed.
    fn seed_bound(&self) -> NonZeroU32;

    /// Render every file of one project.
    fn render_project(
        &self,
        name: &str,
        selection: Selection,
        renderer: &TemplateRenderer,
    ) -> Result<Vec<RenderedFile>>;
}

/// Identifies a generator in config files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneratorKind {
    #[serde(rename = "collections")]
    JavaCollections,
    #[serde(rename = "sorts")]
    JavaSorts,
    #[serde(rename = "sites")]
    Sites,
}

impl GeneratorKind {
    pub const ALL: [GeneratorKind; 3] = [Self::JavaCollections, Self::JavaSorts, Self::Sites];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::JavaCollections => "collections",
            Self::JavaSorts => "sorts",
            Self::Sites => "sites",
        }
    }

    /// Resolve a generator by its short name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == name)
            .ok_or_else(|| ScaffoldError::UnknownGenerator(name.to_string()))
    }

    /// File name of the archive this generator produces.
    pub fn archive_name(self) -> &'static str {
        match self {
            Self::JavaCollections => "java_collections_42.zip",
            Self::JavaSorts => "java_sorts_42.zip",
            Self::Sites => "pinyin_folders_42.zip",
        }
    }

    pub fn generator(self) -> Box<dyn Generator> {
        match self {
            Self::JavaCollections => Box::new(JavaCollections::new()),
            Self::JavaSorts => Box::new(JavaSorts::new()),
            Self::Sites => Box::new(StaticSites::new()),
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
