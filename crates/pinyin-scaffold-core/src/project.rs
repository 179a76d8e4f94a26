//! Writing one project's files to disk.
//!
//! ## Directory layout
//!
//! Each project lives in a folder named after its name, directly under the output root:
//! ```text
//! <output_root>/<name>/
//! ├── README.md
//! ├── src/Main.java             # collections
//! ├── src/{BubbleSort,QuickSort,Main}.java   # sorts
//! └── index.html, styles.css, app.js, assets/avatar.svg   # sites
//! ```
//!
//! Existing folders are reused and files are overwritten in place. Files from earlier
//! runs that this run does not produce are left alone.

use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};
use crate::generators::Generator;
use crate::selector::Selection;
use crate::templates::renderer::TemplateRenderer;

/// What was materialized for one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    pub name: String,
    pub selection: Selection,
    /// Absolute path of the project folder.
    pub root: PathBuf,
    /// Absolute paths of every file written, in write order.
    pub files: Vec<PathBuf>,
}

/// Renders and writes projects for one generator.
pub struct Materializer<'a> {
    generator: &'a dyn Generator,
    renderer: &'a TemplateRenderer,
}

impl<'a> Materializer<'a> {
    pub fn new(generator: &'a dyn Generator, renderer: &'a TemplateRenderer) -> Self {
        Self {
            generator,
            renderer,
        }
    }

    /// Render every file for `name` and write it under `output_root/name`.
    ///
    /// `output_root` should be absolute; the returned paths are joined onto it as-is.
    pub fn materialize(
        &self,
        name: &str,
        selection: Selection,
        output_root: &Path,
    ) -> Result<ProjectDescriptor> {
        let root = output_root.join(name);
        ensure_dir(&root)?;

        let rendered = self
            .generator
            .render_project(name, selection, self.renderer)?;

        let mut files = Vec::with_capacity(rendered.len());
        for file in rendered {
            let path = root.join(&file.relative_path);
            write_text(&path, &file.contents)?;
            tracing::debug!(path = %path.display(), "wrote file");
            files.push(path);
        }

        Ok(ProjectDescriptor {
            name: name.to_string(),
            selection,
            root,
            files,
        })
    }
}

/// `path` made absolute against the current directory.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(ScaffoldError::fs(path))?;
    Ok(cwd.join(path))
}

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(ScaffoldError::fs(dir))
}

/// Write `contents` as UTF-8 (no BOM), creating parent folders first.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    std::fs::write(path, contents.as_bytes()).map_err(ScaffoldError::fs(path))
}
