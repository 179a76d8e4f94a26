//! Drives one generator over the whole name registry, then archives the result.
//!
//! ```text
//! NotStarted → Materializing → Archiving → Done
//!      └────────────┴──────────────┴──────→ Failed
//! ```
//!
//! There is no rollback: when project *k* fails, projects before *k* stay on disk and
//! no archive is written.

use std::fmt;
use std::path::PathBuf;

use crate::archive;
use crate::config::RunConfig;
use crate::error::{Result, ScaffoldError};
use crate::generators::{Generator, GeneratorKind};
use crate::project::{self, Materializer, ProjectDescriptor};
use crate::registry::NameRegistry;
use crate::selector;
use crate::templates::renderer::TemplateRenderer;

/// Where a run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotStarted,
    Materializing,
    Archiving,
    Done,
    Failed,
}

/// Completion report of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub generator: GeneratorKind,
    pub projects: usize,
    pub files: usize,
    pub archive_path: PathBuf,
    pub archive_entries: usize,
    pub archive_bytes: u64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "generated {} folders, archive: {}",
            self.projects,
            self.archive_path.display()
        )
    }
}

/// One-shot batch runner for a [`RunConfig`].
pub struct Orchestrator {
    config: RunConfig,
    registry: NameRegistry,
    generator: Box<dyn Generator>,
    renderer: TemplateRenderer,
    state: RunState,
}

impl Orchestrator {
    /// Validate the config and prepare the generator.
    pub fn new(config: RunConfig) -> Result<Self> {
        config.validate()?;
        let registry = config.registry()?;
        let generator = config.generator.generator();
        Ok(Self {
            config,
            registry,
            generator,
            renderer: TemplateRenderer::new(),
            state: RunState::NotStarted,
        })
    }

    pub fn generator(&self) -> &dyn Generator {
        self.generator.as_ref()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn project_count(&self) -> usize {
        self.registry.len()
    }

    /// Run to completion.
    pub fn run(&mut self) -> Result<Summary> {
        self.run_with(|_| {})
    }

    /// Run to completion, calling `on_project` after each project is written.
    pub fn run_with(&mut self, on_project: impl FnMut(&ProjectDescriptor)) -> Result<Summary> {
        let result = self.execute(on_project);
        self.state = match result {
            Ok(_) => RunState::Done,
            Err(_) => RunState::Failed,
        };
        result
    }

    fn execute(&mut self, mut on_project: impl FnMut(&ProjectDescriptor)) -> Result<Summary> {
        if self.state != RunState::NotStarted {
            return Err(ScaffoldError::Other(anyhow::anyhow!(
                "orchestrator already ran (state: {:?})",
                self.state
            )));
        }

        let output_root = project::absolute(&self.config.output_root)?;
        project::ensure_dir(&output_root)?;

        self.state = RunState::Materializing;
        tracing::info!(
            generator = %self.config.generator,
            projects = self.registry.len(),
            root = %output_root.display(),
            "materializing projects"
        );

        let materializer = Materializer::new(self.generator.as_ref(), &self.renderer);
        let pool_size = self.generator.pool_size();
        let seed_bound = self.generator.seed_bound();

        let mut projects = Vec::with_capacity(self.registry.len());
        for name in self.registry.iter() {
            let selection = selector::select(name, pool_size, seed_bound);
            let project = materializer
                .materialize(name, selection, &output_root)
                .map_err(|e| ScaffoldError::Project {
                    name: name.to_string(),
                    source: Box::new(e),
                })?;
            tracing::info!(
                project = name,
                index = selection.index,
                seed = selection.seed,
                files = project.files.len(),
                "project written"
            );
            on_project(&project);
            projects.push(project);
        }

        self.state = RunState::Archiving;
        let archive_path = output_root.join(&self.config.archive_name);
        let report = archive::archive(&projects, &archive_path, &output_root)?;

        Ok(Summary {
            generator: self.config.generator,
            projects: projects.len(),
            files: projects.iter().map(|p| p.files.len()).sum(),
            archive_path: report.path,
            archive_entries: report.entries,
            archive_bytes: report.size_bytes,
        })
    }
}
