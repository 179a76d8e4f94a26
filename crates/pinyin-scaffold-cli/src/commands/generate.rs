use anyhow::Result;

use pinyin_scaffold_core::generators::GeneratorKind;
use pinyin_scaffold_core::orchestrator::{Orchestrator, Summary};

use crate::output;
use crate::RunArgs;

/// Materialize every project for `kind` and archive them.
///
/// Prints a single summary line on success. Per-project detail is logged at `-v`.
pub fn run(kind: GeneratorKind, args: &RunArgs) -> Result<Summary> {
    let config = super::resolve_config(kind, args)?;
    let resolved = serde_json::to_string(&config)?;
    tracing::debug!(config = %resolved, "resolved run config");

    let mut orchestrator = Orchestrator::new(config)?;
    let progress = output::project_progress(orchestrator.project_count())?;
    progress.set_prefix(orchestrator.generator().display_name());

    let result = orchestrator.run_with(|project| {
        progress.set_message(project.name.clone());
        progress.inc(1);
    });
    progress.finish_and_clear();

    let summary = result?;
    output::print_success(&summary.to_string());
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_into_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let args = RunArgs {
            output_dir: dir.path().to_path_buf(),
            config: None,
            verbose: 0,
        };
        let summary = run(GeneratorKind::Sites, &args).unwrap();
        assert_eq!(summary.projects, 42);
        assert_eq!(summary.archive_path, dir.path().join("pinyin_folders_42.zip"));
        assert!(dir.path().join("fanli/assets/avatar.svg").is_file());
    }

    #[test]
    fn test_failure_propagates_project_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("liting"), "in the way").unwrap();
        let args = RunArgs {
            output_dir: dir.path().to_path_buf(),
            config: None,
            verbose: 0,
        };
        let err = run(GeneratorKind::JavaSorts, &args).unwrap_err();
        assert!(err.to_string().contains("liting"));
        assert!(!dir.path().join("java_sorts_42.zip").exists());
    }
}
