//! CLI command implementations for pinyin-scaffold.

pub mod generate;
pub mod verify;

use anyhow::Result;

use pinyin_scaffold_core::config::{ConfigOverrides, RunConfig};
use pinyin_scaffold_core::generators::GeneratorKind;
use pinyin_scaffold_core::project;

use crate::RunArgs;

/// Resolve the run configuration for `kind` from the command-line flags.
pub fn resolve_config(kind: GeneratorKind, args: &RunArgs) -> Result<RunConfig> {
    let output_root = project::absolute(&args.output_dir)?;
    let config = RunConfig::for_generator(kind, output_root);
    match &args.config {
        Some(path) => {
            let overrides = ConfigOverrides::load(path)?;
            tracing::info!(path = %path.display(), "applying config overrides");
            Ok(config.with_overrides(overrides))
        }
        None => Ok(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(output_dir: &std::path::Path, config: Option<PathBuf>) -> RunArgs {
        RunArgs {
            output_dir: output_dir.to_path_buf(),
            config,
            verbose: 0,
        }
    }

    #[test]
    fn test_defaults_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = resolve_config(GeneratorKind::JavaSorts, &args(dir.path(), None)).unwrap();
        assert_eq!(cfg.output_root, dir.path());
        assert_eq!(cfg.names.len(), 42);
        assert_eq!(cfg.archive_name, "java_sorts_42.zip");
    }

    #[test]
    fn test_relative_output_dir_is_made_absolute() {
        let cfg = resolve_config(
            GeneratorKind::Sites,
            &args(std::path::Path::new("out"), None),
        )
        .unwrap();
        assert!(cfg.output_root.is_absolute());
        assert!(cfg.output_root.ends_with("out"));
    }

    #[test]
    fn test_config_file_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaffold.json");
        std::fs::write(&path, r#"{ "names": ["fanli"], "archive_name": "one.zip" }"#).unwrap();
        let cfg = resolve_config(
            GeneratorKind::JavaCollections,
            &args(dir.path(), Some(path)),
        )
        .unwrap();
        assert_eq!(cfg.names, vec!["fanli"]);
        assert_eq!(cfg.archive_path(), dir.path().join("one.zip"));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = resolve_config(
            GeneratorKind::JavaCollections,
            &args(dir.path(), Some(dir.path().join("absent.json"))),
        );
        assert!(result.is_err());
    }
}
