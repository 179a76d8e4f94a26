//! Run configuration.
//!
//! A [`RunConfig`] is the immutable input of an [`crate::orchestrator::Orchestrator`]:
//! which generator to run, which names to materialize, where to write, and what to
//! call the archive. [`RunConfig::for_generator`] gives the built-in defaults; an
//! optional JSON file ([`ConfigOverrides`]) may replace the name list or the archive
//! file name.
//!
//! ```json
//! {
//!   "names": ["liting", "fanli"],
//!   "archive_name": "subset.zip"
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};
use crate::generators::GeneratorKind;
use crate::registry::{is_plain_file_name, NameRegistry, NAMES};

/// Everything a run needs, fixed before the first file is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub generator: GeneratorKind,
    pub names: Vec<String>,
    /// Folder projects and the archive are written into.
    pub output_root: PathBuf,
    /// Archive file name, created directly under `output_root`.
    pub archive_name: String,
}

impl RunConfig {
    /// Built-in names and archive name for `generator`.
    pub fn for_generator(generator: GeneratorKind, output_root: impl Into<PathBuf>) -> Self {
        Self {
            generator,
            names: NAMES.iter().map(|n| n.to_string()).collect(),
            output_root: output_root.into(),
            archive_name: generator.archive_name().to_string(),
        }
    }

    /// Apply the fields set in `overrides`.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(names) = overrides.names {
            self.names = names;
        }
        if let Some(archive_name) = overrides.archive_name {
            self.archive_name = archive_name;
        }
        self
    }

    /// Validate the name list.
    pub fn registry(&self) -> Result<NameRegistry> {
        NameRegistry::new(self.names.clone())
    }

    /// Check that `archive_name` is a plain file name directly under `output_root`.
    pub fn validate(&self) -> Result<()> {
        if !is_plain_file_name(&self.archive_name) {
            return Err(ScaffoldError::InvalidArchiveName(self.archive_name.clone()));
        }
        Ok(())
    }

    pub fn archive_path(&self) -> PathBuf {
        self.output_root.join(&self.archive_name)
    }
}

/// Optional fields read from a `--config` JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub names: Option<Vec<String>>,
    pub archive_name: Option<String>,
}

impl ConfigOverrides {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ScaffoldError::ConfigNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| ScaffoldError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_per_generator() {
        let cfg = RunConfig::for_generator(GeneratorKind::Sites, "/out");
        assert_eq!(cfg.names.len(), 42);
        assert_eq!(cfg.archive_path(), PathBuf::from("/out/pinyin_folders_42.zip"));
        assert_eq!(cfg.registry().unwrap().len(), 42);
    }

    #[test]
    fn test_overrides_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaffold.json");
        std::fs::write(&path, r#"{ "names": ["fanli", "hutao"] }"#).unwrap();
        let overrides = ConfigOverrides::load(&path).unwrap();
        assert_eq!(
            overrides,
            ConfigOverrides {
                names: Some(vec!["fanli".into(), "hutao".into()]),
                archive_name: None,
            }
        );

        let cfg = RunConfig::for_generator(GeneratorKind::JavaSorts, dir.path())
            .with_overrides(overrides);
        assert_eq!(cfg.names, vec!["fanli", "hutao"]);
        assert_eq!(cfg.archive_name, "java_sorts_42.zip");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaffold.json");
        std::fs::write(&path, r#"{ "archive_name": "mine.zip" }"#).unwrap();
        let overrides = ConfigOverrides::load(&path).unwrap();
        assert!(overrides.names.is_none());
        assert_eq!(overrides.archive_name.as_deref(), Some("mine.zip"));
    }

    #[test]
    fn test_load_missing_and_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let missing = ConfigOverrides::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(missing, ScaffoldError::ConfigNotFound { .. }));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, r#"{ "nmes": [] }"#).unwrap();
        let err = ConfigOverrides::load(&bad).unwrap_err();
        assert!(matches!(err, ScaffoldError::ConfigParse { .. }));
    }

    #[test]
    fn test_archive_name_must_be_a_file_name() {
        let base = RunConfig::for_generator(GeneratorKind::Sites, "/out");
        assert!(base.validate().is_ok());
        for bad in ["", ".", "..", "a/b.zip", "..\\up.zip"] {
            let cfg = base.clone().with_overrides(ConfigOverrides {
                names: None,
                archive_name: Some(bad.into()),
            });
            assert!(
                matches!(cfg.validate(), Err(ScaffoldError::InvalidArchiveName(ref n)) if n == bad),
                "accepted '{bad}'"
            );
        }
    }

    #[test]
    fn test_invalid_names_rejected_by_registry() {
        let cfg = RunConfig::for_generator(GeneratorKind::JavaCollections, "/out")
            .with_overrides(ConfigOverrides {
                names: Some(vec!["a".into(), "a".into()]),
                archive_name: None,
            });
        assert!(matches!(
            cfg.registry(),
            Err(ScaffoldError::InvalidRegistry(_))
        ));
    }
}
