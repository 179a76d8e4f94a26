//! Packaging materialized projects into one zip archive, and checking it back.
//!
//! Projects are visited in the order they were materialized. Inside a project the
//! folder is walked depth-first with entries sorted by file name, so the entry order
//! only depends on the tree. Every entry gets the same timestamp and permissions:
//! archiving an identical tree twice yields identical bytes.
//!
//! The archive is first written to `<archive>.partial` and renamed into place once
//! the central directory is flushed. A failed run removes the partial file and never
//! leaves a truncated archive at the final path.

use std::collections::HashSet;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipArchive, ZipWriter};

use crate::error::{Result, ScaffoldError};
use crate::project::ProjectDescriptor;

/// Result of a successful [`archive`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveReport {
    pub path: PathBuf,
    /// Number of file entries written.
    pub entries: usize,
    /// Size of the archive on disk.
    pub size_bytes: u64,
}

/// Result of a successful [`verify`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub entries: usize,
    /// Total uncompressed bytes compared.
    pub bytes: u64,
}

/// Write every file of every project into a deflate-compressed zip at `archive_path`.
///
/// Entry names are paths relative to `base_dir`, `/`-separated.
pub fn archive(
    projects: &[ProjectDescriptor],
    archive_path: &Path,
    base_dir: &Path,
) -> Result<ArchiveReport> {
    let partial = partial_path(archive_path);

    let entries = match write_archive(projects, &partial, base_dir) {
        Ok(entries) => entries,
        Err(e) => {
            // Best effort: report the write error, not the cleanup one.
            let _ = std::fs::remove_file(&partial);
            return Err(e);
        }
    };

    std::fs::rename(&partial, archive_path).map_err(ScaffoldError::archive_io(archive_path))?;
    let size_bytes = std::fs::metadata(archive_path)
        .map_err(ScaffoldError::archive_io(archive_path))?
        .len();

    tracing::info!(
        path = %archive_path.display(),
        entries,
        size_bytes,
        "archive written"
    );

    Ok(ArchiveReport {
        path: archive_path.to_path_buf(),
        entries,
        size_bytes,
    })
}

fn write_archive(projects: &[ProjectDescriptor], path: &Path, base_dir: &Path) -> Result<usize> {
    let file = File::create(path).map_err(ScaffoldError::archive_io(path))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644);

    let mut archived: HashSet<PathBuf> = HashSet::new();
    for project in projects {
        for entry in WalkDir::new(&project.root).sort_by_file_name() {
            let entry = entry.map_err(|e| ScaffoldError::ArchiveIo {
                path: e.path().unwrap_or(&project.root).to_path_buf(),
                source: e.into(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let source = entry.path();
            let name = entry_name(source, base_dir)?;
            let contents = std::fs::read(source).map_err(ScaffoldError::archive_io(source))?;

            zip.start_file(name.clone(), options)
                .map_err(ScaffoldError::zip(path))?;
            zip.write_all(&contents)
                .map_err(ScaffoldError::archive_io(path))?;
            tracing::debug!(entry = %name, bytes = contents.len(), "archived");

            archived.insert(source.to_path_buf());
        }

        if let Some(missing) = project.files.iter().find(|f| !archived.contains(*f)) {
            return Err(ScaffoldError::ArchiveMismatch(format!(
                "{} was materialized but not found under {}",
                missing.display(),
                project.root.display()
            )));
        }
    }

    let mut writer = zip.finish().map_err(ScaffoldError::zip(path))?;
    writer.flush().map_err(ScaffoldError::archive_io(path))?;
    Ok(archived.len())
}

/// `/`-separated path of `path` relative to `base_dir`.
fn entry_name(path: &Path, base_dir: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(base_dir)
        .map_err(|_| ScaffoldError::OutsideBaseDir {
            path: path.to_path_buf(),
            base: base_dir.to_path_buf(),
        })?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(parts.join("/"))
}

fn partial_path(archive_path: &Path) -> PathBuf {
    let mut name = archive_path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".partial");
    archive_path.with_file_name(name)
}

/// Entry names in archive order.
pub fn list_entries(archive_path: &Path) -> Result<Vec<String>> {
    let mut zip = open(archive_path)?;
    let mut names = Vec::with_capacity(zip.len());
    for i in 0..zip.len() {
        let file = zip.by_index(i).map_err(ScaffoldError::zip(archive_path))?;
        names.push(file.name().to_string());
    }
    Ok(names)
}

/// Check that extracting `archive_path` into `base_dir` would change nothing.
///
/// Every entry must exist on disk with identical bytes, and no entry may appear twice.
pub fn verify(archive_path: &Path, base_dir: &Path) -> Result<VerifyReport> {
    let mut zip = open(archive_path)?;
    let mut seen = HashSet::new();
    let mut bytes = 0u64;
    let mut entries = 0usize;

    for i in 0..zip.len() {
        let mut file = zip.by_index(i).map_err(ScaffoldError::zip(archive_path))?;
        if file.is_dir() {
            continue;
        }
        let name = file.name().to_string();
        let relative = file
            .enclosed_name()
            .ok_or_else(|| ScaffoldError::ArchiveMismatch(format!("unsafe entry name '{name}'")))?;
        if !seen.insert(name.clone()) {
            return Err(ScaffoldError::ArchiveMismatch(format!(
                "duplicate entry '{name}'"
            )));
        }

        let mut archived = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut archived)
            .map_err(ScaffoldError::archive_io(archive_path))?;

        let on_disk_path = base_dir.join(relative);
        let on_disk = std::fs::read(&on_disk_path).map_err(|_| {
            ScaffoldError::ArchiveMismatch(format!("'{name}' is missing on disk"))
        })?;
        if on_disk != archived {
            return Err(ScaffoldError::ArchiveMismatch(format!(
                "'{name}' differs from {}",
                on_disk_path.display()
            )));
        }

        bytes += archived.len() as u64;
        entries += 1;
    }

    Ok(VerifyReport { entries, bytes })
}

fn open(archive_path: &Path) -> Result<ZipArchive<File>> {
    let file = File::open(archive_path).map_err(ScaffoldError::archive_io(archive_path))?;
    ZipArchive::new(file).map_err(ScaffoldError::zip(archive_path))
}
