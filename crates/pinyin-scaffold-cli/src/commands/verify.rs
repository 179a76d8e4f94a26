use anyhow::{Context, Result};
use sha2::{Digest, Sha256};

use pinyin_scaffold_core::archive::{self, VerifyReport};
use pinyin_scaffold_core::generators::GeneratorKind;

use crate::output;
use crate::RunArgs;

/// Check that `kind`'s archive still matches the folders next to it.
pub fn run(kind: GeneratorKind, args: &RunArgs) -> Result<VerifyReport> {
    let config = super::resolve_config(kind, args)?;
    let archive_path = config.archive_path();

    output::print_header(&format!("pinyin-scaffold verify: {kind}"));
    output::print_key_value("Archive", &archive_path.display().to_string());

    let report = archive::verify(&archive_path, &config.output_root)?;
    let digest = sha256_file(&archive_path)?;

    output::print_key_value("Entries", &report.entries.to_string());
    output::print_key_value("Bytes", &report.bytes.to_string());
    output::print_key_value("SHA-256", &digest);
    output::print_success("Archive matches the tree on disk");

    Ok(report)
}

fn sha256_file(path: &std::path::Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}
