use std::fs;
use std::path::{Path, PathBuf};

use crate::GeneratedFile;
use crate::error::WriteError;

/// How artifact write failures are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Stop at the first failed artifact.
    Strict,
    /// Attempt every artifact and report all failures at once.
    BestEffort,
}

/// Write generated files under the given base directory.
///
/// Returns the paths written. In `BestEffort` mode a partial failure still
/// writes the remaining artifacts, then reports one aggregated error so the
/// caller can tell "all written" from "partial write".
pub fn write_files(
    base: &Path,
    files: &[GeneratedFile],
    mode: WriteMode,
) -> Result<Vec<PathBuf>, WriteError> {
    let mut written = Vec::new();
    let mut failures = Vec::new();

    for file in files {
        let path = base.join(&file.path);
        let result = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|()| fs::write(&path, &file.content));
        match result {
            Ok(()) => {
                log::debug!("wrote {}", path.display());
                written.push(path);
            }
            Err(source) => match mode {
                WriteMode::Strict => return Err(WriteError::Io { path, source }),
                WriteMode::BestEffort => {
                    log::error!("failed to write {}: {source}", path.display());
                    failures.push((path, source));
                }
            },
        }
    }

    if failures.is_empty() {
        Ok(written)
    } else {
        Err(WriteError::Partial {
            written: written.len(),
            total: files.len(),
            failures,
        })
    }
}
