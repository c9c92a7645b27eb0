use anyhow::{Context, Result};
use glob::Pattern;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Compile exclude glob patterns, skipping invalid ones with a warning.
pub fn compile_exclude_patterns(patterns: &[String]) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                warn!("Ignoring invalid exclude pattern '{}': {}", p, e);
                None
            }
        })
        .collect()
}

fn is_excluded(path: &Path, excludes: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    let file_name = path.file_name().map(|n| n.to_string_lossy());
    excludes.iter().any(|pattern| {
        pattern.matches(&path_str)
            || file_name
                .as_deref()
                .map_or(false, |name| pattern.matches(name))
    })
}

/// Expand a list of file and directory targets into a flat file list.
///
/// Directories are walked recursively; the result is sorted and deduplicated
/// so output is deterministic regardless of argument or readdir order.
pub fn collect_files(targets: &[PathBuf], excludes: &[Pattern]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for target in targets {
        let metadata = fs::metadata(target)
            .with_context(|| format!("Failed to access {}", target.display()))?;

        if metadata.is_dir() {
            walk_dir(target, excludes, &mut files)?;
        } else if !is_excluded(target, excludes) {
            files.push(target.clone());
        }
    }

    files.sort();
    files.dedup();
    debug!("Collected {} files from {} targets", files.len(), targets.len());
    Ok(files)
}

fn walk_dir(dir: &Path, excludes: &[Pattern], files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if is_excluded(&path, excludes) {
            debug!("Excluded {}", path.display());
            continue;
        }

        if entry.file_type()?.is_dir() {
            walk_dir(&path, excludes, files)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}

/// Read one file's text, tolerating non-UTF-8 bytes.
///
/// Binary content is decoded lossily; it will simply never match the header
/// template. Only an I/O failure is an error.
pub fn read_contents(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
