//! Glob expansion and type filtering
//!
//! This module expands each pattern against the resolved starting directory
//! using glob semantics and applies the optional entry-type filter.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use glob::Pattern;
use log::{debug, warn};

use crate::cli::FileType;
use crate::errors::{FindError, FindResult};

/// Expand every pattern under `starting_dir` and collect the kept paths.
///
/// Patterns are combined with a logical or, in the order given. Paths matched
/// by more than one pattern are kept once per matching pattern. A pattern
/// that matches nothing contributes zero entries, not an error.
pub fn find_matches(
    starting_dir: &Path,
    patterns: &[String],
    file_type: Option<FileType>,
) -> FindResult<Vec<PathBuf>> {
    // The starting directory is matched literally even if its name
    // contains glob metacharacters.
    let root = Pattern::escape(&starting_dir.to_string_lossy());

    let mut results = Vec::new();
    for pattern in patterns {
        let full_pattern = format!("{}{}{}", root, MAIN_SEPARATOR, pattern);
        debug!("Expanding pattern: {}", full_pattern);

        let paths = glob::glob(&full_pattern).map_err(|e| FindError::InvalidPattern {
            pattern: pattern.clone(),
            message: e.msg.to_string(),
        })?;

        for entry in paths {
            match entry {
                // A bare `**` can produce the starting directory itself;
                // results are restricted to its descendants.
                Ok(path) if path == starting_dir => continue,
                Ok(path) => {
                    if keep(&path, file_type) {
                        results.push(path);
                    }
                }
                Err(e) => warn!("Skipping unreadable entry: {}", e),
            }
        }
    }
    Ok(results)
}

/// Recheck the entry type on the filesystem at filter time; glob expansion
/// itself only guarantees name matching.
fn keep(path: &Path, file_type: Option<FileType>) -> bool {
    match file_type {
        None => true,
        Some(FileType::Directory) => path.is_dir(),
        Some(FileType::File) => path.is_file(),
    }
}
