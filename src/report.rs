//! Sorted reporting and per-match command execution
//!
//! Matches are sorted by absolute path, printed relative to the report-time
//! working directory, and optionally fed to a user-supplied command with
//! the `%f` placeholder replaced by each match.

use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::errors::{FindError, FindResult};

/// Placeholder replaced with each match's relative path.
pub const PLACEHOLDER: &str = "%f";

/// Print every match in sorted order and, when `exec_template` is non-empty,
/// run the substituted command synchronously for each one.
///
/// A child that starts and exits non-zero does not abort the run; a child
/// that cannot be started at all does.
pub fn report_matches(
    matches: &[PathBuf],
    report_cwd: &Path,
    exec_template: &[String],
) -> FindResult<()> {
    let mut sorted: Vec<&PathBuf> = matches.iter().collect();
    sorted.sort();

    for path in sorted {
        let file_name = relative_to(path, report_cwd);
        println!("{}", file_name);

        if !exec_template.is_empty() {
            run_command(exec_template, &file_name)?;
        }
    }
    Ok(())
}

/// Render `path` relative to `cwd` with native separators. Falls back to the
/// absolute path when `cwd` is not an ancestor of the match.
fn relative_to(path: &Path, cwd: &Path) -> String {
    path.strip_prefix(cwd).unwrap_or(path).display().to_string()
}

/// Substitute the placeholder, run the command, and wait for it to exit.
fn run_command(template: &[String], file_name: &str) -> FindResult<()> {
    let command: Vec<&str> = template
        .iter()
        .map(|arg| {
            if arg == PLACEHOLDER {
                file_name
            } else {
                arg.as_str()
            }
        })
        .collect();
    debug!("Running: {}", command.join(" "));

    let status = Command::new(command[0])
        .args(&command[1..])
        .status()
        .map_err(|source| FindError::ExecLaunch {
            command: command[0].to_string(),
            source,
        })?;
    if !status.success() {
        debug!("Command exited with {}", status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_to_strips_ancestor() {
        let rel = relative_to(Path::new("/work/sub/a.txt"), Path::new("/work"));
        assert_eq!(rel, "sub/a.txt");
    }

    #[test]
    fn test_relative_to_falls_back_to_absolute() {
        let rel = relative_to(Path::new("/elsewhere/a.txt"), Path::new("/work"));
        assert_eq!(rel, "/elsewhere/a.txt");
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_child_is_swallowed() {
        let template = vec!["false".to_string()];
        assert!(run_command(&template, "a.txt").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_failure_is_an_error() {
        let template = vec!["/no/such/binary".to_string(), PLACEHOLDER.to_string()];
        let err = run_command(&template, "a.txt").unwrap_err();
        match err {
            FindError::ExecLaunch { command, .. } => assert_eq!(command, "/no/such/binary"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_placeholder_substitution() {
        use std::fs::File;
        use tempfile::tempdir;

        let dir = tempdir().unwrap();
        let target = dir.path().join("victim.txt");
        File::create(&target).unwrap();

        let template = vec!["rm".to_string(), PLACEHOLDER.to_string()];
        run_command(&template, &target.display().to_string()).unwrap();
        assert!(!target.exists());
    }
}
