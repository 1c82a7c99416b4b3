//! 起始目录的展开与解析
//!
//! 先展开输入中的 `$VAR` 环境变量引用与前导 `~`，
//! 再解析为绝对的、符号链接规范化后的路径。

use std::fs;
use std::path::PathBuf;

use log::debug;

use crate::errors::{FindError, FindResult};

/// 展开并规范化起始目录
///
/// 任何失败（未定义的变量、路径不存在）都映射为
/// [`FindError::StartingDirNotFound`]，并携带展开前的原始输入。
pub fn resolve_starting_dir(raw: &str) -> FindResult<PathBuf> {
    let expanded = shellexpand::full(raw)
        .map_err(|_| FindError::StartingDirNotFound(raw.to_string()))?;
    debug!("Expanded starting dir: {}", expanded);

    fs::canonicalize(expanded.as_ref())
        .map_err(|_| FindError::StartingDirNotFound(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_existing_dir() {
        let dir = tempdir().unwrap();
        let resolved = resolve_starting_dir(&dir.path().display().to_string()).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.is_dir());
    }

    #[test]
    fn test_resolve_missing_dir_keeps_raw_input() {
        let err = resolve_starting_dir("/does/not/exist").unwrap_err();
        match err {
            FindError::StartingDirNotFound(raw) => assert_eq!(raw, "/does/not/exist"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_resolve_expands_env_var() {
        let dir = tempdir().unwrap();
        std::env::set_var("FIND_FILES_TEST_ROOT", dir.path());

        let resolved = resolve_starting_dir("$FIND_FILES_TEST_ROOT").unwrap();
        assert_eq!(resolved, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_undefined_var_is_not_found() {
        let err = resolve_starting_dir("$FIND_FILES_NO_SUCH_VAR/sub").unwrap_err();
        match err {
            FindError::StartingDirNotFound(raw) => {
                assert_eq!(raw, "$FIND_FILES_NO_SUCH_VAR/sub")
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
