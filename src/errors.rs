//! find-files 的错误类型定义

use std::io;
use thiserror::Error;

/// Result type for operations that can produce FindError
pub type FindResult<T> = Result<T, FindError>;

/// find-files 的自定义错误类型
#[derive(Error, Debug)]
pub enum FindError {
    /// 起始目录不存在（保留展开前的原始输入）
    #[error("Starting directory '{0}' not found.")]
    StartingDirNotFound(String),

    /// 无效的 glob 模式
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// exec 命令无法启动
    ///
    /// 区别于"子进程已启动但以非零状态退出"——后者不是错误，
    /// 遍历会继续处理剩余的匹配项。
    #[error("Failed to launch '{command}'")]
    ExecLaunch {
        command: String,
        #[source]
        source: io::Error,
    },
}
