//! 基于 glob 模式查找文件和目录的库
//!
//! 本库提供了类似 Unix find 的文件查找功能，支持：
//! - 以 `*` 和递归 `**` 通配符进行 glob 匹配
//! - 按条目类型（文件/目录）过滤
//! - 结果按绝对路径排序后，以相对路径逐行输出
//! - 对每个匹配结果同步执行用户命令（`%f` 占位符替换）
//! - 详细的错误报告
//!
//! # 示例
//!
//! 基本用法：
//! ```no_run
//! use std::env;
//! use find_files::{matcher, report, resolve};
//!
//! // 解析起始目录（支持 $VAR 与 ~ 展开）
//! let starting_dir = resolve::resolve_starting_dir("~/projects").unwrap();
//!
//! // 展开模式并收集匹配结果
//! let patterns = vec!["**/*.rs".to_string()];
//! let matches = matcher::find_matches(&starting_dir, &patterns, None).unwrap();
//!
//! // 按排序后的顺序输出
//! let report_cwd = env::current_dir().unwrap();
//! report::report_matches(&matches, &report_cwd, &[]).unwrap();
//! ```
//!
//! 更多用法请参考各模块文档。

pub mod cli;
pub mod errors;
pub mod matcher;
pub mod report;
pub mod resolve;

// Re-export main types for convenience
pub use errors::{FindError, FindResult};
