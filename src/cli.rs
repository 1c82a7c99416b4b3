//! find-files 工具的命令行接口
//!
//! 本模块提供了参数解析和验证功能，
//! 包括 `--` 分隔的 exec 命令的拆分，
//! 以及针对未识别参数的修正建议。

use clap::error::{ContextKind, ErrorKind};
use clap::{Parser, ValueEnum};
use log::{error, info, LevelFilter};
use std::path::Path;

/// 类似 Unix find 命令的简易文件查找工具
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// 日志级别 (debug, info, warning, error, critical)
    #[arg(
        short = 'l',
        long,
        value_name = "LEVEL",
        default_value = "info",
        value_parser = parse_log_level
    )]
    pub loglevel: LevelFilter,

    /// 搜索的起始目录（默认：当前目录），支持 $VAR 与 ~ 展开
    #[arg(short = 's', long, value_name = "PATH")]
    pub starting_dir: Option<String>,

    /// 限制结果为目录 'd' 或文件 'f'
    #[arg(long = "type", value_name = "TYPE", value_enum)]
    pub file_type: Option<FileType>,

    /// glob 搜索模式。通配符为 '*'，'**' 表示"此目录及其所有子目录，
    /// 递归匹配"。可多次指定，多个模式按逻辑或组合。
    #[arg(
        short = 'p',
        long = "pattern",
        value_name = "PATTERN",
        required = true
    )]
    pub patterns: Vec<String>,
}

impl Cli {
    /// 起始目录：未指定时取配置期捕获的工作目录
    pub fn starting_dir_or(&self, config_cwd: &Path) -> String {
        self.starting_dir
            .clone()
            .unwrap_or_else(|| config_cwd.display().to_string())
    }
}

/// 支持的条目类型过滤
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// 目录
    #[value(name = "d")]
    Directory,
    /// 普通文件
    #[value(name = "f")]
    File,
}

/// 解析日志级别名称（大小写不敏感）
///
/// `log` crate 没有 CRITICAL 级别，按 ERROR 处理。
fn parse_log_level(arg: &str) -> Result<LevelFilter, String> {
    match arg.to_ascii_uppercase().as_str() {
        "DEBUG" => Ok(LevelFilter::Debug),
        "INFO" => Ok(LevelFilter::Info),
        "WARNING" | "WARN" => Ok(LevelFilter::Warn),
        "ERROR" => Ok(LevelFilter::Error),
        "CRITICAL" => Ok(LevelFilter::Error),
        other => Err(format!("{} is not a valid log level", other)),
    }
}

/// 在第一个 `--` 处拆分参数向量：
/// 前半部分交给 clap 解析，后半部分原样作为 exec 命令模板
pub fn split_exec_args(argv: &[String]) -> (Vec<String>, Vec<String>) {
    match argv.iter().position(|arg| arg == "--") {
        Some(index) => (argv[..index].to_vec(), argv[index + 1..].to_vec()),
        None => (argv.to_vec(), Vec::new()),
    }
}

/// 从 clap 错误中取出未识别的参数
pub fn unknown_arg(err: &clap::Error) -> Option<String> {
    if err.kind() != ErrorKind::UnknownArgument {
        return None;
    }
    err.get(ContextKind::InvalidArg).map(|v| v.to_string())
}

/// 针对未识别的参数输出修正建议：
/// 提示用户在其前面插入 `--`，将它转发给 exec 命令
pub fn report_unknown_arg(argv: &[String], unknown: &str) {
    error!("Unrecognized argument: {}", unknown);
    info!("");
    info!("Did you mean to pass this argument to the exec command?");
    info!("Insert a -- in front of it to forward it through:");
    info!("");
    if let Some(fixed) = build_forward_hint(argv, unknown) {
        let rendered: Vec<String> = fixed.iter().map(|arg| shell_quote(arg)).collect();
        info!("  {}", rendered.join(" "));
    }
    info!("");
}

/// 构造修正后的命令行：去掉原有的第一个 `--`，
/// 在未识别参数之前插入 `--`
pub fn build_forward_hint(argv: &[String], unknown: &str) -> Option<Vec<String>> {
    let index = argv.iter().position(|arg| arg == unknown)?;

    let mut rest: Vec<String> = argv[index..].to_vec();
    if let Some(sep) = rest.iter().position(|arg| arg == "--") {
        rest.remove(sep);
    }

    let mut fixed: Vec<String> = argv[..index].to_vec();
    fixed.push("--".to_string());
    fixed.extend(rest);
    Some(fixed)
}

/// 对参数做 shell 引用，便于示例命令行直接复制执行
pub fn shell_quote(arg: &str) -> String {
    let safe = |c: char| c.is_ascii_alphanumeric() || "@%+=:,./_-".contains(c);
    if !arg.is_empty() && arg.chars().all(safe) {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
