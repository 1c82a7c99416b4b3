use std::env;
use std::process;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use log::{error, LevelFilter};

use find_files::cli::{self, Cli};
use find_files::{matcher, report, resolve};

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let argv: Vec<String> = env::args().collect();

    // 在第一个 `--` 处拆分：其后的部分是 exec 命令模板
    let (head, exec_args) = cli::split_exec_args(&argv);

    // 解析命令行参数
    let cli = match Cli::try_parse_from(&head) {
        Ok(cli) => cli,
        Err(err) => return handle_parse_error(err, &argv),
    };

    // 初始化日志
    env_logger::Builder::new().filter_level(cli.loglevel).init();

    match execute(&cli, &exec_args) {
        Ok(()) => 0,
        Err(err) => {
            error!("{:#}", err);
            1
        }
    }
}

fn handle_parse_error(err: clap::Error, argv: &[String]) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            0
        }
        ErrorKind::UnknownArgument => {
            // 日志尚未安装，按默认级别安装后再输出修正建议
            env_logger::Builder::new()
                .filter_level(LevelFilter::Info)
                .init();
            match cli::unknown_arg(&err) {
                Some(unknown) => cli::report_unknown_arg(argv, &unknown),
                None => {
                    let _ = err.print();
                }
            }
            1
        }
        _ => {
            let _ = err.print();
            1
        }
    }
}

fn execute(cli: &Cli, exec_args: &[String]) -> Result<()> {
    // 配置期与报告期的工作目录分别显式捕获（见 report_matches）
    let config_cwd =
        env::current_dir().context("failed to determine the current working directory")?;

    let starting_dir = resolve::resolve_starting_dir(&cli.starting_dir_or(&config_cwd))?;
    let matches = matcher::find_matches(&starting_dir, &cli.patterns, cli.file_type)?;

    let report_cwd =
        env::current_dir().context("failed to determine the current working directory")?;
    report::report_matches(&matches, &report_cwd, exec_args)?;

    Ok(())
}
