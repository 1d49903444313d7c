//! # rossfilter 命令行入口
//!
//! ## 子命令
//! - `calculate` - 计算通道透过率并输出图表/数据
//! - `materials` - 列出可用材料
//! - `batch`     - 批量计算配置文件
//!
//! 日志级别默认 `warn`，`--verbose` 时为 `debug`，`RUST_LOG` 优先。

use clap::Parser;
use rossfilter::cli::Cli;
use rossfilter::{commands, utils};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
