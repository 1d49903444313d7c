//! # 终端输出
//!
//! 计算结果与批量进度的终端行格式：`[标签] 消息`。
//! 面向用户的结果走这里，内部诊断走 `log`。
//!
//! ## 依赖关系
//! - 被 `commands/` 与 `main.rs` 使用
//! - 使用 `colored` crate 着色（`NO_COLOR` 或非终端时自动关闭）

use colored::{ColoredString, Colorize};
use std::path::Path;

/// 标题栏与分隔线宽度，与汇总表对齐
const RULE_WIDTH: usize = 60;

/// 消息级别，决定行首标签与输出流
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Success,
    Error,
    Warning,
    Info,
    Done,
}

impl Level {
    fn tag(self) -> ColoredString {
        match self {
            Level::Success => "[OK]".green().bold(),
            Level::Error => "[ERR]".red().bold(),
            Level::Warning => "[WARN]".yellow().bold(),
            Level::Info => "[*]".blue().bold(),
            Level::Done => "[DONE]".green().bold(),
        }
    }
}

fn tagged(level: Level, msg: &str) -> String {
    format!("{} {}", level.tag(), msg)
}

fn emit(level: Level, msg: &str) {
    let line = tagged(level, msg);
    match level {
        Level::Error => eprintln!("{}", line),
        _ => println!("{}", line),
    }
}

fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}

pub fn print_success(msg: &str) {
    emit(Level::Success, msg);
}

/// 错误写到 stderr
pub fn print_error(msg: &str) {
    emit(Level::Error, msg);
}

pub fn print_warning(msg: &str) {
    emit(Level::Warning, msg);
}

pub fn print_info(msg: &str) {
    emit(Level::Info, msg);
}

pub fn print_done(msg: &str) {
    emit(Level::Done, msg);
}

/// `[OK] CSV output -> out.csv`
pub fn print_saved(what: &str, path: &Path) {
    let msg = format!("{} {} {}", what.dimmed(), "->".cyan(), path.display());
    emit(Level::Success, &msg);
}

/// 命令开头的标题栏，上下各一条分隔线
pub fn print_header(title: &str) {
    println!("\n{}\n  {}\n{}\n", rule().dimmed(), title.bold(), rule().dimmed());
}

pub fn print_separator() {
    println!("{}", rule().dimmed());
}
