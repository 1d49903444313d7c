//! # 工具函数模块
//!
//! 提供单位换算、美化输出、进度条等工具。
//!
//! ## 依赖关系
//! - 被 `models/`, `transmission/`, `commands/` 使用
//! - 子模块: units, output, progress

pub mod output;
pub mod progress;
pub mod units;
