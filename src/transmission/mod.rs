//! # 透过率计算模块
//!
//! 提供 Ross 滤片透过率计算、曲线整理、导出与绘图。
//!
//! ## 子模块
//! - `calculator`: 多通道计算器与能量网格
//! - `series`: 曲线选择与标签
//! - `export`: 数据导出
//! - `plot`: 图表生成
//!
//! ## 依赖关系
//! - 被 `commands/` 与 `config.rs` 使用
//! - 使用 `models/` 与 `material/`

pub mod calculator;
pub mod export;
pub mod plot;
pub mod series;

pub use calculator::{energy_grid, Calculator, NO_SELECTION};
pub use series::{collect_series, Series, SeriesKind, SeriesSelection};
