//! # rossfilter - Ross 滤片 X 射线透过率计算器
//!
//! 每个通道是一叠滤片（材料 + 厚度 + 可选密度），按 Beer–Lambert 定律
//! 在能量网格上计算透过率 T(E) = exp(-Σ μᵢ(E)·tᵢ)，并给出相邻通道的差值曲线
//! （Ross 滤片对的通带）。
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── transmission/ (计算器、曲线选择、导出、绘图)
//!   │     ├── models/    (Filter, Channel, TransmissionResult)
//!   │     └── material/  (衰减系数数据库)
//!   ├── config.rs   (配置文件与通道描述)
//!   ├── batch/      (批量并行计算)
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   ├── utils/      (单位换算、终端输出、进度条)
//!   └── error.rs    (错误处理)
//! ```
//!
//! ## 示例
//! ```no_run
//! use rossfilter::Calculator;
//!
//! let mut calc: Calculator = Calculator::default();
//! let ch = calc.add_channel();
//! calc.add_filter_to_channel(ch, "beryllium", 10.0, None)?;
//! let result = calc.calculate_transmission(1.0, 10.0, 0.1)?;
//! assert_eq!(result.transmissions().len(), 1);
//! # Ok::<(), rossfilter::RossFilterError>(())
//! ```

pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod material;
pub mod models;
pub mod transmission;
pub mod utils;

pub use error::{Result, RossFilterError};
pub use material::{MaterialDatabase, TableDatabase};
pub use models::{Channel, Filter, TransmissionResult};
pub use transmission::Calculator;
