//! # 数据模型模块
//!
//! 定义滤片、通道与计算结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `transmission/` 和 `commands/` 使用
//! - 子模块: filter, channel, result

pub mod channel;
pub mod filter;
pub mod result;

pub use channel::Channel;
pub use filter::Filter;
pub use result::{CurveStats, TransmissionResult};
