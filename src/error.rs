//! # 统一错误处理模块
//!
//! 定义 rossfilter 的所有错误类型，使用 `thiserror` 派生。
//!
//! 核心计算错误（材料、厚度、索引、能量范围）与外层错误（文件、配置、绘图）
//! 共用同一个枚举，变体即错误种类，`Display` 即面向用户的消息。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use std::fmt;
use thiserror::Error;

/// 越界索引所指向的对象
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexTarget {
    Channel,
    Filter,
}

impl fmt::Display for IndexTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexTarget::Channel => write!(f, "channel"),
            IndexTarget::Filter => write!(f, "filter"),
        }
    }
}

/// rossfilter 统一错误类型
#[derive(Error, Debug)]
pub enum RossFilterError {
    // ─────────────────────────────────────────────────────────────
    // 材料 / 滤片校验错误
    // ─────────────────────────────────────────────────────────────
    #[error("Material '{name}' not found in database")]
    MaterialNotFound { name: String },

    /// `channel` 为从 1 开始的显示编号
    #[error("Please select a material for Channel {channel}")]
    MaterialNotSelected { channel: usize },

    #[error("Invalid material name: {0}")]
    InvalidMaterialName(String),

    #[error("Thickness must be a positive number, got {value}")]
    InvalidThickness { value: f64 },

    #[error("Density must be a positive number, got {value}")]
    InvalidDensity { value: f64 },

    #[error("Invalid {target} index {index} (current count: {len})")]
    IndexOutOfRange {
        target: IndexTarget,
        index: usize,
        len: usize,
    },

    // ─────────────────────────────────────────────────────────────
    // 计算错误
    // ─────────────────────────────────────────────────────────────
    #[error("No channels defined. Please add at least one channel.")]
    NoChannels,

    #[error("Invalid energy range: {0}")]
    InvalidRange(String),

    #[error("Invalid energy step: {0}")]
    InvalidStep(String),

    #[error("Calculation error: {0}")]
    Unexpected(String),

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 配置 / 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid configuration in {path}\nReason: {reason}")]
    ConfigError { path: String, reason: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Plot rendering failed: {0}")]
    PlotError(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, RossFilterError>;
