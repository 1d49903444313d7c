//! # 曲线选择
//!
//! 把计算结果整理成带标签的曲线列表，供绘图与导出使用：
//! - 通道组合透过率 `Channel N`
//! - 单层透过率 `Channel N · Be (10.0 µm)`
//! - 相邻通道差值 `|Ch N - Ch N+1|`
//!
//! 排列顺序：每个通道后紧跟其各层，最后是差值。
//!
//! ## 依赖关系
//! - 被 `transmission/export.rs`, `transmission/plot.rs`, `commands/` 使用
//! - 使用 `transmission/calculator.rs` 计算单层曲线

use crate::error::Result;
use crate::material::MaterialDatabase;
use crate::models::TransmissionResult;
use crate::transmission::Calculator;

/// 曲线类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Channel,
    Layer,
    Difference,
}

/// 带标签的曲线
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub kind: SeriesKind,
    pub values: Vec<f64>,
}

/// 需要输出哪些曲线
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesSelection {
    pub channels: bool,
    pub layers: bool,
    pub differences: bool,
}

impl Default for SeriesSelection {
    fn default() -> Self {
        Self {
            channels: true,
            layers: false,
            differences: true,
        }
    }
}

/// 按选择收集曲线
///
/// 单层曲线在结果的能量网格上重新计算，应在计算后、修改通道前调用。
pub fn collect_series<D: MaterialDatabase>(
    calculator: &Calculator<D>,
    result: &TransmissionResult,
    selection: SeriesSelection,
) -> Result<Vec<Series>> {
    let mut series = Vec::new();

    for (c_idx, transmission) in result.transmissions().iter().enumerate() {
        if selection.channels {
            series.push(Series {
                label: format!("Channel {}", c_idx + 1),
                kind: SeriesKind::Channel,
                values: transmission.clone(),
            });
        }

        if selection.layers {
            let channel = calculator.channel(c_idx)?;
            for (f_idx, filter) in channel.filters().iter().enumerate() {
                let values =
                    calculator.calculate_layer_transmission(c_idx, f_idx, result.energies_ev())?;
                series.push(Series {
                    label: format!("Channel {} · {}", c_idx + 1, filter),
                    kind: SeriesKind::Layer,
                    values,
                });
            }
        }
    }

    if selection.differences {
        for (i, difference) in result.differences().iter().enumerate() {
            series.push(Series {
                label: format!("|Ch {} - Ch {}|", i + 1, i + 2),
                kind: SeriesKind::Difference,
                values: difference.clone(),
            });
        }
    }

    Ok(series)
}
