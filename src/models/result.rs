//! # 透过率计算结果
//!
//! 每次计算新建、不可变、不缓存。
//! 之后对通道的修改不会影响已返回的结果。
//!
//! ## 依赖关系
//! - 由 `transmission/calculator.rs` 创建
//! - 被 `transmission/series.rs` 与 `commands/` 读取

use crate::utils::units::ev_to_kev;

use serde::Serialize;

/// 计算结果
///
/// - `transmissions.len()` 等于计算时的通道数
/// - `differences.len()` 等于 `max(通道数 - 1, 0)`
/// - 每条曲线长度都等于 `energies_ev.len()`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransmissionResult {
    energies_ev: Vec<f64>,
    transmissions: Vec<Vec<f64>>,
    differences: Vec<Vec<f64>>,
}

/// 单条曲线的统计
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// 最大值所在能量 (eV)
    pub peak_energy_ev: f64,
}

impl TransmissionResult {
    pub(crate) fn new(
        energies_ev: Vec<f64>,
        transmissions: Vec<Vec<f64>>,
        differences: Vec<Vec<f64>>,
    ) -> Self {
        Self {
            energies_ev,
            transmissions,
            differences,
        }
    }

    /// 能量网格 (eV)，升序
    pub fn energies_ev(&self) -> &[f64] {
        &self.energies_ev
    }

    /// 能量网格 (keV)
    pub fn energies_kev(&self) -> Vec<f64> {
        self.energies_ev.iter().map(|&e| ev_to_kev(e)).collect()
    }

    /// 每个通道的透过率曲线
    pub fn transmissions(&self) -> &[Vec<f64>] {
        &self.transmissions
    }

    /// 相邻通道 i 与 i+1 的差值曲线
    pub fn differences(&self) -> &[Vec<f64>] {
        &self.differences
    }

    /// 计算某条曲线的统计量，空曲线返回 `None`
    pub fn stats(&self, curve: &[f64]) -> Option<CurveStats> {
        if curve.is_empty() || curve.len() != self.energies_ev.len() {
            return None;
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut peak_index = 0;
        for (i, &v) in curve.iter().enumerate() {
            min = min.min(v);
            if v > max {
                max = v;
                peak_index = i;
            }
        }

        Some(CurveStats {
            min,
            max,
            mean: curve.iter().sum::<f64>() / curve.len() as f64,
            peak_energy_ev: self.energies_ev[peak_index],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_peak_energy() {
        let result = TransmissionResult::new(
            vec![1000.0, 2000.0, 3000.0],
            vec![vec![0.1, 0.5, 0.9], vec![0.1, 0.1, 0.8]],
            vec![vec![0.0, 0.4, 0.1]],
        );

        let stats = result.stats(&result.differences()[0]).unwrap();
        assert_eq!(stats.peak_energy_ev, 2000.0);
        assert_eq!(stats.max, 0.4);
        assert_eq!(stats.min, 0.0);
        assert!((stats.mean - 0.5 / 3.0).abs() < 1e-12);

        assert_eq!(result.energies_kev(), vec![1.0, 2.0, 3.0]);
        assert!(result.stats(&[]).is_none());
    }
}
