//! # 多通道透过率计算器
//!
//! 持有有序的通道集合，负责：
//! 1. 通道与滤片的增删改（先校验，失败时状态不变）
//! 2. 由 keV 边界构造 eV 能量网格
//! 3. 逐通道计算透过率
//! 4. 计算相邻通道的绝对差
//!
//! 通道以位置索引标识，删除后后续索引前移。
//! 每次计算都从头重算，不缓存任何查询结果。
//!
//! ## 依赖关系
//! - 被 `commands/`, `config.rs` 调用
//! - 使用 `models/` 的 Channel, TransmissionResult
//! - 使用 `material/` 的 MaterialDatabase

use crate::error::{IndexTarget, Result, RossFilterError};
use crate::material::{MaterialDatabase, TableDatabase};
use crate::models::{Channel, TransmissionResult};
use crate::utils::units::{kev_to_ev, um_to_cm};

/// 界面上“未选择材料”的占位值
pub const NO_SELECTION: &str = "Select Material";

/// 能量网格点数上限
pub const MAX_GRID_POINTS: usize = 5_000_000;

/// 透过率计算器
#[derive(Debug, Clone)]
pub struct Calculator<D: MaterialDatabase = TableDatabase> {
    db: D,
    channels: Vec<Channel>,
}

impl Default for Calculator<TableDatabase> {
    fn default() -> Self {
        Self::new(TableDatabase::builtin())
    }
}

impl<D: MaterialDatabase> Calculator<D> {
    /// 以给定材料数据库创建空计算器
    pub fn new(db: D) -> Self {
        Self {
            db,
            channels: Vec::new(),
        }
    }

    /// 全部通道
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// 按索引获取通道
    pub fn channel(&self, index: usize) -> Result<&Channel> {
        self.channels.get(index).ok_or(RossFilterError::IndexOutOfRange {
            target: IndexTarget::Channel,
            index,
            len: self.channels.len(),
        })
    }

    fn channel_mut(&mut self, index: usize) -> Result<&mut Channel> {
        let len = self.channels.len();
        self.channels
            .get_mut(index)
            .ok_or(RossFilterError::IndexOutOfRange {
                target: IndexTarget::Channel,
                index,
                len,
            })
    }

    /// 追加空通道，返回其索引
    pub fn add_channel(&mut self) -> usize {
        self.channels.push(Channel::new());
        self.channels.len() - 1
    }

    /// 删除通道，后续通道索引减一
    pub fn remove_channel(&mut self, index: usize) -> Result<()> {
        self.channel(index)?;
        self.channels.remove(index);
        log::debug!("removed channel {}, {} left", index, self.channels.len());
        Ok(())
    }

    /// 向通道追加滤片，厚度单位 µm
    pub fn add_filter_to_channel(
        &mut self,
        channel_index: usize,
        material: &str,
        thickness_um: f64,
        density: Option<f64>,
    ) -> Result<()> {
        check_selected(channel_index, material)?;
        let thickness_cm = um_to_cm(thickness_um);

        self.channel(channel_index)?;
        let db = &self.db;
        self.channels[channel_index].add_filter(db, material, thickness_cm, density)?;

        log::debug!(
            "channel {}: added {} ({} µm)",
            channel_index,
            material,
            thickness_um
        );
        Ok(())
    }

    /// 从通道删除滤片
    pub fn remove_filter_from_channel(
        &mut self,
        channel_index: usize,
        filter_index: usize,
    ) -> Result<()> {
        self.channel_mut(channel_index)?.remove_filter(filter_index)?;
        Ok(())
    }

    /// 替换通道中的滤片，厚度单位 µm
    pub fn update_filter_in_channel(
        &mut self,
        channel_index: usize,
        filter_index: usize,
        material: &str,
        thickness_um: f64,
        density: Option<f64>,
    ) -> Result<()> {
        check_selected(channel_index, material)?;
        let thickness_cm = um_to_cm(thickness_um);

        self.channel(channel_index)?;
        let db = &self.db;
        self.channels[channel_index].update_filter(
            db,
            filter_index,
            material,
            thickness_cm,
            density,
        )
    }

    /// 在 keV 能量范围上计算所有通道的透过率与相邻差值
    pub fn calculate_transmission(
        &self,
        start_kev: f64,
        stop_kev: f64,
        step_kev: f64,
    ) -> Result<TransmissionResult> {
        let start = kev_to_ev(start_kev);
        let stop = kev_to_ev(stop_kev);
        let step = kev_to_ev(step_kev);

        let energies_ev = energy_grid(start, stop, step)?;

        if self.channels.is_empty() {
            return Err(RossFilterError::NoChannels);
        }

        log::debug!(
            "calculating {} channel(s) over {} energy points",
            self.channels.len(),
            energies_ev.len()
        );

        let transmissions = self
            .channels
            .iter()
            .map(|channel| channel.calculate_transmission(&self.db, &energies_ev))
            .collect::<Result<Vec<_>>>()?;

        let differences = transmissions
            .windows(2)
            .map(|pair| Channel::difference(&pair[0], &pair[1]))
            .collect::<Result<Vec<_>>>()?;

        Ok(TransmissionResult::new(
            energies_ev,
            transmissions,
            differences,
        ))
    }

    /// 单独计算某通道中某一层的透过率
    pub fn calculate_layer_transmission(
        &self,
        channel_index: usize,
        filter_index: usize,
        energies_ev: &[f64],
    ) -> Result<Vec<f64>> {
        self.channel(channel_index)?
            .calculate_single_filter(&self.db, filter_index, energies_ev)
    }

    /// 清空所有通道
    pub fn reset(&mut self) {
        self.channels.clear();
    }
}

/// 拒绝“未选择”占位值，消息中给出从 1 开始的通道编号
fn check_selected(channel_index: usize, material: &str) -> Result<()> {
    if material.trim().is_empty() || material == NO_SELECTION {
        return Err(RossFilterError::MaterialNotSelected {
            channel: channel_index + 1,
        });
    }
    Ok(())
}

/// 构造能量网格 (eV)
///
/// 从 `start` 开始以 `step` 递增，取 `[start, stop + step)` 内的点，
/// 点数为 `ceil((stop + step - start) / step)`。
/// 当范围不是步长整数倍时，最后一点会超过 `stop`，这是预期行为。
pub fn energy_grid(start_ev: f64, stop_ev: f64, step_ev: f64) -> Result<Vec<f64>> {
    if !start_ev.is_finite() || !stop_ev.is_finite() {
        return Err(RossFilterError::InvalidRange(
            "Energy bounds must be finite numbers".to_string(),
        ));
    }
    if !step_ev.is_finite() {
        return Err(RossFilterError::InvalidStep(
            "Step size must be a finite number".to_string(),
        ));
    }
    if start_ev >= stop_ev {
        return Err(RossFilterError::InvalidRange(
            "Start energy must be less than stop energy".to_string(),
        ));
    }
    if step_ev <= 0.0 {
        return Err(RossFilterError::InvalidStep(
            "Step size must be positive".to_string(),
        ));
    }
    if start_ev < 0.0 {
        return Err(RossFilterError::InvalidRange(
            "Start energy must be positive".to_string(),
        ));
    }

    let points = ((stop_ev + step_ev - start_ev) / step_ev).ceil();
    if points > MAX_GRID_POINTS as f64 {
        return Err(RossFilterError::InvalidStep(format!(
            "Step size too small: {} energy points exceed the limit of {}",
            points, MAX_GRID_POINTS
        )));
    }

    Ok((0..points as usize)
        .map(|i| start_ev + i as f64 * step_ev)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::stub::{StubDatabase, BROKEN};

    fn stub_calculator() -> Calculator<StubDatabase> {
        Calculator::new(StubDatabase)
    }

    #[test]
    fn test_add_channel_returns_position() {
        let mut calc = stub_calculator();
        assert_eq!(calc.add_channel(), 0);
        assert_eq!(calc.add_channel(), 1);
        assert_eq!(calc.channels().len(), 2);
    }

    #[test]
    fn test_remove_channel_invalid_index() {
        let mut calc = stub_calculator();
        calc.add_channel();
        calc.add_channel();

        let err = calc.remove_channel(5).unwrap_err();
        assert!(matches!(
            err,
            RossFilterError::IndexOutOfRange {
                target: IndexTarget::Channel,
                index: 5,
                len: 2
            }
        ));
        assert_eq!(calc.channels().len(), 2);
    }

    #[test]
    fn test_remove_channel_shifts_indices() {
        let mut calc = stub_calculator();
        calc.add_channel();
        calc.add_channel();
        calc.add_filter_to_channel(1, "Al", 5.0, None).unwrap();

        calc.remove_channel(0).unwrap();
        assert_eq!(calc.channels().len(), 1);
        assert_eq!(calc.channel(0).unwrap().filters()[0].material(), "Al");
    }

    #[test]
    fn test_add_filter_converts_micrometres() {
        let mut calc = stub_calculator();
        calc.add_channel();
        calc.add_filter_to_channel(0, "Be", 100.0, None).unwrap();
        assert_eq!(calc.channel(0).unwrap().filters()[0].thickness_cm(), 0.01);
    }

    #[test]
    fn test_add_filter_rejects_no_selection() {
        let mut calc = stub_calculator();
        calc.add_channel();
        calc.add_channel();

        let err = calc
            .add_filter_to_channel(1, NO_SELECTION, 10.0, None)
            .unwrap_err();
        assert_eq!(err.to_string(), "Please select a material for Channel 2");
        assert!(matches!(
            calc.add_filter_to_channel(0, "", 10.0, None),
            Err(RossFilterError::MaterialNotSelected { channel: 1 })
        ));
        assert!(calc.channels().iter().all(Channel::is_empty));
    }

    #[test]
    fn test_add_filter_invalid_channel() {
        let mut calc = stub_calculator();
        calc.add_channel();
        assert!(matches!(
            calc.add_filter_to_channel(3, "Be", 10.0, None),
            Err(RossFilterError::IndexOutOfRange {
                target: IndexTarget::Channel,
                index: 3,
                len: 1
            })
        ));
    }

    #[test]
    fn test_add_unknown_material() {
        let mut calc = stub_calculator();
        calc.add_channel();
        assert!(matches!(
            calc.add_filter_to_channel(0, "Unobtainium", 10.0, None),
            Err(RossFilterError::MaterialNotFound { .. })
        ));
        assert!(calc.channel(0).unwrap().is_empty());
    }

    #[test]
    fn test_remove_and_update_filter_in_channel() {
        let mut calc = stub_calculator();
        calc.add_channel();
        calc.add_filter_to_channel(0, "Be", 10.0, None).unwrap();
        calc.add_filter_to_channel(0, "Al", 5.0, None).unwrap();

        calc.update_filter_in_channel(0, 1, "Cu", 2.0, Some(4.0))
            .unwrap();
        let replaced = &calc.channel(0).unwrap().filters()[1];
        assert_eq!(replaced.material(), "Cu");
        assert_eq!(replaced.density(), Some(4.0));
        assert!((replaced.thickness_um() - 2.0).abs() < 1e-12);

        assert!(calc.update_filter_in_channel(2, 0, "Cu", 2.0, None).is_err());
        assert!(calc.remove_filter_from_channel(0, 7).is_err());

        calc.remove_filter_from_channel(0, 0).unwrap();
        assert_eq!(calc.channel(0).unwrap().len(), 1);
        assert!(matches!(
            calc.remove_filter_from_channel(1, 0),
            Err(RossFilterError::IndexOutOfRange {
                target: IndexTarget::Channel,
                ..
            })
        ));
    }

    #[test]
    fn test_calculate_validation_errors() {
        let mut calc = stub_calculator();

        // 范围检查先于通道检查
        assert!(matches!(
            calc.calculate_transmission(10.0, 1.0, 1.0),
            Err(RossFilterError::InvalidRange(_))
        ));
        assert!(matches!(
            calc.calculate_transmission(5.0, 5.0, 1.0),
            Err(RossFilterError::InvalidRange(_))
        ));
        assert!(matches!(
            calc.calculate_transmission(1.0, 10.0, 0.0),
            Err(RossFilterError::InvalidStep(_))
        ));
        assert!(matches!(
            calc.calculate_transmission(1.0, 10.0, -1.0),
            Err(RossFilterError::InvalidStep(_))
        ));
        assert!(matches!(
            calc.calculate_transmission(-1.0, 10.0, 1.0),
            Err(RossFilterError::InvalidRange(_))
        ));
        assert!(matches!(
            calc.calculate_transmission(f64::NAN, 10.0, 1.0),
            Err(RossFilterError::InvalidRange(_))
        ));
        assert!(matches!(
            calc.calculate_transmission(1.0, 10.0, 1.0),
            Err(RossFilterError::NoChannels)
        ));

        calc.add_channel();
        assert!(calc.calculate_transmission(1.0, 10.0, 1.0).is_ok());
    }

    #[test]
    fn test_result_shape() {
        let mut calc = stub_calculator();
        for _ in 0..3 {
            calc.add_channel();
        }
        calc.add_filter_to_channel(0, "Be", 10.0, None).unwrap();
        calc.add_filter_to_channel(2, "Cu", 1.0, None).unwrap();

        let result = calc.calculate_transmission(1.0, 5.0, 0.5).unwrap();
        let n = result.energies_ev().len();
        assert_eq!(result.transmissions().len(), 3);
        assert_eq!(result.differences().len(), 2);
        assert!(result
            .transmissions()
            .iter()
            .chain(result.differences())
            .all(|curve| curve.len() == n));
        // 空通道透过率恒为 1
        assert!(result.transmissions()[1].iter().all(|&t| t == 1.0));
        assert!(result.transmissions()[0]
            .iter()
            .all(|&t| t > 0.0 && t <= 1.0));
    }

    #[test]
    fn test_single_channel_has_no_differences() {
        let mut calc = stub_calculator();
        calc.add_channel();
        let result = calc.calculate_transmission(1.0, 2.0, 0.5).unwrap();
        assert_eq!(result.transmissions().len(), 1);
        assert!(result.differences().is_empty());
    }

    #[test]
    fn test_differences_match_consecutive_channels() {
        let mut calc = stub_calculator();
        calc.add_channel();
        calc.add_channel();
        calc.add_filter_to_channel(0, "Be", 1000.0, None).unwrap();
        calc.add_filter_to_channel(1, "Al", 1000.0, None).unwrap();

        let result = calc.calculate_transmission(1.0, 3.0, 1.0).unwrap();
        let expected = ((-0.2f64).exp() - (-1.0f64).exp()).abs();
        for d in &result.differences()[0] {
            assert!((d - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_result_is_detached_from_later_mutation() {
        let mut calc = stub_calculator();
        calc.add_channel();
        calc.add_filter_to_channel(0, "Be", 10.0, None).unwrap();
        let before = calc.calculate_transmission(1.0, 3.0, 1.0).unwrap();

        calc.add_filter_to_channel(0, "Cu", 10.0, None).unwrap();
        let after = calc.calculate_transmission(1.0, 3.0, 1.0).unwrap();

        assert_ne!(before, after);
        assert!(before.transmissions()[0][0] > after.transmissions()[0][0]);
    }

    #[test]
    fn test_lookup_failure_surfaces_as_unexpected() {
        let mut calc = stub_calculator();
        calc.add_channel();
        calc.add_filter_to_channel(0, BROKEN, 1.0, None).unwrap();
        assert!(matches!(
            calc.calculate_transmission(1.0, 2.0, 1.0),
            Err(RossFilterError::Unexpected(_))
        ));
    }

    #[test]
    fn test_layer_transmission() {
        let mut calc = stub_calculator();
        calc.add_channel();
        calc.add_filter_to_channel(0, "Be", 1000.0, None).unwrap();
        let t = calc
            .calculate_layer_transmission(0, 0, &[1000.0, 2000.0])
            .unwrap();
        assert!((t[1] - (-0.2f64).exp()).abs() < 1e-12);
        assert!(calc.calculate_layer_transmission(1, 0, &[1000.0]).is_err());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut calc = stub_calculator();
        calc.add_channel();
        calc.add_filter_to_channel(0, "Be", 10.0, None).unwrap();

        calc.reset();
        assert!(calc.channels().is_empty());
        calc.reset();
        assert!(calc.channels().is_empty());
        assert!(matches!(
            calc.calculate_transmission(1.0, 2.0, 1.0),
            Err(RossFilterError::NoChannels)
        ));
    }

    #[test]
    fn test_energy_grid_exact_multiple() {
        let grid = energy_grid(1000.0, 2000.0, 500.0).unwrap();
        assert_eq!(grid, vec![1000.0, 1500.0, 2000.0]);
    }

    #[test]
    fn test_energy_grid_overshoots_stop() {
        // (2000 + 300 - 1000) / 300 = 4.33 -> 5 个点，最后一点超过 stop
        let grid = energy_grid(1000.0, 2000.0, 300.0).unwrap();
        assert_eq!(grid, vec![1000.0, 1300.0, 1600.0, 1900.0, 2200.0]);
        assert!(*grid.last().unwrap() > 2000.0);
    }

    #[test]
    fn test_energy_grid_allows_zero_start() {
        let grid = energy_grid(0.0, 1000.0, 250.0).unwrap();
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0], 0.0);
    }

    #[test]
    fn test_energy_grid_point_limit() {
        assert!(matches!(
            energy_grid(0.0, 1e9, 1e-3),
            Err(RossFilterError::InvalidStep(_))
        ));
    }

    #[test]
    fn test_two_channel_beryllium_aluminum() {
        let mut calc: Calculator = Calculator::default();
        calc.add_channel();
        calc.add_channel();
        calc.add_filter_to_channel(0, "beryllium", 10.0, None)
            .unwrap();
        calc.add_filter_to_channel(1, "aluminum", 5.0, None).unwrap();

        let result = calc.calculate_transmission(1.0, 10.0, 1.0).unwrap();
        assert_eq!(result.transmissions().len(), 2);
        assert_eq!(result.differences().len(), 1);

        let energies = result.energies_ev();
        assert_eq!(energies.len(), 10);
        for (i, e) in energies.iter().enumerate() {
            assert_eq!(*e, 1000.0 * (i + 1) as f64);
        }

        for curve in result.transmissions() {
            assert_eq!(curve.len(), 10);
            assert!(curve.iter().all(|&t| t > 0.0 && t <= 1.0));
        }
        // 铍在此范围内没有吸收边，透过率随能量单调上升
        assert!(result.transmissions()[0].windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_titanium_vanadium_ross_pair() {
        let mut calc: Calculator = Calculator::default();
        let ti = calc.add_channel();
        let v = calc.add_channel();
        calc.add_filter_to_channel(ti, "Ti", 10.0, None).unwrap();
        calc.add_filter_to_channel(v, "V", 6.5, None).unwrap();

        let result = calc.calculate_transmission(3.0, 8.0, 0.05).unwrap();
        let difference = &result.differences()[0];
        let stats = result.stats(difference).unwrap();

        // 通带位于 Ti K 边与 V K 边之间
        assert!(
            stats.peak_energy_ev > 4966.4 && stats.peak_energy_ev < 5465.1,
            "peak at {} eV",
            stats.peak_energy_ev
        );
        assert!(stats.max > 0.5, "peak difference {}", stats.max);

        // 通带外两片透过率基本平衡
        for (&e, &d) in result.energies_ev().iter().zip(difference) {
            if e < 4500.0 || e > 7500.0 {
                assert!(d < 0.05, "difference {} at {} eV", d, e);
            }
        }
    }

    #[test]
    fn test_soft_xray_grid_below_one_kev() {
        let mut calc: Calculator = Calculator::default();
        calc.add_channel();
        calc.add_filter_to_channel(0, "Be", 10.0, None).unwrap();

        let result = calc.calculate_transmission(0.5, 5.0, 0.5).unwrap();
        assert_eq!(result.energies_ev()[0], 500.0);
        assert!(result.transmissions()[0].iter().all(|&t| t > 0.0 && t <= 1.0));
    }
}
