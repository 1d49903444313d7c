//! # 透过率图表生成
//!
//! 使用 `plotters` 绘制透过率曲线。
//!
//! ## 功能
//! - x 轴为能量 (keV)，y 轴为透过率 (0-1)
//! - 通道为实线，单层为细线，差值为粗线
//! - 图例
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `transmission/series.rs` 的 Series
//! - 使用 `plotters` 渲染图表

use crate::error::{Result, RossFilterError};
use crate::transmission::{Series, SeriesKind};

use plotters::prelude::*;
use std::path::Path;

const PALETTE: [RGBColor; 8] = [
    RGBColor(0, 102, 204),
    RGBColor(204, 0, 0),
    RGBColor(0, 153, 76),
    RGBColor(230, 138, 0),
    RGBColor(127, 63, 191),
    RGBColor(0, 153, 153),
    RGBColor(153, 102, 51),
    RGBColor(96, 96, 96),
];

/// 生成透过率图表
pub fn generate_transmission_plot(
    energies_kev: &[f64],
    series: &[Series],
    output_path: &Path,
    title: &str,
    size: (u32, u32),
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, size).into_drawing_area();
        draw_chart(&root, energies_kev, series, title)?;
        root.present()
            .map_err(|e| RossFilterError::PlotError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, size).into_drawing_area();
        draw_chart(&root, energies_kev, series, title)?;
        root.present()
            .map_err(|e| RossFilterError::PlotError(e.to_string()))?;
    }
    Ok(())
}

/// 绘制图表的核心逻辑
fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    energies_kev: &[f64],
    series: &[Series],
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| RossFilterError::PlotError(format!("{:?}", e)))?;

    let x_min = energies_kev.first().copied().unwrap_or(0.0);
    let mut x_max = energies_kev.last().copied().unwrap_or(1.0);
    if x_max <= x_min {
        x_max = x_min + 1.0;
    }

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..1.05)
        .map_err(|e| RossFilterError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Energy (keV)")
        .y_desc("Transmission")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| RossFilterError::PlotError(format!("{:?}", e)))?;

    for (i, s) in series.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let width = match s.kind {
            SeriesKind::Channel => 2,
            SeriesKind::Layer => 1,
            SeriesKind::Difference => 3,
        };

        chart
            .draw_series(LineSeries::new(
                energies_kev.iter().copied().zip(s.values.iter().copied()),
                color.stroke_width(width),
            ))
            .map_err(|e| RossFilterError::PlotError(format!("{:?}", e)))?
            .label(s.label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(width))
            });
    }

    if !series.is_empty() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", 14))
            .draw()
            .map_err(|e| RossFilterError::PlotError(format!("{:?}", e)))?;
    }

    Ok(())
}

