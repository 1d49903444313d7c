//! # calculate 子命令实现
//!
//! 从配置文件和/或命令行通道描述构建计算器，计算透过率并输出。
//!
//! ## 功能
//! - 配置文件与 `--channel` 叠加（命令行通道排在后面）
//! - 能量范围：命令行 > 配置文件 > 默认值
//! - 输出图像 (PNG/SVG) 或数据文件 (CSV/XY)
//! - 终端打印每条曲线的统计表
//!
//! ## 依赖关系
//! - 使用 `cli/calculate.rs` 定义的 CalculateArgs
//! - 使用 `config.rs` 读取配置
//! - 使用 `transmission/` 模块进行计算与输出

use crate::cli::calculate::CalculateArgs;
use crate::cli::OutputFormat;
use crate::config::{self, EnergyRange, Setup};
use crate::error::{Result, RossFilterError};
use crate::material::MaterialDatabase;
use crate::models::TransmissionResult;
use crate::transmission::{self, collect_series, Calculator, Series, SeriesSelection};
use crate::utils::output;

use std::path::Path;

const DEFAULT_TITLE: &str = "Ross Filter Transmission";

/// 执行透过率计算
pub fn execute(args: CalculateArgs) -> Result<()> {
    output::print_header("Ross Filter Transmission Calculation");

    let db = super::load_database(&args.database)?;
    let mut calculator = Calculator::new(db);

    let setup = match &args.setup {
        Some(path) if !path.is_file() => {
            return Err(RossFilterError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        Some(path) => {
            let setup = Setup::from_file(path)?;
            setup.apply(&mut calculator, &path.display().to_string())?;
            output::print_success(&format!(
                "Loaded setup '{}' ({} channel(s))",
                path.display(),
                setup.channels.len()
            ));
            setup
        }
        None => Setup::default(),
    };

    let extra = Setup {
        channels: args
            .channel
            .iter()
            .map(|spec| config::parse_channel_spec(spec))
            .collect::<Result<Vec<_>>>()?,
        ..Setup::default()
    };
    extra.apply(&mut calculator, "--channel")?;

    let range = resolve_range(setup.energy, &args);
    output::print_info(&format!(
        "Energy range: {} - {} keV (step {} keV)",
        range.start, range.stop, range.step
    ));

    let result = calculator.calculate_transmission(range.start, range.stop, range.step)?;
    output::print_success(&format!(
        "Calculated {} channel(s) over {} energy points",
        result.transmissions().len(),
        result.energies_ev().len()
    ));

    let selection = SeriesSelection {
        channels: true,
        layers: args.layers,
        differences: !args.no_differences,
    };
    let series = collect_series(&calculator, &result, selection)?;

    let format = args
        .format
        .unwrap_or_else(|| OutputFormat::from_path(&args.output));
    let title = args
        .title
        .clone()
        .or_else(|| setup.title.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    write_output(
        &result,
        &series,
        &args.output,
        format,
        &title,
        (args.width, args.height),
    )?;
    output::print_saved(&format!("{} output", format), &args.output);

    print_summary_table(&calculator, &result);

    Ok(())
}

/// 命令行参数逐项覆盖配置文件中的能量范围
fn resolve_range(from_setup: Option<EnergyRange>, args: &CalculateArgs) -> EnergyRange {
    let base = from_setup.unwrap_or_default();
    EnergyRange {
        start: args.start.unwrap_or(base.start),
        stop: args.stop.unwrap_or(base.stop),
        step: args.step.unwrap_or(base.step),
    }
}

/// 按格式写出曲线
pub(crate) fn write_output(
    result: &TransmissionResult,
    series: &[Series],
    path: &Path,
    format: OutputFormat,
    title: &str,
    size: (u32, u32),
) -> Result<()> {
    let energies_kev = result.energies_kev();

    match format {
        OutputFormat::Png | OutputFormat::Svg => transmission::plot::generate_transmission_plot(
            &energies_kev,
            series,
            path,
            title,
            size,
            format == OutputFormat::Svg,
        ),
        OutputFormat::Csv => transmission::export::to_csv(&energies_kev, series, path),
        OutputFormat::Xy => transmission::export::to_xy(&energies_kev, series, title, path),
    }
}

/// 打印每个通道及差值曲线的统计
fn print_summary_table<D: MaterialDatabase>(
    calculator: &Calculator<D>,
    result: &TransmissionResult,
) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct CurveRow {
        #[tabled(rename = "Curve")]
        label: String,
        #[tabled(rename = "Filters")]
        filters: String,
        #[tabled(rename = "Min")]
        min: String,
        #[tabled(rename = "Max")]
        max: String,
        #[tabled(rename = "Mean")]
        mean: String,
        #[tabled(rename = "Peak (keV)")]
        peak: String,
    }

    let row = |label: String, filters: String, curve: &[f64]| {
        result.stats(curve).map(|s| CurveRow {
            label,
            filters,
            min: format!("{:.4}", s.min),
            max: format!("{:.4}", s.max),
            mean: format!("{:.4}", s.mean),
            peak: format!("{:.3}", s.peak_energy_ev / 1e3),
        })
    };

    let mut rows: Vec<CurveRow> = Vec::new();
    for (i, (channel, curve)) in calculator
        .channels()
        .iter()
        .zip(result.transmissions())
        .enumerate()
    {
        let filters = if channel.is_empty() {
            "(open)".to_string()
        } else {
            channel
                .filters()
                .iter()
                .map(|f| f.to_string())
                .collect::<Vec<_>>()
                .join(" + ")
        };
        rows.extend(row(format!("Channel {}", i + 1), filters, curve.as_slice()));
    }
    for (i, curve) in result.differences().iter().enumerate() {
        rows.extend(row(
            format!("|Ch {} - Ch {}|", i + 1, i + 2),
            String::new(),
            curve.as_slice(),
        ));
    }

    if !rows.is_empty() {
        output::print_header("Transmission Summary");
        println!("{}", Table::new(&rows));
    }
}
