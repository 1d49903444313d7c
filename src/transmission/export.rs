//! # 透过率数据导出
//!
//! 导出曲线数据到 CSV 和 XY 格式。
//!
//! ## 支持格式
//! - CSV: `energy_kev` 列加每条曲线一列
//! - XY: `#` 注释头加制表符分隔的数据列
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `transmission/series.rs` 的 Series
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{Result, RossFilterError};
use crate::transmission::Series;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 导出为 CSV
pub fn to_csv(energies_kev: &[f64], series: &[Series], output_path: &Path) -> Result<()> {
    check_lengths(energies_kev, series)?;
    let mut wtr = csv::Writer::from_path(output_path)?;

    let mut header = vec!["energy_kev".to_string()];
    header.extend(series.iter().map(|s| s.label.clone()));
    wtr.write_record(&header)?;

    for (i, energy) in energies_kev.iter().enumerate() {
        let mut record = vec![format!("{:.6}", energy)];
        record.extend(series.iter().map(|s| format!("{:.6e}", s.values[i])));
        wtr.write_record(&record)?;
    }

    wtr.flush().map_err(|e| write_error(output_path, e))?;
    Ok(())
}

/// 导出为 XY
pub fn to_xy(
    energies_kev: &[f64],
    series: &[Series],
    title: &str,
    output_path: &Path,
) -> Result<()> {
    check_lengths(energies_kev, series)?;
    let file = File::create(output_path).map_err(|e| write_error(output_path, e))?;
    let mut out = BufWriter::new(file);

    write_xy(&mut out, energies_kev, series, title).map_err(|e| write_error(output_path, e))
}

fn write_xy<W: Write>(
    out: &mut W,
    energies_kev: &[f64],
    series: &[Series],
    title: &str,
) -> std::io::Result<()> {
    writeln!(out, "# Ross filter transmission: {}", title)?;
    let labels: Vec<_> = series.iter().map(|s| s.label.as_str()).collect();
    writeln!(out, "# Columns: Energy (keV)\t{}", labels.join("\t"))?;
    writeln!(out, "#")?;

    for (i, energy) in energies_kev.iter().enumerate() {
        write!(out, "{:.6}", energy)?;
        for s in series {
            write!(out, "\t{:.6e}", s.values[i])?;
        }
        writeln!(out)?;
    }

    out.flush()
}

/// 每条曲线的点数必须与能量网格一致
fn check_lengths(energies_kev: &[f64], series: &[Series]) -> Result<()> {
    match series.iter().find(|s| s.values.len() != energies_kev.len()) {
        Some(s) => Err(RossFilterError::Unexpected(format!(
            "series '{}' has {} points, energy grid has {}",
            s.label,
            s.values.len(),
            energies_kev.len()
        ))),
        None => Ok(()),
    }
}

fn write_error(path: &Path, source: std::io::Error) -> RossFilterError {
    RossFilterError::FileWriteError {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transmission::SeriesKind;

    fn sample() -> (Vec<f64>, Vec<Series>) {
        let series = vec![
            Series {
                label: "Channel 1".to_string(),
                kind: SeriesKind::Channel,
                values: vec![0.5, 0.75],
            },
            Series {
                label: "|Ch 1 - Ch 2|".to_string(),
                kind: SeriesKind::Difference,
                values: vec![0.1, 0.2],
            },
        ];
        (vec![1.0, 2.0], series)
    }

    #[test]
    fn test_csv_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let (energies, series) = sample();

        to_csv(&energies, &series, &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(&headers[0], "energy_kev");
        assert_eq!(&headers[2], "|Ch 1 - Ch 2|");

        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][1].parse::<f64>().unwrap(), 0.75);
    }

    #[test]
    fn test_xy_export() {
        let mut buf = Vec::new();
        let (energies, series) = sample();
        write_xy(&mut buf, &energies, &series, "Ti/V pair").unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "# Ross filter transmission: Ti/V pair");
        assert_eq!(lines.len(), 5);
        assert!(lines[3].starts_with("1.000000\t5.000000e-1"));
    }

    #[test]
    fn test_short_series_is_rejected_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let (energies, mut series) = sample();
        series[1].values.pop();

        let csv_path = dir.path().join("out.csv");
        let err = to_csv(&energies, &series, &csv_path).unwrap_err();
        assert!(matches!(err, RossFilterError::Unexpected(_)));
        assert!(err.to_string().contains("|Ch 1 - Ch 2|"));
        assert!(!csv_path.exists());

        let xy_path = dir.path().join("out.xy");
        assert!(matches!(
            to_xy(&energies, &series, "x", &xy_path),
            Err(RossFilterError::Unexpected(_))
        ));
        assert!(!xy_path.exists());
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.xy");
        let (energies, series) = sample();
        assert!(matches!(
            to_xy(&energies, &series, "x", &path),
            Err(RossFilterError::FileWriteError { .. })
        ));
    }
}
