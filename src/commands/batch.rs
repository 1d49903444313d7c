//! # batch 子命令实现
//!
//! 并行计算目录下的全部配置文件，每个文件输出一个结果文件。
//!
//! ## 功能
//! - glob 模式匹配，可递归
//! - 并行计算（rayon），每个文件使用独立的计算器
//! - 已存在的输出默认跳过
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的 BatchArgs
//! - 使用 `batch/` 模块收集与并行执行
//! - 复用 `commands/calculate.rs` 的输出逻辑

use super::calculate::write_output;
use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::batch::BatchArgs;
use crate::cli::OutputFormat;
use crate::config::Setup;
use crate::error::{Result, RossFilterError};
use crate::material::TableDatabase;
use crate::transmission::{collect_series, Calculator, SeriesSelection};
use crate::utils::output;

use std::collections::hash_map::{Entry, HashMap};
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// 批量处理配置
struct BatchConfig {
    db: TableDatabase,
    input_dir: PathBuf,
    output_dir: PathBuf,
    format: OutputFormat,
    selection: SeriesSelection,
    overwrite: bool,
}

/// 执行批量计算
pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_header("Batch Transmission Calculation");

    if !args.input.is_dir() {
        return Err(RossFilterError::DirectoryNotFound {
            path: args.input.display().to_string(),
        });
    }

    let files = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect();

    if files.is_empty() {
        output::print_warning(&format!(
            "No matching files found with pattern '{}'",
            args.pattern
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} setup files", files.len()));

    fs::create_dir_all(&args.output).map_err(|e| RossFilterError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let config = Arc::new(BatchConfig {
        db: super::load_database(&args.database)?,
        input_dir: args.input.clone(),
        output_dir: args.output.clone(),
        format: args.format,
        selection: SeriesSelection {
            channels: true,
            layers: args.layers,
            differences: true,
        },
        overwrite: args.overwrite,
    });
    output::print_info(&format!("Output format: {}", config.format));

    let (files, collisions) = split_collisions(files, &config);

    let runner = BatchRunner::new(args.jobs);
    let mut result = runner.run(files, |file| process_file(file, &config))?;
    for (input, claimed_by) in collisions {
        result.merge(ProcessResult::Failed(
            input.display().to_string(),
            format!(
                "output name collides with '{}', rename one of the setups",
                claimed_by.display()
            ),
        ));
    }

    output::print_separator();
    output::print_done(&format!(
        "Batch complete: {} success, {} skipped, {} failed",
        result.success, result.skipped, result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed files:");
        for (path, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

/// 输出文件路径 `{相对路径}_transmission.{ext}`
///
/// 相对输入目录的子目录以 `_` 连接，例如 `a/pair.toml` -> `a_pair_transmission.csv`。
fn output_path(input: &Path, config: &BatchConfig) -> PathBuf {
    let relative = input.strip_prefix(&config.input_dir).unwrap_or(input);

    let mut parts: Vec<String> = relative
        .parent()
        .into_iter()
        .flat_map(|dir| dir.components())
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    parts.push(
        input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string()),
    );

    config.output_dir.join(format!(
        "{}_transmission.{}",
        parts.join("_"),
        config.format.extension()
    ))
}

/// 按输出路径去重：先出现的文件保留，之后映射到同一输出的文件连同占用者一并返回
fn split_collisions(
    files: Vec<PathBuf>,
    config: &BatchConfig,
) -> (Vec<PathBuf>, Vec<(PathBuf, PathBuf)>) {
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();
    let mut unique = Vec::with_capacity(files.len());
    let mut collisions = Vec::new();

    for file in files {
        match claimed.entry(output_path(&file, config)) {
            Entry::Occupied(owner) => collisions.push((file, owner.get().clone())),
            Entry::Vacant(slot) => {
                slot.insert(file.clone());
                unique.push(file);
            }
        }
    }

    if !collisions.is_empty() {
        log::warn!("{} setup(s) map to an output name already in use", collisions.len());
    }
    (unique, collisions)
}

/// 处理单个配置文件
fn process_file(input: &PathBuf, config: &BatchConfig) -> ProcessResult {
    let output_file = output_path(input, config);

    if output_file.exists() && !config.overwrite {
        return ProcessResult::Skipped(format!(
            "Output exists, skipping: {}",
            output_file.display()
        ));
    }

    match calculate_setup(input, &output_file, config) {
        Ok(()) => {
            log::debug!("{} -> {}", input.display(), output_file.display());
            ProcessResult::Success(format!("{} -> {}", input.display(), output_file.display()))
        }
        Err(e) => ProcessResult::Failed(input.display().to_string(), e.to_string()),
    }
}

fn calculate_setup(input: &Path, output_file: &Path, config: &BatchConfig) -> Result<()> {
    let setup = Setup::from_file(input)?;

    let mut calculator = Calculator::new(config.db.clone());
    setup.apply(&mut calculator, &input.display().to_string())?;

    let range = setup.energy.unwrap_or_default();
    let result = calculator.calculate_transmission(range.start, range.stop, range.step)?;
    let series = collect_series(&calculator, &result, config.selection)?;

    let title = setup.title.clone().unwrap_or_else(|| {
        input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    write_output(
        &result,
        &series,
        output_file,
        config.format,
        &title,
        (1200, 800),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::DatabaseArgs;

    const SETUP: &str = r#"
title = "Be/Al"
[energy]
start = 1.0
stop = 5.0
step = 1.0

[[channel]]
filters = [ { material = "Be", thickness_um = 10.0 } ]

[[channel]]
filters = [ { material = "Al", thickness_um = 5.0 } ]
"#;

    fn args(input: &Path, output: &Path) -> BatchArgs {
        BatchArgs {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            format: OutputFormat::Xy,
            pattern: "*.toml".to_string(),
            recursive: false,
            jobs: 2,
            overwrite: false,
            layers: false,
            database: DatabaseArgs {
                materials_file: None,
            },
        }
    }

    #[test]
    fn test_batch_writes_one_file_per_setup() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("good.toml"), SETUP).unwrap();
        fs::write(input.path().join("bad.toml"), "[[channel]]\nfilters = 3").unwrap();
        fs::write(input.path().join("notes.txt"), "ignored").unwrap();

        execute(args(input.path(), output.path())).unwrap();

        let good = output.path().join("good_transmission.xy");
        let text = fs::read_to_string(&good).unwrap();
        assert!(text.starts_with("# Ross filter transmission: Be/Al"));
        assert_eq!(text.lines().filter(|l| !l.starts_with('#')).count(), 5);
        assert!(!output.path().join("bad_transmission.xy").exists());
    }

    #[test]
    fn test_existing_output_is_skipped() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let setup = input.path().join("pair.toml");
        fs::write(&setup, SETUP).unwrap();

        let batch_args = args(input.path(), output.path());
        let config = BatchConfig {
            db: TableDatabase::builtin(),
            input_dir: batch_args.input.clone(),
            output_dir: batch_args.output.clone(),
            format: batch_args.format,
            selection: SeriesSelection::default(),
            overwrite: false,
        };

        let existing = output_path(&setup, &config);
        fs::write(&existing, "keep").unwrap();

        assert!(matches!(
            process_file(&setup, &config),
            ProcessResult::Skipped(_)
        ));
        assert_eq!(fs::read_to_string(&existing).unwrap(), "keep");
    }

    #[test]
    fn test_recursive_same_stem_setups_keep_both_outputs() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        for dir in ["a", "b"] {
            fs::create_dir(input.path().join(dir)).unwrap();
            fs::write(input.path().join(dir).join("pair.toml"), SETUP).unwrap();
        }

        let mut batch_args = args(input.path(), output.path());
        batch_args.recursive = true;
        execute(batch_args).unwrap();

        assert!(output.path().join("a_pair_transmission.xy").is_file());
        assert!(output.path().join("b_pair_transmission.xy").is_file());
        assert_eq!(fs::read_dir(output.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_colliding_output_names_are_rejected() {
        let input = tempfile::tempdir().unwrap();
        let config = BatchConfig {
            db: TableDatabase::builtin(),
            input_dir: input.path().to_path_buf(),
            output_dir: PathBuf::from("out"),
            format: OutputFormat::Csv,
            selection: SeriesSelection::default(),
            overwrite: false,
        };

        let first = input.path().join("a").join("b_pair.toml");
        let second = input.path().join("a_b").join("pair.toml");
        let other = input.path().join("pair.toml");
        assert_eq!(output_path(&first, &config), output_path(&second, &config));
        assert_eq!(
            output_path(&other, &config),
            Path::new("out").join("pair_transmission.csv")
        );

        let (unique, collisions) =
            split_collisions(vec![first.clone(), second.clone(), other.clone()], &config);
        assert_eq!(unique, vec![first.clone(), other]);
        assert_eq!(collisions, vec![(second, first)]);
    }

    #[test]
    fn test_missing_input_directory() {
        let output = tempfile::tempdir().unwrap();
        assert!(matches!(
            execute(args(Path::new("/nonexistent/setups"), output.path())),
            Err(RossFilterError::DirectoryNotFound { .. })
        ));
    }
}
