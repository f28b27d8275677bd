//! # resource 命令实现
//!
//! 资源泄漏实验：读取 DroidLeaks 表格，按行推导包文件路径并去重，
//! 对磁盘上存在的每个包顺序调用分析器（附 `-r` 标志），输出前先
//! 打印该行的资源标识、来源方法与来源文件。缺失的包只报告不中断。
//!
//! ## 依赖关系
//! - 使用 `cli/resource.rs` 定义的参数
//! - 使用 `analyzer/`, `batch/runner.rs`, `corpus/droidleaks.rs`
//! - 使用 `utils/output.rs`

use crate::analyzer::{AnalysisMode, Invocation};
use crate::batch::runner::{ProcessResult, SequentialRunner};
use crate::cli::resource::ResourceArgs;
use crate::corpus::droidleaks::{self, LeakRecord};
use crate::error::{LeakbenchError, Result};
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 缺包汇总表的一行
#[derive(Debug, Clone, Tabled)]
struct MissingRow {
    #[tabled(rename = "App")]
    app: String,
    #[tabled(rename = "Revision")]
    revision: String,
    #[tabled(rename = "Derived path")]
    path: String,
}

/// 执行 resource 命令
pub fn execute(args: ResourceArgs) -> Result<()> {
    output::print_header("Resource Leak Experiment");

    // 验证表格文件
    if !args.spreadsheet.is_file() {
        return Err(LeakbenchError::FileNotFound {
            path: args.spreadsheet.display().to_string(),
        });
    }

    // 读取记录并按推导路径去重
    let records = droidleaks::load_records(&args.spreadsheet)?;
    output::print_info(&format!(
        "Loaded {} rows from '{}'",
        records.len(),
        args.spreadsheet.display()
    ));

    let targets = droidleaks::unique_targets(records, &args.apk_dir);
    output::print_info(&format!("{} unique package targets", targets.len()));

    let mut missing: Vec<MissingRow> = Vec::new();

    // 逐个运行分析器
    let result = SequentialRunner::new("Analyzing").run(&targets, |(record, apk), pb| {
        if !gate_target(record, apk, &mut missing) {
            pb.suspend(|| {
                output::print_warning(&format!("File does not exist: {}", apk.display()));
            });
            return ProcessResult::Skipped(apk.display().to_string());
        }

        let invocation = Invocation::new(
            args.analyzer.clone(),
            apk.clone(),
            &args.profile,
            AnalysisMode::Resource,
            args.timeout,
        );

        if args.dry_run {
            pb.suspend(|| {
                output::print_info(&format!("[DRY] {}", invocation.command_line()));
            });
            return ProcessResult::Success(apk.display().to_string());
        }

        match invocation.run() {
            Ok(analysis_output) => {
                pb.suspend(|| print_row_output(record, apk, &analysis_output));
                ProcessResult::Success(apk.display().to_string())
            }
            Err(e) => {
                pb.suspend(|| {
                    output::print_error(&format!("{}: {}", apk.display(), e));
                });
                ProcessResult::Failed(apk.display().to_string(), e.to_string())
            }
        }
    });

    // 缺包汇总
    if !missing.is_empty() {
        output::print_separator();
        output::print_warning(&format!("{} package files were missing:", missing.len()));
        println!("{}", Table::new(&missing));
    }

    output::print_separator();
    output::print_done(&format!(
        "Processed {} targets: {} analyzed, {} missing, {} failed",
        result.total(),
        result.success,
        result.skipped,
        result.failed
    ));

    Ok(())
}

/// 存在性闸门：磁盘上没有的包不构造分析器调用，记入缺包清单。
///
/// 返回 `true` 表示可以继续构造并执行调用。
fn gate_target(record: &LeakRecord, apk: &Path, missing: &mut Vec<MissingRow>) -> bool {
    if apk.is_file() {
        return true;
    }

    missing.push(MissingRow {
        app: record.app.clone(),
        revision: record.revision.clone(),
        path: apk.display().to_string(),
    });
    false
}

/// 打印一行记录的上下文元数据与分析器输出
fn print_row_output(record: &LeakRecord, apk: &Path, analysis_output: &str) {
    output::print_info(&apk.display().to_string());
    println!("Resource: {}", record.resource);
    println!("Source method: {}", record.source_method);
    println!("Source file: {}", record.source_file);
    println!("Analyzer output:");
    println!("{}", analysis_output);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(app: &str, revision: &str) -> LeakRecord {
        LeakRecord {
            app: app.to_string(),
            resource: "ResX".to_string(),
            revision: revision.to_string(),
            source_method: "methodY".to_string(),
            source_file: "fileZ".to_string(),
        }
    }

    #[test]
    fn test_missing_package_never_passes_the_gate() {
        let dir = tempfile::tempdir().unwrap();
        let rec = record("App", "1");
        let apk = rec.apk_path(dir.path());
        let mut missing = Vec::new();

        assert!(!gate_target(&rec, &apk, &mut missing));
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].app, "App");
        assert_eq!(missing[0].revision, "1");
        assert_eq!(missing[0].path, apk.display().to_string());
    }

    #[test]
    fn test_existing_package_passes_the_gate() {
        let dir = tempfile::tempdir().unwrap();
        let rec = record("App", "1");
        let apk = rec.apk_path(dir.path());
        std::fs::File::create(&apk).unwrap();
        let mut missing = Vec::new();

        assert!(gate_target(&rec, &apk, &mut missing));
        assert!(missing.is_empty());
    }
}
