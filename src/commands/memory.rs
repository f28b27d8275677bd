//! # memory 命令实现
//!
//! 内存泄漏实验：遍历 APK 目录，对每个候选包顺序调用外部
//! 分析器并原样打印其输出。
//!
//! ## 依赖关系
//! - 使用 `cli/memory.rs` 定义的参数
//! - 使用 `analyzer/`, `batch/`, `utils/output.rs`

use crate::analyzer::{AnalysisMode, Invocation};
use crate::batch::collector::PackageCollector;
use crate::batch::runner::{ProcessResult, SequentialRunner};
use crate::cli::memory::MemoryArgs;
use crate::error::{LeakbenchError, Result};
use crate::utils::output;

/// 执行 memory 命令
pub fn execute(args: MemoryArgs) -> Result<()> {
    output::print_header("Memory Leak Experiment");

    // 验证 APK 目录
    if !args.apk_dir.is_dir() {
        return Err(LeakbenchError::DirectoryNotFound {
            path: args.apk_dir.display().to_string(),
        });
    }

    // 收集候选包
    let candidates = PackageCollector::new(args.apk_dir.clone())
        .with_pattern(&args.pattern)?
        .collect();

    if candidates.is_empty() {
        output::print_warning(&format!(
            "No candidate packages in '{}'",
            args.apk_dir.display()
        ));
        return Ok(());
    }

    output::print_info(&format!(
        "Found {} candidate packages in '{}'",
        candidates.len(),
        args.apk_dir.display()
    ));

    // 逐个运行分析器
    let result = SequentialRunner::new("Analyzing").run(&candidates, |apk, pb| {
        let invocation = Invocation::new(
            args.analyzer.clone(),
            apk.clone(),
            &args.profile,
            AnalysisMode::Memory,
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
                pb.suspend(|| {
                    output::print_info(&apk.display().to_string());
                    println!("{}", analysis_output);
                });
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

    output::print_separator();
    output::print_done(&format!(
        "Processed {} packages: {} analyzed, {} failed",
        result.total(),
        result.success,
        result.failed
    ));

    Ok(())
}
