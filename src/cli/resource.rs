//! # resource 子命令 CLI 定义
//!
//! 资源泄漏实验：从 DroidLeaks 表格推导 APK 并逐个调用分析器。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/resource.rs`

use clap::Args;
use std::path::PathBuf;

/// resource 子命令参数
#[derive(Args, Debug)]
pub struct ResourceArgs {
    /// Analysis profile identifier passed to the analyzer (-p)
    pub profile: String,

    /// Per-package analyzer timeout in seconds (-t)
    #[arg(default_value_t = 3600)]
    pub timeout: u64,

    /// Path to the DroidLeaks spreadsheet (xlsx)
    #[arg(long, default_value = "./experiment/resource_leaks/droidleaks.xlsx")]
    pub spreadsheet: PathBuf,

    /// Directory containing the package files named <app>-rev-<revision>.apk
    #[arg(long, default_value = "./experiment/resource_leaks/apks")]
    pub apk_dir: PathBuf,

    /// Path to the analyzer executable
    #[arg(long, default_value = "./run.sh")]
    pub analyzer: PathBuf,

    /// Print the analyzer command lines without executing them
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
