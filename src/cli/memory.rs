//! # memory 子命令 CLI 定义
//!
//! 内存泄漏实验：遍历 APK 目录并逐个调用分析器。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/memory.rs`

use clap::Args;
use std::path::PathBuf;

/// memory 子命令参数
#[derive(Args, Debug)]
pub struct MemoryArgs {
    /// Analysis profile identifier passed to the analyzer (-p)
    pub profile: String,

    /// Per-package analyzer timeout in seconds (-t)
    #[arg(default_value_t = 3600)]
    pub timeout: u64,

    /// Directory containing the candidate APK files
    #[arg(long, default_value = "./experiment/memory_leaks/apks")]
    pub apk_dir: PathBuf,

    /// Path to the analyzer executable
    #[arg(long, default_value = "./run.sh")]
    pub analyzer: PathBuf,

    /// Filename pattern(s) for candidate packages (comma-separated)
    #[arg(long, default_value = "*")]
    pub pattern: String,

    /// Print the analyzer command lines without executing them
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
