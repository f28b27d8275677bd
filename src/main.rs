//! # Leakbench - Android 泄漏分析实验驱动器
//!
//! 将零散的实验脚本用 Rust 重构，统一成单一可执行文件，
//! 批量调用外部静态分析器（默认 `./run.sh`）评估其对 Android
//! 应用内存泄漏 / 资源泄漏的检测能力。
//!
//! ## 子命令
//! - `memory`   - 遍历 APK 目录，逐个运行内存泄漏分析
//! - `resource` - 读取 DroidLeaks 表格，按行推导 APK 并运行资源泄漏分析
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   ├── analyzer/   (外部分析器调用描述)
//!   ├── batch/      (文件收集与顺序执行)
//!   ├── corpus/     (DroidLeaks 表格模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod analyzer;
mod batch;
mod cli;
mod commands;
mod corpus;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
