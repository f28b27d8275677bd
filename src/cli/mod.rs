//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `memory`: 内存泄漏实验（遍历 APK 目录）
//! - `resource`: 资源泄漏实验（读取 DroidLeaks 表格）
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: memory, resource

pub mod memory;
pub mod resource;

use clap::{Parser, Subcommand};

/// Leakbench - Android 泄漏分析实验驱动器
#[derive(Parser)]
#[command(name = "leakbench")]
#[command(version)]
#[command(about = "Batch experiment drivers for Android leak analysis", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Run the memory leak experiment over every package in the APK directory
    Memory(memory::MemoryArgs),

    /// Run the resource leak experiment over the DroidLeaks spreadsheet
    Resource(resource::ResourceArgs),
}
