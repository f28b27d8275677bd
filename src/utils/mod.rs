//! # 工具模块
//!
//! ## 依赖关系
//! - 被 `main.rs`, `commands/`, `batch/` 使用
//! - 子模块: output, progress

pub mod output;
pub mod progress;
