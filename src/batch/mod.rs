//! # 批量处理模块
//!
//! 收集候选文件并顺序驱动处理。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: collector, runner

pub mod collector;
pub mod runner;
