//! # 实验语料模块
//!
//! DroidLeaks 基准表格的读取与 APK 路径推导。
//!
//! ## 依赖关系
//! - 被 `commands/resource.rs` 使用
//! - 子模块: droidleaks

pub mod droidleaks;
