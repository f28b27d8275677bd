//! # 统一错误处理模块
//!
//! 定义 Leakbench 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Leakbench 统一错误类型
#[derive(Error, Debug)]
pub enum LeakbenchError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 表格错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read spreadsheet: {path}\nReason: {source}")]
    SpreadsheetError {
        path: String,
        #[source]
        source: calamine::XlsxError,
    },

    #[error("Spreadsheet has no sheets: {path}")]
    EmptySpreadsheet { path: String },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found")]
    CommandNotFound { command: String },

    #[error("External command failed: {command}\n{reason}")]
    CommandFailed { command: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, LeakbenchError>;
