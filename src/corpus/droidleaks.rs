//! # DroidLeaks 表格模型
//!
//! 读取 DroidLeaks 基准的 xlsx 表格：取第一张工作表，跳过两行
//! 表头，按固定列号（不是表头名）提取字段。每行推导一个候选
//! APK 路径 `<dir>/<应用名，空格换成连字符>-rev-<修订号>.apk`；
//! 多行可能指向同一个包文件，去重时保留最先出现的行。
//!
//! ## 依赖关系
//! - 被 `commands/resource.rs` 调用
//! - 使用 `calamine` 解析 xlsx

use crate::error::{LeakbenchError, Result};

use calamine::{open_workbook, Data, Reader, Xlsx};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// 固定列号: 0=应用名, 1=资源标识, 3=修订号, 4=来源方法, 5=来源文件
const COL_APP: usize = 0;
const COL_RESOURCE: usize = 1;
const COL_REVISION: usize = 3;
const COL_SOURCE_METHOD: usize = 4;
const COL_SOURCE_FILE: usize = 5;

/// 表头占两行
const HEADER_ROWS: usize = 2;

/// DroidLeaks 表格中的一条泄漏记录
#[derive(Debug, Clone)]
pub struct LeakRecord {
    /// 应用名（原始拼写，可能含空格）
    pub app: String,
    /// 泄漏的资源标识
    pub resource: String,
    /// 应用修订号
    pub revision: String,
    /// 泄漏来源方法
    pub source_method: String,
    /// 泄漏来源文件
    pub source_file: String,
}

impl LeakRecord {
    /// 从表格行构造记录。应用名或修订号为空的行（包括 xlsx
    /// 区域末尾常见的空白行）返回 `None`。
    pub fn from_row(row: &[Data]) -> Option<Self> {
        let app = cell_text(row, COL_APP);
        let revision = cell_text(row, COL_REVISION);
        if app.is_empty() || revision.is_empty() {
            return None;
        }

        Some(Self {
            app,
            revision,
            resource: cell_text(row, COL_RESOURCE),
            source_method: cell_text(row, COL_SOURCE_METHOD),
            source_file: cell_text(row, COL_SOURCE_FILE),
        })
    }

    /// 推导该记录对应的包文件路径。
    ///
    /// 只有应用名做空格到连字符的替换，修订号原样拼接。
    pub fn apk_path(&self, apk_dir: &Path) -> PathBuf {
        apk_dir.join(format!(
            "{}-rev-{}.apk",
            self.app.replace(' ', "-"),
            self.revision
        ))
    }
}

/// 单元格文本；空单元格与缺失单元格都归一成空串
fn cell_text(row: &[Data], idx: usize) -> String {
    match row.get(idx) {
        None | Some(Data::Empty) => String::new(),
        Some(value) => value.to_string().trim().to_string(),
    }
}

/// 读取表格第一张工作表的全部泄漏记录，保持物理行序
pub fn load_records(path: &Path) -> Result<Vec<LeakRecord>> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e| LeakbenchError::SpreadsheetError {
            path: path.display().to_string(),
            source: e,
        })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LeakbenchError::EmptySpreadsheet {
            path: path.display().to_string(),
        })?
        .map_err(|e| LeakbenchError::SpreadsheetError {
            path: path.display().to_string(),
            source: e,
        })?;

    Ok(range
        .rows()
        .skip(HEADER_ROWS)
        .filter_map(LeakRecord::from_row)
        .collect())
}

/// 按推导路径去重，保留每个路径最先出现的记录。
///
/// 行序即表格物理行序，不做任何排序；seen 集合只在一次运行内
/// 有效，不跨运行持久化。
pub fn unique_targets(records: Vec<LeakRecord>, apk_dir: &Path) -> Vec<(LeakRecord, PathBuf)> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut targets = Vec::new();

    for record in records {
        let path = record.apk_path(apk_dir);
        if seen.insert(path.clone()) {
            targets.push((record, path));
        }
    }

    targets
}
