//! # 候选包收集器
//!
//! 列出实验目录下的候选 APK 文件。目录是平铺结构，因此只做
//! 单层遍历；结果按路径排序以保证运行顺序可复现。
//!
//! ## 依赖关系
//! - 被 `commands/memory.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 做文件名匹配

use crate::error::{LeakbenchError, Result};

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 候选包收集器
pub struct PackageCollector {
    /// 实验目录
    dir: PathBuf,
    /// 文件名匹配模式列表
    patterns: Vec<Pattern>,
}

impl PackageCollector {
    /// 创建新的收集器，默认匹配目录下所有文件
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            patterns: vec![Pattern::new("*").unwrap()],
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        let mut patterns = Vec::new();
        for chunk in pattern.split(',') {
            let chunk = chunk.trim();
            if chunk.is_empty() {
                continue;
            }
            let p = Pattern::new(chunk)
                .map_err(|_| LeakbenchError::InvalidPattern(chunk.to_string()))?;
            patterns.push(p);
        }
        if !patterns.is_empty() {
            self.patterns = patterns;
        }
        Ok(self)
    }

    /// 收集所有匹配的候选文件，按路径排序
    pub fn collect(&self) -> Vec<PathBuf> {
        if !self.dir.is_dir() {
            return vec![];
        }

        let mut files: Vec<PathBuf> = WalkDir::new(&self.dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }

    /// 检查文件名是否匹配任一模式
    fn matches(&self, path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.patterns.iter().any(|p| p.matches(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_collect_matches_pattern_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.apk", "a.apk", "notes.txt"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let collector = PackageCollector::new(dir.path().to_path_buf())
            .with_pattern("*.apk")
            .unwrap();
        let files = collector.collect();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].file_name().unwrap(), "a.apk");
        assert_eq!(files[1].file_name().unwrap(), "b.apk");
    }

    #[test]
    fn test_default_pattern_takes_everything() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["x.apk", "readme.md"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let files = PackageCollector::new(dir.path().to_path_buf()).collect();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let files = PackageCollector::new(PathBuf::from("/no/such/dir")).collect();
        assert!(files.is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let result = PackageCollector::new(PathBuf::from(".")).with_pattern("[");
        assert!(matches!(result, Err(LeakbenchError::InvalidPattern(_))));
    }
}
