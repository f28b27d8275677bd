//! # 外部分析器调用模型
//!
//! 描述一次分析器调用：目标 APK、分析配置、模式与超时。
//! 命令行字符串仅用于展示（日志 / dry-run），实际执行通过
//! 结构化参数列表传给 `std::process::Command`，避免文件名中
//! 特殊字符带来的 shell 注入问题。
//!
//! ## 依赖关系
//! - 被 `commands/memory.rs`, `commands/resource.rs` 使用
//! - 使用 `error.rs`

use crate::error::{LeakbenchError, Result};

use std::path::PathBuf;
use std::process::{Command, Stdio};

/// 分析模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    /// 内存泄漏分析
    Memory,
    /// 资源泄漏分析（附加 `-r` 标志）
    Resource,
}

/// 一次外部分析器调用的完整描述
#[derive(Debug, Clone)]
pub struct Invocation {
    /// 分析器可执行文件路径
    pub analyzer: PathBuf,
    /// 待分析的 APK 文件
    pub target: PathBuf,
    /// 分析配置标识符（`-p`）
    pub profile: String,
    /// 分析模式
    pub mode: AnalysisMode,
    /// 分析器内部超时（秒，`-t`）
    pub timeout_secs: u64,
}

impl Invocation {
    /// 构造调用描述
    pub fn new(
        analyzer: PathBuf,
        target: PathBuf,
        profile: &str,
        mode: AnalysisMode,
        timeout_secs: u64,
    ) -> Self {
        Self {
            analyzer,
            target,
            profile: profile.to_string(),
            mode,
            timeout_secs,
        }
    }

    /// 按位置顺序展开分析器参数: -a <file> -p <profile> [-r] -t <timeout>
    fn args(&self) -> Vec<String> {
        let mut args = vec![
            "-a".to_string(),
            self.target.display().to_string(),
            "-p".to_string(),
            self.profile.clone(),
        ];
        if self.mode == AnalysisMode::Resource {
            args.push("-r".to_string());
        }
        args.push("-t".to_string());
        args.push(self.timeout_secs.to_string());
        args
    }

    /// 渲染等价的 shell 命令行（仅用于日志与 dry-run 展示）
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.analyzer.display().to_string()];
        parts.extend(self.args());
        parts.join(" ")
    }

    /// 同步执行分析器并捕获其标准输出。
    ///
    /// 标准错误直接透传到终端；不检查退出码，分析器打印什么就
    /// 返回什么。超时完全由分析器自己根据 `-t` 参数执行，驱动器
    /// 不做任何强制中断。
    pub fn run(&self) -> Result<String> {
        let output = Command::new(&self.analyzer)
            .args(self.args())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| {
                let command = self.analyzer.display().to_string();
                if e.kind() == std::io::ErrorKind::NotFound {
                    LeakbenchError::CommandNotFound { command }
                } else {
                    LeakbenchError::CommandFailed {
                        command,
                        reason: e.to_string(),
                    }
                }
            })?;

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn memory_invocation(target: &str, profile: &str, timeout: u64) -> Invocation {
        Invocation::new(
            PathBuf::from("./run.sh"),
            Path::new("./experiment/memory_leaks/apks").join(target),
            profile,
            AnalysisMode::Memory,
            timeout,
        )
    }

    #[test]
    fn test_memory_command_line() {
        let inv = memory_invocation("foo.apk", "P", 3600);
        assert_eq!(
            inv.command_line(),
            "./run.sh -a ./experiment/memory_leaks/apks/foo.apk -p P -t 3600"
        );
    }

    #[test]
    fn test_resource_command_line() {
        let inv = Invocation::new(
            PathBuf::from("./run.sh"),
            Path::new("./experiment/resource_leaks/apks").join("bar.apk"),
            "P",
            AnalysisMode::Resource,
            3600,
        );
        assert_eq!(
            inv.command_line(),
            "./run.sh -a ./experiment/resource_leaks/apks/bar.apk -p P -r -t 3600"
        );
    }

    #[test]
    fn test_default_timeout_is_3600() {
        let inv = memory_invocation("foo.apk", "P", 3600);
        assert!(inv.command_line().ends_with("-t 3600"));
    }

    #[test]
    fn test_timeout_override_verbatim() {
        let inv = memory_invocation("foo.apk", "P", 42);
        assert!(inv.command_line().ends_with("-t 42"));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_captures_stdout() {
        let inv = Invocation::new(
            PathBuf::from("echo"),
            PathBuf::from("x.apk"),
            "P",
            AnalysisMode::Memory,
            5,
        );
        let out = inv.run().unwrap();
        assert_eq!(out.trim(), "-a x.apk -p P -t 5");
    }

    #[cfg(unix)]
    #[test]
    fn test_run_missing_analyzer() {
        let inv = Invocation::new(
            PathBuf::from("./definitely-not-here.sh"),
            PathBuf::from("x.apk"),
            "P",
            AnalysisMode::Memory,
            5,
        );
        assert!(matches!(
            inv.run(),
            Err(LeakbenchError::CommandNotFound { .. })
        ));
    }
}
