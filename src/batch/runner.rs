//! # 顺序执行器
//!
//! 逐个驱动批量处理任务：一个输入完整处理完（构造命令、子进程
//! 跑完、输出打印）才开始下一个。分析器可能一跑几十分钟，挂起
//! 会阻塞整个批次，由其自身的超时参数兜底。
//!
//! ## 功能
//! - 严格串行的阻塞迭代
//! - 进度条显示，处理器可通过 `suspend` 插入自己的输出
//! - 结果计数与失败汇总
//!
//! ## 依赖关系
//! - 被 `commands/memory.rs`, `commands/resource.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条

use crate::utils::progress;

use indicatif::ProgressBar;

/// 单个输入的处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 分析器成功跑完（或 dry-run 打印了命令）
    Success(String),
    /// 跳过（重复目标或文件缺失）
    Skipped(String),
    /// 处理失败
    Failed(String, String), // (目标路径, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(_) => self.success += 1,
            ProcessResult::Skipped(_) => self.skipped += 1,
            ProcessResult::Failed(path, err) => {
                self.failed += 1;
                self.failures.push((path, err));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }
}

/// 顺序执行器
pub struct SequentialRunner {
    /// 进度条描述
    message: &'static str,
}

impl SequentialRunner {
    /// 创建新的顺序执行器
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }

    /// 逐个处理输入列表。
    ///
    /// 处理器拿到进度条句柄，打印分析器输出时应包在
    /// `pb.suspend` 里，避免与进度条渲染交错。
    pub fn run<T, F>(&self, items: &[T], mut processor: F) -> BatchResult
    where
        F: FnMut(&T, &ProgressBar) -> ProcessResult,
    {
        let pb = progress::create_progress_bar(items.len() as u64, self.message);

        let mut batch_result = BatchResult::default();
        for item in items {
            let result = processor(item, &pb);
            batch_result.merge(result);
            pb.inc(1);
        }

        pb.finish_and_clear();
        batch_result
    }
}
