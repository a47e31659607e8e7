//! 日志工具模块
//!
//! 提供日志初始化和格式化输出的辅助函数

use crate::models::{Part, QuestionRecord};
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则默认 `info`，详细模式下为 `debug`。
/// 重复调用不会 panic（测试中可能多次初始化）。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_file(false)
                .with_line_number(false)
                .with_target(false),
        )
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(output_path: &Path) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 程序启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📄 输出文件: {}", output_path.display());
    info!("{}", "=".repeat(60));
}

/// 记录切分出的部分
pub fn log_parts_found(parts: &[Part]) {
    if parts.is_empty() {
        info!("⚠️ 文档中没有找到部分标记");
        return;
    }
    info!("✓ 找到 {} 个部分", parts.len());
    for part in parts {
        debug!(
            "  第 {} 部分: {} 行",
            part.part,
            part.body.lines().count()
        );
    }
}

/// 详细模式下逐条输出题目
pub fn log_records(records: &[QuestionRecord]) {
    for record in records {
        debug!("  {}", record);
    }
}

/// 打印最终统计信息
///
/// # 参数
/// - `parts`: 部分数量
/// - `records`: 题目记录
/// - `output_path`: 输出文件路径
pub fn print_final_stats(parts: usize, records: &[QuestionRecord], output_path: &Path) {
    let stats = RecordStats::collect(records);

    info!("\n{}", "=".repeat(60));
    info!("📊 解析完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("📚 部分: {}", parts);
    info!("✅ 题目: {}", stats.total);
    info!("🖼️ 含图片: {}", stats.with_image);
    if stats.without_number > 0 {
        info!("❓ 缺少题号: {}", stats.without_number);
    }
    info!("{}", "=".repeat(60));
    info!("\n结果已保存至: {}", output_path.display());
}

/// 题目统计
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RecordStats {
    pub total: usize,
    pub with_image: usize,
    pub without_number: usize,
}

impl RecordStats {
    pub fn collect(records: &[QuestionRecord]) -> Self {
        records.iter().fold(Self::default(), |stats, record| Self {
            total: stats.total + 1,
            with_image: stats.with_image + usize::from(record.image.is_some()),
            without_number: stats.without_number + usize::from(record.number.is_none()),
        })
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（字符数）
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
