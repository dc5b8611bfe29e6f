/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use crate::config::Config;
use crate::orchestrator::{DocumentOutcome, ProcessingStats};
use anyhow::{Context, Result};
use std::fs;
use tracing::{info, warn};

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n题目提取日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)
        .with_context(|| format!("无法写入日志文件: {}", log_file_path))?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 文本题目提取");
    match &config.input_file {
        Some(file) => info!("📄 输入文件: {}", file),
        None => info!("📁 输入目录: {}", config.input_folder),
    }
    info!(
        "💾 输出目录: {} ({})",
        config.output_folder,
        config.output_format.extension()
    );
    info!("📊 最大并发数: {}", config.max_concurrent_documents);
    info!("{}", "=".repeat(60));
}

/// 记录文档加载信息
///
/// # 参数
/// - `total`: 文档总数
/// - `max_concurrent`: 最大并发数
pub fn log_documents_loaded(total: usize, max_concurrent: usize) {
    info!("✓ 找到 {} 个待处理的文档", total);
    info!("📋 最多同时处理 {} 个\n", max_concurrent);
}

/// 记录单个文档的处理结果
pub fn log_document_result(index: usize, title: &str, outcome: &DocumentOutcome) {
    match outcome {
        DocumentOutcome::Exported {
            path,
            subject,
            questions,
        } => info!(
            "[文档 {}] ✅ {} | {} | {} 道题目 → {}",
            index,
            truncate_text(title, 30),
            subject,
            questions,
            path.display()
        ),
        DocumentOutcome::Empty => warn!(
            "[文档 {}] ⚠️ {} | 未发现题目，已记录到警告文件",
            index,
            truncate_text(title, 30)
        ),
    }
}

/// 打印最终统计信息
///
/// # 参数
/// - `stats`: 处理统计
/// - `log_file_path`: 日志文件路径
pub fn print_final_stats(stats: &ProcessingStats, log_file_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 导出: {}/{}", stats.exported, stats.total);
    info!("📝 题目总数: {}", stats.questions);
    info!("⚠️ 无题目: {}", stats.empty);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));

    let summary = format!(
        "导出: {}/{}\n题目总数: {}\n无题目: {}\n失败: {}\n",
        stats.exported, stats.total, stats.questions, stats.empty, stats.failed
    );
    if let Err(e) = append_log(log_file_path, &summary) {
        warn!("写入日志文件失败: {:#}", e);
        return;
    }
    info!("\n日志已保存至: {}", log_file_path);
}

/// 向日志文件追加内容
pub fn append_log(log_file_path: &str, content: &str) -> Result<()> {
    use std::io::Write;

    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .with_context(|| format!("无法打开日志文件: {}", log_file_path))?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_counts_chars() {
        assert_eq!(truncate_text("一二三四五", 3), "一二三...");
        assert_eq!(truncate_text("abc", 3), "abc");
    }
}
