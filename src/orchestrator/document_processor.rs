//! 单个文档处理器 - 编排层
//!
//! 负责一份文档的完整流程：解析 → 识别科目 → 导出 / 写警告

use crate::models::{QuizDeck, SourceDocument, Subject};
use crate::services::{DeckWriter, WarnWriter};
use crate::utils::logging::truncate_text;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// 单个文档的处理结果
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentOutcome {
    /// 已导出
    Exported {
        path: PathBuf,
        subject: Subject,
        questions: usize,
    },
    /// 没有识别到题目，已写入警告文件
    Empty,
}

/// 处理单个文档
///
/// # 参数
/// - `document`: 待解析文档
/// - `writer`: 导出服务
/// - `warn_writer`: 警告写入服务
/// - `doc_index`: 文档编号（用于日志）
pub async fn process_document(
    document: SourceDocument,
    writer: &DeckWriter,
    warn_writer: &WarnWriter,
    doc_index: usize,
) -> Result<DocumentOutcome> {
    info!("[文档 {}] 📄 开始解析: {}", doc_index, document.title);

    let deck = QuizDeck::from_text(document.title.as_str(), &document.text);

    if let Err(e) = deck.ensure_not_empty() {
        warn!("[文档 {}] ⚠️ {}", doc_index, e);
        warn_writer
            .write(&document.title, &document.path, &e.to_string())
            .await
            .context("写入警告文件失败")?;
        return Ok(DocumentOutcome::Empty);
    }

    for q in &deck.questions {
        debug!(
            "[文档 {}] 第 {} 题: {} | 选项 {} 个 | 答案 {:?}",
            doc_index,
            q.number,
            truncate_text(&q.stem, 40),
            q.options.len(),
            q.answer()
        );
    }

    info!(
        "[文档 {}] ✓ 提取 {} 道题目（有答案 {} 道），科目: {}",
        doc_index,
        deck.question_count(),
        deck.answered_count(),
        deck.subject
    );

    let path = writer
        .write(&deck)
        .await
        .with_context(|| format!("导出《{}》失败", deck.title))?;

    Ok(DocumentOutcome::Exported {
        path,
        subject: deck.subject,
        questions: deck.question_count(),
    })
}
