//! 批量文档处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **批量加载**：扫描输入目录（或命令行指定的单个文件）
//! 2. **并发控制**：使用 Semaphore 限制同时处理的文档数量
//! 3. **向下委托**：每份文档交给 `document_processor` 处理
//! 4. **全局统计**：汇总所有文档的处理结果
//!
//! 单份文档失败不会中断整个批次。

use crate::config::Config;
use crate::models::{load_all_text_documents, load_text_document, SourceDocument};
use crate::orchestrator::document_processor::{process_document, DocumentOutcome};
use crate::services::{DeckWriter, WarnWriter};
use crate::utils::logging::{
    init_log_file, log_document_result, log_documents_loaded, log_startup, print_final_stats,
};
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 处理统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub total: usize,
    pub exported: usize,
    pub empty: usize,
    pub failed: usize,
    pub questions: usize,
}

/// 应用主结构
pub struct App {
    config: Config,
    writer: Arc<DeckWriter>,
    warn_writer: Arc<WarnWriter>,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        init_log_file(&config.output_log_file)?;
        log_startup(&config);

        let writer = Arc::new(DeckWriter::new(
            config.output_folder.as_str(),
            config.output_format,
        ));
        let warn_writer = Arc::new(WarnWriter::with_path(config.warn_file.as_str()));

        Ok(Self {
            config,
            writer,
            warn_writer,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<ProcessingStats> {
        let documents = self.load_documents().await?;

        if documents.is_empty() {
            warn!("⚠️ 没有找到待处理的文本文件，程序结束");
            return Ok(ProcessingStats::default());
        }

        log_documents_loaded(documents.len(), self.config.max_concurrent_documents);

        let stats = self.process_all_documents(documents).await;
        print_final_stats(&stats, &self.config.output_log_file);

        Ok(stats)
    }

    /// 加载文档
    async fn load_documents(&self) -> Result<Vec<SourceDocument>> {
        if let Some(file) = &self.config.input_file {
            info!("\n📁 正在加载文件: {}", file);
            let document = load_text_document(Path::new(file))
                .await
                .with_context(|| format!("无法读取输入文件: {}", file))?;
            return Ok(vec![document]);
        }

        info!("\n📁 正在扫描待处理的文档: {}", self.config.input_folder);
        load_all_text_documents(&self.config.input_folder)
            .await
            .with_context(|| format!("无法读取输入目录: {}", self.config.input_folder))
    }

    /// 并发处理所有文档
    async fn process_all_documents(&self, documents: Vec<SourceDocument>) -> ProcessingStats {
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_documents));
        let mut stats = ProcessingStats {
            total: documents.len(),
            ..Default::default()
        };

        let mut meta = Vec::with_capacity(documents.len());
        let mut handles = Vec::with_capacity(documents.len());
        for (i, document) in documents.into_iter().enumerate() {
            let semaphore = semaphore.clone();
            let writer = self.writer.clone();
            let warn_writer = self.warn_writer.clone();
            meta.push((i + 1, document.title.clone()));
            handles.push(tokio::spawn(async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(e) => return Err(anyhow::Error::from(e)),
                };
                process_document(document, &writer, &warn_writer, i + 1).await
            }));
        }

        let results = futures::future::join_all(handles).await;

        for ((index, title), result) in meta.into_iter().zip(results) {
            match result {
                Ok(Ok(outcome)) => {
                    log_document_result(index, &title, &outcome);
                    match outcome {
                        DocumentOutcome::Exported { questions, .. } => {
                            stats.exported += 1;
                            stats.questions += questions;
                        }
                        DocumentOutcome::Empty => stats.empty += 1,
                    }
                }
                Ok(Err(e)) => {
                    error!("[文档 {}] {} 处理失败: {:#}", index, title, e);
                    stats.failed += 1;
                }
                Err(e) => {
                    error!("[文档 {}] {} 任务异常: {}", index, title, e);
                    stats.failed += 1;
                }
            }
        }

        stats
    }
}
