//! 导出服务 - 业务能力层
//!
//! 只负责把一份 `QuizDeck` 写入文件，不关心解析流程

use crate::error::{AppError, Result};
use crate::models::QuizDeck;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// 导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Toml,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "toml" => Some(OutputFormat::Toml),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Toml => "toml",
            OutputFormat::Json => "json",
        }
    }

    /// 序列化为文本
    pub fn render(self, deck: &QuizDeck) -> Result<String> {
        match self {
            OutputFormat::Toml => Ok(toml::to_string_pretty(deck)?),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(deck)?),
        }
    }
}

/// 导出服务
pub struct DeckWriter {
    output_folder: PathBuf,
    format: OutputFormat,
}

impl DeckWriter {
    pub fn new(output_folder: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            output_folder: output_folder.into(),
            format,
        }
    }

    /// 写入文件，返回导出路径
    pub async fn write(&self, deck: &QuizDeck) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_folder)
            .await
            .map_err(|e| AppError::io(&self.output_folder, e))?;

        let path = self
            .output_folder
            .join(format!("{}.{}", sanitize_file_name(&deck.title), self.format.extension()));
        let content = self.format.render(deck)?;

        debug!("导出 {} ({} 字节)", path.display(), content.len());
        fs::write(&path, content)
            .await
            .map_err(|e| AppError::io(&path, e))?;

        Ok(path)
    }
}

/// 替换文件名中不允许出现的字符
fn sanitize_file_name(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        "untitled".to_string()
    } else {
        cleaned.to_string()
    }
}
