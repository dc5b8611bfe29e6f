//! 警告写入服务 - 业务能力层
//!
//! 只负责"写 warn.txt"能力，记录没有识别到题目的文档

use crate::error::{AppError, Result};
use chrono::Local;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// 警告写入服务
pub struct WarnWriter {
    warn_file_path: PathBuf,
}

impl WarnWriter {
    /// 创建新的警告写入服务
    pub fn new() -> Self {
        Self {
            warn_file_path: PathBuf::from("warn.txt"),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            warn_file_path: path.into(),
        }
    }

    /// 追加一条警告
    ///
    /// # 参数
    /// - `document`: 文档标题
    /// - `source`: 文档路径
    /// - `reason`: 原因
    pub async fn write(&self, document: &str, source: &Path, reason: &str) -> Result<()> {
        debug!("写入警告: 文档 {} | {}", document, reason);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.warn_file_path)
            .await
            .map_err(|e| AppError::io(&self.warn_file_path, e))?;

        let warn_msg = format!(
            "[{}] 文档 {} | 路径: {} | {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            document,
            source.display(),
            reason
        );

        file.write_all(warn_msg.as_bytes())
            .await
            .map_err(|e| AppError::io(&self.warn_file_path, e))?;

        Ok(())
    }
}

impl Default for WarnWriter {
    fn default() -> Self {
        Self::new()
    }
}
