use crate::error::{AppError, Result};
use crate::models::QuizDeck;
use std::path::Path;
use tokio::fs;

/// 读取此前导出的 TOML 题目文件
pub async fn load_deck(toml_file_path: &Path) -> Result<QuizDeck> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|e| AppError::io(toml_file_path, e))?;

    let deck: QuizDeck = toml::from_str(&content)?;
    tracing::debug!(
        "成功加载 {}: {} 道题目",
        toml_file_path.display(),
        deck.question_count()
    );

    Ok(deck)
}
