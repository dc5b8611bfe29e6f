use crate::error::{AppError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 待解析的文档（已从原始文档中提取出的纯文本）
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub title: String,
    pub text: String,
    pub path: PathBuf,
}

/// 读取单个文本文件，文件名（不含扩展名）作为标题
pub async fn load_text_document(path: &Path) -> Result<SourceDocument> {
    let text = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::io(path, e))?;

    let title = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "untitled".to_string());

    Ok(SourceDocument {
        title,
        text,
        path: path.to_path_buf(),
    })
}

/// 从文件夹中加载所有 .txt 文件，读取失败的文件记录日志后跳过
pub async fn load_all_text_documents(folder_path: &str) -> Result<Vec<SourceDocument>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        return Err(AppError::DirectoryNotFound(folder));
    }

    let mut paths = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .map_err(|e| AppError::io(&folder, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::io(&folder, e))?
    {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("txt") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_text_document(&path).await {
            Ok(doc) => documents.push(doc),
            Err(e) => tracing::warn!("加载文件失败 {}: {}", path.display(), e),
        }
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("quiz_deck_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_load_text_document_uses_file_stem_as_title() {
        let dir = scratch_dir("single");
        let path = dir.join("期中数学.txt");
        std::fs::write(&path, "1. 题目\nA. 1 B. 2").unwrap();

        let doc = load_text_document(&path).await.unwrap();
        assert_eq!(doc.title, "期中数学");
        assert!(doc.text.starts_with("1. 题目"));
    }

    #[tokio::test]
    async fn test_load_all_only_reads_txt_files_in_order() {
        let dir = scratch_dir("folder");
        std::fs::write(dir.join("b.txt"), "2. 乙").unwrap();
        std::fs::write(dir.join("a.txt"), "1. 甲").unwrap();
        std::fs::write(dir.join("notes.md"), "ignored").unwrap();

        let docs = load_all_text_documents(dir.to_str().unwrap()).await.unwrap();
        let titles: Vec<&str> = docs.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_missing_folder_is_an_error() {
        let result = load_all_text_documents("/definitely/not/here/quiz_deck").await;
        assert!(matches!(result, Err(AppError::DirectoryNotFound(_))));
    }
}
