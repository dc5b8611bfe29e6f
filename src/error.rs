use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
///
/// 解析器与科目识别器本身没有错误路径，这里只覆盖外围的文件读写、
/// 导出和"文档中没有识别到题目"这一种调用方可见的情况。
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件读写失败
    #[error("文件操作失败 ({}): {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 目录不存在
    #[error("目录不存在: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// 文档中没有识别到任何题目
    #[error("未在文档《{document}》中发现有效的试题内容，请检查格式")]
    NoQuestions { document: String },

    /// 导出失败
    #[error("导出失败 ({format}): {message}")]
    Serialize {
        format: &'static str,
        message: String,
    },
}

impl AppError {
    /// 包装 IO 错误并附带路径
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::Serialize {
            format: "toml",
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Serialize {
            format: "toml",
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialize {
            format: "json",
            message: err.to_string(),
        }
    }
}

/// 应用程序结果类型
pub type Result<T> = std::result::Result<T, AppError>;
