use crate::services::OutputFormat;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 待处理文本文件所在目录
    pub input_folder: String,
    /// 单个待处理文件（命令行参数传入时优先于 input_folder）
    pub input_file: Option<String>,
    /// 导出目录
    pub output_folder: String,
    /// 导出格式
    pub output_format: OutputFormat,
    /// 同时处理的文档数量
    pub max_concurrent_documents: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 记录空文档的警告文件
    pub warn_file: String,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_folder: "input_txt".to_string(),
            input_file: None,
            output_folder: "output_toml".to_string(),
            output_format: OutputFormat::Toml,
            max_concurrent_documents: 8,
            verbose_logging: false,
            warn_file: "warn.txt".to_string(),
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            input_folder: std::env::var("INPUT_FOLDER").unwrap_or(default.input_folder),
            input_file: default.input_file,
            output_folder: std::env::var("OUTPUT_FOLDER").unwrap_or(default.output_folder),
            output_format: std::env::var("OUTPUT_FORMAT").ok().and_then(|v| OutputFormat::from_str(&v)).unwrap_or(default.output_format),
            max_concurrent_documents: std::env::var("MAX_CONCURRENT_DOCUMENTS").ok().and_then(|v| v.parse().ok()).filter(|n: &usize| *n > 0).unwrap_or(default.max_concurrent_documents),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            warn_file: std::env::var("WARN_FILE").unwrap_or(default.warn_file),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }

    /// 使用命令行传入的单个文件覆盖目录配置
    pub fn with_input_file(mut self, path: Option<String>) -> Self {
        if let Some(path) = path.filter(|p| !p.trim().is_empty()) {
            self.input_file = Some(path);
        }
        self
    }
}
