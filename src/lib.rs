//! # Quiz Deck
//!
//! 从松散格式的纯文本（由 Word 文档提取）中提取结构化试题，并识别所属科目
//!
//! ## 架构设计
//!
//! ### ① 解析层（Parser）
//! - `parser/lines` - 去除空行、首尾空白
//! - `parser/segmenter` - 逐行判定类型的状态机，累积 `Question`
//! - `parser/stem` - 题干作答位置规范化，提取题干内答案
//!
//! ### ② 业务能力层（Services）
//! - `SubjectClassifier` - 关键词计数 + 拉丁字母占比识别科目
//! - `DeckWriter` - 导出 TOML / JSON
//! - `WarnWriter` - 写 warn.txt 能力
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量文档处理，管理并发
//! - `orchestrator/document_processor` - 单个文档：解析 → 识别 → 导出
//!
//! ## 使用
//!
//! ```
//! use quiz_deck::{classify_subject, parse_questions, Subject};
//!
//! let questions = parse_questions("1. 1+1=（   ）\nA. 1 B. 2\n【答案】B");
//! assert_eq!(questions[0].explicit_answer, Some('B'));
//! let _subject: Subject = classify_subject(&questions);
//! ```

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod parser;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, Result};
pub use models::{Question, QuizDeck, SourceDocument, Subject};
pub use orchestrator::{App, DocumentOutcome, ProcessingStats};
pub use parser::{normalize_lines, normalize_stem, parse_questions, LineKind, BLANK_MARKER};
pub use services::{classify_subject, DeckWriter, OutputFormat, WarnWriter};
