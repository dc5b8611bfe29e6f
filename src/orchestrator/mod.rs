//! 编排层（Orchestration Layer）
//!
//! ```text
//! batch_processor (处理 Vec<SourceDocument>)
//!     ↓
//! document_processor (处理单个文档)
//!     ↓
//! parser + services (解析 / 科目识别 / 导出 / 警告)
//! ```

pub mod batch_processor;
pub mod document_processor;

pub use batch_processor::{App, ProcessingStats};
pub use document_processor::{process_document, DocumentOutcome};
