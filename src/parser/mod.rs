//! 文本解析层
//!
//! - `lines` - 行规范化
//! - `stem` - 题干作答位置规范化
//! - `segmenter` - 逐行切分题目的状态机

pub mod lines;
pub mod segmenter;
pub mod stem;

pub use lines::normalize_lines;
pub use segmenter::{classify_line, parse_questions, split_options, LineKind, Segmenter};
pub use stem::{normalize_stem, NormalizedStem, BLANK_MARKER};
