//! 题目切分状态机
//!
//! 逐行读取规范化后的文本，按固定优先级判定每一行的类型：
//!
//! 1. 题目开始（`12. ...`）
//! 2. 选项行（含 `A.`~`D.` 标号）
//! 3. 答案行（`【答案】` / `答案：` / `Answer:`）
//! 4. 解析行（`【解析】` / `解析：` / `Explanation:`）
//! 5. 解析续行（已进入解析后的无标签行）
//!
//! 前面的规则先"认领"一行，后面的规则不再处理该行。
//! 无法识别的行直接丢弃，切分过程不会失败。

use crate::models::Question;
use crate::parser::lines::normalize_lines;
use crate::parser::stem::normalize_stem;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

static QUESTION_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s*").expect("invalid question start regex"));

/// 行首或空白之后的选项标号，用于判定是否为选项行
static OPTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)[A-D]\.").expect("invalid option line regex"));

/// 选项标号，用于切分同一行内的多个选项
static OPTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-D]\.").expect("invalid option marker regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("invalid whitespace regex"));

static ANSWER_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:【答案】|答案：|Answer:)\s*").expect("invalid answer label regex"));

/// 答案字母：不与其他英文字母相连；多选答案（如 `BD`）取第一个字母
static ANSWER_LETTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^A-Za-z])([A-D])[A-D]*(?:$|[^A-Za-z])").expect("invalid answer letter regex")
});

static EXPLANATION_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:【解析】|解析：|解析:|Explanation:?)\s*").expect("invalid explanation label regex")
});

/// 解析中的子标签，如 `【分析】`、`【详解】`
static BRACKET_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"【[^】]*】").expect("invalid bracket tag regex"));

/// 单行的判定结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// 新题目开始，携带题号和完整行文本
    QuestionStart { number: &'a str, raw_stem: &'a str },
    /// 一个或多个选项片段
    OptionFragments(Vec<String>),
    /// 答案行，可能没有找到字母
    AnswerLine(Option<char>),
    /// 带标签的解析行（已去除标签）
    ExplanationLine(String),
    /// 解析模式下的无标签续行
    Continuation(&'a str),
    /// 无法识别，丢弃
    Unrecognized,
}

/// 判定一行的类型
///
/// `current` 为正在累积的题目；规则 2~5 只在已有题目时生效。
pub fn classify_line<'a>(line: &'a str, current: Option<&Question>) -> LineKind<'a> {
    if let Some(caps) = QUESTION_START.captures(line) {
        let number = caps.get(1).map_or("", |m| m.as_str());
        return LineKind::QuestionStart {
            number,
            raw_stem: line,
        };
    }

    let Some(current) = current else {
        return LineKind::Unrecognized;
    };

    if OPTION_LINE.is_match(line) {
        return LineKind::OptionFragments(split_options(line));
    }

    if line.starts_with("【答案】") || line.starts_with("答案：") || line.starts_with("Answer:") {
        return LineKind::AnswerLine(extract_answer_letter(line));
    }

    if line.starts_with("解析") || line.starts_with("【解析】") || line.starts_with("Explanation") {
        return LineKind::ExplanationLine(clean_explanation(line));
    }

    if current.has_explanation() {
        return LineKind::Continuation(line);
    }

    LineKind::Unrecognized
}

/// 按 `A.`~`D.` 标号切分一行中的选项，每项保留标号并压缩空白
pub fn split_options(line: &str) -> Vec<String> {
    let starts: Vec<usize> = OPTION_MARKER.find_iter(line).map(|m| m.start()).collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(line.len());
            WHITESPACE_RUN
                .replace_all(line[start..end].trim(), " ")
                .into_owned()
        })
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

fn extract_answer_letter(line: &str) -> Option<char> {
    let rest = ANSWER_LABEL.replace(line, "");
    ANSWER_LETTER
        .captures(rest.trim())
        .and_then(|caps| caps[1].chars().next())
}

fn clean_explanation(line: &str) -> String {
    let rest = EXPLANATION_LABEL.replace(line, "");
    BRACKET_TAG.replace_all(rest.trim(), "").trim().to_string()
}

/// 题目累积器：当前正在构建的题目 + 已完成的题目列表
#[derive(Debug, Default)]
pub struct Segmenter {
    current: Option<Question>,
    finished: Vec<Question>,
}

impl Segmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 处理一行（应已去除首尾空白）
    pub fn feed(&mut self, line: &str) {
        match classify_line(line, self.current.as_ref()) {
            LineKind::QuestionStart { number, raw_stem } => {
                self.flush();
                let stem = normalize_stem(raw_stem);
                debug!(
                    "题目开始: {} | 题干内答案: {:?}",
                    number, stem.inline_answer
                );
                self.current = Some(Question {
                    number: number.to_string(),
                    stem: stem.text,
                    inline_answer: stem.inline_answer,
                    ..Default::default()
                });
            }
            LineKind::OptionFragments(fragments) => {
                if let Some(q) = self.current.as_mut() {
                    trace!("题目 {} 选项: {:?}", q.number, fragments);
                    q.options.extend(fragments);
                }
            }
            LineKind::AnswerLine(letter) => {
                if let (Some(q), Some(letter)) = (self.current.as_mut(), letter) {
                    q.explicit_answer = Some(letter);
                }
            }
            LineKind::ExplanationLine(text) => {
                if let Some(q) = self.current.as_mut() {
                    append_explanation(q, &text);
                }
            }
            LineKind::Continuation(text) => {
                if let Some(q) = self.current.as_mut() {
                    append_explanation(q, text);
                }
            }
            LineKind::Unrecognized => {
                trace!("丢弃无法识别的行: {}", line);
            }
        }
    }

    /// 输入结束，提交最后一道题并返回全部题目
    pub fn finish(mut self) -> Vec<Question> {
        self.flush();
        self.finished
    }

    fn flush(&mut self) {
        if let Some(q) = self.current.take() {
            self.finished.push(q);
        }
    }
}

fn append_explanation(q: &mut Question, text: &str) {
    if q.explanation.is_empty() {
        q.explanation.push_str(text);
        return;
    }
    q.explanation.push('\n');
    q.explanation.push_str(text);
}

/// 从整段文本中提取题目列表
pub fn parse_questions(text: &str) -> Vec<Question> {
    let mut segmenter = Segmenter::new();
    for line in normalize_lines(text) {
        segmenter.feed(line);
    }
    let questions = segmenter.finish();
    debug!("共提取 {} 道题目", questions.len());
    questions
}
