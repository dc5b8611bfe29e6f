use crate::error::{AppError, Result};
use crate::models::{Question, Subject};
use crate::parser::parse_questions;
use crate::services::classify_subject;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// 一份文档的解析结果：题目列表 + 识别出的科目
///
/// 这是交给下游渲染的全部数据。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizDeck {
    pub title: String,
    pub subject: Subject,
    pub generated_at: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl QuizDeck {
    /// 解析文本并识别科目
    pub fn from_text(title: impl Into<String>, text: &str) -> Self {
        let title = title.into();
        let questions = parse_questions(text);
        let mut subject = classify_subject(&questions);

        // 内容无法判断时参考标题，如"2025年期中数学试卷"
        if subject.is_general() && !questions.is_empty() {
            if let Some(hint) = Subject::find(&title) {
                debug!("《{}》按标题识别科目: {}", title, hint);
                subject = hint;
            }
        }

        for q in questions.iter().filter(|q| q.has_conflicting_answers()) {
            warn!(
                "《{}》第 {} 题题干内答案 {:?} 与答案行 {:?} 不一致",
                title, q.number, q.inline_answer, q.explicit_answer
            );
        }

        Self {
            title,
            subject,
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            questions,
        }
    }

    /// 没有识别到任何题目时返回错误
    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.questions.is_empty() {
            return Err(AppError::NoQuestions {
                document: self.title.clone(),
            });
        }
        Ok(())
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// 已有答案的题目数量
    pub fn answered_count(&self) -> usize {
        self.questions.iter().filter(|q| q.answer().is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_parses_and_classifies() {
        let text = "1. 植物细胞中进行光合作用的结构是（   ）\nA. 叶绿体 B. 线粒体\n【答案】A";
        let deck = QuizDeck::from_text("生物小测", text);
        assert_eq!(deck.question_count(), 1);
        assert_eq!(deck.answered_count(), 1);
        assert_eq!(deck.subject, Subject::Biology);
        assert!(deck.ensure_not_empty().is_ok());
    }

    #[test]
    fn test_title_hint_used_when_content_has_no_signal() {
        let deck = QuizDeck::from_text("2025年期中数学试卷", "1. 一二三四五（   ）");
        assert_eq!(deck.subject, Subject::Math);

        let deck = QuizDeck::from_text("期中试卷", "1. 一二三四五（   ）");
        assert_eq!(deck.subject, Subject::General);
    }

    #[test]
    fn test_empty_deck_reports_no_questions() {
        let deck = QuizDeck::from_text("空白文档", "封面\n目录");
        assert_eq!(deck.subject, Subject::General);
        assert!(matches!(
            deck.ensure_not_empty(),
            Err(AppError::NoQuestions { document }) if document == "空白文档"
        ));
    }
}
