use serde::{Deserialize, Serialize};

/// 从文本中提取出的一道题目
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 题号，保留原文写法
    pub number: String,
    /// 规范化后的题干，作答位置统一为 `（   ）`
    pub stem: String,
    /// 题干括号内直接给出的答案
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_answer: Option<char>,
    /// 【答案】行给出的答案
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_answer: Option<char>,
    /// 选项，每项保留 "A." 形式的标号
    #[serde(default)]
    pub options: Vec<String>,
    /// 解析，多行以换行连接
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    pub fn new(number: impl Into<String>, stem: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            stem: stem.into(),
            ..Default::default()
        }
    }

    /// 最终答案：答案行在文档中位于题干之后，因此优先于题干内答案
    pub fn answer(&self) -> Option<char> {
        self.explicit_answer.or(self.inline_answer)
    }

    /// 题干内答案与答案行同时存在且不一致
    pub fn has_conflicting_answers(&self) -> bool {
        matches!(
            (self.inline_answer, self.explicit_answer),
            (Some(inline), Some(explicit)) if inline != explicit
        )
    }

    pub fn has_explanation(&self) -> bool {
        !self.explanation.is_empty()
    }

    /// 参与科目识别的全部文本：题干、选项、解析
    pub fn text_parts(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.stem.as_str())
            .chain(self.options.iter().map(String::as_str))
            .chain(std::iter::once(self.explanation.as_str()))
            .filter(|part| !part.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_answer_wins() {
        let mut q = Question::new("1", "题干（   ）");
        q.inline_answer = Some('A');
        q.explicit_answer = Some('C');

        assert_eq!(q.answer(), Some('C'));
        assert!(q.has_conflicting_answers());
        assert_eq!(q.inline_answer, Some('A'));
    }

    #[test]
    fn test_inline_answer_used_when_no_answer_line() {
        let mut q = Question::new("2", "题干（   ）");
        q.inline_answer = Some('B');

        assert_eq!(q.answer(), Some('B'));
        assert!(!q.has_conflicting_answers());
    }

    #[test]
    fn test_text_parts_skips_empty_explanation() {
        let mut q = Question::new("3", "stem");
        q.options = vec!["A. x".to_string(), "B. y".to_string()];

        let parts: Vec<&str> = q.text_parts().collect();
        assert_eq!(parts, vec!["stem", "A. x", "B. y"]);
    }
}
