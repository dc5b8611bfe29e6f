use regex::Regex;
use std::sync::LazyLock;

/// 统一的作答位置标记
pub const BLANK_MARKER: &str = "（   ）";

/// 题干括号内的答案，如 `( B )`、`（C）`
static INLINE_ANSWER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[（(]\s*([A-D])\s*[）)]").expect("invalid inline answer regex"));

static UNDERSCORE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_{2,}").expect("invalid underscore regex"));

static EMPTY_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"（\s*）").expect("invalid empty bracket regex"));

/// 题干规范化结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedStem {
    pub text: String,
    pub inline_answer: Option<char>,
}

/// 规范化题干中的作答位置
///
/// 1. 括号内单个字母 A-D 视为题干内答案，记录后替换为标记
/// 2. 否则将连续两个以上的下划线替换为标记
/// 3. 已有的空全角括号统一为标记
/// 4. 仍没有任何括号时在末尾补一个标记
pub fn normalize_stem(raw: &str) -> NormalizedStem {
    let mut text = raw.to_string();
    let mut inline_answer = None;

    if let Some(caps) = INLINE_ANSWER.captures(raw) {
        inline_answer = caps[1].chars().next();
        text = INLINE_ANSWER.replace(raw, BLANK_MARKER).into_owned();
    } else if UNDERSCORE_RUN.is_match(&text) {
        text = UNDERSCORE_RUN.replace_all(&text, BLANK_MARKER).into_owned();
    }

    if EMPTY_BRACKETS.is_match(&text) {
        text = EMPTY_BRACKETS.replace_all(&text, BLANK_MARKER).into_owned();
    }

    if !text.contains('（') && !text.contains('(') {
        text.push_str(BLANK_MARKER);
    }

    NormalizedStem {
        text,
        inline_answer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_answer_ascii_parens() {
        let result = normalize_stem("3. 下列说法正确的是( B )");
        assert_eq!(result.inline_answer, Some('B'));
        assert_eq!(result.text, format!("3. 下列说法正确的是{}", BLANK_MARKER));
        assert_eq!(result.text.matches(BLANK_MARKER).count(), 1);
        assert!(!result.text.contains("B"));
    }

    #[test]
    fn test_inline_answer_full_width_parens() {
        let result = normalize_stem("4. 下列词语中加点字注音正确的一项是（　D　）");
        assert_eq!(result.inline_answer, Some('D'));
        assert!(result.text.ends_with(BLANK_MARKER));
    }

    #[test]
    fn test_underscores_without_parens() {
        let result = normalize_stem("5. The capital of France is ______");
        assert_eq!(result.inline_answer, None);
        assert_eq!(result.text, format!("5. The capital of France is {}", BLANK_MARKER));
        assert_eq!(result.text.matches(BLANK_MARKER).count(), 1);
    }

    #[test]
    fn test_single_underscore_is_kept() {
        let result = normalize_stem("6. snake_case 命名（）");
        assert!(result.text.contains("snake_case"));
        assert!(result.text.ends_with(BLANK_MARKER));
    }

    #[test]
    fn test_empty_brackets_collapse() {
        let result = normalize_stem("7. 中国的首都是（      ）。");
        assert_eq!(result.text, format!("7. 中国的首都是{}。", BLANK_MARKER));
    }

    #[test]
    fn test_marker_appended_when_no_slot() {
        let result = normalize_stem("8. 下列属于哺乳动物的是");
        assert_eq!(result.text, format!("8. 下列属于哺乳动物的是{}", BLANK_MARKER));
    }

    #[test]
    fn test_ascii_parens_suppress_append() {
        let result = normalize_stem("9. 计算 (x+1)^2 的展开式");
        assert!(!result.text.contains(BLANK_MARKER));
    }

    #[test]
    fn test_idempotent_on_normalized_stem() {
        let once = normalize_stem("10. 下列选项中正确的是( A )");
        let twice = normalize_stem(&once.text);
        assert_eq!(twice.text, once.text);
        assert_eq!(twice.inline_answer, None);

        let plain = format!("11. 填空{}", BLANK_MARKER);
        assert_eq!(normalize_stem(&plain).text, plain);
    }
}
