/// 将原始文本切分为去除首尾空白后的非空行
///
/// 空行不携带任何信息，直接丢弃，不影响解析状态。
pub fn normalize_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
