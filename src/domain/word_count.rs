//! 字数统计
//!
//! 按连续空白切分文本，丢弃空片段后计数

/// 统计文本中以空白分隔的非空词数
///
/// 连续的空白（空格、制表符、换行等）视为一个分隔符，
/// 首尾空白不产生空词。
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
