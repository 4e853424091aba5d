//! Format Module
//!
//! 固定の日付パターン表と、パターン全体一致による厳密な日付解析を提供します。

mod parser;
mod tokens;

use std::sync::OnceLock;

use log::warn;

pub(crate) use parser::DatePattern;

/// 厳密解析で試行する日付パターン（この順序で試行し、最初の一致を採用）
///
/// `05/03/2023`のように複数のパターンに一致する文字列は、
/// 先に並んでいるパターン（`dd/MM/yyyy`、3月5日）として解釈されます。
/// 順序を入れ替えると、日が12以下のすべての日付の解釈が変わります。
pub const SUPPORTED_FORMATS: [&str; 12] = [
    "dd/MM/yyyy",
    "MM/dd/yyyy",
    "yyyy-MM-dd",
    "dd-MM-yyyy",
    "MM-dd-yyyy",
    "dd.MM.yyyy",
    "MM.dd.yyyy",
    "d/M/yyyy",
    "M/d/yyyy",
    "yyyy/MM/dd",
    "dd MMM yyyy",
    "MMM dd, yyyy",
];

/// `SUPPORTED_FORMATS`を一度だけトークン化したパターン表（表と同じ順序）
pub(crate) fn supported_patterns() -> &'static [DatePattern] {
    static PATTERNS: OnceLock<Vec<DatePattern>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        SUPPORTED_FORMATS
            .iter()
            .filter_map(|format| match DatePattern::parse(format) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    warn!("skipping date pattern: {}", e);
                    None
                }
            })
            .collect()
    })
}
