//! PatternToken Module
//!
//! 日付パターン文字列（例: `dd/MM/yyyy`）のトークン定義を提供します。

/// 日付パターントークン
///
/// 日付パターン文字列を解析した際に生成されるトークンです。
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PatternToken {
    /// 日（"d" -> 1, 1〜2桁 / "dd" -> 2, 2桁固定）
    Day(usize),

    /// 月（"M" -> 1, 1〜2桁 / "MM" -> 2, 2桁固定）
    Month(usize),

    /// 月の英語略称（"MMM" -> Jan〜Dec、大文字小文字を区別しない）
    MonthAbbr,

    /// 年（"yyyy" -> 4桁固定）
    Year(usize),

    /// リテラル文字（例: '/', '-', '.', ' ', ','）
    Literal(char),
}

impl PatternToken {
    /// 数値トークンの桁数範囲（最小, 最大）を取得
    ///
    /// 指定子が1文字の場合は1〜2桁、それ以外は指定子の長さちょうどの桁数を受け付けます。
    pub fn digit_range(&self) -> Option<(usize, usize)> {
        match self {
            PatternToken::Day(width) | PatternToken::Month(width) | PatternToken::Year(width) => {
                if *width == 1 {
                    Some((1, 2))
                } else {
                    Some((*width, *width))
                }
            }
            PatternToken::MonthAbbr | PatternToken::Literal(_) => None,
        }
    }
}
