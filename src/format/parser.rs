//! DatePattern Module
//!
//! 日付パターン文字列の構文解析と、入力文字列への厳密な適用を提供します。
//!
//! 解析はカルチャに依存しません。月の略称は英語（Jan〜Dec）のみです。

use chrono::{NaiveDate, NaiveDateTime};

use super::tokens::PatternToken;
use crate::error::DateParseError;

/// 月の英語略称（インデックス + 1 = 月）
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// 解析済みの日付パターン
#[derive(Debug, Clone)]
pub(crate) struct DatePattern {
    /// 元のパターン文字列（結果のラベルとして使用）
    pattern: String,

    /// パースされたトークン列
    tokens: Vec<PatternToken>,
}

impl DatePattern {
    /// パターン文字列をパース
    ///
    /// # 引数
    ///
    /// * `pattern` - 日付パターン（例: `dd/MM/yyyy`）
    ///
    /// # 戻り値
    ///
    /// * `Ok(Self)` - パース成功
    /// * `Err(DateParseError::InvalidPattern)` - 未知の指定子、または日・月・年の欠落や重複
    pub fn parse(pattern: &str) -> Result<Self, DateParseError> {
        let invalid = |message: String| DateParseError::InvalidPattern {
            pattern: pattern.to_string(),
            message,
        };

        let mut tokens = Vec::new();
        let mut chars = pattern.chars().peekable();

        while let Some(ch) = chars.next() {
            let count = Self::count_consecutive(&mut chars, ch) + 1;
            let token = match (ch, count) {
                ('d', 1 | 2) => PatternToken::Day(count),
                ('M', 1 | 2) => PatternToken::Month(count),
                ('M', 3) => PatternToken::MonthAbbr,
                ('y', 4) => PatternToken::Year(count),
                _ if ch.is_ascii_alphabetic() => {
                    return Err(invalid(format!(
                        "unsupported specifier '{}'",
                        ch.to_string().repeat(count)
                    )));
                }
                _ => {
                    // 連続したリテラル文字はそれぞれ1トークン
                    for _ in 0..count {
                        tokens.push(PatternToken::Literal(ch));
                    }
                    continue;
                }
            };
            tokens.push(token);
        }

        let count_of = |pred: fn(&PatternToken) -> bool| tokens.iter().filter(|t| pred(t)).count();
        let days = count_of(|t| matches!(t, PatternToken::Day(_)));
        let months = count_of(|t| matches!(t, PatternToken::Month(_) | PatternToken::MonthAbbr));
        let years = count_of(|t| matches!(t, PatternToken::Year(_)));

        if days != 1 || months != 1 || years != 1 {
            return Err(invalid(
                "pattern must contain exactly one day, month and year field".to_string(),
            ));
        }

        Ok(Self {
            pattern: pattern.to_string(),
            tokens,
        })
    }

    /// 元のパターン文字列を取得
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// 入力文字列全体がパターンに一致する場合、日付（00:00:00）を返す
    ///
    /// 前後の空白は許容しません。数字は最大桁数まで貪欲に読み取り、
    /// バックトラックは行いません。存在しない日付（例: 2月30日）や
    /// 年0は一致しないものとして扱います。
    pub fn match_exact(&self, input: &str) -> Option<NaiveDateTime> {
        let mut rest = input;
        let (mut year, mut month, mut day) = (None, None, None);

        for token in &self.tokens {
            match token {
                PatternToken::Literal(ch) => {
                    rest = rest.strip_prefix(*ch)?;
                }
                PatternToken::MonthAbbr => {
                    let (value, remaining) = Self::read_month_abbr(rest)?;
                    month = Some(value);
                    rest = remaining;
                }
                PatternToken::Day(_) | PatternToken::Month(_) | PatternToken::Year(_) => {
                    let (min, max) = token.digit_range()?;
                    let (value, remaining) = Self::read_digits(rest, min, max)?;
                    match token {
                        PatternToken::Day(_) => day = Some(value),
                        PatternToken::Month(_) => month = Some(value),
                        _ => year = Some(value),
                    }
                    rest = remaining;
                }
            }
        }

        if !rest.is_empty() {
            return None;
        }

        let year = i32::try_from(year?).ok().filter(|y| *y >= 1)?;
        NaiveDate::from_ymd_opt(year, month?, day?)?.and_hms_opt(0, 0, 0)
    }

    /// 先頭の数字を`min`〜`max`桁読み取る
    fn read_digits(input: &str, min: usize, max: usize) -> Option<(u32, &str)> {
        let len = input
            .bytes()
            .take(max)
            .take_while(|b| b.is_ascii_digit())
            .count();
        if len < min {
            return None;
        }
        let value = input[..len].parse().ok()?;
        Some((value, &input[len..]))
    }

    /// 先頭3文字を月の略称として読み取る
    fn read_month_abbr(input: &str) -> Option<(u32, &str)> {
        let head = input.get(..3)?;
        let index = MONTH_ABBREVIATIONS
            .iter()
            .position(|name| name.eq_ignore_ascii_case(head))?;
        Some((index as u32 + 1, &input[3..]))
    }

    /// 同じ文字が連続する数をカウント（最初の1文字を除く）
    fn count_consecutive(
        chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
        target: char,
    ) -> usize {
        let mut count = 0;
        while chars.peek() == Some(&target) {
            chars.next();
            count += 1;
        }
        count
    }
}
