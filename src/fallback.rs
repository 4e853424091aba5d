//! General Parse Module
//!
//! 固定パターンに一致しなかった文字列に対する、カルチャ非依存の汎用日付解析。
//!
//! 試行順序:
//!
//! 1. RFC 3339 / ISO 8601（オフセット付き）
//! 2. RFC 2822
//! 3. 日時レイアウト（`DATETIME_LAYOUTS`）
//! 4. 日付のみのレイアウト（`DATE_LAYOUTS`、時刻は00:00:00）
//!
//! オフセット付きの入力はオフセットを捨て、記載された壁時計の時刻をそのまま使います。
//! 時刻のみの文字列は現在日付に依存するため受け付けません。

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// 日時レイアウト（chrono書式）
const DATETIME_LAYOUTS: [&str; 16] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%d %B %Y %H:%M:%S",
    "%d %B %Y %H:%M",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %I:%M:%S %p",
];

/// 日付のみのレイアウト（chrono書式）
const DATE_LAYOUTS: [&str; 13] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%m.%d.%Y",
    "%d %B %Y",
    "%d-%b-%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%A, %B %d, %Y",
    "%a, %d %b %Y",
    "%A, %d %B %Y",
];

/// 汎用日付解析
///
/// # 戻り値
///
/// * `Some(NaiveDateTime)` - いずれかの形式で解析できた場合
/// * `None` - 空白のみ、またはどの形式にも一致しない場合
pub(crate) fn parse_general(input: &str) -> Option<NaiveDateTime> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.naive_local());
    }

    DATETIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(s, layout).ok())
        .or_else(|| {
            DATE_LAYOUTS.iter().find_map(|layout| {
                NaiveDate::parse_from_str(s, layout)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
        })
        .filter(|dt| (1..=9999).contains(&dt.year()))
}
