//! Classifier Module
//!
//! 生のセル値を日付として分類・正規化する決定手順を提供するモジュール。
//!
//! # 決定手順
//!
//! 以下の順序で試行し、最初に成功したルールの結果を返します。
//!
//! 1. ネイティブ日時: そのまま成功（`Excel DateTime`）
//! 2. 数値: `[1, 2958465]`の範囲ならシリアル日付として変換（`Excel Serial Date`）。
//!    範囲外なら文字列化して3.へ
//! 3. 文字列（空白のみでない場合）: `SUPPORTED_FORMATS`の順に全体一致を試行
//! 4. 汎用解析（`General Parse`）
//! 5. 失敗（`Unable to parse as date`）

use chrono::NaiveDateTime;
use log::{debug, trace};

use crate::error::DateParseError;
use crate::fallback::parse_general;
use crate::format::supported_patterns;
use crate::serial::{is_serial_date, serial_to_datetime};
use crate::types::{DateParseResult, RawCellValue};

/// ネイティブ日時に一致した場合のラベル
pub const EXCEL_DATETIME_LABEL: &str = "Excel DateTime";

/// シリアル日付に一致した場合のラベル
pub const EXCEL_SERIAL_LABEL: &str = "Excel Serial Date";

/// 汎用解析に成功した場合のラベル
pub const GENERAL_PARSE_LABEL: &str = "General Parse";

/// どのルールにも一致しなかった場合のエラーメッセージ
pub const UNPARSEABLE_MESSAGE: &str = "Unable to parse as date";

/// セル値を分類する
///
/// 決して失敗しません。内部で発生したエラーは、エラーメッセージを持つ
/// 失敗結果に変換されます。同じ入力に対しては常に同じ結果を返します。
///
/// # 使用例
///
/// ```rust
/// use xlsxdate::{classify, RawCellValue};
///
/// let result = classify(&RawCellValue::Text("25/12/2023".to_string()));
/// assert!(result.is_successfully_parsed());
/// assert_eq!(result.date_format(), "dd/MM/yyyy");
///
/// let result = classify(&RawCellValue::Number(2023.0));
/// assert!(!result.is_successfully_parsed());
/// assert_eq!(result.error_message(), "Unable to parse as date");
/// ```
pub fn classify(value: &RawCellValue) -> DateParseResult {
    let original_value = value.as_raw_string();

    match try_classify(value) {
        Ok(Some((date, label))) => {
            trace!("classified '{}' as {} ({})", original_value, date, label);
            DateParseResult::success(original_value, date, label)
        }
        Ok(None) => {
            debug!("'{}': {}", original_value, UNPARSEABLE_MESSAGE);
            DateParseResult::failure(original_value, UNPARSEABLE_MESSAGE)
        }
        Err(e) => {
            debug!("'{}': classification failed: {}", original_value, e);
            DateParseResult::failure(original_value, e.to_string())
        }
    }
}

/// 決定手順の本体
///
/// * `Ok(Some((日時, ラベル)))` - いずれかのルールに一致
/// * `Ok(None)` - どのルールにも一致しない
/// * `Err(DateParseError)` - 変換中の予期しないエラー
fn try_classify(value: &RawCellValue) -> Result<Option<(NaiveDateTime, String)>, DateParseError> {
    let text = match value {
        RawCellValue::DateTime(dt) => {
            return Ok(Some((*dt, EXCEL_DATETIME_LABEL.to_string())));
        }
        RawCellValue::Number(n) => {
            if !n.is_finite() {
                return Err(DateParseError::NonFiniteNumber(*n));
            }
            if is_serial_date(*n) {
                let date = serial_to_datetime(*n)?;
                return Ok(Some((date, EXCEL_SERIAL_LABEL.to_string())));
            }
            n.to_string()
        }
        RawCellValue::Text(s) => s.clone(),
        RawCellValue::Other(_) => return Ok(None),
    };

    if text.trim().is_empty() {
        return Ok(None);
    }

    if let Some(matched) = match_supported_formats(&text) {
        return Ok(Some(matched));
    }

    Ok(parse_general(&text).map(|date| (date, GENERAL_PARSE_LABEL.to_string())))
}

/// 固定パターン表を順に試行し、最初に全体一致したパターンを返す
fn match_supported_formats(text: &str) -> Option<(NaiveDateTime, String)> {
    supported_patterns().iter().find_map(|pattern| {
        pattern
            .match_exact(text)
            .map(|date| (date, pattern.as_str().to_string()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn text(s: &str) -> RawCellValue {
        RawCellValue::Text(s.to_string())
    }

    fn assert_parsed(result: &DateParseResult, expected: NaiveDateTime, label: &str) {
        assert!(result.is_successfully_parsed(), "{:?}", result);
        assert_eq!(result.parsed_date(), Some(expected));
        assert_eq!(result.date_format(), label);
        assert_eq!(result.error_message(), "");
    }

    fn assert_unparseable(result: &DateParseResult) {
        assert!(!result.is_successfully_parsed(), "{:?}", result);
        assert_eq!(result.parsed_date(), None);
        assert_eq!(result.error_message(), UNPARSEABLE_MESSAGE);
    }

    #[test]
    fn test_native_datetime_is_returned_unchanged() {
        let dt = NaiveDate::from_ymd_opt(2023, 12, 25)
            .unwrap()
            .and_hms_milli_opt(13, 45, 7, 123)
            .unwrap();
        let result = classify(&RawCellValue::DateTime(dt));

        assert_parsed(&result, dt, EXCEL_DATETIME_LABEL);
        assert_eq!(result.original_value(), "2023-12-25 13:45:07.123");
    }

    #[test]
    fn test_serial_dates() {
        let result = classify(&RawCellValue::Number(1.0));
        assert_parsed(&result, ymd(1899, 12, 31), EXCEL_SERIAL_LABEL);
        assert_eq!(result.original_value(), "1");

        let result = classify(&RawCellValue::Number(44562.0));
        assert_parsed(&result, ymd(2022, 1, 1), EXCEL_SERIAL_LABEL);

        let result = classify(&RawCellValue::Number(2_958_465.0));
        assert_parsed(&result, ymd(9999, 12, 31), EXCEL_SERIAL_LABEL);
    }

    #[test]
    fn test_serial_with_time_fraction() {
        let result = classify(&RawCellValue::Number(45285.75));
        let expected = NaiveDate::from_ymd_opt(2023, 12, 25)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        assert_parsed(&result, expected, EXCEL_SERIAL_LABEL);
        assert_eq!(result.original_value(), "45285.75");
    }

    #[test]
    fn test_numbers_outside_serial_range_fall_through() {
        for n in [0.0, -1.0, -45000.0, 0.5, 2_958_466.0, 1e9] {
            let result = classify(&RawCellValue::Number(n));
            assert_unparseable(&result);
            assert_eq!(result.original_value(), n.to_string());
        }
    }

    #[test]
    fn test_non_finite_numbers_are_unexpected_errors() {
        let result = classify(&RawCellValue::Number(f64::NAN));
        assert!(!result.is_successfully_parsed());
        assert_eq!(result.error_message(), "Value is not a finite number: NaN");
        assert_eq!(result.original_value(), "NaN");

        let result = classify(&RawCellValue::Number(f64::INFINITY));
        assert_eq!(result.error_message(), "Value is not a finite number: inf");
    }

    #[test]
    fn test_day_first_wins_for_ambiguous_slash_dates() {
        let result = classify(&text("25/12/2023"));
        assert_parsed(&result, ymd(2023, 12, 25), "dd/MM/yyyy");

        // 日・月のどちらとしても有効な場合は先頭のdd/MM/yyyyが優先される
        let result = classify(&text("05/03/2023"));
        assert_parsed(&result, ymd(2023, 3, 5), "dd/MM/yyyy");
    }

    #[test]
    fn test_month_first_when_day_first_is_invalid() {
        let result = classify(&text("12/25/2023"));
        assert_parsed(&result, ymd(2023, 12, 25), "MM/dd/yyyy");
    }

    #[test]
    fn test_each_supported_format() {
        let cases = [
            ("2023-12-25", "yyyy-MM-dd"),
            ("25-12-2023", "dd-MM-yyyy"),
            ("12-25-2023", "MM-dd-yyyy"),
            ("25.12.2023", "dd.MM.yyyy"),
            ("12.25.2023", "MM.dd.yyyy"),
            ("25/1/2023", "d/M/yyyy"),
            ("1/25/2023", "M/d/yyyy"),
            ("2023/12/25", "yyyy/MM/dd"),
            ("25 Dec 2023", "dd MMM yyyy"),
            ("Dec 25, 2023", "MMM dd, yyyy"),
        ];

        for (input, label) in cases {
            let result = classify(&text(input));
            assert!(result.is_successfully_parsed(), "{} should parse", input);
            assert_eq!(result.date_format(), label, "label for {}", input);
        }

        assert_eq!(
            classify(&text("25/1/2023")).parsed_date(),
            Some(ymd(2023, 1, 25))
        );
        assert_eq!(
            classify(&text("1/25/2023")).parsed_date(),
            Some(ymd(2023, 1, 25))
        );
    }

    #[test]
    fn test_general_parse_fallback() {
        let result = classify(&text("December 25, 2023"));
        assert_parsed(&result, ymd(2023, 12, 25), GENERAL_PARSE_LABEL);

        // 前後の空白は厳密解析では許容されず、汎用解析で処理される
        let result = classify(&text(" 2023-12-25 "));
        assert_parsed(&result, ymd(2023, 12, 25), GENERAL_PARSE_LABEL);
        assert_eq!(result.original_value(), " 2023-12-25 ");
    }

    #[test]
    fn test_unparseable_text() {
        assert_unparseable(&classify(&text("not a date")));
        assert_unparseable(&classify(&text("2023")));
        assert_unparseable(&classify(&text("31/02/2023")));
    }

    #[test]
    fn test_blank_text_fails_without_trial() {
        for blank in ["", " ", "\t\n"] {
            let result = classify(&text(blank));
            assert_unparseable(&result);
            assert_eq!(result.date_format(), "");
        }
    }

    #[test]
    fn test_other_values_fail() {
        let result = classify(&RawCellValue::Other("true".to_string()));
        assert_unparseable(&result);
        assert_eq!(result.original_value(), "true");

        // Otherが日付らしい文字列を持っていても解析しない
        assert_unparseable(&classify(&RawCellValue::Other("2023-12-25".to_string())));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let inputs = [
            text("05/03/2023"),
            text("garbage"),
            RawCellValue::Number(45000.5),
            RawCellValue::Number(-1.0),
        ];
        for input in &inputs {
            assert_eq!(classify(input), classify(input));
        }
    }

    #[allow(unused_doc_comments)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        /// 成功フラグ・日付・エラーメッセージの整合性
        proptest! {
            #[test]
            fn test_result_invariant_for_any_text(s in ".{0,24}") {
                let result = classify(&RawCellValue::Text(s.clone()));
                prop_assert_eq!(result.is_successfully_parsed(), result.parsed_date().is_some());
                prop_assert_eq!(result.is_successfully_parsed(), result.error_message().is_empty());
                prop_assert_eq!(result.original_value(), s.as_str());
            }

            #[test]
            fn test_serial_range_is_always_serial(n in 1.0f64..=2_958_465.0) {
                let result = classify(&RawCellValue::Number(n));
                prop_assert!(result.is_successfully_parsed());
                prop_assert_eq!(result.date_format(), EXCEL_SERIAL_LABEL);
            }

            #[test]
            fn test_non_positive_numbers_are_never_serial(n in -1e7f64..=0.0) {
                let result = classify(&RawCellValue::Number(n));
                prop_assert_ne!(result.date_format(), EXCEL_SERIAL_LABEL);
            }

            #[test]
            fn test_classify_is_idempotent(y in 1i32..=9999, m in 1u32..=12, d in 1u32..=28) {
                let input = RawCellValue::Text(format!("{:02}/{:02}/{:04}", d, m, y));
                let first = classify(&input);
                prop_assert_eq!(first.clone(), classify(&input));
                prop_assert_eq!(first.date_format(), "dd/MM/yyyy");
            }
        }
    }
}
