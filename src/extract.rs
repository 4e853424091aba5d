//! Extract Module
//!
//! calamineでデコード済みのセルデータを`RawCellValue`に変換するモジュール。
//! ファイルのデコード自体は呼び出し側の責務です。

use calamine::{Data, ExcelDateTime, ExcelDateTimeType, Range};
use chrono::NaiveDateTime;

use crate::serial::serial_to_datetime;
use crate::types::RawCellValue;

/// ISO形式の日時文字列を解析する際に試行するレイアウト
const ISO_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// 1904年エポック（1904-01-01）と1900年エポック（1899-12-30）の差（日数）
const EPOCH_1904_OFFSET_DAYS: f64 = 1462.0;

impl From<&Data> for RawCellValue {
    fn from(cell: &Data) -> Self {
        match cell {
            Data::Int(i) => RawCellValue::Number(*i as f64),
            Data::Float(f) => RawCellValue::Number(*f),
            Data::String(s) => RawCellValue::Text(s.clone()),
            // 経過時間書式（[h]:mm等）は日付ではない
            Data::DateTime(dt) if dt.is_duration() => RawCellValue::Other(dt.to_string()),
            Data::DateTime(dt) => excel_datetime_to_value(dt),
            Data::DateTimeIso(s) => match parse_iso_datetime(s) {
                Some(value) => RawCellValue::DateTime(value),
                None => RawCellValue::Text(s.clone()),
            },
            Data::Bool(b) => RawCellValue::Other(if *b { "TRUE" } else { "FALSE" }.to_string()),
            Data::Error(e) => RawCellValue::Other(e.to_string()),
            Data::DurationIso(s) => RawCellValue::Other(s.clone()),
            Data::Empty => RawCellValue::Other(String::new()),
            #[allow(unreachable_patterns)]
            _ => RawCellValue::Other(String::new()),
        }
    }
}

impl From<Data> for RawCellValue {
    fn from(cell: Data) -> Self {
        RawCellValue::from(&cell)
    }
}

/// 日付書式のセルをシリアル値と同じ規約で日時に変換
///
/// # エポックシステム
///
/// - 1900年システム: シリアル値をそのまま変換
/// - 1904年システム: 1462日を加算して1900年システムのシリアル値に揃える
///   （シリアル値0 = 1904-01-01）
///
/// 変換できない値は`Number`として返し、分類側の判定に任せます。
fn excel_datetime_to_value(dt: &ExcelDateTime) -> RawCellValue {
    let serial = if is_1904_epoch(dt) {
        dt.as_f64() + EPOCH_1904_OFFSET_DAYS
    } else {
        dt.as_f64()
    };

    match serial_to_datetime(serial) {
        Ok(value) => RawCellValue::DateTime(value),
        Err(_) => RawCellValue::Number(dt.as_f64()),
    }
}

// calamineはエポックのフラグを公開していないため、同じ値の1904年システムの値と比較する
fn is_1904_epoch(dt: &ExcelDateTime) -> bool {
    *dt == ExcelDateTime::new(dt.as_f64(), ExcelDateTimeType::DateTime, true)
}

/// ISO形式の日時（または日付のみ）文字列を解析
fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    ISO_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(s, layout).ok())
        .or_else(|| {
            chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// セル範囲から空でないセルを行優先で取り出す
///
/// # 引数
///
/// * `range` - calamineのセル範囲（使用範囲）
///
/// # 戻り値
///
/// 空でないセルの`RawCellValue`（行→列の順）
pub fn cells_in_range(range: &Range<Data>) -> Vec<RawCellValue> {
    range
        .rows()
        .flat_map(|row| row.iter())
        .filter(|cell| !matches!(cell, Data::Empty))
        .map(RawCellValue::from)
        .collect()
}
