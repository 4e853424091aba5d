//! Serial Date Module
//!
//! スプレッドシートのシリアル日付値を日時に変換するモジュール。
//!
//! # エポックシステム
//!
//! OLE Automation日付と同じ規約を使用します。
//!
//! - 起点: 1899年12月30日 00:00
//! - 整数部: 起点からの日数
//! - 小数部: 1日の中の時刻（ミリ秒単位に四捨五入）
//!
//! この規約では、シリアル値61以降はExcelの表示と一致します。
//! Excelは1900年をうるう年として扱う（1900年2月29日が存在する）ため、
//! 60以下のシリアル値はExcelの表示より1日前の日付になります。
//!
//! - シリアル値1 = 1899-12-31
//! - シリアル値60 = 1900-02-28
//! - シリアル値61 = 1900-03-01
//! - シリアル値44562 = 2022-01-01
//! - シリアル値2958465 = 9999-12-31

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::error::DateParseError;

/// シリアル日付として扱う最小値（この値を含む）
pub const MIN_SERIAL_DATE: f64 = 1.0;

/// シリアル日付として扱う最大値（この値を含む、9999-12-31）
pub const MAX_SERIAL_DATE: f64 = 2_958_465.0;

const MILLIS_PER_DAY: i64 = 86_400_000;

// 変換を試みる日数の上限。これを超える値はミリ秒計算がi64に収まらない
const MAX_CONVERTIBLE_DAYS: f64 = 10_000_000.0;

/// 数値がシリアル日付の範囲`[1, 2958465]`にあるかを判定
///
/// NaNは常に`false`です。
pub fn is_serial_date(value: f64) -> bool {
    (MIN_SERIAL_DATE..=MAX_SERIAL_DATE).contains(&value)
}

/// シリアル日付値を日時に変換
///
/// # 引数
///
/// * `serial_value` - シリアル日付値
///
/// # 戻り値
///
/// * `Ok(NaiveDateTime)` - 変換された日時
/// * `Err(DateParseError::NonFiniteNumber)` - NaNまたは無限大の場合
/// * `Err(DateParseError::SerialOverflow)` - 結果が日時の範囲外の場合
///
/// # 使用例
///
/// ```rust
/// use chrono::NaiveDate;
/// use xlsxdate::serial_to_datetime;
///
/// let dt = serial_to_datetime(44562.5).unwrap();
/// assert_eq!(dt, NaiveDate::from_ymd_opt(2022, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap());
/// ```
pub fn serial_to_datetime(serial_value: f64) -> Result<NaiveDateTime, DateParseError> {
    if !serial_value.is_finite() {
        return Err(DateParseError::NonFiniteNumber(serial_value));
    }
    if serial_value.abs() > MAX_CONVERTIBLE_DAYS {
        return Err(DateParseError::SerialOverflow(serial_value));
    }

    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or(DateParseError::SerialOverflow(serial_value))?;

    // ミリ秒単位に四捨五入（0から遠い方向）
    let rounding = if serial_value >= 0.0 { 0.5 } else { -0.5 };
    let mut millis = (serial_value * MILLIS_PER_DAY as f64 + rounding) as i64;

    // 負の値では、小数部は起点日より前の日付からの「正の」時刻を表す
    // 例: -1.25 = 1899-12-29 06:00
    if millis < 0 {
        millis -= (millis % MILLIS_PER_DAY) * 2;
    }

    epoch
        .checked_add_signed(Duration::milliseconds(millis))
        .ok_or(DateParseError::SerialOverflow(serial_value))
}
