//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。
//!
//! `classify`はこのエラー型を外部に返しません。分類中に発生したエラーは
//! `DateParseResult`の`error_message`に変換されます。

use thiserror::Error;

/// xlsxdateクレート全体で使用するエラー型
///
/// # エラーの種類
///
/// - `NonFiniteNumber`: NaNや無限大など、文字列化できない数値
/// - `SerialOverflow`: シリアル値から日時への変換でオーバーフローが発生
/// - `InvalidPattern`: 日付パターン文字列に未知の指定子が含まれる
/// - `Config`: `ClassifierBuilder`の設定検証に失敗
/// - `Json`: 結果のJSONシリアライズに失敗
///
/// # 使用例
///
/// ```rust
/// use xlsxdate::{ClassifierBuilder, DateParseError};
///
/// let result = ClassifierBuilder::new().with_min_parallel_len(0).build();
/// assert!(matches!(result, Err(DateParseError::Config(_))));
/// ```
#[derive(Error, Debug)]
pub enum DateParseError {
    /// 有限でない数値（NaN、±無限大）
    #[error("Value is not a finite number: {0}")]
    NonFiniteNumber(f64),

    /// シリアル値の変換結果が表現可能な日時の範囲を超えた
    #[error("Serial date {0} is outside the representable date range")]
    SerialOverflow(f64),

    /// 日付パターンの構文エラー
    ///
    /// パターン文字列に`d`、`M`、`y`以外の英字指定子、または
    /// サポートされない桁数（例: `ddd`、`yy`）が含まれる場合に発生します。
    #[error("Invalid date pattern '{pattern}': {message}")]
    InvalidPattern {
        /// 解析に失敗したパターン文字列
        pattern: String,
        /// エラーの詳細メッセージ
        message: String,
    },

    /// 設定の検証に失敗したエラー
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSONシリアライズエラー
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
