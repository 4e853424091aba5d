//! Types Module
//!
//! 分類器の入力（`RawCellValue`）と出力（`DateParseResult`）を定義するモジュール。

use chrono::NaiveDateTime;
use serde::Serialize;

/// 分類対象となる生のセル値
///
/// セル抽出側（スプレッドシートのデコーダ）が型情報に従ってタグ付けした値です。
/// タイムゾーンは扱いません。
#[derive(Debug, Clone, PartialEq)]
pub enum RawCellValue {
    /// ネイティブの日時値
    DateTime(NaiveDateTime),

    /// 数値（シリアル日付の可能性がある）
    Number(f64),

    /// 文字列
    Text(String),

    /// その他の値（論理値、エラー値、空セルなど）
    ///
    /// 呼び出し側による文字列表現を保持します。
    Other(String),
}

impl RawCellValue {
    /// 値を文字列として取得（`original_value`に使用される）
    ///
    /// - `DateTime`: `2023-12-25 10:30:00`
    /// - `Number`: `f64`の`Display`（`45000`、`1.5`）
    /// - `Text` / `Other`: そのまま
    pub fn as_raw_string(&self) -> String {
        match self {
            RawCellValue::DateTime(dt) => dt.to_string(),
            RawCellValue::Number(n) => n.to_string(),
            RawCellValue::Text(s) => s.clone(),
            RawCellValue::Other(s) => s.clone(),
        }
    }

    /// 空白のみ（または空）の値かどうかを判定
    pub fn is_blank(&self) -> bool {
        match self {
            RawCellValue::Text(s) | RawCellValue::Other(s) => s.trim().is_empty(),
            RawCellValue::DateTime(_) | RawCellValue::Number(_) => false,
        }
    }
}

impl From<NaiveDateTime> for RawCellValue {
    fn from(value: NaiveDateTime) -> Self {
        RawCellValue::DateTime(value)
    }
}

impl From<f64> for RawCellValue {
    fn from(value: f64) -> Self {
        RawCellValue::Number(value)
    }
}

impl From<&str> for RawCellValue {
    fn from(value: &str) -> Self {
        RawCellValue::Text(value.to_string())
    }
}

impl From<String> for RawCellValue {
    fn from(value: String) -> Self {
        RawCellValue::Text(value)
    }
}

/// 1つのセル値に対する分類結果
///
/// 成功時は`parsed_date`が`Some`で`error_message`が空、失敗時はその逆です。
/// 2つのコンストラクタ以外では生成できないため、この不変条件は常に成り立ちます。
///
/// JSONではcamelCaseのキーで出力されます。
///
/// ```json
/// {
///   "originalValue": "25/12/2023",
///   "parsedDate": "2023-12-25T00:00:00",
///   "dateFormat": "dd/MM/yyyy",
///   "isSuccessfullyParsed": true,
///   "errorMessage": ""
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateParseResult {
    original_value: String,
    parsed_date: Option<NaiveDateTime>,
    date_format: String,
    is_successfully_parsed: bool,
    error_message: String,
}

impl DateParseResult {
    /// 成功結果を生成
    ///
    /// # 引数
    ///
    /// * `original_value` - 入力値の文字列表現
    /// * `parsed_date` - 解析された日時
    /// * `date_format` - 一致したルールのラベル
    pub fn success(
        original_value: impl Into<String>,
        parsed_date: NaiveDateTime,
        date_format: impl Into<String>,
    ) -> Self {
        Self {
            original_value: original_value.into(),
            parsed_date: Some(parsed_date),
            date_format: date_format.into(),
            is_successfully_parsed: true,
            error_message: String::new(),
        }
    }

    /// 失敗結果を生成
    ///
    /// `date_format`は空文字列になります。
    pub fn failure(original_value: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            original_value: original_value.into(),
            parsed_date: None,
            date_format: String::new(),
            is_successfully_parsed: false,
            error_message: error_message.into(),
        }
    }

    pub fn original_value(&self) -> &str {
        &self.original_value
    }

    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        self.parsed_date
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn is_successfully_parsed(&self) -> bool {
        self.is_successfully_parsed
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}
