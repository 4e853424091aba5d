//! xlsxdate - Pure-Rust date classifier for spreadsheet cell values
//!
//! スプレッドシートのセル値（ネイティブ日時、シリアル日付、さまざまな表記の文字列）を
//! 日付として分類・正規化し、どのルールで解釈できたか、または失敗した理由を記録します。
//!
//! # Quick Start
//!
//! ```rust
//! use xlsxdate::{classify, RawCellValue};
//!
//! let result = classify(&RawCellValue::Number(44562.0));
//! assert!(result.is_successfully_parsed());
//! assert_eq!(result.date_format(), "Excel Serial Date");
//! assert_eq!(result.parsed_date().unwrap().to_string(), "2022-01-01 00:00:00");
//!
//! let result = classify(&RawCellValue::Text("Dec 25, 2023".to_string()));
//! assert_eq!(result.date_format(), "MMM dd, yyyy");
//! ```
//!
//! # Batch Classification
//!
//! ```rust
//! use xlsxdate::{BatchClassifier, ClassifierBuilder, RawCellValue};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let classifier = ClassifierBuilder::new().with_skip_blank(true).build()?;
//!
//!     let cells = vec![
//!         RawCellValue::Text("25/12/2023".to_string()),
//!         RawCellValue::Number(45285.5),
//!         RawCellValue::Text("not a date".to_string()),
//!     ];
//!     let results = classifier.classify_all(&cells);
//!
//!     let summary = BatchClassifier::summarize(&results);
//!     assert_eq!(summary.parsed, 2);
//!
//!     println!("{}", BatchClassifier::to_json(&results)?);
//!     Ok(())
//! }
//! ```
//!
//! # Cells decoded by calamine
//!
//! ```rust,no_run
//! use calamine::{open_workbook, Reader, Xlsx};
//! use xlsxdate::ClassifierBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut workbook: Xlsx<_> = open_workbook("dates.xlsx")?;
//!     let range = workbook.worksheet_range_at(0).ok_or("no sheets")??;
//!
//!     let classifier = ClassifierBuilder::new().build()?;
//!     for result in classifier.classify_range(&range) {
//!         println!("{} -> {:?}", result.original_value(), result.parsed_date());
//!     }
//!     Ok(())
//! }
//! ```

mod builder;
mod classifier;
mod error;
mod extract;
mod fallback;
mod format;
mod serial;
mod types;

// 公開API
pub use builder::{BatchClassifier, ClassifierBuilder, ParseSummary};
pub use classifier::{
    classify, EXCEL_DATETIME_LABEL, EXCEL_SERIAL_LABEL, GENERAL_PARSE_LABEL, UNPARSEABLE_MESSAGE,
};
pub use error::DateParseError;
pub use extract::cells_in_range;
pub use format::SUPPORTED_FORMATS;
pub use serial::{is_serial_date, serial_to_datetime, MAX_SERIAL_DATE, MIN_SERIAL_DATE};
pub use types::{DateParseResult, RawCellValue};
