//! Builder Module
//!
//! Fluent Builder APIを提供し、`BatchClassifier`インスタンスを段階的に構築する。
//!
//! 日付パターン表とシリアル日付の範囲は固定で、ここでは設定できません。
//! 設定できるのはバッチ処理の実行方法のみです。

use std::collections::BTreeMap;

use calamine::{Data, Range};
use log::debug;
use rayon::prelude::*;
use serde::Serialize;

use crate::classifier::classify;
use crate::error::DateParseError;
use crate::extract::cells_in_range;
use crate::types::{DateParseResult, RawCellValue};

/// バッチ処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct BatchConfig {
    /// rayonによる並列処理を行うか
    pub parallel: bool,

    /// 空白のみのセルを分類前に除外するか
    pub skip_blank: bool,

    /// 並列処理に切り替える最小件数
    pub min_parallel_len: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            skip_blank: false,
            min_parallel_len: 1024,
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// # 使用例
///
/// ```rust
/// use xlsxdate::{ClassifierBuilder, RawCellValue};
///
/// # fn main() -> Result<(), xlsxdate::DateParseError> {
/// let classifier = ClassifierBuilder::new()
///     .with_parallel(false)
///     .with_skip_blank(true)
///     .build()?;
///
/// let results = classifier.classify_all(&[
///     RawCellValue::Text("2023-12-25".to_string()),
///     RawCellValue::Text("   ".to_string()),
/// ]);
/// assert_eq!(results.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ClassifierBuilder {
    /// 内部設定（構築中）
    config: BatchConfig,
}

impl ClassifierBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - 並列処理: 有効
    /// - 空白セルの除外: 無効
    /// - 並列処理の最小件数: 1024
    pub fn new() -> Self {
        Self {
            config: BatchConfig::default(),
        }
    }

    /// rayonによる並列処理を行うかを指定する
    ///
    /// 並列・逐次のどちらでも結果の順序は入力と同じです。
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// 空白のみのセル（空文字列、空白文字のみのテキスト、空の`Other`）を
    /// 分類前に除外するかを指定する
    pub fn with_skip_blank(mut self, skip: bool) -> Self {
        self.config.skip_blank = skip;
        self
    }

    /// 並列処理に切り替える最小件数を指定する
    ///
    /// 件数がこれ未満の場合は逐次処理します。0は`build()`時にエラーになります。
    pub fn with_min_parallel_len(mut self, len: usize) -> Self {
        self.config.min_parallel_len = len;
        self
    }

    /// 設定を検証し、`BatchClassifier`インスタンスを生成する
    ///
    /// # 戻り値
    ///
    /// * `Ok(BatchClassifier)` - 設定が有効な場合
    /// * `Err(DateParseError::Config)` - `min_parallel_len`が0の場合
    pub fn build(self) -> Result<BatchClassifier, DateParseError> {
        if self.config.min_parallel_len == 0 {
            return Err(DateParseError::Config(
                "min_parallel_len must be greater than 0".to_string(),
            ));
        }

        Ok(BatchClassifier {
            config: self.config,
        })
    }
}

/// 複数のセル値をまとめて分類する
///
/// 各セルは独立して分類され、1つのセルの失敗が他のセルに影響することはありません。
#[derive(Debug, Clone)]
pub struct BatchClassifier {
    config: BatchConfig,
}

impl BatchClassifier {
    /// セル値を順に分類する
    ///
    /// # 戻り値
    ///
    /// 入力と同じ順序の分類結果（`skip_blank`が有効な場合は空白セルを除く）
    pub fn classify_all(&self, values: &[RawCellValue]) -> Vec<DateParseResult> {
        let targets: Vec<&RawCellValue> = values
            .iter()
            .filter(|value| !(self.config.skip_blank && value.is_blank()))
            .collect();

        let results: Vec<DateParseResult> =
            if self.config.parallel && targets.len() >= self.config.min_parallel_len {
                targets.par_iter().map(|value| classify(value)).collect()
            } else {
                targets.iter().map(|value| classify(value)).collect()
            };

        let parsed = results.iter().filter(|r| r.is_successfully_parsed()).count();
        debug!(
            "classified {} cells ({} skipped): {} parsed, {} failed",
            results.len(),
            values.len() - targets.len(),
            parsed,
            results.len() - parsed
        );

        results
    }

    /// calamineのセル範囲の空でないセルを行優先で分類する
    pub fn classify_range(&self, range: &Range<Data>) -> Vec<DateParseResult> {
        self.classify_all(&cells_in_range(range))
    }

    /// 分類結果を集計する
    pub fn summarize(results: &[DateParseResult]) -> ParseSummary {
        let mut summary = ParseSummary::default();
        for result in results {
            summary.total += 1;
            if result.is_successfully_parsed() {
                summary.parsed += 1;
                *summary
                    .by_format
                    .entry(result.date_format().to_string())
                    .or_insert(0) += 1;
            } else {
                summary.failed += 1;
            }
        }
        summary
    }

    /// 分類結果をJSON配列として出力する
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - camelCaseキーのJSON配列
    /// * `Err(DateParseError::Json)` - シリアライズに失敗した場合
    pub fn to_json(results: &[DateParseResult]) -> Result<String, DateParseError> {
        Ok(serde_json::to_string_pretty(results)?)
    }
}

/// 分類結果の集計
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseSummary {
    /// 分類したセル数
    pub total: usize,

    /// 日付として解析できたセル数
    pub parsed: usize,

    /// 解析に失敗したセル数
    pub failed: usize,

    /// 一致したルールのラベルごとの件数
    pub by_format: BTreeMap<String, usize>,
}
