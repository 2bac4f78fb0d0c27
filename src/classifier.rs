//! 行分類
//!
//! 指定列のテキストにラベルが部分一致（大文字小文字無視）する行を抽出する。
//! 過去の注釈状態には依存せず、常に現在の列内容だけで判定する。

use crate::error::{ExcelFilterError, Result};
use crate::workbook::Table;

/// ラベルにマッチする行番号を昇順で返す
///
/// 空セル・テキスト以外のセルはマッチしない（エラーではない）。
/// 列が存在しない場合はColumnNotFound。
pub fn match_rows(table: &Table, sheet: &str, column: &str, label: &str) -> Result<Vec<usize>> {
    let col = table.column_index(column).ok_or_else(|| {
        ExcelFilterError::ColumnNotFound(column.to_string(), sheet.to_string())
    })?;

    let needle = label.to_lowercase();

    let matched = table
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            row[col]
                .as_text()
                .map(|text| text.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .map(|(i, _)| i)
        .collect();

    Ok(matched)
}
