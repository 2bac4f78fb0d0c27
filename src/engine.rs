//! 分類・コピーの実行
//!
//! - 手動モード: 指定ラベル1件でフィルタし、出力シートへコピー
//! - 自動モード: 兄弟シート名をラベルとして一括分類し、最後に異常行を強調表示
//!
//! どちらも元シートのFiltered列へ割り当て済みラベルを合流させてから、
//! 出力シートと元シートを1回のsaveで書き戻す。

use crate::classifier;
use crate::error::{ExcelFilterError, Result};
use crate::highlight;
use crate::ledger;
use crate::workbook::{Container, Table};
use std::path::PathBuf;

/// 1回の分類操作への入力一式
#[derive(Debug, Clone)]
pub struct FilterParams {
    /// 対象のxlsxファイル
    pub file: PathBuf,
    /// 入力シート名
    pub sheet: String,
    /// フィルタ対象の列名
    pub column: String,
}

/// 自動モードの実行結果
#[derive(Debug)]
pub struct AutoSummary {
    /// ラベルごとのコピー行数（マッチ0件のラベルは含まない）
    pub counts: Vec<(String, usize)>,
    /// 強調表示された異常行数
    pub highlighted: usize,
}

/// 手動モード: ラベル1件でフィルタしてコピーする
///
/// 戻り値はコピーした行数。マッチ0件なら何も書き込まずに0を返す。
/// 同じ呼び出しを繰り返すと出力シートは同じ内容で上書きされ、
/// Filtered列は変化しない。
pub fn filter_and_copy(params: &FilterParams, label: &str, output_sheet: &str) -> Result<usize> {
    let container = Container::open(&params.file)?;
    let mut source = container.load(&params.sheet)?;

    // 列がなければ変異なしで中断
    let matched = classifier::match_rows(&source, &params.sheet, &params.column, label)?;

    if matched.is_empty() {
        return Ok(0);
    }

    ledger::ensure_filtered_column(&mut source);
    for &row in &matched {
        ledger::merge_label(&mut source, row, label);
    }

    // コピー側にはFiltered列を含めない
    let output = source.subset(&matched, ledger::FILTERED_COLUMN);

    container.save(&[
        (output_sheet.to_string(), output),
        (params.sheet.clone(), source),
    ])?;

    Ok(matched.len())
}

/// 自動モード: 入力シート以外の全シート名をラベルとして分類する
///
/// 全ラベル分の注釈をメモリ上の元シートに蓄積してから1回だけ保存し、
/// その後に保存済みシートへ異常行の強調表示をかける。
pub fn auto_detect_and_copy(params: &FilterParams, highlight_color: u32) -> Result<AutoSummary> {
    let container = Container::open(&params.file)?;
    let sheet_names = container.sheet_names()?;
    let mut source = container.load(&params.sheet)?;

    // 列の存在は操作全体の前提条件
    if source.column_index(&params.column).is_none() {
        return Err(ExcelFilterError::ColumnNotFound(
            params.column.clone(),
            params.sheet.clone(),
        ));
    }

    let mut replacements: Vec<(String, Table)> = Vec::new();
    let mut counts = Vec::new();

    for label in sheet_names.iter().filter(|n| *n != &params.sheet) {
        let matched = classifier::match_rows(&source, &params.sheet, &params.column, label)?;

        // マッチ0件のラベルは出力シートを作らない（既存シートも触らない）
        if matched.is_empty() {
            continue;
        }

        ledger::ensure_filtered_column(&mut source);
        for &row in &matched {
            ledger::merge_label(&mut source, row, label);
        }

        replacements.push((label.clone(), source.subset(&matched, ledger::FILTERED_COLUMN)));
        counts.push((label.clone(), matched.len()));
    }

    if !replacements.is_empty() {
        replacements.push((params.sheet.clone(), source));
        container.save(&replacements)?;
    }

    // 強調表示は保存済みデータに対する後段パス
    let highlighted =
        highlight::highlight_anomalies(&container, &params.sheet, highlight_color)?;

    Ok(AutoSummary {
        counts,
        highlighted,
    })
}
