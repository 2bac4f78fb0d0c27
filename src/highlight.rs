//! 異常行の強調表示
//!
//! 自動モード完了後に、未分類（ラベル0件）と複数分類（ラベル2件以上）の行を
//! 行全体の背景色で示す。行データ自体は変更しない。

use crate::error::Result;
use crate::ledger;
use crate::workbook::{Container, RowMarks, Table};
use std::collections::BTreeSet;

/// 既定の強調色（黄色）
pub const DEFAULT_HIGHLIGHT_COLOR: u32 = 0xFFFF00;

/// ラベル数が0または2以上の行番号を返す
pub fn anomaly_rows(table: &Table) -> Vec<usize> {
    (0..table.row_count())
        .filter(|&row| {
            let count = ledger::label_count(table, row);
            count == 0 || count >= 2
        })
        .collect()
}

/// 保存済みの元シートを読み直し、異常行に背景色を付けて書き戻す
///
/// 戻り値は強調表示した行数
pub fn highlight_anomalies(container: &Container, sheet: &str, color: u32) -> Result<usize> {
    let table = container.load(sheet)?;

    let rows: BTreeSet<usize> = anomaly_rows(&table).into_iter().collect();
    let count = rows.len();

    container.save_with_highlights(
        &[],
        &RowMarks {
            sheet: sheet.to_string(),
            rows,
            color,
        },
    )?;

    Ok(count)
}
