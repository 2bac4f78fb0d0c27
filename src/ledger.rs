//! 注釈列（Filtered列）の管理
//!
//! 元シートの各行に割り当て済みラベルを「, 」区切りで記録する。
//! ラベルは重複なし・追加順を維持。

use crate::workbook::{Cell, Table};

/// 注釈列の予約名
pub const FILTERED_COLUMN: &str = "Filtered";

/// Filtered列がなければ全行空セルで追加する（あれば何もしない）
pub fn ensure_filtered_column(table: &mut Table) {
    if table.column_index(FILTERED_COLUMN).is_none() {
        table.add_column(FILTERED_COLUMN);
    }
}

/// 指定行の注釈セルへラベルを合流させる
///
/// 空セルならラベルをそのまま設定、既存リストに同じラベルがあれば変更しない。
/// 同じラベルで何度呼んでもセル内容は変わらない。
pub fn merge_label(table: &mut Table, row: usize, label: &str) {
    let col = match table.column_index(FILTERED_COLUMN) {
        Some(col) => col,
        None => return,
    };

    // テキスト以外のセルと空文字列は空扱いで上書きする
    let merged = match table.cell(row, col).as_text() {
        Some(existing) if !existing.is_empty() => {
            let mut labels: Vec<&str> = existing.split(", ").collect();
            if !labels.contains(&label) {
                labels.push(label);
            }
            labels.join(", ")
        }
        _ => label.to_string(),
    };

    table.set_cell(row, col, Cell::Text(merged));
}

/// 指定行に記録されたラベル一覧（空なら空Vec）
pub fn split_labels(table: &Table, row: usize) -> Vec<String> {
    let col = match table.column_index(FILTERED_COLUMN) {
        Some(col) => col,
        None => return Vec::new(),
    };

    match table.cell(row, col).as_text() {
        Some(text) if !text.is_empty() => text.split(", ").map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

/// 指定行に記録されたラベル数
pub fn label_count(table: &Table, row: usize) -> usize {
    split_labels(table, row).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with_filtered() -> Table {
        let mut table = Table::new(vec!["Notes".into()]);
        table.push_row(vec![Cell::Text("apple pie".into())]);
        table.push_row(vec![Cell::Text("banana".into())]);
        ensure_filtered_column(&mut table);
        table
    }

    #[test]
    fn test_ensure_filtered_column_idempotent() {
        let mut table = table_with_filtered();
        ensure_filtered_column(&mut table);

        assert_eq!(table.columns(), &["Notes", FILTERED_COLUMN]);
        assert_eq!(*table.cell(0, 1), Cell::Empty);
    }

    #[test]
    fn test_merge_label_into_empty_cell() {
        let mut table = table_with_filtered();
        merge_label(&mut table, 0, "Apples");

        assert_eq!(table.cell(0, 1).as_text(), Some("Apples"));
        assert_eq!(*table.cell(1, 1), Cell::Empty);
    }

    #[test]
    fn test_merge_label_appends_in_order() {
        let mut table = table_with_filtered();
        merge_label(&mut table, 0, "Apples");
        merge_label(&mut table, 0, "Desserts");

        assert_eq!(table.cell(0, 1).as_text(), Some("Apples, Desserts"));
    }

    #[test]
    fn test_merge_label_repeat_is_byte_identical() {
        let mut table = table_with_filtered();
        merge_label(&mut table, 0, "Apples");
        merge_label(&mut table, 0, "Desserts");
        let before = table.cell(0, 1).clone();

        merge_label(&mut table, 0, "Apples");
        merge_label(&mut table, 0, "Desserts");

        assert_eq!(*table.cell(0, 1), before);
    }

    #[test]
    fn test_label_count() {
        let mut table = table_with_filtered();
        assert_eq!(label_count(&table, 0), 0);

        merge_label(&mut table, 0, "Apples");
        assert_eq!(label_count(&table, 0), 1);

        merge_label(&mut table, 0, "Desserts");
        assert_eq!(label_count(&table, 0), 2);
        assert_eq!(split_labels(&table, 0), vec!["Apples", "Desserts"]);
    }

    #[test]
    fn test_label_count_without_column() {
        let table = Table::new(vec!["Notes".into()]);
        assert_eq!(label_count(&table, 0), 0);
    }
}
