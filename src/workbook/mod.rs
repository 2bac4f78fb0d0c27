//! Excelコンテナの読み書き
//!
//! - calamineで既存ブックを読み込む
//! - rust_xlsxwriterでブック全体を書き戻す
//! - 置き換え対象以外のシートはセルデータをそのまま維持する

mod table;

pub use table::{Cell, Table};

use crate::error::{ExcelFilterError, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::{Color, Format, Workbook, Worksheet};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// 行強調表示の指定（セルデータとは別のスタイル層）
#[derive(Debug, Clone)]
pub struct RowMarks {
    /// 対象シート名
    pub sheet: String,
    /// ヘッダーを除く0始まりのデータ行番号
    pub rows: BTreeSet<usize>,
    /// 背景色（RRGGBB）
    pub color: u32,
}

/// 1つのxlsxファイルをコンテナとして扱う
pub struct Container {
    path: PathBuf,
}

impl Container {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ExcelFilterError::FileNotFound(path.display().to_string()));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// シート名の一覧（読み取りのみ）
    pub fn sheet_names(&self) -> Result<Vec<String>> {
        let workbook: Xlsx<_> = open_workbook(&self.path)?;
        Ok(workbook.sheet_names().to_vec())
    }

    /// 指定シートを読み込む
    pub fn load(&self, name: &str) -> Result<Table> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)?;
        if !workbook.sheet_names().iter().any(|n| n == name) {
            return Err(ExcelFilterError::SheetNotFound(name.to_string()));
        }
        let range = workbook.worksheet_range(name)?;
        Ok(table_from_range(&range))
    }

    /// 指定シートを置き換えてブック全体を書き戻す
    ///
    /// 置き換え対象以外のシートは既存データのまま、シート順も維持する。
    /// 新規シート名は末尾に追加される。
    pub fn save(&self, replacements: &[(String, Table)]) -> Result<()> {
        self.write_back(replacements, None)
    }

    /// saveと同じだが、1シートの指定行に背景色を付ける
    pub fn save_with_highlights(
        &self,
        replacements: &[(String, Table)],
        marks: &RowMarks,
    ) -> Result<()> {
        self.write_back(replacements, Some(marks))
    }

    fn load_all(&self) -> Result<Vec<(String, Table)>> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)?;
        let names = workbook.sheet_names().to_vec();

        let mut tables = Vec::with_capacity(names.len());
        for name in names {
            let range = workbook.worksheet_range(&name)?;
            tables.push((name, table_from_range(&range)));
        }
        Ok(tables)
    }

    fn write_back(
        &self,
        replacements: &[(String, Table)],
        marks: Option<&RowMarks>,
    ) -> Result<()> {
        let existing = self.load_all()?;

        // 既存のシート順を維持しつつ、置き換え対象だけ差し替える
        let mut sheets: Vec<(&str, &Table)> = Vec::new();
        for (name, original) in &existing {
            // 同名の指定が重複した場合は後の指定が勝つ
            match replacements.iter().rev().find(|(n, _)| n == name) {
                Some((_, replacement)) => sheets.push((name.as_str(), replacement)),
                None => sheets.push((name.as_str(), original)),
            }
        }
        for (name, table) in replacements {
            if !existing.iter().any(|(n, _)| n == name) {
                sheets.push((name.as_str(), table));
            }
        }

        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        for (name, table) in sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(name)?;

            let marked = marks.filter(|m| m.sheet == name);
            let fill_format =
                marked.map(|m| Format::new().set_background_color(Color::RGB(m.color)));

            for (col, column_name) in table.columns().iter().enumerate() {
                worksheet.write_string_with_format(0, col as u16, column_name, &header_format)?;
            }

            for (row_idx, row) in table.rows().iter().enumerate() {
                let excel_row = row_idx as u32 + 1;
                let fill = match (&fill_format, marked) {
                    (Some(format), Some(m)) if m.rows.contains(&row_idx) => Some(format),
                    _ => None,
                };
                for (col_idx, cell) in row.iter().enumerate() {
                    write_cell(worksheet, excel_row, col_idx as u16, cell, fill)?;
                }
            }
        }

        workbook.save(&self.path)?;
        Ok(())
    }
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    fill: Option<&Format>,
) -> Result<()> {
    match (cell, fill) {
        (Cell::Empty, None) => {}
        (Cell::Empty, Some(format)) => {
            worksheet.write_blank(row, col, format)?;
        }
        (Cell::Text(s), None) => {
            worksheet.write_string(row, col, s)?;
        }
        (Cell::Text(s), Some(format)) => {
            worksheet.write_string_with_format(row, col, s, format)?;
        }
        (Cell::Number(n), None) => {
            worksheet.write_number(row, col, *n)?;
        }
        (Cell::Number(n), Some(format)) => {
            worksheet.write_number_with_format(row, col, *n, format)?;
        }
        (Cell::Bool(b), None) => {
            worksheet.write_boolean(row, col, *b)?;
        }
        (Cell::Bool(b), Some(format)) => {
            worksheet.write_boolean_with_format(row, col, *b, format)?;
        }
    }
    Ok(())
}

fn table_from_range(range: &calamine::Range<Data>) -> Table {
    let mut rows = range.rows();

    let header = match rows.next() {
        Some(header) => header,
        None => return Table::new(Vec::new()),
    };

    let columns = header
        .iter()
        .enumerate()
        .map(|(i, cell)| header_name(cell, i))
        .collect();

    let mut table = Table::new(columns);
    for row in rows {
        table.push_row(row.iter().map(cell_from_data).collect());
    }
    table
}

/// ヘッダーセルを列名に変換（空セルには補完名を振る）
fn header_name(data: &Data, index: usize) -> String {
    match data {
        Data::Empty => format!("Unnamed: {}", index),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) => Cell::Text(s.clone()),
        Data::DurationIso(s) => Cell::Text(s.clone()),
        // エラーセルは欠損扱い
        Data::Error(_) => Cell::Empty,
    }
}
