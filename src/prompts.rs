//! 対話式入力モジュール
//!
//! CLI引数で省略された値をdialoguerで補完する

use crate::error::{ExcelFilterError, Result};
use dialoguer::{Input, Select};

/// シート名を一覧から選択
pub fn select_sheet(names: &[String], prompt: &str) -> Result<String> {
    if names.is_empty() {
        return Err(ExcelFilterError::Prompt(
            "選択できるシートがありません".into(),
        ));
    }

    let index = Select::new()
        .with_prompt(prompt)
        .items(names)
        .default(0)
        .interact()
        .map_err(|e| ExcelFilterError::Prompt(e.to_string()))?;

    Ok(names[index].clone())
}

/// フィルタ対象の列名を入力（設定の既定値があれば初期値にする）
pub fn input_column(default: Option<&str>) -> Result<String> {
    let mut input = Input::new().with_prompt("フィルタ対象の列名");
    if let Some(default) = default {
        input = input.default(default.to_string());
    }

    let column: String = input
        .interact_text()
        .map_err(|e| ExcelFilterError::Prompt(e.to_string()))?;
    Ok(column.trim().to_string())
}

/// 検索するラベルを入力
pub fn input_label() -> Result<String> {
    let label: String = Input::new()
        .with_prompt("検索するラベル")
        .interact_text()
        .map_err(|e| ExcelFilterError::Prompt(e.to_string()))?;
    Ok(label.trim().to_string())
}

/// 出力シート名を入力
pub fn input_output_sheet() -> Result<String> {
    let name: String = Input::new()
        .with_prompt("出力シート名")
        .interact_text()
        .map_err(|e| ExcelFilterError::Prompt(e.to_string()))?;
    Ok(name.trim().to_string())
}
