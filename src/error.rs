use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExcelFilterError {
    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("シート'{0}'がExcelファイルに存在しません")]
    SheetNotFound(String),

    #[error("列'{0}'がシート'{1}'に存在しません")]
    ColumnNotFound(String, String),

    #[error("Excel読み込みエラー: {0}")]
    Read(#[from] calamine::XlsxError),

    #[error("Excel書き込みエラー: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("入力エラー: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, ExcelFilterError>;
