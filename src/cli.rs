use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "excel-filter")]
#[command(about = "Excelシート分類・フィルタコピーツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 指定ラベルでフィルタして出力シートへコピー（手動モード）
    Filter {
        /// 対象のExcelファイル(.xlsx)
        #[arg(required = true)]
        file: PathBuf,

        /// 入力シート名（省略時は対話選択）
        #[arg(short, long)]
        sheet: Option<String>,

        /// フィルタ対象の列名（省略時は対話入力）
        #[arg(short, long)]
        column: Option<String>,

        /// 検索するラベル（部分一致・大文字小文字無視）
        #[arg(short, long)]
        label: Option<String>,

        /// 出力シート名
        #[arg(short, long)]
        output: Option<String>,
    },

    /// 兄弟シート名をラベルとして一括分類（自動検出モード）
    Auto {
        /// 対象のExcelファイル(.xlsx)
        #[arg(required = true)]
        file: PathBuf,

        /// 入力シート名（省略時は対話選択）
        #[arg(short, long)]
        sheet: Option<String>,

        /// フィルタ対象の列名（省略時は対話入力）
        #[arg(short, long)]
        column: Option<String>,
    },

    /// シート名の一覧を表示
    Sheets {
        /// 対象のExcelファイル(.xlsx)
        #[arg(required = true)]
        file: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 異常行の強調色を設定（RRGGBB）
        #[arg(long)]
        set_highlight_color: Option<String>,

        /// フィルタ対象列の既定値を設定
        #[arg(long)]
        set_default_column: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
