use clap::Parser;
use excel_filter_rust::{cli, config, engine, error, prompts, workbook};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Filter { file, sheet, column, label, output } => {
            println!("📊 excel-filter - 手動フィルタ\n");

            let container = workbook::Container::open(&file)?;
            let sheet_names = container.sheet_names()?;
            if cli.verbose {
                println!("シート一覧: {}", sheet_names.join(", "));
            }

            let sheet = match sheet {
                Some(sheet) => sheet,
                None => prompts::select_sheet(&sheet_names, "入力シートを選択")?,
            };
            let column = match column {
                Some(column) => column,
                None => prompts::input_column(config.default_column.as_deref())?,
            };
            let label = match label {
                Some(label) => label,
                None => prompts::input_label()?,
            };
            let output = match output {
                Some(output) => output,
                None => prompts::input_output_sheet()?,
            };

            let params = engine::FilterParams { file, sheet, column };

            println!("🔎 '{}'を含む行を分類中...", label);
            let copied = engine::filter_and_copy(&params, &label, &output)?;

            if copied == 0 {
                println!("ℹ 列'{}'に'{}'を含む行はありませんでした", params.column, label);
            } else {
                println!("✔ {}行をシート'{}'へコピー", copied, output);
                println!("\n✅ 完了: {}", params.file.display());
            }
        }

        Commands::Auto { file, sheet, column } => {
            println!("🔍 excel-filter - 自動検出\n");

            let container = workbook::Container::open(&file)?;
            let sheet_names = container.sheet_names()?;

            let sheet = match sheet {
                Some(sheet) => sheet,
                None => prompts::select_sheet(&sheet_names, "入力シートを選択")?,
            };
            let column = match column {
                Some(column) => column,
                None => prompts::input_column(config.default_column.as_deref())?,
            };

            let candidates: Vec<&str> = sheet_names
                .iter()
                .filter(|n| **n != sheet)
                .map(|n| n.as_str())
                .collect();
            if cli.verbose {
                println!("候補ラベル: {}", candidates.join(", "));
            }
            println!("🔎 {}個のシート名で分類中...", candidates.len());

            let params = engine::FilterParams { file, sheet, column };
            let summary =
                engine::auto_detect_and_copy(&params, config.highlight_color_value()?)?;

            if summary.counts.is_empty() {
                println!("ℹ どのシート名にもマッチする行はありませんでした");
            } else {
                for (label, count) in &summary.counts {
                    println!("✔ {} → {}行", label, count);
                }
            }
            println!("✔ 異常行（未分類・複数分類）: {}行を強調表示", summary.highlighted);

            println!("\n✅ 完了: {}", params.file.display());
        }

        Commands::Sheets { file } => {
            let container = workbook::Container::open(&file)?;
            let sheet_names = container.sheet_names()?;

            println!("📋 シート一覧: {}\n", file.display());
            for (i, name) in sheet_names.iter().enumerate() {
                println!("  {}) {}", i + 1, name);
            }
        }

        Commands::Config { set_highlight_color, set_default_column, show } => {
            let mut config = config;

            if let Some(color) = set_highlight_color {
                config.set_highlight_color(color)?;
                println!("✔ 強調色を設定しました");
            }

            if let Some(column) = set_default_column {
                config.set_default_column(column)?;
                println!("✔ 既定の列名を設定しました");
            }

            if show {
                println!("設定:");
                println!("  強調色: #{}", config.highlight_color);
                println!(
                    "  既定の列名: {}",
                    config.default_column.as_deref().unwrap_or("未設定")
                );
            }
        }
    }

    Ok(())
}
