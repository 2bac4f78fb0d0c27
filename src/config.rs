use crate::error::{ExcelFilterError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// 異常行の強調色（RRGGBB）
    pub highlight_color: String,
    /// フィルタ対象列の既定値（対話入力の初期値）
    pub default_column: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ExcelFilterError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("excel-filter").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            highlight_color: "FFFF00".into(),  // 黄色
            default_column: None,
        }
    }

    /// 強調色をRRGGBBのu32として取得
    pub fn highlight_color_value(&self) -> Result<u32> {
        parse_color(&self.highlight_color).ok_or_else(|| {
            ExcelFilterError::Config(format!("強調色の形式が不正です: {}", self.highlight_color))
        })
    }

    pub fn set_highlight_color(&mut self, color: String) -> Result<()> {
        let hex = color.trim_start_matches('#').to_uppercase();
        if parse_color(&hex).is_none() {
            return Err(ExcelFilterError::Config(format!(
                "強調色はRRGGBB形式で指定してください: {}",
                color
            )));
        }
        self.highlight_color = hex;
        self.save()
    }

    pub fn set_default_column(&mut self, column: String) -> Result<()> {
        self.default_column = Some(column);
        self.save()
    }
}

fn parse_color(value: &str) -> Option<u32> {
    let hex = value.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}
