//! Configuration
//!
//! JSON設定ファイルの読み込み

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_PATH: &str = "~/.libraryapp/library.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// 図書館データ（JSON）の保存先。`~` と環境変数を展開する
    #[serde(default = "default_data_path")]
    pub data_path: String,
}

fn default_data_path() -> String {
    DEFAULT_DATA_PATH.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }

    /// 設定ファイルがなければデフォルト設定を使う
    pub fn load_or_default(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            info!("No config file at {}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// 展開済みのデータファイルパス
    pub fn resolved_data_path(&self) -> Result<PathBuf> {
        let expanded = shellexpand::full(&self.data_path)
            .with_context(|| format!("Failed to expand data path: {}", self.data_path))?;
        Ok(PathBuf::from(expanded.into_owned()))
    }
}
