use crate::config::types::{CatalogSettings, Config, SETTINGS_FILE_NAME};
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// 載入設定：`settings_path` 明確指定時檔案必須存在，
    /// 否則嘗試讀取根目錄下的預設設定檔，不存在則使用預設值
    pub fn load(root: &Path, settings_path: Option<&Path>) -> Result<Self> {
        let settings = match settings_path {
            Some(path) => Self::load_settings(path)?,
            None => {
                let default_path = Self::settings_file_in(root);
                if default_path.exists() {
                    Self::load_settings(&default_path)?
                } else {
                    CatalogSettings::default()
                }
            }
        };

        Ok(Self {
            root: root.to_path_buf(),
            settings,
        })
    }

    fn load_settings(path: &Path) -> Result<CatalogSettings> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }

    /// 檢查設定值，須在任何檔案系統變更前呼叫
    pub fn validate(&self) -> Result<()> {
        let settings = &self.settings;

        if !settings.thumb_at_seconds.is_finite() || settings.thumb_at_seconds < 0.0 {
            bail!(
                "thumb_at_seconds 必須為非負數: {}",
                settings.thumb_at_seconds
            );
        }
        if settings.thumb_width == 0 {
            bail!("thumb_width 必須大於 0");
        }
        if settings.video_extension.trim_start_matches('.').is_empty() {
            bail!("video_extension 不可為空");
        }
        if settings.manifest_file.trim().is_empty() {
            bail!("manifest_file 不可為空");
        }

        Ok(())
    }

    #[must_use]
    pub fn settings_file_in(root: &Path) -> PathBuf {
        root.join(SETTINGS_FILE_NAME)
    }
}
