use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 預設設定檔名稱（位於目錄根）
pub const SETTINGS_FILE_NAME: &str = "catalog_settings.json";

/// 縮圖輸出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailFormat {
    #[default]
    Webp,
    Jpg,
}

impl ThumbnailFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Webp => "webp",
            Self::Jpg => "jpg",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub videos_dir: String,
    pub thumbnails_dir: String,
    pub manifest_file: String,
    pub video_extension: String,
    /// 擷取時間上限（秒）
    pub thumb_at_seconds: f64,
    pub thumb_width: u32,
    pub thumb_format: ThumbnailFormat,
    /// 即使縮圖已存在也重新擷取
    pub regenerate: bool,
    pub ffprobe_bin: String,
    pub ffmpeg_bin: String,
    pub language: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            videos_dir: "videos".to_string(),
            thumbnails_dir: "thumbnails".to_string(),
            manifest_file: "videos.json".to_string(),
            video_extension: "mp4".to_string(),
            thumb_at_seconds: 2.0,
            thumb_width: 640,
            thumb_format: ThumbnailFormat::default(),
            regenerate: false,
            ffprobe_bin: tool_from_env("FFPROBE", "ffprobe"),
            ffmpeg_bin: tool_from_env("FFMPEG", "ffmpeg"),
            language: "en-US".to_string(),
        }
    }
}

fn tool_from_env(var: &str, fallback: &str) -> String {
    std::env::var(var)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[derive(Debug, Clone)]
pub struct Config {
    /// 所有相對路徑的基準目錄
    pub root: PathBuf,
    pub settings: CatalogSettings,
}

impl Config {
    #[must_use]
    pub fn videos_path(&self) -> PathBuf {
        self.root.join(&self.settings.videos_dir)
    }

    #[must_use]
    pub fn thumbnails_path(&self) -> PathBuf {
        self.root.join(&self.settings.thumbnails_dir)
    }

    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.settings.manifest_file)
    }

    /// 清單所在目錄，清單內所有路徑皆相對於此
    #[must_use]
    pub fn manifest_dir(&self) -> PathBuf {
        let manifest_path = self.manifest_path();
        match manifest_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    #[must_use]
    pub fn thumbnail_path_for(&self, video_id: &str) -> PathBuf {
        self.thumbnails_path().join(format!(
            "{video_id}.{}",
            self.settings.thumb_format.extension()
        ))
    }

    #[must_use]
    pub fn ffprobe(&self) -> &Path {
        Path::new(&self.settings.ffprobe_bin)
    }

    #[must_use]
    pub fn ffmpeg(&self) -> &Path {
        Path::new(&self.settings.ffmpeg_bin)
    }
}
