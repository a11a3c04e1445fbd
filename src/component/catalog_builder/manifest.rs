use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// 單一影片的清單記錄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: String,
    pub index: usize,
    pub title: String,
    pub video_file: String,
    /// 擷取失敗時為空字串
    pub thumbnail_file: String,
    pub duration_seconds: f64,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub generated_at_epoch: u64,
    pub videos_dir: String,
    pub thumbnails_dir: String,
    pub count: usize,
    pub videos: Vec<VideoRecord>,
}

impl Manifest {
    #[must_use]
    pub fn new(
        generated_at_epoch: u64,
        videos_dir: &str,
        thumbnails_dir: &str,
        videos: Vec<VideoRecord>,
    ) -> Self {
        Self {
            generated_at_epoch,
            videos_dir: videos_dir.to_string(),
            thumbnails_dir: thumbnails_dir.to_string(),
            count: videos.len(),
            videos,
        }
    }

    /// 以兩格縮排寫出，非 ASCII 字元保持原樣，覆寫既有檔案
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("無法序列化影片清單")?;
        fs::write(path, content)
            .with_context(|| format!("無法寫入影片清單: {}", path.display()))?;
        Ok(())
    }

    pub fn read_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("無法讀取影片清單: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("無法解析影片清單: {}", path.display()))
    }
}

/// 四捨五入到小數點後三位
#[must_use]
pub fn round_millis(seconds: f64) -> f64 {
    (seconds * 1000.0).round() / 1000.0
}

#[must_use]
pub fn now_epoch_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(id: &str, index: usize) -> VideoRecord {
        VideoRecord {
            id: id.to_string(),
            index,
            title: id.to_string(),
            video_file: format!("videos/{id}.mp4"),
            thumbnail_file: format!("thumbnails/{id}.webp"),
            duration_seconds: 5.0,
            size_bytes: 1024,
        }
    }

    #[test]
    fn test_count_matches_records() {
        let manifest = Manifest::new(0, "videos", "thumbnails", vec![record("a", 1), record("b", 2)]);
        assert_eq!(manifest.count, 2);
        assert_eq!(manifest.videos.len(), 2);
    }

    #[test]
    fn test_json_layout() {
        let manifest = Manifest::new(1_700_000_000, "videos", "thumbnails", vec![record("a", 1)]);
        let value = serde_json::to_value(&manifest).unwrap();

        assert_eq!(value["generated_at_epoch"], 1_700_000_000u64);
        assert_eq!(value["videos_dir"], "videos");
        assert_eq!(value["thumbnails_dir"], "thumbnails");
        assert_eq!(value["count"], 1);
        assert_eq!(value["videos"][0]["id"], "a");
        assert_eq!(value["videos"][0]["index"], 1);
        assert_eq!(value["videos"][0]["video_file"], "videos/a.mp4");
        assert_eq!(value["videos"][0]["size_bytes"], 1024);

        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 5);
    }

    #[test]
    fn test_write_preserves_non_ascii_and_indents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("videos.json");
        let manifest = Manifest::new(0, "videos", "thumbnails", vec![record("旅行", 1)]);

        manifest.write_to(&path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"id\": \"旅行\""));
        assert!(content.contains("\n  \"count\": 1"));
        assert!(!content.contains("\\u"));

        assert_eq!(Manifest::read_from(&path).unwrap(), manifest);
    }

    #[test]
    fn test_write_replaces_previous_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("videos.json");
        fs::write(&path, "x".repeat(10_000)).unwrap();

        Manifest::new(0, "videos", "thumbnails", Vec::new())
            .write_to(&path)
            .unwrap();
        let parsed = Manifest::read_from(&path).unwrap();
        assert_eq!(parsed.count, 0);
    }

    #[test]
    fn test_zero_duration_serializes_as_number() {
        let mut item = record("b", 1);
        item.duration_seconds = 0.0;
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"duration_seconds\":0.0"));
    }

    #[test]
    fn test_round_millis() {
        assert!((round_millis(5.123_456) - 5.123).abs() < 1e-9);
        assert!((round_millis(5.123_6) - 5.124).abs() < 1e-9);
        assert!(round_millis(0.0).abs() < f64::EPSILON);
    }
}
