use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// 縮圖擷取任務
#[derive(Debug, Clone)]
pub struct ThumbnailTask {
    pub video_path: PathBuf,
    pub output_path: PathBuf,
    pub timestamp: f64,
    pub width: u32,
}

impl ThumbnailTask {
    /// ffmpeg 參數：在 `-i` 前 seek，只輸出一幀，寬度固定、高度依比例取偶數
    #[must_use]
    pub fn ffmpeg_args(&self) -> Vec<String> {
        vec![
            "-hide_banner".to_string(),
            "-nostdin".to_string(),
            "-loglevel".to_string(),
            "error".to_string(),
            "-y".to_string(),
            "-ss".to_string(),
            format!("{:.3}", self.timestamp),
            "-i".to_string(),
            self.video_path.to_string_lossy().to_string(),
            "-frames:v".to_string(),
            "1".to_string(),
            "-vf".to_string(),
            format!("scale={}:-2", self.width),
            self.output_path.to_string_lossy().to_string(),
        ]
    }
}

/// 擷取單一縮圖，覆寫目標檔案
pub fn extract_thumbnail(ffmpeg: &Path, task: &ThumbnailTask) -> Result<()> {
    debug!(
        "擷取縮圖 {}: timestamp={:.3}s -> {}",
        task.video_path.display(),
        task.timestamp,
        task.output_path.display()
    );

    let output = Command::new(ffmpeg)
        .args(task.ffmpeg_args())
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("無法執行 ffmpeg 擷取縮圖: {}", task.video_path.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("ffmpeg 擷取縮圖失敗: {}", stderr.trim());
    }

    // 確認輸出檔案存在
    if !task.output_path.is_file() {
        anyhow::bail!("縮圖檔案未建立: {}", task.output_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> ThumbnailTask {
        ThumbnailTask {
            video_path: PathBuf::from("/videos/a.mp4"),
            output_path: PathBuf::from("/thumbnails/a.webp"),
            timestamp: 1.0,
            width: 640,
        }
    }

    #[test]
    fn test_ffmpeg_args_layout() {
        let args = sample_task().ffmpeg_args();
        assert_eq!(
            args,
            vec![
                "-hide_banner",
                "-nostdin",
                "-loglevel",
                "error",
                "-y",
                "-ss",
                "1.000",
                "-i",
                "/videos/a.mp4",
                "-frames:v",
                "1",
                "-vf",
                "scale=640:-2",
                "/thumbnails/a.webp",
            ]
        );
    }

    #[test]
    fn test_seek_precedes_input() {
        let args = sample_task().ffmpeg_args();
        let seek = args.iter().position(|a| a == "-ss").unwrap();
        let input = args.iter().position(|a| a == "-i").unwrap();
        assert!(seek < input);
    }

    #[test]
    fn test_timestamp_formatting() {
        let mut task = sample_task();
        task.timestamp = 0.0;
        assert!(task.ffmpeg_args().contains(&"0.000".to_string()));
        task.timestamp = 1.23456;
        assert!(task.ffmpeg_args().contains(&"1.235".to_string()));
    }

    #[test]
    fn test_extract_with_missing_binary_fails() {
        let task = sample_task();
        assert!(extract_thumbnail(Path::new("/nonexistent/ffmpeg-binary"), &task).is_err());
    }
}
