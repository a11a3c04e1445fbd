use anyhow::{Context, Result, bail};
use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};

/// 使用 ffprobe 取得影片長度（秒），任何失敗都回傳 0.0
#[must_use]
pub fn probe_duration_seconds(ffprobe: &Path, path: &Path) -> f64 {
    match probe_duration(ffprobe, path) {
        Ok(duration) => duration,
        Err(e) => {
            debug!("無法取得影片長度 {}: {e:#}", path.display());
            0.0
        }
    }
}

fn probe_duration(ffprobe: &Path, path: &Path) -> Result<f64> {
    let output = Command::new(ffprobe)
        .args([
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
        ])
        .arg(path)
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("無法執行 ffprobe: {}", path.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("ffprobe 執行失敗: {}", stderr.trim());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_duration_output(&stdout)
        .with_context(|| format!("無法解析 ffprobe 輸出: {:?}", stdout.trim()))
}

/// 解析 ffprobe 的純文字長度輸出；空輸出視為 0.0
fn parse_duration_output(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    let duration: f64 = trimmed.lines().next()?.trim().parse().ok()?;
    (duration.is_finite() && duration >= 0.0).then_some(duration)
}
