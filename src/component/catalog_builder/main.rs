use super::manifest::{Manifest, VideoRecord, now_epoch_seconds, round_millis};
use crate::config::Config;
use crate::tools::{
    ThumbnailTask, VideoFileInfo, capture_timestamp, ensure_directory_exists, extract_thumbnail,
    probe_duration_seconds, relative_posix_path, scan_video_files, validate_directory_exists,
};
use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use rust_i18n::t;
use std::fs;
use std::path::{Path, PathBuf};

/// 單一影片的縮圖處理結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ThumbnailOutcome {
    Generated,
    Existing,
    Failed,
}

/// 清單產生結果
#[derive(Debug, Clone)]
pub struct CatalogSummary {
    pub manifest_path: PathBuf,
    pub thumbnails_dir: PathBuf,
    pub count: usize,
    pub generated: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// 影片清單產生器
///
/// 依序處理每支影片：
/// A. 取得影片長度（ffprobe）
/// B. 擷取縮圖（已存在則跳過）
/// C. 建立清單記錄
///
/// 全部處理完後一次寫出清單。
pub struct CatalogBuilder {
    config: Config,
}

impl CatalogBuilder {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// 產生清單並輸出摘要
    pub fn run(&self) -> Result<CatalogSummary> {
        let summary = self.build()?;
        Self::print_summary(&summary);
        Ok(summary)
    }

    /// 產生清單；來源資料夾不存在時直接失敗，不會寫出任何檔案
    pub fn build(&self) -> Result<CatalogSummary> {
        let videos_dir = self.config.videos_path();
        validate_directory_exists(&videos_dir)
            .with_context(|| t!("catalog.missing_videos_dir").to_string())?;

        let thumbnails_dir = self.config.thumbnails_path();
        ensure_directory_exists(&thumbnails_dir)?;

        let manifest_path = self.config.manifest_path();
        let manifest_dir = self.config.manifest_dir();
        ensure_directory_exists(&manifest_dir)?;

        let videos = scan_video_files(&videos_dir, &self.config.settings.video_extension)?;
        info!(
            "找到 {} 個影片檔案: {}",
            videos.len(),
            videos_dir.display()
        );

        let progress_bar = ProgressBar::new(videos.len() as u64);
        if let Ok(bar_style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            progress_bar.set_style(bar_style.progress_chars("#>-"));
        }

        let mut records = Vec::with_capacity(videos.len());
        let mut generated = 0;
        let mut skipped = 0;
        let mut failed = 0;

        for (offset, video) in videos.iter().enumerate() {
            let (record, outcome) = self.build_record(offset + 1, video, &manifest_dir)?;
            progress_bar.set_message(record.id.clone());

            match outcome {
                ThumbnailOutcome::Generated => generated += 1,
                ThumbnailOutcome::Existing => skipped += 1,
                ThumbnailOutcome::Failed => failed += 1,
            }

            records.push(record);
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        let manifest = Manifest::new(
            now_epoch_seconds(),
            &self.config.settings.videos_dir,
            &self.config.settings.thumbnails_dir,
            records,
        );
        manifest.write_to(&manifest_path)?;

        info!(
            "影片清單已建立 - 總計: {}, 新縮圖: {generated}, 既有: {skipped}, 失敗: {failed}",
            manifest.count
        );

        Ok(CatalogSummary {
            manifest_path: display_path(manifest_path),
            thumbnails_dir: display_path(thumbnails_dir),
            count: manifest.count,
            generated,
            skipped,
            failed,
        })
    }

    fn build_record(
        &self,
        index: usize,
        video: &VideoFileInfo,
        manifest_dir: &Path,
    ) -> Result<(VideoRecord, ThumbnailOutcome)> {
        let id = video.stem();
        let thumb_path = self.config.thumbnail_path_for(&id);

        let duration = probe_duration_seconds(self.config.ffprobe(), &video.path);
        let outcome = self.ensure_thumbnail(video, &thumb_path, duration);

        let thumbnail_file = match outcome {
            ThumbnailOutcome::Failed => String::new(),
            ThumbnailOutcome::Generated | ThumbnailOutcome::Existing => {
                relative_posix_path(&thumb_path, manifest_dir)?
            }
        };

        let record = VideoRecord {
            title: id.clone(),
            id,
            index,
            video_file: relative_posix_path(&video.path, manifest_dir)?,
            thumbnail_file,
            duration_seconds: round_millis(duration),
            size_bytes: video.size,
        };

        Ok((record, outcome))
    }

    fn ensure_thumbnail(
        &self,
        video: &VideoFileInfo,
        thumb_path: &Path,
        duration: f64,
    ) -> ThumbnailOutcome {
        let settings = &self.config.settings;

        if thumb_path.is_file() && !settings.regenerate {
            debug!("縮圖已存在，跳過: {}", thumb_path.display());
            return ThumbnailOutcome::Existing;
        }

        let task = ThumbnailTask {
            video_path: video.path.clone(),
            output_path: thumb_path.to_path_buf(),
            timestamp: capture_timestamp(duration, settings.thumb_at_seconds),
            width: settings.thumb_width,
        };

        match extract_thumbnail(self.config.ffmpeg(), &task) {
            Ok(()) => ThumbnailOutcome::Generated,
            Err(e) => {
                debug!("縮圖擷取失敗 {}: {e:#}", video.path.display());
                // 移除殘留檔案，下次執行才會重新擷取
                if thumb_path.is_file() && fs::remove_file(thumb_path).is_err() {
                    warn!("無法移除不完整的縮圖: {}", thumb_path.display());
                }
                ThumbnailOutcome::Failed
            }
        }
    }

    fn print_summary(summary: &CatalogSummary) {
        println!(
            "{}",
            style(t!(
                "catalog.summary_ok",
                count = summary.count,
                path = summary.manifest_path.display()
            ))
            .green()
        );
        println!(
            "{}",
            t!(
                "catalog.summary_thumbnails",
                path = summary.thumbnails_dir.display()
            )
        );
    }
}

/// 摘要顯示用的絕對路徑，無法解析時保留原路徑
fn display_path(path: PathBuf) -> PathBuf {
    path.canonicalize().unwrap_or(path)
}
