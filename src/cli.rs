use crate::component::catalog_builder::{CatalogBuilder, CatalogSummary};
use crate::config::{CatalogSettings, Config, ThumbnailFormat};
use anyhow::Result;
use clap::Parser;
use console::style;
use log::debug;
use rust_i18n::t;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "video_catalog",
    version,
    about = "Scan a folder of videos, extract one thumbnail per video and write a JSON manifest"
)]
pub struct Cli {
    /// Catalog root; relative folders and the manifest resolve against it
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Settings JSON file (default: <root>/catalog_settings.json when present)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Source folder with the videos
    #[arg(long)]
    pub videos_dir: Option<String>,

    /// Output folder for thumbnails
    #[arg(long)]
    pub thumbnails_dir: Option<String>,

    /// Manifest output file
    #[arg(long)]
    pub output: Option<String>,

    /// Video file extension to include (case-insensitive)
    #[arg(long)]
    pub extension: Option<String>,

    /// Latest capture time in seconds
    #[arg(long)]
    pub thumb_at: Option<f64>,

    /// Thumbnail width in pixels; height keeps the aspect ratio
    #[arg(long)]
    pub thumb_width: Option<u32>,

    /// Thumbnail image format
    #[arg(long, value_enum)]
    pub format: Option<ThumbnailFormat>,

    /// Re-extract thumbnails that already exist
    #[arg(long, default_value_t = false)]
    pub regenerate: bool,
}

impl Cli {
    /// 命令列參數優先於設定檔
    pub fn apply_overrides(&self, settings: &mut CatalogSettings) {
        if let Some(dir) = &self.videos_dir {
            settings.videos_dir.clone_from(dir);
        }
        if let Some(dir) = &self.thumbnails_dir {
            settings.thumbnails_dir.clone_from(dir);
        }
        if let Some(output) = &self.output {
            settings.manifest_file.clone_from(output);
        }
        if let Some(extension) = &self.extension {
            settings.video_extension.clone_from(extension);
        }
        if let Some(seconds) = self.thumb_at {
            settings.thumb_at_seconds = seconds;
        }
        if let Some(width) = self.thumb_width {
            settings.thumb_width = width;
        }
        if let Some(format) = self.format {
            settings.thumb_format = format;
        }
        if self.regenerate {
            settings.regenerate = true;
        }
    }

    pub fn into_config(self) -> Result<Config> {
        let mut config = Config::load(&self.root, self.settings.as_deref())?;
        self.apply_overrides(&mut config.settings);
        config.validate()?;
        Ok(config)
    }
}

pub fn run(cli: Cli) -> Result<CatalogSummary> {
    let config = cli.into_config()?;
    rust_i18n::set_locale(config.settings.language.as_str());
    CatalogBuilder::new(config).run()
}

pub fn report_error(err: &anyhow::Error) {
    debug!("執行失敗: {err:#}");
    eprintln!("{} {err:#}", style(t!("main.error_prefix")).red().bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_leave_settings_untouched() {
        let cli = Cli::parse_from(["video_catalog"]);
        let mut settings = CatalogSettings::default();
        cli.apply_overrides(&mut settings);
        assert_eq!(settings, CatalogSettings::default());
        assert_eq!(cli.root, PathBuf::from("."));
    }

    #[test]
    fn test_overrides_apply() {
        let cli = Cli::parse_from([
            "video_catalog",
            "--videos-dir",
            "clips",
            "--output",
            "site/catalog.json",
            "--thumb-at",
            "3.5",
            "--thumb-width",
            "320",
            "--format",
            "jpg",
            "--regenerate",
        ]);
        let mut settings = CatalogSettings::default();
        cli.apply_overrides(&mut settings);

        assert_eq!(settings.videos_dir, "clips");
        assert_eq!(settings.manifest_file, "site/catalog.json");
        assert!((settings.thumb_at_seconds - 3.5).abs() < f64::EPSILON);
        assert_eq!(settings.thumb_width, 320);
        assert_eq!(settings.thumb_format, ThumbnailFormat::Jpg);
        assert!(settings.regenerate);
        assert_eq!(settings.thumbnails_dir, "thumbnails");
    }

    #[test]
    fn test_invalid_override_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::parse_from([
            "video_catalog",
            "--root",
            dir.path().to_str().unwrap(),
            "--thumb-width",
            "0",
        ]);
        assert!(cli.into_config().is_err());
    }
}
