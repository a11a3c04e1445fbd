//! 影片清單產生元件
//!
//! 掃描影片資料夾，為每支影片擷取縮圖並寫出 JSON 清單

mod main;
mod manifest;

pub use main::{CatalogBuilder, CatalogSummary};
pub use manifest::{Manifest, VideoRecord, now_epoch_seconds, round_millis};
