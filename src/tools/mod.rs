mod ffprobe_info;
mod path_validator;
mod thumbnail_extractor;
mod timestamp_selector;
mod video_scanner;

pub use ffprobe_info::probe_duration_seconds;
pub use path_validator::{ensure_directory_exists, relative_posix_path, validate_directory_exists};
pub use thumbnail_extractor::{ThumbnailTask, extract_thumbnail};
pub use timestamp_selector::{CAPTURE_FRACTION, capture_timestamp};
pub use video_scanner::{VideoFileInfo, scan_video_files};
