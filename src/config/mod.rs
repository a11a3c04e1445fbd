pub mod load;
pub mod types;

pub use types::{CatalogSettings, Config, SETTINGS_FILE_NAME, ThumbnailFormat};
