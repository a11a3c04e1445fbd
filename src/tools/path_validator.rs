use anyhow::{Context, Result, bail};
use rust_i18n::t;
use std::path::{Component, Path, PathBuf};

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("{}", t!("path.not_found", path = path.display()));
    }
    if !path.is_dir() {
        bail!("{}", t!("path.not_a_directory", path = path.display()));
    }
    Ok(())
}

pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| t!("path.create_failed", path = path.display()).to_string())?;
    }
    Ok(())
}

/// 計算 `path` 相對於 `base` 的路徑，一律以 `/` 分隔
///
/// 只正規化 `path` 的父目錄，檔名保持原樣（符號連結不會被解析成目標）；
/// `path` 不在 `base` 之下時以 `..` 回溯。`path` 本身可以尚未存在。
pub fn relative_posix_path(path: &Path, base: &Path) -> Result<String> {
    let path = canonicalize_parent(path)?;
    let base = base
        .canonicalize()
        .with_context(|| format!("無法解析基準路徑: {}", base.display()))?;

    let path_parts: Vec<Component<'_>> = path.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();

    let common = path_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<String> =
        std::iter::repeat_n("..".to_string(), base_parts.len() - common).collect();
    segments.extend(
        path_parts[common..]
            .iter()
            .map(|part| part.as_os_str().to_string_lossy().into_owned()),
    );

    Ok(segments.join("/"))
}

fn canonicalize_parent(path: &Path) -> Result<PathBuf> {
    let Some(file_name) = path.file_name() else {
        return path
            .canonicalize()
            .with_context(|| format!("無法解析路徑: {}", path.display()));
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    Ok(parent
        .canonicalize()
        .with_context(|| format!("無法解析路徑: {}", path.display()))?
        .join(file_name))
}
