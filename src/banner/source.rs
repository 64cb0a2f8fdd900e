// SPDX-License-Identifier: MPL-2.0
//! Banner sources: a directory of images or a TOML manifest.
//!
//! A directory yields every supported image directly inside it, sorted by
//! file name. A manifest lists banners explicitly and keeps their order:
//!
//! ```toml
//! [[banner]]
//! path = "summer-sale.jpg"
//!
//! [[banner]]
//! path = "/srv/shared/new-menu.png"
//! ```
//!
//! Relative manifest paths are resolved against the manifest's directory.
//! Only image headers are read (for dimensions); a banner whose header cannot
//! be read is kept without dimensions.

use super::{Banner, Dimensions};
use crate::error::{Error, Result, SourceError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Image extensions accepted when scanning a directory.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff", "ico",
];

/// Where the banner list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BannerSource {
    Directory(PathBuf),
    Manifest(PathBuf),
}

impl BannerSource {
    /// Classifies a path as a directory or manifest source.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(SourceError::NotFound(path.display().to_string()).into());
        }
        if path.is_dir() {
            return Ok(Self::Directory(path));
        }
        if has_extension(&path, &["toml"]) {
            return Ok(Self::Manifest(path));
        }
        Err(SourceError::UnsupportedSource(path.display().to_string()).into())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Directory(path) | Self::Manifest(path) => path,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default, rename = "banner")]
    banners: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    path: PathBuf,
}

/// Builds the ordered banner list for a source.
pub fn load_banners(source: &BannerSource) -> Result<Vec<Banner>> {
    let paths = match source {
        BannerSource::Directory(dir) => scan_directory(dir)?,
        BannerSource::Manifest(file) => read_manifest(file)?,
    };

    let banners: Vec<Banner> = paths
        .into_iter()
        .map(|path| {
            let dimensions = read_dimensions(&path);
            Banner::new(path, dimensions)
        })
        .collect();

    tracing::info!(
        source = %source.path().display(),
        count = banners.len(),
        "loaded banner list"
    );
    Ok(banners)
}

/// Loads the banner list off the UI thread.
pub async fn load_banners_async(source: BannerSource) -> Result<Vec<Banner>> {
    tokio::task::spawn_blocking(move || load_banners(&source))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}

fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_extension(&path, SUPPORTED_EXTENSIONS) {
            files.push(path);
        }
    }
    files.sort_by_key(|path| {
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });
    Ok(files)
}

fn read_manifest(file: &Path) -> Result<Vec<PathBuf>> {
    let content = fs::read_to_string(file)?;
    let manifest: Manifest = toml::from_str(&content)
        .map_err(|e| SourceError::InvalidManifest(e.to_string()))?;

    let base = file.parent().unwrap_or_else(|| Path::new(""));
    Ok(manifest
        .banners
        .into_iter()
        .map(|entry| {
            if entry.path.is_absolute() {
                entry.path
            } else {
                base.join(entry.path)
            }
        })
        .collect())
}

fn read_dimensions(path: &Path) -> Option<Dimensions> {
    match image_rs::image_dimensions(path) {
        Ok((width, height)) => Dimensions::new(width, height),
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "could not read banner header");
            None
        }
    }
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        image_rs::RgbaImage::new(width, height)
            .save(&path)
            .expect("write test image");
        path
    }

    #[test]
    fn directory_source_lists_images_sorted_by_name() {
        let dir = tempdir().unwrap();
        write_png(dir.path(), "b.png", 4, 2);
        write_png(dir.path(), "A.png", 2, 2);
        fs::write(dir.path().join("notes.txt"), "not an image").unwrap();

        let source = BannerSource::from_path(dir.path()).unwrap();
        let banners = load_banners(&source).unwrap();

        let names: Vec<_> = banners.iter().map(Banner::display_name).collect();
        assert_eq!(names, vec!["A.png", "b.png"]);
        assert_eq!(banners[1].dimensions(), Dimensions::new(4, 2));
    }

    #[test]
    fn manifest_keeps_order_and_resolves_relative_paths() {
        let dir = tempdir().unwrap();
        write_png(dir.path(), "first.png", 2, 2);
        let manifest = dir.path().join("banners.toml");
        fs::write(
            &manifest,
            "[[banner]]\npath = \"second.png\"\n\n[[banner]]\npath = \"first.png\"\n",
        )
        .unwrap();

        let source = BannerSource::from_path(&manifest).unwrap();
        assert_eq!(source, BannerSource::Manifest(manifest.clone()));

        let banners = load_banners(&source).unwrap();
        assert_eq!(banners.len(), 2);
        assert_eq!(banners[0].source(), dir.path().join("second.png"));
        assert_eq!(banners[1].source(), dir.path().join("first.png"));
        // Missing file is kept, just without dimensions.
        assert!(banners[0].dimensions().is_none());
        assert_eq!(banners[1].dimensions(), Dimensions::new(2, 2));
    }

    #[test]
    fn empty_manifest_yields_empty_list() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("banners.toml");
        fs::write(&manifest, "").unwrap();

        let banners = load_banners(&BannerSource::Manifest(manifest)).unwrap();
        assert!(banners.is_empty());
    }

    #[test]
    fn invalid_manifest_is_reported() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("banners.toml");
        fs::write(&manifest, "[[banner]]\nwidth = 3\n").unwrap();

        let result = load_banners(&BannerSource::Manifest(manifest));
        assert!(matches!(
            result,
            Err(Error::Source(SourceError::InvalidManifest(_)))
        ));
    }

    #[test]
    fn missing_and_unsupported_sources_are_rejected() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            BannerSource::from_path(dir.path().join("nope")),
            Err(Error::Source(SourceError::NotFound(_)))
        ));

        let image = write_png(dir.path(), "single.png", 1, 1);
        assert!(matches!(
            BannerSource::from_path(image),
            Err(Error::Source(SourceError::UnsupportedSource(_)))
        ));
    }

    #[tokio::test]
    async fn async_loading_matches_sync_loading() {
        let dir = tempdir().unwrap();
        write_png(dir.path(), "only.png", 3, 1);

        let banners = load_banners_async(BannerSource::Directory(dir.path().to_path_buf()))
            .await
            .unwrap();
        assert_eq!(banners.len(), 1);
        assert_eq!(banners[0].dimensions(), Dimensions::new(3, 1));
    }
}
