// SPDX-License-Identifier: MPL-2.0
//! Banner entity and the sources banners are loaded from.
//!
//! A [`Banner`] is an immutable reference to a promotional image. Each banner
//! gets a [`BannerId`] when its list is built; per-slide view state is keyed
//! by that id so it survives reordering of the list.

pub mod source;

pub use source::{load_banners, BannerSource};

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_BANNER_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a banner for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BannerId(u64);

impl BannerId {
    /// Allocates a fresh, never reused id.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_BANNER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Pixel dimensions read from an image header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Returns `None` for degenerate sizes so callers can fall back to stretching.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Option<Self> {
        (width > 0 && height > 0).then_some(Self { width, height })
    }
}

/// A single promotional image shown in the carousel and the modal viewer.
#[derive(Debug, Clone)]
pub struct Banner {
    id: BannerId,
    source: PathBuf,
    dimensions: Option<Dimensions>,
    handle: iced::widget::image::Handle,
}

impl Banner {
    /// Creates a banner for an image file. Dimensions are optional; the image
    /// itself is decoded lazily by the renderer.
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, dimensions: Option<Dimensions>) -> Self {
        let source = source.into();
        let handle = iced::widget::image::Handle::from_path(&source);
        Self {
            id: BannerId::next(),
            source,
            dimensions,
            handle,
        }
    }

    #[must_use]
    pub fn id(&self) -> BannerId {
        self.id
    }

    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[must_use]
    pub fn dimensions(&self) -> Option<Dimensions> {
        self.dimensions
    }

    #[must_use]
    pub fn handle(&self) -> &iced::widget::image::Handle {
        &self.handle
    }

    /// File name used for labels and logs.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.to_string_lossy().into_owned())
    }
}
