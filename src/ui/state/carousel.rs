// SPDX-License-Identifier: MPL-2.0
//! Active-slide index shared by the carousel and the modal viewer.

/// Active slide and autoplay pause flag.
///
/// Both the autoplay timer and manual navigation overwrite `active_index`;
/// the last write wins.
#[derive(Debug, Clone, Default)]
pub struct CarouselState {
    active_index: usize,
    len: usize,
    paused: bool,
}

impl CarouselState {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Replaces the slide count, keeping the active index in range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.active_index >= len {
            self.active_index = 0;
        }
    }

    /// Selects `index`. Out-of-range indices are ignored.
    ///
    /// Returns whether the active index changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.active_index {
            return false;
        }
        self.active_index = index;
        true
    }

    /// Moves to the next slide, wrapping from the last to the first.
    pub fn next(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.select((self.active_index + 1) % self.len)
    }

    /// Moves to the previous slide, wrapping from the first to the last.
    pub fn previous(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.select((self.active_index + self.len - 1) % self.len)
    }
}
