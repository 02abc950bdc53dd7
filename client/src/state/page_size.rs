//! Ordered page-size choices and previous/next stepping.

#[cfg(test)]
#[path = "page_size_test.rs"]
mod page_size_test;

use crate::config::DEFAULT_PAGE_SIZE_OPTIONS;

/// Fixed ordered set of page sizes. Does not own the current size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageSizeOptions {
    options: Vec<u32>,
}

impl Default for PageSizeOptions {
    fn default() -> Self {
        Self { options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec() }
    }
}

impl PageSizeOptions {
    /// Falls back to the defaults when `options` is empty.
    #[must_use]
    pub fn new(options: Vec<u32>) -> Self {
        if options.is_empty() {
            return Self::default();
        }
        Self { options }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.options
    }

    #[must_use]
    pub fn first(&self) -> u32 {
        self.options[0]
    }

    #[must_use]
    pub fn contains(&self, size: u32) -> bool {
        self.options.contains(&size)
    }

    #[must_use]
    pub fn index_of(&self, size: u32) -> Option<usize> {
        self.options.iter().position(|&o| o == size)
    }

    /// Option before `current`, or `None` at the first option or for an
    /// unknown size.
    #[must_use]
    pub fn prev(&self, current: u32) -> Option<u32> {
        let idx = self.index_of(current)?;
        idx.checked_sub(1).map(|i| self.options[i])
    }

    /// Option after `current`. An unknown size steps to the first option.
    #[must_use]
    pub fn next(&self, current: u32) -> Option<u32> {
        let next_idx = self.index_of(current).map_or(0, |i| i + 1);
        self.options.get(next_idx).copied()
    }

    #[must_use]
    pub fn prev_disabled(&self, current: u32) -> bool {
        self.prev(current).is_none()
    }

    #[must_use]
    pub fn next_disabled(&self, current: u32) -> bool {
        self.next(current).is_none()
    }
}
