//! Visibility of the dismissible announcement banner.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

/// Banner visibility for one mount. Once dismissed it stays hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerState {
    visible: bool,
}

impl Default for BannerState {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl BannerState {
    pub fn is_visible(self) -> bool {
        self.visible
    }

    /// Hide the banner. Returns `false` if it was already hidden.
    pub fn dismiss(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }
}
