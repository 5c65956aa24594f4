//! Client-side UI state modules.
//!
//! DESIGN
//! ======
//! State is split by surface (`session` for the site header, `panel` and
//! `history` for the app header, `report` for the bug-report popup, `banner`
//! for the announcement strip) so each component depends on a small model
//! that can be tested without a browser.

pub mod banner;
pub mod history;
pub mod panel;
pub mod report;
pub mod session;
