//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold pure logic (formatting, class joining, request
//! generations) so components stay thin and the helpers stay testable
//! without a browser.

pub mod classes;
pub mod format;
pub mod generation;
