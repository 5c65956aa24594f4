//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Headers compose the popups; popups read and write the small state models
//! in `crate::state`. Input primitives and `Popup` are shared building
//! blocks with typed props.

pub mod account_popup;
pub mod app_header;
pub mod banner;
pub mod bug_report_popup;
pub mod field;
pub mod history_popup;
pub mod login_popup;
pub mod popup;
pub mod site_header;
pub mod text_box;
