//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page picks its header and delegates everything interactive to
//! `components`.

pub mod about;
pub mod home;
