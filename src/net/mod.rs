//! Networking modules for the Share REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the wire schema, and `error`
//! classifies what can go wrong so UI state can degrade gracefully.

pub mod api;
pub mod error;
pub mod types;
