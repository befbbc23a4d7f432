//! UI components for the statusboard desktop app.
//!
//! The client crate decides what to show; this module only paints it.

pub mod dashboard_view;
pub mod palette;
