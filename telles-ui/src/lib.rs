//! Shared Dioxus components and browser bridge for Telles pages.
//!
//! This crate provides:
//! - `browser`: `web-sys` wrappers for session storage, navigation and dialogs
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: reusable RSX components (row table, calendar, clock, etc.)

pub mod browser;
pub mod components;
pub mod state;
