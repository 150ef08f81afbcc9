//! Shared Dioxus components and D3.js bridge for the climate dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js renderers via `js_sys::eval()`,
//!   plus the browser side of the CSV download
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (city selectors, slot containers, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
