//! Leptos 0.7 CSR enhancements for the hisab finance pages
//!
//! The pages are rendered by the server; this crate attaches the client-side
//! behaviors on top of them. All decisions live in `hisab_core`, this crate
//! only reads the DOM, forwards events and applies the resulting changes.
//!
//! ## Behaviors
//! - Mobile menu toggle
//! - Back-to-top control with smooth scrolling
//! - Toast auto-dismiss
//! - Dark mode with a persisted preference
//! - Transaction detail modal fed by the details endpoint
//!
//! ## Module Structure
//! - `app`: Start-up sequence
//! - `page`: Shared page context and event dispatcher
//! - `behaviors`: One module per behavior
//! - `components`: Leptos views rendered into the page
//! - `api`: Details endpoint client
//! - `dom`, `storage`, `timers`: Browser adapters
//! - `log`: Console logging
//! - `error`: Error types and handling

#![forbid(unsafe_code)]

pub mod api;
pub mod app;
pub mod behaviors;
pub mod components;
pub mod dom;
pub mod error;
pub mod log;
pub mod page;
pub mod storage;
pub mod timers;

pub use app::start;
pub use error::{Result, UiError};
