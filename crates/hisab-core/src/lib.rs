//! Target-independent UI logic for the hisab web frontend
//!
//! Everything here is plain Rust with no browser bindings, so it can be
//! tested natively. The `hisab-ui` crate owns the DOM and feeds events in.
//!
//! ## Module Structure
//! - `config`: page-level configuration with defaults
//! - `error` / `result`: error types and Result combinators
//! - `menu`, `scroll`, `theme`: small presentation state machines
//! - `schedule`: cancellable scheduled callbacks plus a virtual clock
//! - `toast`: toast lifecycle driven by a scheduler
//! - `transaction`: the transaction detail record and its rendering rows
//! - `modal`: detail modal state with request tokens
//! - `view_model`: the single UI state object, events and effects

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod menu;
pub mod modal;
pub mod result;
pub mod schedule;
pub mod scroll;
pub mod theme;
pub mod toast;
pub mod transaction;
pub mod view_model;

pub use config::{LogLevel, Selectors, UiConfig};
pub use error::Error;
pub use menu::MenuState;
pub use modal::{ClickTarget, ModalOutcome, ModalState, ModalVisibility, RequestToken};
pub use result::{OrFallback, Result};
pub use schedule::{ManualScheduler, ScheduledTask, Scheduler};
pub use scroll::{BackToTop, Visibility};
pub use theme::{MemoryStore, PreferenceStore, Theme};
pub use toast::{ToastLifecycle, ToastPhase, ToastTiming, ToastView};
pub use transaction::{DetailRow, DetailValue, FieldValue, TransactionDetails, TransactionId};
pub use view_model::{Presentation, PresentationChange, Transition, UiEffect, UiEvent, UiState};
