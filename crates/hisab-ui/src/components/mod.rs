//! Leptos components rendered into server-provided containers

pub mod transaction_details;

pub use transaction_details::{DetailLine, TransactionDetailsView};
