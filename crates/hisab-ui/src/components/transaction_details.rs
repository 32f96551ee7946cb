//! Modal body for a transaction's details
//!
//! Rows come pre-formatted from `hisab_core`; every value is inserted as a
//! text node, so server data never becomes markup.

use hisab_core::{DetailRow, DetailValue};
use leptos::either::Either;
use leptos::prelude::*;

/// Body of the transaction detail modal
#[component]
pub fn TransactionDetailsView(rows: Memo<Vec<DetailRow>>) -> impl IntoView {
    view! {
        <div class="transaction-details">
            {move || {
                rows.get()
                    .into_iter()
                    .map(|row| view! { <DetailLine row=row /> })
                    .collect_view()
            }}
        </div>
    }
}

/// One labelled line, e.g. `Amount: $12.5`
#[component]
pub fn DetailLine(row: DetailRow) -> impl IntoView {
    let label = format!("{}:", row.label);
    let value = match row.value {
        DetailValue::Text(text) => Either::Left(text),
        DetailValue::Link { href, text } => Either::Right(view! {
            <a href=href target="_blank" rel="noopener">
                {text}
            </a>
        }),
    };

    view! {
        <p>
            <strong>{label}</strong>
            " "
            {value}
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_compile() {
        // Actual rendering tests run under wasm-bindgen-test
        let _ = TransactionDetailsView;
        let _ = DetailLine;
    }
}
