//! Asynchronous catalogue lookup producing a deferred outcome.

use std::collections::BTreeMap;
use std::sync::Arc;

use outcome::{FutureOutcome, defer, make_failure, make_success};
use thiserror::Error;

use crate::config::ProductRecord;

/// Why a product identifier could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    /// No catalogue entry carries the identifier.
    #[error("product {0} not found")]
    NotFound(u32),
    /// The entry has no title.
    #[error("the product does not have a title")]
    MissingTitle,
    /// The entry has no brand.
    #[error("the product does not have a brand")]
    MissingBrand,
}

/// Looks `id` up and renders `"<title> by <brand>"` once the lookup settles.
#[must_use = "futures do nothing unless polled"]
pub fn product_identifier(
    catalogue: Arc<BTreeMap<String, ProductRecord>>,
    id: u32,
) -> FutureOutcome<'static, String, ProductError> {
    defer(async move {
        tokio::task::yield_now().await;
        let Some(record) = catalogue.get(&id.to_string()) else {
            tracing::debug!(id, "product missing from catalogue");
            return make_failure(ProductError::NotFound(id));
        };
        let Some(title) = record.title.as_deref() else {
            return make_failure(ProductError::MissingTitle);
        };
        let Some(brand) = record.brand.as_deref() else {
            return make_failure(ProductError::MissingBrand);
        };
        make_success(format!("{title} by {brand}"))
    })
}
