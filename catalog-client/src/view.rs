//! Product management view
//!
//! The component that ties the transport adapter, catalog store, and edit
//! session together. Control flow follows one rule: every successful
//! mutation funnels through [`CatalogView::refresh`], replacing the store
//! wholesale from the server instead of patching it locally.
//!
//! ```text
//! mount ──► refresh ──► CatalogStore populated
//!   user action (create/edit/delete) ──► ProductApi
//!     success ──► refresh (invalidate and reload)
//!     failure ──► StatusMessage set, state unchanged
//! ```
//!
//! Failure surfacing matches the API contract: a non-success status with
//! an `{"error": ...}` body becomes a user-visible message; transport
//! failures are logged and never shown; list fetches are diagnostic-only
//! in both cases.

use tracing::{debug, error, warn};

use crate::api::ProductApi;
use crate::catalog::CatalogStore;
use crate::config::ClientConfig;
use crate::session::{EditSession, ProductDraft};

// ============================================================================
// Status Message
// ============================================================================

/// Single-slot user-facing message.
///
/// Overwritten by the most recent operation's outcome; it is not a log.
/// The adapter returns plain `ClientResult` values; only this layer
/// decides what the user sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Success(String),
    Error(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Success(text) | StatusMessage::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusMessage::Error(_))
    }
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

// ============================================================================
// Catalog View
// ============================================================================

/// The product management component.
///
/// All operations take `&mut self`: a single owner drives at most one
/// operation at a time, so two mutations cannot be in flight together
/// through the same view.
#[derive(Debug)]
pub struct CatalogView {
    api: ProductApi,
    store: CatalogStore,
    session: EditSession,
    draft: ProductDraft,
    message: Option<StatusMessage>,
}

impl CatalogView {
    /// Create a view from configuration.
    ///
    /// The bearer token is read once from the config here; it is not
    /// refreshed mid-session.
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_api(ProductApi::new(config))
    }

    /// Create a view from an existing API wrapper
    pub fn with_api(api: ProductApi) -> Self {
        Self {
            api,
            store: CatalogStore::new(),
            session: EditSession::default(),
            draft: ProductDraft::new(),
            message: None,
        }
    }

    // ========== Accessors ==========

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    // ========== Lifecycle ==========

    /// Mount the component: issue the initial list fetch
    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// Fetch the product list and replace the store with the result.
    ///
    /// On success the store is replaced wholesale (a `204 No Content`
    /// yields the empty list). On failure the existing list is left
    /// untouched and the error is logged; list failures are never
    /// surfaced as user-facing messages.
    pub async fn refresh(&mut self) {
        match self.api.list().await {
            Ok(items) => {
                debug!(count = items.len(), "catalog refreshed");
                self.store.replace(items);
            }
            Err(err) => {
                warn!(error = %err, "Error fetching products");
            }
        }
    }

    // ========== Create ==========

    /// Update the name field of the new-product form
    pub fn set_draft_name(&mut self, text: &str) {
        self.draft.name = text.to_string();
    }

    /// Update the price field of the new-product form (raw text)
    pub fn set_draft_price(&mut self, text: &str) {
        self.draft.price = text.to_string();
    }

    /// Submit the new-product form.
    ///
    /// On success the draft resets to the empty form, a success notice is
    /// set, and the catalog is re-fetched. On an API failure the server's
    /// error (or "Unauthorized") is surfaced and the draft is retained.
    pub async fn submit_create(&mut self) {
        let payload = self.draft.to_payload();
        match self.api.create(&payload).await {
            Ok(created) => {
                debug!(id = created.id, "product created");
                self.draft.reset();
                self.message = Some(StatusMessage::Success(
                    "Product created successfully!".to_string(),
                ));
                self.refresh().await;
            }
            Err(err) if err.is_transport() => {
                error!(error = %err, "Error creating product");
            }
            Err(err) => {
                self.message = Some(StatusMessage::Error(format!(
                    "Error: {}",
                    err.server_message("Unauthorized")
                )));
            }
        }
    }

    // ========== Edit ==========

    /// Select a product for editing, cloning its current store values.
    ///
    /// Selecting a different product while already editing replaces the
    /// working copy outright. Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: i64) {
        if let Some(product) = self.store.get(id) {
            self.session.begin(product);
        } else {
            debug!(id, "begin_edit ignored: product not in catalog");
        }
    }

    /// Edit the name of the product under edit
    pub fn edit_name(&mut self, text: &str) {
        self.session.set_name(text);
    }

    /// Edit the price of the product under edit (raw text, `NaN` on
    /// unparseable input)
    pub fn edit_price(&mut self, text: &str) {
        self.session.set_price(text);
    }

    /// Discard the working copy without any network call.
    ///
    /// A no-op when no product is under edit.
    pub fn cancel_edit(&mut self) {
        self.session.cancel();
    }

    /// Commit the working copy with a full-record PUT.
    ///
    /// On success the edit session ends and the catalog is re-fetched.
    /// On an API failure the message is set and the session is retained
    /// so the user can correct and retry. A no-op when idle.
    pub async fn submit_update(&mut self) {
        let Some(record) = self.session.draft().cloned() else {
            debug!("submit_update ignored: no edit session");
            return;
        };

        match self.api.update(&record).await {
            Ok(_) => {
                self.session.finish();
                self.refresh().await;
            }
            Err(err) if err.is_transport() => {
                error!(error = %err, "Error updating product");
            }
            Err(err) => {
                self.message = Some(StatusMessage::Error(format!(
                    "Error updating product: {}",
                    err.server_message_or_status()
                )));
            }
        }
    }

    // ========== Delete ==========

    /// Delete a product by id, then re-fetch the catalog on success
    pub async fn delete(&mut self, id: i64) {
        match self.api.delete(id).await {
            Ok(()) => {
                self.refresh().await;
            }
            Err(err) if err.is_transport() => {
                error!(error = %err, "Error deleting product");
            }
            Err(err) => {
                self.message = Some(StatusMessage::Error(format!(
                    "Error deleting product: {}",
                    err.server_message_or_status()
                )));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_renders_its_text() {
        let ok = StatusMessage::Success("Product created successfully!".to_string());
        let err = StatusMessage::Error("Error: invalid token".to_string());

        assert!(!ok.is_error());
        assert!(err.is_error());
        assert_eq!(ok.to_string(), "Product created successfully!");
        assert_eq!(err.text(), "Error: invalid token");
    }
}
