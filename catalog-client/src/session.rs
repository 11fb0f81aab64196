//! Edit session
//!
//! At most one product is under edit at any time. The session holds a
//! field-level working copy of the product, mutated by field edits and
//! discarded on cancel or replaced on a successful commit.

use shared::{Product, ProductPayload};

/// Parse price input text as a floating-point number.
///
/// Invalid or empty input is not guarded: it propagates `NaN` into the
/// working copy, and submission sends the record as-is (serde_json puts
/// `null` on the wire for non-finite values, which the server rejects).
pub fn parse_price(input: &str) -> f64 {
    input.trim().parse().unwrap_or(f64::NAN)
}

/// The single in-flight edit
#[derive(Debug, Clone, Default)]
pub enum EditSession {
    /// No product is being edited
    #[default]
    Idle,
    /// One product under edit, identified by id, with its working copy
    Editing { id: i64, draft: Product },
}

impl EditSession {
    /// Start editing a product, cloning its current field values.
    ///
    /// Selecting a different product while already editing replaces the
    /// working copy outright.
    pub fn begin(&mut self, product: &Product) {
        *self = EditSession::Editing {
            id: product.id,
            draft: product.clone(),
        };
    }

    /// Discard the working copy. A no-op when already idle.
    pub fn cancel(&mut self) {
        *self = EditSession::Idle;
    }

    /// Exit the session after a successful commit
    pub fn finish(&mut self) {
        *self = EditSession::Idle;
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing { .. })
    }

    /// Id of the product under edit, if any
    pub fn editing_id(&self) -> Option<i64> {
        match self {
            EditSession::Editing { id, .. } => Some(*id),
            EditSession::Idle => None,
        }
    }

    /// The working copy, if a product is under edit
    pub fn draft(&self) -> Option<&Product> {
        match self {
            EditSession::Editing { draft, .. } => Some(draft),
            EditSession::Idle => None,
        }
    }

    /// Edit the name field of the working copy
    pub fn set_name(&mut self, text: &str) {
        if let EditSession::Editing { draft, .. } = self {
            draft.name = text.to_string();
        }
    }

    /// Edit the price field of the working copy from raw input text
    pub fn set_price(&mut self, text: &str) {
        if let EditSession::Editing { draft, .. } = self {
            draft.price = parse_price(text);
        }
    }
}

/// New-product form state.
///
/// Price is kept as raw input text until submission; coercion to a number
/// happens in [`ProductDraft::to_payload`].
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
}

impl ProductDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the empty form after a successful create
    pub fn reset(&mut self) {
        self.name.clear();
        self.price.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.price.is_empty()
    }

    /// Coerce the form into a create payload
    pub fn to_payload(&self) -> ProductPayload {
        ProductPayload {
            name: self.name.clone(),
            price: parse_price(&self.price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, price: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            price,
        }
    }

    #[test]
    fn begin_clones_current_values() {
        let mut session = EditSession::default();
        assert!(!session.is_editing());

        session.begin(&product(3, "Mug", 5.0));
        assert_eq!(session.editing_id(), Some(3));
        assert_eq!(session.draft().unwrap().name, "Mug");
        assert_eq!(session.draft().unwrap().price, 5.0);
    }

    #[test]
    fn field_edits_mutate_working_copy_only() {
        let original = product(3, "Mug", 5.0);
        let mut session = EditSession::default();
        session.begin(&original);

        session.set_name("Cup");
        session.set_price("7.25");

        assert_eq!(session.draft().unwrap().name, "Cup");
        assert_eq!(session.draft().unwrap().price, 7.25);
        assert_eq!(original.name, "Mug");
    }

    #[test]
    fn selecting_another_product_replaces_session() {
        let mut session = EditSession::default();
        session.begin(&product(1, "Pen", 1.5));
        session.set_name("Pencil");

        session.begin(&product(2, "Mug", 5.0));
        assert_eq!(session.editing_id(), Some(2));
        assert_eq!(session.draft().unwrap().name, "Mug");
    }

    #[test]
    fn cancel_discards_and_is_idempotent_when_idle() {
        let mut session = EditSession::default();
        session.begin(&product(3, "Mug", 5.0));
        session.cancel();
        assert!(!session.is_editing());

        // Cancelling again is a no-op
        session.cancel();
        assert!(!session.is_editing());
    }

    #[test]
    fn invalid_price_input_propagates_nan() {
        let mut session = EditSession::default();
        session.begin(&product(3, "Mug", 5.0));

        session.set_price("abc");
        assert!(session.draft().unwrap().price.is_nan());

        session.set_price("");
        assert!(session.draft().unwrap().price.is_nan());
    }

    #[test]
    fn edits_while_idle_are_ignored() {
        let mut session = EditSession::default();
        session.set_name("ghost");
        session.set_price("1.0");
        assert!(session.draft().is_none());
    }

    #[test]
    fn draft_resets_to_empty_form() {
        let mut draft = ProductDraft {
            name: "Pen".to_string(),
            price: "1.5".to_string(),
        };
        assert_eq!(draft.to_payload().price, 1.5);

        draft.reset();
        assert!(draft.is_empty());
        assert_eq!(draft.name, "");
        assert_eq!(draft.price, "");
    }

    #[test]
    fn draft_coerces_bad_price_to_nan() {
        let draft = ProductDraft {
            name: "Pen".to_string(),
            price: "not a number".to_string(),
        };
        assert!(draft.to_payload().price.is_nan());
    }
}
