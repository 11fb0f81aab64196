//! Catalog store
//!
//! The authoritative in-memory product list. The store is only ever
//! replaced wholesale from a successful list fetch; mutations never patch
//! it in place, so it cannot drift from the server by client-side
//! guesswork.

use shared::Product;

/// In-memory product catalog, source of truth for rendering
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    items: Vec<Product>,
    revision: u64,
}

impl CatalogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Products from the last successful fetch
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Look up a product by id
    pub fn get(&self, id: i64) -> Option<&Product> {
        self.items.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Monotonic counter bumped on every replacement.
    ///
    /// Renderers redraw when this changes; it stands in for the
    /// reference-identity check a reactive UI would do.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the entire list with a fetched result
    pub fn replace(&mut self, items: Vec<Product>) {
        self.items = items;
        self.revision += 1;
    }

    /// Clear the list (explicit empty fetch result)
    pub fn clear(&mut self) {
        self.replace(Vec::new());
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
    fn replace_swaps_whole_list_and_bumps_revision() {
        let mut store = CatalogStore::new();
        assert_eq!(store.revision(), 0);
        assert!(store.is_empty());

        store.replace(vec![product(1, "Pen", 1.5), product(2, "Mug", 5.0)]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.revision(), 1);

        store.replace(vec![product(2, "Mug", 5.0)]);
        assert_eq!(store.len(), 1);
        assert!(store.get(1).is_none());
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn clear_is_a_replacement() {
        let mut store = CatalogStore::new();
        store.replace(vec![product(1, "Pen", 1.5)]);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn get_finds_by_id() {
        let mut store = CatalogStore::new();
        store.replace(vec![product(3, "Mug", 5.0)]);
        assert_eq!(store.get(3).map(|p| p.name.as_str()), Some("Mug"));
    }
}
