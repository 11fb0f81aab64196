//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
///
/// The id is server-assigned and immutable once created. No currency or
/// locale semantics attach to `price`; it is a plain floating-point value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

/// Create/update product payload
///
/// Sent as the JSON body of `POST /product` and `PUT /product/{id}`.
/// `price` is whatever the form produced, including non-finite values;
/// serde_json encodes those as `null` and the server rejects them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub price: f64,
}

impl From<&Product> for ProductPayload {
    fn from(p: &Product) -> Self {
        ProductPayload {
            name: p.name.clone(),
            price: p.price,
        }
    }
}
