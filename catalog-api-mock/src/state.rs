//! Mock server state

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use shared::Product;

/// In-memory product table plus the one token the mock accepts.
///
/// The mutex guards short synchronous sections only; handlers never hold
/// it across an await point.
#[derive(Debug)]
pub struct AppState {
    inner: Mutex<Table>,
    users: Mutex<HashMap<String, String>>,
    token: String,
    product_requests: AtomicU64,
    list_requests: AtomicU64,
}

#[derive(Debug, Default)]
struct Table {
    products: Vec<Product>,
    next_id: i64,
}

impl AppState {
    /// Create a state accepting the given bearer token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            inner: Mutex::new(Table {
                products: Vec::new(),
                next_id: 1,
            }),
            users: Mutex::new(HashMap::new()),
            token: token.into(),
            product_requests: AtomicU64::new(0),
            list_requests: AtomicU64::new(0),
        }
    }

    /// Record a request against any `/product` route
    pub fn count_product_request(&self) {
        self.product_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a list (`GET /product`) request
    pub fn count_list_request(&self) {
        self.list_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Total requests seen on `/product` routes (tests)
    pub fn product_requests(&self) -> u64 {
        self.product_requests.load(Ordering::Relaxed)
    }

    /// Total list fetches seen (tests)
    pub fn list_requests(&self) -> u64 {
        self.list_requests.load(Ordering::Relaxed)
    }

    /// Register a user; `false` when the email is already taken
    pub fn register_user(&self, email: &str, password: &str) -> bool {
        let mut users = self.users.lock().expect("state mutex poisoned");
        if users.contains_key(email) {
            return false;
        }
        users.insert(email.to_string(), password.to_string());
        true
    }

    /// Check credentials against registered users
    pub fn authenticate(&self, email: &str, password: &str) -> bool {
        let users = self.users.lock().expect("state mutex poisoned");
        users.get(email).is_some_and(|p| p == password)
    }

    /// The bearer token this mock accepts
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Whether the presented token matches
    pub fn token_matches(&self, presented: &str) -> bool {
        presented == self.token
    }

    /// Snapshot of all products
    pub fn list(&self) -> Vec<Product> {
        self.inner.lock().expect("state mutex poisoned").products.clone()
    }

    /// Insert a product, assigning the next id
    pub fn insert(&self, name: String, price: f64) -> Product {
        let mut table = self.inner.lock().expect("state mutex poisoned");
        let product = Product {
            id: table.next_id,
            name,
            price,
        };
        table.next_id += 1;
        table.products.push(product.clone());
        product
    }

    /// Replace a product's fields; `None` when the id is unknown
    pub fn update(&self, id: i64, name: String, price: f64) -> Option<Product> {
        let mut table = self.inner.lock().expect("state mutex poisoned");
        let product = table.products.iter_mut().find(|p| p.id == id)?;
        product.name = name;
        product.price = price;
        Some(product.clone())
    }

    /// Remove a product by id; `false` when the id is unknown
    pub fn remove(&self, id: i64) -> bool {
        let mut table = self.inner.lock().expect("state mutex poisoned");
        let before = table.products.len();
        table.products.retain(|p| p.id != id);
        table.products.len() != before
    }

    /// Seed the table directly (tests)
    pub fn seed(&self, products: Vec<Product>) {
        let mut table = self.inner.lock().expect("state mutex poisoned");
        table.next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        table.products = products;
    }
}
