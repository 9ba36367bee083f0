//! Product catalog
//!
//! The catalog is seeded once at startup and never changes afterwards.
//! Products are reference counted so the cart can point at the exact
//! catalog entries instead of holding copies.
//!
//! # Selection Identity
//!
//! A selection is resolved back to a product through its display label
//! (`"<name> - $<price>"`). Two products with the same name and price
//! render identically; the first one in catalog order wins.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// A purchasable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    /// Price in whole currency units
    price: u32,
    /// Units on hand, as listed in the catalog
    #[serde(default)]
    quantity: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, price: u32, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Label shown in selection lists and order records, e.g. `"iPad Pro - $1099"`.
    pub fn display_label(&self) -> String {
        format!("{} - ${}", self.name, self.price)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Built-in product list: (name, price, quantity)
const SEED_PRODUCTS: &[(&str, u32, u32)] = &[
    ("iPhone 12", 999, 50),
    ("Samsung Galaxy S21", 899, 30),
    ("Google Pixel 5", 699, 20),
    ("iPad Pro", 1099, 40),
    ("MacBook Pro", 1999, 15),
    ("Dell XPS 15", 1599, 25),
    ("Sony PlayStation 5", 499, 10),
    ("Xbox Series X", 499, 8),
    ("Nintendo Switch", 299, 50),
    ("Sony 65-Inch 4K Smart TV", 1299, 12),
    ("LG 55-Inch OLED TV", 1499, 18),
    ("Bose QuietComfort 35 II", 349, 30),
    ("Apple AirPods Pro", 249, 40),
    ("Fitbit Charge 4", 129, 60),
    ("Amazon Echo Dot", 39, 100),
];

/// Fixed, ordered list of products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Rc<Product>>,
}

impl Catalog {
    /// Build the built-in 15 product catalog.
    pub fn seeded() -> Self {
        Self::from_products(
            SEED_PRODUCTS
                .iter()
                .map(|&(name, price, quantity)| Product::new(name, price, quantity)),
        )
    }

    /// Build a catalog from any product list, keeping its order.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products.into_iter().map(Rc::new).collect(),
        }
    }

    /// All products in catalog order.
    pub fn list_all(&self) -> &[Rc<Product>] {
        &self.products
    }

    /// First product whose display label equals `label`.
    pub fn find_by_display_label(&self, label: &str) -> Option<&Rc<Product>> {
        self.products.iter().find(|p| p.display_label() == label)
    }

    /// Display labels in catalog order.
    pub fn labels(&self) -> Vec<String> {
        self.products.iter().map(|p| p.display_label()).collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
