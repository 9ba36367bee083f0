//! Shopping cart
//!
//! The cart holds shared references to catalog products. It is replaced
//! wholesale whenever the browse dialog is confirmed and emptied after a
//! successful checkout.

use crate::catalog::{Catalog, Product};
use std::collections::HashSet;
use std::rc::Rc;

/// The user's current selection, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<Rc<Product>>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cart with every catalog product whose label was selected.
    ///
    /// Items keep catalog order, not selection order. Labels that match no
    /// catalog product are dropped without error.
    pub fn replace_with<S: AsRef<str>>(&mut self, catalog: &Catalog, selected_labels: &[S]) {
        let selected: HashSet<&str> = selected_labels.iter().map(AsRef::as_ref).collect();

        self.items.clear();
        for product in catalog.list_all() {
            if selected.contains(product.display_label().as_str()) {
                self.items.push(Rc::clone(product));
            }
        }

        let unresolved = selected
            .iter()
            .filter(|label| catalog.find_by_display_label(label).is_none())
            .count();
        if unresolved > 0 {
            tracing::debug!("Ignored {} selection(s) with no catalog match", unresolved);
        }
        tracing::debug!("Cart replaced with {} item(s)", self.items.len());
    }

    /// Current items, read-only.
    pub fn contents(&self) -> &[Rc<Product>] {
        &self.items
    }

    /// Sum of item prices; 0 for an empty cart.
    pub fn total(&self) -> u64 {
        self.items.iter().map(|p| u64::from(p.price())).sum()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Display labels of the current items.
    pub fn labels(&self) -> Vec<String> {
        self.items.iter().map(|p| p.display_label()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn test_replace_keeps_catalog_order() {
        let catalog = Catalog::seeded();
        let mut cart = Cart::new();
        cart.replace_with(&catalog, &["Amazon Echo Dot - $39", "iPhone 12 - $999"]);

        assert_eq!(cart.labels(), vec!["iPhone 12 - $999", "Amazon Echo Dot - $39"]);
        assert_eq!(cart.total(), 1038);
    }

    #[test]
    fn test_replace_drops_unknown_labels() {
        let catalog = Catalog::seeded();
        let mut cart = Cart::new();
        cart.replace_with(&catalog, &["Flying Car - $1", "iPad Pro - $1099"]);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.contents()[0].name(), "iPad Pro");
    }

    #[test]
    fn test_replace_discards_previous_contents() {
        let catalog = Catalog::seeded();
        let mut cart = Cart::new();
        cart.replace_with(&catalog, &["iPad Pro - $1099"]);
        cart.replace_with(&catalog, &["Fitbit Charge 4 - $129"]);

        assert_eq!(cart.labels(), vec!["Fitbit Charge 4 - $129"]);

        let none: [&str; 0] = [];
        cart.replace_with(&catalog, &none);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_shares_catalog_products() {
        let catalog = Catalog::seeded();
        let mut cart = Cart::new();
        cart.replace_with(&catalog, &["MacBook Pro - $1999"]);

        let in_catalog = catalog
            .find_by_display_label("MacBook Pro - $1999")
            .expect("MacBook should be in the catalog");
        assert!(Rc::ptr_eq(&cart.contents()[0], in_catalog));
    }

    #[test]
    fn test_clear() {
        let catalog = Catalog::seeded();
        let mut cart = Cart::new();
        cart.replace_with(&catalog, &catalog.labels());
        assert_eq!(cart.len(), catalog.len());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }
}
