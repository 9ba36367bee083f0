//! Order records
//!
//! An order exists only long enough to be rendered and handed to an
//! [`OrderSink`](crate::order_sink::OrderSink). The rendered text is the
//! durable form.

use crate::cart::Cart;
use std::fmt;

/// Customer name that passed checkout validation.
///
/// Valid names are non-empty after trimming and consist solely of ASCII
/// letters (`^[a-zA-Z]+$`). Surrounding whitespace is not stripped before the
/// letter check, so `" John"` is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerName(String);

impl CustomerName {
    pub fn parse(input: &str) -> Option<Self> {
        if is_valid_name(input) {
            Some(Self(input.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name rule used at the checkout name prompt.
pub fn is_valid_name(input: &str) -> bool {
    !input.trim().is_empty() && input.chars().all(|c| c.is_ascii_alphabetic())
}

/// Shipping address rule: anything that is not blank.
///
/// Blank means made up of ASCII control characters and spaces only. Other
/// Unicode whitespace such as U+00A0 counts as content.
pub fn is_valid_address(input: &str) -> bool {
    !input.trim_matches(|c: char| c <= ' ').is_empty()
}

/// A completed order, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub customer_name: CustomerName,
    pub shipping_address: String,
    pub total_cost: u64,
    pub items: Vec<String>,
}

impl OrderRecord {
    /// Snapshot the cart into a record. The address is kept as entered.
    pub fn from_cart(customer_name: CustomerName, shipping_address: &str, cart: &Cart) -> Self {
        Self {
            customer_name,
            shipping_address: shipping_address.to_string(),
            total_cost: cart.total(),
            items: cart.labels(),
        }
    }

    /// Header block: name, address and total.
    pub fn summary(&self) -> String {
        format!(
            "Order Summary:\nCustomer Name: {}\nShipping Address: {}\nTotal Cost: ${}\n",
            self.customer_name, self.shipping_address, self.total_cost
        )
    }

    /// Item block, one display label per line.
    pub fn item_listing(&self) -> String {
        let mut listing = String::from("Selected Products:\n");
        for label in &self.items {
            listing.push_str(label);
            listing.push('\n');
        }
        listing
    }

    /// Full record text as shown to the user and appended to storage.
    pub fn render(&self) -> String {
        format!("{}{}", self.summary(), self.item_listing())
    }
}

impl fmt::Display for OrderRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_name_validation_rejects() {
        for name in ["", " ", "John3", "John Smith", "O'Brien", " John", "Jöhn"] {
            assert!(!is_valid_name(name), "{:?} should be rejected", name);
            assert!(CustomerName::parse(name).is_none());
        }
    }

    #[test]
    fn test_name_validation_accepts() {
        for name in ["John", "anyletters", "X"] {
            assert!(is_valid_name(name), "{:?} should be accepted", name);
        }
        assert_eq!(
            CustomerName::parse("Jane").map(|n| n.to_string()),
            Some("Jane".to_string())
        );
    }

    #[test]
    fn test_address_validation() {
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("   \t"));
        assert!(is_valid_address("1 Main St"));
        assert!(!is_valid_address("\r\n\u{0}"));
        assert!(is_valid_address("\u{00A0}"));
    }

    #[test]
    fn test_render_layout() {
        let catalog = Catalog::seeded();
        let mut cart = Cart::new();
        cart.replace_with(&catalog, &["iPhone 12 - $999", "Amazon Echo Dot - $39"]);

        let name = CustomerName::parse("Jane").expect("valid name");
        let record = OrderRecord::from_cart(name, "1 Main St", &cart);

        assert_eq!(
            record.render(),
            "Order Summary:\n\
             Customer Name: Jane\n\
             Shipping Address: 1 Main St\n\
             Total Cost: $1038\n\
             Selected Products:\n\
             iPhone 12 - $999\n\
             Amazon Echo Dot - $39\n"
        );
    }

    #[test]
    fn test_address_kept_as_entered() {
        let name = CustomerName::parse("Jane").expect("valid name");
        let record = OrderRecord::from_cart(name, "  1 Main St ", &Cart::new());
        assert!(record.summary().contains("Shipping Address:   1 Main St \n"));
        assert_eq!(record.total_cost, 0);
    }
}
