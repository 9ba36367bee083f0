//! Checkout Integration Tests
//!
//! Runs whole checkouts through `run_checkout` against real and failing
//! order sinks, answering prompts from a script.
//!
//! These tests verify:
//! - A completed order is appended to the order file and clears the cart
//! - Empty carts never prompt and never persist
//! - Cancelling keeps the cart
//! - Persistence failures do not change the outcome

use cartui::cart::Cart;
use cartui::catalog::Catalog;
use cartui::checkout::{
    CheckoutError, CheckoutFlow, CheckoutOutcome, CheckoutStage, InputPrompt, MSG_INVALID_ADDRESS,
    MSG_INVALID_NAME, Prompter, run_checkout,
};
use cartui::error::{CartError, Result};
use cartui::order::OrderRecord;
use cartui::order_sink::{FileOrderSink, MemoryOrderSink, OrderSink};
use std::collections::VecDeque;
use std::io;
use tempfile::TempDir;

const ECHO_DOT: &str = "Amazon Echo Dot - $39";

// =============================================================================
// Helpers
// =============================================================================

/// Replays a fixed list of answers in prompt order, then dismisses
#[derive(Debug, Default)]
struct ScriptedPrompter {
    answers: VecDeque<String>,
    prompts: Vec<InputPrompt>,
    notices: Vec<String>,
}

impl ScriptedPrompter {
    fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(&mut self, prompt: InputPrompt) -> Option<String> {
        self.prompts.push(prompt);
        self.answers.pop_front()
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

/// Sink whose storage is always unavailable
struct BrokenSink {
    attempts: usize,
}

impl OrderSink for BrokenSink {
    fn append(&mut self, _record: &OrderRecord) -> Result<()> {
        self.attempts += 1;
        Err(CartError::Io(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "order file is read-only",
        )))
    }
}

fn cart_with(labels: &[&str]) -> Cart {
    let catalog = Catalog::seeded();
    let mut cart = Cart::new();
    cart.replace_with(&catalog, labels);
    cart
}

// =============================================================================
// Completed Checkout
// =============================================================================

#[test]
fn test_checkout_appends_to_order_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("order.txt");
    let mut sink = FileOrderSink::new(&path);
    let mut cart = cart_with(&[ECHO_DOT]);
    let mut prompter = ScriptedPrompter::new(["Jane", "1 Main St"]);

    let outcome = run_checkout(&mut cart, &mut sink, &mut prompter).unwrap();

    let CheckoutOutcome::Completed { record, persisted } = outcome else {
        panic!("expected a completed checkout");
    };
    assert!(persisted);
    assert_eq!(record.total_cost, 39);
    assert!(cart.is_empty());
    assert_eq!(prompter.prompts, [InputPrompt::Name, InputPrompt::Address]);

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "Order Summary:\n\
         Customer Name: Jane\n\
         Shipping Address: 1 Main St\n\
         Total Cost: $39\n\
         Selected Products:\n\
         Amazon Echo Dot - $39\n\
         \n"
    );
}

#[test]
fn test_orders_accumulate_in_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("order.txt");
    let mut sink = FileOrderSink::new(&path);

    for name in ["Alice", "Bob"] {
        let mut cart = cart_with(&[ECHO_DOT]);
        let mut prompter = ScriptedPrompter::new([name, "1 Main St"]);
        let outcome = run_checkout(&mut cart, &mut sink, &mut prompter).unwrap();
        assert!(outcome.is_completed());
    }

    let contents = std::fs::read_to_string(&path).unwrap();
    let alice = contents.find("Customer Name: Alice").unwrap();
    let bob = contents.find("Customer Name: Bob").unwrap();
    assert!(alice < bob);
    assert_eq!(contents.matches("Order Summary:").count(), 2);
}

#[test]
fn test_multi_item_total_and_listing() {
    let catalog = Catalog::seeded();
    let labels: Vec<String> = catalog.labels().into_iter().take(3).collect();
    let expected_total: u64 = catalog.list_all()[..3]
        .iter()
        .map(|p| u64::from(p.price()))
        .sum();

    let mut cart = Cart::new();
    cart.replace_with(&catalog, &labels);
    let mut sink = MemoryOrderSink::new();
    let mut prompter = ScriptedPrompter::new(["Jane", "1 Main St"]);

    let outcome = run_checkout(&mut cart, &mut sink, &mut prompter).unwrap();
    let CheckoutOutcome::Completed { record, .. } = outcome else {
        panic!("expected a completed checkout");
    };
    assert_eq!(record.total_cost, expected_total);
    assert_eq!(record.items, labels);
    assert!(sink.records()[0].ends_with(&format!("{}\n", labels[2])));
}

// =============================================================================
// Aborted Checkout
// =============================================================================

#[test]
fn test_empty_cart_never_prompts() {
    let mut cart = Cart::new();
    let mut sink = MemoryOrderSink::new();
    let mut prompter = ScriptedPrompter::new(["Jane", "1 Main St"]);

    let outcome = run_checkout(&mut cart, &mut sink, &mut prompter).unwrap();

    assert_eq!(outcome, CheckoutOutcome::CartEmpty);
    assert!(prompter.prompts.is_empty());
    assert!(sink.records().is_empty());
}

#[test]
fn test_cancel_at_name_keeps_cart() {
    let mut cart = cart_with(&[ECHO_DOT]);
    let mut sink = MemoryOrderSink::new();
    let mut prompter = ScriptedPrompter::new(Vec::<String>::new());

    let outcome = run_checkout(&mut cart, &mut sink, &mut prompter).unwrap();

    assert_eq!(outcome, CheckoutOutcome::Cancelled);
    assert_eq!(outcome.message(), None);
    assert_eq!(cart.labels(), [ECHO_DOT]);
    assert!(sink.records().is_empty());
}

#[test]
fn test_invalid_names_retry_until_valid() {
    let mut cart = cart_with(&[ECHO_DOT]);
    let mut sink = MemoryOrderSink::new();
    let mut prompter = ScriptedPrompter::new(["", "John3", "O'Brien", "Jane", "1 Main St"]);

    let outcome = run_checkout(&mut cart, &mut sink, &mut prompter).unwrap();

    assert!(outcome.is_completed());
    assert_eq!(prompter.notices, [MSG_INVALID_NAME; 3]);
    assert_eq!(prompter.prompts.len(), 5);
}

#[test]
fn test_blank_address_aborts_without_retry() {
    let mut cart = cart_with(&[ECHO_DOT]);
    let mut sink = MemoryOrderSink::new();
    let mut prompter = ScriptedPrompter::new(["Jane", "  ", "1 Main St"]);

    let outcome = run_checkout(&mut cart, &mut sink, &mut prompter).unwrap();

    assert_eq!(outcome, CheckoutOutcome::InvalidAddress);
    assert_eq!(prompter.prompts.len(), 2);
    assert_eq!(cart.len(), 1);
    assert!(sink.records().is_empty());
}

#[test]
fn test_cancel_at_address_aborts() {
    let mut cart = cart_with(&[ECHO_DOT]);
    let mut sink = MemoryOrderSink::new();
    let mut prompter = ScriptedPrompter::new(["Jane"]);

    let outcome = run_checkout(&mut cart, &mut sink, &mut prompter).unwrap();

    assert_eq!(outcome, CheckoutOutcome::InvalidAddress);
    assert_eq!(outcome.message(), Some(MSG_INVALID_ADDRESS));
    assert_eq!(prompter.prompts, [InputPrompt::Name, InputPrompt::Address]);
    assert_eq!(cart.labels(), [ECHO_DOT]);
    assert!(sink.records().is_empty());
}

// =============================================================================
// Persistence Failures
// =============================================================================

#[test]
fn test_failing_sink_still_completes() {
    let mut cart = cart_with(&[ECHO_DOT]);
    let mut sink = BrokenSink { attempts: 0 };
    let mut prompter = ScriptedPrompter::new(["Jane", "1 Main St"]);

    let outcome = run_checkout(&mut cart, &mut sink, &mut prompter).unwrap();

    match outcome {
        CheckoutOutcome::Completed { record, persisted } => {
            assert!(!persisted);
            assert_eq!(record.total_cost, 39);
        }
        other => panic!("expected a completed checkout, got {:?}", other),
    }
    assert_eq!(sink.attempts, 1);
    assert!(cart.is_empty());
}

#[test]
fn test_unwritable_order_file_still_completes() {
    let dir = TempDir::new().unwrap();
    let mut sink = FileOrderSink::new(dir.path().join("missing").join("order.txt"));
    let mut cart = cart_with(&[ECHO_DOT]);
    let mut prompter = ScriptedPrompter::new(["Jane", "1 Main St"]);

    let outcome = run_checkout(&mut cart, &mut sink, &mut prompter).unwrap();

    assert!(matches!(
        outcome,
        CheckoutOutcome::Completed {
            persisted: false,
            ..
        }
    ));
    assert!(cart.is_empty());
}

// =============================================================================
// Flow Driving
// =============================================================================

#[test]
fn test_submit_after_finish_is_an_error() {
    let mut cart = cart_with(&[ECHO_DOT]);
    let mut sink = MemoryOrderSink::new();

    let (mut flow, _) = CheckoutFlow::begin(&cart);
    flow.submit(Some("Jane"), &mut cart, &mut sink).unwrap();
    flow.submit(Some("1 Main St"), &mut cart, &mut sink).unwrap();
    assert_eq!(flow.stage(), CheckoutStage::Persisted);

    let err = flow
        .submit(Some("again"), &mut cart, &mut sink)
        .unwrap_err();
    assert_eq!(
        err,
        CheckoutError::AlreadyFinished {
            stage: CheckoutStage::Persisted
        }
    );
    assert_eq!(sink.records().len(), 1);
}
