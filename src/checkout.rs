//! Checkout State Machine
//!
//! Checkout is an explicit, step-driven state machine so that the same
//! logic can be driven by the TUI event loop, the headless CLI and tests.
//! The caller asks for the first step with [`CheckoutFlow::begin`] and feeds
//! each prompt answer back through [`CheckoutFlow::submit`].
//!
//! # Stage Flow
//!
//! ```text
//! AwaitingCart
//!     ↓           (empty cart → Cancelled, reported as CartEmpty)
//! AwaitingName ⟲  (invalid name → notice + re-prompt, no retry limit)
//!     ↓           (dismissed → Cancelled)
//! AwaitingAddress
//!     ↓           (dismissed or blank → Cancelled, reported as InvalidAddress)
//! Summarized
//!     ↓
//! Persisted
//! ```
//!
//! The name prompt retries until valid while the address prompt aborts on
//! the first bad answer. Both behaviours are intentional and kept as-is.
//!
//! # Persistence
//!
//! Persistence is best-effort. A failing [`OrderSink`] is logged and recorded
//! in the `persisted` flag of [`CheckoutOutcome::Completed`], but checkout still completes
//! and the cart is still cleared.

use crate::cart::Cart;
use crate::order::{CustomerName, OrderRecord, is_valid_address};
use crate::order_sink::OrderSink;
use strum::{Display, EnumIter};
use thiserror::Error;

/// Shown when checkout is started with nothing in the cart
pub const MSG_CART_EMPTY_CHECKOUT: &str =
    "Your cart is empty. Please add items to your cart before proceeding to checkout.";
pub const MSG_ENTER_NAME: &str = "Enter your name:";
pub const MSG_INVALID_NAME: &str =
    "Invalid name. Please enter a non-empty name without numbers or special characters.";
pub const MSG_ENTER_ADDRESS: &str = "Enter your shipping address:";
pub const MSG_INVALID_ADDRESS: &str = "Invalid shipping address. Please enter a valid address.";
pub const MSG_THANK_YOU: &str =
    "Thank you for your order! Your items will be shipped to the provided address.";

/// Checkout stages in sequential order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum CheckoutStage {
    /// Checking that the cart has something in it
    #[strum(serialize = "Awaiting cart")]
    AwaitingCart,
    /// Waiting for a valid customer name
    #[strum(serialize = "Awaiting name")]
    AwaitingName,
    /// Waiting for a shipping address
    #[strum(serialize = "Awaiting address")]
    AwaitingAddress,
    /// Order record rendered
    #[strum(serialize = "Summarized")]
    Summarized,
    /// Order handed to the sink and cart cleared (terminal)
    #[strum(serialize = "Persisted")]
    Persisted,
    /// Checkout ended without an order (terminal)
    #[strum(serialize = "Cancelled")]
    Cancelled,
}

impl CheckoutStage {
    /// Returns true if this is a terminal state (Persisted or Cancelled)
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Persisted | Self::Cancelled)
    }

    /// The input this stage waits for, if any
    pub const fn prompt(self) -> Option<InputPrompt> {
        match self {
            Self::AwaitingName => Some(InputPrompt::Name),
            Self::AwaitingAddress => Some(InputPrompt::Address),
            _ => None,
        }
    }
}

/// Input requested from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPrompt {
    Name,
    Address,
}

impl InputPrompt {
    pub const fn message(self) -> &'static str {
        match self {
            Self::Name => MSG_ENTER_NAME,
            Self::Address => MSG_ENTER_ADDRESS,
        }
    }
}

/// How a checkout ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Nothing to check out; no prompts were shown
    CartEmpty,
    /// The name prompt was dismissed
    Cancelled,
    /// The address prompt was dismissed or left blank
    InvalidAddress,
    /// Order placed. `persisted` is false when the sink failed; the cart is
    /// cleared either way.
    Completed { record: OrderRecord, persisted: bool },
}

impl CheckoutOutcome {
    /// User-facing message for this outcome. A cancelled checkout is silent.
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::CartEmpty => Some(MSG_CART_EMPTY_CHECKOUT),
            Self::Cancelled => None,
            Self::InvalidAddress => Some(MSG_INVALID_ADDRESS),
            Self::Completed { .. } => Some(MSG_THANK_YOU),
        }
    }

    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// What the driver should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutStep {
    /// Show `notice` (if any), then ask for `prompt`
    Prompt {
        prompt: InputPrompt,
        notice: Option<&'static str>,
    },
    /// Checkout is over
    Finished(CheckoutOutcome),
}

/// Errors from driving the flow incorrectly
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Input submitted after the flow reached a terminal stage
    #[error("Checkout already finished ({stage})")]
    AlreadyFinished { stage: CheckoutStage },
}

#[derive(Debug, Clone)]
enum FlowState {
    AwaitingName,
    AwaitingAddress(CustomerName),
    Finished(CheckoutStage),
}

/// A single checkout attempt.
///
/// # Example
///
/// ```
/// use cartui::cart::Cart;
/// use cartui::catalog::Catalog;
/// use cartui::checkout::{CheckoutFlow, CheckoutOutcome, CheckoutStep};
/// use cartui::order_sink::MemoryOrderSink;
///
/// let catalog = Catalog::seeded();
/// let mut cart = Cart::new();
/// cart.replace_with(&catalog, &["Amazon Echo Dot - $39"]);
/// let mut sink = MemoryOrderSink::new();
///
/// let (mut flow, _) = CheckoutFlow::begin(&cart);
/// flow.submit(Some("Jane"), &mut cart, &mut sink).unwrap();
/// let step = flow.submit(Some("1 Main St"), &mut cart, &mut sink).unwrap();
///
/// assert!(matches!(step, CheckoutStep::Finished(CheckoutOutcome::Completed { .. })));
/// assert!(cart.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    state: FlowState,
}

impl CheckoutFlow {
    /// Start a checkout against the current cart.
    ///
    /// An empty cart finishes immediately with [`CheckoutOutcome::CartEmpty`].
    pub fn begin(cart: &Cart) -> (Self, CheckoutStep) {
        if cart.is_empty() {
            tracing::info!("Checkout requested with an empty cart");
            let flow = Self {
                state: FlowState::Finished(CheckoutStage::Cancelled),
            };
            return (flow, CheckoutStep::Finished(CheckoutOutcome::CartEmpty));
        }

        tracing::info!("Checkout started with {} item(s)", cart.len());
        let flow = Self {
            state: FlowState::AwaitingName,
        };
        let step = CheckoutStep::Prompt {
            prompt: InputPrompt::Name,
            notice: None,
        };
        (flow, step)
    }

    /// Current stage of this checkout
    pub fn stage(&self) -> CheckoutStage {
        match &self.state {
            FlowState::AwaitingName => CheckoutStage::AwaitingName,
            FlowState::AwaitingAddress(_) => CheckoutStage::AwaitingAddress,
            FlowState::Finished(stage) => *stage,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.stage().is_terminal()
    }

    /// Feed the answer to the pending prompt. `None` means the prompt was
    /// dismissed.
    pub fn submit(
        &mut self,
        input: Option<&str>,
        cart: &mut Cart,
        sink: &mut dyn OrderSink,
    ) -> Result<CheckoutStep, CheckoutError> {
        match std::mem::replace(&mut self.state, FlowState::Finished(CheckoutStage::Cancelled)) {
            FlowState::AwaitingName => Ok(self.submit_name(input)),
            FlowState::AwaitingAddress(name) => Ok(self.submit_address(name, input, cart, sink)),
            FlowState::Finished(stage) => {
                self.state = FlowState::Finished(stage);
                Err(CheckoutError::AlreadyFinished { stage })
            }
        }
    }

    fn submit_name(&mut self, input: Option<&str>) -> CheckoutStep {
        let Some(input) = input else {
            tracing::info!("Checkout cancelled at name prompt");
            return CheckoutStep::Finished(CheckoutOutcome::Cancelled);
        };

        match CustomerName::parse(input) {
            Some(name) => {
                tracing::debug!("Customer name accepted");
                self.state = FlowState::AwaitingAddress(name);
                CheckoutStep::Prompt {
                    prompt: InputPrompt::Address,
                    notice: None,
                }
            }
            None => {
                tracing::debug!("Customer name rejected: {:?}", input);
                self.state = FlowState::AwaitingName;
                CheckoutStep::Prompt {
                    prompt: InputPrompt::Name,
                    notice: Some(MSG_INVALID_NAME),
                }
            }
        }
    }

    fn submit_address(
        &mut self,
        name: CustomerName,
        input: Option<&str>,
        cart: &mut Cart,
        sink: &mut dyn OrderSink,
    ) -> CheckoutStep {
        let address = match input {
            Some(address) if is_valid_address(address) => address,
            _ => {
                tracing::info!("Checkout aborted: missing shipping address");
                return CheckoutStep::Finished(CheckoutOutcome::InvalidAddress);
            }
        };

        self.state = FlowState::Finished(CheckoutStage::Summarized);
        let record = OrderRecord::from_cart(name, address, cart);
        tracing::info!(
            "Order summarized: {} item(s), total ${}",
            record.items.len(),
            record.total_cost
        );

        // Best-effort: the result is reported but never changes the flow
        let persisted = match sink.append(&record) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to persist order: {}", e);
                false
            }
        };

        cart.clear();
        self.state = FlowState::Finished(CheckoutStage::Persisted);
        CheckoutStep::Finished(CheckoutOutcome::Completed { record, persisted })
    }
}

/// Blocking source of prompt answers.
pub trait Prompter {
    /// Ask for one line of input; `None` when the prompt is dismissed.
    fn prompt(&mut self, prompt: InputPrompt) -> Option<String>;

    /// Show a message that needs no answer.
    fn notify(&mut self, message: &str);
}

/// Drive a checkout to completion through a [`Prompter`].
pub fn run_checkout(
    cart: &mut Cart,
    sink: &mut dyn OrderSink,
    prompter: &mut dyn Prompter,
) -> Result<CheckoutOutcome, CheckoutError> {
    let (mut flow, mut step) = CheckoutFlow::begin(cart);
    loop {
        match step {
            CheckoutStep::Finished(outcome) => return Ok(outcome),
            CheckoutStep::Prompt { prompt, notice } => {
                if let Some(notice) = notice {
                    prompter.notify(notice);
                }
                let answer = prompter.prompt(prompt);
                step = flow.submit(answer.as_deref(), cart, sink)?;
            }
        }
    }
}
