//! # Career Alerts
//!
//! Subscription intake for a push-notification job-alert product: two
//! comma-separated text filters plus a device push token become a
//! validated subscription document in an append-only store.
//!
//! ## Core Concepts
//!
//! - **Intake**: pure parse/validate/assemble pipeline for the form fields
//! - **Provider**: one-shot capability check yielding a push token (or not)
//! - **Store**: opaque append-only sink for subscription records
//! - **Screen**: explicit state struct driving the UI event flow
//!
//! ## Example
//!
//! ```
//! use career_alerts::{
//!     ForegroundPresentation, InMemoryStore, Notice, SubscribeScreen,
//! };
//! use career_alerts::provider::FixedTokenProvider;
//!
//! let mut screen = SubscribeScreen::new(ForegroundPresentation::default());
//! let provider = FixedTokenProvider::new("ExponentPushToken[example]");
//! screen.on_startup(&provider);
//!
//! screen.set_companies("Google, Anthropic");
//! screen.set_keywords("new grad, 2026");
//!
//! let store = InMemoryStore::new();
//! assert!(matches!(screen.on_subscribe(&store), Notice::Subscribed(_)));
//! ```

pub mod error;
pub mod intake;
pub mod provider;
pub mod screen;
pub mod store;
pub mod types;

// Re-exports
pub use error::{IntakeError, PermissionError, Result, StoreError};
pub use intake::{build_record, parse_list, validate};
pub use provider::{Capability, TokenProvider};
pub use screen::{Notice, SubscribeScreen};
pub use store::{InMemoryStore, JournalConfig, JournalStore, SubscriptionStore};
pub use types::*;
