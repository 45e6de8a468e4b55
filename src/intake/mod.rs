//! Subscription intake: free text in, persistable record out.
//!
//! The workflow is three small steps, each a pure function:
//! - [`parse_list`] splits a comma-separated field into trimmed items
//! - [`validate`] turns the two raw fields plus an optional token into a
//!   [`FilterSet`](crate::types::FilterSet), or rejects with a specific,
//!   user-explainable [`IntakeError`](crate::error::IntakeError)
//! - [`build_record`] assembles the final
//!   [`SubscriptionRecord`](crate::types::SubscriptionRecord)
//!
//! # Example
//!
//! ```
//! use career_alerts::intake::{validate, build_record};
//! use career_alerts::types::{PushToken, Timestamp};
//!
//! let token = PushToken::new("ExponentPushToken[xyz]");
//! let filters = validate("Google, Meta", "new grad, 2026", Some(&token)).unwrap();
//! let record = build_record(token, filters, Timestamp::now());
//! assert!(record.active);
//! ```

mod parse;
mod validate;

pub use parse::parse_list;
pub use validate::{build_record, validate};
