//! Subscribe screen controller.
//!
//! One explicit state struct owns everything the screen needs: the
//! foreground presentation config, the cached token, the raw field text,
//! and the registered flag. Event handlers mutate it in response to
//! discrete user actions and return a [`Notice`] for the UI to show.
//! There is no global state and no background work.

mod controller;

pub use controller::{Notice, SubscribeScreen};
