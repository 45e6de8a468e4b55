//! Push token acquisition.
//!
//! The platform permission flow is behind the [`TokenProvider`] trait:
//! one call at startup, returning either a usable token, an
//! [`Unsupported`](Capability::Unsupported) capability (simulator, web),
//! or a [`PermissionError`](crate::error::PermissionError) when the user
//! refuses. The screen caches whatever comes back; there is no re-poll.

mod capability;
mod stub;

pub use capability::{Capability, TokenProvider};
pub use stub::{DeniedProvider, FixedTokenProvider, UnsupportedProvider};
