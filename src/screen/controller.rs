//! Screen state and event handlers.

use std::fmt;

use crate::error::IntakeError;
use crate::intake::{build_record, validate};
use crate::provider::{Capability, TokenProvider};
use crate::store::SubscriptionStore;
use crate::types::{ForegroundPresentation, PushToken, SubscriptionId, Timestamp};

/// User-visible outcome of a screen event.
///
/// Every error reaching the screen boundary becomes one of these; nothing
/// is swallowed. `Display` gives the exact text to show the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Token acquired; the subscribe button can be enabled.
    PushReady,

    /// This environment cannot receive push notifications.
    PushUnavailable,

    /// The user refused notification permission.
    PermissionDenied,

    /// A subscribe attempt failed validation; re-prompt.
    Rejected(IntakeError),

    /// The store write failed; the user may try again.
    SubscribeFailed,

    /// The subscription was written.
    Subscribed(SubscriptionId),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::PushReady => write!(f, "Push notifications enabled"),
            Notice::PushUnavailable => {
                write!(f, "Must use physical device for push notifications")
            }
            Notice::PermissionDenied => {
                write!(f, "Permission for notifications was denied")
            }
            Notice::Rejected(err) => write!(f, "{}", err),
            Notice::SubscribeFailed => {
                write!(f, "Failed to subscribe. Please try again.")
            }
            Notice::Subscribed(_) => {
                write!(f, "You are now subscribed to job alerts!")
            }
        }
    }
}

/// State for the subscription form screen.
///
/// Constructed once at startup, passed by reference to event handlers,
/// torn down implicitly on process exit.
#[derive(Debug)]
pub struct SubscribeScreen {
    presentation: ForegroundPresentation,
    token: Option<PushToken>,
    companies: String,
    keywords: String,
    registered: bool,
}

impl SubscribeScreen {
    pub fn new(presentation: ForegroundPresentation) -> Self {
        Self {
            presentation,
            token: None,
            companies: String::new(),
            keywords: String::new(),
            registered: false,
        }
    }

    /// One-time startup event: run the capability check and cache the
    /// result. A denied or unsupported outcome leaves the screen usable;
    /// subscribe attempts will fail validation until a token exists.
    pub fn on_startup(&mut self, provider: &dyn TokenProvider) -> Notice {
        match provider.acquire() {
            Ok(Capability::Supported(token)) => {
                self.token = Some(token);
                Notice::PushReady
            }
            Ok(Capability::Unsupported) => {
                tracing::warn!("push notifications unavailable in this environment");
                Notice::PushUnavailable
            }
            Err(err) => {
                tracing::warn!(error = %err, "push permission refused");
                Notice::PermissionDenied
            }
        }
    }

    /// Update the companies field (raw text, as typed).
    pub fn set_companies(&mut self, raw: impl Into<String>) {
        self.companies = raw.into();
    }

    /// Update the keywords field (raw text, as typed).
    pub fn set_keywords(&mut self, raw: impl Into<String>) {
        self.keywords = raw.into();
    }

    /// Subscribe button press: validate, assemble, write.
    ///
    /// Each press is an independent attempt; no retry state is kept and a
    /// second press before the first resolves would simply produce another
    /// store write.
    pub fn on_subscribe(&mut self, store: &dyn SubscriptionStore) -> Notice {
        let filters = match validate(&self.companies, &self.keywords, self.token.as_ref()) {
            Ok(filters) => filters,
            Err(err) => {
                tracing::warn!(error = %err, "subscribe attempt rejected");
                return Notice::Rejected(err);
            }
        };

        // validate() only succeeds with a token present.
        let Some(token) = self.token.clone() else {
            return Notice::Rejected(IntakeError::NoToken);
        };
        let record = build_record(token, filters, Timestamp::now());

        match store.create(&record) {
            Ok(id) => {
                self.registered = true;
                tracing::debug!(id = %id, "subscription created");
                Notice::Subscribed(id)
            }
            Err(err) => {
                tracing::warn!(error = %err, "subscription write failed");
                Notice::SubscribeFailed
            }
        }
    }

    /// Whether a token has been acquired (drives the button's enabled state).
    pub fn push_ready(&self) -> bool {
        self.token.is_some()
    }

    /// Whether a subscription has been written this session.
    pub fn registered(&self) -> bool {
        self.registered
    }

    /// Raw companies text, for the post-subscribe "Monitoring: ..." summary.
    pub fn monitoring(&self) -> &str {
        &self.companies
    }

    /// Foreground presentation config supplied at startup.
    pub fn presentation(&self) -> ForegroundPresentation {
        self.presentation
    }
}
