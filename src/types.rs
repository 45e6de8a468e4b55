//! Core types for the subscription intake workflow.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Opaque token identifying a notification delivery target for one
/// device/app-install. Obtained once per session from a [`TokenProvider`]
/// and held in screen state until the process ends.
///
/// [`TokenProvider`]: crate::provider::TokenProvider
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PushToken(pub String);

impl PushToken {
    pub fn new(token: impl Into<String>) -> Self {
        PushToken(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens route notifications to a device; keep them out of logs.
impl fmt::Debug for PushToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head: String = self.0.chars().take(8).collect();
        write!(f, "PushToken({}...)", head)
    }
}

/// Unique identifier for a stored subscription (assigned by the store).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u64);

impl fmt::Debug for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubscriptionId({})", self.0)
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Microseconds since Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Current time.
    pub fn now() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards");
        Timestamp(duration.as_micros() as i64)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

/// Dedup key for a subscription (SHA-256 over the normalized token).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(pub [u8; 32]);

impl Fingerprint {
    /// Compute the fingerprint for a push token.
    pub fn of_token(token: &PushToken) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(token.as_str().trim().to_lowercase().as_bytes());
        Fingerprint(hasher.finalize().into())
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({}...)", &self.to_hex()[..8])
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Normalized matching criteria attached to a subscription.
///
/// All three lists are ordered as the user typed them; duplicates are kept.
/// `roles` is reserved for a future input surface and stays empty at intake.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    pub companies: Vec<String>,
    pub roles: Vec<String>,
    pub keywords: Vec<String>,
}

impl FilterSet {
    /// Whether the set satisfies the intake invariant (at least one company).
    pub fn is_valid(&self) -> bool {
        !self.companies.is_empty()
    }
}

/// A subscription document ready for persistence.
///
/// Created once per successful subscribe action and never mutated by this
/// crate afterwards. Field names match the document shape the store expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    pub push_token: PushToken,
    pub filters: FilterSet,
    pub active: bool,
    pub created_at: Timestamp,
}

impl SubscriptionRecord {
    /// Dedup key for this record, derived from the push token.
    ///
    /// Stores are append-only and do not enforce uniqueness; this gives a
    /// caller the material to do so if it wants one active subscription per
    /// device.
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of_token(&self.push_token)
    }
}

/// How notifications are presented while the app is foregrounded.
///
/// Supplied once at startup as a plain value; there is no runtime-registered
/// callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForegroundPresentation {
    pub show_alert: bool,
    pub play_sound: bool,
    pub set_badge: bool,
}

impl Default for ForegroundPresentation {
    fn default() -> Self {
        Self {
            show_alert: true,
            play_sound: true,
            set_badge: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_token_debug_redacts() {
        let token = PushToken::new("ExponentPushToken[abcdef123456]");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("abcdef123456"));
        assert!(debug.starts_with("PushToken("));
    }

    #[test]
    fn test_fingerprint_normalizes_token() {
        let a = Fingerprint::of_token(&PushToken::new("  Token-ABC "));
        let b = Fingerprint::of_token(&PushToken::new("token-abc"));
        assert_eq!(a, b);
        assert_eq!(a.to_hex().len(), 64);
    }

    #[test]
    fn test_filter_set_validity() {
        let mut filters = FilterSet::default();
        assert!(!filters.is_valid());
        filters.companies.push("Google".to_string());
        assert!(filters.is_valid());
    }

    #[test]
    fn test_record_document_shape() {
        let record = SubscriptionRecord {
            push_token: PushToken::new("tok"),
            filters: FilterSet {
                companies: vec!["Google".to_string()],
                roles: vec![],
                keywords: vec!["2026".to_string()],
            },
            active: true,
            created_at: Timestamp(42),
        };

        let doc = serde_json::to_value(&record).unwrap();
        assert_eq!(doc["push_token"], "tok");
        assert_eq!(doc["filters"]["companies"][0], "Google");
        assert_eq!(doc["filters"]["roles"].as_array().unwrap().len(), 0);
        assert_eq!(doc["active"], true);
        assert_eq!(doc["created_at"], 42);
    }

    #[test]
    fn test_default_presentation() {
        let p = ForegroundPresentation::default();
        assert!(p.show_alert);
        assert!(p.play_sound);
        assert!(!p.set_badge);
    }
}
