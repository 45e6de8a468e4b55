//! Capability check for push notification delivery.

use crate::error::PermissionError;
use crate::types::PushToken;

/// Outcome of a successful provider call.
///
/// Platform support is a variant, not a platform-identifier string: callers
/// branch on the capability rather than sniffing where they are running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Capability {
    /// Notifications can be delivered; the token routes them here.
    Supported(PushToken),

    /// This environment cannot receive push notifications (e.g. a
    /// simulator). Not an error: the screen stays usable, subscribe
    /// attempts fail validation with a missing token.
    Unsupported,
}

impl Capability {
    /// The token, if this environment is supported.
    pub fn token(&self) -> Option<&PushToken> {
        match self {
            Capability::Supported(token) => Some(token),
            Capability::Unsupported => None,
        }
    }
}

/// Source of push tokens.
///
/// Called once at startup. A `Denied` error is terminal for the session;
/// re-granting permission happens outside this crate.
pub trait TokenProvider {
    fn acquire(&self) -> Result<Capability, PermissionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_token_access() {
        let token = PushToken::new("tok");
        let supported = Capability::Supported(token.clone());
        assert_eq!(supported.token(), Some(&token));
        assert_eq!(Capability::Unsupported.token(), None);
    }
}
