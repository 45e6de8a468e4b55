//! Canned providers for tests and headless use.

use crate::error::PermissionError;
use crate::types::PushToken;

use super::capability::{Capability, TokenProvider};

/// Provider that always hands out the same token.
#[derive(Clone, Debug)]
pub struct FixedTokenProvider {
    token: PushToken,
}

impl FixedTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: PushToken::new(token),
        }
    }
}

impl TokenProvider for FixedTokenProvider {
    fn acquire(&self) -> Result<Capability, PermissionError> {
        Ok(Capability::Supported(self.token.clone()))
    }
}

/// Provider for environments without push support.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnsupportedProvider;

impl TokenProvider for UnsupportedProvider {
    fn acquire(&self) -> Result<Capability, PermissionError> {
        Ok(Capability::Unsupported)
    }
}

/// Provider that reports the user refused permission.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeniedProvider;

impl TokenProvider for DeniedProvider {
    fn acquire(&self) -> Result<Capability, PermissionError> {
        Err(PermissionError::Denied)
    }
}
