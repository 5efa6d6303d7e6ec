//! Caller identity seam.
//!
//! # Responsibility
//! - Define the caller identity type threaded through every service call.
//! - Provide the contract for resolving a request credential to a caller.
//!
//! # Invariants
//! - Services only ever see an already-authenticated `UserId`, never a raw
//!   credential.
//! - Identity resolution has no access to board/column/task storage.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque identity of an authenticated caller.
///
/// Users are not stored by this core; the identity provider is the source of
/// truth for who exists.
pub type UserId = Uuid;

/// Errors from identity resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No caller identity could be established for the request.
    Unauthenticated,
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "request is not authenticated"),
        }
    }
}

impl Error for AuthError {}

/// Contract for resolving one request credential to a caller identity.
///
/// Token issuance and user registration live behind this seam and are out of
/// scope for the core.
pub trait IdentityProvider {
    /// Resolves a request credential to an authenticated caller.
    fn authenticate(&self, credential: &str) -> Result<UserId, AuthError>;
}

/// Static token-to-user table, used by tests and local probes.
#[derive(Debug, Default)]
pub struct TokenTableProvider {
    tokens: HashMap<String, UserId>,
}

impl TokenTableProvider {
    /// Creates an empty token table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a credential for an existing caller identity.
    pub fn register(&mut self, credential: impl Into<String>, user: UserId) {
        self.tokens.insert(credential.into(), user);
    }
}

impl IdentityProvider for TokenTableProvider {
    fn authenticate(&self, credential: &str) -> Result<UserId, AuthError> {
        self.tokens
            .get(credential)
            .copied()
            .ok_or(AuthError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthError, IdentityProvider, TokenTableProvider};
    use uuid::Uuid;

    #[test]
    fn known_token_resolves_to_registered_user() {
        let user = Uuid::new_v4();
        let mut provider = TokenTableProvider::new();
        provider.register("token-a", user);

        assert_eq!(provider.authenticate("token-a"), Ok(user));
    }

    #[test]
    fn unknown_token_is_unauthenticated() {
        let provider = TokenTableProvider::new();
        assert_eq!(
            provider.authenticate("missing"),
            Err(AuthError::Unauthenticated)
        );
    }
}
