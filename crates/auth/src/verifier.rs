//! Bearer token verification.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The presented token is not valid.
    #[error("token rejected")]
    Rejected,
}

/// Decides whether a presented bearer token is valid.
///
/// The pipeline holds this as `Arc<dyn TokenVerifier>`: a verifier doing real
/// cryptographic work (signature and expiry checks) replaces the shared-secret
/// one without any change to the middleware contract.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<(), TokenError>;
}

/// Shared-secret verifier: the token must equal the configured secret.
#[derive(Debug, Clone)]
pub struct StaticTokenVerifier {
    secret: String,
}

impl StaticTokenVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl TokenVerifier for StaticTokenVerifier {
    fn verify(&self, token: &str) -> Result<(), TokenError> {
        if token == self.secret {
            Ok(())
        } else {
            Err(TokenError::Rejected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_token_is_accepted() {
        let verifier = StaticTokenVerifier::new("tok-123");
        assert!(verifier.verify("tok-123").is_ok());
    }

    #[test]
    fn non_matching_token_is_rejected() {
        let verifier = StaticTokenVerifier::new("tok-123");
        assert_eq!(verifier.verify("tok-456"), Err(TokenError::Rejected));
    }

    #[test]
    fn empty_token_is_rejected() {
        let verifier = StaticTokenVerifier::new("tok-123");
        assert_eq!(verifier.verify(""), Err(TokenError::Rejected));
    }
}
