use uuid::Uuid;

use crate::domain::entities::TokenClaims;
use crate::domain::errors::TokenError;
use crate::domain::ports::{Clock, TokenCodec};

// Default validity window for display tokens (in seconds).
pub const DEFAULT_LIFETIME_SECONDS: u64 = 300;

// Token returned by the issue use case.
#[derive(Clone, Debug)]
pub struct IssuedToken {
    pub token: String,
    pub session_id: String,
    pub issued_at: u64,
    pub expires_at: u64,
}

// Token issuance use case with injected dependencies.
pub struct IssueTokenUseCase<C, K> {
    pub clock: C,
    pub codec: K,
    pub lifetime_seconds: u64,
}

impl<C, K> IssueTokenUseCase<C, K>
where
    C: Clock,
    K: TokenCodec,
{
    pub fn execute(&self, session_id: &str) -> Result<IssuedToken, TokenError> {
        self.execute_with_lifetime(session_id, self.lifetime_seconds)
    }

    pub fn execute_with_lifetime(
        &self,
        session_id: &str,
        lifetime_seconds: u64,
    ) -> Result<IssuedToken, TokenError> {
        if session_id.trim().is_empty() {
            return Err(TokenError::EmptySessionId);
        }
        if lifetime_seconds == 0 {
            // A zero lifetime would mint a token that is already expired.
            return Err(TokenError::ZeroLifetime);
        }

        let issued_at = self.clock.now_epoch_seconds();
        let expires_at = issued_at + lifetime_seconds;

        let claims = TokenClaims {
            session_id: session_id.to_string(),
            issued_at,
            expires_at,
            nonce: Uuid::new_v4().to_string(),
        };

        let token = self
            .codec
            .encode(&claims)
            .map_err(|_| TokenError::EncodingFailure)?;

        Ok(IssuedToken {
            token,
            session_id: claims.session_id,
            issued_at,
            expires_at,
        })
    }
}
