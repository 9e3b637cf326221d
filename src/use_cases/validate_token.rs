use crate::domain::errors::RejectReason;
use crate::domain::ports::{Clock, TokenCodec};

// Outcome of validating a scanned token.
#[derive(Clone, Debug)]
pub enum TokenValidation {
    Valid {
        session_id: String,
        expires_in_seconds: u64,
    },
    Rejected {
        reason: RejectReason,
    },
}

impl TokenValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, TokenValidation::Valid { .. })
    }

    pub fn session_id(&self) -> Option<&str> {
        match self {
            TokenValidation::Valid { session_id, .. } => Some(session_id),
            TokenValidation::Rejected { .. } => None,
        }
    }

    pub fn expires_in_seconds(&self) -> Option<u64> {
        match self {
            TokenValidation::Valid {
                expires_in_seconds, ..
            } => Some(*expires_in_seconds),
            TokenValidation::Rejected { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            TokenValidation::Valid { .. } => None,
            TokenValidation::Rejected { reason } => Some(*reason),
        }
    }
}

// Token validation use case with injected dependencies.
pub struct ValidateTokenUseCase<C, K> {
    pub clock: C,
    pub codec: K,
}

impl<C, K> ValidateTokenUseCase<C, K>
where
    C: Clock,
    K: TokenCodec,
{
    // Fails closed: any decode or structural problem becomes a
    // rejection value, never an error surfaced to the caller.
    pub fn execute(&self, token: &str) -> TokenValidation {
        let claims = match self.codec.decode(token) {
            Ok(claims) => claims,
            Err(failure) => {
                return TokenValidation::Rejected {
                    reason: failure.into(),
                };
            }
        };

        // A token without a usable session id authorizes nothing.
        if claims.session_id.trim().is_empty() {
            return TokenValidation::Rejected {
                reason: RejectReason::Malformed,
            };
        }

        let now = self.clock.now_epoch_seconds();
        if claims.expires_at <= now {
            return TokenValidation::Rejected {
                reason: RejectReason::Expired,
            };
        }

        TokenValidation::Valid {
            session_id: claims.session_id,
            expires_in_seconds: claims.expires_at - now,
        }
    }
}
