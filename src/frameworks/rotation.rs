use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domain::errors::TokenError;
use crate::domain::ports::{Clock, TokenCodec};
use crate::use_cases::issue_token::{IssueTokenUseCase, IssuedToken};

// Handle for a running display-token rotation loop.
//
// Dropping the handle tears the loop down; previously issued tokens
// stay valid until their own expiry.
pub struct TokenRotation {
    current_rx: watch::Receiver<IssuedToken>,
    task: JoinHandle<()>,
}

impl TokenRotation {
    // Most recently published token.
    pub fn current(&self) -> IssuedToken {
        self.current_rx.borrow().clone()
    }

    // Additional receiver for display surfaces that track refreshes.
    pub fn subscribe(&self) -> watch::Receiver<IssuedToken> {
        self.current_rx.clone()
    }

    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for TokenRotation {
    fn drop(&mut self) {
        self.task.abort();
    }
}

// Re-issue a display token for one session on a fixed cadence.
//
// Must be called from within a tokio runtime. The initial token is
// issued synchronously so bad input fails before any task is spawned.
pub fn spawn_rotation<C, K>(
    issuer: Arc<IssueTokenUseCase<C, K>>,
    session_id: String,
    refresh_interval: Duration,
) -> Result<TokenRotation, TokenError>
where
    C: Clock + 'static,
    K: TokenCodec + 'static,
{
    if refresh_interval.is_zero() {
        // tokio::time::interval panics on a zero period.
        return Err(TokenError::ZeroLifetime);
    }

    let initial = issuer.execute(&session_id)?;
    let (current_tx, current_rx) = watch::channel(initial);

    tracing::info!(session_id = %session_id, "token rotation started");

    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(refresh_interval);
        // The first tick completes immediately; the initial token is
        // already published.
        interval.tick().await;

        loop {
            interval.tick().await;

            match issuer.execute(&session_id) {
                Ok(token) => {
                    tracing::debug!(
                        session_id = %token.session_id,
                        expires_at = token.expires_at,
                        "rotated display token"
                    );
                    if current_tx.send(token).is_err() {
                        // Every receiver is gone; nothing left to display.
                        break;
                    }
                }
                Err(err) => {
                    tracing::warn!(error = ?err, "token refresh failed");
                }
            }
        }
    });

    Ok(TokenRotation { current_rx, task })
}
