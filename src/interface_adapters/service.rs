use std::sync::Arc;
use std::time::Duration;

use crate::domain::errors::TokenError;
use crate::frameworks::config::ServiceConfig;
use crate::frameworks::rotation::{spawn_rotation, TokenRotation};
use crate::interface_adapters::clock::SystemClock;
use crate::interface_adapters::codec::HmacTokenCodec;
use crate::interface_adapters::protocol::ValidateTokenResponse;
use crate::use_cases::format_remaining::FormatRemainingUseCase;
use crate::use_cases::issue_token::{IssueTokenUseCase, IssuedToken};
use crate::use_cases::validate_token::{TokenValidation, ValidateTokenUseCase};

// Production wiring of the token use cases behind one entry point.
//
// The session display issues (or rotates) through this service; the
// scan flow validates through it. Both sides share one signing secret.
pub struct AttendanceTokenService {
    issuer: Arc<IssueTokenUseCase<SystemClock, HmacTokenCodec>>,
    validator: ValidateTokenUseCase<SystemClock, HmacTokenCodec>,
    refresh_interval: Duration,
}

impl AttendanceTokenService {
    pub fn from_config(config: &ServiceConfig) -> Self {
        let codec = HmacTokenCodec::new(config.token_secret.as_bytes());
        let issuer = Arc::new(IssueTokenUseCase {
            clock: SystemClock,
            codec: codec.clone(),
            lifetime_seconds: config.token_lifetime_seconds,
        });
        let validator = ValidateTokenUseCase {
            clock: SystemClock,
            codec,
        };

        Self {
            issuer,
            validator,
            refresh_interval: config.refresh_interval(),
        }
    }

    pub fn issue(&self, session_id: &str) -> Result<IssuedToken, TokenError> {
        self.issuer.execute(session_id)
    }

    pub fn issue_with_lifetime(
        &self,
        session_id: &str,
        lifetime_seconds: u64,
    ) -> Result<IssuedToken, TokenError> {
        self.issuer.execute_with_lifetime(session_id, lifetime_seconds)
    }

    pub fn validate(&self, token: &str) -> TokenValidation {
        self.validator.execute(token)
    }

    pub fn validation_report(&self, token: &str) -> ValidateTokenResponse {
        self.validator.execute(token).into()
    }

    pub fn format_remaining(&self, token: &str) -> String {
        let formatter = FormatRemainingUseCase {
            validator: ValidateTokenUseCase {
                clock: SystemClock,
                codec: self.validator.codec.clone(),
            },
        };
        formatter.execute(token)
    }

    // Start re-issuing a display token for one session on the
    // configured cadence. Must be called from within a tokio runtime.
    pub fn start_rotation(&self, session_id: &str) -> Result<TokenRotation, TokenError> {
        spawn_rotation(
            self.issuer.clone(),
            session_id.to_string(),
            self.refresh_interval,
        )
    }
}
