use crate::domain::errors::RejectReason;
use crate::domain::ports::{Clock, TokenCodec};
use crate::use_cases::validate_token::{TokenValidation, ValidateTokenUseCase};

// Human-readable countdown for a displayed token.
pub struct FormatRemainingUseCase<C, K> {
    pub validator: ValidateTokenUseCase<C, K>,
}

impl<C, K> FormatRemainingUseCase<C, K>
where
    C: Clock,
    K: TokenCodec,
{
    pub fn execute(&self, token: &str) -> String {
        match self.validator.execute(token) {
            TokenValidation::Valid {
                expires_in_seconds, ..
            } => format_seconds(expires_in_seconds),
            TokenValidation::Rejected {
                reason: RejectReason::Expired,
            } => "Expired".to_string(),
            TokenValidation::Rejected { .. } => "Invalid".to_string(),
        }
    }
}

fn format_seconds(remaining: u64) -> String {
    if remaining < 60 {
        format!("{} seconds", remaining)
    } else {
        format!("{}m {}s", remaining / 60, remaining % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::issue_token::IssueTokenUseCase;
    use crate::use_cases::test_support::{FailureFlags, FakeCodec, FixedClock};

    fn issue_token(now: u64, lifetime_seconds: u64) -> String {
        let issuer = IssueTokenUseCase {
            clock: FixedClock(now),
            codec: FakeCodec::new(),
            lifetime_seconds,
        };
        issuer
            .execute("session-1")
            .expect("expected issuance to succeed")
            .token
    }

    fn formatter_at(now: u64) -> FormatRemainingUseCase<FixedClock, FakeCodec> {
        FormatRemainingUseCase {
            validator: ValidateTokenUseCase {
                clock: FixedClock(now),
                codec: FakeCodec::new(),
            },
        }
    }

    #[test]
    fn when_under_a_minute_remains_then_formats_as_seconds() {
        let token = issue_token(1_700_000_000, 45);

        assert_eq!(formatter_at(1_700_000_000).execute(&token), "45 seconds");
    }

    #[test]
    fn when_a_minute_or_more_remains_then_formats_as_minutes_and_seconds() {
        let token = issue_token(1_700_000_000, 250);

        assert_eq!(formatter_at(1_700_000_000).execute(&token), "4m 10s");
    }

    #[test]
    fn when_exactly_a_minute_remains_then_formats_as_minutes_and_seconds() {
        let token = issue_token(1_700_000_000, 60);

        assert_eq!(formatter_at(1_700_000_000).execute(&token), "1m 0s");
    }

    #[test]
    fn when_token_is_expired_then_returns_expired_sentinel() {
        let token = issue_token(1_700_000_000, 1);

        assert_eq!(formatter_at(1_700_000_010).execute(&token), "Expired");
    }

    #[test]
    fn when_token_is_malformed_then_returns_invalid_sentinel() {
        assert_eq!(formatter_at(1_700_000_000).execute("garbage"), "Invalid");
    }

    #[test]
    fn when_signature_does_not_verify_then_returns_invalid_sentinel() {
        let token = issue_token(1_700_000_000, 300);
        let formatter = FormatRemainingUseCase {
            validator: ValidateTokenUseCase {
                clock: FixedClock(1_700_000_000),
                codec: FakeCodec::new().with_failures(FailureFlags {
                    signature: true,
                    ..Default::default()
                }),
            },
        };

        assert_eq!(formatter.execute(&token), "Invalid");
    }
}
