use crate::domain::entities::TokenClaims;
use crate::domain::errors::DecodeFailure;
use crate::domain::ports::{Clock, TokenCodec};

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) u64);

impl Clock for FixedClock {
    fn now_epoch_seconds(&self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub encode: bool,
    pub signature: bool,
}

// Unsigned JSON codec used as a fake in use-case tests.
#[derive(Clone, Default)]
pub(crate) struct FakeCodec {
    failures: FailureFlags,
}

impl FakeCodec {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }
}

impl TokenCodec for FakeCodec {
    fn encode(&self, claims: &TokenClaims) -> Result<String, String> {
        // Intentional failure hook used to verify error mapping behavior.
        if self.failures.encode {
            return Err("encode failed".to_string());
        }
        serde_json::to_string(claims).map_err(|err| err.to_string())
    }

    fn decode(&self, token: &str) -> Result<TokenClaims, DecodeFailure> {
        // Toggle used by negative-path tests to simulate a forged token.
        if self.failures.signature {
            return Err(DecodeFailure::SignatureInvalid);
        }
        serde_json::from_str(token).map_err(|_| DecodeFailure::Malformed)
    }
}
