// Domain-level errors for token issuance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenError {
    EmptySessionId,
    ZeroLifetime,
    EncodingFailure,
}

// Why a scanned token was rejected by validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    Malformed,
    SignatureInvalid,
    Expired,
}

impl RejectReason {
    // Stable reason strings surfaced in consumer-facing payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::Malformed => "malformed",
            RejectReason::SignatureInvalid => "signature_invalid",
            RejectReason::Expired => "expired",
        }
    }
}

// Decode-side failures reported by a token codec.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeFailure {
    Malformed,
    SignatureInvalid,
}

impl From<DecodeFailure> for RejectReason {
    fn from(failure: DecodeFailure) -> Self {
        match failure {
            DecodeFailure::Malformed => RejectReason::Malformed,
            DecodeFailure::SignatureInvalid => RejectReason::SignatureInvalid,
        }
    }
}

// Rejected coordinate construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordinateError {
    NonFinite,
    LatitudeOutOfRange,
    LongitudeOutOfRange,
}
