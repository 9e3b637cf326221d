use crate::domain::entities::TokenClaims;
use crate::domain::errors::DecodeFailure;

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now_epoch_seconds(&self) -> u64;
}

// Port for encoding and decoding signed attendance tokens.
//
// Encode and decode must form a matched pair: decode accepts exactly
// the strings produced by encode under the same signing secret.
pub trait TokenCodec: Send + Sync {
    fn encode(&self, claims: &TokenClaims) -> Result<String, String>;
    fn decode(&self, token: &str) -> Result<TokenClaims, DecodeFailure>;
}
