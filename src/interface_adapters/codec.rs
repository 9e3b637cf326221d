use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::TokenClaims;
use crate::domain::errors::DecodeFailure;
use crate::domain::ports::TokenCodec;

// HMAC-signed token codec backed by HS256 JWTs.
//
// Expiry is not evaluated here; freshness is the validator's concern,
// so decode only answers "authentic and well-formed".
#[derive(Clone)]
pub struct HmacTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl HmacTokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }
}

impl TokenCodec for HmacTokenCodec {
    fn encode(&self, claims: &TokenClaims) -> Result<String, String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|err| err.to_string())
    }

    fn decode(&self, token: &str) -> Result<TokenClaims, DecodeFailure> {
        match decode::<TokenClaims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Ok(data.claims),
            Err(err) => {
                tracing::debug!(error = %err, "token decode failed");
                match err.kind() {
                    ErrorKind::InvalidSignature => Err(DecodeFailure::SignatureInvalid),
                    _ => Err(DecodeFailure::Malformed),
                }
            }
        }
    }
}
