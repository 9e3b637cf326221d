use serde::Serialize;

use crate::use_cases::issue_token::IssuedToken;
use crate::use_cases::validate_token::TokenValidation;

// Payload handed to the session display after issuing a token.
#[derive(Debug, Serialize)]
pub struct IssueTokenResponse {
    pub token: String,
    pub session_id: String,
    pub expires_at: u64,
}

impl From<IssuedToken> for IssueTokenResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            token: issued.token,
            session_id: issued.session_id,
            expires_at: issued.expires_at,
        }
    }
}

// Payload handed to the scan flow after validating a token.
#[derive(Debug, Serialize)]
pub struct ValidateTokenResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

impl From<TokenValidation> for ValidateTokenResponse {
    fn from(validation: TokenValidation) -> Self {
        match validation {
            TokenValidation::Valid {
                session_id,
                expires_in_seconds,
            } => Self {
                valid: true,
                session_id: Some(session_id),
                expires_in_seconds: Some(expires_in_seconds),
                reason: None,
            },
            TokenValidation::Rejected { reason } => Self {
                valid: false,
                session_id: None,
                expires_in_seconds: None,
                reason: Some(reason.as_str()),
            },
        }
    }
}
