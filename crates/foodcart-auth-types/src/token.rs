//! JWT issuance and validation.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller identity extracted from a validated access token.
///
/// Produced once by [`validate_access_token`]; handlers and usecases only
/// ever see this typed struct, never raw claims.
#[derive(Debug, Clone)]
pub struct TokenIdentity {
    pub account_id: Uuid,
    pub email: String,
    pub vendor_id: i32,
}

/// Errors returned by [`validate_access_token`].
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
}

/// JWT claims payload.
///
/// `sub` carries the account id (UUID string), `vendor_id` the vendor row
/// linked to that account, `jti` a unique token id.
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Account ID (UUID string).
    pub sub: String,
    /// Account email.
    pub email: String,
    /// Vendor row linked to the account.
    pub vendor_id: i32,
    /// Unique token identifier.
    pub jti: String,
    /// Issued-at timestamp (seconds since UNIX epoch).
    pub iat: u64,
    /// Expiration timestamp (seconds since UNIX epoch).
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Sign an access token for the given account/vendor pair.
///
/// Returns the encoded token and its expiry (seconds since UNIX epoch).
pub fn issue_access_token(
    account_id: Uuid,
    email: &str,
    vendor_id: i32,
    secret: &str,
    expiry_minutes: u64,
) -> Result<(String, u64), jsonwebtoken::errors::Error> {
    let iat = now_secs();
    let exp = iat + expiry_minutes * 60;
    let claims = JwtClaims {
        sub: account_id.to_string(),
        email: email.to_owned(),
        vendor_id,
        jti: Uuid::new_v4().to_string(),
        iat,
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok((token, exp))
}

/// Decode and validate a JWT, returning raw claims.
///
/// Validation: HS256, exp checked, required claims: `exp` + `sub`.
/// Default leeway = 60s — tolerates clock skew between issuer and client.
fn decode_jwt(token: &str, secret: &str) -> Result<JwtClaims, AuthError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature
        | jsonwebtoken::errors::ErrorKind::InvalidEcdsaKey
        | jsonwebtoken::errors::ErrorKind::InvalidRsaKey(_) => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    Ok(data.claims)
}

/// Validate a bearer token value, returning the parsed identity.
///
/// Checks signature and expiry before trusting any embedded claim.
pub fn validate_access_token(token: &str, secret: &str) -> Result<TokenIdentity, AuthError> {
    let claims = decode_jwt(token, secret)?;
    let account_id = claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| AuthError::Malformed)?;
    Ok(TokenIdentity {
        account_id,
        email: claims.email,
        vendor_id: claims.vendor_id,
    })
}
