use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use foodcart_auth_types::token::TokenIdentity;

use crate::domain::types::VendorProfile;
use crate::error::ApiServiceError;
use crate::handlers::vendor::{VendorResponse, vendor_response};
use crate::state::AppState;
use crate::usecase::auth::{
    AuthSession, LoginInput, LoginUseCase, RegisterVendorInput, RegisterVendorUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    /// Token expiry, seconds since UNIX epoch.
    pub expires: u64,
    pub vendor: VendorResponse,
}

fn auth_response(session: AuthSession) -> AuthResponse {
    AuthResponse {
        token: session.token,
        expires: session.expires_at,
        vendor: vendor_response(session.vendor),
    }
}

// ── POST /api/auth/register ──────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub location: String,
    pub specialty: Option<String>,
    pub whats_app_number: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiServiceError> {
    let usecase = RegisterVendorUseCase {
        accounts: state.account_repo(),
        jwt_secret: state.jwt_secret.clone(),
        token_expiry_minutes: state.token_expiry_minutes,
    };
    let session = usecase
        .execute(RegisterVendorInput {
            email: body.email,
            password: body.password,
            profile: VendorProfile {
                name: body.name,
                location: body.location,
                specialty: body.specialty,
                whatsapp_number: body.whats_app_number,
            },
        })
        .await?;
    Ok(Json(auth_response(session)))
}

// ── POST /api/auth/login ─────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiServiceError> {
    let usecase = LoginUseCase {
        accounts: state.account_repo(),
        vendors: state.vendor_repo(),
        jwt_secret: state.jwt_secret.clone(),
        token_expiry_minutes: state.token_expiry_minutes,
    };
    let session = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(auth_response(session)))
}

// ── GET /api/auth/me ─────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub account_id: String,
    pub email: String,
    pub vendor_id: i32,
}

/// Echo the verified token identity — lets a client confirm its bearer
/// token is still accepted.
pub async fn me(identity: TokenIdentity) -> Json<MeResponse> {
    Json(MeResponse {
        account_id: identity.account_id.to_string(),
        email: identity.email,
        vendor_id: identity.vendor_id,
    })
}
