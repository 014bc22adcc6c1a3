use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiServiceError {
    #[error("validation failed")]
    Validation(Vec<String>),
    #[error("registration failed, email may already be in use")]
    EmailInUse,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("vendor not found")]
    VendorNotFound,
    #[error("menu item not found")]
    MenuItemNotFound,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::EmailInUse => "EMAIL_IN_USE",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::VendorNotFound => "VENDOR_NOT_FOUND",
            Self::MenuItemNotFound => "MENU_ITEM_NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) | Self::EmailInUse => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::VendorNotFound | Self::MenuItemNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = match &self {
            // Validation failures enumerate every violated constraint, not just the first.
            Self::Validation(errors) => serde_json::json!({
                "kind": self.kind(),
                "message": self.to_string(),
                "errors": errors,
            }),
            _ => serde_json::json!({
                "kind": self.kind(),
                "message": self.to_string(),
            }),
        };
        (status, axum::Json(body)).into_response()
    }
}
