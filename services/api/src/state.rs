use sea_orm::DatabaseConnection;

use foodcart_auth_types::identity::JwtSecretSource;

use crate::infra::db::{DbAccountRepository, DbMenuItemRepository, DbVendorRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub token_expiry_minutes: u64,
}

impl AppState {
    pub fn account_repo(&self) -> DbAccountRepository {
        DbAccountRepository {
            db: self.db.clone(),
        }
    }

    pub fn vendor_repo(&self) -> DbVendorRepository {
        DbVendorRepository {
            db: self.db.clone(),
        }
    }

    pub fn menu_repo(&self) -> DbMenuItemRepository {
        DbMenuItemRepository {
            db: self.db.clone(),
        }
    }
}

impl JwtSecretSource for AppState {
    fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
}
