use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use uuid::Uuid;

use foodcart_auth_types::token::issue_access_token;

use crate::domain::repository::{AccountRepository, VendorRepository};
use crate::domain::types::{Account, Vendor, VendorProfile, validate_registration};
use crate::error::ApiServiceError;

/// Result of a successful registration or login.
#[derive(Debug)]
pub struct AuthSession {
    pub token: String,
    /// Token expiry, seconds since UNIX epoch.
    pub expires_at: u64,
    pub vendor: Vendor,
}

fn hash_password(password: &str) -> Result<String, ApiServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ApiServiceError::Internal(anyhow::anyhow!("hash password: {e}")))
}

fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

// ── RegisterVendor ───────────────────────────────────────────────────────────

pub struct RegisterVendorInput {
    pub email: String,
    pub password: String,
    pub profile: VendorProfile,
}

pub struct RegisterVendorUseCase<A: AccountRepository> {
    pub accounts: A,
    pub jwt_secret: String,
    pub token_expiry_minutes: u64,
}

impl<A: AccountRepository> RegisterVendorUseCase<A> {
    pub async fn execute(
        &self,
        input: RegisterVendorInput,
    ) -> Result<AuthSession, ApiServiceError> {
        let email = input.email.trim().to_lowercase();

        let errors = validate_registration(&email, &input.password, &input.profile);
        if !errors.is_empty() {
            return Err(ApiServiceError::Validation(errors));
        }

        if self.accounts.find_by_email(&email).await?.is_some() {
            return Err(ApiServiceError::EmailInUse);
        }

        let account = Account {
            id: Uuid::now_v7(),
            email,
            password_hash: hash_password(&input.password)?,
            created_at: Utc::now(),
        };

        // Account + vendor land in one transaction; a failed vendor insert
        // never leaves an orphaned account behind.
        let vendor = self
            .accounts
            .create_with_vendor(&account, &input.profile)
            .await?;

        let (token, expires_at) = issue_access_token(
            account.id,
            &account.email,
            vendor.id,
            &self.jwt_secret,
            self.token_expiry_minutes,
        )
        .map_err(|e| ApiServiceError::Internal(e.into()))?;

        Ok(AuthSession {
            token,
            expires_at,
            vendor,
        })
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase<A: AccountRepository, V: VendorRepository> {
    pub accounts: A,
    pub vendors: V,
    pub jwt_secret: String,
    pub token_expiry_minutes: u64,
}

impl<A: AccountRepository, V: VendorRepository> LoginUseCase<A, V> {
    /// Unknown email, wrong password, and a credential with no linked vendor
    /// all collapse into the same `InvalidCredentials` — the response never
    /// reveals which factor failed.
    pub async fn execute(&self, input: LoginInput) -> Result<AuthSession, ApiServiceError> {
        let email = input.email.trim().to_lowercase();

        let account = self
            .accounts
            .find_by_email(&email)
            .await?
            .ok_or(ApiServiceError::InvalidCredentials)?;

        if !verify_password(&input.password, &account.password_hash) {
            return Err(ApiServiceError::InvalidCredentials);
        }

        let vendor = self
            .vendors
            .find_by_account(account.id)
            .await?
            .ok_or(ApiServiceError::InvalidCredentials)?;

        let (token, expires_at) = issue_access_token(
            account.id,
            &account.email,
            vendor.id,
            &self.jwt_secret,
            self.token_expiry_minutes,
        )
        .map_err(|e| ApiServiceError::Internal(e.into()))?;

        Ok(AuthSession {
            token,
            expires_at,
            vendor,
        })
    }
}
