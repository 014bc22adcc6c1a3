use foodcart_api::domain::types::VendorProfile;
use foodcart_api::error::ApiServiceError;
use foodcart_api::usecase::auth::{
    LoginInput, LoginUseCase, RegisterVendorInput, RegisterVendorUseCase,
};
use foodcart_auth_types::token::validate_access_token;

use crate::helpers::{InMemoryStore, TEST_JWT_SECRET};

fn register_usecase(store: &InMemoryStore) -> RegisterVendorUseCase<InMemoryStore> {
    RegisterVendorUseCase {
        accounts: store.clone(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        token_expiry_minutes: 60,
    }
}

fn login_usecase(store: &InMemoryStore) -> LoginUseCase<InMemoryStore, InMemoryStore> {
    LoginUseCase {
        accounts: store.clone(),
        vendors: store.clone(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        token_expiry_minutes: 60,
    }
}

fn taco_cart_registration() -> RegisterVendorInput {
    RegisterVendorInput {
        email: "a@b.com".to_string(),
        password: "secret1".to_string(),
        profile: VendorProfile {
            name: "Taco Cart".to_string(),
            location: "5th Ave".to_string(),
            specialty: None,
            whatsapp_number: "+15551234567".to_string(),
        },
    }
}

// ── Registration ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_register_vendor_closed_by_default() {
    let store = InMemoryStore::new();
    let session = register_usecase(&store)
        .execute(taco_cart_registration())
        .await
        .unwrap();

    assert!(!session.vendor.is_open);
    assert_eq!(session.vendor.name, "Taco Cart");
    assert!(!session.token.is_empty());
}

#[tokio::test]
async fn should_reject_second_registration_with_same_email() {
    let store = InMemoryStore::new();
    let usecase = register_usecase(&store);
    usecase.execute(taco_cart_registration()).await.unwrap();

    // Different profile, same email: still a conflict.
    let mut second = taco_cart_registration();
    second.profile.name = "Completely Different Cart".to_string();
    second.profile.location = "Other Street 1".to_string();

    let result = usecase.execute(second).await;
    assert!(matches!(result, Err(ApiServiceError::EmailInUse)));
}

#[tokio::test]
async fn should_register_atomically_without_orphaned_account() {
    let store = InMemoryStore::new();
    let session = register_usecase(&store)
        .execute(taco_cart_registration())
        .await
        .unwrap();

    // The account and vendor rows exist together and are linked.
    let vendor = store.vendor(session.vendor.id);
    assert_eq!(vendor.account_id, session.vendor.account_id);
}

// ── Login ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_login_with_token_matching_registered_vendor() {
    let store = InMemoryStore::new();
    let registered = register_usecase(&store)
        .execute(taco_cart_registration())
        .await
        .unwrap();

    let session = login_usecase(&store)
        .execute(LoginInput {
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
        })
        .await
        .unwrap();

    let identity = validate_access_token(&session.token, TEST_JWT_SECRET).unwrap();
    assert_eq!(identity.vendor_id, registered.vendor.id);
    assert_eq!(identity.email, "a@b.com");
}

#[tokio::test]
async fn should_return_identical_error_for_every_login_failure() {
    let store = InMemoryStore::new();
    register_usecase(&store)
        .execute(taco_cart_registration())
        .await
        .unwrap();

    let usecase = login_usecase(&store);

    let wrong_password = usecase
        .execute(LoginInput {
            email: "a@b.com".to_string(),
            password: "not-the-password".to_string(),
        })
        .await
        .unwrap_err();
    let unknown_email = usecase
        .execute(LoginInput {
            email: "nobody@b.com".to_string(),
            password: "secret1".to_string(),
        })
        .await
        .unwrap_err();

    // Same variant, same kind, same message — nothing distinguishes the causes.
    for error in [&wrong_password, &unknown_email] {
        assert!(matches!(error, ApiServiceError::InvalidCredentials));
        assert_eq!(error.kind(), "INVALID_CREDENTIALS");
        assert_eq!(error.to_string(), "invalid email or password");
    }
}

#[tokio::test]
async fn should_reject_login_for_account_without_vendor() {
    // Construct an account with no linked vendor by using an empty vendor
    // store while the account store holds the registration.
    let accounts = InMemoryStore::new();
    register_usecase(&accounts)
        .execute(taco_cart_registration())
        .await
        .unwrap();

    let vendorless = LoginUseCase {
        accounts: accounts.clone(),
        vendors: InMemoryStore::new(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        token_expiry_minutes: 60,
    };
    let result = vendorless
        .execute(LoginInput {
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
        })
        .await;
    assert!(matches!(result, Err(ApiServiceError::InvalidCredentials)));
}
