use uuid::Uuid;

use foodcart_api::error::ApiServiceError;
use foodcart_api::usecase::vendor::{
    GetVendorUseCase, ListOpenVendorsUseCase, ListVendorsUseCase, UpdateVendorStatusUseCase,
};

use crate::helpers::InMemoryStore;

#[tokio::test]
async fn should_list_vendors_open_first_alphabetical_within_groups() {
    let store = InMemoryStore::new();
    store.seed_vendor("Zesty", false);
    store.seed_vendor("Momo Hut", true);
    store.seed_vendor("Arepas", false);
    store.seed_vendor("Bao Bros", true);

    let usecase = ListVendorsUseCase {
        vendors: store.clone(),
    };
    let vendors = usecase.execute().await.unwrap();

    let listing: Vec<_> = vendors
        .iter()
        .map(|v| (v.name.as_str(), v.is_open))
        .collect();
    assert_eq!(
        listing,
        vec![
            ("Bao Bros", true),
            ("Momo Hut", true),
            ("Arepas", false),
            ("Zesty", false),
        ]
    );
}

#[tokio::test]
async fn should_list_only_open_vendors_in_listing_order() {
    let store = InMemoryStore::new();
    store.seed_vendor("Zesty", false);
    store.seed_vendor("Momo Hut", true);
    store.seed_vendor("Bao Bros", true);

    let usecase = ListOpenVendorsUseCase {
        vendors: store.clone(),
    };
    let vendors = usecase.execute().await.unwrap();

    let names: Vec<_> = vendors.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Bao Bros", "Momo Hut"]);
}

#[tokio::test]
async fn should_return_detail_with_available_items_only() {
    let store = InMemoryStore::new();
    let vendor = store.seed_vendor("Bao Bros", true);
    store.seed_item(vendor.id, "Pork Bao", "Mains", true);
    store.seed_item(vendor.id, "Sold Out Special", "Mains", false);
    store.seed_item(vendor.id, "Iced Tea", "Drinks", true);

    let usecase = GetVendorUseCase {
        vendors: store.clone(),
        menu: store.clone(),
    };
    let detail = usecase.execute(vendor.id).await.unwrap();

    let names: Vec<_> = detail.menu_items.iter().map(|i| i.name.as_str()).collect();
    // Sorted by category then name; the unavailable item is absent.
    assert_eq!(names, vec!["Iced Tea", "Pork Bao"]);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_vendor() {
    let store = InMemoryStore::new();
    let usecase = GetVendorUseCase {
        vendors: store.clone(),
        menu: store.clone(),
    };
    let result = usecase.execute(404).await;
    assert!(matches!(result, Err(ApiServiceError::VendorNotFound)));
}

#[tokio::test]
async fn should_update_status_and_refresh_last_updated() {
    let store = InMemoryStore::new();
    let vendor = store.seed_vendor("Bao Bros", false);
    let before = vendor.last_updated;

    let usecase = UpdateVendorStatusUseCase {
        vendors: store.clone(),
    };
    usecase
        .execute(vendor.id, vendor.account_id, true)
        .await
        .unwrap();

    let updated = store.vendor(vendor.id);
    assert!(updated.is_open);
    assert!(updated.last_updated >= before);
}

#[tokio::test]
async fn should_hide_existence_from_non_owner_on_status_update() {
    let store = InMemoryStore::new();
    let vendor = store.seed_vendor("Bao Bros", false);

    let usecase = UpdateVendorStatusUseCase {
        vendors: store.clone(),
    };

    let not_owner = usecase.execute(vendor.id, Uuid::now_v7(), true).await;
    let missing = usecase.execute(9999, vendor.account_id, true).await;

    // Both failures surface as the same not-found error.
    assert!(matches!(not_owner, Err(ApiServiceError::VendorNotFound)));
    assert!(matches!(missing, Err(ApiServiceError::VendorNotFound)));
    assert!(!store.vendor(vendor.id).is_open);
}
