use rust_decimal::Decimal;
use uuid::Uuid;

use foodcart_api::domain::types::MenuItemDraft;
use foodcart_api::error::ApiServiceError;
use foodcart_api::usecase::menu::{
    BatchToggleAvailabilityUseCase, CreateMenuItemUseCase, DeleteMenuItemUseCase,
    GetCategoriesUseCase, GetMenuItemUseCase, GetMenuUseCase, ReplaceMenuUseCase,
    ToggleAvailabilityUseCase, UpdateMenuItemUseCase,
};

use crate::helpers::InMemoryStore;

fn draft(name: &str, category: &str) -> MenuItemDraft {
    MenuItemDraft {
        name: name.to_string(),
        price: Decimal::new(899, 2),
        is_available: true,
        category: category.to_string(),
    }
}

#[tokio::test]
async fn should_create_item_and_refresh_vendor_timestamp_once() {
    let store = InMemoryStore::new();
    let vendor = store.seed_vendor("Taco Cart", true);
    let before = vendor.last_updated;

    let usecase = CreateMenuItemUseCase {
        vendors: store.clone(),
        menu: store.clone(),
    };
    let item = usecase
        .execute(vendor.id, vendor.account_id, draft("Tacos", "Mains"))
        .await
        .unwrap();

    assert!(item.id > 0);
    assert_eq!(store.touches(vendor.id), 1);
    assert!(store.vendor(vendor.id).last_updated >= before);
}

#[tokio::test]
async fn should_treat_non_owner_writes_as_not_found() {
    let store = InMemoryStore::new();
    let vendor = store.seed_vendor("Taco Cart", true);
    let item = store.seed_item(vendor.id, "Tacos", "Mains", true);
    let stranger = Uuid::now_v7();

    let create = CreateMenuItemUseCase {
        vendors: store.clone(),
        menu: store.clone(),
    };
    let result = create
        .execute(vendor.id, stranger, draft("Burrito", "Mains"))
        .await;
    assert!(matches!(result, Err(ApiServiceError::VendorNotFound)));

    let delete = DeleteMenuItemUseCase {
        vendors: store.clone(),
        menu: store.clone(),
    };
    let result = delete.execute(vendor.id, stranger, item.id).await;
    assert!(matches!(result, Err(ApiServiceError::VendorNotFound)));

    let replace = ReplaceMenuUseCase {
        vendors: store.clone(),
        menu: store.clone(),
    };
    let result = replace
        .execute(vendor.id, stranger, vec![draft("Burrito", "Mains")])
        .await;
    assert!(matches!(result, Err(ApiServiceError::VendorNotFound)));

    // Nothing was mutated.
    assert_eq!(store.items(vendor.id).len(), 1);
    assert_eq!(store.touches(vendor.id), 0);
}

#[tokio::test]
async fn should_scope_item_lookup_to_vendor() {
    let store = InMemoryStore::new();
    let vendor = store.seed_vendor("Taco Cart", true);
    let other = store.seed_vendor("Bao Bros", true);
    let foreign_item = store.seed_item(other.id, "Pork Bao", "Mains", true);

    let usecase = GetMenuItemUseCase {
        menu: store.clone(),
    };
    let result = usecase.execute(vendor.id, foreign_item.id).await;
    assert!(matches!(result, Err(ApiServiceError::MenuItemNotFound)));
}

#[tokio::test]
async fn should_update_item_refreshing_item_and_vendor_timestamps() {
    let store = InMemoryStore::new();
    let vendor = store.seed_vendor("Taco Cart", true);
    let item = store.seed_item(vendor.id, "Tacos", "Mains", true);
    let item_before = item.updated_at;
    let vendor_before = store.vendor(vendor.id).last_updated;

    let usecase = UpdateMenuItemUseCase {
        vendors: store.clone(),
        menu: store.clone(),
    };
    let updated = usecase
        .execute(
            vendor.id,
            vendor.account_id,
            item.id,
            draft("Tacos al Pastor", "Mains"),
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Tacos al Pastor");
    assert!(updated.updated_at >= item_before);
    assert!(store.vendor(vendor.id).last_updated >= vendor_before);
    assert_eq!(store.touches(vendor.id), 1);
}

#[tokio::test]
async fn should_toggle_availability_for_owner() {
    let store = InMemoryStore::new();
    let vendor = store.seed_vendor("Taco Cart", true);
    let item = store.seed_item(vendor.id, "Tacos", "Mains", true);

    let usecase = ToggleAvailabilityUseCase {
        vendors: store.clone(),
        menu: store.clone(),
    };
    usecase
        .execute(vendor.id, vendor.account_id, item.id, false)
        .await
        .unwrap();

    let items = store.items(vendor.id);
    assert!(!items[0].is_available);
    assert!(items[0].updated_at >= item.updated_at);
}

#[tokio::test]
async fn should_batch_toggle_only_owned_subset_touching_vendor_once() {
    let store = InMemoryStore::new();
    let vendor = store.seed_vendor("Taco Cart", true);
    let other = store.seed_vendor("Bao Bros", true);
    let a = store.seed_item(vendor.id, "Tacos", "Mains", true);
    let b = store.seed_item(vendor.id, "Soda", "Drinks", true);
    let foreign = store.seed_item(other.id, "Pork Bao", "Mains", true);

    let usecase = BatchToggleAvailabilityUseCase {
        vendors: store.clone(),
        menu: store.clone(),
    };
    let matched = usecase
        .execute(
            vendor.id,
            vendor.account_id,
            &[a.id, b.id, foreign.id, 9999],
            false,
        )
        .await
        .unwrap();

    // Count reflects what was actually updated, not what was requested.
    assert_eq!(matched, 2);
    assert!(store.items(vendor.id).iter().all(|i| !i.is_available));
    assert!(store.items(other.id)[0].is_available);
    assert_eq!(store.touches(vendor.id), 1);
    assert_eq!(store.touches(other.id), 0);
}

#[tokio::test]
async fn should_fail_batch_toggle_when_no_id_belongs_to_vendor() {
    let store = InMemoryStore::new();
    let vendor = store.seed_vendor("Taco Cart", true);
    let other = store.seed_vendor("Bao Bros", true);
    let foreign = store.seed_item(other.id, "Pork Bao", "Mains", true);

    let usecase = BatchToggleAvailabilityUseCase {
        vendors: store.clone(),
        menu: store.clone(),
    };
    let result = usecase
        .execute(vendor.id, vendor.account_id, &[foreign.id, 9999], false)
        .await;

    assert!(matches!(result, Err(ApiServiceError::MenuItemNotFound)));
    assert_eq!(store.touches(vendor.id), 0);
}

#[tokio::test]
async fn should_replace_menu_and_list_exactly_the_new_items() {
    let store = InMemoryStore::new();
    let vendor = store.seed_vendor("Taco Cart", true);
    let old = store.seed_item(vendor.id, "Old Dish", "Mains", true);

    let replace = ReplaceMenuUseCase {
        vendors: store.clone(),
        menu: store.clone(),
    };
    replace
        .execute(
            vendor.id,
            vendor.account_id,
            vec![
                draft("Tacos", "Mains"),
                draft("Agua Fresca", "Drinks"),
                draft("Burrito", "Mains"),
            ],
        )
        .await
        .unwrap();

    let list = GetMenuUseCase {
        menu: store.clone(),
    };
    let items = list.execute(vendor.id).await.unwrap();

    // Content matches by value, sorted by category then name; the old id is gone.
    let listing: Vec<_> = items
        .iter()
        .map(|i| (i.category.as_str(), i.name.as_str()))
        .collect();
    assert_eq!(
        listing,
        vec![
            ("Drinks", "Agua Fresca"),
            ("Mains", "Burrito"),
            ("Mains", "Tacos"),
        ]
    );
    assert!(items.iter().all(|i| i.id != old.id));
}

#[tokio::test]
async fn should_list_distinct_categories_sorted() {
    let store = InMemoryStore::new();
    let vendor = store.seed_vendor("Taco Cart", true);
    store.seed_item(vendor.id, "Tacos", "Mains", true);
    store.seed_item(vendor.id, "Burrito", "Mains", true);
    store.seed_item(vendor.id, "Soda", "Drinks", true);

    let usecase = GetCategoriesUseCase {
        menu: store.clone(),
    };
    let categories = usecase.execute(vendor.id).await.unwrap();
    assert_eq!(categories, vec!["Drinks", "Mains"]);
}
