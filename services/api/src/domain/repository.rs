#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{Account, MenuItem, MenuItemDraft, Vendor, VendorProfile};
use crate::error::ApiServiceError;

/// Repository for credential records.
pub trait AccountRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, ApiServiceError>;

    /// Insert the account and its vendor profile atomically.
    /// Returns the vendor row with its generated id.
    async fn create_with_vendor(
        &self,
        account: &Account,
        profile: &VendorProfile,
    ) -> Result<Vendor, ApiServiceError>;
}

/// Repository for vendor profiles.
pub trait VendorRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Vendor>, ApiServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Vendor>, ApiServiceError>;

    async fn find_by_account(&self, account_id: Uuid) -> Result<Option<Vendor>, ApiServiceError>;

    /// True when the vendor exists and is owned by the account.
    async fn is_owner(&self, vendor_id: i32, account_id: Uuid) -> Result<bool, ApiServiceError>;

    /// Ownership-scoped status update: sets `is_open` and refreshes
    /// `last_updated`. Returns `false` when the vendor is absent or owned by
    /// a different account (the two cases are not distinguished).
    async fn set_status(
        &self,
        vendor_id: i32,
        account_id: Uuid,
        is_open: bool,
    ) -> Result<bool, ApiServiceError>;
}

/// Repository for menu items, scoped to one vendor per call.
///
/// Every mutation refreshes the owning vendor's `last_updated` in the same
/// transaction as the row change.
pub trait MenuItemRepository: Send + Sync {
    async fn list(&self, vendor_id: i32) -> Result<Vec<MenuItem>, ApiServiceError>;

    /// Distinct category values for the vendor, sorted ascending.
    async fn categories(&self, vendor_id: i32) -> Result<Vec<String>, ApiServiceError>;

    async fn find(
        &self,
        vendor_id: i32,
        item_id: i32,
    ) -> Result<Option<MenuItem>, ApiServiceError>;

    async fn insert(
        &self,
        vendor_id: i32,
        draft: &MenuItemDraft,
    ) -> Result<MenuItem, ApiServiceError>;

    /// Overwrite name/price/availability/category. Returns `None` when the
    /// item does not exist under this vendor.
    async fn update(
        &self,
        vendor_id: i32,
        item_id: i32,
        draft: &MenuItemDraft,
    ) -> Result<Option<MenuItem>, ApiServiceError>;

    /// Returns `true` when a row was deleted.
    async fn delete(&self, vendor_id: i32, item_id: i32) -> Result<bool, ApiServiceError>;

    /// Returns `false` when the item does not exist under this vendor.
    async fn set_availability(
        &self,
        vendor_id: i32,
        item_id: i32,
        is_available: bool,
    ) -> Result<bool, ApiServiceError>;

    /// Update the subset of `item_ids` that belong to the vendor; ids that do
    /// not exist or belong elsewhere are ignored. Returns the matched count;
    /// the vendor timestamp is refreshed only when the count is non-zero.
    async fn set_availability_many(
        &self,
        vendor_id: i32,
        item_ids: &[i32],
        is_available: bool,
    ) -> Result<u64, ApiServiceError>;

    /// Delete every existing item and insert `drafts` in one transaction.
    /// All previous ids are lost; returns the created items.
    async fn replace_all(
        &self,
        vendor_id: i32,
        drafts: &[MenuItemDraft],
    ) -> Result<Vec<MenuItem>, ApiServiceError>;
}
