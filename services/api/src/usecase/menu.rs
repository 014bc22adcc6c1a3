use uuid::Uuid;

use crate::domain::repository::{MenuItemRepository, VendorRepository};
use crate::domain::types::{MenuItem, MenuItemDraft, sort_menu_items, validate_menu_item};
use crate::error::ApiServiceError;

// ── GetMenu ──────────────────────────────────────────────────────────────────

pub struct GetMenuUseCase<M: MenuItemRepository> {
    pub menu: M,
}

impl<M: MenuItemRepository> GetMenuUseCase<M> {
    /// Full menu, ordered by category then name.
    pub async fn execute(&self, vendor_id: i32) -> Result<Vec<MenuItem>, ApiServiceError> {
        let mut items = self.menu.list(vendor_id).await?;
        sort_menu_items(&mut items);
        Ok(items)
    }
}

// ── GetAvailableMenu ─────────────────────────────────────────────────────────

pub struct GetAvailableMenuUseCase<M: MenuItemRepository> {
    pub menu: M,
}

impl<M: MenuItemRepository> GetAvailableMenuUseCase<M> {
    /// Filters the ordered full menu down to available items, preserving order.
    pub async fn execute(&self, vendor_id: i32) -> Result<Vec<MenuItem>, ApiServiceError> {
        let mut items = self.menu.list(vendor_id).await?;
        sort_menu_items(&mut items);
        items.retain(|i| i.is_available);
        Ok(items)
    }
}

// ── GetCategories ────────────────────────────────────────────────────────────

pub struct GetCategoriesUseCase<M: MenuItemRepository> {
    pub menu: M,
}

impl<M: MenuItemRepository> GetCategoriesUseCase<M> {
    pub async fn execute(&self, vendor_id: i32) -> Result<Vec<String>, ApiServiceError> {
        self.menu.categories(vendor_id).await
    }
}

// ── GetMenuItem ──────────────────────────────────────────────────────────────

pub struct GetMenuItemUseCase<M: MenuItemRepository> {
    pub menu: M,
}

impl<M: MenuItemRepository> GetMenuItemUseCase<M> {
    pub async fn execute(
        &self,
        vendor_id: i32,
        item_id: i32,
    ) -> Result<MenuItem, ApiServiceError> {
        self.menu
            .find(vendor_id, item_id)
            .await?
            .ok_or(ApiServiceError::MenuItemNotFound)
    }
}

// ── CreateMenuItem ───────────────────────────────────────────────────────────

pub struct CreateMenuItemUseCase<V: VendorRepository, M: MenuItemRepository> {
    pub vendors: V,
    pub menu: M,
}

impl<V: VendorRepository, M: MenuItemRepository> CreateMenuItemUseCase<V, M> {
    pub async fn execute(
        &self,
        vendor_id: i32,
        caller_account_id: Uuid,
        draft: MenuItemDraft,
    ) -> Result<MenuItem, ApiServiceError> {
        let errors = validate_menu_item(&draft);
        if !errors.is_empty() {
            return Err(ApiServiceError::Validation(errors));
        }
        if !self.vendors.is_owner(vendor_id, caller_account_id).await? {
            return Err(ApiServiceError::VendorNotFound);
        }
        self.menu.insert(vendor_id, &draft).await
    }
}

// ── UpdateMenuItem ───────────────────────────────────────────────────────────

pub struct UpdateMenuItemUseCase<V: VendorRepository, M: MenuItemRepository> {
    pub vendors: V,
    pub menu: M,
}

impl<V: VendorRepository, M: MenuItemRepository> UpdateMenuItemUseCase<V, M> {
    pub async fn execute(
        &self,
        vendor_id: i32,
        caller_account_id: Uuid,
        item_id: i32,
        draft: MenuItemDraft,
    ) -> Result<MenuItem, ApiServiceError> {
        let errors = validate_menu_item(&draft);
        if !errors.is_empty() {
            return Err(ApiServiceError::Validation(errors));
        }
        if !self.vendors.is_owner(vendor_id, caller_account_id).await? {
            return Err(ApiServiceError::VendorNotFound);
        }
        self.menu
            .update(vendor_id, item_id, &draft)
            .await?
            .ok_or(ApiServiceError::MenuItemNotFound)
    }
}

// ── DeleteMenuItem ───────────────────────────────────────────────────────────

pub struct DeleteMenuItemUseCase<V: VendorRepository, M: MenuItemRepository> {
    pub vendors: V,
    pub menu: M,
}

impl<V: VendorRepository, M: MenuItemRepository> DeleteMenuItemUseCase<V, M> {
    pub async fn execute(
        &self,
        vendor_id: i32,
        caller_account_id: Uuid,
        item_id: i32,
    ) -> Result<(), ApiServiceError> {
        if !self.vendors.is_owner(vendor_id, caller_account_id).await? {
            return Err(ApiServiceError::VendorNotFound);
        }
        let deleted = self.menu.delete(vendor_id, item_id).await?;
        if !deleted {
            return Err(ApiServiceError::MenuItemNotFound);
        }
        Ok(())
    }
}

// ── ToggleAvailability ───────────────────────────────────────────────────────

pub struct ToggleAvailabilityUseCase<V: VendorRepository, M: MenuItemRepository> {
    pub vendors: V,
    pub menu: M,
}

impl<V: VendorRepository, M: MenuItemRepository> ToggleAvailabilityUseCase<V, M> {
    pub async fn execute(
        &self,
        vendor_id: i32,
        caller_account_id: Uuid,
        item_id: i32,
        is_available: bool,
    ) -> Result<(), ApiServiceError> {
        if !self.vendors.is_owner(vendor_id, caller_account_id).await? {
            return Err(ApiServiceError::VendorNotFound);
        }
        let updated = self
            .menu
            .set_availability(vendor_id, item_id, is_available)
            .await?;
        if !updated {
            return Err(ApiServiceError::MenuItemNotFound);
        }
        Ok(())
    }
}

// ── BatchToggleAvailability ──────────────────────────────────────────────────

pub struct BatchToggleAvailabilityUseCase<V: VendorRepository, M: MenuItemRepository> {
    pub vendors: V,
    pub menu: M,
}

impl<V: VendorRepository, M: MenuItemRepository> BatchToggleAvailabilityUseCase<V, M> {
    /// Ids that do not exist or belong to another vendor are silently
    /// ignored; only an empty match set is an error. Returns the number of
    /// items actually updated.
    pub async fn execute(
        &self,
        vendor_id: i32,
        caller_account_id: Uuid,
        item_ids: &[i32],
        is_available: bool,
    ) -> Result<u64, ApiServiceError> {
        if !self.vendors.is_owner(vendor_id, caller_account_id).await? {
            return Err(ApiServiceError::VendorNotFound);
        }
        let matched = self
            .menu
            .set_availability_many(vendor_id, item_ids, is_available)
            .await?;
        if matched == 0 {
            return Err(ApiServiceError::MenuItemNotFound);
        }
        Ok(matched)
    }
}

// ── ReplaceMenu ──────────────────────────────────────────────────────────────

pub struct ReplaceMenuUseCase<V: VendorRepository, M: MenuItemRepository> {
    pub vendors: V,
    pub menu: M,
}

impl<V: VendorRepository, M: MenuItemRepository> ReplaceMenuUseCase<V, M> {
    /// Full replace: every existing item is deleted and the new list inserted
    /// with fresh ids, in one transaction.
    pub async fn execute(
        &self,
        vendor_id: i32,
        caller_account_id: Uuid,
        drafts: Vec<MenuItemDraft>,
    ) -> Result<Vec<MenuItem>, ApiServiceError> {
        let mut errors = Vec::new();
        for (index, draft) in drafts.iter().enumerate() {
            for error in validate_menu_item(draft) {
                errors.push(format!("items[{index}]: {error}"));
            }
        }
        if !errors.is_empty() {
            return Err(ApiServiceError::Validation(errors));
        }
        if !self.vendors.is_owner(vendor_id, caller_account_id).await? {
            return Err(ApiServiceError::VendorNotFound);
        }
        self.menu.replace_all(vendor_id, &drafts).await
    }
}
