use uuid::Uuid;

use crate::domain::repository::{MenuItemRepository, VendorRepository};
use crate::domain::types::{MenuItem, Vendor, sort_menu_items, sort_vendors};
use crate::error::ApiServiceError;

// ── ListVendors ──────────────────────────────────────────────────────────────

pub struct ListVendorsUseCase<V: VendorRepository> {
    pub vendors: V,
}

impl<V: VendorRepository> ListVendorsUseCase<V> {
    /// All vendors, open ones first, alphabetical within each group.
    pub async fn execute(&self) -> Result<Vec<Vendor>, ApiServiceError> {
        let mut vendors = self.vendors.list().await?;
        sort_vendors(&mut vendors);
        Ok(vendors)
    }
}

// ── ListOpenVendors ──────────────────────────────────────────────────────────

pub struct ListOpenVendorsUseCase<V: VendorRepository> {
    pub vendors: V,
}

impl<V: VendorRepository> ListOpenVendorsUseCase<V> {
    /// Same ordering as the full listing, filtered to open vendors.
    pub async fn execute(&self) -> Result<Vec<Vendor>, ApiServiceError> {
        let mut vendors = self.vendors.list().await?;
        sort_vendors(&mut vendors);
        vendors.retain(|v| v.is_open);
        Ok(vendors)
    }
}

// ── GetVendor ────────────────────────────────────────────────────────────────

/// Vendor detail: the profile plus its currently available menu items.
#[derive(Debug)]
pub struct VendorDetail {
    pub vendor: Vendor,
    pub menu_items: Vec<MenuItem>,
}

pub struct GetVendorUseCase<V: VendorRepository, M: MenuItemRepository> {
    pub vendors: V,
    pub menu: M,
}

impl<V: VendorRepository, M: MenuItemRepository> GetVendorUseCase<V, M> {
    pub async fn execute(&self, vendor_id: i32) -> Result<VendorDetail, ApiServiceError> {
        let vendor = self
            .vendors
            .find_by_id(vendor_id)
            .await?
            .ok_or(ApiServiceError::VendorNotFound)?;

        let mut menu_items = self.menu.list(vendor_id).await?;
        sort_menu_items(&mut menu_items);
        menu_items.retain(|i| i.is_available);

        Ok(VendorDetail { vendor, menu_items })
    }
}

// ── UpdateVendorStatus ───────────────────────────────────────────────────────

pub struct UpdateVendorStatusUseCase<V: VendorRepository> {
    pub vendors: V,
}

impl<V: VendorRepository> UpdateVendorStatusUseCase<V> {
    /// An absent vendor and a vendor owned by someone else produce the same
    /// `VendorNotFound`, so non-owners cannot probe for existence.
    pub async fn execute(
        &self,
        vendor_id: i32,
        caller_account_id: Uuid,
        is_open: bool,
    ) -> Result<(), ApiServiceError> {
        let updated = self
            .vendors
            .set_status(vendor_id, caller_account_id, is_open)
            .await?;
        if !updated {
            return Err(ApiServiceError::VendorNotFound);
        }
        Ok(())
    }
}
