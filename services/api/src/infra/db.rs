use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, IntoActiveModel as _, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait, sea_query::Expr,
};
use uuid::Uuid;

use foodcart_api_schema::{accounts, menu_items, vendors};

use crate::domain::repository::{AccountRepository, MenuItemRepository, VendorRepository};
use crate::domain::types::{Account, MenuItem, MenuItemDraft, Vendor, VendorProfile};
use crate::error::ApiServiceError;

/// Refresh the vendor's `last_updated` inside the caller's transaction.
async fn touch_vendor(
    txn: &DatabaseTransaction,
    vendor_id: i32,
    now: DateTime<Utc>,
) -> Result<(), DbErr> {
    vendors::Entity::update_many()
        .filter(vendors::Column::Id.eq(vendor_id))
        .col_expr(vendors::Column::LastUpdated, Expr::value(now))
        .exec(txn)
        .await?;
    Ok(())
}

// ── Account repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccountRepository {
    pub db: DatabaseConnection,
}

impl AccountRepository for DbAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, ApiServiceError> {
        let model = accounts::Entity::find()
            .filter(accounts::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find account by email")?;
        Ok(model.map(account_from_model))
    }

    async fn create_with_vendor(
        &self,
        account: &Account,
        profile: &VendorProfile,
    ) -> Result<Vendor, ApiServiceError> {
        let model = self
            .db
            .transaction::<_, vendors::Model, DbErr>(|txn| {
                let account = account.clone();
                let profile = profile.clone();
                Box::pin(async move {
                    accounts::ActiveModel {
                        id: Set(account.id),
                        email: Set(account.email.clone()),
                        password_hash: Set(account.password_hash.clone()),
                        created_at: Set(account.created_at),
                    }
                    .insert(txn)
                    .await?;

                    let now = Utc::now();
                    vendors::ActiveModel {
                        name: Set(profile.name.clone()),
                        location: Set(profile.location.clone()),
                        specialty: Set(profile.specialty.clone()),
                        whatsapp_number: Set(profile.whatsapp_number.clone()),
                        is_open: Set(false),
                        last_updated: Set(now),
                        created_at: Set(now),
                        account_id: Set(account.id),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await
                })
            })
            .await
            .context("create account with vendor")?;
        Ok(vendor_from_model(model))
    }
}

fn account_from_model(model: accounts::Model) -> Account {
    Account {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        created_at: model.created_at,
    }
}

// ── Vendor repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbVendorRepository {
    pub db: DatabaseConnection,
}

impl VendorRepository for DbVendorRepository {
    async fn list(&self) -> Result<Vec<Vendor>, ApiServiceError> {
        let models = vendors::Entity::find()
            .all(&self.db)
            .await
            .context("list vendors")?;
        Ok(models.into_iter().map(vendor_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Vendor>, ApiServiceError> {
        let model = vendors::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find vendor by id")?;
        Ok(model.map(vendor_from_model))
    }

    async fn find_by_account(&self, account_id: Uuid) -> Result<Option<Vendor>, ApiServiceError> {
        let model = vendors::Entity::find()
            .filter(vendors::Column::AccountId.eq(account_id))
            .one(&self.db)
            .await
            .context("find vendor by account")?;
        Ok(model.map(vendor_from_model))
    }

    async fn is_owner(&self, vendor_id: i32, account_id: Uuid) -> Result<bool, ApiServiceError> {
        let model = vendors::Entity::find()
            .filter(vendors::Column::Id.eq(vendor_id))
            .filter(vendors::Column::AccountId.eq(account_id))
            .one(&self.db)
            .await
            .context("check vendor ownership")?;
        Ok(model.is_some())
    }

    async fn set_status(
        &self,
        vendor_id: i32,
        account_id: Uuid,
        is_open: bool,
    ) -> Result<bool, ApiServiceError> {
        let Some(model) = vendors::Entity::find()
            .filter(vendors::Column::Id.eq(vendor_id))
            .filter(vendors::Column::AccountId.eq(account_id))
            .one(&self.db)
            .await
            .context("find vendor for status update")?
        else {
            return Ok(false);
        };

        let mut vendor = model.into_active_model();
        vendor.is_open = Set(is_open);
        vendor.last_updated = Set(Utc::now());
        vendor
            .update(&self.db)
            .await
            .context("update vendor status")?;
        Ok(true)
    }
}

fn vendor_from_model(model: vendors::Model) -> Vendor {
    Vendor {
        id: model.id,
        name: model.name,
        location: model.location,
        specialty: model.specialty,
        whatsapp_number: model.whatsapp_number,
        is_open: model.is_open,
        last_updated: model.last_updated,
        created_at: model.created_at,
        account_id: model.account_id,
    }
}

// ── Menu item repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMenuItemRepository {
    pub db: DatabaseConnection,
}

impl MenuItemRepository for DbMenuItemRepository {
    async fn list(&self, vendor_id: i32) -> Result<Vec<MenuItem>, ApiServiceError> {
        let models = menu_items::Entity::find()
            .filter(menu_items::Column::VendorId.eq(vendor_id))
            .all(&self.db)
            .await
            .context("list menu items")?;
        Ok(models.into_iter().map(menu_item_from_model).collect())
    }

    async fn categories(&self, vendor_id: i32) -> Result<Vec<String>, ApiServiceError> {
        let categories = menu_items::Entity::find()
            .select_only()
            .column(menu_items::Column::Category)
            .filter(menu_items::Column::VendorId.eq(vendor_id))
            .distinct()
            .order_by_asc(menu_items::Column::Category)
            .into_tuple()
            .all(&self.db)
            .await
            .context("list menu categories")?;
        Ok(categories)
    }

    async fn find(
        &self,
        vendor_id: i32,
        item_id: i32,
    ) -> Result<Option<MenuItem>, ApiServiceError> {
        let model = menu_items::Entity::find()
            .filter(menu_items::Column::Id.eq(item_id))
            .filter(menu_items::Column::VendorId.eq(vendor_id))
            .one(&self.db)
            .await
            .context("find menu item")?;
        Ok(model.map(menu_item_from_model))
    }

    async fn insert(
        &self,
        vendor_id: i32,
        draft: &MenuItemDraft,
    ) -> Result<MenuItem, ApiServiceError> {
        let model = self
            .db
            .transaction::<_, menu_items::Model, DbErr>(|txn| {
                let draft = draft.clone();
                Box::pin(async move {
                    let now = Utc::now();
                    let model = menu_items::ActiveModel {
                        name: Set(draft.name.clone()),
                        price: Set(draft.price),
                        is_available: Set(draft.is_available),
                        category: Set(draft.category.clone()),
                        created_at: Set(now),
                        updated_at: Set(now),
                        vendor_id: Set(vendor_id),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;
                    touch_vendor(txn, vendor_id, now).await?;
                    Ok(model)
                })
            })
            .await
            .context("insert menu item")?;
        Ok(menu_item_from_model(model))
    }

    async fn update(
        &self,
        vendor_id: i32,
        item_id: i32,
        draft: &MenuItemDraft,
    ) -> Result<Option<MenuItem>, ApiServiceError> {
        let model = self
            .db
            .transaction::<_, Option<menu_items::Model>, DbErr>(|txn| {
                let draft = draft.clone();
                Box::pin(async move {
                    let Some(model) = menu_items::Entity::find()
                        .filter(menu_items::Column::Id.eq(item_id))
                        .filter(menu_items::Column::VendorId.eq(vendor_id))
                        .one(txn)
                        .await?
                    else {
                        return Ok(None);
                    };

                    let now = Utc::now();
                    let mut item = model.into_active_model();
                    item.name = Set(draft.name.clone());
                    item.price = Set(draft.price);
                    item.is_available = Set(draft.is_available);
                    item.category = Set(draft.category.clone());
                    item.updated_at = Set(now);
                    let model = item.update(txn).await?;
                    touch_vendor(txn, vendor_id, now).await?;
                    Ok(Some(model))
                })
            })
            .await
            .context("update menu item")?;
        Ok(model.map(menu_item_from_model))
    }

    async fn delete(&self, vendor_id: i32, item_id: i32) -> Result<bool, ApiServiceError> {
        let deleted = self
            .db
            .transaction::<_, bool, DbErr>(|txn| {
                Box::pin(async move {
                    let result = menu_items::Entity::delete_many()
                        .filter(menu_items::Column::Id.eq(item_id))
                        .filter(menu_items::Column::VendorId.eq(vendor_id))
                        .exec(txn)
                        .await?;
                    if result.rows_affected == 0 {
                        return Ok(false);
                    }
                    touch_vendor(txn, vendor_id, Utc::now()).await?;
                    Ok(true)
                })
            })
            .await
            .context("delete menu item")?;
        Ok(deleted)
    }

    async fn set_availability(
        &self,
        vendor_id: i32,
        item_id: i32,
        is_available: bool,
    ) -> Result<bool, ApiServiceError> {
        let updated = self
            .db
            .transaction::<_, bool, DbErr>(|txn| {
                Box::pin(async move {
                    let now = Utc::now();
                    let result = menu_items::Entity::update_many()
                        .filter(menu_items::Column::Id.eq(item_id))
                        .filter(menu_items::Column::VendorId.eq(vendor_id))
                        .col_expr(menu_items::Column::IsAvailable, Expr::value(is_available))
                        .col_expr(menu_items::Column::UpdatedAt, Expr::value(now))
                        .exec(txn)
                        .await?;
                    if result.rows_affected == 0 {
                        return Ok(false);
                    }
                    touch_vendor(txn, vendor_id, now).await?;
                    Ok(true)
                })
            })
            .await
            .context("toggle menu item availability")?;
        Ok(updated)
    }

    async fn set_availability_many(
        &self,
        vendor_id: i32,
        item_ids: &[i32],
        is_available: bool,
    ) -> Result<u64, ApiServiceError> {
        let matched = self
            .db
            .transaction::<_, u64, DbErr>(|txn| {
                let item_ids = item_ids.to_vec();
                Box::pin(async move {
                    let now = Utc::now();
                    let result = menu_items::Entity::update_many()
                        .filter(menu_items::Column::VendorId.eq(vendor_id))
                        .filter(menu_items::Column::Id.is_in(item_ids))
                        .col_expr(menu_items::Column::IsAvailable, Expr::value(is_available))
                        .col_expr(menu_items::Column::UpdatedAt, Expr::value(now))
                        .exec(txn)
                        .await?;
                    if result.rows_affected > 0 {
                        touch_vendor(txn, vendor_id, now).await?;
                    }
                    Ok(result.rows_affected)
                })
            })
            .await
            .context("batch toggle menu availability")?;
        Ok(matched)
    }

    async fn replace_all(
        &self,
        vendor_id: i32,
        drafts: &[MenuItemDraft],
    ) -> Result<Vec<MenuItem>, ApiServiceError> {
        let models = self
            .db
            .transaction::<_, Vec<menu_items::Model>, DbErr>(|txn| {
                let drafts = drafts.to_vec();
                Box::pin(async move {
                    menu_items::Entity::delete_many()
                        .filter(menu_items::Column::VendorId.eq(vendor_id))
                        .exec(txn)
                        .await?;

                    let now = Utc::now();
                    let mut created = Vec::with_capacity(drafts.len());
                    for draft in &drafts {
                        let model = menu_items::ActiveModel {
                            name: Set(draft.name.clone()),
                            price: Set(draft.price),
                            is_available: Set(draft.is_available),
                            category: Set(draft.category.clone()),
                            created_at: Set(now),
                            updated_at: Set(now),
                            vendor_id: Set(vendor_id),
                            ..Default::default()
                        }
                        .insert(txn)
                        .await?;
                        created.push(model);
                    }
                    touch_vendor(txn, vendor_id, now).await?;
                    Ok(created)
                })
            })
            .await
            .context("replace menu")?;
        Ok(models.into_iter().map(menu_item_from_model).collect())
    }
}

fn menu_item_from_model(model: menu_items::Model) -> MenuItem {
    MenuItem {
        id: model.id,
        name: model.name,
        price: model.price,
        is_available: model.is_available,
        category: model.category,
        created_at: model.created_at,
        updated_at: model.updated_at,
        vendor_id: model.vendor_id,
    }
}
