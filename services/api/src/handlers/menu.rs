use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use foodcart_auth_types::token::TokenIdentity;

use crate::domain::types::{DEFAULT_CATEGORY, MenuItem, MenuItemDraft};
use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::menu::{
    BatchToggleAvailabilityUseCase, CreateMenuItemUseCase, DeleteMenuItemUseCase,
    GetAvailableMenuUseCase, GetCategoriesUseCase, GetMenuItemUseCase, GetMenuUseCase,
    ReplaceMenuUseCase, ToggleAvailabilityUseCase, UpdateMenuItemUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemResponse {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub is_available: bool,
    pub category: String,
}

pub fn menu_item_response(item: MenuItem) -> MenuItemResponse {
    MenuItemResponse {
        id: item.id,
        name: item.name,
        price: item.price,
        is_available: item.is_available,
        category: item.category,
    }
}

// ── Request types ────────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRequest {
    pub name: String,
    pub price: Decimal,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default = "default_category")]
    pub category: String,
}

impl MenuItemRequest {
    fn into_draft(self) -> MenuItemDraft {
        MenuItemDraft {
            name: self.name,
            price: self.price,
            is_available: self.is_available,
            category: self.category,
        }
    }
}

// ── GET /api/vendors/{vendor_id}/menu ────────────────────────────────────────

pub async fn get_menu(
    State(state): State<AppState>,
    Path(vendor_id): Path<i32>,
) -> Result<Json<Vec<MenuItemResponse>>, ApiServiceError> {
    let usecase = GetMenuUseCase {
        menu: state.menu_repo(),
    };
    let items = usecase.execute(vendor_id).await?;
    Ok(Json(items.into_iter().map(menu_item_response).collect()))
}

// ── GET /api/vendors/{vendor_id}/menu/available ──────────────────────────────

pub async fn get_available_menu(
    State(state): State<AppState>,
    Path(vendor_id): Path<i32>,
) -> Result<Json<Vec<MenuItemResponse>>, ApiServiceError> {
    let usecase = GetAvailableMenuUseCase {
        menu: state.menu_repo(),
    };
    let items = usecase.execute(vendor_id).await?;
    Ok(Json(items.into_iter().map(menu_item_response).collect()))
}

// ── GET /api/vendors/{vendor_id}/menu/categories ─────────────────────────────

pub async fn get_categories(
    State(state): State<AppState>,
    Path(vendor_id): Path<i32>,
) -> Result<Json<Vec<String>>, ApiServiceError> {
    let usecase = GetCategoriesUseCase {
        menu: state.menu_repo(),
    };
    let categories = usecase.execute(vendor_id).await?;
    Ok(Json(categories))
}

// ── GET /api/vendors/{vendor_id}/menu/{menu_item_id} ─────────────────────────

pub async fn get_menu_item(
    State(state): State<AppState>,
    Path((vendor_id, menu_item_id)): Path<(i32, i32)>,
) -> Result<Json<MenuItemResponse>, ApiServiceError> {
    let usecase = GetMenuItemUseCase {
        menu: state.menu_repo(),
    };
    let item = usecase.execute(vendor_id, menu_item_id).await?;
    Ok(Json(menu_item_response(item)))
}

// ── POST /api/vendors/{vendor_id}/menu ───────────────────────────────────────

pub async fn create_menu_item(
    identity: TokenIdentity,
    State(state): State<AppState>,
    Path(vendor_id): Path<i32>,
    Json(body): Json<MenuItemRequest>,
) -> Result<impl IntoResponse, ApiServiceError> {
    let usecase = CreateMenuItemUseCase {
        vendors: state.vendor_repo(),
        menu: state.menu_repo(),
    };
    let item = usecase
        .execute(vendor_id, identity.account_id, body.into_draft())
        .await?;

    let location = format!("/api/vendors/{vendor_id}/menu/{}", item.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(menu_item_response(item)),
    ))
}

// ── PUT /api/vendors/{vendor_id}/menu/{menu_item_id} ─────────────────────────

pub async fn update_menu_item(
    identity: TokenIdentity,
    State(state): State<AppState>,
    Path((vendor_id, menu_item_id)): Path<(i32, i32)>,
    Json(body): Json<MenuItemRequest>,
) -> Result<Json<MenuItemResponse>, ApiServiceError> {
    let usecase = UpdateMenuItemUseCase {
        vendors: state.vendor_repo(),
        menu: state.menu_repo(),
    };
    let item = usecase
        .execute(vendor_id, identity.account_id, menu_item_id, body.into_draft())
        .await?;
    Ok(Json(menu_item_response(item)))
}

// ── DELETE /api/vendors/{vendor_id}/menu/{menu_item_id} ──────────────────────

pub async fn delete_menu_item(
    identity: TokenIdentity,
    State(state): State<AppState>,
    Path((vendor_id, menu_item_id)): Path<(i32, i32)>,
) -> Result<StatusCode, ApiServiceError> {
    let usecase = DeleteMenuItemUseCase {
        vendors: state.vendor_repo(),
        menu: state.menu_repo(),
    };
    usecase
        .execute(vendor_id, identity.account_id, menu_item_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── PATCH /api/vendors/{vendor_id}/menu/{menu_item_id}/availability ──────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleAvailabilityRequest {
    pub is_available: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityUpdatedResponse {
    pub message: String,
    pub is_available: bool,
}

pub async fn toggle_availability(
    identity: TokenIdentity,
    State(state): State<AppState>,
    Path((vendor_id, menu_item_id)): Path<(i32, i32)>,
    Json(body): Json<ToggleAvailabilityRequest>,
) -> Result<Json<AvailabilityUpdatedResponse>, ApiServiceError> {
    let usecase = ToggleAvailabilityUseCase {
        vendors: state.vendor_repo(),
        menu: state.menu_repo(),
    };
    usecase
        .execute(vendor_id, identity.account_id, menu_item_id, body.is_available)
        .await?;
    Ok(Json(AvailabilityUpdatedResponse {
        message: "availability updated successfully".to_string(),
        is_available: body.is_available,
    }))
}

// ── PATCH /api/vendors/{vendor_id}/menu/batch/availability ───────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchToggleRequest {
    pub menu_item_ids: Vec<i32>,
    pub is_available: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchToggleResponse {
    pub message: String,
    /// Number of items actually updated — ids that did not belong to the
    /// vendor are excluded from this count.
    pub updated_item_count: u64,
    pub is_available: bool,
}

pub async fn batch_toggle_availability(
    identity: TokenIdentity,
    State(state): State<AppState>,
    Path(vendor_id): Path<i32>,
    Json(body): Json<BatchToggleRequest>,
) -> Result<Json<BatchToggleResponse>, ApiServiceError> {
    let usecase = BatchToggleAvailabilityUseCase {
        vendors: state.vendor_repo(),
        menu: state.menu_repo(),
    };
    let updated_item_count = usecase
        .execute(
            vendor_id,
            identity.account_id,
            &body.menu_item_ids,
            body.is_available,
        )
        .await?;
    Ok(Json(BatchToggleResponse {
        message: "batch availability update successful".to_string(),
        updated_item_count,
        is_available: body.is_available,
    }))
}

// ── PUT /api/vendors/{vendor_id}/menu ────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceMenuRequest {
    pub menu_items: Vec<MenuItemRequest>,
}

pub async fn replace_menu(
    identity: TokenIdentity,
    State(state): State<AppState>,
    Path(vendor_id): Path<i32>,
    Json(body): Json<ReplaceMenuRequest>,
) -> Result<Json<Vec<MenuItemResponse>>, ApiServiceError> {
    let usecase = ReplaceMenuUseCase {
        vendors: state.vendor_repo(),
        menu: state.menu_repo(),
    };
    let drafts = body
        .menu_items
        .into_iter()
        .map(MenuItemRequest::into_draft)
        .collect();
    let items = usecase
        .execute(vendor_id, identity.account_id, drafts)
        .await?;
    Ok(Json(items.into_iter().map(menu_item_response).collect()))
}
