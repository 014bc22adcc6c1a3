use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use foodcart_auth_types::token::TokenIdentity;

use crate::domain::types::Vendor;
use crate::error::ApiServiceError;
use crate::handlers::menu::{MenuItemResponse, menu_item_response};
use crate::state::AppState;
use crate::usecase::vendor::{
    GetVendorUseCase, ListOpenVendorsUseCase, ListVendorsUseCase, UpdateVendorStatusUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorResponse {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub specialty: Option<String>,
    pub is_open: bool,
    #[serde(serialize_with = "foodcart_core::serde::to_rfc3339_ms")]
    pub last_updated: chrono::DateTime<chrono::Utc>,
    pub whats_app_number: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorDetailResponse {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub specialty: Option<String>,
    pub is_open: bool,
    #[serde(serialize_with = "foodcart_core::serde::to_rfc3339_ms")]
    pub last_updated: chrono::DateTime<chrono::Utc>,
    pub whats_app_number: String,
    pub menu_items: Vec<MenuItemResponse>,
}

pub fn vendor_response(vendor: Vendor) -> VendorResponse {
    VendorResponse {
        id: vendor.id,
        name: vendor.name,
        location: vendor.location,
        specialty: vendor.specialty,
        is_open: vendor.is_open,
        last_updated: vendor.last_updated,
        whats_app_number: vendor.whatsapp_number,
    }
}

// ── GET /api/vendors ─────────────────────────────────────────────────────────

pub async fn list_vendors(
    State(state): State<AppState>,
) -> Result<Json<Vec<VendorResponse>>, ApiServiceError> {
    let usecase = ListVendorsUseCase {
        vendors: state.vendor_repo(),
    };
    let vendors = usecase.execute().await?;
    Ok(Json(vendors.into_iter().map(vendor_response).collect()))
}

// ── GET /api/vendors/open ────────────────────────────────────────────────────

pub async fn list_open_vendors(
    State(state): State<AppState>,
) -> Result<Json<Vec<VendorResponse>>, ApiServiceError> {
    let usecase = ListOpenVendorsUseCase {
        vendors: state.vendor_repo(),
    };
    let vendors = usecase.execute().await?;
    Ok(Json(vendors.into_iter().map(vendor_response).collect()))
}

// ── GET /api/vendors/{vendor_id} ─────────────────────────────────────────────

pub async fn get_vendor(
    State(state): State<AppState>,
    Path(vendor_id): Path<i32>,
) -> Result<Json<VendorDetailResponse>, ApiServiceError> {
    let usecase = GetVendorUseCase {
        vendors: state.vendor_repo(),
        menu: state.menu_repo(),
    };
    let detail = usecase.execute(vendor_id).await?;
    Ok(Json(VendorDetailResponse {
        id: detail.vendor.id,
        name: detail.vendor.name,
        location: detail.vendor.location,
        specialty: detail.vendor.specialty,
        is_open: detail.vendor.is_open,
        last_updated: detail.vendor.last_updated,
        whats_app_number: detail.vendor.whatsapp_number,
        menu_items: detail
            .menu_items
            .into_iter()
            .map(menu_item_response)
            .collect(),
    }))
}

// ── PUT /api/vendors/{vendor_id}/status ──────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub is_open: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdatedResponse {
    pub message: String,
    pub is_open: bool,
}

pub async fn update_status(
    identity: TokenIdentity,
    State(state): State<AppState>,
    Path(vendor_id): Path<i32>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<StatusUpdatedResponse>, ApiServiceError> {
    let usecase = UpdateVendorStatusUseCase {
        vendors: state.vendor_repo(),
    };
    usecase
        .execute(vendor_id, identity.account_id, body.is_open)
        .await?;
    Ok(Json(StatusUpdatedResponse {
        message: "status updated successfully".to_string(),
        is_open: body.is_open,
    }))
}
