use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use tower_http::trace::TraceLayer;

use foodcart_core::health::{healthz, readyz};
use foodcart_core::middleware::request_id_layer;

use crate::handlers::{
    auth::{login, me, register},
    menu::{
        batch_toggle_availability, create_menu_item, delete_menu_item, get_available_menu,
        get_categories, get_menu, get_menu_item, replace_menu, toggle_availability,
        update_menu_item,
    },
    vendor::{get_vendor, list_open_vendors, list_vendors, update_status},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        // Vendors
        .route("/api/vendors", get(list_vendors))
        .route("/api/vendors/open", get(list_open_vendors))
        .route("/api/vendors/{vendor_id}", get(get_vendor))
        .route("/api/vendors/{vendor_id}/status", put(update_status))
        // Menu
        .route("/api/vendors/{vendor_id}/menu", get(get_menu))
        .route("/api/vendors/{vendor_id}/menu", post(create_menu_item))
        .route("/api/vendors/{vendor_id}/menu", put(replace_menu))
        .route("/api/vendors/{vendor_id}/menu/available", get(get_available_menu))
        .route("/api/vendors/{vendor_id}/menu/categories", get(get_categories))
        .route(
            "/api/vendors/{vendor_id}/menu/batch/availability",
            patch(batch_toggle_availability),
        )
        .route("/api/vendors/{vendor_id}/menu/{menu_item_id}", get(get_menu_item))
        .route("/api/vendors/{vendor_id}/menu/{menu_item_id}", put(update_menu_item))
        .route(
            "/api/vendors/{vendor_id}/menu/{menu_item_id}",
            delete(delete_menu_item),
        )
        .route(
            "/api/vendors/{vendor_id}/menu/{menu_item_id}/availability",
            patch(toggle_availability),
        )
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
