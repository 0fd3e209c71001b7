//! Route definitions for the Stockroom backend

use axum::{
    middleware,
    routing::get,
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
///
/// The state is threaded through so the auth middleware can verify tokens
/// against the configured secret.
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Protected routes - inventory items and consumption
        .nest("/items", item_routes(state.clone()))
        // Protected routes - locations
        .nest("/locations", location_routes(state.clone()))
        // Protected routes - reporting (role-gated in the handlers)
        .nest("/reports", report_routes(state))
}

/// Inventory item routes (protected)
fn item_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route(
            "/:item_id",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
        .route(
            "/:item_id/consumption",
            get(handlers::list_item_consumption).post(handlers::record_consumption),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Location routes (protected)
fn location_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_locations).post(handlers::create_location),
        )
        .route(
            "/:location_id",
            get(handlers::get_location)
                .put(handlers::update_location)
                .delete(handlers::delete_location),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Reporting routes (protected; manager/admin only)
fn report_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/overview", get(handlers::get_reports_overview))
        .route(
            "/inventory-status",
            get(handlers::get_inventory_status_report),
        )
        .route(
            "/consumption-trends",
            get(handlers::get_consumption_trends_report),
        )
        .route("/expiry", get(handlers::get_expiry_report))
        .route(
            "/location-utilization",
            get(handlers::get_location_utilization_report),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
