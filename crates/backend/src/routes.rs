use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{api::handlers, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES (PUBLIC)
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route(
            "/api/system/auth/refresh",
            post(system::handlers::auth::refresh),
        )
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout),
        )
        // System auth routes (protected)
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // ========================================
        // BUSINESS ROUTES (JWT required)
        // ========================================
        .merge(business_routes().route_layer(middleware::from_fn(
            system::auth::middleware::require_auth,
        )))
}

fn business_routes() -> Router {
    Router::new()
        // A001 Influencer handlers
        .route(
            "/api/influencer",
            get(handlers::a001_influencer::list_all).post(handlers::a001_influencer::upsert),
        )
        .route(
            "/api/influencer/:id",
            get(handlers::a001_influencer::get_by_id).delete(handlers::a001_influencer::delete),
        )
        .route(
            "/api/influencer/testdata",
            post(handlers::a001_influencer::insert_test_data),
        )
        // A002 Product handlers
        .route(
            "/api/product",
            get(handlers::a002_product::list_all).post(handlers::a002_product::upsert),
        )
        .route(
            "/api/product/:id",
            get(handlers::a002_product::get_by_id).delete(handlers::a002_product::delete),
        )
        .route(
            "/api/product/testdata",
            post(handlers::a002_product::insert_test_data),
        )
        // A003 Cooperation plan handlers
        .route(
            "/api/cooperation_plan",
            get(handlers::a003_cooperation_plan::list_all)
                .post(handlers::a003_cooperation_plan::upsert),
        )
        .route(
            "/api/cooperation_plan/:id",
            get(handlers::a003_cooperation_plan::get_by_id)
                .delete(handlers::a003_cooperation_plan::delete),
        )
        // A004 Fulfillment record handlers
        .route(
            "/api/fulfillment",
            get(handlers::a004_fulfillment_record::list_all)
                .post(handlers::a004_fulfillment_record::upsert),
        )
        .route(
            "/api/fulfillment/:id",
            get(handlers::a004_fulfillment_record::get_by_id)
                .delete(handlers::a004_fulfillment_record::delete),
        )
        .route(
            "/api/fulfillment/:id/advance-targets",
            get(handlers::a004_fulfillment_record::advance_targets),
        )
        .route(
            "/api/fulfillment/:id/advance",
            post(handlers::a004_fulfillment_record::advance),
        )
        // A005 Tag handlers
        .route(
            "/api/tag",
            get(handlers::a005_tag::list_all).post(handlers::a005_tag::upsert),
        )
        .route(
            "/api/tag/:id",
            get(handlers::a005_tag::get_by_id).delete(handlers::a005_tag::delete),
        )
        // D400 BD performance ranking
        .route(
            "/api/dashboards/bd_ranking",
            get(handlers::d400_bd_ranking::get_ranking),
        )
}
