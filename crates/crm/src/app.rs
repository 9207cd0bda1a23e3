use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        customers::{
            create_customer, delete_customer, get_customer, list_customers, update_customer,
        },
        health::livez,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/customers",
            get(list_customers)
                .post(create_customer)
                .patch(update_customer),
        )
        .route(
            "/customers/{id}",
            get(get_customer).delete(delete_customer),
        );

    Router::new()
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
