use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crm_core::customer::{
    validate_customer, CreateCustomerRequest, Customer, CustomerCreatedResponse,
};
use crm_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState};

/// List all customers (GET /api/customers).
pub async fn list_customers(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, AppError> {
    let customers = state.customer_repo.get_customers().await?;
    Ok(Json(customers))
}

/// Create a new customer (POST /api/customers).
///
/// The server assigns the ID and returns it with a 201.
pub async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<CreateCustomerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CustomerCreatedResponse>), AppError> {
    let Json(payload) = payload?;
    let customer = payload.into_customer();

    validate_customer(&customer).map_err(RepositoryError::from)?;
    state.customer_repo.create_customer(&customer).await?;

    tracing::info!(customer_id = %customer.id, role = %customer.role, "Created customer");

    Ok((
        StatusCode::CREATED,
        Json(CustomerCreatedResponse { id: customer.id }),
    ))
}

/// Get a single customer by ID (GET /api/customers/{id}).
pub async fn get_customer(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Customer>, AppError> {
    let Path(id) = id?;
    let customer = state.customer_repo.get_customer(id).await?;
    Ok(Json(customer))
}

/// Replace a customer's fields (PATCH /api/customers).
///
/// The `id` in the body selects the record.
pub async fn update_customer(
    State(state): State<AppState>,
    payload: Result<Json<Customer>, JsonRejection>,
) -> Result<Json<Customer>, AppError> {
    let Json(customer) = payload?;

    validate_customer(&customer).map_err(RepositoryError::from)?;
    state.customer_repo.update_customer(&customer).await?;

    tracing::info!(customer_id = %customer.id, "Updated customer");

    Ok(Json(customer))
}

/// Delete a customer by ID (DELETE /api/customers/{id}).
pub async fn delete_customer(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.customer_repo.delete_customer(id).await?;

    tracing::info!(customer_id = %id, "Deleted customer");

    Ok(StatusCode::NO_CONTENT)
}
