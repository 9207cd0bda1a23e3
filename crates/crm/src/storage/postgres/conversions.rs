//! PostgreSQL row conversion functions.

use sqlx::postgres::PgRow;
use sqlx::Row;

use crm_core::customer::{Customer, CustomerRole};

/// Convert a PostgreSQL row to a Customer.
///
/// Expected columns: id, name, role, email, phone_number, contacted
pub fn row_to_customer(row: &PgRow) -> sqlx::Result<Customer> {
    let role: i32 = row.try_get("role")?;

    Ok(Customer {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        role: CustomerRole::from(role),
        email: row.try_get("email")?,
        phone_number: row.try_get("phone_number")?,
        contacted: row.try_get("contacted")?,
    })
}
