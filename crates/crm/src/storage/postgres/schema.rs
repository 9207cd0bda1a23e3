//! PostgreSQL schema definition and SQL query constants.
//!
//! Pure data, no I/O. The server expects the table to exist already; the DDL
//! is applied by the live-database tests only.

/// SQL statement to create the customers table.
#[cfg_attr(not(test), allow(dead_code))]
pub const CREATE_CUSTOMERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS customers (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    role INTEGER NOT NULL,
    email TEXT NOT NULL UNIQUE,
    phone_number TEXT NOT NULL,
    contacted BOOLEAN NOT NULL DEFAULT FALSE
)
"#;

pub const INSERT_CUSTOMER: &str = r#"
INSERT INTO customers (id, name, role, email, phone_number, contacted)
VALUES ($1, $2, $3, $4, $5, $6)
"#;

pub const SELECT_CUSTOMER_BY_ID: &str = r#"
SELECT id, name, role, email, phone_number, contacted
FROM customers
WHERE id = $1
"#;

pub const SELECT_ALL_CUSTOMERS: &str = r#"
SELECT id, name, role, email, phone_number, contacted
FROM customers
"#;

pub const UPDATE_CUSTOMER: &str = r#"
UPDATE customers
SET name = $2, role = $3, email = $4, phone_number = $5, contacted = $6
WHERE id = $1
"#;

pub const DELETE_CUSTOMER: &str = r#"
DELETE FROM customers
WHERE id = $1
"#;
