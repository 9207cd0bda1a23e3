//! Functional core of the crm service.
//!
//! Pure data types, validation rules and the storage contract shared by every
//! backend. Nothing in this crate performs I/O.

pub mod customer;
pub mod storage;
