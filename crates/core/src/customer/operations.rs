use std::sync::LazyLock;

use regex::Regex;

use super::address::parse_address;
use super::error::ValidationError;
use super::types::Customer;

static PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-() ]+$").expect("Phone number pattern should compile"));

/// Validates the customer's email and returns the parsed `local@domain` address.
///
/// The stored email is left untouched; a display-name form such as
/// `Jorge <jorge@corp.com>` is accepted and yields `jorge@corp.com`.
pub fn validate_email(customer: &Customer) -> Result<String, ValidationError> {
    parse_address(&customer.email)
        .ok_or_else(|| ValidationError::InvalidEmail(customer.email.clone()))
}

/// Validates that the phone number only holds digits, `+`, `-`, parentheses
/// and spaces, and is not empty.
pub fn validate_phone(customer: &Customer) -> Result<(), ValidationError> {
    if !PHONE_NUMBER.is_match(&customer.phone_number) {
        return Err(ValidationError::InvalidPhone(customer.phone_number.clone()));
    }
    Ok(())
}

/// Runs every customer validator, email first.
pub fn validate_customer(customer: &Customer) -> Result<(), ValidationError> {
    validate_email(customer)?;
    validate_phone(customer)
}
