use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Classification of a customer, stored as a small integer ordinal.
///
/// Only `0`, `1` and `2` carry a meaning. Other ordinals are accepted and
/// stored untouched so that a record always round-trips unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerRole(pub i32);

impl CustomerRole {
    pub const BASIC: Self = Self(0);
    pub const PREMIUM: Self = Self(1);
    pub const PARTNER: Self = Self(2);

    /// Returns the ordinal as stored.
    pub fn ordinal(self) -> i32 {
        self.0
    }

    /// Returns the role name, or `None` for ordinals without a defined meaning.
    pub fn label(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("basic"),
            1 => Some("premium"),
            2 => Some("partner"),
            _ => None,
        }
    }
}

impl From<i32> for CustomerRole {
    fn from(ordinal: i32) -> Self {
        Self(ordinal)
    }
}

impl fmt::Display for CustomerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{label}"),
            None => write!(f, "role({})", self.0),
        }
    }
}

/// A customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub role: CustomerRole,
    pub email: String,
    pub phone_number: String,
    #[serde(default)]
    pub contacted: bool,
}

impl Customer {
    /// Creates a new, not yet contacted customer with a freshly generated ID.
    pub fn new(
        name: impl Into<String>,
        role: CustomerRole,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            role,
            email: email.into(),
            phone_number: phone_number.into(),
            contacted: false,
        }
    }

    /// Sets a specific ID for this customer (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets the contacted flag.
    pub fn with_contacted(mut self, contacted: bool) -> Self {
        self.contacted = contacted;
        self
    }
}
