use crate::CoreError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::required;

/// Top of the hierarchy. Owns zero or more portfolios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: Uuid,
    pub name: String,
    pub country: String,
}

impl Tenant {
    /// Builds a tenant with a fresh id. Name and country are required.
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Result<Self, CoreError> {
        Ok(Self {
            id: Uuid::new_v4(),
            name: required("Tenant name", name.into())?,
            country: required("Tenant country", country.into())?,
        })
    }
}
