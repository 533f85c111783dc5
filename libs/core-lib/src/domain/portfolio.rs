use crate::CoreError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::required;

/// A named group of plants belonging to one tenant. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
}

impl Portfolio {
    /// Builds a portfolio with a fresh id under `tenant_id`.
    ///
    /// The tenant is not looked up here; callers confirm it exists first.
    pub fn new(tenant_id: Uuid, name: impl Into<String>) -> Result<Self, CoreError> {
        Ok(Self {
            id: Uuid::new_v4(),
            tenant_id,
            name: required("Portfolio name", name.into())?,
        })
    }
}
