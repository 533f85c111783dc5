use crate::CoreError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::required;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub name: String,
}

impl Plant {
    /// Builds a plant with a fresh id under `portfolio_id`. The portfolio is not checked.
    pub fn new(portfolio_id: Uuid, name: impl Into<String>) -> Result<Self, CoreError> {
        Ok(Self {
            id: Uuid::new_v4(),
            portfolio_id,
            name: required("Plant name", name.into())?,
        })
    }
}
