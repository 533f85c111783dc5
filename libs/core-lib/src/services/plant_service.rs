use crate::{CoreError, Plant, PlantRepository};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::find_scoped;

/// Plant operations, scoped by the owning portfolio.
#[derive(Clone)]
pub struct PlantService {
    plant_repository: Arc<dyn PlantRepository>,
}

impl PlantService {
    pub fn new(plant_repository: Arc<dyn PlantRepository>) -> Self {
        Self { plant_repository }
    }

    pub async fn list_plants_by_portfolio(
        &self,
        portfolio_id: Uuid,
    ) -> Result<Vec<Plant>, CoreError> {
        self.plant_repository.list_by_portfolio(portfolio_id).await
    }

    /// The plant `plant_id`, but only if it belongs to `portfolio_id`.
    pub async fn get_plant_for_portfolio(
        &self,
        portfolio_id: Uuid,
        plant_id: Uuid,
    ) -> Result<Option<Plant>, CoreError> {
        let plants = self.list_plants_by_portfolio(portfolio_id).await?;
        Ok(find_scoped(plants, plant_id, |p| p.id))
    }

    /// Persists `plant` as given. The caller must already have confirmed
    /// that `plant.portfolio_id` names an existing portfolio.
    pub async fn add_plant(&self, plant: Plant) -> Result<Plant, CoreError> {
        self.plant_repository.add(plant).await
    }

    pub async fn delete_plant(&self, plant_id: Uuid) -> Result<(), CoreError> {
        match self.plant_repository.get_by_id(plant_id).await? {
            Some(plant) => self.plant_repository.delete(&plant).await,
            None => {
                debug!("delete of absent plant {} ignored", plant_id);
                Ok(())
            }
        }
    }
}
