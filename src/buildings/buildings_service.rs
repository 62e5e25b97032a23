use crate::buildings::buildings_model::{Building, BuildingCostSummary, NewBuilding};
use crate::buildings::buildings_traits::{BuildingRepositoryTrait, BuildingServiceTrait};
use crate::errors::Result;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

pub struct BuildingService {
    repository: Arc<dyn BuildingRepositoryTrait>,
}

impl BuildingService {
    pub fn new(repository: Arc<dyn BuildingRepositoryTrait>) -> Self {
        BuildingService { repository }
    }
}

#[async_trait]
impl BuildingServiceTrait for BuildingService {
    fn get_buildings(&self) -> Result<Vec<BuildingCostSummary>> {
        self.repository.get_buildings()
    }

    fn get_building_by_id(&self, building_id: &str) -> Result<Building> {
        self.repository.get_building_by_id(building_id)
    }

    async fn create_building(&self, new_building: NewBuilding) -> Result<Building> {
        debug!("Creating building '{}'", new_building.name);
        self.repository.create_building(new_building).await
    }

    async fn update_building(&self, building: Building) -> Result<Building> {
        self.repository.update_building(building).await
    }

    async fn delete_building(&self, building_id: &str) -> Result<usize> {
        self.repository.delete_building(building_id).await
    }
}
