use crate::buildings::buildings_model::{Building, BuildingCostSummary, NewBuilding};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for building repository operations
#[async_trait]
pub trait BuildingRepositoryTrait: Send + Sync {
    fn get_buildings(&self) -> Result<Vec<BuildingCostSummary>>;
    fn get_building_by_id(&self, building_id: &str) -> Result<Building>;
    async fn create_building(&self, new_building: NewBuilding) -> Result<Building>;
    async fn update_building(&self, building: Building) -> Result<Building>;
    async fn delete_building(&self, building_id: &str) -> Result<usize>;
}

/// Trait for building service operations
#[async_trait]
pub trait BuildingServiceTrait: Send + Sync {
    fn get_buildings(&self) -> Result<Vec<BuildingCostSummary>>;
    fn get_building_by_id(&self, building_id: &str) -> Result<Building>;
    async fn create_building(&self, new_building: NewBuilding) -> Result<Building>;
    async fn update_building(&self, building: Building) -> Result<Building>;
    async fn delete_building(&self, building_id: &str) -> Result<usize>;
}
