pub mod buildings_model;
pub mod buildings_repository;
pub mod buildings_service;
pub mod buildings_traits;

pub use buildings_model::{Building, BuildingCostSummary, NewBuilding};
pub use buildings_repository::BuildingRepository;
pub use buildings_service::BuildingService;
pub use buildings_traits::{BuildingRepositoryTrait, BuildingServiceTrait};
