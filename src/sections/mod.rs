pub mod sections_model;
pub mod sections_repository;
pub mod sections_service;
pub mod sections_traits;

pub use sections_model::{NewSection, Section, SectionWithBudget};
pub use sections_repository::SectionRepository;
pub use sections_service::SectionService;
pub use sections_traits::{SectionRepositoryTrait, SectionServiceTrait};
