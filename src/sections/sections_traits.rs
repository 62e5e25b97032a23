use crate::errors::Result;
use crate::sections::sections_model::{NewSection, Section, SectionWithBudget};
use async_trait::async_trait;

/// Trait for section repository operations
#[async_trait]
pub trait SectionRepositoryTrait: Send + Sync {
    fn get_parent_sections(&self, building_id: &str) -> Result<Vec<SectionWithBudget>>;
    fn get_sections(&self, building_id: &str) -> Result<Vec<Section>>;
    fn get_section_by_id(&self, section_id: &str) -> Result<Section>;
    async fn create_section(&self, new_section: NewSection) -> Result<Section>;
    async fn update_section(&self, section: Section) -> Result<Section>;
    async fn delete_section(&self, section_id: &str) -> Result<usize>;
}

/// Trait for section service operations
#[async_trait]
pub trait SectionServiceTrait: Send + Sync {
    fn get_parent_sections(&self, building_id: &str) -> Result<Vec<SectionWithBudget>>;
    fn get_sections(&self, building_id: &str) -> Result<Vec<Section>>;
    fn get_section_by_id(&self, section_id: &str) -> Result<Section>;
    async fn create_section(&self, new_section: NewSection) -> Result<Section>;
    async fn update_section(&self, section: Section) -> Result<Section>;
    async fn delete_section(&self, section_id: &str) -> Result<usize>;
}
