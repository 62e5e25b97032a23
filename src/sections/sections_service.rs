use crate::errors::Result;
use crate::sections::sections_model::{NewSection, Section, SectionWithBudget};
use crate::sections::sections_traits::{SectionRepositoryTrait, SectionServiceTrait};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

pub struct SectionService {
    repository: Arc<dyn SectionRepositoryTrait>,
}

impl SectionService {
    pub fn new(repository: Arc<dyn SectionRepositoryTrait>) -> Self {
        SectionService { repository }
    }
}

#[async_trait]
impl SectionServiceTrait for SectionService {
    fn get_parent_sections(&self, building_id: &str) -> Result<Vec<SectionWithBudget>> {
        self.repository.get_parent_sections(building_id)
    }

    fn get_sections(&self, building_id: &str) -> Result<Vec<Section>> {
        self.repository.get_sections(building_id)
    }

    fn get_section_by_id(&self, section_id: &str) -> Result<Section> {
        self.repository.get_section_by_id(section_id)
    }

    async fn create_section(&self, new_section: NewSection) -> Result<Section> {
        debug!(
            "Creating section '{}' in building {}",
            new_section.name, new_section.building_id
        );
        self.repository.create_section(new_section).await
    }

    async fn update_section(&self, section: Section) -> Result<Section> {
        self.repository.update_section(section).await
    }

    async fn delete_section(&self, section_id: &str) -> Result<usize> {
        self.repository.delete_section(section_id).await
    }
}
