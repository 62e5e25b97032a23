use estimate_core::buildings::{BuildingRepository, BuildingService, NewBuilding};
use estimate_core::db;
use estimate_core::expenditures::{
    ExpenditureRepository, ExpenditureService, ExpenditureType, NewExpenditure,
};
use estimate_core::sections::{NewSection, SectionRepository, SectionService};
use std::sync::Arc;
use tempfile::TempDir;

pub struct TestContext {
    pub buildings: BuildingService,
    pub sections: SectionService,
    pub expenditures: ExpenditureService,
    // Keeps the database directory alive for the duration of the test
    _data_dir: TempDir,
}

/// Builds a fresh database in a temp directory and wires the services over
/// it. Must be called from within a tokio runtime (the writer is a spawned
/// task).
pub fn setup() -> TestContext {
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let db_path =
        db::init(data_dir.path().to_str().unwrap()).expect("Failed to initialize database");
    let pool = db::create_pool(&db_path).expect("Failed to create database pool");
    db::run_migrations(&pool).expect("Failed to run migrations");

    let writer = db::spawn_writer((*pool).clone());

    let buildings = BuildingService::new(Arc::new(BuildingRepository::new(
        pool.clone(),
        writer.clone(),
    )));
    let sections = SectionService::new(Arc::new(SectionRepository::new(
        pool.clone(),
        writer.clone(),
    )));
    let expenditures = ExpenditureService::new(Arc::new(ExpenditureRepository::new(
        pool.clone(),
        writer.clone(),
    )));

    TestContext {
        buildings,
        sections,
        expenditures,
        _data_dir: data_dir,
    }
}

pub fn new_building(name: &str) -> NewBuilding {
    NewBuilding {
        id: None,
        name: name.to_string(),
        created_at: None,
        updated_at: None,
    }
}

pub fn new_section(building_id: &str, parent_id: Option<&str>, name: &str) -> NewSection {
    NewSection {
        id: None,
        building_id: building_id.to_string(),
        parent_id: parent_id.map(|id| id.to_string()),
        name: name.to_string(),
        created_at: None,
        updated_at: None,
    }
}

pub fn new_expenditure(
    section_id: &str,
    expenditure_type: ExpenditureType,
    name: &str,
    quantity: &str,
    unit_price: &str,
) -> NewExpenditure {
    NewExpenditure {
        id: None,
        section_id: section_id.to_string(),
        name: name.to_string(),
        expenditure_type: String::from(expenditure_type),
        quantity: quantity.to_string(),
        unit_price: unit_price.to_string(),
        created_at: None,
        updated_at: None,
    }
}
