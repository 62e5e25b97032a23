pub mod expenditures_model;
pub mod expenditures_repository;
pub mod expenditures_service;
pub mod expenditures_traits;

pub use expenditures_model::{Expenditure, ExpenditureType, NewExpenditure};
pub use expenditures_repository::ExpenditureRepository;
pub use expenditures_service::ExpenditureService;
pub use expenditures_traits::{ExpenditureRepositoryTrait, ExpenditureServiceTrait};
