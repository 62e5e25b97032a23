use crate::errors::Result;
use crate::expenditures::expenditures_model::{Expenditure, NewExpenditure};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait for expenditure repository operations
#[async_trait]
pub trait ExpenditureRepositoryTrait: Send + Sync {
    fn get_expenditures(&self, section_id: &str) -> Result<Vec<Expenditure>>;
    fn get_expenditure_by_id(&self, expenditure_id: &str) -> Result<Expenditure>;
    async fn create_expenditure(&self, new_expenditure: NewExpenditure) -> Result<Expenditure>;
    async fn update_expenditure(&self, expenditure: Expenditure) -> Result<Expenditure>;
    async fn delete_expenditure(&self, expenditure_id: &str) -> Result<usize>;

    /// Multiplies every unit price in the section by the given factor,
    /// in a single set-based statement.
    async fn update_with_discount(&self, section_id: &str, factor: Decimal) -> Result<usize>;
}

/// Trait for expenditure service operations
#[async_trait]
pub trait ExpenditureServiceTrait: Send + Sync {
    fn get_expenditures(&self, section_id: &str) -> Result<Vec<Expenditure>>;
    fn get_expenditure_by_id(&self, expenditure_id: &str) -> Result<Expenditure>;
    async fn create_expenditure(&self, new_expenditure: NewExpenditure) -> Result<Expenditure>;
    async fn update_expenditure(&self, expenditure: Expenditure) -> Result<Expenditure>;
    async fn delete_expenditure(&self, expenditure_id: &str) -> Result<usize>;

    /// Applies a percentage discount to every unit price in the section.
    /// `discount` must lie within `[0, 100]`. Returns the number of
    /// updated rows.
    async fn update_with_discount(&self, section_id: &str, discount: Decimal) -> Result<usize>;
}
