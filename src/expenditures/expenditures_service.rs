use crate::errors::{Result, ValidationError};
use crate::expenditures::expenditures_model::{Expenditure, NewExpenditure};
use crate::expenditures::expenditures_traits::{
    ExpenditureRepositoryTrait, ExpenditureServiceTrait,
};
use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

pub struct ExpenditureService {
    repository: Arc<dyn ExpenditureRepositoryTrait>,
}

impl ExpenditureService {
    pub fn new(repository: Arc<dyn ExpenditureRepositoryTrait>) -> Self {
        ExpenditureService { repository }
    }
}

/// Multiplier left on a unit price after a percentage discount.
/// Fails on discounts outside `[0, 100]`.
fn discount_factor(discount: Decimal) -> Result<Decimal> {
    if discount < Decimal::ZERO || discount > Decimal::ONE_HUNDRED {
        return Err(ValidationError::InvalidInput(format!(
            "Discount must be between 0 and 100 percent, got {}",
            discount
        ))
        .into());
    }

    Ok(Decimal::ONE - discount / Decimal::ONE_HUNDRED)
}

#[async_trait]
impl ExpenditureServiceTrait for ExpenditureService {
    fn get_expenditures(&self, section_id: &str) -> Result<Vec<Expenditure>> {
        self.repository.get_expenditures(section_id)
    }

    fn get_expenditure_by_id(&self, expenditure_id: &str) -> Result<Expenditure> {
        self.repository.get_expenditure_by_id(expenditure_id)
    }

    async fn create_expenditure(&self, new_expenditure: NewExpenditure) -> Result<Expenditure> {
        self.repository.create_expenditure(new_expenditure).await
    }

    async fn update_expenditure(&self, expenditure: Expenditure) -> Result<Expenditure> {
        self.repository.update_expenditure(expenditure).await
    }

    async fn delete_expenditure(&self, expenditure_id: &str) -> Result<usize> {
        self.repository.delete_expenditure(expenditure_id).await
    }

    async fn update_with_discount(&self, section_id: &str, discount: Decimal) -> Result<usize> {
        let factor = discount_factor(discount)?;
        debug!(
            "Applying {}% discount (factor {}) to section {}",
            discount, factor, section_id
        );
        self.repository.update_with_discount(section_id, factor).await
    }
}
