use crate::constants::{
    EXPENDITURE_TYPE_MATERIAL, EXPENDITURE_TYPE_WORK, PRICE_SCALE, QUANTITY_SCALE,
};
use crate::sections::sections_model::Section;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Expenditure kind, a closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenditureType {
    Work,
    Material,
}

impl ExpenditureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenditureType::Work => EXPENDITURE_TYPE_WORK,
            ExpenditureType::Material => EXPENDITURE_TYPE_MATERIAL,
        }
    }
}

impl From<ExpenditureType> for String {
    fn from(expenditure_type: ExpenditureType) -> Self {
        expenditure_type.as_str().to_string()
    }
}

impl From<&str> for ExpenditureType {
    fn from(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            EXPENDITURE_TYPE_MATERIAL => ExpenditureType::Material,
            _ => ExpenditureType::Work,
        }
    }
}

/// A priced line item owned by a section
#[derive(
    Queryable,
    Identifiable,
    Associations,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(Section))]
#[diesel(table_name = crate::schema::expenditures)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Expenditure {
    pub id: String,
    pub section_id: String,
    pub name: String,
    pub expenditure_type: String,
    pub quantity: String,
    pub unit_price: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Expenditure {
    pub fn kind(&self) -> ExpenditureType {
        ExpenditureType::from(self.expenditure_type.as_str())
    }

    pub fn quantity_decimal(&self) -> Decimal {
        self.quantity.parse().unwrap_or(Decimal::ZERO)
    }

    pub fn unit_price_decimal(&self) -> Decimal {
        self.unit_price.parse().unwrap_or(Decimal::ZERO)
    }

    /// Quantity times unit price, at full precision
    pub fn line_cost(&self) -> Decimal {
        self.quantity_decimal() * self.unit_price_decimal()
    }
}

/// Input for creating an expenditure
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::expenditures)]
#[serde(rename_all = "camelCase")]
pub struct NewExpenditure {
    pub id: Option<String>,
    pub section_id: String,
    pub name: String,
    pub expenditure_type: String,
    pub quantity: String,
    pub unit_price: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Canonical storage form for money values
pub fn format_money(value: Decimal) -> String {
    let mut value = value.round_dp(PRICE_SCALE);
    value.rescale(PRICE_SCALE);
    value.to_string()
}

/// Canonical storage form for quantities
pub fn format_quantity(value: Decimal) -> String {
    let mut value = value.round_dp(QUANTITY_SCALE);
    value.rescale(QUANTITY_SCALE);
    value.to_string()
}
