use crate::buildings::buildings_model::Building;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A grouping node in a building's estimate tree.
///
/// Nesting is limited to two levels: a root section (no parent) and its
/// child sections. By convention only child sections own expenditures.
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
#[diesel(belongs_to(Building))]
#[diesel(table_name = crate::schema::sections)]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub building_id: String,
    pub parent_id: Option<String>,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Section {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Input for creating a section
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::sections)]
#[serde(rename_all = "camelCase")]
pub struct NewSection {
    pub id: Option<String>,
    pub building_id: String,
    pub parent_id: Option<String>,
    pub name: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Root section annotated with the total cost of its children's expenditures
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectionWithBudget {
    pub id: String,
    pub building_id: String,
    pub parent_id: Option<String>,
    pub name: String,
    pub total_budget: Decimal,
}
