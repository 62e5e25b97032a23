use crate::constants::PRICE_SCALE;
use crate::db::{get_connection, WriteHandle};
use crate::errors::{Result, ValidationError};
use crate::schema::{expenditures, sections};
use crate::sections::sections_model::{NewSection, Section, SectionWithBudget};
use crate::sections::sections_traits::SectionRepositoryTrait;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

pub struct SectionRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl SectionRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        SectionRepository { pool, writer }
    }
}

#[async_trait]
impl SectionRepositoryTrait for SectionRepository {
    fn get_parent_sections(&self, building_id: &str) -> Result<Vec<SectionWithBudget>> {
        let mut conn = get_connection(&self.pool)?;

        let roots: Vec<Section> = sections::table
            .filter(sections::building_id.eq(building_id))
            .filter(sections::parent_id.is_null())
            .load::<Section>(&mut conn)?;

        // One joined pass over the child sections' expenditures, grouped by
        // parent. Costs multiply at full precision; only the sums are rounded.
        let rows: Vec<(Option<String>, String, String)> = sections::table
            .inner_join(expenditures::table)
            .filter(sections::parent_id.is_not_null())
            .select((
                sections::parent_id,
                expenditures::quantity,
                expenditures::unit_price,
            ))
            .load(&mut conn)?;

        let mut budgets: HashMap<String, Decimal> = HashMap::new();
        for (parent_id, quantity, unit_price) in rows {
            if let Some(parent_id) = parent_id {
                let quantity: Decimal = quantity.parse().unwrap_or(Decimal::ZERO);
                let unit_price: Decimal = unit_price.parse().unwrap_or(Decimal::ZERO);
                *budgets.entry(parent_id).or_insert(Decimal::ZERO) += quantity * unit_price;
            }
        }

        Ok(roots
            .into_iter()
            .map(|section| {
                let total = budgets.get(&section.id).copied().unwrap_or(Decimal::ZERO);
                SectionWithBudget {
                    id: section.id,
                    building_id: section.building_id,
                    parent_id: section.parent_id,
                    name: section.name,
                    total_budget: total.round_dp(PRICE_SCALE),
                }
            })
            .collect())
    }

    fn get_sections(&self, building_id: &str) -> Result<Vec<Section>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(sections::table
            .filter(sections::building_id.eq(building_id))
            .load::<Section>(&mut conn)?)
    }

    fn get_section_by_id(&self, section_id: &str) -> Result<Section> {
        let mut conn = get_connection(&self.pool)?;
        Ok(sections::table
            .find(section_id)
            .first::<Section>(&mut conn)?)
    }

    async fn create_section(&self, new_section: NewSection) -> Result<Section> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Section> {
                // The parent must itself be a root section.
                if let Some(parent_id) = new_section.parent_id.as_deref() {
                    let parent: Section =
                        sections::table.find(parent_id).first::<Section>(conn)?;
                    if parent.parent_id.is_some() {
                        return Err(ValidationError::InvalidInput(
                            "Section nesting is limited to 2 levels".to_string(),
                        )
                        .into());
                    }
                }

                let now = Utc::now().to_rfc3339();
                let id = new_section
                    .id
                    .clone()
                    .unwrap_or_else(|| Uuid::new_v4().to_string());

                let record = NewSection {
                    id: Some(id.clone()),
                    created_at: Some(now.clone()),
                    updated_at: Some(now),
                    ..new_section
                };

                diesel::insert_into(sections::table)
                    .values(&record)
                    .execute(conn)?;

                Ok(sections::table.find(id).first::<Section>(conn)?)
            })
            .await
    }

    async fn update_section(&self, section: Section) -> Result<Section> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Section> {
                let mut section = section;
                section.updated_at = Utc::now().to_rfc3339();

                // The nesting limit applies to creation only; re-parenting an
                // existing section is not re-validated.
                diesel::update(sections::table.find(&section.id))
                    .set(&section)
                    .execute(conn)?;

                Ok(sections::table.find(&section.id).first::<Section>(conn)?)
            })
            .await
    }

    async fn delete_section(&self, section_id: &str) -> Result<usize> {
        let id_owned = section_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(sections::table.find(id_owned)).execute(conn)?)
            })
            .await
    }
}
