use crate::buildings::buildings_model::{Building, BuildingCostSummary, NewBuilding};
use crate::buildings::buildings_traits::BuildingRepositoryTrait;
use crate::constants::PRICE_SCALE;
use crate::db::{get_connection, WriteHandle};
use crate::errors::Result;
use crate::expenditures::expenditures_model::ExpenditureType;
use crate::schema::{buildings, expenditures, sections};
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

pub struct BuildingRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl BuildingRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        BuildingRepository { pool, writer }
    }
}

#[async_trait]
impl BuildingRepositoryTrait for BuildingRepository {
    fn get_buildings(&self) -> Result<Vec<BuildingCostSummary>> {
        let mut conn = get_connection(&self.pool)?;

        let all_buildings: Vec<Building> = buildings::table.load::<Building>(&mut conn)?;

        // One joined pass over every expenditure, bucketed by building and type.
        let rows: Vec<(String, String, String, String)> = expenditures::table
            .inner_join(sections::table)
            .select((
                sections::building_id,
                expenditures::expenditure_type,
                expenditures::quantity,
                expenditures::unit_price,
            ))
            .load(&mut conn)?;

        let mut totals: HashMap<String, (Decimal, Decimal)> = HashMap::new();
        for (building_id, expenditure_type, quantity, unit_price) in rows {
            let quantity: Decimal = quantity.parse().unwrap_or(Decimal::ZERO);
            let unit_price: Decimal = unit_price.parse().unwrap_or(Decimal::ZERO);
            let line_cost = quantity * unit_price;

            let entry = totals
                .entry(building_id)
                .or_insert((Decimal::ZERO, Decimal::ZERO));
            match ExpenditureType::from(expenditure_type.as_str()) {
                ExpenditureType::Work => entry.0 += line_cost,
                ExpenditureType::Material => entry.1 += line_cost,
            }
        }

        Ok(all_buildings
            .into_iter()
            .map(|building| {
                let (works, materials) = totals
                    .get(&building.id)
                    .copied()
                    .unwrap_or((Decimal::ZERO, Decimal::ZERO));
                BuildingCostSummary {
                    id: building.id,
                    works_amount: works.round_dp(PRICE_SCALE),
                    materials_amount: materials.round_dp(PRICE_SCALE),
                }
            })
            .collect())
    }

    fn get_building_by_id(&self, building_id: &str) -> Result<Building> {
        let mut conn = get_connection(&self.pool)?;
        Ok(buildings::table
            .find(building_id)
            .first::<Building>(&mut conn)?)
    }

    async fn create_building(&self, new_building: NewBuilding) -> Result<Building> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Building> {
                let now = Utc::now().to_rfc3339();
                let id = new_building
                    .id
                    .clone()
                    .unwrap_or_else(|| Uuid::new_v4().to_string());

                let record = NewBuilding {
                    id: Some(id.clone()),
                    created_at: Some(now.clone()),
                    updated_at: Some(now),
                    ..new_building
                };

                diesel::insert_into(buildings::table)
                    .values(&record)
                    .execute(conn)?;

                Ok(buildings::table.find(id).first::<Building>(conn)?)
            })
            .await
    }

    async fn update_building(&self, building: Building) -> Result<Building> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Building> {
                let mut building = building;
                building.updated_at = Utc::now().to_rfc3339();

                diesel::update(buildings::table.find(&building.id))
                    .set(&building)
                    .execute(conn)?;

                Ok(buildings::table.find(&building.id).first::<Building>(conn)?)
            })
            .await
    }

    async fn delete_building(&self, building_id: &str) -> Result<usize> {
        let id_owned = building_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(buildings::table.find(id_owned)).execute(conn)?)
            })
            .await
    }
}
