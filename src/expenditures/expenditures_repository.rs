use crate::db::{get_connection, WriteHandle};
use crate::errors::{Result, ValidationError};
use crate::expenditures::expenditures_model::{
    format_money, format_quantity, Expenditure, ExpenditureType, NewExpenditure,
};
use crate::expenditures::expenditures_traits::ExpenditureRepositoryTrait;
use crate::schema::expenditures;
use async_trait::async_trait;
use chrono::Utc;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sql_types::{Double, Text};
use diesel::SqliteConnection;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

pub struct ExpenditureRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl ExpenditureRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        ExpenditureRepository { pool, writer }
    }
}

#[async_trait]
impl ExpenditureRepositoryTrait for ExpenditureRepository {
    fn get_expenditures(&self, section_id: &str) -> Result<Vec<Expenditure>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(expenditures::table
            .filter(expenditures::section_id.eq(section_id))
            .load::<Expenditure>(&mut conn)?)
    }

    fn get_expenditure_by_id(&self, expenditure_id: &str) -> Result<Expenditure> {
        let mut conn = get_connection(&self.pool)?;
        Ok(expenditures::table
            .find(expenditure_id)
            .first::<Expenditure>(&mut conn)?)
    }

    async fn create_expenditure(&self, new_expenditure: NewExpenditure) -> Result<Expenditure> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expenditure> {
                let quantity: Decimal = new_expenditure.quantity.parse()?;
                let unit_price: Decimal = new_expenditure.unit_price.parse()?;
                let expenditure_type =
                    ExpenditureType::from(new_expenditure.expenditure_type.as_str());

                let now = Utc::now().to_rfc3339();
                let id = new_expenditure
                    .id
                    .clone()
                    .unwrap_or_else(|| Uuid::new_v4().to_string());

                let record = NewExpenditure {
                    id: Some(id.clone()),
                    expenditure_type: expenditure_type.as_str().to_string(),
                    quantity: format_quantity(quantity),
                    unit_price: format_money(unit_price),
                    created_at: Some(now.clone()),
                    updated_at: Some(now),
                    ..new_expenditure
                };

                diesel::insert_into(expenditures::table)
                    .values(&record)
                    .execute(conn)?;

                Ok(expenditures::table.find(id).first::<Expenditure>(conn)?)
            })
            .await
    }

    async fn update_expenditure(&self, expenditure: Expenditure) -> Result<Expenditure> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expenditure> {
                let mut expenditure = expenditure;
                let quantity: Decimal = expenditure.quantity.parse()?;
                let unit_price: Decimal = expenditure.unit_price.parse()?;

                expenditure.expenditure_type =
                    ExpenditureType::from(expenditure.expenditure_type.as_str())
                        .as_str()
                        .to_string();
                expenditure.quantity = format_quantity(quantity);
                expenditure.unit_price = format_money(unit_price);
                expenditure.updated_at = Utc::now().to_rfc3339();

                diesel::update(expenditures::table.find(&expenditure.id))
                    .set(&expenditure)
                    .execute(conn)?;

                Ok(expenditures::table
                    .find(&expenditure.id)
                    .first::<Expenditure>(conn)?)
            })
            .await
    }

    async fn delete_expenditure(&self, expenditure_id: &str) -> Result<usize> {
        let id_owned = expenditure_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(expenditures::table.find(id_owned)).execute(conn)?)
            })
            .await
    }

    async fn update_with_discount(&self, section_id: &str, factor: Decimal) -> Result<usize> {
        let section_id = section_id.to_string();
        let factor = factor.to_f64().ok_or_else(|| {
            ValidationError::InvalidInput(format!("Discount factor {} is not representable", factor))
        })?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                // Single set-based statement: every row is rescaled from its
                // own prior price, and the statement runs inside the writer's
                // transaction, so readers never observe a partially
                // discounted section.
                let updated = diesel::update(
                    expenditures::table.filter(expenditures::section_id.eq(section_id)),
                )
                .set((
                    expenditures::unit_price.eq(sql::<Text>("printf('%.2f', unit_price * ")
                        .bind::<Double, _>(factor)
                        .sql(")")),
                    expenditures::updated_at.eq(Utc::now().to_rfc3339()),
                ))
                .execute(conn)?;

                Ok(updated)
            })
            .await
    }
}
