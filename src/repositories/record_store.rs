//! Record Store sobre PostgreSQL
//!
//! Implementación sqlx del contrato de store. Los listados preservan el
//! orden de inserción (created_at, id) y las escrituras son upsert por id.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::delivery::Delivery;
use crate::models::expense::Expense;
use crate::store::RecordStore;
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn list_deliveries(&self, driver_id: Uuid) -> AppResult<Vec<Delivery>> {
        let deliveries = sqlx::query_as::<_, Delivery>(
            "SELECT * FROM deliveries WHERE driver_id = $1 ORDER BY created_at, id",
        )
        .bind(driver_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(deliveries)
    }

    async fn list_expenses(&self, driver_id: Uuid) -> AppResult<Vec<Expense>> {
        let expenses = sqlx::query_as::<_, Expense>(
            "SELECT * FROM expenses WHERE driver_id = $1 ORDER BY created_at, id",
        )
        .bind(driver_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(expenses)
    }

    async fn find_delivery(&self, id: Uuid) -> AppResult<Option<Delivery>> {
        let delivery = sqlx::query_as::<_, Delivery>("SELECT * FROM deliveries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(delivery)
    }

    async fn save_delivery(&self, delivery: &Delivery) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO deliveries (id, driver_id, date, platform, warehouse, start_time, end_time, start_km, end_km, value, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (id) DO UPDATE
            SET end_time = EXCLUDED.end_time,
                end_km = EXCLUDED.end_km,
                value = EXCLUDED.value,
                status = EXCLUDED.status
            "#,
        )
        .bind(delivery.id)
        .bind(delivery.driver_id)
        .bind(delivery.date)
        .bind(&delivery.platform)
        .bind(&delivery.warehouse)
        .bind(delivery.start_time)
        .bind(delivery.end_time)
        .bind(delivery.start_km)
        .bind(delivery.end_km)
        .bind(delivery.value)
        .bind(delivery.status)
        .bind(delivery.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save_expense(&self, expense: &Expense) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO expenses (id, driver_id, date, category, amount, km, liters, full_tank, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(expense.id)
        .bind(expense.driver_id)
        .bind(expense.date)
        .bind(expense.category)
        .bind(expense.amount)
        .bind(expense.km)
        .bind(expense.liters)
        .bind(expense.full_tank)
        .bind(expense.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
