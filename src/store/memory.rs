//! Record Store en memoria
//!
//! Implementación del contrato sobre vectores protegidos por RwLock.
//! La usan los tests de controllers; no persiste nada.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::delivery::Delivery;
use crate::models::expense::Expense;
use crate::utils::errors::AppResult;

use super::RecordStore;

#[derive(Clone, Default)]
pub struct MemoryStore {
    deliveries: Arc<RwLock<Vec<Delivery>>>,
    expenses: Arc<RwLock<Vec<Expense>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_deliveries(&self, driver_id: Uuid) -> AppResult<Vec<Delivery>> {
        let deliveries = self.deliveries.read().await;
        Ok(deliveries
            .iter()
            .filter(|d| d.driver_id == driver_id)
            .cloned()
            .collect())
    }

    async fn list_expenses(&self, driver_id: Uuid) -> AppResult<Vec<Expense>> {
        let expenses = self.expenses.read().await;
        Ok(expenses
            .iter()
            .filter(|e| e.driver_id == driver_id)
            .cloned()
            .collect())
    }

    async fn find_delivery(&self, id: Uuid) -> AppResult<Option<Delivery>> {
        let deliveries = self.deliveries.read().await;
        Ok(deliveries.iter().find(|d| d.id == id).cloned())
    }

    async fn save_delivery(&self, delivery: &Delivery) -> AppResult<()> {
        let mut deliveries = self.deliveries.write().await;
        match deliveries.iter_mut().find(|d| d.id == delivery.id) {
            Some(existing) => *existing = delivery.clone(),
            None => deliveries.push(delivery.clone()),
        }
        Ok(())
    }

    async fn save_expense(&self, expense: &Expense) -> AppResult<()> {
        let mut expenses = self.expenses.write().await;
        match expenses.iter_mut().find(|e| e.id == expense.id) {
            Some(existing) => *existing = expense.clone(),
            None => expenses.push(expense.clone()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::delivery::DeliveryStatus;
    use chrono::{NaiveDate, NaiveTime, Utc};
    use rust_decimal::Decimal;

    fn delivery(driver_id: Uuid) -> Delivery {
        Delivery {
            id: Uuid::new_v4(),
            driver_id,
            date: NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
            platform: "UberEats".to_string(),
            warehouse: None,
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end_time: None,
            start_km: 100,
            end_km: None,
            value: None,
            status: DeliveryStatus::Ongoing,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_save_is_upsert_by_id() {
        let store = MemoryStore::new();
        let driver_id = Uuid::new_v4();
        let mut d = delivery(driver_id);

        store.save_delivery(&d).await.unwrap();
        d.status = DeliveryStatus::Completed;
        d.end_km = Some(150);
        d.value = Some(Decimal::from(9000));
        store.save_delivery(&d).await.unwrap();

        let listed = store.list_deliveries(driver_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].status, DeliveryStatus::Completed);
    }

    #[tokio::test]
    async fn test_listing_filters_by_driver() {
        let store = MemoryStore::new();
        let driver_a = Uuid::new_v4();
        let driver_b = Uuid::new_v4();

        store.save_delivery(&delivery(driver_a)).await.unwrap();
        store.save_delivery(&delivery(driver_b)).await.unwrap();

        assert_eq!(store.list_deliveries(driver_a).await.unwrap().len(), 1);
        assert_eq!(store.list_deliveries(driver_b).await.unwrap().len(), 1);
    }
}
