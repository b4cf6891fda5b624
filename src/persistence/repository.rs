//! Database Repository
//!
//! Data access layer for holdings, positions, and orders.

use super::models::*;
use super::{DatabaseError, DbPool};
use chrono::Utc;
use tracing::{debug, error};

/// Holding repository
pub struct HoldingRepository {
    pool: DbPool,
}

impl HoldingRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a new holding
    pub async fn create(&self, holding: CreateHolding) -> Result<HoldingRecord, DatabaseError> {
        let now = Utc::now();
        let record = sqlx::query_as::<_, HoldingRecord>(
            r#"
            INSERT INTO holdings (id, name, qty, avg, price, net, day, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
            RETURNING *
            "#,
        )
        .bind(&holding.id)
        .bind(&holding.name)
        .bind(holding.qty)
        .bind(holding.avg)
        .bind(holding.price)
        .bind(&holding.net)
        .bind(&holding.day)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to create holding: {}", e);
            DatabaseError::QueryError(format!("Failed to create holding: {}", e))
        })?;

        debug!("Created holding: {} x{}", record.name, record.qty);
        Ok(record)
    }

    /// Get holding by instrument name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<HoldingRecord>, DatabaseError> {
        let record =
            sqlx::query_as::<_, HoldingRecord>("SELECT * FROM holdings WHERE name = ?1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    error!("Failed to get holding {}: {}", name, e);
                    DatabaseError::QueryError(format!("Failed to get holding: {}", e))
                })?;

        Ok(record)
    }

    /// Get all holdings
    pub async fn all(&self) -> Result<Vec<HoldingRecord>, DatabaseError> {
        let records =
            sqlx::query_as::<_, HoldingRecord>("SELECT * FROM holdings ORDER BY name ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    error!("Failed to get holdings: {}", e);
                    DatabaseError::QueryError(format!("Failed to get holdings: {}", e))
                })?;

        Ok(records)
    }

    /// Rewrite a holding's quantity, average cost, and last trade price
    pub async fn update_fill(
        &self,
        name: &str,
        update: UpdateHoldingFill,
    ) -> Result<(), DatabaseError> {
        let now = Utc::now();
        let rows_affected = sqlx::query(
            r#"
            UPDATE holdings
            SET qty = ?1, avg = ?2, price = ?3, updated_at = ?4
            WHERE name = ?5
            "#,
        )
        .bind(update.qty)
        .bind(update.avg)
        .bind(update.price)
        .bind(now)
        .bind(name)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to update holding {}: {}", name, e);
            DatabaseError::QueryError(format!("Failed to update holding: {}", e))
        })?
        .rows_affected();

        if rows_affected == 0 {
            return Err(DatabaseError::QueryError(format!(
                "Holding not found: {}",
                name
            )));
        }

        debug!("Updated holding: {}", name);
        Ok(())
    }

    /// Delete a holding once its quantity reaches zero
    pub async fn delete_by_name(&self, name: &str) -> Result<(), DatabaseError> {
        let rows_affected = sqlx::query("DELETE FROM holdings WHERE name = ?1")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to delete holding {}: {}", name, e);
                DatabaseError::QueryError(format!("Failed to delete holding: {}", e))
            })?
            .rows_affected();

        if rows_affected == 0 {
            return Err(DatabaseError::QueryError(format!(
                "Holding not found: {}",
                name
            )));
        }

        debug!("Deleted holding: {}", name);
        Ok(())
    }
}

/// Position repository
pub struct PositionRepository {
    pool: DbPool,
}

impl PositionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a new position (seeding path; positions have no HTTP write)
    pub async fn create(&self, position: CreatePosition) -> Result<PositionRecord, DatabaseError> {
        let now = Utc::now();
        let record = sqlx::query_as::<_, PositionRecord>(
            r#"
            INSERT INTO positions (id, product, name, qty, avg, price, net, day, is_loss, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            RETURNING *
            "#,
        )
        .bind(&position.id)
        .bind(&position.product)
        .bind(&position.name)
        .bind(position.qty)
        .bind(position.avg)
        .bind(position.price)
        .bind(&position.net)
        .bind(&position.day)
        .bind(position.is_loss)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to create position: {}", e);
            DatabaseError::QueryError(format!("Failed to create position: {}", e))
        })?;

        debug!("Created position: {} for {}", record.id, record.name);
        Ok(record)
    }

    /// Get all positions
    pub async fn all(&self) -> Result<Vec<PositionRecord>, DatabaseError> {
        let records =
            sqlx::query_as::<_, PositionRecord>("SELECT * FROM positions ORDER BY name ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    error!("Failed to get positions: {}", e);
                    DatabaseError::QueryError(format!("Failed to get positions: {}", e))
                })?;

        Ok(records)
    }
}

/// Order repository (append-only log)
pub struct OrderRepository {
    pool: DbPool,
}

impl OrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Append an order to the log
    pub async fn create(&self, order: CreateOrder) -> Result<OrderRecord, DatabaseError> {
        let now = Utc::now();
        let record = sqlx::query_as::<_, OrderRecord>(
            r#"
            INSERT INTO orders (id, name, qty, price, mode, placed_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING *
            "#,
        )
        .bind(&order.id)
        .bind(&order.name)
        .bind(order.qty)
        .bind(order.price)
        .bind(&order.mode)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to create order: {}", e);
            DatabaseError::QueryError(format!("Failed to create order: {}", e))
        })?;

        debug!("Created order: {} {} x{}", record.mode, record.name, record.qty);
        Ok(record)
    }

    /// Get all orders in placement order
    pub async fn all(&self) -> Result<Vec<OrderRecord>, DatabaseError> {
        let records =
            sqlx::query_as::<_, OrderRecord>("SELECT * FROM orders ORDER BY placed_at ASC, rowid ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    error!("Failed to get orders: {}", e);
                    DatabaseError::QueryError(format!("Failed to get orders: {}", e))
                })?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::init_database;

    #[tokio::test]
    async fn test_holding_crud() {
        let pool = init_database("sqlite::memory:").await.unwrap();
        let repo = HoldingRepository::new(pool);

        let holding = CreateHolding {
            id: "test-hold-1".to_string(),
            name: "INFY".to_string(),
            qty: 10.0,
            avg: 1555.45,
            price: 1555.45,
            net: "0%".to_string(),
            day: "0%".to_string(),
        };

        let created = repo.create(holding).await.unwrap();
        assert_eq!(created.name, "INFY");
        assert_eq!(created.avg, 1555.45);

        let fetched = repo.find_by_name("INFY").await.unwrap().unwrap();
        assert_eq!(fetched.id, created.id);

        let update = UpdateHoldingFill {
            qty: 20.0,
            avg: 1600.0,
            price: 1644.55,
        };
        repo.update_fill("INFY", update).await.unwrap();

        let updated = repo.find_by_name("INFY").await.unwrap().unwrap();
        assert_eq!(updated.qty, 20.0);
        assert_eq!(updated.avg, 1600.0);
        assert_eq!(updated.price, 1644.55);

        repo.delete_by_name("INFY").await.unwrap();
        assert!(repo.find_by_name("INFY").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_holding_update_missing_name() {
        let pool = init_database("sqlite::memory:").await.unwrap();
        let repo = HoldingRepository::new(pool);

        let update = UpdateHoldingFill {
            qty: 1.0,
            avg: 1.0,
            price: 1.0,
        };
        let result = repo.update_fill("UNKNOWN", update).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_position_create_and_all() {
        let pool = init_database("sqlite::memory:").await.unwrap();
        let repo = PositionRepository::new(pool);

        let position = CreatePosition {
            id: "test-pos-1".to_string(),
            product: "CNC".to_string(),
            name: "EVEREADY".to_string(),
            qty: 2.0,
            avg: 316.27,
            price: 312.35,
            net: "+0.58%".to_string(),
            day: "-1.24%".to_string(),
            is_loss: true,
        };

        let created = repo.create(position).await.unwrap();
        assert_eq!(created.product, "CNC");
        assert!(created.is_loss);

        let all = repo.all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "EVEREADY");
    }

    #[tokio::test]
    async fn test_order_log_append_only() {
        let pool = init_database("sqlite::memory:").await.unwrap();
        let repo = OrderRepository::new(pool);

        let order = CreateOrder {
            id: "test-order-1".to_string(),
            name: "TCS".to_string(),
            qty: 5.0,
            price: 3194.8,
            mode: "BUY".to_string(),
        };
        repo.create(order).await.unwrap();

        let order = CreateOrder {
            id: "test-order-2".to_string(),
            name: "TCS".to_string(),
            qty: 2.0,
            price: 3200.0,
            mode: "SELL".to_string(),
        };
        repo.create(order).await.unwrap();

        let all = repo.all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].mode, "BUY");
        assert_eq!(all[1].mode, "SELL");
    }

    #[tokio::test]
    async fn test_order_rejects_unknown_mode() {
        let pool = init_database("sqlite::memory:").await.unwrap();
        let repo = OrderRepository::new(pool);

        let order = CreateOrder {
            id: "test-order-1".to_string(),
            name: "TCS".to_string(),
            qty: 5.0,
            price: 3194.8,
            mode: "HOLD".to_string(),
        };
        assert!(repo.create(order).await.is_err());
    }
}
