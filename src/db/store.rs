use axum::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::{Month, NewSubscription, Subscription};

/// Storage capability the subscription service works against. `PgStore` is
/// the production variant; tests substitute an in-memory one.
#[async_trait]
pub trait SubscriptionStore: Send + Sync {
    async fn create(&self, sub: &NewSubscription) -> Result<i64, sqlx::Error>;
    async fn get_by_id(&self, id: i64) -> Result<Option<Subscription>, sqlx::Error>;
    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Subscription>, sqlx::Error>;
    async fn update(&self, id: i64, sub: &NewSubscription) -> Result<(), sqlx::Error>;
    async fn delete(&self, id: i64) -> Result<(), sqlx::Error>;
    async fn sum_for_period(
        &self,
        user_id: Uuid,
        service_name: &str,
        first: Month,
        last: Month,
    ) -> Result<i64, sqlx::Error>;
}

/// Dates are stored with full timestamp precision and truncated back to
/// months on read.
#[derive(Debug, FromRow)]
struct SubscriptionRow {
    id: i64,
    service_name: String,
    price: i32,
    user_id: Uuid,
    start_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
}

impl From<SubscriptionRow> for Subscription {
    fn from(row: SubscriptionRow) -> Self {
        Subscription {
            id: row.id,
            service_name: row.service_name,
            price: row.price,
            user_id: row.user_id,
            start_date: Month::from_datetime(row.start_date),
            end_date: row.end_date.map(Month::from_datetime),
        }
    }
}

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionStore for PgStore {
    async fn create(&self, sub: &NewSubscription) -> Result<i64, sqlx::Error> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO subscriptions (service_name, price, user_id, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&sub.service_name)
        .bind(sub.price)
        .bind(sub.user_id)
        .bind(sub.start_date.first_instant())
        .bind(sub.end_date.map(|m| m.first_instant()))
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Subscription>, sqlx::Error> {
        let row = sqlx::query_as::<_, SubscriptionRow>(
            r#"
            SELECT id, service_name, price, user_id, start_date, end_date
            FROM subscriptions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Subscription::from))
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Subscription>, sqlx::Error> {
        let rows = sqlx::query_as::<_, SubscriptionRow>(
            r#"
            SELECT id, service_name, price, user_id, start_date, end_date
            FROM subscriptions
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Subscription::from).collect())
    }

    async fn update(&self, id: i64, sub: &NewSubscription) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE subscriptions
            SET service_name = $2, price = $3, start_date = $4, end_date = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&sub.service_name)
        .bind(sub.price)
        .bind(sub.start_date.first_instant())
        .bind(sub.end_date.map(|m| m.first_instant()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        // Deleting a row that is already gone is not an error.
        sqlx::query(
            r#"
            DELETE FROM subscriptions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn sum_for_period(
        &self,
        user_id: Uuid,
        service_name: &str,
        first: Month,
        last: Month,
    ) -> Result<i64, sqlx::Error> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COALESCE(SUM(price), 0)
            FROM subscriptions
            WHERE user_id = $1
              AND service_name = $2
              AND start_date BETWEEN $3 AND $4
            "#,
        )
        .bind(user_id)
        .bind(service_name)
        .bind(first.first_instant())
        .bind(last.first_instant())
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}
