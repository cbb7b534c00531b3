use std::sync::Arc;

use uuid::Uuid;

use crate::db::store::SubscriptionStore;
use crate::error::AppError;
use crate::models::{Month, NewSubscription, Subscription};
use crate::services::validation::validate_price;

/// Owns the subscription business rules. Stateless between calls; all state
/// lives in the store.
#[derive(Clone)]
pub struct SubscriptionService {
    store: Arc<dyn SubscriptionStore>,
}

impl SubscriptionService {
    pub fn new(store: Arc<dyn SubscriptionStore>) -> Self {
        Self { store }
    }

    /// Validates the record and inserts it, returning the assigned id.
    /// Validation failures never reach the store.
    pub async fn create(&self, sub: NewSubscription) -> Result<i64, AppError> {
        if let Err(e) = validate_price(sub.price) {
            tracing::warn!(price = sub.price, "rejected create with out-of-range price");
            return Err(e);
        }

        let id = self.store.create(&sub).await.map_err(|e| {
            tracing::error!(error = %e, "failed to insert subscription");
            AppError::Database(e)
        })?;

        tracing::info!(id, user_id = %sub.user_id, "subscription created");
        Ok(id)
    }

    pub async fn read(&self, id: i64) -> Result<Subscription, AppError> {
        match self.store.get_by_id(id).await? {
            Some(sub) => Ok(sub),
            None => {
                tracing::warn!(id, "subscription not found");
                Err(AppError::NotFound)
            }
        }
    }

    /// Full replace: every mutable field of the stored row is overwritten
    /// with the caller's values, never merged. The owner is not a mutable
    /// field and is kept from the stored row.
    pub async fn update(&self, id: i64, sub: NewSubscription) -> Result<(), AppError> {
        if let Err(e) = validate_price(sub.price) {
            tracing::warn!(price = sub.price, "rejected update with out-of-range price");
            return Err(e);
        }

        let existing = self.store.get_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(id, "subscription to update does not exist");
            AppError::NotFound
        })?;

        let replacement = NewSubscription {
            service_name: sub.service_name,
            price: sub.price,
            user_id: existing.user_id,
            start_date: sub.start_date,
            end_date: sub.end_date,
        };
        self.store.update(id, &replacement).await?;

        tracing::info!(id, "subscription updated");
        Ok(())
    }

    /// Deleting an id that never existed reports success (idempotent
    /// delete).
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.store.delete(id).await?;
        tracing::debug!(id, "subscription deleted");
        Ok(())
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Subscription>, AppError> {
        Ok(self.store.get_by_user(user_id).await?)
    }

    /// Sums the prices of the user's subscriptions to `service_name` whose
    /// start month falls within `[first, last]` inclusive. No matches is 0,
    /// not an error.
    pub async fn calculate_total(
        &self,
        user_id: Uuid,
        service_name: &str,
        first: Month,
        last: Month,
    ) -> Result<i64, AppError> {
        let total = self
            .store
            .sum_for_period(user_id, service_name, first, last)
            .await?;

        tracing::debug!(%user_id, service_name, total, "calculated period total");
        Ok(total)
    }
}
