// API module - HTTP endpoints

pub mod health;
pub mod stats;
pub mod subscriptions;

use sqlx::PgPool;

use crate::services::subscriptions::SubscriptionService;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub service: SubscriptionService,
}
