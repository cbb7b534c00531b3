use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::month::Month;

/// A record of a user's recurring paid service with a start month and an
/// optional end month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: i64,
    pub service_name: String,
    pub price: i32,
    pub user_id: Uuid,
    pub start_date: Month,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Month>,
}

/// Caller-supplied fields for create and full-replace update. The id is
/// assigned by the store and never reused.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubscription {
    pub service_name: String,
    pub price: i32,
    pub user_id: Uuid,
    pub start_date: Month,
    pub end_date: Option<Month>,
}
