use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::subscriptions::parse_user_id;
use crate::api::AppState;
use crate::error::AppError;
use crate::models::Month;

#[derive(Debug, Deserialize)]
pub struct StatsRequest {
    pub user_id: String,
    pub service_name: String,
    pub first_date: String,
    pub last_date: String,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub user_id: Uuid,
    pub total_sum: i64,
}

/// Total cost of a user's subscriptions to one service over an inclusive
/// month range.
async fn period_total(
    State(state): State<AppState>,
    Json(body): Json<StatsRequest>,
) -> Result<Json<StatsResponse>, AppError> {
    let user_id = parse_user_id(&body.user_id)?;
    let first = Month::parse(&body.first_date)?;
    let last = Month::parse(&body.last_date)?;

    let total_sum = state
        .service
        .calculate_total(user_id, &body.service_name, first, last)
        .await?;

    Ok(Json(StatsResponse { user_id, total_sum }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/stats", post(period_total))
}
