use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::AppState;
use crate::error::AppError;
use crate::models::{Month, NewSubscription, Subscription};

/// Wire shape shared by create and update. The user id and dates arrive as
/// strings and are parsed before the service sees them.
#[derive(Debug, Deserialize)]
pub struct SubscriptionBody {
    pub service_name: String,
    pub price: i32,
    pub user_id: String,
    pub start_date: String,
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateSubscriptionResponse {
    pub id: i64,
    pub service_name: String,
    pub price: i32,
    pub user_id: Uuid,
    pub start_date: Month,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Month>,
}

impl SubscriptionBody {
    fn into_domain(self) -> Result<NewSubscription, AppError> {
        let user_id = parse_user_id(&self.user_id)?;
        let start_date = Month::parse(&self.start_date)?;
        let end_date = self.end_date.as_deref().map(Month::parse).transpose()?;

        Ok(NewSubscription {
            service_name: self.service_name,
            price: self.price,
            user_id,
            start_date,
            end_date,
        })
    }
}

pub(crate) fn parse_user_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| {
        tracing::warn!(user_id = raw, "malformed user id");
        AppError::InvalidIdentifier(format!("malformed user id: {raw}"))
    })
}

async fn create(
    State(state): State<AppState>,
    Json(body): Json<SubscriptionBody>,
) -> Result<(StatusCode, Json<CreateSubscriptionResponse>), AppError> {
    let sub = body.into_domain()?;
    let id = state.service.create(sub.clone()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateSubscriptionResponse {
            id,
            service_name: sub.service_name,
            price: sub.price,
            user_id: sub.user_id,
            start_date: sub.start_date,
            end_date: sub.end_date,
        }),
    ))
}

async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Subscription>, AppError> {
    Ok(Json(state.service.read(id).await?))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<SubscriptionBody>,
) -> Result<StatusCode, AppError> {
    let sub = body.into_domain()?;
    state.service.update(id, sub).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Subscription>>, AppError> {
    let user_id = parse_user_id(&user_id)?;
    Ok(Json(state.service.list_by_user(user_id).await?))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/subscriptions", post(create))
        .route("/api/v1/subscriptions/list/:user_id", get(list_by_user))
        .route(
            "/api/v1/subscriptions/:id",
            get(get_by_id).put(update).delete(delete_by_id),
        )
}
