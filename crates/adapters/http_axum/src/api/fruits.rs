//! JSON handlers for fruits.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use fruithub_app::ports::{FruitRepository, ProviderRepository};
use fruithub_domain::error::ValidationError;
use fruithub_domain::fruit::{Fruit, NewFruit};
use fruithub_domain::id::{FruitId, ProviderId};

use super::parse_id;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Request body for creating or replacing a fruit.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FruitRequest {
    #[serde(default)]
    pub name: String,
    pub weight_in_kilos: Option<i32>,
    pub provider_id: Option<i64>,
}

impl FruitRequest {
    /// Field rules are checked by the service; only absent fields fail here.
    fn into_new_fruit(self) -> Result<NewFruit, ValidationError> {
        let weight = self.weight_in_kilos.ok_or(ValidationError::MissingWeight)?;
        let provider_id = self.provider_id.ok_or(ValidationError::MissingProvider)?;
        Ok(NewFruit::new(
            self.name,
            weight,
            ProviderId::from_i64(provider_id),
        ))
    }
}

/// Query string accepted by the list endpoint.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub provider_id: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Fruit>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Fruit>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Fruit>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /fruits`, optionally narrowed to one provider with `?providerId=`.
pub async fn list<FR, PR>(
    State(state): State<AppState<FR, PR>>,
    Query(query): Query<ListQuery>,
) -> Result<ListResponse, ApiError>
where
    FR: FruitRepository + Send + Sync + 'static,
    PR: ProviderRepository + Send + Sync + 'static,
{
    let fruits = match query.provider_id {
        Some(raw) => {
            let provider_id: ProviderId = parse_id(&raw)?;
            state
                .fruit_service
                .list_fruits_by_provider(provider_id)
                .await?
        }
        None => state.fruit_service.list_fruits().await?,
    };
    Ok(ListResponse::Ok(Json(fruits)))
}

/// `GET /fruits/:id`
pub async fn get<FR, PR>(
    State(state): State<AppState<FR, PR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    FR: FruitRepository + Send + Sync + 'static,
    PR: ProviderRepository + Send + Sync + 'static,
{
    let fruit_id: FruitId = parse_id(&id)?;
    let fruit = state.fruit_service.get_fruit(fruit_id).await?;
    Ok(GetResponse::Ok(Json(fruit)))
}

/// `POST /fruits`
pub async fn create<FR, PR>(
    State(state): State<AppState<FR, PR>>,
    ApiJson(req): ApiJson<FruitRequest>,
) -> Result<CreateResponse, ApiError>
where
    FR: FruitRepository + Send + Sync + 'static,
    PR: ProviderRepository + Send + Sync + 'static,
{
    let fruit = req.into_new_fruit()?;
    let created = state.fruit_service.create_fruit(fruit).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /fruits/:id`
pub async fn update<FR, PR>(
    State(state): State<AppState<FR, PR>>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<FruitRequest>,
) -> Result<GetResponse, ApiError>
where
    FR: FruitRepository + Send + Sync + 'static,
    PR: ProviderRepository + Send + Sync + 'static,
{
    let fruit_id: FruitId = parse_id(&id)?;
    let changes = req.into_new_fruit()?;
    let updated = state.fruit_service.update_fruit(fruit_id, changes).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /fruits/:id`
pub async fn delete<FR, PR>(
    State(state): State<AppState<FR, PR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    FR: FruitRepository + Send + Sync + 'static,
    PR: ProviderRepository + Send + Sync + 'static,
{
    let fruit_id: FruitId = parse_id(&id)?;
    state.fruit_service.delete_fruit(fruit_id).await?;
    Ok(DeleteResponse::NoContent)
}
