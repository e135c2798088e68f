//! JSON handlers for providers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use fruithub_app::ports::{FruitRepository, ProviderRepository};
use fruithub_domain::id::ProviderId;
use fruithub_domain::provider::{NewProvider, Provider};

use super::parse_id;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Request body for creating or replacing a provider.
#[derive(Deserialize)]
pub struct ProviderRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
}

impl From<ProviderRequest> for NewProvider {
    fn from(req: ProviderRequest) -> Self {
        Self::new(req.name, req.country)
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Provider>>),
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
    Ok(Json<Provider>),
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
    Created(Json<Provider>),
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

/// `GET /providers`
pub async fn list<FR, PR>(
    State(state): State<AppState<FR, PR>>,
) -> Result<ListResponse, ApiError>
where
    FR: FruitRepository + Send + Sync + 'static,
    PR: ProviderRepository + Send + Sync + 'static,
{
    let providers = state.provider_service.list_providers().await?;
    Ok(ListResponse::Ok(Json(providers)))
}

/// `GET /providers/:id`
pub async fn get<FR, PR>(
    State(state): State<AppState<FR, PR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    FR: FruitRepository + Send + Sync + 'static,
    PR: ProviderRepository + Send + Sync + 'static,
{
    let provider_id: ProviderId = parse_id(&id)?;
    let provider = state.provider_service.get_provider(provider_id).await?;
    Ok(GetResponse::Ok(Json(provider)))
}

/// `POST /providers`
pub async fn create<FR, PR>(
    State(state): State<AppState<FR, PR>>,
    ApiJson(req): ApiJson<ProviderRequest>,
) -> Result<CreateResponse, ApiError>
where
    FR: FruitRepository + Send + Sync + 'static,
    PR: ProviderRepository + Send + Sync + 'static,
{
    let created = state.provider_service.create_provider(req.into()).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /providers/:id`
pub async fn update<FR, PR>(
    State(state): State<AppState<FR, PR>>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<ProviderRequest>,
) -> Result<GetResponse, ApiError>
where
    FR: FruitRepository + Send + Sync + 'static,
    PR: ProviderRepository + Send + Sync + 'static,
{
    let provider_id: ProviderId = parse_id(&id)?;
    let updated = state
        .provider_service
        .update_provider(provider_id, req.into())
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /providers/:id`
pub async fn delete<FR, PR>(
    State(state): State<AppState<FR, PR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    FR: FruitRepository + Send + Sync + 'static,
    PR: ProviderRepository + Send + Sync + 'static,
{
    let provider_id: ProviderId = parse_id(&id)?;
    state.provider_service.delete_provider(provider_id).await?;
    Ok(DeleteResponse::NoContent)
}
