use super::{body, parse_id};
use crate::error::AppError;
use crate::model::Breeder;
use crate::response::{created, found, success};
use crate::service::BreederService;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// GET /api/breeders
pub async fn all_breeders(State(svc): State<BreederService>) -> Result<impl IntoResponse, AppError> {
    Ok(success(svc.all_breeders().await?))
}

/// GET /api/breeders/:id
pub async fn breeder_by_id(
    State(svc): State<BreederService>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    found(svc.breeder_by_id(id).await?, || format!("breeder {}", id))
}

/// POST /api/breeders
pub async fn create_breeder(
    State(svc): State<BreederService>,
    payload: Result<Json<Breeder>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let breeder = body(payload)?;
    Ok(created(svc.create_breeder(&breeder).await?))
}

/// PUT /api/breeders/:id
pub async fn update_breeder(
    State(svc): State<BreederService>,
    Path(id_str): Path<String>,
    payload: Result<Json<Breeder>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut breeder = body(payload)?;
    breeder.id = id;
    svc.update_breeder(&breeder).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/breeders/:id
pub async fn delete_breeder(
    State(svc): State<BreederService>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    svc.delete_breeder(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
