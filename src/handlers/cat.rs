use super::{body, parse_id};
use crate::error::AppError;
use crate::model::Cat;
use crate::response::{created, found, success};
use crate::service::CatService;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// GET /api/cat-breeds
pub async fn all_breeds(State(svc): State<CatService>) -> Result<impl IntoResponse, AppError> {
    Ok(success(svc.all_breeds().await?))
}

/// GET /api/cat-breeds/:id
pub async fn breed_by_id(
    State(svc): State<CatService>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    found(svc.breed_by_id(id).await?, || format!("cat breed {}", id))
}

/// GET /api/cats
pub async fn all_cats(State(svc): State<CatService>) -> Result<impl IntoResponse, AppError> {
    Ok(success(svc.all_cats().await?))
}

/// GET /api/cats/:id
pub async fn cat_by_id(
    State(svc): State<CatService>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    found(svc.cat_by_id(id).await?, || format!("cat {}", id))
}

/// POST /api/cats
pub async fn create_cat(
    State(svc): State<CatService>,
    payload: Result<Json<Cat>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let cat = body(payload)?;
    Ok(created(svc.create_cat(&cat).await?))
}

/// PUT /api/cats/:id. The path id wins over any id in the body.
pub async fn update_cat(
    State(svc): State<CatService>,
    Path(id_str): Path<String>,
    payload: Result<Json<Cat>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut cat = body(payload)?;
    cat.id = id;
    svc.update_cat(&cat).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/cats/:id
pub async fn delete_cat(
    State(svc): State<CatService>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    svc.delete_cat(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
