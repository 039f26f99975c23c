use super::{body, parse_id};
use crate::error::AppError;
use crate::model::Dog;
use crate::response::{created, found, success};
use crate::service::DogService;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// GET /api/dog-breeds
pub async fn all_breeds(State(svc): State<DogService>) -> Result<impl IntoResponse, AppError> {
    Ok(success(svc.all_breeds().await?))
}

/// GET /api/dog-breeds/:id
pub async fn breed_by_id(
    State(svc): State<DogService>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    found(svc.breed_by_id(id).await?, || format!("dog breed {}", id))
}

/// GET /api/dogs
pub async fn all_dogs(State(svc): State<DogService>) -> Result<impl IntoResponse, AppError> {
    Ok(success(svc.all_dogs().await?))
}

/// GET /api/dogs/:id
pub async fn dog_by_id(
    State(svc): State<DogService>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    found(svc.dog_by_id(id).await?, || format!("dog {}", id))
}

/// POST /api/dogs
pub async fn create_dog(
    State(svc): State<DogService>,
    payload: Result<Json<Dog>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let dog = body(payload)?;
    Ok(created(svc.create_dog(&dog).await?))
}

/// PUT /api/dogs/:id. The path id wins over any id in the body.
pub async fn update_dog(
    State(svc): State<DogService>,
    Path(id_str): Path<String>,
    payload: Result<Json<Dog>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut dog = body(payload)?;
    dog.id = id;
    svc.update_dog(&dog).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/dogs/:id
pub async fn delete_dog(
    State(svc): State<DogService>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    svc.delete_dog(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
